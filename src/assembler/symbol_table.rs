/*
Copyright 2026 The rv32i-asm Authors

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Maps label names to the 1-based index of the instruction they prefix.

use crate::errors::AssemblyError;
use std::collections::HashMap;

/// Label name → instruction index. Iteration order is never observed.
pub type SymbolTable = HashMap<String, u32>;

/// Inserts a label, failing if it was already defined.
pub fn insert(table: &mut SymbolTable, label: &str, index: u32, line: usize) -> Result<(), AssemblyError> {
    if table.insert(label.to_string(), index).is_some() {
        return Err(AssemblyError::symbol(line, format!("duplicate label `{label}`")));
    }
    Ok(())
}

/// Looks up a label, failing if it was never defined.
pub fn resolve(table: &SymbolTable, label: &str, line: usize) -> Result<u32, AssemblyError> {
    table
        .get(label)
        .copied()
        .ok_or_else(|| AssemblyError::symbol(line, format!("undefined label `{label}`")))
}
