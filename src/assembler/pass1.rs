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

//! First pass: walks normalised source lines, binding each label to the
//! 1-based index of the instruction it prefixes. Does not encode anything.

use super::encoder::is_recognised_mnemonic;
use super::symbol_table::{self, SymbolTable};
use crate::errors::AssemblyError;
use crate::normalizer::{self, NormalizedLine};

/// Result of pass one: the populated symbol table and the final instruction
/// count, to be checked against pass two's own count once it completes.
pub struct Pass1Result {
    pub symbols: SymbolTable,
    pub instruction_count: u32,
}

pub fn run(source: &str) -> Result<Pass1Result, AssemblyError> {
    let mut symbols = SymbolTable::new();
    let mut counter: u32 = 0;

    for (offset, raw_line) in source.lines().enumerate() {
        let line: NormalizedLine = normalizer::normalize(offset + 1, raw_line);

        if let Some(label) = &line.label {
            symbol_table::insert(&mut symbols, label, counter + 1, line.line_number)?;
        }

        if let Some(mnemonic) = &line.mnemonic {
            if is_recognised_mnemonic(mnemonic) {
                counter += 1;
            }
            // Unrecognised mnemonics are skipped here; they surface as a
            // SyntaxError in pass two, once the symbol table is complete.
        }
    }

    Ok(Pass1Result { symbols, instruction_count: counter })
}
