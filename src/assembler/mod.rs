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

pub mod encoder;
pub mod pass1;
pub mod symbol_table;

use crate::errors::AssemblyError;
use crate::format::{self, OutputFormat};
use crate::normalizer;

/// Result of pass two: the rendered output text and the instruction count
/// pass two itself produced, to be checked against pass one's count by the
/// caller.
pub struct Pass2Result {
    pub output: String,
    pub instruction_count: u32,
}

/// Runs pass two over `source` with an already-built symbol table, encoding
/// and rendering one output line per recognised instruction.
pub fn generate_output(
    source: &str,
    symbols: &symbol_table::SymbolTable,
    format: OutputFormat,
) -> Result<Pass2Result, AssemblyError> {
    let mut output = String::new();
    let mut counter: u32 = 0;

    for (offset, raw_line) in source.lines().enumerate() {
        let line = normalizer::normalize(offset + 1, raw_line);

        if line.mnemonic.is_none() {
            continue;
        }

        let index = counter + 1;
        let word = encoder::encode(&line, index, symbols)?;
        output.push_str(&format::render(word, format));
        output.push('\n');
        counter += 1;
    }

    Ok(Pass2Result { output, instruction_count: counter })
}
