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

pub mod assembler;
pub mod errors;
pub mod file_reader;
pub mod format;
pub mod immediate;
pub mod normalizer;
pub mod registers;

use std::path::Path;

use anyhow::{Context, Result};
use file_reader::FileReader;
pub use format::OutputFormat;

/// Reads `source_path` through `reader`, runs both assembler passes, and
/// returns the fully rendered output text — one line per emitted
/// instruction, in source order.
pub fn assemble<F: FileReader>(source_path: &Path, format: OutputFormat, reader: &F) -> Result<String> {
    let source = reader
        .read_to_string(source_path)
        .with_context(|| format!("Failed while reading {}", source_path.display()))?;

    let pass1 = assembler::pass1::run(&source).context("Failed during pass one (symbol resolution)")?;

    let pass2 = assembler::generate_output(&source, &pass1.symbols, format)
        .context("Failed during pass two (encoding)")?;

    if pass2.instruction_count != pass1.instruction_count {
        return Err(errors::AssemblyError::Internal(format!(
            "pass one emitted {} instructions but pass two emitted {}",
            pass1.instruction_count, pass2.instruction_count
        ))
        .into());
    }

    Ok(pass2.output)
}
