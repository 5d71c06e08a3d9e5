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

//! Turns one raw source line into a canonical token sequence: an optional
//! label, an optional mnemonic, and zero or more operand tokens.
//!
//! The steps below run in a fixed order and are shared verbatim by both
//! assembler passes, so pass one and pass two can never disagree about
//! where a label or mnemonic sits on a line.

/// A single normalised source line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedLine {
    pub line_number: usize,
    pub label: Option<String>,
    pub mnemonic: Option<String>,
    pub operands: Vec<String>,
}

impl NormalizedLine {
    /// True for lines with neither a label nor an instruction (blank or
    /// comment-only source lines).
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.mnemonic.is_none()
    }
}

/// Normalises one raw source line. `line_number` is 1-based, for diagnostics.
pub fn normalize(line_number: usize, raw: &str) -> NormalizedLine {
    let without_comment = strip_comment(raw);
    let uncommad = without_comment.replace(',', " ");

    let (label, body) = split_label(&uncommad);
    let unbracketed = split_memory_operand(&body);

    let tokens: Vec<&str> = unbracketed.split_whitespace().collect();
    let (mnemonic, operands) = match tokens.split_first() {
        Some((mnemonic, rest)) => (
            Some(mnemonic.to_lowercase()),
            rest.iter().map(|s| s.to_string()).collect(),
        ),
        None => (None, Vec::new()),
    };

    NormalizedLine { line_number, label, mnemonic, operands }
}

/// Strips anything from the first `#` onward.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    }
}

/// Splits at the first `:`. The prefix, trimmed, is a label if present;
/// the suffix is the remaining instruction body.
fn split_label(line: &str) -> (Option<String>, String) {
    match line.find(':') {
        Some(index) => {
            let label = line[..index].trim();
            let body = line[index + 1..].to_string();
            let label = if label.is_empty() { None } else { Some(label.to_string()) };
            (label, body)
        }
        None => (None, line.to_string()),
    }
}

/// Splits `imm(reg)` operand syntax into two whitespace-separated tokens by
/// turning `(` into a separator and dropping the trailing `)`.
fn split_memory_operand(body: &str) -> String {
    body.replace('(', " ").replace(')', "")
}
