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

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AssemblyError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Syntax error on line {line}: {reason}")]
    Syntax { line: usize, reason: String },

    #[error("Operand error on line {line}: {reason}")]
    Operand { line: usize, reason: String },

    #[error("Symbol error on line {line}: {reason}")]
    Symbol { line: usize, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AssemblyError {
    pub fn syntax(line: usize, reason: impl Into<String>) -> Self {
        Self::Syntax { line, reason: reason.into() }
    }

    pub fn operand(line: usize, reason: impl Into<String>) -> Self {
        Self::Operand { line, reason: reason.into() }
    }

    pub fn symbol(line: usize, reason: impl Into<String>) -> Self {
        Self::Symbol { line, reason: reason.into() }
    }
}
