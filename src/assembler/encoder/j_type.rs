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

//! J-type: `jal rd, label`. The byte offset `(target - here) * 4` is
//! scattered across inst[31], inst[30:21], inst[20], inst[19:12].

use super::utility_functions::{check_signed_range, scatter_j_immediate};
use super::{expect_operand_count, resolve_register};
use crate::assembler::symbol_table::{self, SymbolTable};
use crate::errors::AssemblyError;

pub fn encode(
    operands: &[String],
    opcode: u32,
    index: u32,
    symbols: &SymbolTable,
    line: usize,
) -> Result<u32, AssemblyError> {
    let operands = expect_operand_count(operands, 2, line)?;
    let rd = resolve_register(&operands[0], line)?;
    let target = symbol_table::resolve(symbols, &operands[1], line)?;

    let offset = (target as i64 - index as i64) * 4;
    check_signed_range(offset, 21, line)?;

    Ok((opcode & 0x7F) | ((rd & 0x1F) << 7) | scatter_j_immediate(offset))
}
