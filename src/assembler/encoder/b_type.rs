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

//! B-type: `rs1, rs2, label`. `beq`/`bne`/`blt`/`bge`/`bltu`/`bgeu`.
//!
//! The byte offset `(target - here) * 4` is scattered across inst[31],
//! inst[30:25], inst[11:8], inst[7] — bit 12 always derived as
//! `(offset & 0x1000) << 19` from the unshifted offset, uniformly across
//! every branch mnemonic.

use super::utility_functions::{check_signed_range, pack, scatter_b_immediate};
use super::{expect_operand_count, resolve_register};
use crate::assembler::symbol_table::{self, SymbolTable};
use crate::errors::AssemblyError;

pub fn encode(
    operands: &[String],
    opcode: u32,
    funct3: u32,
    index: u32,
    symbols: &SymbolTable,
    line: usize,
) -> Result<u32, AssemblyError> {
    let operands = expect_operand_count(operands, 3, line)?;
    let rs1 = resolve_register(&operands[0], line)?;
    let rs2 = resolve_register(&operands[1], line)?;
    let target = symbol_table::resolve(symbols, &operands[2], line)?;

    let offset = (target as i64 - index as i64) * 4;
    check_signed_range(offset, 13, line)?;

    let base = pack(opcode, 0, funct3, rs1, rs2, 0);
    Ok(base | scatter_b_immediate(offset))
}
