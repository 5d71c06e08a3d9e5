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

//! S-type: `rs2, imm(rs1)` (store source value first, base register inside
//! the parenthesised operand). `sb`/`sh`/`sw`.
//!
//! `rs2` is the value written to memory, `rs1` the base address register —
//! the ISA's roles, not the reversed pairing an older reference
//! implementation used.

use super::utility_functions::{check_signed_range, field, pack};
use super::{expect_operand_count, parse_immediate, resolve_register};
use crate::errors::AssemblyError;

pub fn encode(operands: &[String], opcode: u32, funct3: u32, line: usize) -> Result<u32, AssemblyError> {
    let operands = expect_operand_count(operands, 3, line)?;
    let rs2 = resolve_register(&operands[0], line)?;
    let imm = parse_immediate(&operands[1], line)?;
    let rs1 = resolve_register(&operands[2], line)?;
    check_signed_range(imm, 12, line)?;

    let imm = field(imm, 12);
    Ok(pack(opcode, imm & 0x1F, funct3, rs1, rs2, (imm >> 5) & 0x7F))
}
