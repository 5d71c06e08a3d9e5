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

//! I-type: three variants sharing the same `imm[11:0]` slot at inst[31:20].
//!
//! - arithmetic (`addi`/`slti`/`sltiu`/`xori`/`ori`/`andi`): `rd, rs1, imm`.
//! - shift (`slli`/`srli`/`srai`): `rd, rs1, shamt`, `funct7` in the high
//!   7 bits of the immediate slot instead of a sign-extended immediate.
//! - load (`lb`/`lh`/`lw`/`lbu`/`lhu`): `rd, imm(rs1)`.
//! - `jalr`: `rd, rs1, imm`.

use super::utility_functions::{check_signed_range, check_unsigned_range, field, pack};
use super::{expect_operand_count, parse_immediate, resolve_register};
use crate::errors::AssemblyError;

/// Packs `opcode | rd | funct3 | rs1 | imm[11:0]`, splitting the 12-bit
/// immediate across the register-encoded `rs2`/`funct7` slots `pack` exposes.
fn pack_with_immediate12(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i64) -> u32 {
    let imm = field(imm, 12);
    pack(opcode, rd, funct3, rs1, imm & 0x1F, (imm >> 5) & 0x7F)
}

pub fn encode_arith(operands: &[String], opcode: u32, funct3: u32, line: usize) -> Result<u32, AssemblyError> {
    let operands = expect_operand_count(operands, 3, line)?;
    let rd = resolve_register(&operands[0], line)?;
    let rs1 = resolve_register(&operands[1], line)?;
    let imm = parse_immediate(&operands[2], line)?;
    check_signed_range(imm, 12, line)?;
    Ok(pack_with_immediate12(opcode, rd, funct3, rs1, imm))
}

pub fn encode_shift(
    operands: &[String],
    opcode: u32,
    funct3: u32,
    funct7: u32,
    line: usize,
) -> Result<u32, AssemblyError> {
    let operands = expect_operand_count(operands, 3, line)?;
    let rd = resolve_register(&operands[0], line)?;
    let rs1 = resolve_register(&operands[1], line)?;
    let shamt = parse_immediate(&operands[2], line)?;
    check_unsigned_range(shamt, 5, line)?;
    Ok(pack(opcode, rd, funct3, rs1, shamt as u32, funct7))
}

pub fn encode_load(operands: &[String], opcode: u32, funct3: u32, line: usize) -> Result<u32, AssemblyError> {
    let operands = expect_operand_count(operands, 3, line)?;
    let rd = resolve_register(&operands[0], line)?;
    let imm = parse_immediate(&operands[1], line)?;
    let rs1 = resolve_register(&operands[2], line)?;
    check_signed_range(imm, 12, line)?;
    Ok(pack_with_immediate12(opcode, rd, funct3, rs1, imm))
}

pub fn encode_jalr(operands: &[String], opcode: u32, funct3: u32, line: usize) -> Result<u32, AssemblyError> {
    let operands = expect_operand_count(operands, 3, line)?;
    let rd = resolve_register(&operands[0], line)?;
    let rs1 = resolve_register(&operands[1], line)?;
    let imm = parse_immediate(&operands[2], line)?;
    check_signed_range(imm, 12, line)?;
    Ok(pack_with_immediate12(opcode, rd, funct3, rs1, imm))
}
