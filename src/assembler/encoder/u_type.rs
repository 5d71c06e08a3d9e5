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

//! U-type: `rd, imm20`. `lui`/`auipc`. The 20-bit immediate lands verbatim
//! at inst[31:12], unlike every other format's sign-extended or scattered
//! layout.

use super::utility_functions::check_unsigned_range;
use super::{expect_operand_count, parse_immediate, resolve_register};
use crate::errors::AssemblyError;

pub fn encode(operands: &[String], opcode: u32, line: usize) -> Result<u32, AssemblyError> {
    let operands = expect_operand_count(operands, 2, line)?;
    let rd = resolve_register(&operands[0], line)?;
    let imm = parse_immediate(&operands[1], line)?;
    check_unsigned_range(imm, 20, line)?;

    Ok((opcode & 0x7F) | ((rd & 0x1F) << 7) | ((imm as u32) << 12))
}
