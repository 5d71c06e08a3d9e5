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

//! R-type: `rd, rs1, rs2`. `add`/`sub`/`and`/`or`/`xor`/`sll`/`srl`/`sra`/
//! `slt`/`sltu`.

use super::utility_functions::pack;
use super::{expect_operand_count, resolve_register};
use crate::errors::AssemblyError;

pub fn encode(operands: &[String], opcode: u32, funct3: u32, funct7: u32, line: usize) -> Result<u32, AssemblyError> {
    let operands = expect_operand_count(operands, 3, line)?;
    let rd = resolve_register(&operands[0], line)?;
    let rs1 = resolve_register(&operands[1], line)?;
    let rs2 = resolve_register(&operands[2], line)?;
    Ok(pack(opcode, rd, funct3, rs1, rs2, funct7))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::encoder::constants::{FUNCT7_ALT, FUNCT7_ZERO, OPCODE_R};

    #[test]
    fn add_matches_known_vector() {
        let operands = vec!["x1".to_string(), "x2".to_string(), "x3".to_string()];
        let word = encode(&operands, OPCODE_R, 0b000, FUNCT7_ZERO, 1).unwrap();
        assert_eq!(word, 0x003100B3);
    }

    #[test]
    fn sub_sets_alt_funct7() {
        let operands = vec!["x1".to_string(), "x2".to_string(), "x3".to_string()];
        let word = encode(&operands, OPCODE_R, 0b000, FUNCT7_ALT, 1).unwrap();
        assert_eq!(word >> 25, 0b0100000);
    }

    #[test]
    fn wrong_operand_count_is_an_error() {
        let operands = vec!["x1".to_string(), "x2".to_string()];
        assert!(encode(&operands, OPCODE_R, 0, 0, 1).is_err());
    }

    #[test]
    fn invalid_register_is_an_error() {
        let operands = vec!["x1".to_string(), "x2".to_string(), "zzz".to_string()];
        assert!(encode(&operands, OPCODE_R, 0, 0, 1).is_err());
    }
}
