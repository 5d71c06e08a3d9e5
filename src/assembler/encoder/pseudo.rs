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

//! Rewrites pseudo-instruction mnemonics into the base-form mnemonic and
//! operand list the mnemonic table already knows how to encode, so the
//! dispatcher in `mod.rs` never has to special-case them.

use super::expect_operand_count;
use crate::errors::AssemblyError;

/// True for the set of mnemonics `expand` rewrites.
pub fn is_pseudo(mnemonic: &str) -> bool {
    matches!(mnemonic, "li" | "mv" | "j" | "jr" | "ret" | "bgt" | "ble")
}

/// `Some((mnemonic, operands))` for the rewritten base instruction, or
/// `None` if `mnemonic` is not a pseudo-instruction.
pub fn expand(mnemonic: &str, operands: &[String], line: usize) -> Result<Option<(String, Vec<String>)>, AssemblyError> {
    let rewritten = match mnemonic {
        "li" => {
            let operands = expect_operand_count(operands, 2, line)?;
            ("addi".to_string(), vec![operands[0].clone(), "x0".to_string(), operands[1].clone()])
        }
        "mv" => {
            let operands = expect_operand_count(operands, 2, line)?;
            ("addi".to_string(), vec![operands[0].clone(), operands[1].clone(), "0".to_string()])
        }
        "j" => {
            let operands = expect_operand_count(operands, 1, line)?;
            ("jal".to_string(), vec!["x0".to_string(), operands[0].clone()])
        }
        "jr" => {
            let operands = expect_operand_count(operands, 1, line)?;
            ("jalr".to_string(), vec!["x0".to_string(), operands[0].clone(), "0".to_string()])
        }
        "ret" => {
            expect_operand_count(operands, 0, line)?;
            ("jalr".to_string(), vec!["x0".to_string(), "ra".to_string(), "0".to_string()])
        }
        "bgt" => {
            let operands = expect_operand_count(operands, 3, line)?;
            ("blt".to_string(), vec![operands[1].clone(), operands[0].clone(), operands[2].clone()])
        }
        "ble" => {
            let operands = expect_operand_count(operands, 3, line)?;
            ("bge".to_string(), vec![operands[1].clone(), operands[0].clone(), operands[2].clone()])
        }
        _ => return Ok(None),
    };
    Ok(Some(rewritten))
}
