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

//! Pass-two instruction encoder.
//!
//! Dispatch is table-driven: each mnemonic maps to a tagged [`Form`] plus
//! the `(opcode, funct3, funct7)` that form is parameterised by. One encoder
//! function per form lives in the sibling `*_type` modules; this module only
//! looks the mnemonic up and hands off.

mod b_type;
mod i_type;
mod j_type;
mod pseudo;
mod r_type;
mod s_type;
mod u_type;

pub mod constants;
pub mod utility_functions;

use crate::assembler::symbol_table::SymbolTable;
use crate::errors::AssemblyError;
use crate::normalizer::NormalizedLine;

/// The six primary RISC-V encoding families this assembler supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    R,
    IArith,
    IShift,
    ILoad,
    IJalr,
    S,
    B,
    U,
    J,
}

/// One row of the mnemonic table: the form a mnemonic encodes as, plus the
/// fixed bits that form's encoder packs into every word it produces.
#[derive(Debug, Clone, Copy)]
struct Entry {
    form: Form,
    opcode: u32,
    funct3: u32,
    funct7: u32,
}

macro_rules! table {
    ($(($mnemonic:expr, $form:expr, $opcode:expr, $funct3:expr, $funct7:expr)),* $(,)?) => {
        &[$(($mnemonic, Entry { form: $form, opcode: $opcode, funct3: $funct3, funct7: $funct7 })),*]
    };
}

#[rustfmt::skip]
const TABLE: &[(&str, Entry)] = table![
    ("add",   Form::R, constants::OPCODE_R, 0b000, constants::FUNCT7_ZERO),
    ("sub",   Form::R, constants::OPCODE_R, 0b000, constants::FUNCT7_ALT),
    ("sll",   Form::R, constants::OPCODE_R, 0b001, constants::FUNCT7_ZERO),
    ("slt",   Form::R, constants::OPCODE_R, 0b010, constants::FUNCT7_ZERO),
    ("sltu",  Form::R, constants::OPCODE_R, 0b011, constants::FUNCT7_ZERO),
    ("xor",   Form::R, constants::OPCODE_R, 0b100, constants::FUNCT7_ZERO),
    ("srl",   Form::R, constants::OPCODE_R, 0b101, constants::FUNCT7_ZERO),
    ("sra",   Form::R, constants::OPCODE_R, 0b101, constants::FUNCT7_ALT),
    ("or",    Form::R, constants::OPCODE_R, 0b110, constants::FUNCT7_ZERO),
    ("and",   Form::R, constants::OPCODE_R, 0b111, constants::FUNCT7_ZERO),

    ("addi",  Form::IArith, constants::OPCODE_I_ARITH, 0b000, constants::FUNCT7_ZERO),
    ("slti",  Form::IArith, constants::OPCODE_I_ARITH, 0b010, constants::FUNCT7_ZERO),
    ("sltiu", Form::IArith, constants::OPCODE_I_ARITH, 0b011, constants::FUNCT7_ZERO),
    ("xori",  Form::IArith, constants::OPCODE_I_ARITH, 0b100, constants::FUNCT7_ZERO),
    ("ori",   Form::IArith, constants::OPCODE_I_ARITH, 0b110, constants::FUNCT7_ZERO),
    ("andi",  Form::IArith, constants::OPCODE_I_ARITH, 0b111, constants::FUNCT7_ZERO),
    ("slli",  Form::IShift, constants::OPCODE_I_ARITH, 0b001, constants::FUNCT7_ZERO),
    ("srli",  Form::IShift, constants::OPCODE_I_ARITH, 0b101, constants::FUNCT7_ZERO),
    ("srai",  Form::IShift, constants::OPCODE_I_ARITH, 0b101, constants::FUNCT7_ALT),

    ("lb",  Form::ILoad, constants::OPCODE_I_LOAD, 0b000, constants::FUNCT7_ZERO),
    ("lh",  Form::ILoad, constants::OPCODE_I_LOAD, 0b001, constants::FUNCT7_ZERO),
    ("lw",  Form::ILoad, constants::OPCODE_I_LOAD, 0b010, constants::FUNCT7_ZERO),
    ("lbu", Form::ILoad, constants::OPCODE_I_LOAD, 0b100, constants::FUNCT7_ZERO),
    ("lhu", Form::ILoad, constants::OPCODE_I_LOAD, 0b101, constants::FUNCT7_ZERO),

    ("jalr", Form::IJalr, constants::OPCODE_I_JALR, 0b000, constants::FUNCT7_ZERO),

    ("sb", Form::S, constants::OPCODE_S, 0b000, constants::FUNCT7_ZERO),
    ("sh", Form::S, constants::OPCODE_S, 0b001, constants::FUNCT7_ZERO),
    ("sw", Form::S, constants::OPCODE_S, 0b010, constants::FUNCT7_ZERO),

    ("beq",  Form::B, constants::OPCODE_B, 0b000, constants::FUNCT7_ZERO),
    ("bne",  Form::B, constants::OPCODE_B, 0b001, constants::FUNCT7_ZERO),
    ("blt",  Form::B, constants::OPCODE_B, 0b100, constants::FUNCT7_ZERO),
    ("bge",  Form::B, constants::OPCODE_B, 0b101, constants::FUNCT7_ZERO),
    ("bltu", Form::B, constants::OPCODE_B, 0b110, constants::FUNCT7_ZERO),
    ("bgeu", Form::B, constants::OPCODE_B, 0b111, constants::FUNCT7_ZERO),

    ("lui",   Form::U, constants::OPCODE_U_LUI, 0, 0),
    ("auipc", Form::U, constants::OPCODE_U_AUIPC, 0, 0),

    ("jal", Form::J, constants::OPCODE_J, 0, 0),
];

fn lookup(mnemonic: &str) -> Option<Entry> {
    TABLE.iter().find(|(name, _)| *name == mnemonic).map(|(_, entry)| *entry)
}

/// True for every mnemonic pass one should count as one emitted instruction:
/// base mnemonics in the table plus pseudo-instructions that expand to one.
pub fn is_recognised_mnemonic(mnemonic: &str) -> bool {
    lookup(mnemonic).is_some() || pseudo::is_pseudo(mnemonic)
}

/// Encodes one normalised, non-empty line into its 32-bit machine word.
///
/// `index` is this instruction's 1-based position in the emitted stream,
/// needed to turn a branch/jump's label into a relative byte offset.
pub fn encode(line: &NormalizedLine, index: u32, symbols: &SymbolTable) -> Result<u32, AssemblyError> {
    let raw_mnemonic = line.mnemonic.as_deref().expect("encode called on a label-only line");

    let (mnemonic, owned_operands);
    let operands: &[String] = match pseudo::expand(raw_mnemonic, &line.operands, line.line_number)? {
        Some((expanded_mnemonic, expanded_operands)) => {
            mnemonic = expanded_mnemonic;
            owned_operands = expanded_operands;
            &owned_operands
        }
        None => {
            mnemonic = raw_mnemonic.to_string();
            &line.operands
        }
    };

    let entry = lookup(&mnemonic)
        .ok_or_else(|| AssemblyError::syntax(line.line_number, format!("unknown mnemonic `{raw_mnemonic}`")))?;

    match entry.form {
        Form::R => r_type::encode(operands, entry.opcode, entry.funct3, entry.funct7, line.line_number),
        Form::IArith => i_type::encode_arith(operands, entry.opcode, entry.funct3, line.line_number),
        Form::IShift => i_type::encode_shift(operands, entry.opcode, entry.funct3, entry.funct7, line.line_number),
        Form::ILoad => i_type::encode_load(operands, entry.opcode, entry.funct3, line.line_number),
        Form::IJalr => i_type::encode_jalr(operands, entry.opcode, entry.funct3, line.line_number),
        Form::S => s_type::encode(operands, entry.opcode, entry.funct3, line.line_number),
        Form::B => b_type::encode(operands, entry.opcode, entry.funct3, index, symbols, line.line_number),
        Form::U => u_type::encode(operands, entry.opcode, line.line_number),
        Form::J => j_type::encode(operands, entry.opcode, index, symbols, line.line_number),
    }
}

/// Fails with a syntax error unless `operands` has exactly `expected` tokens.
fn expect_operand_count<'a>(
    operands: &'a [String],
    expected: usize,
    line: usize,
) -> Result<&'a [String], AssemblyError> {
    if operands.len() != expected {
        return Err(AssemblyError::syntax(
            line,
            format!("expected {expected} operand(s), found {}", operands.len()),
        ));
    }
    Ok(operands)
}

/// Resolves a register operand token, failing with an operand error if it
/// names no known register.
fn resolve_register(token: &str, line: usize) -> Result<u32, AssemblyError> {
    crate::registers::resolve(token)
        .map(u32::from)
        .ok_or_else(|| AssemblyError::operand(line, format!("invalid register `{token}`")))
}

/// Parses an immediate operand token, failing with a syntax error (malformed
/// numeric literal) if it parses as neither decimal nor `0x`-hex.
fn parse_immediate(token: &str, line: usize) -> Result<i64, AssemblyError> {
    crate::immediate::parse(token)
        .ok_or_else(|| AssemblyError::syntax(line, format!("malformed immediate `{token}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn line(mnemonic: &str, operands: &[&str]) -> NormalizedLine {
        NormalizedLine {
            line_number: 1,
            label: None,
            mnemonic: Some(mnemonic.to_string()),
            operands: operands.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn add_matches_known_vector() {
        let symbols = SymbolTable::new();
        let word = encode(&line("add", &["x1", "x2", "x3"]), 1, &symbols).unwrap();
        assert_eq!(word, 0x003100B3);
    }

    #[test]
    fn addi_with_negative_immediate_matches_known_vector() {
        let symbols = SymbolTable::new();
        let word = encode(&line("addi", &["a0", "zero", "-1"]), 1, &symbols).unwrap();
        assert_eq!(word, 0xFFF00513);
    }

    #[test]
    fn unknown_mnemonic_is_a_syntax_error() {
        let symbols = SymbolTable::new();
        assert!(encode(&line("frobnicate", &["x1"]), 1, &symbols).is_err());
    }

    #[test]
    fn branch_uses_symbol_table_for_offset() {
        let mut symbols = HashMap::new();
        symbols.insert("loop".to_string(), 1u32);
        let word = encode(&line("bne", &["x1", "x2", "loop"]), 2, &symbols).unwrap();
        assert_eq!(word, 0xFE209EE3);
    }
}
