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

use rv32i_asm::file_reader::{AsmFileReader, MockFileReader};
use rv32i_asm::{assemble, OutputFormat};
use std::path::Path;

#[test]
fn add_matches_known_vector() {
    let mut reader = MockFileReader::default();
    reader.add_file("test.s", "add x1, x2, x3\n");
    let output = assemble(Path::new("test.s"), OutputFormat::Hex, &reader).unwrap();
    assert_eq!(output, "0x003100B3\n");
}

#[test]
fn addi_with_negative_immediate_sign_extends() {
    let mut reader = MockFileReader::default();
    reader.add_file("test.s", "addi a0, zero, -1\n");
    let output = assemble(Path::new("test.s"), OutputFormat::Hex, &reader).unwrap();
    assert_eq!(output, "0xFFF00513\n");
}

#[test]
fn lui_then_addi_builds_a_32_bit_constant() {
    let mut reader = MockFileReader::default();
    reader.add_file("test.s", "lui x5, 0x12345\naddi x5, x5, 0x678\n");
    let output = assemble(Path::new("test.s"), OutputFormat::Hex, &reader).unwrap();
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("0x123452B7"));
    assert_eq!(lines.next(), Some("0x67828293"));
}

#[test]
fn labelled_loop_branches_backward() {
    let mut reader = MockFileReader::default();
    reader.add_file("test.s", "loop: addi x1, x1, 1\n      bne  x1, x2, loop\n");
    let output = assemble(Path::new("test.s"), OutputFormat::Hex, &reader).unwrap();
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("0x00108093"));
    assert_eq!(lines.next(), Some("0xFE209EE3"));
}

#[test]
fn sw_encodes_store_in_isa_register_order() {
    let mut reader = MockFileReader::default();
    reader.add_file("test.s", "sw x3, 8(x2)\n");
    let output = assemble(Path::new("test.s"), OutputFormat::Hex, &reader).unwrap();
    assert_eq!(output, "0x00312423\n");
}

#[test]
fn li_expands_identically_to_its_addi_equivalent() {
    let mut reader = MockFileReader::default();
    reader.add_file("li.s", "li t0, 42\n");
    reader.add_file("addi.s", "addi t0, x0, 42\n");

    let li_output = assemble(Path::new("li.s"), OutputFormat::Hex, &reader).unwrap();
    let addi_output = assemble(Path::new("addi.s"), OutputFormat::Hex, &reader).unwrap();

    assert_eq!(li_output, "0x02A00293\n");
    assert_eq!(li_output, addi_output);
}

#[test]
fn comment_and_separator_variants_do_not_change_the_encoding() {
    let mut reader = MockFileReader::default();
    reader.add_file("plain.s", "add x1, x2, x3\n");
    reader.add_file("commented.s", "add x1, x2, x3 # do the thing\n");
    reader.add_file("spaced.s", "add x1   x2   x3\n");

    let plain = assemble(Path::new("plain.s"), OutputFormat::Hex, &reader).unwrap();
    let commented = assemble(Path::new("commented.s"), OutputFormat::Hex, &reader).unwrap();
    let spaced = assemble(Path::new("spaced.s"), OutputFormat::Hex, &reader).unwrap();

    assert_eq!(plain, commented);
    assert_eq!(plain, spaced);
}

#[test]
fn register_name_equivalence_holds_for_abi_aliases() {
    let mut reader = MockFileReader::default();
    reader.add_file("numeric.s", "add x10, x10, x10\n");
    reader.add_file("abi.s", "add a0, a0, a0\n");

    let numeric = assemble(Path::new("numeric.s"), OutputFormat::Hex, &reader).unwrap();
    let abi = assemble(Path::new("abi.s"), OutputFormat::Hex, &reader).unwrap();
    assert_eq!(numeric, abi);
}

#[test]
fn binary_output_matches_the_bit_expansion_of_hex_output() {
    let mut reader = MockFileReader::default();
    reader.add_file("test.s", "addi a0, zero, -1\n");
    let hex = assemble(Path::new("test.s"), OutputFormat::Hex, &reader).unwrap();
    let binary = assemble(Path::new("test.s"), OutputFormat::Binary, &reader).unwrap();

    let hex_word = u32::from_str_radix(hex.trim().trim_start_matches("0x"), 16).unwrap();
    let binary_word = u32::from_str_radix(binary.trim(), 2).unwrap();
    assert_eq!(hex_word, binary_word);
}

#[test]
fn undefined_label_is_an_error() {
    let mut reader = MockFileReader::default();
    reader.add_file("test.s", "bne x1, x2, nowhere\n");
    assert!(assemble(Path::new("test.s"), OutputFormat::Hex, &reader).is_err());
}

#[test]
fn duplicate_label_is_an_error() {
    let mut reader = MockFileReader::default();
    reader.add_file("test.s", "a: add x1, x2, x3\na: add x1, x2, x3\n");
    assert!(assemble(Path::new("test.s"), OutputFormat::Hex, &reader).is_err());
}

#[test]
fn j_pseudo_jumps_forward_to_its_label() {
    let mut reader = MockFileReader::default();
    reader.add_file("test.s", "j end\nend: add x0, x0, x0\n");
    let output = assemble(Path::new("test.s"), OutputFormat::Hex, &reader).unwrap();
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("0x0040006F"));
}

#[test]
fn jr_and_ret_pseudo_expand_to_jalr() {
    let mut reader = MockFileReader::default();
    reader.add_file("jr.s", "jr x5\n");
    reader.add_file("ret.s", "ret\n");

    let jr_output = assemble(Path::new("jr.s"), OutputFormat::Hex, &reader).unwrap();
    let ret_output = assemble(Path::new("ret.s"), OutputFormat::Hex, &reader).unwrap();

    assert_eq!(jr_output, "0x00028067\n");
    assert_eq!(ret_output, "0x00008067\n");
}

#[test]
fn bgt_and_ble_pseudo_swap_operands_into_blt_and_bge() {
    let mut reader = MockFileReader::default();
    reader.add_file("bgt.s", "done: add x0, x0, x0\nbgt x1, x2, done\n");
    reader.add_file("ble.s", "done: add x0, x0, x0\nble x1, x2, done\n");

    let bgt_output = assemble(Path::new("bgt.s"), OutputFormat::Hex, &reader).unwrap();
    let ble_output = assemble(Path::new("ble.s"), OutputFormat::Hex, &reader).unwrap();

    assert_eq!(bgt_output.lines().nth(1), Some("0xFE114EE3"));
    // ble x1, x2, done -> bge x2, x1, done: same scatter, funct3 0b101 instead of 0b100.
    assert_eq!(ble_output.lines().nth(1), Some("0xFE115EE3"));
}

#[test]
fn reads_from_the_real_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("program.s");
    std::fs::write(&input_path, "add x1, x2, x3\n").unwrap();

    let output = assemble(&input_path, OutputFormat::Hex, &AsmFileReader).unwrap();
    assert_eq!(output, "0x003100B3\n");
}
