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

//! Opcode / funct3 / funct7 constants for the RV32I encoding families.

pub const OPCODE_R: u32 = 0b0110011;
pub const OPCODE_I_ARITH: u32 = 0b0010011;
pub const OPCODE_I_LOAD: u32 = 0b0000011;
pub const OPCODE_I_JALR: u32 = 0b1100111;
pub const OPCODE_S: u32 = 0b0100011;
pub const OPCODE_B: u32 = 0b1100011;
pub const OPCODE_U_LUI: u32 = 0b0110111;
pub const OPCODE_U_AUIPC: u32 = 0b0010111;
pub const OPCODE_J: u32 = 0b1101111;

pub const FUNCT7_ALT: u32 = 0b0100000;
pub const FUNCT7_ZERO: u32 = 0;
