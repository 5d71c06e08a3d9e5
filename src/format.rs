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

//! Renders a 32-bit encoded word as a line of hex or binary text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Hex,
    Binary,
}

/// `0x` followed by eight uppercase hex digits, zero-padded.
pub fn to_hex(word: u32) -> String {
    format!("0x{word:08X}")
}

/// 32 ASCII `'0'`/`'1'` characters, most-significant bit first.
pub fn to_binary(word: u32) -> String {
    (0..32).rev().map(|bit| if word & (1 << bit) != 0 { '1' } else { '0' }).collect()
}

pub fn render(word: u32, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => to_hex(word),
        OutputFormat::Binary => to_binary(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase_and_zero_padded() {
        assert_eq!(to_hex(0x003100B3), "0x003100B3");
        assert_eq!(to_hex(0), "0x00000000");
        assert_eq!(to_hex(0xFFFFFFFF), "0xFFFFFFFF");
    }

    #[test]
    fn binary_is_32_bits_msb_first() {
        let bits = to_binary(0b1);
        assert_eq!(bits.len(), 32);
        assert!(bits.ends_with('1'));
        assert!(bits[..31].chars().all(|c| c == '0'));
    }

    #[test]
    fn binary_matches_hex_bit_expansion() {
        let word = 0xFE209EE3u32;
        let hex = to_hex(word);
        let from_hex = u32::from_str_radix(&hex[2..], 16).unwrap();
        assert_eq!(to_binary(from_hex), to_binary(word));
    }
}
