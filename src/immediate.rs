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

//! Parses decimal and `0x`-prefixed hexadecimal immediate literals.

/// Parses a numeric literal token into a signed integer.
///
/// Accepts an optional leading `-`, then either a `0x`-prefixed hex literal
/// or a plain decimal literal. Widened to `i64` so the caller can range-check
/// against the target encoding field before narrowing.
pub fn parse(token: &str) -> Option<i64> {
    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let magnitude = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else {
        rest.parse::<i64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}
