/*
 * Copyright (c) Adrian Alic <contact@alic.dev>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! djb2 string hash, XOR variant.

/// Hashes a string with the multiply-by-33/XOR fold: `h = (h * 33) ^ c`,
/// starting from 5381 and truncating to 32 bits after every step. The C
/// lexer consuming the generated constants computes the same value, so the
/// per-step truncation has to match bit-for-bit.
pub fn djb2(s: &str) -> u32 {
    let mut h: u32 = 5381;
    for c in s.chars() {
        h = h.wrapping_mul(33) ^ c as u32;
    }
    h
}
