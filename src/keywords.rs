/*
 * Copyright (c) Adrian Alic <contact@alic.dev>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The fixed keyword table the generator runs over.

/// C11 reserved words plus the `__constexpr` extension keyword. Order
/// determines the order of the emitted constants and dispatch clauses, and
/// entries must hash pairwise distinct or the generated `switch` gets
/// duplicate `case` labels.
#[rustfmt::skip]
pub const KEYWORDS: [&str; 43] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if",
    "inline", "int", "long", "register", "restrict", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
    "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "__constexpr",
];

/// Uppercases the ASCII letters of a keyword for use in the generated
/// `KEYWORD_HASH_<X>` and `KEYWORD_<X>` symbols. Underscores pass through,
/// so `_Bool` becomes `_BOOL`.
pub fn constant_suffix(kw: &str) -> String {
    kw.to_ascii_uppercase()
}
