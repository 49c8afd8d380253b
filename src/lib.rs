/*
 * Copyright (c) Adrian Alic <contact@alic.dev>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Build-time generator for the C lexer's keyword recognizer: one
//! `#define` hash constant per keyword, then one `case` clause per keyword
//! for the hash `switch`.

pub mod hash;
pub mod keywords;

use std::io::{self, Write};

use hash::djb2;
use keywords::constant_suffix;

/// Emits the constants block: one `#define KEYWORD_HASH_<UPPER> <hex>` line
/// per keyword, in list order. The hash is computed on the original-case
/// keyword; only the symbol name is uppercased.
pub fn emit_constants<W: Write>(
    out: &mut W,
    keywords: &[&str],
) -> io::Result<()> {
    for kw in keywords {
        writeln!(
            out,
            "#define KEYWORD_HASH_{} {:#x}",
            constant_suffix(kw),
            djb2(kw)
        )?;
    }
    Ok(())
}

/// Emits one dispatch clause per keyword, in list order. A matching hash is
/// necessary but not sufficient, so every clause re-checks the lexeme with
/// `strcmp` before confirming the token; on mismatch it falls through to
/// `break` and the caller treats the lexeme as an identifier.
///
/// The layout reproduces the bytes the C tree was generated with, stray
/// spaces included, so a regenerated header diffs clean.
pub fn emit_dispatch<W: Write>(
    out: &mut W,
    keywords: &[&str],
) -> io::Result<()> {
    for kw in keywords {
        let upper = constant_suffix(kw);
        writeln!(out, "case KEYWORD_HASH_{upper}: ")?;
        writeln!(out, "\tif (strcmp(\"{kw}\", buffer) == 0) {{")?;
        writeln!(out, " \t\tcreateSimpleToken(token, ctx, KEYWORD_{upper});")?;
        writeln!(out, "\t\treturn true;")?;
        writeln!(out, "\t}}")?;
        writeln!(out, "\tbreak;")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Runs both passes over the same list: all constants, then all dispatch
/// clauses, with nothing between the blocks.
pub fn generate<W: Write>(out: &mut W, keywords: &[&str]) -> io::Result<()> {
    emit_constants(out, keywords)?;
    emit_dispatch(out, keywords)
}
