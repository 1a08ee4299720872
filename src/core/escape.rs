// src/core/escape.rs
//! Backslash-escape decoding for the show-jobs ajax payload.
//!
//! The server escapes the HTML once more before wrapping it in JSON, so after
//! JSON decoding the string still carries literal `\uXXXX`, `\n`, `\"` ...
//! sequences. This undoes that second layer. Characters outside an escape
//! pass through unchanged.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{Result, ScrapeError};

type Cursor<'a> = Peekable<CharIndices<'a>>;

pub fn unescape(s: &str) -> Result<String> {
    if !s.contains('\\') {
        return Ok(s.to_string());
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.char_indices().peekable();

    while let Some((at, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let Some((_, esc)) = chars.next() else {
            return Err(bad(at, "\\ at end of string"));
        };
        match esc {
            '\n' => {} // line continuation
            '\\' | '\'' | '"' => out.push(esc),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '0'..='7' => out.push(octal(esc, &mut chars)),
            'x' => {
                let v = hex(&mut chars, 2, at)?;
                out.push(char::from_u32(v).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            'u' => {
                let v = hex(&mut chars, 4, at)?;
                out.push(utf16_unit(v, &mut chars));
            }
            'U' => {
                let v = hex(&mut chars, 8, at)?;
                out.push(char::from_u32(v).ok_or_else(|| bad(at, "code point out of range"))?);
            }
            'N' => return Err(bad(at, "named escapes are not supported")),
            other => {
                // Unknown escapes survive verbatim.
                out.push('\\');
                out.push(other);
            }
        }
    }
    Ok(out)
}

fn bad(offset: usize, reason: &'static str) -> ScrapeError {
    ScrapeError::Escape { offset, reason }
}

fn hex(chars: &mut Cursor<'_>, digits: usize, at: usize) -> Result<u32> {
    let mut v = 0u32;
    for _ in 0..digits {
        let (_, c) = chars.next().ok_or_else(|| bad(at, "truncated hex escape"))?;
        let d = c.to_digit(16).ok_or_else(|| bad(at, "non-hex digit in escape"))?;
        v = v * 16 + d;
    }
    Ok(v)
}

// Up to three octal digits, the first already consumed.
fn octal(first: char, chars: &mut Cursor<'_>) -> char {
    let mut v = first.to_digit(8).unwrap_or(0);
    for _ in 0..2 {
        match chars.peek().and_then(|(_, c)| c.to_digit(8)) {
            Some(d) => {
                v = v * 8 + d;
                chars.next();
            }
            None => break,
        }
    }
    char::from_u32(v).unwrap_or(char::REPLACEMENT_CHARACTER)
}

// A `\uXXXX` unit; a high surrogate pulls in a following `\uDCxx` low half.
fn utf16_unit(hi: u32, chars: &mut Cursor<'_>) -> char {
    if !(0xD800..0xDC00).contains(&hi) {
        return char::from_u32(hi).unwrap_or(char::REPLACEMENT_CHARACTER);
    }
    let mut look = chars.clone();
    let pair = matches!(look.next(), Some((_, '\\')))
        && matches!(look.next(), Some((_, 'u')))
        && hex(&mut look, 4, 0).is_ok_and(|lo| (0xDC00..0xE000).contains(&lo));
    if !pair {
        return char::REPLACEMENT_CHARACTER;
    }
    // Re-read the low half from the real cursor.
    chars.next();
    chars.next();
    let lo = hex(chars, 4, 0).unwrap_or(0xDC00);
    let cp = 0x10000 + ((hi - 0xD800) << 10) + (lo - 0xDC00);
    char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)
}
