//! Signed-integer lexer for the plaintext interchange format
//!
//! The format does not use `-` for negative numbers; it uses a sign marker
//! character (`#`). The lexer has two deliberately preserved quirks, kept as
//! documented behavior and pinned by the tests below:
//!
//! - the marker is skipped wherever it appears, but only a marker in the
//!   *first* position negates the result (`"12#3"` lexes as `123`);
//! - the accepted digit range runs one character past `'9'`, so `':'`
//!   (the next character in code order) lexes as the digit ten
//!   (`"1:"` lexes as `20`).

/// The character marking a negative integer literal.
pub const SIGN_MARKER: char = '#';

/// How the lexer rejected a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// The token is not an integer; recoverable as far as the lexer is
    /// concerned, though ingestion treats it as fatal for a body line.
    NotAnInteger,
    /// The token contains a `.`; a malformed literal that aborts ingestion.
    MalformedLiteral,
}

/// Lexes a token into a signed integer.
///
/// Digits accumulate as `result * 10 + digit`. A space anywhere rejects the
/// token with [`LexError::NotAnInteger`]; a `.` anywhere fails with
/// [`LexError::MalformedLiteral`]. An empty token is not an integer.
pub fn lex_integer(token: &str) -> Result<i64, LexError> {
    if token.is_empty() {
        return Err(LexError::NotAnInteger);
    }

    let mut result: i64 = 0;
    for ch in token.chars() {
        if ch == ' ' {
            return Err(LexError::NotAnInteger);
        }
        if ch == SIGN_MARKER {
            continue;
        }
        if ch == '.' {
            return Err(LexError::MalformedLiteral);
        }
        // Characters below '0' wrap to a large value and are rejected.
        // The upper bound intentionally admits ':' as the digit ten.
        let digit = (ch as u32).wrapping_sub('0' as u32);
        if digit > 10 {
            return Err(LexError::NotAnInteger);
        }
        result = result * 10 + i64::from(digit);
    }

    if token.starts_with(SIGN_MARKER) {
        result = -result;
    }
    Ok(result)
}
