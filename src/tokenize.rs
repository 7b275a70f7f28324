//! Line tokenization for the plaintext interchange format
//!
//! Two independent operations: splitting a line on a delimiter character
//! (used for `rows=<n>` headers) and pulling the comma-separated fields out
//! of a parenthesized `(row, col, value)` triple.

use crate::error::{Error, Result};

/// Splits `text` on every occurrence of `delimiter`.
///
/// Empty fields are preserved, and a trailing field is always emitted even
/// when the text does not end with the delimiter, so the result has one more
/// field than there are delimiter occurrences.
pub fn split_on(text: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();

    for ch in text.chars() {
        if ch == delimiter {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(ch);
        }
    }
    fields.push(field);
    fields
}

/// Extracts the fields of a parenthesized triple like `(1, 2, #3)`.
///
/// The text must begin with `'('`; otherwise this is a format error (the
/// caller gets a diagnosable failure rather than a silently empty field
/// list). After the opening parenthesis, characters accumulate into the
/// current field; `,` and `)` terminate a field; literal spaces are skipped;
/// anything after `)` is ignored.
pub fn triple_fields(text: &str) -> Result<Vec<String>> {
    let mut chars = text.chars();
    if chars.next() != Some('(') {
        return Err(Error::Format {
            reason: format!("expected a parenthesized triple, got {text:?}"),
        });
    }

    let mut fields = Vec::new();
    let mut field = String::new();
    for ch in chars {
        match ch {
            ' ' => {}
            ',' | ')' => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    Ok(fields)
}
