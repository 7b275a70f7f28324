//! Reading and writing the plaintext interchange format
//!
//! A matrix file carries a two-line header naming the dimensions, then one
//! parenthesized triple per line:
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 5)
//! (2, 1, #4)
//! ```
//!
//! Negative values use the lexer's sign marker (`#`), so written files read
//! back under the same lexer. Blank body lines are skipped; any line that
//! fails tokenization or lexing aborts ingestion. Entries whose coordinates
//! fall outside the declared bounds are counted and reported to the caller
//! instead of being silently discarded.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::lexer::{lex_integer, LexError, SIGN_MARKER};
use crate::matrix::SparseMatrixCOO;
use crate::tokenize::{split_on, triple_fields};

/// The outcome of ingesting one matrix file
#[derive(Debug, Clone)]
pub struct Ingested {
    /// The populated matrix
    pub matrix: SparseMatrixCOO<i64>,
    /// How many body lines named coordinates outside the declared bounds
    pub out_of_range: usize,
}

/// Reads a matrix from an already-opened line source.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<Ingested> {
    let mut lines = reader.lines();
    let rows = read_dimension(&mut lines, "rows")?;
    let cols = read_dimension(&mut lines, "cols")?;

    let mut matrix = SparseMatrixCOO::new(rows, cols);
    let mut out_of_range = 0;

    for line in lines {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields = triple_fields(line)?;
        if fields.len() != 3 {
            return Err(Error::Format {
                reason: format!("expected a (row, col, value) triple, got {line:?}"),
            });
        }

        let row = lex_token(&fields[0])?;
        let col = lex_token(&fields[1])?;
        let value = lex_token(&fields[2])?;

        // Negative coordinates cannot index a matrix; they fall in the
        // out-of-range bucket together with too-large ones.
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            out_of_range += 1;
            continue;
        };
        match matrix.insert(row, col, value) {
            Err(Error::OutOfRange { .. }) => out_of_range += 1,
            other => other?,
        }
    }

    Ok(Ingested { matrix, out_of_range })
}

/// Reads a matrix from a file at `path`.
pub fn read_matrix_file<P: AsRef<Path>>(path: P) -> Result<Ingested> {
    let file = File::open(path)?;
    read_matrix(BufReader::new(file))
}

/// Writes a matrix in the interchange format.
///
/// Entries are sorted by `(row, col)` before writing, so the output is
/// deterministic no matter which operation produced the matrix.
pub fn write_matrix<W: Write>(mut writer: W, matrix: &SparseMatrixCOO<i64>) -> Result<()> {
    writeln!(writer, "rows={}", matrix.rows)?;
    writeln!(writer, "cols={}", matrix.cols)?;

    for entry in matrix.sorted_entries() {
        writeln!(
            writer,
            "({}, {}, {})",
            entry.row,
            entry.col,
            format_value(entry.value)
        )?;
    }
    Ok(())
}

/// Writes a matrix to a file at `path`.
pub fn write_matrix_file<P: AsRef<Path>>(path: P, matrix: &SparseMatrixCOO<i64>) -> Result<()> {
    let file = File::create(path)?;
    write_matrix(file, matrix)
}

/// Reads one `key=<integer>` header line.
fn read_dimension<B: BufRead>(lines: &mut Lines<B>, key: &str) -> Result<usize> {
    let line = lines.next().ok_or_else(|| Error::Format {
        reason: format!("missing {key}= header line"),
    })??;

    let fields = split_on(&line, '=');
    if fields.len() < 2 || fields[0] != key {
        return Err(Error::Format {
            reason: format!("expected {key}=<integer>, got {line:?}"),
        });
    }

    let value = lex_token(fields[fields.len() - 1].trim())?;
    if value <= 0 {
        return Err(Error::Format {
            reason: format!("{key} must be positive, got {value}"),
        });
    }
    Ok(value as usize)
}

fn lex_token(token: &str) -> Result<i64> {
    lex_integer(token).map_err(|err| match err {
        LexError::NotAnInteger => Error::NotAnInteger {
            token: token.to_string(),
        },
        LexError::MalformedLiteral => Error::MalformedLiteral {
            token: token.to_string(),
        },
    })
}

fn format_value(value: i64) -> String {
    if value < 0 {
        format!("{SIGN_MARKER}{}", -value)
    } else {
        value.to_string()
    }
}
