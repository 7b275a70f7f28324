//! Ingestion and serialization tests over in-memory line sources

use std::io::Cursor;

use coomat::{read_matrix, write_matrix, Error, SparseMatrixCOO};

fn read(text: &str) -> coomat::Result<coomat::Ingested> {
    read_matrix(Cursor::new(text))
}

fn triples(m: &SparseMatrixCOO<i64>) -> Vec<(usize, usize, i64)> {
    m.sorted_entries()
        .iter()
        .map(|e| (e.row, e.col, e.value))
        .collect()
}

#[test]
fn test_reads_a_well_formed_file() {
    let ingested = read("rows=3\ncols=3\n(0, 0, 5)\n\n(2, 1, #4)\n(1,2,7)\n").unwrap();
    assert_eq!(ingested.matrix.rows, 3);
    assert_eq!(ingested.matrix.cols, 3);
    assert_eq!(ingested.out_of_range, 0);
    assert_eq!(
        triples(&ingested.matrix),
        vec![(0, 0, 5), (1, 2, 7), (2, 1, -4)]
    );
}

#[test]
fn test_header_value_whitespace_is_trimmed() {
    let ingested = read("rows= 2 \ncols=\t3\n").unwrap();
    assert_eq!(ingested.matrix.rows, 2);
    assert_eq!(ingested.matrix.cols, 3);
}

#[test]
fn test_zero_value_entries_are_dropped() {
    let ingested = read("rows=2\ncols=2\n(0, 0, 0)\n(1, 1, 3)\n").unwrap();
    assert_eq!(triples(&ingested.matrix), vec![(1, 1, 3)]);
}

#[test]
fn test_out_of_range_entries_are_counted_not_fatal() {
    let ingested = read(concat!(
        "rows=2\ncols=2\n",
        "(0, 0, 1)\n",
        "(5, 0, 2)\n",   // row too large
        "(0, 9, 3)\n",   // col too large
        "(#1, 0, 4)\n",  // negative row
        "(1, 1, 5)\n",
    ))
    .unwrap();
    assert_eq!(ingested.out_of_range, 3);
    assert_eq!(triples(&ingested.matrix), vec![(0, 0, 1), (1, 1, 5)]);
}

#[test]
fn test_missing_header_is_a_format_error() {
    assert!(matches!(read(""), Err(Error::Format { .. })));
    assert!(matches!(read("rows=2\n"), Err(Error::Format { .. })));
}

#[test]
fn test_wrong_header_key_is_a_format_error() {
    assert!(matches!(read("rows=2\ncolumns=2\n"), Err(Error::Format { .. })));
    assert!(matches!(read("cols=2\nrows=2\n"), Err(Error::Format { .. })));
}

#[test]
fn test_dimensions_must_be_positive() {
    assert!(matches!(read("rows=0\ncols=2\n"), Err(Error::Format { .. })));
    assert!(matches!(read("rows=2\ncols=#3\n"), Err(Error::Format { .. })));
}

#[test]
fn test_header_with_interior_space_is_not_an_integer() {
    assert!(matches!(
        read("rows=1 2\ncols=2\n"),
        Err(Error::NotAnInteger { .. })
    ));
}

#[test]
fn test_malformed_body_line_aborts_ingestion() {
    // No opening parenthesis
    assert!(matches!(
        read("rows=2\ncols=2\n0, 0, 1)\n"),
        Err(Error::Format { .. })
    ));
    // Too few fields
    assert!(matches!(
        read("rows=2\ncols=2\n(0, 1)\n"),
        Err(Error::Format { .. })
    ));
    // Unterminated triple loses its last field
    assert!(matches!(
        read("rows=2\ncols=2\n(0, 0, 1\n"),
        Err(Error::Format { .. })
    ));
}

#[test]
fn test_dot_in_a_value_is_a_malformed_literal() {
    let err = read("rows=2\ncols=2\n(0, 0, 1.5)\n").unwrap_err();
    assert_eq!(err, Error::MalformedLiteral { token: "1.5".into() });
}

#[test]
fn test_non_digit_token_is_not_an_integer() {
    let err = read("rows=2\ncols=2\n(0, x, 1)\n").unwrap_err();
    assert_eq!(err, Error::NotAnInteger { token: "x".into() });
}

#[test]
fn test_digit_boundary_quirk_applies_to_files() {
    // ':' lexes as the digit ten, so "1:" is the value twenty.
    let ingested = read("rows=2\ncols=2\n(0, 0, 1:)\n").unwrap();
    assert_eq!(triples(&ingested.matrix), vec![(0, 0, 20)]);
}

#[test]
fn test_written_output_is_sorted_and_mirrors_the_header() {
    let mut m = SparseMatrixCOO::new(3, 3);
    m.insert(2, 2, 9i64).unwrap();
    m.insert(0, 1, -4).unwrap();
    m.insert(1, 0, 7).unwrap();

    let mut out = Vec::new();
    write_matrix(&mut out, &m).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "rows=3\ncols=3\n(0, 1, #4)\n(1, 0, 7)\n(2, 2, 9)\n"
    );
}

#[test]
fn test_write_then_read_round_trips() {
    let mut m = SparseMatrixCOO::new(4, 3);
    m.insert(3, 0, -12i64).unwrap();
    m.insert(0, 2, 5).unwrap();
    m.insert(1, 1, 1).unwrap();

    let mut out = Vec::new();
    write_matrix(&mut out, &m).unwrap();
    let back = read_matrix(Cursor::new(out)).unwrap();

    assert_eq!(back.out_of_range, 0);
    assert_eq!(back.matrix.rows, 4);
    assert_eq!(back.matrix.cols, 3);
    assert_eq!(triples(&back.matrix), triples(&m));
}

#[test]
fn test_multiply_output_serializes_sorted() {
    // The multiply accumulator emits in arbitrary order; the serializer
    // must still write sorted triples.
    let mut a = SparseMatrixCOO::new(2, 2);
    a.insert(0, 0, 1i64).unwrap();
    a.insert(1, 1, 2).unwrap();
    let mut b = SparseMatrixCOO::new(2, 2);
    b.insert(0, 0, 3i64).unwrap();
    b.insert(0, 1, 4).unwrap();

    let product = a.multiply(&b).unwrap();
    let mut out = Vec::new();
    write_matrix(&mut out, &product).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n(1, 1, 8)\n"
    );
}
