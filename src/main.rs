use std::process::ExitCode;

use coomat::{apply, read_matrix_file, write_matrix_file, Ingested, Op};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!("usage: {} <matrix-a> <matrix-b> <add|subtract|multiply> <output>", args[0]);
        return ExitCode::FAILURE;
    }

    let op = match args[3].as_str() {
        "add" => Op::Add,
        "subtract" => Op::Subtract,
        "multiply" => Op::Multiply,
        other => {
            eprintln!("unknown operation {other:?}; expected add, subtract, or multiply");
            return ExitCode::FAILURE;
        }
    };

    match run(&args[1], &args[2], op, &args[4]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path_a: &str, path_b: &str, op: Op, output: &str) -> coomat::Result<()> {
    let a = read_file(path_a)?;
    // Reading the same file twice would be wasted work; reuse the matrix.
    let b = if path_a == path_b {
        a.matrix.clone()
    } else {
        read_file(path_b)?.matrix
    };

    let result = apply(op, &a.matrix, &b)?;
    write_matrix_file(output, &result)?;
    println!(
        "{:?} on {}x{} matrices: {} entries written to {}",
        op, result.rows, result.cols, result.nnz(), output
    );
    Ok(())
}

fn read_file(path: &str) -> coomat::Result<Ingested> {
    let ingested = read_matrix_file(path)?;
    println!(
        "read {}: {}x{}, {} entries",
        path,
        ingested.matrix.rows,
        ingested.matrix.cols,
        ingested.matrix.nnz()
    );
    if ingested.out_of_range > 0 {
        eprintln!(
            "warning: {} entries in {} were outside the declared bounds and were skipped",
            ingested.out_of_range, path
        );
    }
    Ok(ingested)
}
