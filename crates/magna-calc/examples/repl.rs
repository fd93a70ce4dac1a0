//! Reads one expression per line from stdin and prints its value.
//!
//! Run with: cargo run --example repl

use std::io::{self, BufRead, Write};

use magna_calc::eval;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match eval(&line) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(err) => writeln!(stdout, "error: {err}")?,
        }
    }

    Ok(())
}
