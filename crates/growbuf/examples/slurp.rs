//! Reads a file of unknown size and prints it, mirroring the classic
//! doubling read loop: `cargo run --example slurp -- <path>`.

use std::process::ExitCode;

use bstr::ByteSlice;
use growbuf::{GrowError, read_file_to_text};

fn main() -> ExitCode {
    let path = std::env::args().nth(1).unwrap_or_else(|| "mytext".into());

    match read_file_to_text(&path) {
        Ok(text) => {
            // Everything before the sentinel is printable content.
            let content = &text[..text.len() - 1];
            print!("{}", content.as_bstr());
            ExitCode::SUCCESS
        }
        Err(GrowError::Open { path, .. }) => {
            eprintln!("Can't find {}", path.display());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
