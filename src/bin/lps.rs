//! CLI collaborator: reads a symbol sequence from a file and prints one
//! longest palindromic subsequence.
//!
//! The core receives the file's first line without its trailing line
//! terminator; the terminator is transport, not a symbol. Set
//! `RUST_LOG=debug` to dump the populated DP table.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lps_dp::{Backtracer, InputSequence, TableBuilder};

#[derive(Parser)]
#[command(name = "lps", version, about = "Longest palindromic subsequence of a file's first line")]
struct Cli {
    /// File whose first line supplies the symbol sequence.
    input_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input_file)
        .with_context(|| format!("failed to read {}", cli.input_file.display()))?;
    let line = text.lines().next().unwrap_or("");
    let input: InputSequence = line
        .parse()
        .with_context(|| format!("no symbols in first line of {}", cli.input_file.display()))?;

    let table = TableBuilder::new(&input).build();
    log::debug!("dp table ({n}x{n}):\n{table}", n = table.dim());

    let palindrome = Backtracer::new(&table, &input).run();
    println!("Longest palindrome is of length {}:", palindrome.len());
    println!("{}", palindrome.iter().collect::<String>());

    Ok(())
}
