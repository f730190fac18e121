//! Example: reconstructing a longest palindromic subsequence.
//!
//! Run with:
//! `cargo run --example lps_demo`

use lps_dp::{Backtracer, InputSequence, TableBuilder};

fn main() {
    let input: InputSequence = "character".parse().expect("non-empty literal");

    let table = TableBuilder::new(&input).build();
    println!("DP table ({n}x{n}):", n = table.dim());
    println!("{table}");

    let palindrome = Backtracer::new(&table, &input).run();
    println!("LPS length: {}", table.max_len());
    println!("LPS: {}", palindrome.iter().collect::<String>());
}
