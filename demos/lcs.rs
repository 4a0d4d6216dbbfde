//! Byte-slice LCS from the command line.
//!
//! Run with `cargo run --example lcs [A B]`; defaults to a DNA pair.

use myers_lcs::{lcs, lcs_length, LcsError};

fn main() -> Result<(), LcsError> {
    let mut args = std::env::args().skip(1);
    let a = args.next().unwrap_or_else(|| "GTCGTTCGGAATGCCGTTGCTCTGTAAA".to_string());
    let b = args.next().unwrap_or_else(|| "ACCGGTCGAGTGCGCGGAAGCCGGCCGAA".to_string());

    let common = lcs(a.as_bytes(), b.as_bytes())?;
    println!("first:  {a}");
    println!("second: {b}");
    println!(
        "lcs ({} of {} x {}): {}",
        lcs_length(a.as_bytes(), b.as_bytes())?,
        a.len(),
        b.len(),
        String::from_utf8_lossy(&common),
    );
    Ok(())
}
