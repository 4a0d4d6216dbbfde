//! Word-level LCS with a custom equivalence.
//!
//! Compares two sentences word by word, case-insensitively, and prints the
//! matched runs with their positions in each sentence.

use myers_lcs::{lcs_with, LcsError, PredicatePair};

fn main() -> Result<(), LcsError> {
    let first = "The quick brown Fox jumps over the lazy dog";
    let second = "a quick red fox leaps over one lazy dog";

    let a: Vec<&str> = first.split_whitespace().collect();
    let b: Vec<&str> = second.split_whitespace().collect();

    let input = PredicatePair::new(&a, &b, |x: &&str, y: &&str| x.eq_ignore_ascii_case(y));
    let chain = lcs_with(&input)?;

    println!("first:  {first}");
    println!("second: {second}");
    println!("{} common words:", chain.total_len());
    for m in &chain {
        for i in 0..m.len {
            println!(
                "  {:>12}  (word {} / word {})",
                input.first()[m.x + i],
                m.x + i,
                m.y + i
            );
        }
    }
    Ok(())
}
