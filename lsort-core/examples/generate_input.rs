//! Generates the benchmark input file.
//!
//! Writes the fixed number of uniformly drawn integers, one per line, to
//! the path the benchmark example reads from.

use anyhow::Result;
use lsort_core::input::{self, DEFAULT_INPUT_PATH, DEFAULT_INPUT_SIZE};

fn main() -> Result<()> {
    input::write_random_values(DEFAULT_INPUT_PATH, DEFAULT_INPUT_SIZE)?;
    println!("{DEFAULT_INPUT_PATH} now has {DEFAULT_INPUT_SIZE} numbers!");
    Ok(())
}
