//! Serial vs. parallel linked-list quicksort benchmark.
//!
//! Reads the fixed-size input file, shuffles it, sorts one copy of the
//! list with the single-threaded driver and one with the fork-join
//! driver, and reports both timings and the speedup factor.
//!
//! Generate the input file first with the `generate_input` example.

use std::time::Instant;

use anyhow::{ensure, Context, Result};
use lsort_core::input::{self, DEFAULT_INPUT_PATH, DEFAULT_INPUT_SIZE};
use lsort_core::{CpuInfo, IntList, ParallelPlan};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut values = input::read_values(DEFAULT_INPUT_PATH, DEFAULT_INPUT_SIZE)
        .context("cannot load benchmark input (run the generate_input example first)")?;

    // One shuffle, shared by both runs, so neither driver gets pathological
    // pivot sequences
    input::shuffle(&mut values);

    let cpu = CpuInfo::detect();
    let plan = ParallelPlan::for_cpu(&cpu);
    println!("[INPUT]    Size taken: {}", values.len());
    println!("[PLAN]     {:?}", plan);

    // A) serial: single-threaded build, single-threaded sort
    let mut serial_list = IntList::from_values(&values);
    let start = Instant::now();
    serial_list.sort_serial();
    let serial_time = start.elapsed();
    ensure!(
        serial_list.is_sorted() && serial_list.len() == values.len(),
        "serial sort produced a bad chain"
    );
    println!(
        "[SERIAL]   Time taken: {:.3} ms",
        serial_time.as_secs_f64() * 1e3
    );

    // B) parallel: threaded build, fork-join sort
    let mut parallel_list = IntList::build_parallel(&values, &plan);
    let start = Instant::now();
    parallel_list.sort_parallel(&plan);
    let parallel_time = start.elapsed();
    ensure!(
        parallel_list.is_sorted() && parallel_list.len() == values.len(),
        "parallel sort produced a bad chain"
    );
    println!(
        "[PARALLEL] Time taken: {:.3} ms",
        parallel_time.as_secs_f64() * 1e3
    );

    let speedup = serial_time.as_secs_f64() / parallel_time.as_secs_f64();
    println!("Speedup Factor (Serial / Parallel): {:.2}x", speedup);

    Ok(())
}
