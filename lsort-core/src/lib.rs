//! Lsort Core - Linked-list quicksort benchmark engine
//!
//! This library provides the building blocks for benchmarking quicksort
//! over a singly linked list of integers: a single-threaded driver and a
//! depth-bounded fork-join driver sharing one partition routine, a
//! mutex-spliced parallel list builder, and best-effort CPU pinning for
//! the worker threads.

/// CPU topology, parallel planning and affinity hinting
pub mod arch;

/// Input file generation, loading and shuffling
pub mod input;

/// The arena-backed singly linked list
pub mod list;

/// Partition routine and the two quicksort drivers
pub mod sort;

pub use arch::{CpuInfo, ParallelPlan};
pub use list::IntList;
