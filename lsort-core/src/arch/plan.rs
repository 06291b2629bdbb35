//! Parallel execution planning.
//!
//! Derives, once per run, the shape of the two parallel phases: how many
//! worker threads build the list, and how deep the sort recursion may go
//! before it stops offloading sub-ranges to new threads.

use crate::arch::cpu_info::CpuInfo;
use std::fmt;

/// Fixed plan for the parallel build and sort phases.
#[derive(Clone, PartialEq, Eq)]
pub struct ParallelPlan {
    /// Number of worker threads for the build phase, and the modulus for
    /// affinity slots in both phases
    workers: usize,
    /// Recursion depth below which the sort driver offloads to new threads
    max_spawn_depth: usize,
    /// Whether worker threads request CPU affinity
    pin_workers: bool,
}

impl fmt::Debug for ParallelPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParallelPlan(workers={}, max_spawn_depth={}, pinned={})",
            self.workers, self.max_spawn_depth, self.pin_workers
        )
    }
}

impl ParallelPlan {
    /// Derive the plan for the given CPU topology.
    ///
    /// One worker per logical processor; the sort offloads to a new thread
    /// while the recursion depth is below `floor(log2(workers)) + 2`.
    pub fn for_cpu(cpu: &CpuInfo) -> Self {
        let workers = cpu.logical_cores().max(1);
        Self {
            workers,
            max_spawn_depth: workers.ilog2() as usize + 2,
            pin_workers: true,
        }
    }

    /// Override the spawn-depth cutoff.
    ///
    /// A cutoff of 0 disables thread offload entirely; the sort driver then
    /// runs synchronously on the calling thread.
    pub fn with_max_spawn_depth(mut self, depth: usize) -> Self {
        self.max_spawn_depth = depth;
        self
    }

    /// Disable affinity hinting while keeping the thread structure.
    pub fn unpinned(mut self) -> Self {
        self.pin_workers = false;
        self
    }

    /// Returns the number of build workers / the affinity-slot modulus
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the recursion depth below which sort sub-calls spawn threads
    pub fn max_spawn_depth(&self) -> usize {
        self.max_spawn_depth
    }

    /// Checks whether worker threads request CPU affinity
    pub fn pins_workers(&self) -> bool {
        self.pin_workers
    }
}
