//! CPU topology and worker-thread support.
//!
//! This module is responsible for:
//! - Detecting the CPU topology (logical and physical cores)
//! - Deriving the parallel build/sort plan from it
//! - Best-effort pinning of worker threads to cores

pub mod affinity;
pub mod cpu_info;
pub mod plan;

pub use affinity::{hint_current_thread, pin_current_thread, PinningResult};
pub use cpu_info::CpuInfo;
pub use plan::ParallelPlan;

/// Get information about the current system's CPU topology
pub fn detect_cpu_topology() -> CpuInfo {
    CpuInfo::detect()
}

/// Derive the parallel plan for the current system
pub fn plan_for_system() -> ParallelPlan {
    ParallelPlan::for_cpu(&CpuInfo::detect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_cpu_topology() {
        let cpu_info = detect_cpu_topology();
        println!("Detected {} logical cores", cpu_info.logical_cores());
        assert!(cpu_info.logical_cores() > 0);
    }

    #[test]
    fn test_plan_for_system() {
        let plan = plan_for_system();
        println!("Derived plan: {:?}", plan);

        assert_eq!(plan.workers(), detect_cpu_topology().logical_cores());
        // floor(log2(P)) + 2 is at least 2 for any P >= 1
        assert!(plan.max_spawn_depth() >= 2);
    }
}
