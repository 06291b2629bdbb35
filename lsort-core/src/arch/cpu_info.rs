//! CPU topology detection.
//!
//! The benchmark derives its worker count and spawn-depth cutoff from the
//! number of logical processors; this module wraps the detection.

use std::fmt;

/// CPU topology information for the current system.
#[derive(Clone)]
pub struct CpuInfo {
    /// Total number of logical CPU cores
    logical_cores: usize,
    /// Total number of physical CPU cores (if available)
    physical_cores: Option<usize>,
}

impl fmt::Debug for CpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuInfo")
            .field("logical_cores", &self.logical_cores)
            .field("physical_cores", &self.physical_cores)
            .finish()
    }
}

impl CpuInfo {
    /// Detect CPU topology on the current system
    pub fn detect() -> Self {
        // Get logical CPU count
        let logical_cores = num_cpus::get().max(1);

        // Try to get physical core count (may not be available on all platforms)
        let physical_cores = match num_cpus::get_physical() {
            count if count > 0 => Some(count),
            _ => None,
        };

        Self {
            logical_cores,
            physical_cores,
        }
    }

    /// Get the total number of logical CPU cores
    pub fn logical_cores(&self) -> usize {
        self.logical_cores
    }

    /// Get the total number of physical CPU cores (if available)
    pub fn physical_cores(&self) -> Option<usize> {
        self.physical_cores
    }

    /// Create a mock CpuInfo for testing
    #[cfg(test)]
    pub fn mock(logical_cores: usize) -> Self {
        assert!(logical_cores > 0, "a system has at least one core");
        Self {
            logical_cores,
            physical_cores: None,
        }
    }
}
