//! Best-effort CPU affinity hinting for worker threads.
//!
//! Pinning is a scheduling hint, not a guarantee: every failure mode is
//! reported and swallowed, and the caller proceeds on whatever core the OS
//! picks.

/// Result of attempting to pin a thread to a specific core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinningResult {
    /// Successfully pinned to the requested core
    Success,
    /// Successfully pinned, but to a different core than requested
    SuccessDifferentCore(usize),
    /// Pinning is not supported on this platform
    Unsupported,
    /// Pinning failed for some other reason
    Failed,
}

/// Attempt to pin the calling thread to the core addressed by `slot`.
///
/// `slot` may exceed the number of available cores; it wraps around, so a
/// recursion depth or worker index can be passed directly.
pub fn pin_current_thread(slot: usize) -> PinningResult {
    // Try to get core IDs supported by this system
    match core_affinity::get_core_ids() {
        Some(core_ids) if !core_ids.is_empty() => {
            if let Some(core) = core_ids.get(slot) {
                if core_affinity::set_for_current(*core) {
                    PinningResult::Success
                } else {
                    PinningResult::Failed
                }
            } else {
                // Wrap around onto an available core
                let fallback_idx = slot % core_ids.len();
                if core_affinity::set_for_current(core_ids[fallback_idx]) {
                    PinningResult::SuccessDifferentCore(fallback_idx)
                } else {
                    PinningResult::Failed
                }
            }
        }
        _ => PinningResult::Unsupported,
    }
}

/// Pin the calling thread to `slot`, logging instead of failing.
pub fn hint_current_thread(slot: usize) {
    match pin_current_thread(slot) {
        PinningResult::Success => {
            tracing::debug!("Pinned worker thread to core slot {}", slot);
        }
        PinningResult::SuccessDifferentCore(core) => {
            tracing::debug!(
                "Pinned worker thread for slot {} to wrapped core {}",
                slot,
                core
            );
        }
        result => {
            tracing::warn!(
                "Failed to pin worker thread to core slot {}: {:?}",
                slot,
                result
            );
        }
    }
}
