//! Error types returned by the handful of `Screen` operations that can fail.
//!
//! Most of the command surface clamps out-of-range input to a safe no-op
//! and logs a diagnostic (see [`crate::screen::Screen`] docs); only
//! allocation and caller-supplied-index accessors return a typed error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    /// A resize/rewrap could not allocate the new grid. The screen is left
    /// exactly as it was before the call.
    #[error("failed to allocate {rows}x{cols} grid: {reason}")]
    AllocationFailure {
        rows: usize,
        cols: usize,
        reason: String,
    },

    /// A caller passed a row or column index outside the valid range for
    /// the accessor being called.
    #[error("index {index} out of bounds (0..{limit})")]
    BoundsViolation { index: usize, limit: usize },
}
