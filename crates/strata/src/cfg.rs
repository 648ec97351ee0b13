//! Tolerance defaults (internal).
//!
//! Policy
//! - The algorithms use exact sign tests wherever they can; the constants here
//!   only cover the few places where a magnitude threshold is unavoidable.

/// Vectors at or below this length are returned unnormalized by `band::normalize`.
pub const NORMAL_EPS: f64 = 1e-4;
