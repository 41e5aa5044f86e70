//! Rank arithmetic for lexorank.
//!
//! ## Operations
//!
//! - [`between`]: midpoint search with growing precision
//! - [`Key::after`] / [`Key::before`] / [`Key::distance`]: step arithmetic
//! - [`smart_append`] / [`smart_prepend`]: strategy dispatch for list ends
//! - [`Key::at`]: exact fractional positions, used by normalization
//!
//! ## Determinism
//!
//! All arithmetic is integer-only (`num_bigint`). Identical inputs and
//! config always yield identical keys.
//!
//! [`Key::after`]: crate::Key::after
//! [`Key::before`]: crate::Key::before
//! [`Key::distance`]: crate::Key::distance
//! [`Key::at`]: crate::Key::at

pub mod between;
pub mod position;
pub mod step;

pub use between::between;
pub use step::{smart_append, smart_prepend};
