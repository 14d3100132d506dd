//! Prelude module for persian_date crate.
//!
//! Re-exports the derive_more macros used across the crate.

pub use derive_more::{Display, Into};
