//! Less IR - shared primitive types for the Less function library.
//!
//! This crate provides:
//! - `Span` / `LineCol`: source positions attached to call sites and errors
//! - `units`: conversion factors between compatible CSS units

mod span;
pub mod units;

pub use span::{LineCol, Span};
