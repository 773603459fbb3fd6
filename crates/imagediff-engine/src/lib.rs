//! Pixel-level image comparison.
//!
//! [`compute`] takes two decoded images and a [`DiffParams`] and returns a
//! [`DiffResult`] holding a highlighted diff image, a magnitude mask and the
//! summary counters. A missing or empty input yields `None` ("nothing to
//! compare") rather than an error.

pub mod canvas;
pub mod engine;
pub mod params;
pub mod pixel;
pub mod source;

pub use self::canvas::canvas_size;
pub use self::engine::{DiffResult, compute};
pub use self::params::DiffParams;
