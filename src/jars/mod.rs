//! Analyses over flat lists of jar filenames.
//!
//! - [`duplicates`] — jars that differ only by their version suffix.
//! - [`splitter`] — partition by whether the filename carries a version.

pub mod duplicates;
pub mod splitter;
