//! Output renderers.
//!
//! - [`terminal`] — gap reports, duplicate groups and summary tables for the console.
//! - [`pom`] — `<dependency>` declarations for jars resolved on Maven Central.
//!
//! JSON output needs no renderer of its own; the models serialize directly.

pub mod pom;
pub mod terminal;
