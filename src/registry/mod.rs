//! Async HTTP client for looking up jar coordinates on Maven Central.
//!
//! [`maven::search_group_id`] returns `Ok(Some(group_id))` on a hit,
//! `Ok(None)` when the search has no match, and `Err` on network, HTTP or
//! decoding failures.

pub mod maven;
