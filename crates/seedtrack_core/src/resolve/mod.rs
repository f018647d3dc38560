//! Token-to-species resolution.
//!
//! # Responsibility
//! - Turn scanned label text into a catalog species plus sowing date.
//! - Report unknown species as a value, never as a failure.

pub mod resolver;
