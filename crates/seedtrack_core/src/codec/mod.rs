//! Label text codecs.
//!
//! # Responsibility
//! - Own the identity token wire grammar printed on seed-batch labels.
//!
//! # Invariants
//! - Codecs are pure: no I/O, no clock, no shared state.

pub mod identity;
