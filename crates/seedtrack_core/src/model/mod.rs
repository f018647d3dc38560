//! Domain model for nursery seed-batch identity.
//!
//! # Responsibility
//! - Define catalog records and the batch/scan values derived from them.
//!
//! # Invariants
//! - Every species is identified by a stable `SpeciesId`.
//! - Batch and scan values reference species by id and never own them.

pub mod seeding;
pub mod species;
