//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog lookups and codecs into batch and scan workflows.
//! - Keep UI, spreadsheet and printer layers out of business rules.

pub mod scan_service;
pub mod seeding_service;
