//! Manufacturing product codes.
//!
//! # Responsibility
//! - Recover machine-usable fields from ERP product references.

pub mod code;
