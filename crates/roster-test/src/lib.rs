//! Roster Test Harness - Invariant fuzzing for closed-set enumerations
//!
//! This crate provides:
//! - Seeded generation of enums with heavy value duplication
//! - Invariant checks for lookup, ordering, formatting and selection
//! - Custom-equality checks through a record compared by one field

pub mod fuzzer;

pub use fuzzer::*;
