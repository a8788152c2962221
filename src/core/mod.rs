//! Ledger record types and their codecs.
//!
//! One record kind exists today: the student introduction exchanged with the
//! introduction program. Each record owns its serialize/deserialize pair,
//! built on the schema registry.

pub mod student_intro;
