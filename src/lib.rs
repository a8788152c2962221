//! Schema-driven binary codec for the student introduction ledger program.
//!
//! Converts typed introduction records into the compact, discriminator-tagged
//! byte encoding the on-chain program expects, and decodes account bytes
//! fetched back from the chain into records. Decoding degrades gracefully:
//! malformed input is logged and reported as absent, never propagated as a
//! panic or error to the caller.
//!
//! - [`schema`]: compiled-in field layouts, one instruction and one account
//!   variant per record kind
//! - [`core`]: the introduction record and its serialize/deserialize codec
//! - [`types`]: wire-format primitives and error types
//! - [`utils`]: logging

pub mod core;
pub mod schema;
pub mod types;
pub mod utils;
