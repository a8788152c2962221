//! Derive macros for the student intros crate.
//!
//! Provides `#[derive(Error)]`, which generates `Display` and
//! `std::error::Error` implementations for error enums.

mod error;

use proc_macro::TokenStream;

/// Implements `Display` and `Error` for an error enum.
///
/// Every variant must carry an `#[error("...")]` attribute with its display
/// message. Tuple fields interpolate as `{0}`, `{1}`, named fields by name.
#[proc_macro_derive(Error, attributes(error))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    error::derive_error(input)
}
