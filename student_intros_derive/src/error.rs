//! Derive macro generating error boilerplate.
//!
//! Expands `#[derive(Error)]` on an enum into `std::fmt::Display` and
//! `std::error::Error` implementations, with each variant's message taken
//! from its `#[error("...")]` attribute.
//!
//! # Usage
//!
//! ```ignore
//! use student_intros_derive::Error;
//!
//! #[derive(Debug, Error)]
//! pub enum CodecError {
//!     #[error("unexpected end of input")]
//!     UnexpectedEof,
//!
//!     #[error("field `{field}` is {len} bytes")]
//!     TooLong { field: &'static str, len: usize },
//!
//!     #[error("bad discriminator {0}")]
//!     BadDiscriminator(u8),
//! }
//! ```
//!
//! Only enums are supported; the crate has no struct-shaped errors.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Derives `Display` and `Error` for an error enum.
pub fn derive_error(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Error derive supports enums only",
        ));
    };

    let name = &input.ident;
    let arms = data
        .variants
        .iter()
        .map(|variant| {
            let ident = &variant.ident;
            let message = variant_message(variant)?;

            Ok(match &variant.fields {
                Fields::Unit => quote! {
                    Self::#ident => write!(f, #message),
                },
                Fields::Named(fields) => {
                    let names: Vec<_> = fields.named.iter().map(|f| &f.ident).collect();
                    quote! {
                        Self::#ident { #(#names),* } => write!(f, #message, #(#names = #names),*),
                    }
                }
                Fields::Unnamed(fields) => {
                    let bindings: Vec<_> = (0..fields.unnamed.len())
                        .map(|i| format_ident!("f{}", i))
                        .collect();
                    let message = rename_positional(&message, bindings.len());
                    quote! {
                        Self::#ident(#(#bindings),*) => write!(f, #message, #(#bindings = #bindings),*),
                    }
                }
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(#arms)*
                }
            }
        }

        impl ::std::error::Error for #name {}
    })
}

/// Extracts the message string from a variant's `#[error("...")]` attribute.
fn variant_message(variant: &syn::Variant) -> syn::Result<String> {
    for attr in &variant.attrs {
        if attr.path().is_ident("error") {
            let lit: LitStr = attr.parse_args().map_err(|_| {
                syn::Error::new_spanned(
                    attr,
                    "expected a string literal, e.g. #[error(\"unexpected end of input\")]",
                )
            })?;
            return Ok(lit.value());
        }
    }

    Err(syn::Error::new_spanned(
        variant,
        format!(
            "variant `{}` is missing its #[error(\"...\")] message",
            variant.ident
        ),
    ))
}

/// Rewrites positional placeholders `{0}`, `{1}` to the `{f0}`, `{f1}` names
/// bound in the generated match arm.
fn rename_positional(message: &str, field_count: usize) -> String {
    let mut out = message.to_string();
    for i in (0..field_count).rev() {
        out = out.replace(&format!("{{{}}}", i), &format!("{{f{}}}", i));
    }
    out
}
