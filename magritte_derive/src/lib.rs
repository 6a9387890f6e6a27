//! Derive macros for `magritte`.
//!
//! `#[derive(Parameters)]` turns a struct with named fields into a command line parser, where each field
//! is a parameter described by its Rust type. `#[derive(Literal)]` turns a fieldless enum into a literal type.
//!
//! These are re-exported (and documented) via `magritte::derive`.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

use crate::model::{DeriveLiteral, DeriveParser};

/// Derive `magritte::prelude::Parameters` for a struct with named fields.
#[proc_macro_derive(Parameters, attributes(magritte))]
pub fn parameters(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveParser::try_from(input)
        .map(TokenStream2::from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive `magritte::prelude::{Describe, FromValue, IntoValue}` for a fieldless enum.
#[proc_macro_derive(Literal, attributes(magritte))]
pub fn literal(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveLiteral::try_from(input)
        .map(TokenStream2::from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
