use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The contents of one or more `#[magritte(..)]` attributes.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeriveDefault {
    /// `#[magritte(default)]`
    Implicit,
    /// `#[magritte(default = ..)]`
    Expression(DeriveValue),
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParameter {
    pub field_name: syn::Ident,
    pub field_type: DeriveValue,
    pub help: Option<DeriveValue>,
    pub default: Option<DeriveDefault>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParser {
    pub struct_name: syn::Ident,
    pub program: DeriveValue,
    pub about: Option<DeriveValue>,
    pub parameters: Vec<DeriveParameter>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveVariant {
    pub variant_name: syn::Ident,
    /// An expression of type `magritte::Value`.
    pub value: DeriveValue,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveLiteral {
    pub enum_name: syn::Ident,
    pub variants: Vec<DeriveVariant>,
}
