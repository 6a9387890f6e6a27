mod attribute;
mod literal;
mod parameter;
mod parser;

use crate::model::IntermediateAttributes;

pub(crate) const ATTRIBUTE: &str = "magritte";

/// Merge every `#[magritte(..)]` attribute.
fn magritte_attributes(attributes: &[syn::Attribute]) -> Result<IntermediateAttributes, syn::Error> {
    let mut merged = IntermediateAttributes::default();

    for attribute in attributes {
        if attribute.path().is_ident(ATTRIBUTE) {
            let IntermediateAttributes { singletons, pairs } =
                IntermediateAttributes::try_from(attribute)?;
            merged.singletons.extend(singletons);

            for (key, values) in pairs {
                merged.pairs.entry(key).or_default().extend(values);
            }
        }
    }

    Ok(merged)
}

/// The `///` documentation, with each line trimmed and joined by a space.
fn documentation(attributes: &[syn::Attribute]) -> Option<String> {
    let lines: Vec<String> = attributes
        .iter()
        .filter(|attribute| attribute.path().is_ident("doc"))
        .filter_map(|attribute| match &attribute.meta {
            syn::Meta::NameValue(syn::MetaNameValue {
                value:
                    syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(line),
                        ..
                    }),
                ..
            }) => Some(line.value().trim().to_string()),
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}

fn duplicate_error(span: proc_macro2::Span, key: &str) -> syn::Error {
    syn::Error::new(span, format!("Invalid - `{key}` may only be specified once."))
}
