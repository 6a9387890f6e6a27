use quote::quote;
use syn::spanned::Spanned;

use crate::load::{duplicate_error, magritte_attributes};
use crate::model::{DeriveLiteral, DeriveValue, DeriveVariant};

impl TryFrom<syn::DeriveInput> for DeriveLiteral {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let data = match &value.data {
            syn::Data::Enum(data) => data,
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - `Literal` may only be derived for an enum.",
                ))
            }
        };

        let variants = data
            .variants
            .iter()
            .map(DeriveVariant::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DeriveLiteral {
            enum_name: value.ident.clone(),
            variants,
        })
    }
}

impl TryFrom<&syn::Variant> for DeriveVariant {
    type Error = syn::Error;

    fn try_from(value: &syn::Variant) -> Result<Self, Self::Error> {
        let variant_name = value.ident.clone();

        if !matches!(value.fields, syn::Fields::Unit) {
            return Err(syn::Error::new(
                variant_name.span(),
                "Invalid - `Literal` variants may not have fields.",
            ));
        }

        let attributes = magritte_attributes(&value.attrs)?;

        if let Some(key) = attributes
            .pairs
            .keys()
            .chain(attributes.singletons.iter())
            .find(|key| *key != "value")
        {
            return Err(syn::Error::new(
                variant_name.span(),
                format!("Invalid - unknown variant attribute `{key}`."),
            ));
        }

        let value = match attributes.pairs.get("value").map(Vec::as_slice) {
            None | Some([]) => {
                let lowered = variant_name.to_string().to_lowercase();
                quote! { ::magritte::Value::Str(::std::string::String::from(#lowered)) }
            }
            Some([constant]) => constant_value(constant)?,
            Some(_) => return Err(duplicate_error(variant_name.span(), "value")),
        };

        Ok(DeriveVariant {
            variant_name,
            value: DeriveValue { tokens: value },
        })
    }
}

/// Only integer, string, and `None` constants are expressible as a literal.
fn constant_value(constant: &DeriveValue) -> Result<proc_macro2::TokenStream, syn::Error> {
    let expression: syn::Expr = syn::parse2(constant.tokens.clone())?;

    match &expression {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(integer),
            ..
        }) => {
            let integer: i128 = integer.base10_parse()?;
            Ok(quote! { ::magritte::Value::Int(#integer) })
        }
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => match expr.as_ref() {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Int(integer),
                ..
            }) => {
                let magnitude: i128 = integer.base10_parse()?;
                Ok(quote! { ::magritte::Value::Int(-#magnitude) })
            }
            _ => Err(unsupported(&expression)),
        },
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(string),
            ..
        }) => Ok(quote! { ::magritte::Value::Str(::std::string::String::from(#string)) }),
        syn::Expr::Path(path) if path.path.is_ident("None") => Ok(quote! { ::magritte::Value::None }),
        _ => Err(unsupported(&expression)),
    }
}

fn unsupported(expression: &syn::Expr) -> syn::Error {
    syn::Error::new(
        expression.span(),
        "Invalid - a literal value must be an integer, a string, or `None`.",
    )
}
