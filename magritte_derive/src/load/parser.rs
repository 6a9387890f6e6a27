use quote::quote;

use crate::load::{documentation, duplicate_error, magritte_attributes};
use crate::model::{DeriveParameter, DeriveParser, DeriveValue};

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = magritte_attributes(&value.attrs)?;

        if let Some(key) = attributes
            .pairs
            .keys()
            .chain(attributes.singletons.iter())
            .find(|key| *key != "program" && *key != "about")
        {
            return Err(syn::Error::new(
                value.ident.span(),
                format!("Invalid - unknown parser attribute `{key}`."),
            ));
        }

        let program = match attributes.pairs.get("program").map(Vec::as_slice) {
            None | Some([]) => DeriveValue {
                tokens: quote! { env!("CARGO_CRATE_NAME") },
            },
            Some([program]) => program.clone(),
            Some(_) => return Err(duplicate_error(value.ident.span(), "program")),
        };
        let about = match attributes.pairs.get("about").map(Vec::as_slice) {
            None | Some([]) => documentation(&value.attrs).map(|about| DeriveValue {
                tokens: quote! { #about },
            }),
            Some([about]) => Some(about.clone()),
            Some(_) => return Err(duplicate_error(value.ident.span(), "about")),
        };

        match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => {
                let parameters = fields
                    .named
                    .iter()
                    .map(DeriveParameter::try_from)
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(DeriveParser {
                    struct_name: value.ident.clone(),
                    program,
                    about,
                    parameters,
                })
            }
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Ok(DeriveParser {
                struct_name: value.ident.clone(),
                program,
                about,
                parameters: Vec::default(),
            }),
            _ => Err(syn::Error::new(
                value.ident.span(),
                "Invalid - `Parameters` may only be derived for a struct with named fields.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use syn::parse_quote;

    #[test]
    fn construct_parser_empty() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            struct Target {}
        };

        // Execute
        let parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(
            parser,
            DeriveParser {
                struct_name: syn::Ident::new("Target", Span::call_site()),
                program: DeriveValue {
                    tokens: quote! { env!("CARGO_CRATE_NAME") },
                },
                about: None,
                parameters: vec![],
            }
        );
    }

    #[test]
    fn construct_parser_unit() {
        let input: syn::DeriveInput = parse_quote! {
            struct Target;
        };

        let parser = DeriveParser::try_from(input).unwrap();

        assert!(parser.parameters.is_empty());
    }

    #[test]
    fn construct_parser() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            /// Ignored, in favour of the attribute.
            #[magritte(program = "summer", about = "Sums the items.")]
            struct Target {
                items: Vec<u32>,
                #[magritte(default)]
                verbose: bool,
            }
        };

        // Execute
        let parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(
            parser.program,
            DeriveValue {
                tokens: quote! { "summer" },
            }
        );
        assert_eq!(
            parser.about,
            Some(DeriveValue {
                tokens: quote! { "Sums the items." },
            })
        );
        assert_eq!(
            parser
                .parameters
                .iter()
                .map(|p| p.field_name.to_string())
                .collect::<Vec<_>>(),
            vec!["items", "verbose"]
        );
    }

    #[test]
    fn construct_parser_documentation() {
        let input: syn::DeriveInput = parse_quote! {
            /// Sums the items.
            struct Target {}
        };

        let parser = DeriveParser::try_from(input).unwrap();

        assert_eq!(
            parser.about,
            Some(DeriveValue {
                tokens: quote! { "Sums the items." },
            })
        );
    }

    #[test]
    fn construct_parser_invalid() {
        let cases: Vec<syn::DeriveInput> = vec![
            parse_quote! { struct Target(u32); },
            parse_quote! { enum Target { A } },
            parse_quote! { #[magritte(name = "x")] struct Target {} },
            parse_quote! { #[magritte(program = "a", program = "b")] struct Target {} },
            parse_quote! { struct Target { #[magritte(nope)] value: u8 } },
        ];

        for input in cases {
            assert!(DeriveParser::try_from(input).is_err());
        }
    }
}
