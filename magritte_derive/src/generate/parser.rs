use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

use crate::model::DeriveParser;

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            program,
            about,
            parameters,
        } = value;
        let program = program.tokens;
        let about = match about {
            Some(about) => {
                let about = about.tokens;
                quote! {
                    fn about() -> ::std::option::Option<::std::string::String> {
                        ::std::option::Option::Some(::std::string::String::from(#about))
                    }
                }
            }
            None => quote! {},
        };

        let (field_names, parameter_names): (Vec<_>, Vec<_>) = parameters
            .iter()
            .map(|p| (p.field_name.clone(), p.field_name.unraw().to_string()))
            .unzip();
        let parameters = parameters
            .into_iter()
            .map(TokenStream2::from)
            .collect::<Vec<_>>();

        quote! {
            impl ::magritte::prelude::Parameters for #struct_name {
                fn program() -> ::std::string::String {
                    ::std::string::String::from(#program)
                }

                #about

                fn parameters() -> ::std::vec::Vec<::magritte::Parameter> {
                    ::std::vec![ #( #parameters ),* ]
                }

                #[allow(unused_mut, unused_variables)]
                fn from_values(
                    mut values: ::magritte::Values,
                ) -> ::std::result::Result<Self, ::magritte::ValueError> {
                    ::std::result::Result::Ok(Self {
                        #( #field_names: values.take(#parameter_names)?, )*
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::test::{ident, simple_format};
    use crate::model::{DeriveParameter, DeriveValue};

    #[test]
    fn render_parser_empty() {
        // Setup
        let parser = DeriveParser {
            struct_name: ident("my_struct"),
            program: DeriveValue {
                tokens: quote! { env!("CARGO_CRATE_NAME") },
            },
            about: None,
            parameters: vec![],
        };

        // Execute
        let token_stream = TokenStream2::from(parser);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            simple_format(
                quote! {
                    impl ::magritte::prelude::Parameters for my_struct {
                        fn program() -> ::std::string::String {
                            ::std::string::String::from(env!("CARGO_CRATE_NAME"))
                        }

                        fn parameters() -> ::std::vec::Vec<::magritte::Parameter> {
                            ::std::vec![]
                        }

                        #[allow(unused_mut, unused_variables)]
                        fn from_values(
                            mut values: ::magritte::Values,
                        ) -> ::std::result::Result<Self, ::magritte::ValueError> {
                            ::std::result::Result::Ok(Self {})
                        }
                    }
                }
                .to_string()
            ),
        );
    }

    #[test]
    fn render_parser() {
        // Setup
        let parser = DeriveParser {
            struct_name: ident("my_struct"),
            program: DeriveValue {
                tokens: quote! { "abc" },
            },
            about: Some(DeriveValue {
                tokens: quote! { "Does things." },
            }),
            parameters: vec![DeriveParameter {
                field_name: ident("my_field"),
                field_type: DeriveValue {
                    tokens: quote! { u8 },
                },
                help: None,
                default: None,
            }],
        };

        // Execute
        let token_stream = TokenStream2::from(parser);

        // Verify
        let rendered = token_stream.to_string();
        assert!(rendered.contains(&quote! { ::std::string::String::from("abc") }.to_string()));
        assert!(rendered.contains(
            &quote! { ::std::option::Option::Some(::std::string::String::from("Does things.")) }
                .to_string()
        ));
        assert!(rendered.contains(
            &quote! { let parameter = ::magritte::Parameter::typed::<u8>("my_field"); }
                .to_string()
        ));
        assert!(rendered.contains(&quote! { my_field: values.take("my_field")?, }.to_string()));
        syn::parse2::<syn::File>(token_stream).unwrap();
    }
}
