use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveLiteral;

impl From<DeriveLiteral> for TokenStream2 {
    fn from(value: DeriveLiteral) -> Self {
        let DeriveLiteral {
            enum_name,
            variants,
        } = value;
        let (variant_names, values): (Vec<_>, Vec<_>) = variants
            .into_iter()
            .map(|v| (v.variant_name, v.value.tokens))
            .unzip();

        quote! {
            impl ::magritte::prelude::Describe for #enum_name {
                fn describe() -> ::magritte::TypeDescriptor {
                    ::magritte::TypeDescriptor::literal(::std::vec![ #( #values ),* ])
                }
            }

            impl ::magritte::prelude::FromValue for #enum_name {
                fn from_value(
                    value: ::magritte::Value,
                ) -> ::std::result::Result<Self, ::magritte::ValueError> {
                    #(
                        if value == #values {
                            return ::std::result::Result::Ok(#enum_name::#variant_names);
                        }
                    )*

                    ::std::result::Result::Err(::magritte::ValueError::Mismatch {
                        expected: "literal",
                        found: value.kind_name(),
                        value: value.to_string(),
                    })
                }
            }

            impl ::magritte::prelude::IntoValue for #enum_name {
                fn into_value(self) -> ::magritte::Value {
                    match self {
                        #( #enum_name::#variant_names => #values, )*
                    }
                }
            }
        }
    }
}
