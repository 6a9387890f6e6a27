use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

use crate::model::{DeriveDefault, DeriveParameter};

impl From<DeriveParameter> for TokenStream2 {
    fn from(value: DeriveParameter) -> Self {
        let DeriveParameter {
            field_name,
            field_type,
            help,
            default,
        } = value;
        let field_type = field_type.tokens;
        let parameter_name = field_name.unraw().to_string();

        let default = match default {
            None => quote! {},
            Some(DeriveDefault::Implicit) => quote! {
                let default: #field_type = ::std::default::Default::default();
                let parameter = parameter.default(default);
            },
            Some(DeriveDefault::Expression(expression)) => {
                let expression = expression.tokens;
                // A string literal is taken to mean the owned equivalent.
                let expression = match syn::parse2::<syn::Expr>(expression.clone()) {
                    Ok(syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(_),
                        ..
                    })) => quote! { ::std::convert::From::from(#expression) },
                    _ => expression,
                };

                quote! {
                    let default: #field_type = #expression;
                    let parameter = parameter.default(default);
                }
            }
        };

        let help = match help {
            None => quote! {},
            Some(help) => {
                let help = help.tokens;
                quote! {
                    let parameter = parameter.help(#help);
                }
            }
        };

        quote! {
            {
                let parameter = ::magritte::Parameter::typed::<#field_type>(#parameter_name);
                #default
                #help
                parameter
            }
        }
    }
}
