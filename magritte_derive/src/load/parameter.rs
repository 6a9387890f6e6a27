use quote::{quote, ToTokens};

use crate::load::{documentation, duplicate_error, magritte_attributes};
use crate::model::{DeriveDefault, DeriveParameter, DeriveValue};

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(value, "Invalid - parameters must be named."))?;
        let attributes = magritte_attributes(&value.attrs)?;

        for key in attributes.pairs.keys() {
            if key != "help" && key != "default" {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - unknown parameter attribute `{key}`."),
                ));
            }
        }

        for key in &attributes.singletons {
            if key != "default" {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - unknown parameter attribute `{key}`."),
                ));
            }
        }

        let help = match attributes.pairs.get("help").map(Vec::as_slice) {
            None | Some([]) => documentation(&value.attrs).map(|help| DeriveValue {
                tokens: quote! { #help },
            }),
            Some([help]) => Some(help.clone()),
            Some(_) => return Err(duplicate_error(field_name.span(), "help")),
        };

        let implicit = attributes.singletons.contains("default");
        let default = match attributes.pairs.get("default").map(Vec::as_slice) {
            None | Some([]) if implicit => Some(DeriveDefault::Implicit),
            None | Some([]) => None,
            Some([expression]) if !implicit => Some(DeriveDefault::Expression(expression.clone())),
            Some(_) => return Err(duplicate_error(field_name.span(), "default")),
        };

        Ok(DeriveParameter {
            field_name,
            field_type: DeriveValue {
                tokens: value.ty.to_token_stream(),
            },
            help,
            default,
        })
    }
}
