//! Locating the `#[throwable(message)]` field.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Attribute, Data, Fields, Index, Result, spanned::Spanned};

/// Returns the accessor (`name` or tuple index) of the message field, if any.
pub(crate) fn find_message_field(data: &Data) -> Result<Option<TokenStream>> {
    match data {
        Data::Struct(data) => find_in_fields(&data.fields),
        Data::Enum(data) => {
            for variant in &data.variants {
                for field in &variant.fields {
                    if is_message_field(&field.attrs)? {
                        return Err(syn::Error::new(
                            field.span(),
                            "#[throwable(message)] is not supported on enum variants; \
use #[throwable(display)] on the enum instead",
                        ));
                    }
                }
            }
            Ok(None)
        }
        Data::Union(data) => Err(syn::Error::new(
            data.union_token.span(),
            "`Throwable` cannot be derived for unions",
        )),
    }
}

fn find_in_fields(fields: &Fields) -> Result<Option<TokenStream>> {
    let mut found: Option<TokenStream> = None;
    for (index, field) in fields.iter().enumerate() {
        if !is_message_field(&field.attrs)? {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new(
                field.span(),
                "only one field can be marked #[throwable(message)]",
            ));
        }
        let accessor = match &field.ident {
            Some(ident) => ident.to_token_stream(),
            None => Index::from(index).to_token_stream(),
        };
        found = Some(accessor);
    }
    Ok(found)
}

fn is_message_field(attrs: &[Attribute]) -> Result<bool> {
    let mut marked = false;
    for attr in attrs {
        if !attr.path().is_ident("throwable") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("message") {
                if marked {
                    return Err(meta.error("duplicate `message` option"));
                }
                marked = true;
                Ok(())
            } else {
                Err(meta.error("unknown field option; expected `message`"))
            }
        })?;
    }
    Ok(marked)
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn data(tokens: TokenStream) -> Data {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        input.data
    }

    #[test]
    fn named_field_is_found() {
        let data = data(quote! {
            struct Refused {
                code: u16,
                #[throwable(message)]
                reason: String,
            }
        });
        let accessor = find_message_field(&data).unwrap().unwrap();
        assert_eq!(accessor.to_string(), "reason");
    }

    #[test]
    fn tuple_field_is_found_by_index() {
        let data = data(quote! {
            struct Refused(u16, #[throwable(message)] String);
        });
        let accessor = find_message_field(&data).unwrap().unwrap();
        assert_eq!(accessor.to_string(), "1");
    }

    #[test]
    fn unmarked_struct_has_no_message() {
        let data = data(quote! { struct Refused { reason: String } });
        assert!(find_message_field(&data).unwrap().is_none());
    }

    #[test]
    fn two_message_fields_are_rejected() {
        let data = data(quote! {
            struct Refused {
                #[throwable(message)]
                a: String,
                #[throwable(message)]
                b: String,
            }
        });
        let err = find_message_field(&data).unwrap_err();
        assert!(err.to_string().contains("only one field"));
    }

    #[test]
    fn enum_message_field_is_rejected() {
        let data = data(quote! {
            enum Failure {
                Io(#[throwable(message)] String),
            }
        });
        assert!(find_message_field(&data).is_err());
    }

    #[test]
    fn unknown_field_option_is_rejected() {
        let data = data(quote! {
            struct Refused {
                #[throwable(secret)]
                reason: String,
            }
        });
        let err = find_message_field(&data).unwrap_err();
        assert!(err.to_string().contains("unknown field option"));
    }
}
