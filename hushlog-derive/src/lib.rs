//! Derive macro for `hushlog`.
//!
//! This crate generates the `#[derive(Throwable)]` implementations. It:
//! - reads `#[throwable(...)]` attributes on the type and its fields
//! - emits `hushlog::Throwable` and `hushlog::ThrowableClass` impls
//!
//! It does **not** evaluate redaction rules; those live in the main `hushlog`
//! crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod container;
mod message;

use container::parse_container_options;
use message::find_message_field;

/// Derives `hushlog::Throwable` and `hushlog::ThrowableClass` for a struct or
/// enum, so its values can be passed to log calls and matched by redaction
/// rules.
///
/// # Container Attributes
///
/// - `#[throwable(name = "...")]` - Canonical type name used in redaction
///   placeholders. Defaults to `module_path!()::TypeName`.
/// - `#[throwable(display)]` - The message is the type's `Display` output.
///
/// # Field Attributes
///
/// - `#[throwable(message)]` - This field provides the message. The field type
///   must implement `hushlog::MessageSource` (`String`, `&'static str`,
///   `Cow<'static, str>`, and `Option`s of those).
///
/// Without either, values of the type never carry a message.
///
/// Unions and generic types are rejected at compile time, as are `display`
/// combined with a message field, more than one message field, and message
/// fields inside enum variants.
#[proc_macro_derive(Throwable, attributes(throwable))]
pub fn derive_throwable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    if !generics.params.is_empty() {
        return Err(syn::Error::new(
            generics.span(),
            "`Throwable` cannot be derived for generic types; implement it by hand",
        ));
    }

    let options = parse_container_options(&attrs)?;
    let message_field = find_message_field(&data)?;
    let root = crate_root();

    let message = match (options.display, message_field) {
        (true, Some(field)) => {
            return Err(syn::Error::new(
                field.span(),
                "#[throwable(display)] and #[throwable(message)] cannot be combined",
            ));
        }
        (true, None) => quote! {
            ::core::option::Option::Some(#root::__private::Cow::Owned(
                ::std::string::ToString::to_string(self),
            ))
        },
        (false, Some(field)) => quote! {
            #root::MessageSource::message_source(&self.#field)
        },
        (false, None) => quote! { ::core::option::Option::None },
    };

    let name = options.name.map_or_else(
        || quote! { ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#ident)) },
        |name| quote! { #name },
    );

    Ok(quote! {
        impl #root::Throwable for #ident {
            fn throwable_type(&self) -> #root::ThrowableType {
                #root::ThrowableType::of::<Self>()
            }

            fn message(&self) -> ::core::option::Option<#root::__private::Cow<'_, str>> {
                #message
            }
        }

        impl #root::ThrowableClass for #ident {
            const TYPE_NAME: &'static str = #name;
        }
    })
}

/// Returns the token stream to reference the hushlog crate root.
///
/// Handles crate renaming (e.g., `hl = { package = "hushlog", ... }`). Inside
/// hushlog itself the crate is reachable as `::hushlog` through
/// `extern crate self as hushlog`.
fn crate_root() -> TokenStream {
    match crate_name("hushlog") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::hushlog },
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn expand_err(tokens: TokenStream) -> String {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        expand(input).unwrap_err().to_string()
    }

    fn expand_ok(tokens: TokenStream) -> String {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        expand(input).unwrap().to_string()
    }

    #[test]
    fn default_name_uses_module_path() {
        let out = expand_ok(quote! { struct Timeout; });
        assert!(out.contains("module_path"));
        assert!(out.contains("Option :: None"));
    }

    #[test]
    fn explicit_name_is_used() {
        let out = expand_ok(quote! {
            #[throwable(name = "args::InvalidArgument")]
            struct InvalidArgument;
        });
        assert!(out.contains("\"args::InvalidArgument\""));
        assert!(!out.contains("module_path"));
    }

    #[test]
    fn message_field_goes_through_message_source() {
        let out = expand_ok(quote! {
            struct Refused {
                #[throwable(message)]
                reason: String,
            }
        });
        assert!(out.contains("MessageSource :: message_source (& self . reason)"));
    }

    #[test]
    fn display_uses_to_string() {
        let out = expand_ok(quote! {
            #[throwable(display)]
            enum Failure { Io, Parse }
        });
        assert!(out.contains("ToString :: to_string (self)"));
    }

    #[test]
    fn display_with_message_field_is_rejected() {
        let err = expand_err(quote! {
            #[throwable(display)]
            struct Refused {
                #[throwable(message)]
                reason: String,
            }
        });
        assert!(err.contains("cannot be combined"));
    }

    #[test]
    fn generics_are_rejected() {
        let err = expand_err(quote! { struct Wrapped<T>(T); });
        assert!(err.contains("generic"));
    }

    #[test]
    fn unions_are_rejected() {
        let err = expand_err(quote! { union Bits { a: u32, b: f32 } });
        assert!(err.contains("unions"));
    }
}
