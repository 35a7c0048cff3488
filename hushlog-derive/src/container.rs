//! Parsing of container-level `#[throwable(...)]` attributes.

use syn::{Attribute, LitStr, Result};

/// Options set on the deriving type itself.
#[derive(Debug, Default)]
pub(crate) struct ContainerOptions {
    /// `#[throwable(name = "...")]`: canonical type name override.
    pub(crate) name: Option<LitStr>,
    /// `#[throwable(display)]`: the message is the type's `Display` output.
    pub(crate) display: bool,
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("throwable") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                if options.name.is_some() {
                    return Err(meta.error("duplicate `name` option"));
                }
                options.name = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("display") {
                if options.display {
                    return Err(meta.error("duplicate `display` option"));
                }
                options.display = true;
                Ok(())
            } else if meta.path.is_ident("message") {
                Err(meta.error("`message` goes on a field, not on the type"))
            } else {
                Err(meta.error("unknown option; expected `name = \"...\"` or `display`"))
            }
        })?;
    }
    Ok(options)
}
