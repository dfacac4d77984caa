//! Attribute parsing utilities for nmfmt macros.

use syn::{Attribute, LitStr, Path};

/// Parsed `#[nmfmt(...)]` attributes on a type.
#[derive(Debug, Default)]
pub struct TypeAttrs {
    /// Path to the crate that defines `Fields`, `ToValue` and `Value`.
    pub crate_path: Option<Path>,
}

/// Parsed `#[nmfmt(...)]` attributes on a field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Override the bound name
    pub rename: Option<String>,
    /// Never emit the field
    pub skip: bool,
}

impl TypeAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("nmfmt") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("crate") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.crate_path = Some(value.parse()?);
                } else {
                    return Err(meta.error(format!(
                        "unknown nmfmt attribute: {}",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }
}

impl FieldAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("nmfmt") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    if value.value().is_empty() {
                        return Err(syn::Error::new(value.span(), "rename must not be empty"));
                    }
                    result.rename = Some(value.value());
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                } else {
                    return Err(meta.error(format!(
                        "unknown nmfmt field attribute: {}",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }
}
