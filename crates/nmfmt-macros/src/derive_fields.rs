//! Implementation of the `#[derive(Fields)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Visibility, parse_macro_input, parse_quote};

use crate::attrs::{FieldAttrs, TypeAttrs};

pub fn derive_fields_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_fields_inner(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_fields_inner(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attrs = TypeAttrs::from_attrs(&input.attrs)?;
    let krate = attrs
        .crate_path
        .unwrap_or_else(|| parse_quote!(::nmfmt));

    let entries = collect_entries(input, &krate)?;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::Fields for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<(&'static str, #krate::Value)> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

/// One `(name, value)` expression per emitted field.
fn collect_entries(input: &DeriveInput, krate: &syn::Path) -> syn::Result<Vec<TokenStream2>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Fields can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Fields can only be derived for structs with named fields",
        ));
    };

    let mut entries = Vec::new();
    for field in &fields.named {
        let field_attrs = FieldAttrs::from_attrs(&field.attrs)?;

        // Only plain `pub` counts as exported.
        if field_attrs.skip || !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let bound_name = field_attrs.rename.unwrap_or_else(|| {
            let raw = ident.to_string();
            raw.strip_prefix("r#").map(str::to_owned).unwrap_or(raw)
        });

        entries.push(quote! {
            (#bound_name, #krate::ToValue::to_value(&self.#ident))
        });
    }

    Ok(entries)
}
