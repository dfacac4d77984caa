//! nmfmt Proc Macros
//!
//! # Macros
//!
//! - `#[derive(Fields)]` - Flatten a struct's public fields into name/value
//!   pairs that can be bound to template placeholders
//!
//! # Example
//!
//! ```ignore
//! use nmfmt::Fields;
//!
//! #[derive(Fields)]
//! pub struct Player {
//!     #[nmfmt(rename = "Name")]
//!     pub name: String,
//!     pub age: u32,
//!     secret: String, // never emitted
//! }
//! ```

use proc_macro::TokenStream;

mod attrs;
mod derive_fields;

/// Derive the `Fields` trait for a struct with named fields.
///
/// Only `pub` fields are emitted; private and restricted-visibility fields
/// are skipped entirely. Every emitted field's type must implement
/// `ToValue`.
///
/// # Container Attributes
///
/// - `#[nmfmt(crate = "path")]` - Path to the nmfmt crate (default `::nmfmt`)
///
/// # Field Attributes
///
/// - `#[nmfmt(rename = "...")]` - Bind the field under another name
/// - `#[nmfmt(skip)]` - Never emit this field
#[proc_macro_derive(Fields, attributes(nmfmt))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    derive_fields::derive_fields_impl(input)
}
