//! Core types shared by the nmfmt crates.
//!
//! - [`Value`]: the opaque argument value handed to a positional engine
//! - [`ToValue`]: by-reference conversion into [`Value`], used by `#[derive(Fields)]`
//! - [`Fields`]: a record that can be flattened into name/value pairs
//! - [`FormatError`]: errors reported by a positional engine

pub mod error;
pub mod fields;
pub mod value;

pub use error::{FormatError, FormatResult};
pub use fields::{Fields, flatten};
pub use value::{ToValue, Value};
