//! Template compiler and cache for nmfmt.
//!
//! ## Modules
//!
//! - [`compile`]: turns a named-placeholder template into a positional
//!   template plus the ordered list of names to bind
//! - [`cache`]: a concurrent memo table from raw template text to its
//!   compiled form, cleared wholesale after a fixed number of misses

pub mod cache;
pub mod compile;

pub use cache::{DEFAULT_RESET_LIMIT, TemplateCache};
pub use compile::{CompiledTemplate, ESCAPE, compile, escape};

pub use nmfmt_parser::{BareVerb, Syntax};
