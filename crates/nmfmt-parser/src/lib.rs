//! Placeholder parser for nmfmt templates.
//!
//! This crate finds named placeholders in a template string. It does not
//! build anything: the compiler consumes the placeholder stream and turns it
//! into a positional template.
//!
//! # Example
//!
//! ```
//! use nmfmt_parser::{Placeholders, Syntax};
//!
//! let template = "$=name:q is ${ age } years old";
//! let found: Vec<_> = Placeholders::new(template, &Syntax::default()).collect();
//!
//! assert_eq!(found[0].name, "name");
//! assert_eq!(found[0].verb, Some("q"));
//! assert!(found[0].debug);
//! assert_eq!(found[1].name, "age");
//! assert_eq!(found[1].verb_or_default(), "v");
//! ```

mod cursor;
mod placeholder;

pub use placeholder::{BareVerb, DEFAULT_VERB, Placeholder, Placeholders, Syntax, extract_names};
