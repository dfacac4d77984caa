//! # nmfmt
//!
//! Named-placeholder formatting. Templates name their arguments instead of
//! counting them:
//!
//! ```text
//! $name      ${name}      $name:verb      ${ name : verb }      $=name
//! ```
//!
//! Each template is compiled once into a positional form plus an ordered
//! list of names, cached, and rendered by a positional [`Engine`] (by
//! default [`Printf`]) with values bound by name on every call.
//!
//! # Placeholders
//!
//! - Names are word characters (`[A-Za-z0-9_]`) and case sensitive.
//! - The verb defaults to `v`. Bare verbs may carry `+`, `#` or `-` flags
//!   (`$n:+v`, `$n:#x`); braced verbs may use the full directive syntax
//!   (`${n:8.2f}`).
//! - `$=name` renders as `name=value`.
//! - A name with no value renders as `<nil>`.
//! - Anything that is not a complete placeholder is literal text.
//!
//! # Example
//!
//! ```
//! use nmfmt::{Fields, flatten, named};
//!
//! let args = named!(Name = "Kim", Age = 22);
//! assert_eq!(nmfmt::sprintf("$Name is $Age:d", &args).unwrap(), "Kim is 22");
//! assert_eq!(nmfmt::sprintf("$=Name:q", &args).unwrap(), r#"Name="Kim""#);
//!
//! #[derive(Fields)]
//! pub struct Player {
//!     pub name: String,
//!     pub level: u32,
//! }
//!
//! let player = Player { name: "Ann".into(), level: 3 };
//! let fields = flatten(&[&player]);
//! assert_eq!(
//!     nmfmt::sprintf("${name} reached level $level", &fields).unwrap(),
//!     "Ann reached level 3"
//! );
//! ```
//!
//! # Deriving `Fields`
//!
//! Only structs with named fields can derive [`Fields`]:
//!
//! ```compile_fail
//! #[derive(nmfmt::Fields)]
//! pub enum Shape {
//!     Circle,
//! }
//! ```
//!
//! ```compile_fail
//! #[derive(nmfmt::Fields)]
//! pub struct Pair(pub i32, pub i32);
//! ```
//!
//! Unknown `#[nmfmt(...)]` keys and empty renames are rejected:
//!
//! ```compile_fail
//! #[derive(nmfmt::Fields)]
//! pub struct Item {
//!     #[nmfmt(rname = "Name")]
//!     pub name: String,
//! }
//! ```
//!
//! ```compile_fail
//! #[derive(nmfmt::Fields)]
//! pub struct Item {
//!     #[nmfmt(rename = "")]
//!     pub name: String,
//! }
//! ```
//!
//! The accepted forms:
//!
//! ```
//! #[derive(nmfmt::Fields)]
//! pub struct Item {
//!     #[nmfmt(rename = "Name")]
//!     pub name: String,
//!     #[nmfmt(skip)]
//!     pub cost: u32,
//! }
//! ```

pub mod args;
pub mod binder;
mod formatter;
mod global;
pub mod pool;

pub use args::{ArgMap, Args};
pub use formatter::{FormattedError, Formatter, FormatterBuilder, FormatterOptions};
pub use global::{default_formatter, errorf, format_into, fprintf, printf, sprintf};
pub use pool::{ArgPool, PooledArgs};

pub use nmfmt_compiler::{BareVerb, CompiledTemplate, Syntax, TemplateCache, compile};
pub use nmfmt_core::{Fields, FormatError, FormatResult, ToValue, Value, flatten};
pub use nmfmt_engine::{Engine, Printf};
pub use nmfmt_macros::Fields;
pub use nmfmt_parser::{Placeholder, Placeholders, extract_names};

/// Commonly used items.
pub mod prelude {
    pub use crate::args::{ArgMap, Args};
    pub use crate::formatter::{Formatter, FormatterOptions};
    pub use crate::named;
    pub use nmfmt_core::{Fields, FormatError, ToValue, Value, flatten};
    pub use nmfmt_engine::Engine;
    pub use nmfmt_macros::Fields;
}
