//! Positional formatting engine for nmfmt.
//!
//! The named-placeholder layer compiles templates down to positional
//! directives and hands them, together with an ordered argument list, to an
//! [`Engine`]. The engine owns all verb semantics; nothing above it inspects
//! verbs or argument types.
//!
//! [`Printf`] is the default engine. Its directives follow the familiar
//! `printf` shape with value-generic verbs:
//!
//! ```text
//! %[flags][width][.precision][[index]]verb      %% for a literal percent
//! ```
//!
//! # Example
//!
//! ```
//! use nmfmt_core::Value;
//! use nmfmt_engine::{Engine, Printf};
//!
//! let mut out = String::new();
//! Printf
//!     .format(&mut out, "%v is %d (%q)", &[Value::from("Kim"), Value::from(22), Value::from("x")])
//!     .unwrap();
//! assert_eq!(out, r#"Kim is 22 ("x")"#);
//! ```

pub mod directive;
mod printf;
mod render;

pub use directive::{Directive, Flags, MAX_WIDTH, Verb};
pub use printf::Printf;
pub use render::{quote_char, quote_str};

use std::sync::Arc;

use nmfmt_core::{FormatResult, Value};

/// A positional formatting engine.
///
/// Implementations append the rendering of `template` with `args` to `out`.
/// On error `out` may hold partial output; callers that care restore it.
pub trait Engine: Send + Sync {
    fn format(&self, out: &mut String, template: &str, args: &[Value]) -> FormatResult<()>;
}

impl<E: Engine + ?Sized> Engine for &E {
    fn format(&self, out: &mut String, template: &str, args: &[Value]) -> FormatResult<()> {
        (**self).format(out, template, args)
    }
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn format(&self, out: &mut String, template: &str, args: &[Value]) -> FormatResult<()> {
        (**self).format(out, template, args)
    }
}

impl<E: Engine + ?Sized> Engine for Arc<E> {
    fn format(&self, out: &mut String, template: &str, args: &[Value]) -> FormatResult<()> {
        (**self).format(out, template, args)
    }
}
