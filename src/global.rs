//! Process-wide default formatter and free-function shortcuts.

use std::io::Write;
use std::sync::OnceLock;

use nmfmt_core::FormatResult;

use crate::args::Args;
use crate::formatter::{FormattedError, Formatter, FormatterOptions};

static DEFAULT: OnceLock<Formatter> = OnceLock::new();

/// The shared formatter behind the free functions, built on first use with
/// [`FormatterOptions::default`].
pub fn default_formatter() -> &'static Formatter {
    DEFAULT.get_or_init(|| Formatter::with_options(FormatterOptions::default()))
}

/// [`Formatter::sprintf`] on the default formatter.
pub fn sprintf<'a>(template: &str, args: impl Into<Args<'a>>) -> FormatResult<String> {
    default_formatter().sprintf(template, args)
}

/// [`Formatter::fprintf`] on the default formatter.
pub fn fprintf<'a, W: Write + ?Sized>(
    writer: &mut W,
    template: &str,
    args: impl Into<Args<'a>>,
) -> FormatResult<usize> {
    default_formatter().fprintf(writer, template, args)
}

/// [`Formatter::printf`] on the default formatter.
pub fn printf<'a>(template: &str, args: impl Into<Args<'a>>) -> FormatResult<usize> {
    default_formatter().printf(template, args)
}

/// [`Formatter::errorf`] on the default formatter.
pub fn errorf<'a>(template: &str, args: impl Into<Args<'a>>) -> FormattedError {
    default_formatter().errorf(template, args)
}

/// [`Formatter::format_into`] on the default formatter.
pub fn format_into<'a>(
    out: &mut String,
    template: &str,
    args: impl Into<Args<'a>>,
) -> FormatResult<usize> {
    default_formatter().format_into(out, template, args)
}
