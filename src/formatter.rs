//! The formatting façade.

use std::io::{self, Write};

use log::debug;
use nmfmt_compiler::{DEFAULT_RESET_LIMIT, Syntax, TemplateCache};
use nmfmt_core::{FormatError, FormatResult};
use nmfmt_engine::{Engine, Printf};
use thiserror::Error;

use crate::args::Args;
use crate::binder::bind;
use crate::pool::{ArgPool, DEFAULT_POOL_CAPACITY};

/// Construction-time options for a [`Formatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Cache misses tolerated before the template cache is cleared.
    pub cache_reset_limit: usize,
    /// Placeholder syntax.
    pub syntax: Syntax,
    /// Idle argument buffers kept for reuse.
    pub pool_capacity: usize,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            cache_reset_limit: DEFAULT_RESET_LIMIT,
            syntax: Syntax::default(),
            pool_capacity: DEFAULT_POOL_CAPACITY,
        }
    }
}

/// Formats named-placeholder templates through a positional [`Engine`].
///
/// Every output method runs the same pipeline and differs only in where the
/// bytes go:
///
/// 1. An empty argument source sends the template to the engine as-is,
///    with no arguments. Placeholders are not interpreted.
/// 2. Otherwise the template is compiled (or fetched from the cache), each
///    referenced name is bound from the source, and the engine renders the
///    compiled form.
///
/// Engine errors are returned unchanged. A `Formatter` is `Send + Sync` and
/// meant to be shared.
pub struct Formatter<E = Printf> {
    engine: E,
    cache: TemplateCache,
    pool: ArgPool,
}

impl Formatter<Printf> {
    /// A formatter with default options and the [`Printf`] engine.
    pub fn new() -> Self {
        Self::with_options(FormatterOptions::default())
    }

    pub fn with_options(options: FormatterOptions) -> Self {
        Self::with_engine(Printf, options)
    }

    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::default()
    }
}

impl Default for Formatter<Printf> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Formatter<E> {
    pub fn with_engine(engine: E, options: FormatterOptions) -> Self {
        Self {
            engine,
            cache: TemplateCache::new(options.cache_reset_limit, options.syntax),
            pool: ArgPool::new(options.pool_capacity),
        }
    }

    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The template cache, for inspection.
    #[inline]
    pub fn cache(&self) -> &TemplateCache {
        &self.cache
    }

    #[inline]
    pub fn pool(&self) -> &ArgPool {
        &self.pool
    }

    /// Append the rendering to `out` and return the number of bytes added.
    ///
    /// On error `out` is left exactly as it was.
    pub fn format_into<'a>(
        &self,
        out: &mut String,
        template: &str,
        args: impl Into<Args<'a>>,
    ) -> FormatResult<usize> {
        let start = out.len();
        match self.render(out, template, args.into()) {
            Ok(()) => Ok(out.len() - start),
            Err(err) => {
                out.truncate(start);
                Err(err)
            }
        }
    }

    /// Render to a `String`.
    pub fn sprintf<'a>(&self, template: &str, args: impl Into<Args<'a>>) -> FormatResult<String> {
        let mut out = String::new();
        self.render(&mut out, template, args.into())?;
        Ok(out)
    }

    /// Render and write to `writer`. Nothing is written if rendering fails.
    pub fn fprintf<'a, W: Write + ?Sized>(
        &self,
        writer: &mut W,
        template: &str,
        args: impl Into<Args<'a>>,
    ) -> FormatResult<usize> {
        let rendered = self.sprintf(template, args)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(rendered.len())
    }

    /// Render and write to standard output.
    pub fn printf<'a>(&self, template: &str, args: impl Into<Args<'a>>) -> FormatResult<usize> {
        self.fprintf(&mut io::stdout().lock(), template, args)
    }

    /// Render into an error value.
    ///
    /// If rendering fails the error carries the engine error's message and
    /// exposes the engine error as its [`source`](std::error::Error::source).
    pub fn errorf<'a>(&self, template: &str, args: impl Into<Args<'a>>) -> FormattedError {
        match self.sprintf(template, args) {
            Ok(message) => FormattedError {
                message,
                engine_error: None,
            },
            Err(err) => FormattedError {
                message: err.to_string(),
                engine_error: Some(err),
            },
        }
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    fn render(&self, out: &mut String, template: &str, args: Args<'_>) -> FormatResult<()> {
        if args.is_empty() {
            return self.engine.format(out, template, &[]);
        }

        let compiled = self.cache.get(template);
        if !compiled.has_placeholders() {
            return self.engine.format(out, compiled.format(), &[]);
        }

        let mut values = self.pool.acquire();
        bind(compiled.arg_names(), &args, &mut values);
        self.engine
            .format(out, compiled.format(), &values)
            .inspect_err(|err| debug!("engine rejected {:?}: {err}", compiled.format()))
    }
}

impl<E> std::fmt::Debug for Formatter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatter")
            .field("engine", &std::any::type_name::<E>())
            .field("cache", &self.cache)
            .field("pool", &self.pool)
            .finish()
    }
}

/// Builder for [`Formatter`].
#[derive(Debug, Clone, Default)]
pub struct FormatterBuilder {
    options: FormatterOptions,
}

impl FormatterBuilder {
    pub fn cache_reset_limit(mut self, misses: usize) -> Self {
        self.options.cache_reset_limit = misses;
        self
    }

    pub fn syntax(mut self, syntax: Syntax) -> Self {
        self.options.syntax = syntax;
        self
    }

    pub fn pool_capacity(mut self, capacity: usize) -> Self {
        self.options.pool_capacity = capacity;
        self
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    pub fn build(self) -> Formatter<Printf> {
        Formatter::with_options(self.options)
    }

    pub fn build_with_engine<E: Engine>(self, engine: E) -> Formatter<E> {
        Formatter::with_engine(engine, self.options)
    }
}

/// Error value produced by [`Formatter::errorf`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FormattedError {
    message: String,
    #[source]
    engine_error: Option<FormatError>,
}

impl FormattedError {
    /// The rendered message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The engine error, if rendering failed.
    #[inline]
    pub fn engine_error(&self) -> Option<&FormatError> {
        self.engine_error.as_ref()
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
