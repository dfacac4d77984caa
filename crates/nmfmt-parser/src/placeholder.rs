//! Placeholder scanning.
//!
//! [`Placeholders`] walks a template left to right and yields every
//! placeholder it recognizes. Two forms are accepted:
//!
//! ```text
//! $name            $name:verb            $=name:verb
//! ${name}          ${ name : verb }      ${=name:verb}
//! ```
//!
//! Anything that does not form a complete placeholder is left alone and
//! later copied through as literal text. Scanning never fails.

use std::ops::Range;

use crate::cursor::{Cursor, is_word, is_word_char};

/// Verb used when a placeholder does not name one.
pub const DEFAULT_VERB: &str = "v";

/// Grammar accepted for verbs in the bare (`$name:verb`) form.
///
/// The braced form accepts any verb text that contains no braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BareVerb {
    /// Flag characters (`+`, `#`, `-`) followed by one or more word
    /// characters: `$n:q`, `$n:+v`, `$n:08d`.
    #[default]
    Word,
    /// Exactly one character: `+`, `#`, or a word character.
    SingleChar,
}

/// Surface syntax of placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    /// Character that opens a placeholder.
    pub marker: char,
    /// Name prefix that turns on debug-echo (`name=value`) rendering.
    pub debug_marker: char,
    /// Verb grammar for the bare form.
    pub bare_verb: BareVerb,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            marker: '$',
            debug_marker: '=',
            bare_verb: BareVerb::Word,
        }
    }
}

/// A placeholder found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// Byte range of the whole placeholder in the template.
    pub span: Range<usize>,
    /// Name to bind, without the debug marker.
    pub name: &'t str,
    /// Verb text, if the placeholder names one.
    pub verb: Option<&'t str>,
    /// Render as `name=value`.
    pub debug: bool,
}

impl<'t> Placeholder<'t> {
    /// The verb, falling back to [`DEFAULT_VERB`].
    #[inline]
    pub fn verb_or_default(&self) -> &'t str {
        self.verb.unwrap_or(DEFAULT_VERB)
    }
}

/// Lazy iterator over the placeholders of a template.
pub struct Placeholders<'t> {
    template: &'t str,
    syntax: Syntax,
    /// Offset where the next search starts.
    pos: usize,
}

impl<'t> Placeholders<'t> {
    pub fn new(template: &'t str, syntax: &Syntax) -> Self {
        Self {
            template,
            syntax: *syntax,
            pos: 0,
        }
    }

    /// Try both forms at a marker found at `start`.
    fn scan_at(&self, start: usize) -> Option<Placeholder<'t>> {
        let body = start + self.syntax.marker.len_utf8();
        self.scan_bare(start, body)
            .or_else(|| self.scan_braced(start, body))
    }

    /// `$name`, `$=name`, `$name:verb`.
    fn scan_bare(&self, start: usize, body: usize) -> Option<Placeholder<'t>> {
        let mut cursor = Cursor::at(self.template, body);
        let debug = cursor.eat(self.syntax.debug_marker);
        let name = cursor.eat_while_ascii(is_word);
        if name.is_empty() {
            return None;
        }

        let before_colon = cursor.offset();
        let mut verb = None;
        if cursor.eat(':') {
            let verb_start = cursor.offset();
            let matched = match self.syntax.bare_verb {
                BareVerb::Word => {
                    cursor.eat_while_ascii(|b| matches!(b, b'+' | b'#' | b'-'));
                    !cursor.eat_while_ascii(is_word).is_empty()
                }
                BareVerb::SingleChar => {
                    if cursor.check(|c| c == '+' || c == '#' || is_word_char(c)) {
                        cursor.advance();
                        true
                    } else {
                        false
                    }
                }
            };
            if matched {
                verb = Some(cursor.slice_from(verb_start));
            } else {
                cursor.reset(before_colon);
            }
        }

        Some(Placeholder {
            span: start..cursor.offset(),
            name,
            verb,
            debug,
        })
    }

    /// `${name}`, `${ =name : verb }`.
    fn scan_braced(&self, start: usize, body: usize) -> Option<Placeholder<'t>> {
        let mut cursor = Cursor::at(self.template, body);
        if !cursor.eat('{') {
            return None;
        }
        let inner = cursor.eat_until(|c| c == '{' || c == '}');
        if !cursor.eat('}') {
            return None;
        }

        let (raw_name, raw_verb) = match inner.split_once(':') {
            Some((name, verb)) => (name, Some(verb)),
            None => (inner, None),
        };
        if raw_name.is_empty() || raw_verb.is_some_and(str::is_empty) {
            return None;
        }

        let mut name = raw_name.trim();
        let debug = match name.strip_prefix(self.syntax.debug_marker) {
            Some(stripped) => {
                name = stripped.trim_start();
                true
            }
            None => false,
        };
        if name.is_empty() || !name.bytes().all(is_word) {
            return None;
        }

        let verb = raw_verb.map(str::trim).filter(|v| !v.is_empty());

        Some(Placeholder {
            span: start..cursor.offset(),
            name,
            verb,
            debug,
        })
    }
}

impl<'t> Iterator for Placeholders<'t> {
    type Item = Placeholder<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.template.len() {
            let start = self.pos + self.template[self.pos..].find(self.syntax.marker)?;
            match self.scan_at(start) {
                Some(placeholder) => {
                    self.pos = placeholder.span.end;
                    return Some(placeholder);
                }
                None => self.pos = start + self.syntax.marker.len_utf8(),
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Placeholders<'_> {}

/// Distinct names referenced by `template`, in first-occurrence order.
pub fn extract_names<'t>(template: &'t str, syntax: &Syntax) -> Vec<&'t str> {
    let mut names: Vec<&'t str> = Vec::new();
    for placeholder in Placeholders::new(template, syntax) {
        if !names.contains(&placeholder.name) {
            names.push(placeholder.name);
        }
    }
    names
}
