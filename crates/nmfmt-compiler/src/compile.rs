//! Named → positional template compilation.

use nmfmt_parser::{Placeholders, Syntax};

/// The positional engine's escape character. Literal occurrences are doubled.
pub const ESCAPE: char = '%';

/// A template translated for a positional engine.
///
/// Feeding [`format`](Self::format) to the engine with one argument per entry
/// of [`arg_names`](Self::arg_names), in order, reproduces the original
/// template with every placeholder substituted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledTemplate {
    format: String,
    arg_names: Vec<String>,
}

impl CompiledTemplate {
    /// The positional template.
    #[inline]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Names to bind, one per directive, in directive order. Names repeat
    /// when a placeholder occurs more than once.
    #[inline]
    pub fn arg_names(&self) -> &[String] {
        &self.arg_names
    }

    #[inline]
    pub fn has_placeholders(&self) -> bool {
        !self.arg_names.is_empty()
    }
}

/// Compile `template`.
///
/// Pure: the same template and syntax always produce an equal result.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile(template: &str, syntax: &Syntax) -> CompiledTemplate {
    let mut format = String::with_capacity(template.len() + 8);
    let mut arg_names = Vec::new();
    let mut last = 0;

    for placeholder in Placeholders::new(template, syntax) {
        push_escaped(&mut format, &template[last..placeholder.span.start]);
        if placeholder.debug {
            format.push_str(placeholder.name);
            format.push('=');
        }
        format.push(ESCAPE);
        format.push_str(placeholder.verb_or_default());
        arg_names.push(placeholder.name.to_owned());
        last = placeholder.span.end;
    }
    push_escaped(&mut format, &template[last..]);

    CompiledTemplate { format, arg_names }
}

/// `text` with every [`ESCAPE`] doubled.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(i) = rest.find(ESCAPE) {
        out.push_str(&rest[..=i]);
        out.push(ESCAPE);
        rest = &rest[i + 1..];
    }
    out.push_str(rest);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(template: &str) -> CompiledTemplate {
        compile(template, &Syntax::default())
    }

    #[test]
    fn no_placeholders() {
        let compiled = c("hello\nworld");
        assert_eq!(compiled.format(), "hello\nworld");
        assert!(compiled.arg_names().is_empty());
        assert!(!compiled.has_placeholders());
    }

    #[test]
    fn empty_template() {
        assert_eq!(c(""), CompiledTemplate::default());
    }

    #[test]
    fn literal_percent_is_doubled() {
        assert_eq!(c("100% sure").format(), "100%% sure");
        assert_eq!(c("$rate% of %d").format(), "%v%% of %%d");
        assert_eq!(escape("%%"), "%%%%");
    }

    #[test]
    fn placeholders_become_directives() {
        let compiled = c("$name is ${ age } years old.");
        assert_eq!(compiled.format(), "%v is %v years old.");
        assert_eq!(compiled.arg_names(), ["name", "age"]);
    }

    #[test]
    fn verbs_are_copied() {
        let compiled = c("$Name:q ${Name:#v} ${ n : 08.3f }");
        assert_eq!(compiled.format(), "%q %#v %08.3f");
        assert_eq!(compiled.arg_names(), ["Name", "Name", "n"]);
    }

    #[test]
    fn debug_echo_emits_label() {
        let compiled = c("$=greeting:q, ${=name}");
        assert_eq!(compiled.format(), "greeting=%q, name=%v");
        assert_eq!(compiled.arg_names(), ["greeting", "name"]);
    }

    #[test]
    fn malformed_passes_through() {
        let compiled = c("${broken $ok");
        assert_eq!(compiled.format(), "${broken %v");
        assert_eq!(compiled.arg_names(), ["ok"]);
    }

    #[test]
    fn deterministic() {
        let template = "$a:q ${ =b } 50% ${c:x}";
        assert_eq!(c(template), c(template));
    }
}
