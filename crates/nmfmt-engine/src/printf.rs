//! The default engine.

use nmfmt_core::{FormatError, FormatResult, Value};

use crate::Engine;
use crate::directive::{Piece, parse};
use crate::render::render;

/// `printf`-style engine with value-generic verbs.
///
/// | verb | accepts | output |
/// |------|---------|--------|
/// | `v` | any | default form; `#v` quotes strings and chars |
/// | `s` | string, char | text |
/// | `q` | string, char, integer | quoted |
/// | `d` `b` `o` `O` `x` `X` | integer (`x`/`X` also strings) | digits |
/// | `c` `U` | integer, char | character / `U+0041` |
/// | `e` `E` `f` `F` `g` `G` | float | float formats |
/// | `t` | bool | `true`/`false` |
/// | `T` | any | type name |
///
/// Lists apply the verb element-wise. A nil argument renders `<nil>` under
/// every verb. Arguments are consumed in order unless a directive names one
/// with `[n]`; if no directive does, unconsumed arguments are an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printf;

impl Engine for Printf {
    #[cfg_attr(feature = "profiling", profiling::function)]
    fn format(&self, out: &mut String, template: &str, args: &[Value]) -> FormatResult<()> {
        let mut next = 0usize;
        let mut reordered = false;
        let mut rest_start = 0usize;

        while let Some(rel) = template[rest_start..].find('%') {
            let start = rest_start + rel;
            out.push_str(&template[rest_start..start]);

            let (piece, end) = parse(template, start)?;
            rest_start = end;

            let directive = match piece {
                Piece::Percent => {
                    out.push('%');
                    continue;
                }
                Piece::Directive(d) => d,
            };

            let argnum = match directive.index {
                Some(n) => {
                    reordered = true;
                    n - 1
                }
                None => next,
            };
            let value = args.get(argnum).ok_or(FormatError::MissingArgument {
                verb: directive.verb.as_char(),
                index: argnum + 1,
            })?;
            render(out, &directive, value, argnum + 1)?;
            next = argnum + 1;
        }
        out.push_str(&template[rest_start..]);

        if !reordered && next < args.len() {
            return Err(FormatError::ExtraArguments {
                unused: args.len() - next,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(template: &str, args: &[Value]) -> FormatResult<String> {
        let mut out = String::new();
        Printf.format(&mut out, template, args).map(|()| out)
    }

    #[test]
    fn literal_only() {
        assert_eq!(run("", &[]).unwrap(), "");
        assert_eq!(run("hello\nworld", &[]).unwrap(), "hello\nworld");
        assert_eq!(run("100%% sure", &[]).unwrap(), "100% sure");
    }

    #[test]
    fn sequential_arguments() {
        let args = [Value::from("Kim"), Value::from(22)];
        assert_eq!(
            run("%v is %d years old.", &args).unwrap(),
            "Kim is 22 years old."
        );
    }

    #[test]
    fn explicit_indexes() {
        let args = [Value::from("Hello"), Value::from("Player")];
        assert_eq!(run("%[2]s, %[1]s", &args).unwrap(), "Player, Hello");
        assert_eq!(run("%[2]s, %[1]s, %[2]s", &args).unwrap(), "Player, Hello, Player");
        // Unused arguments are fine once an index has been given.
        assert_eq!(run("%[1]s", &args).unwrap(), "Hello");
    }

    #[test]
    fn index_then_sequential() {
        let args = [Value::from(1), Value::from(2), Value::from(3)];
        assert_eq!(run("%[2]d %d", &args).unwrap(), "2 3");
    }

    #[test]
    fn missing_argument() {
        let err = run("%v and %v", &[Value::from(1)]).unwrap_err();
        assert!(matches!(
            err,
            FormatError::MissingArgument { verb: 'v', index: 2 }
        ));

        let err = run("%[3]v", &[Value::from(1)]).unwrap_err();
        assert!(matches!(err, FormatError::MissingArgument { index: 3, .. }));
    }

    #[test]
    fn extra_arguments() {
        let err = run("a", &[Value::from("hoge")]).unwrap_err();
        assert!(matches!(err, FormatError::ExtraArguments { unused: 1 }));
    }

    #[test]
    fn directive_errors() {
        assert!(matches!(
            run("50%", &[]).unwrap_err(),
            FormatError::NoVerb { offset: 2 }
        ));
        assert!(matches!(
            run("%z", &[Value::from(1)]).unwrap_err(),
            FormatError::UnknownVerb { verb: 'z', .. }
        ));
        assert!(matches!(
            run("%d", &[Value::from("x")]).unwrap_err(),
            FormatError::BadArgument { verb: 'd', kind: "string", index: 1 }
        ));
    }

    #[test]
    fn non_ascii_literals() {
        let args = [Value::from("世界")];
        assert_eq!(run("こんにちは、%v！", &args).unwrap(), "こんにちは、世界！");
    }
}
