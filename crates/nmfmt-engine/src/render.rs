//! Rendering one value under one directive.

use std::fmt::Write as _;

use nmfmt_core::{FormatError, FormatResult, Value};

use crate::directive::{Directive, Flags, Verb};

const NIL: &str = "<nil>";

/// Fraction digits past which an `f64`'s exact decimal expansion is all
/// zeros. Longer precisions are padded instead of handed to `format!`.
const EXACT_DIGITS: usize = 1100;

/// Append `value` formatted by `d` to `out`. `index` is the 1-based
/// argument number, used in errors.
pub fn render(out: &mut String, d: &Directive, value: &Value, index: usize) -> FormatResult<()> {
    let body = match d.verb {
        Verb::Type => value.type_name().to_owned(),
        _ if value.is_nil() => NIL.to_owned(),
        _ => body(d, value).ok_or(FormatError::BadArgument {
            verb: d.verb.as_char(),
            kind: value.type_name(),
            index,
        })?,
    };
    let zero_pad = d.verb.is_numeric()
        && !value.is_nil()
        && !matches!(value, Value::Float(x) if !x.is_finite());
    pad(out, &body, d, zero_pad);
    Ok(())
}

/// The unpadded text, or `None` when the verb does not apply to the value.
fn body(d: &Directive, value: &Value) -> Option<String> {
    if let Value::List(items) = value {
        return list(d, items);
    }
    match d.verb {
        Verb::Value => Some(default_form(d, value)),
        Verb::Str => match value {
            Value::Str(s) => Some(truncate(s, d.precision).to_owned()),
            Value::Char(c) => Some(c.to_string()),
            _ => None,
        },
        Verb::Quote => match value {
            Value::Str(s) => Some(quote_str(truncate(s, d.precision))),
            Value::Char(c) => Some(quote_char(*c)),
            Value::Int(_) | Value::Uint(_) => code_point(value).map(quote_char),
            _ => None,
        },
        Verb::Decimal | Verb::Binary | Verb::Octal | Verb::OctalPrefixed => integer(d, value),
        Verb::HexLower | Verb::HexUpper => match value {
            Value::Str(s) => Some(hex_bytes(s.as_bytes(), d.verb == Verb::HexUpper)),
            _ => integer(d, value),
        },
        Verb::Char => code_point(value).map(String::from),
        Verb::Unicode => {
            let c = code_point(value)?;
            let mut s = format!("U+{:04X}", c as u32);
            if d.flags.contains(Flags::SHARP) {
                let _ = write!(s, " '{c}'");
            }
            Some(s)
        }
        Verb::SciLower
        | Verb::SciUpper
        | Verb::FixedLower
        | Verb::FixedUpper
        | Verb::GeneralLower
        | Verb::GeneralUpper => match value {
            Value::Float(x) => Some(float(d, *x)),
            Value::Int(n) => Some(float(d, *n as f64)),
            Value::Uint(n) => Some(float(d, *n as f64)),
            _ => None,
        },
        Verb::Bool => match value {
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        },
        Verb::Type => Some(value.type_name().to_owned()),
    }
}

/// `%v` and `%#v`.
fn default_form(d: &Directive, value: &Value) -> String {
    let sharp = d.flags.contains(Flags::SHARP);
    match value {
        Value::Nil => NIL.to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Uint(n) if sharp => format!("{n:#x}"),
        Value::Uint(n) => n.to_string(),
        Value::Float(x) => float_general(*x, d.precision),
        Value::Char(c) if sharp => quote_char(*c),
        Value::Char(c) => c.to_string(),
        Value::Str(s) if sharp => quote_str(s),
        Value::Str(s) => truncate(s, d.precision).to_owned(),
        Value::List(items) => list(d, items).unwrap_or_default(),
    }
}

/// Lists render element-wise: `[a b]`, or `[a, b]` under `%#v`.
fn list(d: &Directive, items: &[Value]) -> Option<String> {
    let elem = Directive {
        width: None,
        ..*d
    };
    let sep = if d.verb == Verb::Value && d.flags.contains(Flags::SHARP) {
        ", "
    } else {
        " "
    };
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        match item {
            Value::Nil => out.push_str(NIL),
            _ => out.push_str(&body(&elem, item)?),
        }
    }
    out.push(']');
    Some(out)
}

fn integer(d: &Directive, value: &Value) -> Option<String> {
    let (negative, magnitude) = match value {
        Value::Int(n) => (*n < 0, n.unsigned_abs()),
        Value::Uint(n) => (false, *n),
        Value::Char(c) => (false, u64::from(*c as u32)),
        _ => return None,
    };
    let sharp = d.flags.contains(Flags::SHARP);
    let (prefix, digits) = match d.verb {
        Verb::Binary => (if sharp { "0b" } else { "" }, format!("{magnitude:b}")),
        Verb::Octal => (if sharp { "0" } else { "" }, format!("{magnitude:o}")),
        Verb::OctalPrefixed => ("0o", format!("{magnitude:o}")),
        Verb::HexLower => (if sharp { "0x" } else { "" }, format!("{magnitude:x}")),
        Verb::HexUpper => (if sharp { "0X" } else { "" }, format!("{magnitude:X}")),
        _ => ("", magnitude.to_string()),
    };

    let mut s = String::with_capacity(digits.len() + 4);
    s.push_str(sign(d.flags, negative));
    s.push_str(prefix);
    if let Some(p) = d.precision {
        s.extend(std::iter::repeat_n('0', p.saturating_sub(digits.len())));
    }
    s.push_str(&digits);
    Some(s)
}

fn sign(flags: Flags, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if flags.contains(Flags::PLUS) {
        "+"
    } else if flags.contains(Flags::SPACE) {
        " "
    } else {
        ""
    }
}

fn code_point(value: &Value) -> Option<char> {
    match value {
        Value::Char(c) => Some(*c),
        Value::Int(n) => Some(u32::try_from(*n).ok().and_then(char::from_u32).unwrap_or('\u{FFFD}')),
        Value::Uint(n) => Some(u32::try_from(*n).ok().and_then(char::from_u32).unwrap_or('\u{FFFD}')),
        _ => None,
    }
}

fn float(d: &Directive, x: f64) -> String {
    if !x.is_finite() {
        return non_finite(d.flags, x);
    }
    let mut s = String::from(sign(d.flags, x.is_sign_negative()));
    let abs = x.abs();
    let text = match d.verb {
        Verb::SciLower | Verb::SciUpper => scientific(abs, d.precision.unwrap_or(6)),
        Verb::FixedLower | Verb::FixedUpper => fixed(abs, d.precision.unwrap_or(6)),
        _ => general(abs, d.precision),
    };
    s.push_str(&text);
    if matches!(d.verb, Verb::SciUpper | Verb::GeneralUpper) {
        s = s.to_ascii_uppercase();
    }
    s
}

/// `%v` for floats: `%g` without flags.
fn float_general(x: f64, precision: Option<usize>) -> String {
    if !x.is_finite() {
        return non_finite(Flags::empty(), x);
    }
    let text = general(x.abs(), precision);
    if x.is_sign_negative() {
        format!("-{text}")
    } else {
        text
    }
}

fn non_finite(flags: Flags, x: f64) -> String {
    if x.is_nan() {
        "NaN".to_owned()
    } else if x < 0.0 {
        "-Inf".to_owned()
    } else if flags.contains(Flags::SPACE) && !flags.contains(Flags::PLUS) {
        " Inf".to_owned()
    } else {
        "+Inf".to_owned()
    }
}

/// Split Rust's `{:e}` output into mantissa and exponent.
fn split_exp(s: &str) -> (&str, i32) {
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn with_exp(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

/// `d.dddddd` for a non-negative finite value.
fn fixed(abs: f64, precision: usize) -> String {
    let shown = precision.min(EXACT_DIGITS);
    let mut s = format!("{abs:.shown$}");
    s.extend(std::iter::repeat_n('0', precision - shown));
    s
}

/// `d.dddddde±dd` for a non-negative finite value.
fn scientific(abs: f64, precision: usize) -> String {
    let shown = precision.min(EXACT_DIGITS);
    let raw = format!("{abs:.shown$e}");
    let (mantissa, exp) = split_exp(&raw);
    let mut mantissa = mantissa.to_owned();
    mantissa.extend(std::iter::repeat_n('0', precision - shown));
    with_exp(&mantissa, exp)
}

/// `%g` for a non-negative finite value.
///
/// Without a precision the shortest round-trip digits are used and the
/// exponent form is chosen when the exponent is below -4 or at least 6.
/// With a precision `p` the value is rounded to `p` significant digits and
/// the exponent form is chosen when the exponent is below -4 or at least `p`.
fn general(abs: f64, precision: Option<usize>) -> String {
    let raw = match precision {
        None => format!("{abs:e}"),
        Some(p) => {
            let fraction = (p.max(1) - 1).min(EXACT_DIGITS);
            format!("{abs:.fraction$e}")
        }
    };
    let (mantissa, exp) = split_exp(&raw);
    let mantissa = trim_fraction(mantissa);
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).count();

    let limit = match precision {
        None => 6,
        Some(p) => {
            let p = p.max(1) as i32;
            if p > digits as i32 && digits as i32 >= exp + 1 {
                digits as i32
            } else {
                p
            }
        }
    };

    if exp < -4 || exp >= limit {
        return with_exp(mantissa, exp);
    }
    let decimals = (digits as i32 - exp - 1).max(0) as usize;
    format!("{abs:.decimals$}")
}

/// Drop trailing zeros (and a bare point) from a mantissa.
fn trim_fraction(mantissa: &str) -> &str {
    if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    }
}

fn truncate(s: &str, precision: Option<usize>) -> &str {
    match precision.and_then(|p| s.char_indices().nth(p)) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

fn hex_bytes(bytes: &[u8], upper: bool) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = if upper {
            write!(s, "{b:02X}")
        } else {
            write!(s, "{b:02x}")
        };
    }
    s
}

/// Double-quoted string with backslash escapes.
pub fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        escape_into(&mut out, c, '"');
    }
    out.push('"');
    out
}

/// Single-quoted character with backslash escapes.
pub fn quote_char(c: char) -> String {
    let mut out = String::with_capacity(4);
    out.push('\'');
    escape_into(&mut out, c, '\'');
    out.push('\'');
    out
}

fn escape_into(out: &mut String, c: char, quote: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{07}' => out.push_str("\\a"),
        '\u{08}' => out.push_str("\\b"),
        '\u{0c}' => out.push_str("\\f"),
        '\u{0b}' => out.push_str("\\v"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => {
            let _ = match c as u32 {
                n @ 0..=0xff => write!(out, "\\x{n:02x}"),
                n @ 0x100..=0xffff => write!(out, "\\u{n:04x}"),
                n => write!(out, "\\U{n:08x}"),
            };
        }
        c => out.push(c),
    }
}

/// Apply width. Zero padding goes after any sign or radix prefix.
fn pad(out: &mut String, body: &str, d: &Directive, numeric: bool) {
    let len = body.chars().count();
    let fill = d.width.unwrap_or(0).saturating_sub(len);
    if fill == 0 {
        out.push_str(body);
        return;
    }
    if d.flags.contains(Flags::MINUS) {
        out.push_str(body);
        out.extend(std::iter::repeat_n(' ', fill));
    } else if numeric && d.flags.contains(Flags::ZERO) && d.precision.is_none_or(|_| is_float(d.verb)) {
        let split = prefix_len(body);
        out.push_str(&body[..split]);
        out.extend(std::iter::repeat_n('0', fill));
        out.push_str(&body[split..]);
    } else {
        out.extend(std::iter::repeat_n(' ', fill));
        out.push_str(body);
    }
}

fn is_float(verb: Verb) -> bool {
    matches!(
        verb,
        Verb::SciLower
            | Verb::SciUpper
            | Verb::FixedLower
            | Verb::FixedUpper
            | Verb::GeneralLower
            | Verb::GeneralUpper
    )
}

fn prefix_len(body: &str) -> usize {
    let sign = usize::from(body.starts_with(['+', '-', ' ']));
    let rest = &body[sign..];
    let radix = ["0x", "0X", "0b", "0o"]
        .iter()
        .find(|p| rest.starts_with(**p))
        .map_or(0, |p| p.len());
    sign + radix
}
