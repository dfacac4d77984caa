//! Directive syntax: `%[flags][width][.precision][[index]]verb`.

use bitflags::bitflags;
use num_enum::TryFromPrimitive;

use nmfmt_core::{FormatError, FormatResult};

bitflags! {
    /// Directive flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        /// `+`: always print a sign for numbers.
        const PLUS = 1 << 0;
        /// `-`: pad on the right.
        const MINUS = 1 << 1;
        /// `#`: alternate form (prefixes, literal syntax).
        const SHARP = 1 << 2;
        /// ` `: leave a space for an elided sign.
        const SPACE = 1 << 3;
        /// `0`: pad numbers with leading zeros.
        const ZERO = 1 << 4;
    }
}

impl Flags {
    fn from_byte(b: u8) -> Option<Flags> {
        match b {
            b'+' => Some(Flags::PLUS),
            b'-' => Some(Flags::MINUS),
            b'#' => Some(Flags::SHARP),
            b' ' => Some(Flags::SPACE),
            b'0' => Some(Flags::ZERO),
            _ => None,
        }
    }
}

/// Conversion verbs understood by [`Printf`](crate::Printf).
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum Verb {
    Value = b'v',
    Str = b's',
    Quote = b'q',
    Decimal = b'd',
    Binary = b'b',
    Octal = b'o',
    OctalPrefixed = b'O',
    HexLower = b'x',
    HexUpper = b'X',
    Char = b'c',
    Unicode = b'U',
    SciLower = b'e',
    SciUpper = b'E',
    FixedLower = b'f',
    FixedUpper = b'F',
    GeneralLower = b'g',
    GeneralUpper = b'G',
    Bool = b't',
    Type = b'T',
}

impl Verb {
    #[inline]
    pub fn as_char(self) -> char {
        self as u8 as char
    }

    /// Whether zero padding applies to this verb.
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            Verb::Value | Verb::Str | Verb::Quote | Verb::Char | Verb::Bool | Verb::Type
        )
    }
}

/// Largest width or precision a directive may ask for.
pub const MAX_WIDTH: usize = 1_000_000;

/// One parsed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    /// Explicit 1-based argument index.
    pub index: Option<usize>,
    pub verb: Verb,
}

/// What follows a `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// `%%`.
    Percent,
    Directive(Directive),
}

/// Parse the directive whose `%` sits at `start`.
///
/// Returns the piece and the offset just past it.
pub fn parse(template: &str, start: usize) -> FormatResult<(Piece, usize)> {
    let bytes = template.as_bytes();
    let mut i = start + 1;

    let mut flags = Flags::empty();
    while let Some(flag) = bytes.get(i).copied().and_then(Flags::from_byte) {
        flags |= flag;
        i += 1;
    }
    if flags.contains(Flags::MINUS) {
        flags.remove(Flags::ZERO);
    }

    let mut index = parse_index(bytes, &mut i)?;

    let width = parse_number(bytes, &mut i);
    if width.is_some_and(|w| w > MAX_WIDTH) {
        return Err(FormatError::BadWidth { offset: start });
    }
    let mut precision = None;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let p = parse_number(bytes, &mut i).unwrap_or(0);
        if p > MAX_WIDTH {
            return Err(FormatError::BadPrecision { offset: start });
        }
        precision = Some(p);
    }

    if index.is_none() {
        index = parse_index(bytes, &mut i)?;
    }

    let Some(ch) = template[i..].chars().next() else {
        return Err(FormatError::NoVerb { offset: start });
    };
    let end = i + ch.len_utf8();

    if ch == '%' {
        return Ok((Piece::Percent, end));
    }

    let verb = u8::try_from(ch)
        .ok()
        .and_then(|b| Verb::try_from(b).ok())
        .ok_or(FormatError::UnknownVerb {
            verb: ch,
            offset: start,
        })?;

    Ok((
        Piece::Directive(Directive {
            flags,
            width,
            precision,
            index,
            verb,
        }),
        end,
    ))
}

fn parse_number(bytes: &[u8], i: &mut usize) -> Option<usize> {
    let start = *i;
    let mut n: usize = 0;
    while let Some(b) = bytes.get(*i).filter(|b| b.is_ascii_digit()) {
        n = n.saturating_mul(10).saturating_add(usize::from(b - b'0'));
        *i += 1;
    }
    (*i > start).then_some(n)
}

/// `[n]`, 1-based.
fn parse_index(bytes: &[u8], i: &mut usize) -> FormatResult<Option<usize>> {
    if bytes.get(*i) != Some(&b'[') {
        return Ok(None);
    }
    let open = *i;
    *i += 1;
    let n = parse_number(bytes, i);
    match (n, bytes.get(*i)) {
        (Some(n), Some(b']')) if n > 0 => {
            *i += 1;
            Ok(Some(n))
        }
        _ => Err(FormatError::BadIndex { offset: open }),
    }
}
