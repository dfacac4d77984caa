//! Argument sources.

use rustc_hash::FxHashMap;

use nmfmt_core::Value;

/// Name → value mapping, the most common argument source.
pub type ArgMap = FxHashMap<String, Value>;

/// Where placeholder values come from.
///
/// Most callers never name this type: every formatting method takes
/// `impl Into<Args>`, and the conversions below pick the variant.
///
/// | source | variant |
/// |--------|---------|
/// | `()` | [`Args::None`] |
/// | `&ArgMap` | [`Args::Map`] |
/// | `&[Value]`, `&Vec<Value>`, `&[Value; N]` | [`Args::Flat`] |
/// | `&[(&str, Value)]` and its `Vec`/array forms | [`Args::Pairs`] |
#[derive(Debug, Clone, Copy, Default)]
pub enum Args<'a> {
    /// No arguments. The template goes to the engine untouched.
    #[default]
    None,
    /// Alternating name, value, name, value, ...
    ///
    /// Names must be [`Value::Str`]. Pairs with any other name, and a
    /// trailing unpaired entry, are ignored.
    Flat(&'a [Value]),
    Map(&'a ArgMap),
    /// Ordered pairs; the first pair with a matching name wins. This is the
    /// shape produced by [`flatten`](nmfmt_core::flatten) and
    /// [`Fields::fields`](nmfmt_core::Fields::fields).
    Pairs(&'a [(&'a str, Value)]),
}

impl Args<'_> {
    /// Whether the source holds no values at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Args::None => true,
            Args::Flat(values) => values.is_empty(),
            Args::Map(map) => map.is_empty(),
            Args::Pairs(pairs) => pairs.is_empty(),
        }
    }
}

impl From<()> for Args<'_> {
    fn from(_: ()) -> Self {
        Args::None
    }
}

impl<'a> From<&'a ArgMap> for Args<'a> {
    fn from(map: &'a ArgMap) -> Self {
        Args::Map(map)
    }
}

impl<'a> From<&'a [Value]> for Args<'a> {
    fn from(values: &'a [Value]) -> Self {
        Args::Flat(values)
    }
}

impl<'a> From<&'a Vec<Value>> for Args<'a> {
    fn from(values: &'a Vec<Value>) -> Self {
        Args::Flat(values)
    }
}

impl<'a, const N: usize> From<&'a [Value; N]> for Args<'a> {
    fn from(values: &'a [Value; N]) -> Self {
        Args::Flat(values)
    }
}

impl<'a, 'n: 'a> From<&'a [(&'n str, Value)]> for Args<'a> {
    fn from(pairs: &'a [(&'n str, Value)]) -> Self {
        Args::Pairs(pairs)
    }
}

impl<'a, 'n: 'a> From<&'a Vec<(&'n str, Value)>> for Args<'a> {
    fn from(pairs: &'a Vec<(&'n str, Value)>) -> Self {
        Args::Pairs(pairs)
    }
}

impl<'a, 'n: 'a, const N: usize> From<&'a [(&'n str, Value); N]> for Args<'a> {
    fn from(pairs: &'a [(&'n str, Value); N]) -> Self {
        Args::Pairs(pairs)
    }
}

/// Build an [`ArgMap`] from `name = value` pairs.
///
/// ```
/// let args = nmfmt::named!(Name = "Kim", Age = 22);
/// assert_eq!(args.len(), 2);
/// assert_eq!(args["Age"], nmfmt::Value::Int(22));
/// ```
#[macro_export]
macro_rules! named {
    ($($name:ident = $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::ArgMap::default();
        $(
            map.insert(
                ::std::string::String::from(::std::stringify!($name)),
                $crate::Value::from($value),
            );
        )*
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_variant() {
        let map = ArgMap::default();
        assert!(matches!(Args::from(&map), Args::Map(_)));
        assert!(matches!(Args::from(()), Args::None));

        let flat = vec![Value::from("a"), Value::from(1)];
        assert!(matches!(Args::from(&flat), Args::Flat(v) if v.len() == 2));
        assert!(matches!(Args::from(&[Value::Nil]), Args::Flat(_)));

        let pairs = vec![("a", Value::from(1))];
        assert!(matches!(Args::from(&pairs), Args::Pairs(p) if p[0].0 == "a"));
        assert!(matches!(Args::from(&[("b", Value::Nil)]), Args::Pairs(_)));
    }

    #[test]
    fn emptiness() {
        assert!(Args::None.is_empty());
        assert!(Args::Flat(&[]).is_empty());
        assert!(Args::Pairs(&[]).is_empty());
        assert!(Args::from(&ArgMap::default()).is_empty());
        assert!(!Args::Flat(&[Value::Nil]).is_empty());
    }

    #[test]
    fn named_macro() {
        let map = named!(a = 1u8, b = "two", c = 3.5,);
        assert_eq!(map.get("a"), Some(&Value::Uint(1)));
        assert_eq!(map.get("b"), Some(&Value::from("two")));
        assert_eq!(map.get("c"), Some(&Value::Float(3.5)));

        let empty = named!();
        assert!(empty.is_empty());
    }
}
