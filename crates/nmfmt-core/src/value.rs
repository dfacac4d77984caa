//! Argument values.
//!
//! A [`Value`] is what a positional engine receives for each directive. It is
//! deliberately small: the engine decides how each variant renders under each
//! verb, the rest of the system only moves values around.

/// An argument value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value. Renders as `<nil>`.
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Sentinel bound to a placeholder whose name has no value.
    pub const MISSING: Value = Value::Nil;

    /// Name of the value's type, as reported by `%T` and in engine errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "i64",
            Value::Uint(_) => "u64",
            Value::Float(_) => "f64",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::List(_) => "list",
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// The string payload, if this is a [`Value::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($src:ty),*) => {
        $(
            impl From<$src> for Value {
                #[inline]
                fn from(v: $src) -> Self {
                    Value::$variant(v as $target)
                }
            }

            impl ToValue for $src {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::$variant(*self as $target)
                }
            }
        )*
    };
}

impl_from!(Int as i64: i8, i16, i32, i64, isize);
impl_from!(Uint as u64: u8, u16, u32, u64, usize);
impl_from!(Float as f64: f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

/// Conversion into a [`Value`] without consuming the source.
///
/// `#[derive(Fields)]` calls this on every emitted field, so a field type
/// must implement it to be formattable.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Nil, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Value::from(-3i8), Value::Int(-3));
        assert_eq!(Value::from(7usize), Value::Uint(7));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from("hi"), Value::Str("hi".into()));
        assert_eq!(Value::from(None::<i32>), Value::Nil);
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn to_value_by_reference() {
        let name = String::from("Kim");
        assert_eq!((&name).to_value(), Value::Str("Kim".into()));
        assert_eq!(Some(3u8).to_value(), Value::Uint(3));
        assert_eq!(vec!['a'].to_value(), Value::List(vec![Value::Char('a')]));
    }

    #[test]
    fn missing_is_nil() {
        assert!(Value::MISSING.is_nil());
        assert_eq!(Value::MISSING.type_name(), "nil");
        assert_eq!(Value::default(), Value::MISSING);
    }
}
