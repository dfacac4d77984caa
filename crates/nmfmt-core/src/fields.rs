//! Records that flatten into name/value pairs.

use crate::Value;

/// A record whose public fields can be bound to placeholders by name.
///
/// Usually implemented with `#[derive(Fields)]`, which emits only `pub`
/// fields. Private fields never appear in the output.
pub trait Fields {
    fn fields(&self) -> Vec<(&'static str, Value)>;
}

impl<T: Fields + ?Sized> Fields for &T {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        (**self).fields()
    }
}

/// Flatten several records into one pair list.
///
/// When records share a field name the first record in `records` wins and
/// later occurrences are dropped.
pub fn flatten(records: &[&dyn Fields]) -> Vec<(&'static str, Value)> {
    let mut out: Vec<(&'static str, Value)> = Vec::new();
    for record in records {
        for (name, value) in record.fields() {
            if !out.iter().any(|(seen, _)| *seen == name) {
                out.push((name, value));
            }
        }
    }
    out
}
