//! Name → position binding.

use nmfmt_core::Value;

use crate::args::Args;

/// Append one value per entry of `arg_names` to `out`, in order.
///
/// Names without a value bind [`Value::MISSING`]. Binding never fails.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn bind(arg_names: &[String], args: &Args<'_>, out: &mut Vec<Value>) {
    out.reserve(arg_names.len());

    match *args {
        Args::None => out.extend(arg_names.iter().map(|_| Value::MISSING)),
        Args::Map(map) => out.extend(
            arg_names
                .iter()
                .map(|name| map.get(name.as_str()).cloned().unwrap_or(Value::MISSING)),
        ),
        Args::Pairs(pairs) => out.extend(arg_names.iter().map(|name| {
            first_match(pairs.iter().map(|(key, value)| (*key, value)), name)
        })),
        Args::Flat(flat) => out.extend(arg_names.iter().map(|name| {
            first_match(
                flat.chunks_exact(2)
                    .filter_map(|pair| Some((pair[0].as_str()?, &pair[1]))),
                name,
            )
        })),
    }
}

fn first_match<'v>(mut pairs: impl Iterator<Item = (&'v str, &'v Value)>, name: &str) -> Value {
    pairs
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.clone())
        .unwrap_or(Value::MISSING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ArgMap;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn bound(arg_names: &[&str], args: Args<'_>) -> Vec<Value> {
        let mut out = Vec::new();
        bind(&names(arg_names), &args, &mut out);
        out
    }

    #[test]
    fn map_follows_name_order() {
        let mut map = ArgMap::default();
        map.insert("b".into(), Value::from(2));
        map.insert("a".into(), Value::from(1));

        assert_eq!(
            bound(&["a", "b", "a", "zz"], Args::Map(&map)),
            vec![Value::from(1), Value::from(2), Value::from(1), Value::MISSING]
        );
    }

    #[test]
    fn pairs_first_wins() {
        let pairs = [("x", Value::from("first")), ("x", Value::from("second"))];
        assert_eq!(bound(&["x", "y"], Args::Pairs(&pairs)), vec![
            Value::from("first"),
            Value::MISSING
        ]);
    }

    #[test]
    fn flat_is_best_effort() {
        let flat = [
            Value::from(7),
            Value::from("skipped"),
            Value::from("a"),
            Value::from(true),
            Value::from("b"),
        ];
        // (7, "skipped") has a non-string name; "b" has no partner.
        assert_eq!(bound(&["a", "b", "skipped"], Args::Flat(&flat)), vec![
            Value::from(true),
            Value::MISSING,
            Value::MISSING
        ]);
    }

    #[test]
    fn none_binds_missing() {
        assert_eq!(bound(&["a"], Args::None), vec![Value::MISSING]);
    }

    #[test]
    fn appends_to_existing_buffer() {
        let mut out = vec![Value::from(0)];
        bind(&names(&["a"]), &Args::None, &mut out);
        assert_eq!(out.len(), 2);
    }
}
