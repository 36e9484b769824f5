use std::cmp::Ordering;

use tracing::debug;

use super::compare;
use crate::value::Value;

/// A map's keys and values in sorted key order.
///
/// The two sequences are aligned: `values[i]` is the value stored under
/// `keys[i]`.
#[derive(Debug, Clone, Default)]
pub struct SortedMap {
    pub keys: Vec<Value>,
    pub values: Vec<Value>,
}

impl SortedMap {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.keys.iter().zip(&self.values)
    }
}

/// Sort a map value by key.
///
/// Returns `None` if `map` is not a map. The entries are copied out before
/// sorting, so the result never observes later changes to the map.
///
/// # Panics
///
/// Panics if a key cannot be compared; see [`compare`].
pub fn sort(map: &Value) -> Option<SortedMap> {
    let Value::Map(map) = map else {
        return None;
    };
    Some(sort_entries(map.entries.iter().cloned()))
}

/// Sort arbitrary `(key, value)` pairs by key.
///
/// The sort is stable: entries with equal keys keep their relative order.
pub fn sort_entries(entries: impl IntoIterator<Item = (Value, Value)>) -> SortedMap {
    let (mut keys, mut values): (Vec<Value>, Vec<Value>) = entries.into_iter().unzip();
    debug!(entries = keys.len(), "sorting map entries");

    let mut order: Vec<usize> = (0..keys.len()).collect();
    let mut scratch = Vec::with_capacity(order.len());
    merge_sort(&mut order, &mut scratch, &keys);

    SortedMap {
        keys: order.iter().map(|&i| std::mem::take(&mut keys[i])).collect(),
        values: order.iter().map(|&i| std::mem::take(&mut values[i])).collect(),
    }
}

/// Stable merge sort of key indices.
///
/// Only ever asks whether a right-hand key is strictly less than a left-hand
/// one, so it terminates with some order even though `compare` is not a
/// strict total order (NaNs, mixed types).
fn merge_sort(order: &mut [usize], scratch: &mut Vec<usize>, keys: &[Value]) {
    if order.len() < 2 {
        return;
    }
    let mid = order.len() / 2;
    merge_sort(&mut order[..mid], scratch, keys);
    merge_sort(&mut order[mid..], scratch, keys);

    scratch.clear();
    let (left, right) = order.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if compare(&keys[right[j]], &keys[left[i]]) == Ordering::Less {
            scratch.push(right[j]);
            j += 1;
        } else {
            scratch.push(left[i]);
            i += 1;
        }
    }
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);
    order.copy_from_slice(scratch);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{IntWidth, Type};

    fn int_keys(sorted: &SortedMap) -> Vec<i64> {
        sorted
            .keys
            .iter()
            .map(|k| match k {
                Value::Int(_, i) => *i,
                other => panic!("not an int key: {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_sort_ints_keeps_pairing() {
        let map = Value::map(
            Type::Int(IntWidth::I64),
            Type::String,
            vec![
                (3i64.into(), "three".into()),
                (1i64.into(), "one".into()),
                (2i64.into(), "two".into()),
            ],
        );
        let sorted = sort(&map).unwrap();
        assert_eq!(int_keys(&sorted), vec![1, 2, 3]);
        let values: Vec<String> = sorted.values.iter().map(|v| v.to_string()).collect();
        assert_eq!(values, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let entries = (0..20i64).map(|i| (Value::from(i % 3), Value::from(i)));
        let sorted = sort_entries(entries);
        assert_eq!(sorted.len(), 20);
        for (key, group) in [(0i64, 0..7usize), (1, 7..14), (2, 14..20)] {
            let seen: Vec<String> = sorted
                .iter()
                .filter(|(k, _)| matches!(k, Value::Int(_, i) if *i == key))
                .map(|(_, v)| v.to_string())
                .collect();
            assert_eq!(seen.len(), group.len());
            assert!(seen.windows(2).all(|w| {
                w[0].parse::<i64>().unwrap() < w[1].parse::<i64>().unwrap()
            }));
        }
    }

    #[test]
    fn test_nan_key_sorts_first() {
        let sorted = sort_entries(vec![
            (f64::NAN.into(), "nan".into()),
            (1.0f64.into(), "one".into()),
            ((-1.0f64).into(), "minus".into()),
        ]);
        let values: Vec<String> = sorted.values.iter().map(|v| v.to_string()).collect();
        assert_eq!(values, vec!["nan", "minus", "one"]);
    }

    #[test]
    fn test_many_nans_terminate() {
        let entries: Vec<(Value, Value)> = (0..50)
            .map(|i| {
                let key = if i % 2 == 0 { f64::NAN } else { f64::from(i) };
                (key.into(), i64::from(i).into())
            })
            .collect();
        let sorted = sort_entries(entries);
        assert_eq!(sorted.len(), 50);
    }

    #[test]
    fn test_mixed_types_still_sort() {
        let sorted = sort_entries(vec![
            ("b".into(), 1i64.into()),
            (2i64.into(), 2i64.into()),
            ("a".into(), 3i64.into()),
            (1i64.into(), 4i64.into()),
        ]);
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn test_sort_non_map_is_none() {
        assert!(sort(&Value::from(1i64)).is_none());
        assert!(sort(&Value::map(Type::String, Type::String, vec![])).unwrap().is_empty());
    }

    #[test]
    fn test_sort_struct_keys() {
        let key = |a: i64, b: bool| Value::structure("K", vec![("a", a.into()), ("b", b.into())]);
        let sorted = sort_entries(vec![
            (key(1, true), "1t".into()),
            (key(0, true), "0t".into()),
            (key(1, false), "1f".into()),
        ]);
        let values: Vec<String> = sorted.values.iter().map(|v| v.to_string()).collect();
        assert_eq!(values, vec!["0t", "1f", "1t"]);
    }
}
