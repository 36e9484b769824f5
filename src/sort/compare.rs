use std::cmp::Ordering;

use crate::value::Value;

/// Compare two values of the same type.
///
/// Rules, by kind:
/// - when applicable, nil compares low
/// - ints, uints, floats and strings order by `<`
/// - NaN compares less than non-NaN floats
/// - bool compares false before true
/// - complex compares real, then imag
/// - pointers and channels compare by address
/// - structs compare each field in turn
/// - arrays compare each element in turn
/// - interface values compare first by dynamic type, then by concrete value
///
/// If the types differ the result is `Less` whichever way round the
/// arguments are given. There is no good answer, but they are not equal.
///
/// # Panics
///
/// Panics if the values are of a type that cannot be a map key: nil, maps,
/// slices and functions.
pub fn compare(a: &Value, b: &Value) -> Ordering {
    let a_type = a.type_of();
    if a_type != b.type_of() {
        return Ordering::Less;
    }
    match (a, b) {
        (Value::Int(_, a), Value::Int(_, b)) => a.cmp(b),
        (Value::Uint(_, a), Value::Uint(_, b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) | (Value::Html(a), Value::Html(b)) => {
            a.as_bytes().cmp(b.as_bytes())
        }
        (Value::Float(_, a), Value::Float(_, b)) => float_compare(*a, *b),
        (Value::Complex(_, a), Value::Complex(_, b)) => {
            float_compare(a.re, b.re).then_with(|| float_compare(a.im, b.im))
        }
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Pointer(_, a), Value::Pointer(_, b))
        | (Value::UnsafePointer(a), Value::UnsafePointer(b)) => a.cmp(b),
        (Value::Chan(_, a), Value::Chan(_, b)) => {
            nil_compare(a, b).unwrap_or_else(|| a.cmp(b))
        }
        (Value::Struct(a), Value::Struct(b)) => compare_each(
            a.fields.iter().map(|(_, v)| v),
            b.fields.iter().map(|(_, v)| v),
        ),
        (Value::Array(a), Value::Array(b)) => compare_each(&a.items, &b.items),
        (Value::Interface(a), Value::Interface(b)) => match (a, b) {
            (Some(a), Some(b)) => a
                .type_of()
                .cmp(&b.type_of())
                .then_with(|| compare(a, b)),
            _ => nil_compare(a, b).unwrap_or(Ordering::Equal),
        },
        _ => panic!("bad type in compare: {}", a_type),
    }
}

/// Compares pairwise in order; the first non-equal result wins.
fn compare_each<'a>(
    a: impl IntoIterator<Item = &'a Value>,
    b: impl IntoIterator<Item = &'a Value>,
) -> Ordering {
    a.into_iter()
        .zip(b)
        .map(|(a, b)| compare(a, b))
        .find(|c| c.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Orders nil before non-nil; two nils are equal. `None` when neither is nil.
fn nil_compare<T>(a: &Option<T>, b: &Option<T>) -> Option<Ordering> {
    match (a, b) {
        (None, None) => Some(Ordering::Equal),
        (None, Some(_)) => Some(Ordering::Less),
        (Some(_), None) => Some(Ordering::Greater),
        (Some(_), Some(_)) => None,
    }
}

/// NaNs compare low. Zeroes of either sign are equal.
fn float_compare(a: f64, b: f64) -> Ordering {
    if a.is_nan() {
        // No good answer if b is also NaN
        Ordering::Less
    } else if b.is_nan() {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Complex, ComplexWidth, IntWidth, Type};
    use std::rc::Rc;

    fn ints(v: &[i64]) -> Vec<Value> {
        v.iter().map(|&i| Value::from(i)).collect()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(compare(&1i64.into(), &2i64.into()), Ordering::Less);
        assert_eq!(compare(&2i64.into(), &1i64.into()), Ordering::Greater);
        assert_eq!(compare(&5u8.into(), &5u8.into()), Ordering::Equal);
        assert_eq!(compare(&u64::MAX.into(), &1u64.into()), Ordering::Greater);
        assert_eq!(compare(&"abc".into(), &"abd".into()), Ordering::Less);
        assert_eq!(compare(&"b".into(), &"ab".into()), Ordering::Greater);
        assert_eq!(compare(&false.into(), &true.into()), Ordering::Less);
        assert_eq!(compare(&true.into(), &true.into()), Ordering::Equal);
    }

    #[test]
    fn test_mismatched_types_are_less_both_ways() {
        let s = Value::from("1");
        let i = Value::from(1i64);
        assert_eq!(compare(&s, &i), Ordering::Less);
        assert_eq!(compare(&i, &s), Ordering::Less);

        // Same kind, different width
        assert_eq!(compare(&1i32.into(), &1i64.into()), Ordering::Less);
        assert_eq!(compare(&"a".into(), &Value::html("a")), Ordering::Less);
    }

    #[test]
    fn test_nan_sorts_low() {
        let nan = Value::from(f64::NAN);
        assert_eq!(compare(&nan, &f64::NEG_INFINITY.into()), Ordering::Less);
        assert_eq!(compare(&f64::NEG_INFINITY.into(), &nan), Ordering::Greater);
        // First NaN wins
        assert_eq!(compare(&nan, &nan), Ordering::Less);
        assert_eq!(compare(&(-0.0f64).into(), &0.0f64.into()), Ordering::Equal);
    }

    #[test]
    fn test_complex_real_then_imag() {
        let c = |re, im| Value::Complex(ComplexWidth::C128, Complex { re, im });
        assert_eq!(compare(&c(1.0, 9.0), &c(2.0, 0.0)), Ordering::Less);
        assert_eq!(compare(&c(1.0, 1.0), &c(1.0, 0.0)), Ordering::Greater);
        assert_eq!(compare(&c(1.0, 1.0), &c(1.0, 1.0)), Ordering::Equal);
    }

    #[test]
    fn test_addresses() {
        let elem = Rc::new(Type::Int(IntWidth::I64));
        let p = |addr| Value::Pointer(elem.clone(), addr);
        assert_eq!(compare(&p(0x10), &p(0x20)), Ordering::Less);
        assert_eq!(compare(&p(0), &p(0x20)), Ordering::Less);

        let ch = |addr| Value::Chan(elem.clone(), addr);
        assert_eq!(compare(&ch(None), &ch(None)), Ordering::Equal);
        assert_eq!(compare(&ch(None), &ch(Some(1))), Ordering::Less);
        assert_eq!(compare(&ch(Some(1)), &ch(None)), Ordering::Greater);
        assert_eq!(compare(&ch(Some(2)), &ch(Some(1))), Ordering::Greater);

        assert_eq!(
            compare(&Value::UnsafePointer(3), &Value::UnsafePointer(3)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_struct_fields_in_order() {
        let point = |x: i64, y: &str| Value::structure("Point", vec![("x", x.into()), ("y", y.into())]);
        assert_eq!(compare(&point(1, "z"), &point(2, "a")), Ordering::Less);
        assert_eq!(compare(&point(1, "b"), &point(1, "a")), Ordering::Greater);
        assert_eq!(compare(&point(1, "a"), &point(1, "a")), Ordering::Equal);

        let other = Value::structure("Other", vec![("x", 0i64.into()), ("y", "a".into())]);
        assert_eq!(compare(&other, &point(9, "z")), Ordering::Less);
        assert_eq!(compare(&point(9, "z"), &other), Ordering::Less);
    }

    #[test]
    fn test_arrays_elementwise() {
        let elem = Type::Int(IntWidth::I64);
        let a = Value::array(elem.clone(), ints(&[1, 2, 3]));
        let b = Value::array(elem.clone(), ints(&[1, 3, 0]));
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
        assert_eq!(compare(&a, &a.clone()), Ordering::Equal);

        // Different lengths are different types
        let short = Value::array(elem, ints(&[0]));
        assert_eq!(compare(&short, &a), Ordering::Less);
        assert_eq!(compare(&a, &short), Ordering::Less);
    }

    #[test]
    fn test_interfaces() {
        let nil = Value::interface(Value::Nil);
        let one = Value::interface(1i64.into());
        let two = Value::interface(2i64.into());
        assert_eq!(compare(&nil, &nil), Ordering::Equal);
        assert_eq!(compare(&nil, &one), Ordering::Less);
        assert_eq!(compare(&one, &nil), Ordering::Greater);
        assert_eq!(compare(&one, &two), Ordering::Less);

        // Dynamic types order consistently in both directions
        let text = Value::interface("1".into());
        let forward = compare(&one, &text);
        assert_ne!(forward, Ordering::Equal);
        assert_eq!(compare(&text, &one), forward.reverse());
    }

    /// Groups of same-typed values; ordering laws hold within a group.
    fn ordered_groups() -> Vec<Vec<Value>> {
        let point = |x: i64, y: &str| Value::structure("Point", vec![("x", x.into()), ("y", y.into())]);
        let triple = |v: &[i64]| Value::array(Type::Int(IntWidth::I64), ints(v));
        vec![
            ints(&[-5, 0, 3, i64::MAX, i64::MIN]),
            vec![0u64.into(), 7u64.into(), u64::MAX.into()],
            vec![(-1.5f64).into(), 0.0f64.into(), 2.25f64.into(), f64::INFINITY.into()],
            vec!["".into(), "a".into(), "ab".into(), "b".into(), "é".into()],
            vec![false.into(), true.into()],
            vec![point(1, "b"), point(1, "a"), point(0, "z"), point(2, ""), point(1, "b")],
            vec![
                triple(&[1, 2, 3]),
                triple(&[1, 3, 0]),
                triple(&[0, 9, 9]),
                triple(&[1, 2, 2]),
                triple(&[1, 2, 3]),
            ],
        ]
    }

    #[test]
    fn test_reflexive_and_antisymmetric() {
        for values in ordered_groups() {
            for a in &values {
                assert_eq!(compare(a, a), Ordering::Equal, "{}", a);
                for b in &values {
                    assert_eq!(compare(a, b), compare(b, a).reverse(), "{} vs {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_transitive() {
        for values in ordered_groups() {
            for a in &values {
                for b in &values {
                    for c in &values {
                        if compare(a, b).is_le() && compare(b, c).is_le() {
                            assert!(compare(a, c).is_le(), "{} <= {} <= {}", a, b, c);
                        }
                        if compare(a, b).is_eq() && compare(b, c).is_eq() {
                            assert!(compare(a, c).is_eq(), "{} == {} == {}", a, b, c);
                        }
                    }
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "bad type in compare")]
    fn test_function_operand_panics() {
        compare(&Value::Func("f".into()), &Value::Func("f".into()));
    }

    #[test]
    #[should_panic(expected = "bad type in compare")]
    fn test_map_inside_interface_panics() {
        let m = Value::interface(Value::map(Type::String, Type::String, vec![]));
        compare(&m, &m.clone());
    }
}
