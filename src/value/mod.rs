//! Dynamically typed values handed over by the template engine

pub mod cast;
mod json;
mod types;

pub use types::{ComplexWidth, FloatWidth, IntWidth, Kind, Type, UintWidth};

use std::fmt;
use std::rc::Rc;

/// A complex number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// A struct value: its type name and its fields in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    pub name: Rc<str>,
    pub fields: Vec<(Rc<str>, Value)>,
}

/// A fixed-size array value
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub elem: Rc<Type>,
    pub items: Vec<Value>,
}

/// A map value. Entry order carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub key: Rc<Type>,
    pub value: Rc<Type>,
    pub entries: Vec<(Value, Value)>,
}

/// A value whose variant is its runtime discriminator.
///
/// Composite payloads sit behind `Rc`, so cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The untyped nil
    #[default]
    Nil,
    Int(IntWidth, i64),
    Uint(UintWidth, u64),
    /// `F32` values are stored widened
    Float(FloatWidth, f64),
    Complex(ComplexWidth, Complex),
    Bool(bool),
    String(Rc<str>),
    /// A string already marked safe for HTML output
    Html(Rc<str>),
    /// A pointer to `Type` at an opaque address; 0 is nil
    Pointer(Rc<Type>, usize),
    UnsafePointer(usize),
    /// A channel of `Type`; `None` is the nil channel
    Chan(Rc<Type>, Option<usize>),
    Struct(Rc<Struct>),
    Array(Rc<Array>),
    /// A value wrapped with its dynamic type; `None` is the nil interface
    Interface(Option<Rc<Value>>),
    Map(Rc<Map>),
    Slice(Rc<Type>, Rc<[Value]>),
    /// A function, identified by name
    Func(Rc<str>),
}

impl Value {
    /// A safe-HTML string.
    pub fn html(s: impl Into<Rc<str>>) -> Self {
        Value::Html(s.into())
    }

    /// Wrap `value` in an interface. Wrapping nil gives the nil interface.
    pub fn interface(value: Value) -> Self {
        match value {
            Value::Nil => Value::Interface(None),
            value => Value::Interface(Some(Rc::new(value))),
        }
    }

    pub fn structure(name: &str, fields: Vec<(&str, Value)>) -> Self {
        Value::Struct(Rc::new(Struct {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (Rc::from(name), value))
                .collect(),
        }))
    }

    pub fn array(elem: Type, items: Vec<Value>) -> Self {
        Value::Array(Rc::new(Array {
            elem: Rc::new(elem),
            items,
        }))
    }

    pub fn map(key: Type, value: Type, entries: Vec<(Value, Value)>) -> Self {
        Value::Map(Rc::new(Map {
            key: Rc::new(key),
            value: Rc::new(value),
            entries,
        }))
    }

    /// The static type of this value.
    pub fn type_of(&self) -> Type {
        match self {
            Value::Nil => Type::Nil,
            Value::Int(width, _) => Type::Int(*width),
            Value::Uint(width, _) => Type::Uint(*width),
            Value::Float(width, _) => Type::Float(*width),
            Value::Complex(width, _) => Type::Complex(*width),
            Value::Bool(_) => Type::Bool,
            Value::String(_) => Type::String,
            Value::Html(_) => Type::Html,
            Value::Pointer(elem, _) => Type::Pointer(elem.clone()),
            Value::UnsafePointer(_) => Type::UnsafePointer,
            Value::Chan(elem, _) => Type::Chan(elem.clone()),
            Value::Struct(s) => Type::Struct(s.name.clone()),
            Value::Array(a) => Type::Array(a.elem.clone(), a.items.len()),
            Value::Interface(_) => Type::Interface,
            Value::Map(m) => Type::Map(m.key.clone(), m.value.clone()),
            Value::Slice(elem, _) => Type::Slice(elem.clone()),
            Value::Func(name) => Type::Func(name.clone()),
        }
    }

    pub fn kind(&self) -> Kind {
        self.type_of().kind()
    }

    /// Whether this value may be used as a map key, i.e. whether
    /// [`crate::sort::compare`] accepts it.
    pub fn is_comparable(&self) -> bool {
        match self {
            Value::Nil | Value::Map(_) | Value::Slice(..) | Value::Func(_) => false,
            Value::Struct(s) => s.fields.iter().all(|(_, v)| v.is_comparable()),
            Value::Array(a) => a.items.iter().all(Value::is_comparable),
            Value::Interface(Some(inner)) => inner.is_comparable(),
            _ => true,
        }
    }
}

/// Writes `items` separated by single spaces.
fn write_spaced<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Shortest decimal that reads back at the value's own width.
fn write_float(f: &mut fmt::Formatter<'_>, width: FloatWidth, v: f64) -> fmt::Result {
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "+Inf" } else { "-Inf" });
    }
    match width {
        FloatWidth::F32 => write!(f, "{}", v as f32),
        FloatWidth::F64 => write!(f, "{}", v),
    }
}

/// Prints values the way the template engine does: maps in sorted key order,
/// structs as `{a b}`, sequences as `[a b]`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil | Value::Interface(None) | Value::Chan(_, None) => f.write_str("<nil>"),
            Value::Int(_, v) => write!(f, "{}", v),
            Value::Uint(_, v) => write!(f, "{}", v),
            Value::Float(width, v) => write_float(f, *width, *v),
            Value::Complex(_, c) => write!(f, "({}{:+}i)", c.re, c.im),
            Value::Bool(v) => write!(f, "{}", v),
            Value::String(s) | Value::Html(s) => f.write_str(s),
            Value::Pointer(_, addr) | Value::UnsafePointer(addr) | Value::Chan(_, Some(addr)) => {
                write!(f, "{:#x}", addr)
            }
            Value::Struct(s) => {
                f.write_str("{")?;
                write_spaced(f, s.fields.iter().map(|(_, v)| v))?;
                f.write_str("}")
            }
            Value::Array(a) => {
                f.write_str("[")?;
                write_spaced(f, &a.items)?;
                f.write_str("]")
            }
            Value::Slice(_, items) => {
                f.write_str("[")?;
                write_spaced(f, items.iter())?;
                f.write_str("]")
            }
            Value::Interface(Some(inner)) => write!(f, "{}", inner),
            Value::Map(m) => {
                f.write_str("map[")?;
                if m.entries.iter().all(|(k, _)| k.is_comparable()) {
                    let sorted = crate::sort::sort_entries(m.entries.iter().cloned());
                    for (i, (k, v)) in sorted.iter().enumerate() {
                        if i > 0 {
                            f.write_str(" ")?;
                        }
                        write!(f, "{}:{}", k, v)?;
                    }
                } else {
                    for (i, (k, v)) in m.entries.iter().enumerate() {
                        if i > 0 {
                            f.write_str(" ")?;
                        }
                        write!(f, "{}:{}", k, v)?;
                    }
                }
                f.write_str("]")
            }
            Value::Func(name) => write!(f, "func {}", name),
        }
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(IntWidth::I8, v.into())
    }
}
impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(IntWidth::I16, v.into())
    }
}
impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(IntWidth::I32, v.into())
    }
}
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(IntWidth::I64, v)
    }
}
impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(IntWidth::Int, v as i64)
    }
}
impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Uint(UintWidth::U8, v.into())
    }
}
impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Uint(UintWidth::U16, v.into())
    }
}
impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint(UintWidth::U32, v.into())
    }
}
impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(UintWidth::U64, v)
    }
}
impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Uint(UintWidth::Uint, v as u64)
    }
}
impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(FloatWidth::F32, v.into())
    }
}
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(FloatWidth::F64, v)
    }
}
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}
impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.into())
    }
}
impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v.into())
    }
}
