use std::fmt;
use std::rc::Rc;

/// Width of a signed integer type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntWidth {
    /// Platform `int`
    Int,
    I8,
    I16,
    I32,
    I64,
}

/// Width of an unsigned integer type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UintWidth {
    /// Platform `uint`
    Uint,
    U8,
    U16,
    U32,
    U64,
    /// An integer large enough to hold an address
    Uintptr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComplexWidth {
    C64,
    C128,
}

/// The representation family of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The untyped nil
    Invalid,
    Int,
    Uint,
    Float,
    Complex,
    Bool,
    String,
    Pointer,
    UnsafePointer,
    Chan,
    Struct,
    Array,
    Interface,
    Map,
    Slice,
    Func,
}

/// The static type of a [`super::Value`]
///
/// Two values have matching type iff their descriptors are equal. The derived
/// ordering is arbitrary but fixed, which is all the comparator needs when it
/// orders interface values by dynamic type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Type {
    Nil,
    Int(IntWidth),
    Uint(UintWidth),
    Float(FloatWidth),
    Complex(ComplexWidth),
    Bool,
    String,
    /// A string already marked safe for HTML output
    Html,
    Pointer(Rc<Type>),
    UnsafePointer,
    Chan(Rc<Type>),
    /// Named struct type
    Struct(Rc<str>),
    /// Fixed-size array of `len` elements
    Array(Rc<Type>, usize),
    /// The empty interface: any dynamic type
    Interface,
    Map(Rc<Type>, Rc<Type>),
    Slice(Rc<Type>),
    /// Named function type
    Func(Rc<str>),
}

impl Type {
    pub fn kind(&self) -> Kind {
        match self {
            Type::Nil => Kind::Invalid,
            Type::Int(_) => Kind::Int,
            Type::Uint(_) => Kind::Uint,
            Type::Float(_) => Kind::Float,
            Type::Complex(_) => Kind::Complex,
            Type::Bool => Kind::Bool,
            Type::String | Type::Html => Kind::String,
            Type::Pointer(_) => Kind::Pointer,
            Type::UnsafePointer => Kind::UnsafePointer,
            Type::Chan(_) => Kind::Chan,
            Type::Struct(_) => Kind::Struct,
            Type::Array(..) => Kind::Array,
            Type::Interface => Kind::Interface,
            Type::Map(..) => Kind::Map,
            Type::Slice(_) => Kind::Slice,
            Type::Func(_) => Kind::Func,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Nil => write!(f, "nil"),
            Type::Int(width) => write!(
                f,
                "{}",
                match width {
                    IntWidth::Int => "int",
                    IntWidth::I8 => "int8",
                    IntWidth::I16 => "int16",
                    IntWidth::I32 => "int32",
                    IntWidth::I64 => "int64",
                }
            ),
            Type::Uint(width) => write!(
                f,
                "{}",
                match width {
                    UintWidth::Uint => "uint",
                    UintWidth::U8 => "uint8",
                    UintWidth::U16 => "uint16",
                    UintWidth::U32 => "uint32",
                    UintWidth::U64 => "uint64",
                    UintWidth::Uintptr => "uintptr",
                }
            ),
            Type::Float(FloatWidth::F32) => write!(f, "float32"),
            Type::Float(FloatWidth::F64) => write!(f, "float64"),
            Type::Complex(ComplexWidth::C64) => write!(f, "complex64"),
            Type::Complex(ComplexWidth::C128) => write!(f, "complex128"),
            Type::Bool => write!(f, "bool"),
            Type::String => write!(f, "string"),
            Type::Html => write!(f, "template.HTML"),
            Type::Pointer(elem) => write!(f, "*{}", elem),
            Type::UnsafePointer => write!(f, "unsafe.Pointer"),
            Type::Chan(elem) => write!(f, "chan {}", elem),
            Type::Struct(name) => write!(f, "{}", name),
            Type::Array(elem, len) => write!(f, "[{}]{}", len, elem),
            Type::Interface => write!(f, "interface {{}}"),
            Type::Map(key, value) => write!(f, "map[{}]{}", key, value),
            Type::Slice(elem) => write!(f, "[]{}", elem),
            Type::Func(name) => write!(f, "func {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_is_string_kind_but_distinct_type() {
        assert_eq!(Type::Html.kind(), Kind::String);
        assert_ne!(Type::Html, Type::String);
    }

    #[test]
    fn test_display_composite_types() {
        let elem = Rc::new(Type::Int(IntWidth::I64));
        assert_eq!(Type::Array(elem.clone(), 3).to_string(), "[3]int64");
        assert_eq!(
            Type::Map(Rc::new(Type::String), elem.clone()).to_string(),
            "map[string]int64"
        );
        assert_eq!(Type::Pointer(elem).to_string(), "*int64");
        assert_eq!(Type::Interface.to_string(), "interface {}");
    }
}
