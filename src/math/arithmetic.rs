use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::value::Value;

/// One of the four arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl TryFrom<char> for Operator {
    type Error = Error;

    fn try_from(op: char) -> Result<Self> {
        match op {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            _ => Err(Error::UnsupportedOperator(op)),
        }
    }
}

impl From<Operator> for char {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// A 64-bit numeric representation arithmetic can be carried out in
trait Operand: Copy + PartialEq + Into<Value> {
    const ZERO: Self;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn div(self, rhs: Self) -> Self;
}

// Integer arithmetic wraps like two's complement hardware.
macro_rules! wrapping_operand {
    ($t:ty) => {
        impl Operand for $t {
            const ZERO: Self = 0;

            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
            fn sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
            fn mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
            fn div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }
        }
    };
}

wrapping_operand!(i64);
wrapping_operand!(u64);

impl Operand for f64 {
    const ZERO: Self = 0.0;

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }
    fn div(self, rhs: Self) -> Self {
        self / rhs
    }
}

fn apply<T: Operand>(a: T, b: T, op: char) -> Result<Value> {
    let result = match Operator::try_from(op)? {
        Operator::Add => a.add(b),
        Operator::Sub => a.sub(b),
        Operator::Mul => a.mul(b),
        Operator::Div => {
            if b == T::ZERO {
                return Err(Error::DivisionByZero);
            }
            a.div(b)
        }
    };
    Ok(result.into())
}

/// Strips interface wrappers down to the concrete value.
fn concrete(value: &Value) -> &Value {
    match value {
        Value::Interface(Some(inner)) => concrete(inner),
        value => value,
    }
}

/// Perform `a op b` for `op` in `+ - * /`, reconciling the operand kinds.
///
/// - int and int: signed arithmetic
/// - uint and uint: unsigned arithmetic
/// - any float involved: both widened to float64
/// - int and uint: unsigned if the int is non-negative, otherwise the uint is
///   reinterpreted as signed
/// - string and string: concatenation, `+` only
///
/// Integer results wrap on overflow; widening may lose precision. Results
/// are always `int64`, `uint64`, `float64` or `string`.
pub fn do_arithmetic(a: &Value, b: &Value, op: char) -> Result<Value> {
    use Value::{Float, Int, Uint};

    let (a, b) = (concrete(a), concrete(b));
    debug!(%op, lhs = %a.type_of(), rhs = %b.type_of(), "arithmetic");

    match (a, b) {
        (Int(_, a), Int(_, b)) => apply(*a, *b, op),
        (Int(_, a), Float(_, b)) => apply(*a as f64, *b, op),
        (Int(_, a), Uint(_, b)) => {
            if *a >= 0 {
                apply(*a as u64, *b, op)
            } else {
                apply(*a, *b as i64, op)
            }
        }
        (Float(_, a), Int(_, b)) => apply(*a, *b as f64, op),
        (Float(_, a), Float(_, b)) => apply(*a, *b, op),
        (Float(_, a), Uint(_, b)) => apply(*a, *b as f64, op),
        (Uint(_, a), Int(_, b)) => {
            if *b >= 0 {
                apply(*a, *b as u64, op)
            } else {
                apply(*a as i64, *b, op)
            }
        }
        (Uint(_, a), Float(_, b)) => apply(*a as f64, *b, op),
        (Uint(_, a), Uint(_, b)) => apply(*a, *b, op),
        (Value::String(a) | Value::Html(a), Value::String(b) | Value::Html(b)) if op == '+' => {
            Ok(Value::from(format!("{}{}", a, b)))
        }
        _ => Err(Error::UnsupportedOperands),
    }
}

pub fn add(a: &Value, b: &Value) -> Result<Value> {
    do_arithmetic(a, b, '+')
}

pub fn sub(a: &Value, b: &Value) -> Result<Value> {
    do_arithmetic(a, b, '-')
}

pub fn mul(a: &Value, b: &Value) -> Result<Value> {
    do_arithmetic(a, b, '*')
}

pub fn div(a: &Value, b: &Value) -> Result<Value> {
    do_arithmetic(a, b, '/')
}
