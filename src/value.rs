// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Literals accepted as `true` for a boolean option.
const TRUE_LITERALS: &[&str] = &["1", "t", "T", "true", "TRUE", "True"];

/// Literals accepted as `false` for a boolean option.
const FALSE_LITERALS: &[&str] = &["0", "f", "F", "false", "FALSE", "False"];

const DIGIT_SEPARATOR: char = '_';

/// Reason a raw string could not be converted to an option value.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ValueError {
    /// Not one of the recognised boolean literals.
    #[error("invalid boolean literal")]
    Bool,

    /// Integer syntax error.
    #[error("{0}")]
    Int(#[from] ParseIntError),

    /// Integer does not fit the option's type.
    #[error("value out of range")]
    Range,

    /// A `_` at the start or end of the digits, or two in a row.
    #[error("misplaced digit separator")]
    Separator,

    /// A sign where none is permitted.
    #[error("unexpected sign")]
    Sign,

    /// Floating point syntax error.
    #[error("{0}")]
    Float(#[from] ParseFloatError),
}

/// The type of value an option holds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Kind {
    /// A flag. Never consumes a following argument.
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// Unsigned 64-bit integer.
    Uint,
    /// 64-bit floating point number.
    Float,
    /// Arbitrary string.
    Str,
}

impl Kind {
    /// Name used for the option value in help output.
    ///
    /// Returns [None] for [Kind::Bool] since flags take no value.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Kind::Bool => None,
            Kind::Int => Some("int"),
            Kind::Uint => Some("uint"),
            Kind::Float => Some("float"),
            Kind::Str => Some("string"),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.placeholder().unwrap_or("bool"))
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    Uint(u64),
    /// Floating point value.
    Float(f64),
    /// String value.
    Str(String),
}

impl Value {
    /// Convert `raw` into a value of the specified kind.
    pub fn parse(kind: Kind, raw: &str) -> Result<Value, ValueError> {
        let value = match kind {
            Kind::Bool => Value::Bool(parse_bool(raw)?),
            Kind::Int => Value::Int(parse_int(raw)?),
            Kind::Uint => Value::Uint(parse_uint(raw)?),
            Kind::Float => Value::Float(raw.parse()?),
            Kind::Str => Value::Str(raw.into()),
        };

        Ok(value)
    }

    /// The zero value for the kind.
    pub fn zero(kind: Kind) -> Value {
        match kind {
            Kind::Bool => Value::Bool(false),
            Kind::Int => Value::Int(0),
            Kind::Uint => Value::Uint(0),
            Kind::Float => Value::Float(0.0),
            Kind::Str => Value::Str(String::new()),
        }
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
        }
    }

    /// Booleans never take the following argument as their value.
    pub fn is_bool(&self) -> bool {
        self.kind() == Kind::Bool
    }

    /// Determine if this is the zero value for its kind.
    pub fn is_zero(&self) -> bool {
        *self == Value::zero(self.kind())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
        }
    }
}

/// Rust types that can be stored in an option slot.
pub trait SlotValue: Sized {
    /// The kind of option created for this type.
    const KIND: Kind;

    /// Extract the typed value, or [None] if the kinds differ.
    fn from_value(value: &Value) -> Option<Self>;

    /// Wrap the typed value.
    fn into_value(self) -> Value;
}

impl SlotValue for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl SlotValue for i64 {
    const KIND: Kind = Kind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl SlotValue for u64 {
    const KIND: Kind = Kind::Uint;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Uint(u) => Some(*u),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Uint(self)
    }
}

impl SlotValue for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl SlotValue for String {
    const KIND: Kind = Kind::Str;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

fn parse_bool(raw: &str) -> Result<bool, ValueError> {
    if TRUE_LITERALS.contains(&raw) {
        Ok(true)
    } else if FALSE_LITERALS.contains(&raw) {
        Ok(false)
    } else {
        Err(ValueError::Bool)
    }
}

/// Split off a base prefix: `0x`, `0o`, `0b` or a bare leading zero (octal).
fn split_radix(raw: &str) -> (u32, &str) {
    let bytes = raw.as_bytes();

    if bytes.len() < 2 || bytes[0] != b'0' {
        return (10, raw);
    }

    match bytes[1] {
        b'x' | b'X' => (16, &raw[2..]),
        b'o' | b'O' => (8, &raw[2..]),
        b'b' | b'B' => (2, &raw[2..]),
        _ => (8, &raw[1..]),
    }
}

fn strip_separators(digits: &str) -> Result<Cow<str>, ValueError> {
    if !digits.contains(DIGIT_SEPARATOR) {
        return Ok(Cow::Borrowed(digits));
    }

    if digits.starts_with(DIGIT_SEPARATOR)
        || digits.ends_with(DIGIT_SEPARATOR)
        || digits.contains("__")
    {
        return Err(ValueError::Separator);
    }

    Ok(Cow::Owned(digits.replace(DIGIT_SEPARATOR, "")))
}

fn parse_uint(raw: &str) -> Result<u64, ValueError> {
    let (radix, digits) = split_radix(raw);

    // from_str_radix() tolerates a leading '+' which we only want to allow
    // for signed values (and before any base prefix).
    if digits.starts_with('+') || digits.starts_with('-') {
        return Err(ValueError::Sign);
    }

    let digits = strip_separators(digits)?;

    Ok(u64::from_str_radix(&digits, radix)?)
}

fn parse_int(raw: &str) -> Result<i64, ValueError> {
    let (negative, magnitude) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let magnitude = parse_uint(magnitude)?;

    if negative {
        if magnitude == i64::MIN.unsigned_abs() {
            return Ok(i64::MIN);
        }

        i64::try_from(magnitude)
            .map(|v| -v)
            .map_err(|_| ValueError::Range)
    } else {
        i64::try_from(magnitude).map_err(|_| ValueError::Range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Kind::Bool.placeholder(), None);
        assert_eq!(Kind::Int.placeholder(), Some("int"));
        assert_eq!(Kind::Uint.placeholder(), Some("uint"));
        assert_eq!(Kind::Float.placeholder(), Some("float"));
        assert_eq!(Kind::Str.placeholder(), Some("string"));

        assert_eq!(Kind::Bool.to_string(), "bool");
        assert_eq!(Kind::Str.to_string(), "string");
    }

    #[test]
    fn test_parse_bool() {
        for s in TRUE_LITERALS {
            assert_eq!(Value::parse(Kind::Bool, s), Ok(Value::Bool(true)), "{}", s);
        }

        for s in FALSE_LITERALS {
            assert_eq!(
                Value::parse(Kind::Bool, s),
                Ok(Value::Bool(false)),
                "{}",
                s
            );
        }

        for s in &["", "xyz", "yes", "no", "tRuE", " true", "2"] {
            assert_eq!(Value::parse(Kind::Bool, s), Err(ValueError::Bool), "{}", s);
        }
    }

    #[test]
    fn test_parse_int() {
        #[derive(Debug)]
        struct TestData<'a> {
            raw: &'a str,
            result: Option<i64>,
        }

        let tests = &[
            TestData {
                raw: "1",
                result: Some(1),
            },
            TestData {
                raw: "+17",
                result: Some(17),
            },
            TestData {
                raw: "-17",
                result: Some(-17),
            },
            TestData {
                raw: "0",
                result: Some(0),
            },
            TestData {
                raw: "0x1f",
                result: Some(31),
            },
            TestData {
                raw: "0XFF",
                result: Some(255),
            },
            TestData {
                raw: "0o17",
                result: Some(15),
            },
            TestData {
                raw: "017",
                result: Some(15),
            },
            TestData {
                raw: "0b101",
                result: Some(5),
            },
            TestData {
                raw: "-0x10",
                result: Some(-16),
            },
            TestData {
                raw: "1_000_000",
                result: Some(1_000_000),
            },
            TestData {
                raw: "9223372036854775807",
                result: Some(i64::MAX),
            },
            TestData {
                raw: "-9223372036854775808",
                result: Some(i64::MIN),
            },
            TestData {
                raw: "9223372036854775808",
                result: None,
            },
            TestData {
                raw: "=1",
                result: None,
            },
            TestData {
                raw: "",
                result: None,
            },
            TestData {
                raw: "-",
                result: None,
            },
            TestData {
                raw: "0x",
                result: None,
            },
            TestData {
                raw: "0x+1",
                result: None,
            },
            TestData {
                raw: "--1",
                result: None,
            },
            TestData {
                raw: "_1",
                result: None,
            },
            TestData {
                raw: "1__0",
                result: None,
            },
            TestData {
                raw: "08",
                result: None,
            },
            TestData {
                raw: "1.5",
                result: None,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = Value::parse(Kind::Int, d.raw).ok();

            assert_eq!(result, d.result.map(Value::Int), "{}", msg);
        }
    }

    #[test]
    fn test_parse_uint() {
        assert_eq!(Value::parse(Kind::Uint, "42"), Ok(Value::Uint(42)));
        assert_eq!(
            Value::parse(Kind::Uint, "18446744073709551615"),
            Ok(Value::Uint(u64::MAX))
        );
        assert_eq!(Value::parse(Kind::Uint, "-1"), Err(ValueError::Sign));
        assert_eq!(Value::parse(Kind::Uint, "+1"), Err(ValueError::Sign));
        assert_eq!(Value::parse(Kind::Uint, "1_"), Err(ValueError::Separator));
        assert!(matches!(
            Value::parse(Kind::Uint, "18446744073709551616"),
            Err(ValueError::Int(_))
        ));
    }

    #[test]
    fn test_parse_float_and_string() {
        assert_eq!(Value::parse(Kind::Float, "1.5"), Ok(Value::Float(1.5)));
        assert_eq!(Value::parse(Kind::Float, "-2"), Ok(Value::Float(-2.0)));
        assert!(matches!(
            Value::parse(Kind::Float, "one"),
            Err(ValueError::Float(_))
        ));

        assert_eq!(Value::parse(Kind::Str, ""), Ok(Value::Str("".into())));
        assert_eq!(
            Value::parse(Kind::Str, "=foo"),
            Ok(Value::Str("=foo".into()))
        );
    }

    #[test]
    fn test_value() {
        assert!(Value::Bool(false).is_bool());
        assert!(!Value::Int(0).is_bool());

        assert!(Value::zero(Kind::Str).is_zero());
        assert!(Value::Int(0).is_zero());
        assert!(!Value::Int(3).is_zero());
        assert!(!Value::Str("x".into()).is_zero());
        assert!(!Value::Bool(true).is_zero());

        assert_eq!(Value::Float(2.5).kind(), Kind::Float);
        assert_eq!(Value::Uint(7).to_string(), "7");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Str("foo bar".into()).to_string(), "foo bar");
    }

    #[test]
    fn test_slot_value() {
        assert_eq!(bool::KIND, Kind::Bool);
        assert_eq!(i64::KIND, Kind::Int);
        assert_eq!(u64::KIND, Kind::Uint);
        assert_eq!(f64::KIND, Kind::Float);
        assert_eq!(String::KIND, Kind::Str);

        assert_eq!(i64::from_value(&Value::Int(3)), Some(3));
        assert_eq!(i64::from_value(&Value::Uint(3)), None);
        assert_eq!(
            String::from_value(&"abc".to_string().into_value()),
            Some("abc".into())
        );
        assert_eq!(bool::from_value(&true.into_value()), Some(true));
    }
}
