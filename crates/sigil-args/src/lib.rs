//! Tagged argument values for the sigil formatting engine.
//!
//! This crate provides [`Value`], a closed tagged union over everything a
//! format specifier can consume, and [`Args`], an ordered cursor that hands
//! values out strictly left-to-right. Together they replace C-style variadic
//! marshalling: a specifier/argument mismatch is a reported [`ArgError`],
//! never undefined behavior.
//!
//! # Example
//!
//! ```rust
//! use sigil_args::{args, Args, Value};
//!
//! let mut cursor = Args::new(args![23i32, "hello", true]);
//! assert_eq!(cursor.next_i32().unwrap(), 23);
//! assert_eq!(cursor.next_str().unwrap(), "hello");
//! assert_eq!(cursor.next_bool().unwrap(), true);
//! assert!(cursor.next().is_err());
//! ```

use std::borrow::Cow;

/// Error produced when a cursor runs dry or a value has the wrong tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    /// A specifier asked for more arguments than the caller supplied.
    #[error("argument {index} is missing")]
    Missing {
        /// Zero-based position of the argument that was requested.
        index: usize,
    },

    /// The next argument's tag does not match what the specifier declared.
    #[error("argument {index}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Zero-based position of the offending argument.
        index: usize,
        /// What the specifier's contract asked for.
        expected: &'static str,
        /// The tag that was actually there.
        found: &'static str,
    },
}

/// A single formatting argument.
///
/// The union is closed: handlers can only ever see these tags, so every
/// mismatch is detectable at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    /// Exists for the passthrough directive language (`%f` and friends);
    /// no built-in specifier name pulls one.
    F64(f64),
    Bool(bool),
    Char(char),
    /// Borrowed text. Covers the original's pointer-to-string,
    /// string-view, and raw C string argument kinds.
    Str(&'a str),
    /// Owned text. The formatting call takes ownership; the string is
    /// dropped once rendered.
    Owned(String),
}

impl Value<'_> {
    /// Short tag name used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::F64(_) => "f64",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::Owned(_) => "string",
        }
    }
}

impl From<i32> for Value<'_> {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<u32> for Value<'_> {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<u64> for Value<'_> {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value<'_> {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Str(v)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(v: &'a String) -> Self {
        Value::Str(v)
    }
}

impl From<String> for Value<'_> {
    fn from(v: String) -> Self {
        Value::Owned(v)
    }
}

/// Builds an ordered `Vec<Value>` from native values.
///
/// ```rust
/// use sigil_args::{args, Value};
///
/// let list = args![1i32, "two", 3u64];
/// assert_eq!(list[0], Value::I32(1));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

/// Ordered argument cursor.
///
/// Values are handed out by value, strictly left-to-right, one per request.
/// Ownership transfers with each value: an [`Value::Owned`] string pulled by
/// a handler is dropped when the handler is done with it, which is the whole
/// of the original "call takes ownership" contract.
#[derive(Debug)]
pub struct Args<'a> {
    values: std::vec::IntoIter<Value<'a>>,
    consumed: usize,
}

impl<'a> Args<'a> {
    pub fn new(values: Vec<Value<'a>>) -> Self {
        Self {
            values: values.into_iter(),
            consumed: 0,
        }
    }

    /// How many values have been handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// How many values remain.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Pulls the next value, whatever its tag.
    pub fn next(&mut self) -> Result<Value<'a>, ArgError> {
        match self.values.next() {
            Some(v) => {
                self.consumed += 1;
                Ok(v)
            }
            None => Err(ArgError::Missing {
                index: self.consumed,
            }),
        }
    }

    fn mismatch(&self, expected: &'static str, found: &Value<'_>) -> ArgError {
        ArgError::TypeMismatch {
            index: self.consumed - 1,
            expected,
            found: found.kind(),
        }
    }

    pub fn next_i32(&mut self) -> Result<i32, ArgError> {
        match self.next()? {
            Value::I32(v) => Ok(v),
            other => Err(self.mismatch("i32", &other)),
        }
    }

    pub fn next_i64(&mut self) -> Result<i64, ArgError> {
        match self.next()? {
            Value::I64(v) => Ok(v),
            other => Err(self.mismatch("i64", &other)),
        }
    }

    pub fn next_u32(&mut self) -> Result<u32, ArgError> {
        match self.next()? {
            Value::U32(v) => Ok(v),
            other => Err(self.mismatch("u32", &other)),
        }
    }

    pub fn next_u64(&mut self) -> Result<u64, ArgError> {
        match self.next()? {
            Value::U64(v) => Ok(v),
            other => Err(self.mismatch("u64", &other)),
        }
    }

    pub fn next_f64(&mut self) -> Result<f64, ArgError> {
        match self.next()? {
            Value::F64(v) => Ok(v),
            other => Err(self.mismatch("f64", &other)),
        }
    }

    pub fn next_bool(&mut self) -> Result<bool, ArgError> {
        match self.next()? {
            Value::Bool(v) => Ok(v),
            other => Err(self.mismatch("bool", &other)),
        }
    }

    pub fn next_char(&mut self) -> Result<char, ArgError> {
        match self.next()? {
            Value::Char(v) => Ok(v),
            other => Err(self.mismatch("char", &other)),
        }
    }

    /// Pulls any text value, borrowed or owned.
    pub fn next_str(&mut self) -> Result<Cow<'a, str>, ArgError> {
        match self.next()? {
            Value::Str(v) => Ok(Cow::Borrowed(v)),
            Value::Owned(v) => Ok(Cow::Owned(v)),
            other => Err(self.mismatch("string", &other)),
        }
    }

    /// Pulls an owned string specifically, consuming it.
    pub fn next_owned(&mut self) -> Result<String, ArgError> {
        match self.next()? {
            Value::Owned(v) => Ok(v),
            other => Err(self.mismatch("owned string", &other)),
        }
    }

    /// Pulls any integer value widened to `i128`.
    ///
    /// Used by the passthrough directive language, where `%d` does not care
    /// which integer tag the caller chose. Every integer tag fits in `i128`.
    pub fn next_signed(&mut self) -> Result<i128, ArgError> {
        match self.next()? {
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v.into()),
            Value::U32(v) => Ok(v.into()),
            Value::U64(v) => Ok(v.into()),
            other => Err(self.mismatch("integer", &other)),
        }
    }

    /// Pulls any integer value widened to `u128`.
    ///
    /// A negative signed value cannot be rendered unsigned and reports a
    /// mismatch rather than wrapping.
    pub fn next_unsigned(&mut self) -> Result<u128, ArgError> {
        match self.next()? {
            Value::U32(v) => Ok(v.into()),
            Value::U64(v) => Ok(v.into()),
            Value::I32(v) if v >= 0 => Ok(v as u128),
            Value::I64(v) if v >= 0 => Ok(v as u128),
            other => Err(self.mismatch("unsigned integer", &other)),
        }
    }
}
