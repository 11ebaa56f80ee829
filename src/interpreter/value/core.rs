use std::{fmt, rc::Rc};

use crate::interpreter::value::function::Function;

/// Represents a runtime value in the interpreter.
///
/// Values are cheap to clone: strings and functions are reference counted.
/// `Boolean` and `Null` carry no identity of their own, so any two `true`s
/// are the same value and every `Null` is the same value.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// Immutable text.
    String(Rc<str>),
    /// The absence of a value: an `if` without a taken branch, a loop, a call
    /// to `println`.
    Null,
    /// A closure.
    Function(Rc<Function>),
    /// A runtime failure carried as a value at the evaluation boundary.
    Error(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl Value {
    /// The upper-case type name used in runtime error messages.
    ///
    /// # Example
    /// ```
    /// use tlang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Null => "NULL",
            Self::Function(_) => "FUNCTION",
            Self::Error(_) => "ERROR",
        }
    }

    /// Only `false` and `Null` are falsy. `0` and `""` are truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Identity comparison used by `==` and `!=` on anything but two
    /// integers.
    ///
    /// Booleans compare by value, `Null` equals `Null`. Strings and functions
    /// are equal only when they are the same allocation: every evaluation of
    /// a string literal or of `+` makes a new string, while reading a binding
    /// shares it. Values of different types are never identical.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => Rc::ptr_eq(a, b),
            (Self::Null, Self::Null) => true,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

/// Structural equality, with functions compared by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            _ => self.is_identical(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
            Self::Null => f.write_str("null"),
            Self::Function(_) => f.write_str("<function>"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}
