use std::fmt;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{builtin::Builtin, evaluator::core::EvalResult, lexer::Location},
};

/// A runtime value.
///
/// Every expression evaluates to exactly one of these. Blocks without a
/// result, loops, declarations and assignments produce [`Value::Unit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// `true` or `false`.
    Bool(bool),
    /// The "no value" value.
    Unit,
    /// A predefined operator or function, as bound in the root scope.
    Builtin(Builtin),
}

impl Value {
    /// Returns the name of the value's runtime type, as used in messages.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Int(3).type_name(), "Int");
    /// assert_eq!(Value::Unit.type_name(), "Unit");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "Int",
            Self::Bool(_) => "Bool",
            Self::Unit => "Unit",
            Self::Builtin(_) => "Function",
        }
    }

    /// Extracts a boolean, as required by conditions and loop tests.
    ///
    /// # Errors
    /// [`RuntimeError::ExpectedBoolean`] at `location` when the value is not a
    /// boolean.
    pub const fn as_bool(&self, location: Location) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { location }),
        }
    }
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Int(n),
            LiteralValue::Bool(b) => Self::Bool(b),
            LiteralValue::Unit => Self::Unit,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Unit => write!(f, "unit"),
            Self::Builtin(builtin) => write!(f, "<built-in {}>", builtin.name),
        }
    }
}
