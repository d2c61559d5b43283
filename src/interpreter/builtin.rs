use std::{fmt, io::Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::Location,
        types::{BasicType, Type},
        value::Value,
    },
};

/// The runtime behavior of a built-in.
///
/// Receives the already evaluated arguments, the location of the call or
/// operator for error reporting, and the interpreter's output sink.
pub type BuiltinFn = fn(&[Value], Location, &mut dyn Write) -> EvalResult<Value>;

/// The static shape of a built-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// Exact parameter types and a result type.
    Fixed {
        /// Parameter types, in order.
        params: &'static [BasicType],
        /// The result type.
        result: BasicType,
    },
    /// Any `arity` arguments that all share one type. Used by `==` and `!=`,
    /// which the type checker handles on its own rather than through a
    /// binding.
    SameType {
        /// Number of arguments.
        arity:  usize,
        /// The result type.
        result: BasicType,
    },
}

impl Signature {
    /// Returns the number of arguments the built-in takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Fixed { params, .. } => params.len(),
            Self::SameType { arity, .. } => arity,
        }
    }

    /// Returns the function type bound for the type checker, if the
    /// signature can be written as one.
    #[must_use]
    pub fn function_type(self) -> Option<Type> {
        match self {
            Self::Fixed { params, result } => Some(Type::function(params, result)),
            Self::SameType { .. } => None,
        }
    }
}

/// A predefined name bound in the root scope, pairing a static signature
/// with a runtime implementation.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The bound name: an operator symbol or a function name.
    pub name:      &'static str,
    /// The static signature.
    pub signature: Signature,
    /// The runtime implementation.
    pub func:      BuiltinFn,
}

impl Builtin {
    /// Checks the argument count and runs the implementation.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{builtin, lexer::Location, value::Value};
    ///
    /// let add = builtin::lookup("+").unwrap();
    /// let mut out = Vec::new();
    /// let sum = add.call(&[Value::Int(2), Value::Int(3)], Location::START, &mut out);
    /// assert_eq!(sum, Ok(Value::Int(5)));
    ///
    /// assert!(add.call(&[Value::Int(2)], Location::START, &mut out).is_err());
    /// ```
    pub fn call(&self,
                args: &[Value],
                location: Location,
                out: &mut dyn Write)
                -> EvalResult<Value> {
        let expected = self.signature.arity();
        if args.len() != expected {
            return Err(RuntimeError::ArgumentCountMismatch { name: self.name.to_string(),
                                                             expected,
                                                             found: args.len(),
                                                             location });
        }
        (self.func)(args, location, out)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("signature", &self.signature)
         .finish_non_exhaustive()
    }
}

// Built-ins are identified by name; the table never binds a name twice.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Builtin {}

const INT_INT: &[BasicType] = &[BasicType::Int, BasicType::Int];
const BOOL_BOOL: &[BasicType] = &[BasicType::Bool, BasicType::Bool];

/// Every built-in, in the order it is bound into the root scope.
pub const BUILTINS: &[Builtin] = &[
    arithmetic("+", add),
    arithmetic("-", sub),
    arithmetic("*", mul),
    arithmetic("/", div),
    arithmetic("%", rem),
    comparison("<", less),
    comparison("<=", less_equal),
    comparison(">", greater),
    comparison(">=", greater_equal),
    Builtin { name:      "and",
              signature: Signature::Fixed { params: BOOL_BOOL,
                                            result: BasicType::Bool, },
              func:      and, },
    Builtin { name:      "or",
              signature: Signature::Fixed { params: BOOL_BOOL,
                                            result: BasicType::Bool, },
              func:      or, },
    Builtin { name:      "==",
              signature: Signature::SameType { arity:  2,
                                               result: BasicType::Bool, },
              func:      equal, },
    Builtin { name:      "!=",
              signature: Signature::SameType { arity:  2,
                                               result: BasicType::Bool, },
              func:      not_equal, },
    Builtin { name:      "unary_-",
              signature: Signature::Fixed { params: &[BasicType::Int],
                                            result: BasicType::Int, },
              func:      negate, },
    Builtin { name:      "not",
              signature: Signature::Fixed { params: &[BasicType::Bool],
                                            result: BasicType::Bool, },
              func:      not, },
    Builtin { name:      "print_int",
              signature: Signature::Fixed { params: &[BasicType::Int],
                                            result: BasicType::Unit, },
              func:      print_int, },
    Builtin { name:      "print_bool",
              signature: Signature::Fixed { params: &[BasicType::Bool],
                                            result: BasicType::Unit, },
              func:      print_bool, },
];

/// Finds a built-in by its bound name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

const fn arithmetic(name: &'static str, func: BuiltinFn) -> Builtin {
    Builtin { name,
              signature: Signature::Fixed { params: INT_INT,
                                            result: BasicType::Int, },
              func }
}

const fn comparison(name: &'static str, func: BuiltinFn) -> Builtin {
    Builtin { name,
              signature: Signature::Fixed { params: INT_INT,
                                            result: BasicType::Bool, },
              func }
}

fn int_pair(op: &str, args: &[Value], location: Location) -> EvalResult<(i64, i64)> {
    match args {
        [Value::Int(a), Value::Int(b)] => Ok((*a, *b)),
        [a, b] => Err(RuntimeError::TypeError { details: format!("'{op}' expects (Int, Int), received ({}, {})",
                                                                 a.type_name(),
                                                                 b.type_name()),
                                                location }),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: op.to_string(),
                                                       expected: 2,
                                                       found: args.len(),
                                                       location }),
    }
}

fn bool_pair(op: &str, args: &[Value], location: Location) -> EvalResult<(bool, bool)> {
    match args {
        [Value::Bool(a), Value::Bool(b)] => Ok((*a, *b)),
        [a, b] => Err(RuntimeError::TypeError { details: format!("'{op}' expects (Bool, Bool), received ({}, {})",
                                                                 a.type_name(),
                                                                 b.type_name()),
                                                location }),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: op.to_string(),
                                                       expected: 2,
                                                       found: args.len(),
                                                       location }),
    }
}

fn add(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = int_pair("+", args, location)?;
    a.checked_add(b)
     .map(Value::Int)
     .ok_or(RuntimeError::Overflow { location })
}

fn sub(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = int_pair("-", args, location)?;
    a.checked_sub(b)
     .map(Value::Int)
     .ok_or(RuntimeError::Overflow { location })
}

fn mul(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = int_pair("*", args, location)?;
    a.checked_mul(b)
     .map(Value::Int)
     .ok_or(RuntimeError::Overflow { location })
}

fn div(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = int_pair("/", args, location)?;
    if b == 0 {
        return Err(RuntimeError::DivisionByZero { location });
    }
    a.checked_div(b)
     .map(Value::Int)
     .ok_or(RuntimeError::Overflow { location })
}

fn rem(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = int_pair("%", args, location)?;
    if b == 0 {
        return Err(RuntimeError::DivisionByZero { location });
    }
    a.checked_rem(b)
     .map(Value::Int)
     .ok_or(RuntimeError::Overflow { location })
}

fn less(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = int_pair("<", args, location)?;
    Ok(Value::Bool(a < b))
}

fn less_equal(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = int_pair("<=", args, location)?;
    Ok(Value::Bool(a <= b))
}

fn greater(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = int_pair(">", args, location)?;
    Ok(Value::Bool(a > b))
}

fn greater_equal(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = int_pair(">=", args, location)?;
    Ok(Value::Bool(a >= b))
}

fn and(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = bool_pair("and", args, location)?;
    Ok(Value::Bool(a && b))
}

fn or(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = bool_pair("or", args, location)?;
    Ok(Value::Bool(a || b))
}

fn same_type_pair<'v>(op: &str,
                      args: &'v [Value],
                      location: Location)
                      -> EvalResult<(&'v Value, &'v Value)> {
    match args {
        [a, b] if a.type_name() == b.type_name() => Ok((a, b)),
        [a, b] => Err(RuntimeError::TypeError { details: format!("operands of '{op}' have different types, {} and {}",
                                                                 a.type_name(),
                                                                 b.type_name()),
                                                location }),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: op.to_string(),
                                                       expected: 2,
                                                       found: args.len(),
                                                       location }),
    }
}

fn equal(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = same_type_pair("==", args, location)?;
    Ok(Value::Bool(a == b))
}

fn not_equal(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    let (a, b) = same_type_pair("!=", args, location)?;
    Ok(Value::Bool(a != b))
}

fn negate(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    match args {
        [Value::Int(n)] => n.checked_neg()
                            .map(Value::Int)
                            .ok_or(RuntimeError::Overflow { location }),
        [v] => Err(RuntimeError::TypeError { details: format!("'-' expects Int, received {}",
                                                              v.type_name()),
                                             location }),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: "unary_-".to_string(),
                                                       expected: 1,
                                                       found: args.len(),
                                                       location }),
    }
}

fn not(args: &[Value], location: Location, _: &mut dyn Write) -> EvalResult<Value> {
    match args {
        [Value::Bool(b)] => Ok(Value::Bool(!b)),
        [v] => Err(RuntimeError::TypeError { details: format!("'not' expects Bool, received {}",
                                                              v.type_name()),
                                             location }),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: "not".to_string(),
                                                       expected: 1,
                                                       found: args.len(),
                                                       location }),
    }
}

fn print_int(args: &[Value], location: Location, out: &mut dyn Write) -> EvalResult<Value> {
    match args {
        [Value::Int(n)] => write_line(out, &n.to_string(), location),
        [v] => Err(RuntimeError::TypeError { details: format!("'print_int' expects Int, received {}",
                                                              v.type_name()),
                                             location }),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: "print_int".to_string(),
                                                       expected: 1,
                                                       found: args.len(),
                                                       location }),
    }
}

fn print_bool(args: &[Value], location: Location, out: &mut dyn Write) -> EvalResult<Value> {
    match args {
        [Value::Bool(b)] => write_line(out, &b.to_string(), location),
        [v] => Err(RuntimeError::TypeError { details: format!("'print_bool' expects Bool, received {}",
                                                              v.type_name()),
                                             location }),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: "print_bool".to_string(),
                                                       expected: 1,
                                                       found: args.len(),
                                                       location }),
    }
}

fn write_line(out: &mut dyn Write, text: &str, location: Location) -> EvalResult<Value> {
    writeln!(out, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                location })?;
    Ok(Value::Unit)
}
