use crate::interpreter::lexer::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// The source location of the reference.
        location: Location,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// The source location of the call.
        location: Location,
    },
    /// Called a binding that holds a plain value.
    NotCallable {
        /// The name of the binding.
        name:     String,
        /// The source location of the call.
        location: Location,
    },
    /// An operator has no implementation bound in the root scope.
    UnsupportedOperator {
        /// The operator symbol.
        op:       String,
        /// The source location of the operator.
        location: Location,
    },
    /// The left side of `=` is not a variable name.
    InvalidAssignmentTarget {
        /// The source location of the `=`.
        location: Location,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source location of the call.
        location: Location,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// The source location where the error occurred.
        location: Location,
    },
    /// A condition did not evaluate to a boolean.
    ExpectedBoolean {
        /// The source location of the condition.
        location: Location,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero {
        /// The source location of the operator.
        location: Location,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source location of the operator.
        location: Location,
    },
    /// Writing to the output sink failed.
    Output {
        /// The underlying I/O error message.
        details:  String,
        /// The source location of the call.
        location: Location,
    },
}

impl RuntimeError {
    /// Returns the location the error points at.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnknownVariable { location, .. }
            | Self::UnknownFunction { location, .. }
            | Self::NotCallable { location, .. }
            | Self::UnsupportedOperator { location, .. }
            | Self::InvalidAssignmentTarget { location }
            | Self::ArgumentCountMismatch { location, .. }
            | Self::TypeError { location, .. }
            | Self::ExpectedBoolean { location }
            | Self::DivisionByZero { location }
            | Self::Overflow { location }
            | Self::Output { location, .. } => *location,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, location } => {
                write!(f, "Error on {location}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, location } => {
                write!(f, "Error on {location}: Unknown function '{name}'.")
            },
            Self::NotCallable { name, location } => {
                write!(f, "Error on {location}: '{name}' is not a function.")
            },
            Self::UnsupportedOperator { op, location } => {
                write!(f, "Error on {location}: Unsupported operator '{op}'.")
            },
            Self::InvalidAssignmentTarget { location } => write!(f,
                                                                 "Error on {location}: Only variables can be assigned to."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          location, } => write!(f,
                                                                "Error on {location}: '{name}' expects {expected} argument(s), but {found} were given."),
            Self::TypeError { details, location } => {
                write!(f, "Error on {location}: Type error: {details}.")
            },
            Self::ExpectedBoolean { location } => {
                write!(f, "Error on {location}: Expected boolean.")
            },
            Self::DivisionByZero { location } => {
                write!(f, "Error on {location}: Division by zero.")
            },
            Self::Overflow { location } => write!(f,
                                                  "Error on {location}: Integer overflow while trying to compute result."),
            Self::Output { details, location } => {
                write!(f, "Error on {location}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
