use crate::interpreter::{
    lexer::Location,
    types::{Type, join_types},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the static type checker can report.
pub enum TypeError {
    /// A name is not bound in any enclosing scope.
    UnknownIdentifier {
        /// The unresolved name.
        name:     String,
        /// The source location of the reference.
        location: Location,
    },
    /// A call names a function that does not exist.
    UnknownFunction {
        /// The callee name.
        name:     String,
        /// The source location of the call.
        location: Location,
    },
    /// A call names a binding that is not a function.
    NotCallable {
        /// The callee name.
        name:     String,
        /// The callee's actual type.
        found:    Type,
        /// The source location of the call.
        location: Location,
    },
    /// The operands of `=`, `==` or `!=` have different types.
    OperandMismatch {
        /// The operator symbol.
        op:       String,
        /// Type of the left operand.
        left:     Type,
        /// Type of the right operand.
        right:    Type,
        /// The source location of the operator.
        location: Location,
    },
    /// Operand or argument types do not match a signature.
    ArgumentMismatch {
        /// The operator symbol or function name.
        name:     String,
        /// The parameter types of the signature.
        expected: Vec<Type>,
        /// The actual argument types.
        found:    Vec<Type>,
        /// The source location of the operation or call.
        location: Location,
    },
    /// An operator has no signature in scope.
    UnsupportedOperator {
        /// The operator symbol.
        op:       String,
        /// The source location of the operator.
        location: Location,
    },
    /// An `if` or `while` condition is not `Bool`.
    ConditionNotBool {
        /// `if` or `while`.
        construct: &'static str,
        /// The condition's actual type.
        found:     Type,
        /// The source location of the condition.
        location:  Location,
    },
    /// The branches of a conditional have different types.
    BranchMismatch {
        /// Type of the `then` branch.
        then_type: Type,
        /// Type of the `else` branch, `Unit` when absent.
        else_type: Type,
        /// The source location of the conditional.
        location:  Location,
    },
    /// A declaration's annotation disagrees with its initializer.
    DeclaredTypeMismatch {
        /// The declared name.
        name:     String,
        /// The annotated type.
        declared: Type,
        /// The initializer's type.
        found:    Type,
        /// The source location of the declaration.
        location: Location,
    },
    /// An annotation names a type that does not exist.
    UnknownType {
        /// The annotated name.
        name:     String,
        /// The source location of the annotation.
        location: Location,
    },
}

impl TypeError {
    /// Returns the location the error points at.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnknownIdentifier { location, .. }
            | Self::UnknownFunction { location, .. }
            | Self::NotCallable { location, .. }
            | Self::OperandMismatch { location, .. }
            | Self::ArgumentMismatch { location, .. }
            | Self::UnsupportedOperator { location, .. }
            | Self::ConditionNotBool { location, .. }
            | Self::BranchMismatch { location, .. }
            | Self::DeclaredTypeMismatch { location, .. }
            | Self::UnknownType { location, .. } => *location,
        }
    }
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { name, location } => {
                write!(f, "Error on {location}: Type error: unknown identifier '{name}'.")
            },
            Self::UnknownFunction { name, location } => {
                write!(f, "Error on {location}: Type error: unknown function '{name}'.")
            },
            Self::NotCallable { name, found, location } => write!(f,
                                                                  "Error on {location}: Type error: '{name}' has type {found} and cannot be called."),
            Self::OperandMismatch { op,
                                    left,
                                    right,
                                    location, } => write!(f,
                                                          "Error on {location}: Type error: operands of '{op}' have different types, {left} and {right}."),
            Self::ArgumentMismatch { name,
                                     expected,
                                     found,
                                     location, } => write!(f,
                                                           "Error on {location}: Type error: '{name}' expects ({}), received ({}).",
                                                           join_types(expected),
                                                           join_types(found)),
            Self::UnsupportedOperator { op, location } => {
                write!(f, "Error on {location}: Type error: unsupported operator '{op}'.")
            },
            Self::ConditionNotBool { construct,
                                     found,
                                     location, } => write!(f,
                                                           "Error on {location}: Type error: condition of '{construct}' must be Bool, was {found}."),
            Self::BranchMismatch { then_type,
                                   else_type,
                                   location, } => write!(f,
                                                         "Error on {location}: Type error: 'then' and 'else' branches have differing types, {then_type} and {else_type}."),
            Self::DeclaredTypeMismatch { name,
                                         declared,
                                         found,
                                         location, } => write!(f,
                                                               "Error on {location}: Type error: '{name}' is declared as {declared} but initialized with {found}."),
            Self::UnknownType { name, location } => {
                write!(f, "Error on {location}: Type error: unknown type '{name}'.")
            },
        }
    }
}

impl std::error::Error for TypeError {}
