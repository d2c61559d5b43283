use std::fmt;

/// A named, non-function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    /// 64-bit signed integers.
    Int,
    /// `true` and `false`.
    Bool,
    /// The type of expressions that yield no meaningful value.
    Unit,
}

impl BasicType {
    /// Resolves a type annotation's name.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::types::BasicType;
    ///
    /// assert_eq!(BasicType::from_name("Bool"), Some(BasicType::Bool));
    /// assert_eq!(BasicType::from_name("bool"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(Self::Int),
            "Bool" => Some(Self::Bool),
            "Unit" => Some(Self::Unit),
            _ => None,
        }
    }

    /// Returns the name used in annotations and messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Bool => "Bool",
            Self::Unit => "Unit",
        }
    }
}

/// The signature of a callable: ordered parameter types and a result type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    /// Parameter types, in order.
    pub params: Vec<Type>,
    /// The type of the call's value.
    pub result: Box<Type>,
}

/// A static type.
///
/// Types are immutable values compared structurally: two function types are
/// equal when their parameter lists and result types are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// `Int`, `Bool` or `Unit`.
    Basic(BasicType),
    /// A function signature.
    Function(FunctionType),
}

impl Type {
    /// `Int`
    pub const INT: Self = Self::Basic(BasicType::Int);
    /// `Bool`
    pub const BOOL: Self = Self::Basic(BasicType::Bool);
    /// `Unit`
    pub const UNIT: Self = Self::Basic(BasicType::Unit);

    /// Builds a function type from basic parameter and result types.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::types::{BasicType, Type};
    ///
    /// let add = Type::function(&[BasicType::Int, BasicType::Int], BasicType::Int);
    /// assert_eq!(add.to_string(), "(Int, Int) => Int");
    /// assert_eq!(add,
    ///            Type::function(&[BasicType::Int, BasicType::Int], BasicType::Int));
    /// assert_ne!(add, Type::function(&[BasicType::Int], BasicType::Int));
    /// ```
    #[must_use]
    pub fn function(params: &[BasicType], result: BasicType) -> Self {
        Self::Function(FunctionType { params: params.iter().copied().map(Self::Basic).collect(),
                                      result: Box::new(Self::Basic(result)), })
    }
}

impl From<BasicType> for Type {
    fn from(basic: BasicType) -> Self {
        Self::Basic(basic)
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(basic) => write!(f, "{basic}"),
            Self::Function(FunctionType { params, result }) => {
                write!(f, "({}) => {result}", join_types(params))
            },
        }
    }
}

/// Formats a list of types as `A, B, C`.
#[must_use]
pub fn join_types(types: &[Type]) -> String {
    types.iter()
         .map(ToString::to_string)
         .collect::<Vec<_>>()
         .join(", ")
}
