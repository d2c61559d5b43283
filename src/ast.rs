use std::fmt;

use crate::interpreter::lexer::Location;

/// A constant written directly in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// `true` or `false`.
    Bool(bool),
    /// The "no value" constant.
    Unit,
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Unit => write!(f, "unit"),
        }
    }
}

/// A binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Assignment (`=`)
    Assign,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl BinaryOperator {
    /// Returns the operator's source symbol, which is also the name it is
    /// bound under in the root scope.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Assign => "=",
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Maps a token's text to a binary operator.
    ///
    /// # Example
    /// ```
    /// use quill::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("<="), Some(BinaryOperator::LessEqual));
    /// assert_eq!(BinaryOperator::from_symbol("not"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            "<" => Self::Less,
            "<=" => Self::LessEqual,
            ">" => Self::Greater,
            ">=" => Self::GreaterEqual,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "=" => Self::Assign,
            "and" => Self::And,
            "or" => Self::Or,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical not (`not x`).
    Not,
}

impl UnaryOperator {
    /// Returns the operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "not",
        }
    }

    /// Returns the name the operator is bound under in the root scope.
    ///
    /// Negation is bound as `unary_-` so it does not collide with binary
    /// subtraction.
    #[must_use]
    pub const fn binding_name(self) -> &'static str {
        match self {
            Self::Negate => "unary_-",
            Self::Not => "not",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A declared type written after a variable name, as in `var x: Int = 1`.
///
/// The parser carries the name unchecked; the type checker resolves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAnnotation {
    /// The type name as written.
    pub name:     String,
    /// Where the name appears.
    pub location: Location,
}

/// An expression node.
///
/// Everything in the language is an expression, including blocks, loops and
/// variable declarations. Each node owns its children and records the
/// location where it begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A constant.
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Location in the source code.
        location: Location,
    },
    /// A name reference.
    Identifier {
        /// The referenced name.
        name:     String,
        /// Location in the source code.
        location: Location,
    },
    /// A binary operation, including assignment.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Location of the operator token.
        location: Location,
    },
    /// A prefix operation.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Self>,
        /// Location in the source code.
        location: Location,
    },
    /// `if COND then EXPR [else EXPR]`
    Conditional {
        /// The condition.
        condition:   Box<Self>,
        /// Evaluated when the condition holds.
        then_branch: Box<Self>,
        /// Evaluated otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Location in the source code.
        location:    Location,
    },
    /// A call such as `print_int(x)`.
    FunctionCall {
        /// The callee name.
        name:      String,
        /// Arguments, in source order.
        arguments: Vec<Self>,
        /// Location in the source code.
        location:  Location,
    },
    /// `{ s1; s2; result }`
    Block {
        /// Statements evaluated for their effect.
        statements: Vec<Self>,
        /// The trailing result expression. `None` means the block yields
        /// unit.
        result:     Option<Box<Self>>,
        /// Location in the source code.
        location:   Location,
    },
    /// `var NAME [: TYPE] = EXPR`
    VariableDeclaration {
        /// The declared name.
        name:            String,
        /// The initial value.
        initializer:     Box<Self>,
        /// The optional declared type.
        type_annotation: Option<TypeAnnotation>,
        /// Location in the source code.
        location:        Location,
    },
    /// `while COND do EXPR`
    While {
        /// The loop condition.
        condition: Box<Self>,
        /// The loop body.
        body:      Box<Self>,
        /// Location in the source code.
        location:  Location,
    },
}

impl Expr {
    /// Gets the location where `self` begins.
    /// ## Example
    /// ```
    /// use quill::{ast::Expr, interpreter::lexer::Location};
    ///
    /// let expr = Expr::Identifier { name:     "x".to_string(),
    ///                               location: Location::new(5, 2), };
    ///
    /// assert_eq!(expr.location(), Location::new(5, 2));
    /// ```
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Literal { location, .. }
            | Self::Identifier { location, .. }
            | Self::BinaryOp { location, .. }
            | Self::UnaryOp { location, .. }
            | Self::Conditional { location, .. }
            | Self::FunctionCall { location, .. }
            | Self::Block { location, .. }
            | Self::VariableDeclaration { location, .. }
            | Self::While { location, .. } => *location,
        }
    }
}

/// Renders the expression in a compact, fully parenthesized form that shows
/// the tree's shape without locations.
///
/// # Example
/// ```
/// use quill::{parse, tokenize};
///
/// let expr = parse(&tokenize("1 + 2 * 3").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                write!(f, "(if {condition} then {then_branch}")?;
                if let Some(else_branch) = else_branch {
                    write!(f, " else {else_branch}")?;
                }
                write!(f, ")")
            },
            Self::FunctionCall { name, arguments, .. } => {
                let arguments: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{name}({})", arguments.join(", "))
            },
            Self::Block { statements, result, .. } => {
                write!(f, "{{")?;
                for statement in statements {
                    write!(f, " {statement};")?;
                }
                if let Some(result) = result {
                    write!(f, " {result}")?;
                }
                write!(f, " }}")
            },
            Self::VariableDeclaration { name,
                                        initializer,
                                        type_annotation,
                                        .. } => match type_annotation {
                Some(annotation) => write!(f, "(var {name}: {} = {initializer})", annotation.name),
                None => write!(f, "(var {name} = {initializer})"),
            },
            Self::While { condition, body, .. } => write!(f, "(while {condition} do {body})"),
        }
    }
}
