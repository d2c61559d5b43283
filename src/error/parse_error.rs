use crate::interpreter::lexer::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The token list was empty.
    EmptyInput,
    /// A specific token was required but something else was found.
    Expected {
        /// The required token text, such as `)` or `then`.
        expected: String,
        /// A description of the token actually found.
        found:    String,
        /// The source location of the found token.
        location: Location,
    },
    /// An operand was required but the token cannot start an expression.
    ExpectedExpression {
        /// A description of the token actually found.
        found:    String,
        /// The source location of the found token.
        location: Location,
    },
    /// A name was required but the token is not an identifier.
    ExpectedIdentifier {
        /// A description of the token actually found.
        found:    String,
        /// The source location of the found token.
        location: Location,
    },
    /// Found extra tokens after a complete program.
    UnexpectedTrailingTokens {
        /// The first unconsumed token.
        token:    String,
        /// The source location of that token.
        location: Location,
    },
    /// A `var` declaration appeared where only an expression is allowed.
    DeclarationOutsideBlock {
        /// The source location of the `var` keyword.
        location: Location,
    },
    /// Tried to use a reserved word as a name.
    IdentifierReserved {
        /// The reserved word.
        name:     String,
        /// The source location where it was used.
        location: Location,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The literal as written.
        text:     String,
        /// The source location of the literal.
        location: Location,
    },
}

impl ParseError {
    /// Returns the location the error points at, if any.
    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        match self {
            Self::EmptyInput => None,
            Self::Expected { location, .. }
            | Self::ExpectedExpression { location, .. }
            | Self::ExpectedIdentifier { location, .. }
            | Self::UnexpectedTrailingTokens { location, .. }
            | Self::DeclarationOutsideBlock { location }
            | Self::IdentifierReserved { location, .. }
            | Self::LiteralTooLarge { location, .. } => Some(*location),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Attempting to parse an empty token list."),

            Self::Expected { expected,
                             found,
                             location, } => {
                write!(f, "Error on {location}: Expected \"{expected}\" but found {found}.")
            },

            Self::ExpectedExpression { found, location } => write!(f,
                                                                   "Error on {location}: Expected \"(\", \"{{\", \"if\", \"while\", a literal or an identifier, but found {found}."),

            Self::ExpectedIdentifier { found, location } => {
                write!(f, "Error on {location}: Expected an identifier but found {found}.")
            },

            Self::UnexpectedTrailingTokens { token, location } => write!(f,
                                                                         "Error on {location}: Parsing ended at an unexpected token: {token}."),

            Self::DeclarationOutsideBlock { location } => write!(f,
                                                                 "Error on {location}: Attempting to declare a variable outside a block or the top level."),

            Self::IdentifierReserved { name, location } => {
                write!(f, "Error on {location}: Identifier {name} is reserved.")
            },

            Self::LiteralTooLarge { text, location } => {
                write!(f, "Error on {location}: Literal {text} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
