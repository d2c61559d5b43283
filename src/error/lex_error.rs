use crate::interpreter::lexer::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// No token pattern matches at this position.
    UnexpectedCharacter {
        /// The text that could not be matched.
        text:     String,
        /// Where the text begins.
        location: Location,
    },
}

impl LexError {
    /// Returns the location the error points at.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnexpectedCharacter { location, .. } => *location,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { text, location } => {
                write!(f, "Error on {location}: Unexpected character '{text}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
