use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// A position in the source text.
///
/// Every token and every AST node carries the location where it begins.
/// Lines and columns are both 1-based, and columns count characters rather
/// than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// The source line, starting at 1.
    pub line:   usize,
    /// The column within the line, starting at 1.
    pub column: usize,
}

impl Location {
    /// The location of the first character of any input.
    pub const START: Self = Self { line:   1,
                                   column: 1, };

    /// Creates a location from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The category of a token.
///
/// Keywords are not special at this stage: `if`, `var` or `while` are plain
/// identifiers and the parser gives them meaning by their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of decimal digits, such as `42`.
    IntLiteral,
    /// A name such as `x`, `print_int` or `while`.
    Identifier,
    /// One of `+ - * / % = == != < <= > >= and or not`.
    Operator,
    /// One of `( ) { } , ; :`.
    Punctuation,
    /// The end marker. Never stored in a token list; the parser synthesizes
    /// it when looking past the last token.
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IntLiteral => "integer literal",
            Self::Identifier => "identifier",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::End => "end of input",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: its kind, its exact source text and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token category.
    pub kind:     TokenKind,
    /// The exact text matched in the source.
    pub text:     String,
    /// Where the token begins.
    pub location: Location,
}

impl Token {
    /// Creates a token.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::lexer::{Location, Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Operator, "+", Location::new(1, 3));
    /// assert!(token.is("+"));
    /// assert!(!token.is("-"));
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Self { kind,
               text: text.into(),
               location }
    }

    /// Creates the end marker at the given location.
    #[must_use]
    pub const fn end(location: Location) -> Self {
        Self { kind: TokenKind::End,
               text: String::new(),
               location }
    }

    /// Returns `true` if the token's text is exactly `text`.
    ///
    /// The end marker never matches, even against the empty string.
    #[must_use]
    pub fn is(&self, text: &str) -> bool {
        self.kind != TokenKind::End && self.text == text
    }
}

/// The raw patterns recognized by the lexer.
///
/// Longest match wins, so `==` is preferred over `=` and `android` over
/// `and`. On equal length the literal operator words beat the identifier
/// pattern. Whitespace, newlines and comments are consumed without producing
/// a token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum Lexeme {
    /// Symbolic and word operators.
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("=")]
    #[token("<")]
    #[token(">")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("and")]
    #[token("or")]
    #[token("not")]
    Operator,
    /// Identifiers, which include keywords.
    #[regex(r"[A-Za-z_][A-Za-z_0-9]*")]
    Identifier,
    /// Integer literals.
    #[regex(r"[0-9]+")]
    IntLiteral,
    /// Single-character punctuation.
    #[token("(")]
    #[token(")")]
    #[token("{")]
    #[token("}")]
    #[token(",")]
    #[token(";")]
    #[token(":")]
    Punctuation,
    /// `// line comments` and `# line comments`.
    #[regex(r"(//|#)[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `\n`, which moves the location to the next line.
    #[token("\n", newline)]
    Newline,
    /// Spaces, tabs, carriage returns and form feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,
}

impl Lexeme {
    /// Maps a lexeme to the token kind it produces, if any.
    #[must_use]
    pub const fn kind(self) -> Option<TokenKind> {
        match self {
            Self::Operator => Some(TokenKind::Operator),
            Self::Identifier => Some(TokenKind::Identifier),
            Self::IntLiteral => Some(TokenKind::IntLiteral),
            Self::Punctuation => Some(TokenKind::Punctuation),
            Self::Comment | Self::Newline | Self::Whitespace => None,
        }
    }
}

/// State carried by the lexer while scanning.
///
/// Tracks the current line and the byte offset where it starts, from which
/// the column of every token is derived.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

impl LexerExtras {
    /// Computes the location of the byte `offset`, which must lie on the
    /// current line.
    fn location_of(self, source: &str, offset: usize) -> Location {
        let column = source[self.line_start..offset].chars().count() + 1;
        Location::new(self.line, column)
    }
}

fn newline(lex: &mut logos::Lexer<Lexeme>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Scans source text into a list of located tokens.
///
/// Whitespace and comments are skipped. The returned list holds no end
/// marker; the parser synthesizes one when it reads past the last token.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] at the first position where no
/// token pattern matches.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Location, TokenKind, tokenize};
///
/// let tokens = tokenize("1 + foo\n  bar").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["1", "+", "foo", "bar"]);
/// assert_eq!(tokens[1].kind, TokenKind::Operator);
/// assert_eq!(tokens[3].location, Location::new(2, 3));
///
/// assert!(tokenize("1 $ 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexeme::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let location = lexer.extras.location_of(source, lexer.span().start);
        match lexeme {
            Ok(lexeme) => {
                if let Some(kind) = lexeme.kind() {
                    tokens.push(Token::new(kind, lexer.slice(), location));
                }
            },
            Err(()) => {
                return Err(LexError::UnexpectedCharacter { text: lexer.slice().to_string(),
                                                           location });
            },
        }
    }

    Ok(tokens)
}
