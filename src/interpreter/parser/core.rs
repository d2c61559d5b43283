use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Location, Token},
        parser::{
            binary::parse_assignment,
            block::{Closing, parse_sequence},
            statement::parse_variable_declaration,
            utils::expect,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A read position over a token slice.
///
/// Looking past the last token yields an end marker located at the last
/// token, so every parse error can point somewhere in the source.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens:   &'a [Token],
    position: usize,
    end:      Token,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the first token.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        let end_location = tokens.last().map_or(Location::START, |token| token.location);
        Self { tokens,
               position: 0,
               end: Token::end(end_location) }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{
    ///     lexer::{TokenKind, tokenize},
    ///     parser::core::TokenCursor,
    /// };
    ///
    /// let tokens = tokenize("x").unwrap();
    /// let mut cursor = TokenCursor::new(&tokens);
    /// assert!(cursor.peek().is("x"));
    ///
    /// cursor.advance();
    /// assert_eq!(cursor.peek().kind, TokenKind::End);
    /// assert_eq!(cursor.peek().location, tokens[0].location);
    /// ```
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.end)
    }

    /// Consumes and returns the next token. At the end this keeps returning
    /// the end marker.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

/// Parses a whole program.
///
/// A program is a single expression, or a `;`-separated sequence that has
/// the shape of a block without braces. A single expression is returned as
/// is; a sequence becomes an [`Expr::Block`] located at the first token.
/// Every token must be consumed.
///
/// # Errors
/// - [`ParseError::EmptyInput`] if `tokens` is empty.
/// - [`ParseError::UnexpectedTrailingTokens`] if tokens remain after a
///   complete expression.
/// - Any error raised by the grammar rules.
pub fn parse_program(tokens: &[Token]) -> ParseResult<Expr> {
    let Some(first) = tokens.first() else {
        return Err(ParseError::EmptyInput);
    };
    let mut cursor = TokenCursor::new(tokens);
    let (statements, result) = parse_sequence(&mut cursor, Closing::End)?;

    match (statements.is_empty(), result) {
        (true, Some(result)) => Ok(*result),
        (_, result) => Ok(Expr::Block { statements,
                                        result,
                                        location: first.location }),
    }
}

/// Parses a full expression.
///
/// Grammar: `expression := assignment`
///
/// Declarations are not expressions; a `var` reached here is rejected by the
/// primary rule.
pub fn parse_expression(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    parse_assignment(tokens)
}

/// Parses an expression in statement position, where a `var` declaration is
/// also allowed.
pub fn parse_expression_or_declaration(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    if tokens.peek().is("var") {
        parse_variable_declaration(tokens)
    } else {
        parse_expression(tokens)
    }
}

/// Parses `if COND then EXPR [else EXPR]`.
///
/// A dangling `else` binds to the nearest `if`.
pub fn parse_if(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    let location = expect(tokens, "if")?.location;
    let condition = parse_expression(tokens)?;
    expect(tokens, "then")?;
    let then_branch = parse_expression(tokens)?;

    let else_branch = if tokens.peek().is("else") {
        tokens.advance();
        Some(Box::new(parse_expression(tokens)?))
    } else {
        None
    };

    Ok(Expr::Conditional { condition: Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch,
                           location })
}

/// Parses `while COND do EXPR`.
pub fn parse_while(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    let location = expect(tokens, "while")?.location;
    let condition = parse_expression(tokens)?;
    expect(tokens, "do")?;
    let body = parse_expression(tokens)?;

    Ok(Expr::While { condition: Box::new(condition),
                     body: Box::new(body),
                     location })
}

