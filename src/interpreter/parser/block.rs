use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, TokenCursor, parse_expression_or_declaration},
            utils::{describe, expect},
        },
    },
};

/// The token that terminates a statement sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closing {
    /// `}` of a braced block.
    Brace,
    /// The end of input, for a top-level sequence.
    End,
}

impl Closing {
    fn matches(self, token: &Token) -> bool {
        match self {
            Self::Brace => token.is("}"),
            Self::End => token.kind == TokenKind::End,
        }
    }

    // An expression that is neither terminated nor last.
    fn missing_separator(self, token: &Token) -> ParseError {
        match self {
            Self::Brace => ParseError::Expected { expected: ";".to_string(),
                                                  found:    describe(token),
                                                  location: token.location, },
            Self::End => ParseError::UnexpectedTrailingTokens { token:    describe(token),
                                                                location: token.location, },
        }
    }
}

/// Parses a block expression delimited by braces.
///
/// Grammar: `block := "{" (statement (";" statement)*)? ";"? "}"`
///
/// The block is located at its `{`. See [`parse_sequence`] for how the
/// statements and the result are told apart.
pub fn parse_block(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    let location = expect(tokens, "{")?.location;
    let (statements, result) = parse_sequence(tokens, Closing::Brace)?;
    expect(tokens, "}")?;

    Ok(Expr::Block { statements,
                     result,
                     location })
}

/// Parses the statements of a block up to, but not including, `closing`.
///
/// Each entry is an expression or a `var` declaration.
/// - An entry followed by `;` is a statement.
/// - An entry directly followed by `closing` is the result.
/// - A block entry needs no `;` before the next entry.
///
/// When every entry is terminated by `;`, there is no result and the block
/// yields unit.
///
/// # Returns
/// The statements, in order, and the result expression if there is one.
///
/// # Example
/// ```
/// use quill::interpreter::{
///     lexer::tokenize,
///     parser::{
///         block::{Closing, parse_sequence},
///         core::TokenCursor,
///     },
/// };
///
/// let tokens = tokenize("var a = 1; { a } a").unwrap();
/// let (statements, result) = parse_sequence(&mut TokenCursor::new(&tokens), Closing::End).unwrap();
///
/// assert_eq!(statements.len(), 2);
/// assert_eq!(result.unwrap().to_string(), "a");
/// ```
pub fn parse_sequence(tokens: &mut TokenCursor,
                      closing: Closing)
                      -> ParseResult<(Vec<Expr>, Option<Box<Expr>>)> {
    let mut statements = Vec::new();

    while !closing.matches(tokens.peek()) {
        if closing == Closing::Brace && tokens.at_end() {
            let token = tokens.peek();
            return Err(ParseError::Expected { expected: "}".to_string(),
                                              found:    describe(token),
                                              location: token.location, });
        }

        let expr = parse_expression_or_declaration(tokens)?;

        if tokens.peek().is(";") {
            tokens.advance();
            statements.push(expr);
        } else if closing.matches(tokens.peek()) {
            return Ok((statements, Some(Box::new(expr))));
        } else if matches!(expr, Expr::Block { .. }) {
            statements.push(expr);
        } else {
            return Err(closing.missing_separator(tokens.peek()));
        }
    }

    Ok((statements, None))
}
