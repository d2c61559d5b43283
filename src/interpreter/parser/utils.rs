use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Location, Token, TokenKind},
        parser::core::{ParseResult, TokenCursor},
    },
};

/// Words with a fixed meaning in the grammar. None of them may be used as a
/// variable name.
pub const RESERVED: &[&str] = &["if", "then", "else", "while", "do", "var", "true", "false", "not",
                                "and", "or"];

/// Returns `true` if `name` is a reserved word.
///
/// # Example
/// ```
/// use quill::interpreter::parser::utils::is_reserved;
///
/// assert!(is_reserved("while"));
/// assert!(!is_reserved("whilst"));
/// ```
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// Describes a token for an error message: its quoted text, or
/// `end of input` for the end marker.
#[must_use]
pub fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::End => token.kind.to_string(),
        _ => format!("'{}'", token.text),
    }
}

/// Consumes the next token, which must have exactly the text `expected`.
///
/// # Errors
/// [`ParseError::Expected`] at the offending token otherwise; nothing is
/// consumed in that case.
pub fn expect(tokens: &mut TokenCursor, expected: &str) -> ParseResult<Token> {
    let token = tokens.peek();
    if !token.is(expected) {
        return Err(ParseError::Expected { expected: expected.to_string(),
                                          found:    describe(token),
                                          location: token.location, });
    }
    Ok(tokens.advance())
}

/// Consumes an identifier that is not a reserved word and returns its name
/// and location.
pub fn parse_identifier(tokens: &mut TokenCursor) -> ParseResult<(String, Location)> {
    let token = tokens.peek();
    if token.kind != TokenKind::Identifier {
        return Err(ParseError::ExpectedIdentifier { found:    describe(token),
                                                    location: token.location, });
    }
    if is_reserved(&token.text) {
        return Err(ParseError::IdentifierReserved { name:     token.text.clone(),
                                                    location: token.location, });
    }
    let token = tokens.advance();
    Ok((token.text, token.location))
}

/// Parses `item ("," item)*` and returns the items.
///
/// At least one item is required; the caller consumes the surrounding
/// delimiters.
pub fn parse_comma_separated(tokens: &mut TokenCursor,
                             parse_item: impl Fn(&mut TokenCursor) -> ParseResult<Expr>)
                             -> ParseResult<Vec<Expr>> {
    let mut items = vec![parse_item(tokens)?];
    while tokens.peek().is(",") {
        tokens.advance();
        items.push(parse_item(tokens)?);
    }
    Ok(items)
}
