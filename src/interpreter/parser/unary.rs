use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            block::parse_block,
            core::{ParseResult, TokenCursor, parse_expression, parse_if, parse_while},
            utils::{describe, expect, is_reserved, parse_comma_separated},
        },
    },
};

/// Parses prefix operators.
///
/// Handles `-x` and `not x`. The operand is itself a unary expression, so
/// prefixes nest: `not not x`, `- -1`.
///
/// The rule is: `unary := ("-" | "not") unary | primary`
///
/// # Example
/// ```
/// use quill::{parse, tokenize};
///
/// let expr = parse(&tokenize("- -1 * 2").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "((- (- 1)) * 2)");
/// ```
pub fn parse_unary(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    let token = tokens.peek();
    let op = match token.kind {
        TokenKind::Operator if token.is("-") => UnaryOperator::Negate,
        TokenKind::Operator if token.is("not") => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };

    let location = tokens.advance().location;
    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       location })
}

/// Parses primary expressions, the tightest-binding forms.
///
/// Supports:
/// - Parenthesized expressions
/// - Blocks
/// - `if` and `while` expressions
/// - Integer and boolean literals
/// - Identifiers, and function calls when `(` follows the name
///
/// # Errors
/// - [`ParseError::DeclarationOutsideBlock`] for a `var` in expression
///   position.
/// - [`ParseError::IdentifierReserved`] for any other reserved word.
/// - [`ParseError::ExpectedExpression`] when no primary form starts here.
pub fn parse_primary(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    let token = tokens.peek();

    match token.kind {
        TokenKind::Punctuation if token.is("(") => parse_parenthesized(tokens),
        TokenKind::Punctuation if token.is("{") => parse_block(tokens),
        TokenKind::IntLiteral => parse_int_literal(tokens),
        TokenKind::Identifier => match token.text.as_str() {
            "if" => parse_if(tokens),
            "while" => parse_while(tokens),
            "true" | "false" => {
                let token = tokens.advance();
                Ok(Expr::Literal { value:    LiteralValue::Bool(token.text == "true"),
                                   location: token.location, })
            },
            "var" => Err(ParseError::DeclarationOutsideBlock { location: token.location }),
            name if is_reserved(name) => {
                Err(ParseError::IdentifierReserved { name:     name.to_string(),
                                                     location: token.location, })
            },
            _ => parse_identifier_or_call(tokens),
        },
        _ => Err(ParseError::ExpectedExpression { found:    describe(token),
                                                  location: token.location, }),
    }
}

/// Parses an integer literal.
///
/// # Errors
/// [`ParseError::LiteralTooLarge`] if the digits do not fit a 64-bit signed
/// integer.
///
/// # Example
/// ```
/// use quill::{error::ParseError, parse, tokenize};
///
/// assert!(parse(&tokenize("9223372036854775807").unwrap()).is_ok());
/// assert!(matches!(parse(&tokenize("9223372036854775808").unwrap()),
///                  Err(ParseError::LiteralTooLarge { .. })));
/// ```
pub fn parse_int_literal(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    let token = tokens.advance();
    let Ok(n) = token.text.parse::<i64>() else {
        return Err(ParseError::LiteralTooLarge { text:     token.text,
                                                 location: token.location, });
    };

    Ok(Expr::Literal { value:    n.into(),
                       location: token.location, })
}

/// Parses a name, promoted to a call when directly followed by `(`.
///
/// Grammar: `call := IDENT "(" expression ("," expression)* ")"`
///
/// A call needs at least one argument; `f()` is rejected at the `)`.
pub fn parse_identifier_or_call(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    let token = tokens.advance();

    if !tokens.peek().is("(") {
        return Ok(Expr::Identifier { name:     token.text,
                                     location: token.location, });
    }

    tokens.advance();
    let arguments = parse_comma_separated(tokens, parse_expression)?;
    expect(tokens, ")")?;

    Ok(Expr::FunctionCall { name: token.text,
                            arguments,
                            location: token.location })
}

/// Parses `"(" expression ")"` and returns the inner expression.
pub fn parse_parenthesized(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    expect(tokens, "(")?;
    let expr = parse_expression(tokens)?;
    expect(tokens, ")")?;
    Ok(expr)
}
