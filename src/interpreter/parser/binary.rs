use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenCursor},
            unary::parse_unary,
        },
    },
};

/// Parses assignment, the lowest precedence level.
///
/// Assignment is right-associative: `a = b = c` parses as `a = (b = c)`.
/// The left side is any expression; whether it can be assigned to is decided
/// when the program runs.
///
/// The rule is: `assignment := or ("=" assignment)?`
pub fn parse_assignment(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    let left = parse_or(tokens)?;

    if tokens.peek().kind == TokenKind::Operator && tokens.peek().is("=") {
        let location = tokens.advance().location;
        let right = parse_assignment(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op: BinaryOperator::Assign,
                                   right: Box::new(right),
                                   location });
    }

    Ok(left)
}

/// Parses logical or.
///
/// The rule is: `or := and ("or" and)*`
pub fn parse_or(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(tokens, &[BinaryOperator::Or], parse_and)
}

/// Parses logical and.
///
/// The rule is: `and := equality ("and" equality)*`
pub fn parse_and(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(tokens, &[BinaryOperator::And], parse_equality)
}

/// Parses `==` and `!=`.
///
/// The rule is: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual],
                           parse_relational)
}

/// Parses ordering comparisons.
///
/// The rule is: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_relational(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           &[BinaryOperator::Less,
                             BinaryOperator::LessEqual,
                             BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual],
                           parse_additive)
}

/// Parses addition and subtraction.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Example
/// ```
/// use quill::{parse, tokenize};
///
/// let expr = parse(&tokenize("1 - 2 - 3").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "((1 - 2) - 3)");
/// ```
pub fn parse_additive(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           &[BinaryOperator::Add, BinaryOperator::Sub],
                           parse_multiplicative)
}

/// Parses multiplication, division and remainder.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod],
                           parse_unary)
}

/// Parses one left-associative precedence level.
///
/// Operands come from `next`, the next-tighter level. Each node is located
/// at its operator token.
fn parse_left_associative(tokens: &mut TokenCursor,
                          operators: &[BinaryOperator],
                          next: fn(&mut TokenCursor) -> ParseResult<Expr>)
                          -> ParseResult<Expr> {
    let mut left = next(tokens)?;
    loop {
        let token = tokens.peek();
        if token.kind == TokenKind::Operator
           && let Some(op) = BinaryOperator::from_symbol(&token.text)
           && operators.contains(&op)
        {
            let location = tokens.advance().location;
            let right = next(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    location };
            continue;
        }
        break;
    }
    Ok(left)
}
