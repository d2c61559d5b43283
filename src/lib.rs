//! # quill
//!
//! quill is a small expression-oriented language written in Rust.
//! Source text is tokenized, parsed into an expression tree, checked against
//! a static type system and run by a tree-walking interpreter. Every construct
//! is an expression, including blocks, loops and variable declarations.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::{
    ast::Expr,
    error::{LexError, ParseError, RuntimeError, TypeError},
    interpreter::{
        checker::core::TypeChecker, evaluator::core::Interpreter, lexer::Token, parser,
        types::Type, value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator and literal types it
/// is built from. The tree is built by the parser and read by the type
/// checker and the interpreter.
///
/// # Responsibilities
/// - Defines one node kind per language construct.
/// - Attaches a source location to every node for error reporting.
/// - Renders trees in a compact parenthesized form.
pub mod ast;
/// Provides the error types of every stage.
///
/// One error enum per stage: lexing, parsing, type checking and evaluation.
/// Each variant carries the location of the offending token or node and the
/// details needed to explain the failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source locations for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, type checking and evaluation,
/// along with the scope and built-in machinery the last two share.
pub mod interpreter;

/// Scans source text into tokens.
///
/// # Errors
/// Returns a [`LexError`] at the first character that starts no token.
///
/// # Example
/// ```
/// use quill::{interpreter::lexer::TokenKind, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::IntLiteral, TokenKind::Operator, TokenKind::IntLiteral]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    interpreter::lexer::tokenize(source)
}

/// Parses a token list into one expression tree, consuming every token.
///
/// # Errors
/// Returns a [`ParseError`] at the first grammar violation.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    parser::core::parse_program(tokens)
}

/// Computes the static type of a program.
///
/// Every call starts from freshly seeded scopes, so checking the same tree
/// twice gives the same answer.
///
/// # Errors
/// Returns the first [`TypeError`] found.
///
/// # Example
/// ```
/// use quill::{interpreter::types::Type, parse, tokenize, typecheck};
///
/// let program = parse(&tokenize("if true then 1 else 2").unwrap()).unwrap();
/// assert_eq!(typecheck(&program), Ok(Type::INT));
/// assert_eq!(typecheck(&program), typecheck(&program));
/// ```
pub fn typecheck(expr: &Expr) -> Result<Type, TypeError> {
    TypeChecker::new().check(expr)
}

/// Runs a program, with built-in output going to standard output.
///
/// # Errors
/// Returns the first [`RuntimeError`] raised.
pub fn interpret(expr: &Expr) -> Result<Value, RuntimeError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    interpret_with_output(expr, &mut out)
}

/// Runs a program, with built-in output going to `out`.
///
/// # Errors
/// Returns the first [`RuntimeError`] raised.
///
/// # Example
/// ```
/// use quill::{interpret_with_output, interpreter::value::Value, parse, tokenize};
///
/// let program = parse(&tokenize("print_bool(1 < 2); 7").unwrap()).unwrap();
/// let mut out = Vec::new();
///
/// assert_eq!(interpret_with_output(&program, &mut out), Ok(Value::Int(7)));
/// assert_eq!(String::from_utf8(out).unwrap(), "true\n");
/// ```
pub fn interpret_with_output(expr: &Expr, out: &mut dyn Write) -> Result<Value, RuntimeError> {
    Interpreter::new(out).eval(expr)
}

/// Runs source text through the whole pipeline and returns the program's
/// value.
///
/// Type checking runs between parsing and evaluation unless `typecheck` is
/// `false`.
///
/// # Errors
/// Returns the error of whichever stage fails first.
///
/// # Examples
/// ```
/// use quill::{get_result, interpreter::value::Value};
///
/// // Simple program: the value is computed and no error should occur.
/// let res = get_result("var x = 2; x * 3", true);
/// assert_eq!(res.unwrap(), Value::Int(6));
///
/// // A type error is caught before anything runs.
/// assert!(get_result("var y = 1 + true", true).is_err());
///
/// // Without checking, the same mistake surfaces at run time.
/// assert!(get_result("var y = 1 + true", false).is_err());
/// ```
pub fn get_result(source: &str, typecheck: bool) -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;

    if typecheck {
        self::typecheck(&program)?;
    }

    Ok(interpret(&program)?)
}
