/// Lexing errors.
///
/// Raised when the source text contains a character sequence that matches
/// none of the token patterns.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// missing or unexpected tokens, misplaced declarations, reserved names and
/// oversized literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unresolved names, division by zero, overflow or values of the wrong type.
pub mod runtime_error;
/// Type errors.
///
/// Raised by the static checker on the first operand, argument, branch or
/// declaration whose type does not fit.
pub mod type_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use type_error::TypeError;
