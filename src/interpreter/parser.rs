/// Parser state and entry points.
///
/// Holds the token cursor, the program rule and the expression rules that
/// start with a keyword (`if`, `while`).
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from assignment down to
/// multiplication.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Prefix operators, literals, identifiers, calls and parentheses.
pub mod unary;

/// Block parsing.
///
/// Braced blocks and the statement-sequence rule shared with the top level.
pub mod block;

/// Variable declaration parsing.
pub mod statement;

/// Shared parser helpers.
///
/// Token expectations, identifiers, reserved words and comma-separated
/// lists.
pub mod utils;
