/// The built-in operators and functions.
///
/// A single table pairs each predefined name with a static signature and a
/// runtime implementation. The type checker seeds its root scope from the
/// signatures and the interpreter from the implementations, so the two stay
/// in step.
pub mod builtin;
/// The type checker computes the static type of a program.
///
/// It walks the tree with a scope stack of types, the same way the evaluator
/// walks it with values, and stops at the first mismatch.
///
/// # Responsibilities
/// - Types every node, including code that would never run.
/// - Resolves names through nested scopes.
/// - Validates declared type annotations.
pub mod checker;
/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks the tree, manages variable scopes, calls built-ins and
/// produces the program's value. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every expression kind.
/// - Handles variables, blocks, conditionals and loops.
/// - Reports runtime errors such as unbound names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a list of tokens, each
/// carrying its kind, its exact text and the line and column where it starts.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into located tokens.
/// - Skips whitespace and line comments.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive-descent parser with one function per precedence level, plus
/// the structural rules for blocks and declarations.
///
/// # Responsibilities
/// - Converts tokens into a single expression tree.
/// - Validates the grammar, reporting the first error with its location.
pub mod parser;
/// Nested lexical scopes.
///
/// A stack of name-to-binding frames shared by the type checker and the
/// evaluator.
pub mod scope;
/// The static type model: `Int`, `Bool`, `Unit` and function types.
pub mod types;
/// The value module defines the runtime values produced by evaluation.
pub mod value;
