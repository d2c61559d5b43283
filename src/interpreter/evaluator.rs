/// Core evaluation logic and runtime state.
///
/// Contains the `Interpreter`, its seeded scope stack and the dispatch over
/// expression kinds.
pub mod core;

/// Per-node evaluation.
///
/// Implements the rules for identifiers, operators, assignment, calls,
/// conditionals, blocks, declarations and loops.
pub mod utils;
