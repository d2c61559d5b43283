/// Type checker state and dispatch.
///
/// Contains the `TypeChecker`, whose root scope binds the signatures of the
/// built-ins, and the dispatch over expression kinds.
pub mod core;

/// Per-node typing rules.
///
/// Every child is checked, including branches and loop bodies that would
/// never run.
pub mod utils;
