use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{builtin::BUILTINS, scope::ScopeStack, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of one interpretation pass.
///
/// Holds the scope stack, whose root frame binds every built-in operator and
/// function, and the sink that `print_int` and `print_bool` write to.
///
/// ## Usage
///
/// Create one `Interpreter` per program run. State does not leak between
/// interpreters: each starts from a freshly seeded root scope.
pub struct Interpreter<'w> {
    /// Lexical scopes, innermost last.
    pub scopes: ScopeStack<Value>,
    out:        &'w mut dyn Write,
}

impl<'w> Interpreter<'w> {
    /// Creates an interpreter writing program output to `out`.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{evaluator::core::Interpreter, value::Value};
    ///
    /// let mut out = Vec::new();
    /// let interpreter = Interpreter::new(&mut out);
    ///
    /// assert!(matches!(interpreter.scopes.get("+"), Some(Value::Builtin(_))));
    /// assert_eq!(interpreter.scopes.depth(), 1);
    /// ```
    pub fn new(out: &'w mut dyn Write) -> Self {
        let root = BUILTINS.iter()
                           .map(|builtin| (builtin.name.to_string(), Value::Builtin(*builtin)))
                           .collect();
        Self { scopes: ScopeStack::new(root),
               out }
    }

    /// Evaluates an expression and returns its value.
    ///
    /// This is the main entry point for evaluation. Children are evaluated
    /// left to right, and every operand of a binary operator is evaluated
    /// before the operator runs.
    ///
    /// # Errors
    /// Stops at the first [`RuntimeError`]: an unbound name, a failed call, a
    /// non-boolean condition, or an arithmetic fault.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    ///     parse, tokenize,
    /// };
    ///
    /// let program = parse(&tokenize("var x = 2; print_int(x * 21); x").unwrap()).unwrap();
    /// let mut out = Vec::new();
    /// let value = Interpreter::new(&mut out).eval(&program).unwrap();
    ///
    /// assert_eq!(value, Value::Int(2));
    /// assert_eq!(out, b"42\n");
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(*value)),
            Expr::Identifier { name, location } => self.eval_identifier(name, *location),
            Expr::BinaryOp { left,
                             op,
                             right,
                             location, } => self.eval_binary_op(left, *op, right, *location),
            Expr::UnaryOp { op, expr, location } => self.eval_unary_op(*op, expr, *location),
            Expr::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                self.eval_conditional(condition, then_branch, else_branch.as_deref())
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 location, } => {
                self.eval_function_call(name, arguments, *location)
            },
            Expr::Block { statements, result, .. } => {
                self.eval_block(statements, result.as_deref())
            },
            Expr::VariableDeclaration { name, initializer, .. } => {
                self.eval_variable_declaration(name, initializer)
            },
            Expr::While { condition, body, .. } => self.eval_while(condition, body),
        }
    }

    /// Gives built-ins access to the output sink.
    pub(super) fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }
}
