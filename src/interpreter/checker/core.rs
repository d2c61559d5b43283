use crate::{
    ast::{Expr, LiteralValue},
    error::TypeError,
    interpreter::{builtin::BUILTINS, scope::ScopeStack, types::Type},
};

/// Result type used by the type checker.
pub type CheckResult<T> = Result<T, TypeError>;

/// Stores the state of one type-checking pass.
///
/// The root scope binds the function type of every built-in with a fixed
/// signature. `==` and `!=` accept any pair of equal types and are checked
/// by a dedicated rule instead.
#[derive(Debug, Clone)]
pub struct TypeChecker {
    /// Lexical scopes mapping names to their static types.
    pub scopes: ScopeStack<Type>,
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeChecker {
    /// Creates a checker with a freshly seeded root scope.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{
    ///     checker::core::TypeChecker,
    ///     types::{BasicType, Type},
    /// };
    ///
    /// let checker = TypeChecker::new();
    /// assert_eq!(checker.scopes.get("<"),
    ///            Some(&Type::function(&[BasicType::Int, BasicType::Int], BasicType::Bool)));
    /// assert_eq!(checker.scopes.get("=="), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let root = BUILTINS.iter()
                           .filter_map(|builtin| {
                               builtin.signature
                                      .function_type()
                                      .map(|ty| (builtin.name.to_string(), ty))
                           })
                           .collect();
        Self { scopes: ScopeStack::new(root) }
    }

    /// Computes the type of an expression.
    ///
    /// Every subexpression is checked, whether or not its value would be
    /// used, so errors in dead branches are still reported. Declarations
    /// bind into the current scope as a side effect.
    ///
    /// # Errors
    /// Stops at the first [`TypeError`].
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     interpreter::{checker::core::TypeChecker, types::Type},
    ///     parse, tokenize,
    /// };
    ///
    /// let program = parse(&tokenize("var x = 5; x < 3").unwrap()).unwrap();
    /// assert_eq!(TypeChecker::new().check(&program), Ok(Type::BOOL));
    ///
    /// let dead = parse(&tokenize("if false then 1 + true else 2").unwrap()).unwrap();
    /// assert!(TypeChecker::new().check(&dead).is_err());
    /// ```
    pub fn check(&mut self, expr: &Expr) -> CheckResult<Type> {
        match expr {
            Expr::Literal { value, .. } => Ok(match value {
                LiteralValue::Integer(_) => Type::INT,
                LiteralValue::Bool(_) => Type::BOOL,
                LiteralValue::Unit => Type::UNIT,
            }),
            Expr::Identifier { name, location } => self.check_identifier(name, *location),
            Expr::BinaryOp { left,
                             op,
                             right,
                             location, } => self.check_binary_op(left, *op, right, *location),
            Expr::UnaryOp { op, expr, location } => self.check_unary_op(*op, expr, *location),
            Expr::Conditional { condition,
                                then_branch,
                                else_branch,
                                location, } => self.check_conditional(condition,
                                                                      then_branch,
                                                                      else_branch.as_deref(),
                                                                      *location),
            Expr::FunctionCall { name,
                                 arguments,
                                 location, } => {
                self.check_function_call(name, arguments, *location)
            },
            Expr::Block { statements, result, .. } => {
                self.check_block(statements, result.as_deref())
            },
            Expr::VariableDeclaration { name,
                                        initializer,
                                        type_annotation,
                                        location, } => {
                self.check_variable_declaration(name,
                                                initializer,
                                                type_annotation.as_ref(),
                                                *location)
            },
            Expr::While { condition, body, .. } => self.check_while(condition, body),
        }
    }
}
