use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        builtin::Builtin,
        evaluator::core::{EvalResult, Interpreter},
        lexer::Location,
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Looks up a variable, innermost scope first.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownVariable`] naming the identifier and its
    /// location when no scope binds it.
    pub fn eval_identifier(&self, name: &str, location: Location) -> EvalResult<Value> {
        self.scopes
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           location })
    }

    /// Evaluates a binary operation.
    ///
    /// Assignment is handled here directly. Every other operator evaluates
    /// both operands, left first, and then calls the built-in bound under the
    /// operator's symbol. There is no short-circuiting: `and` and `or` always
    /// evaluate their right operand.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          location: Location)
                          -> EvalResult<Value> {
        if op == BinaryOperator::Assign {
            return self.eval_assignment(left, right);
        }

        let left = self.eval(left)?;
        let right = self.eval(right)?;
        self.apply_operator(op.symbol(), &[left, right], location)
    }

    /// Evaluates `NAME = EXPR`.
    ///
    /// The right side is evaluated and stored in the nearest scope that binds
    /// `NAME`. The left side is never evaluated. Yields unit.
    ///
    /// # Errors
    /// - [`RuntimeError::InvalidAssignmentTarget`] if the left side is not a
    ///   plain name.
    /// - [`RuntimeError::UnknownVariable`] if no scope binds the name.
    ///
    /// # Example
    /// ```
    /// use quill::{interpret, interpreter::value::Value, parse, tokenize};
    ///
    /// let program = parse(&tokenize("var x = 1; { x = x + 1 }; x").unwrap()).unwrap();
    /// assert_eq!(interpret(&program), Ok(Value::Int(2)));
    ///
    /// let program = parse(&tokenize("var x = 1; (x + 1) = 3").unwrap()).unwrap();
    /// assert!(interpret(&program).is_err());
    /// ```
    pub fn eval_assignment(&mut self, target: &Expr, value: &Expr) -> EvalResult<Value> {
        let Expr::Identifier { name, location } = target else {
            return Err(RuntimeError::InvalidAssignmentTarget { location: target.location() });
        };

        let value = self.eval(value)?;
        if self.scopes.assign_nearest(name, value) {
            Ok(Value::Unit)
        } else {
            Err(RuntimeError::UnknownVariable { name:     name.clone(),
                                                location: *location, })
        }
    }

    /// Evaluates a prefix operation through its root-scope binding
    /// (`unary_-` or `not`).
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         expr: &Expr,
                         location: Location)
                         -> EvalResult<Value> {
        let operand = self.eval(expr)?;
        self.apply_operator(op.binding_name(), &[operand], location)
    }

    /// Evaluates a conditional expression.
    ///
    /// Only the selected branch runs. Without an `else`, a false condition
    /// yields unit.
    ///
    /// # Errors
    /// [`RuntimeError::ExpectedBoolean`] at the condition if it does not
    /// evaluate to a boolean.
    pub fn eval_conditional(&mut self,
                            condition: &Expr,
                            then_branch: &Expr,
                            else_branch: Option<&Expr>)
                            -> EvalResult<Value> {
        let holds = self.eval(condition)?.as_bool(condition.location())?;

        if holds {
            self.eval(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)
        } else {
            Ok(Value::Unit)
        }
    }

    /// Evaluates a function call.
    ///
    /// The callee is resolved through the scope chain before any argument is
    /// evaluated. Arguments are then evaluated left to right.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownFunction`] if nothing is bound under `name`.
    /// - [`RuntimeError::NotCallable`] if `name` is bound to a plain value.
    /// - [`RuntimeError::ArgumentCountMismatch`] on a wrong argument count.
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              location: Location)
                              -> EvalResult<Value> {
        let builtin = match self.scopes.get(name) {
            Some(Value::Builtin(builtin)) => *builtin,
            Some(_) => {
                return Err(RuntimeError::NotCallable { name: name.to_string(),
                                                       location });
            },
            None => {
                return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                           location });
            },
        };

        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;
        self.call(builtin, &args, location)
    }

    /// Evaluates a block in a new scope.
    ///
    /// Declarations made by the statements are visible to later statements
    /// and to the result, and are dropped when the block ends. The block
    /// yields its result's value, or unit when it has none.
    ///
    /// # Example
    /// ```
    /// use quill::{interpret, interpreter::value::Value, parse, tokenize};
    ///
    /// let run = |source: &str| interpret(&parse(&tokenize(source).unwrap()).unwrap());
    ///
    /// assert_eq!(run("{ 1; 2 }"), Ok(Value::Int(2)));
    /// assert_eq!(run("{ 1; 2; }"), Ok(Value::Unit));
    /// assert!(run("{ var a = 1; }; a").is_err());
    /// ```
    pub fn eval_block(&mut self, statements: &[Expr], result: Option<&Expr>) -> EvalResult<Value> {
        self.scopes.push();
        let value = self.eval_block_body(statements, result);
        self.scopes.pop();
        value
    }

    fn eval_block_body(&mut self, statements: &[Expr], result: Option<&Expr>) -> EvalResult<Value> {
        for statement in statements {
            self.eval(statement)?;
        }
        match result {
            Some(result) => self.eval(result),
            None => Ok(Value::Unit),
        }
    }

    /// Evaluates the initializer and binds it in the innermost scope. Yields
    /// unit.
    ///
    /// The declared type, if any, plays no part at run time.
    pub fn eval_variable_declaration(&mut self,
                                     name: &str,
                                     initializer: &Expr)
                                     -> EvalResult<Value> {
        let value = self.eval(initializer)?;
        self.scopes.define(name, value);
        Ok(Value::Unit)
    }

    /// Runs the body for as long as the condition is `true`, discarding the
    /// body's values. Yields unit.
    pub fn eval_while(&mut self, condition: &Expr, body: &Expr) -> EvalResult<Value> {
        while self.eval(condition)?.as_bool(condition.location())? {
            self.eval(body)?;
        }
        Ok(Value::Unit)
    }

    fn apply_operator(&mut self,
                      symbol: &str,
                      args: &[Value],
                      location: Location)
                      -> EvalResult<Value> {
        let Some(Value::Builtin(builtin)) = self.scopes.get(symbol) else {
            return Err(RuntimeError::UnsupportedOperator { op: symbol.to_string(),
                                                           location });
        };
        let builtin = *builtin;
        self.call(builtin, args, location)
    }

    fn call(&mut self, builtin: Builtin, args: &[Value], location: Location) -> EvalResult<Value> {
        builtin.call(args, location, self.out())
    }
}
