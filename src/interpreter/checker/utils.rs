use crate::{
    ast::{BinaryOperator, Expr, TypeAnnotation, UnaryOperator},
    error::TypeError,
    interpreter::{
        checker::core::{CheckResult, TypeChecker},
        lexer::Location,
        types::{BasicType, FunctionType, Type},
    },
};

impl TypeChecker {
    /// Looks up a name's type, innermost scope first.
    pub fn check_identifier(&self, name: &str, location: Location) -> CheckResult<Type> {
        self.scopes
            .get(name)
            .cloned()
            .ok_or_else(|| TypeError::UnknownIdentifier { name: name.to_string(),
                                                          location })
    }

    /// Types a binary operation.
    ///
    /// `=`, `==` and `!=` accept any two operands of equal type; `=` yields
    /// `Unit` and the comparisons yield `Bool`. Every other operator must
    /// match its built-in signature exactly, in order.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     interpreter::{checker::core::TypeChecker, types::Type},
    ///     parse, tokenize,
    /// };
    ///
    /// let check = |source: &str| TypeChecker::new().check(&parse(&tokenize(source).unwrap()).unwrap());
    ///
    /// assert_eq!(check("true == false"), Ok(Type::BOOL));
    /// assert_eq!(check("var b = true; b = 1 < 2"), Ok(Type::UNIT));
    /// assert!(check("1 == true").is_err());
    /// assert!(check("true + 1").is_err());
    /// ```
    pub fn check_binary_op(&mut self,
                           left: &Expr,
                           op: BinaryOperator,
                           right: &Expr,
                           location: Location)
                           -> CheckResult<Type> {
        let left = self.check(left)?;
        let right = self.check(right)?;

        match op {
            BinaryOperator::Assign | BinaryOperator::Equal | BinaryOperator::NotEqual => {
                if left != right {
                    return Err(TypeError::OperandMismatch { op: op.symbol().to_string(),
                                                            left,
                                                            right,
                                                            location });
                }
                if op == BinaryOperator::Assign {
                    Ok(Type::UNIT)
                } else {
                    Ok(Type::BOOL)
                }
            },
            _ => self.apply_signature(op.symbol(), vec![left, right], location),
        }
    }

    /// Types a prefix operation against its root-scope signature:
    /// `(Int) => Int` for `-` and `(Bool) => Bool` for `not`.
    pub fn check_unary_op(&mut self,
                          op: UnaryOperator,
                          expr: &Expr,
                          location: Location)
                          -> CheckResult<Type> {
        let operand = self.check(expr)?;
        self.apply_signature(op.binding_name(), vec![operand], location)
    }

    /// Types a conditional.
    ///
    /// The condition must be `Bool`. With an `else`, both branches must have
    /// the same type, which is the result. Without one, the `then` branch
    /// must be `Unit`.
    pub fn check_conditional(&mut self,
                             condition: &Expr,
                             then_branch: &Expr,
                             else_branch: Option<&Expr>,
                             location: Location)
                             -> CheckResult<Type> {
        self.expect_condition("if", condition)?;
        let then_type = self.check(then_branch)?;
        let else_type = match else_branch {
            Some(else_branch) => self.check(else_branch)?,
            None => Type::UNIT,
        };

        if then_type != else_type {
            return Err(TypeError::BranchMismatch { then_type,
                                                   else_type,
                                                   location });
        }
        Ok(then_type)
    }

    /// Types a function call.
    ///
    /// Arguments are checked first. The callee must then resolve to a
    /// function type whose parameters match the argument types exactly.
    ///
    /// # Errors
    /// - [`TypeError::UnknownFunction`] if nothing is bound under `name`.
    /// - [`TypeError::NotCallable`] if `name` is bound to a non-function.
    /// - [`TypeError::ArgumentMismatch`] if the argument types differ.
    pub fn check_function_call(&mut self,
                               name: &str,
                               arguments: &[Expr],
                               location: Location)
                               -> CheckResult<Type> {
        let found = arguments.iter()
                             .map(|argument| self.check(argument))
                             .collect::<CheckResult<Vec<_>>>()?;

        match self.scopes.get(name) {
            Some(Type::Function(signature)) => Self::match_signature(name, signature, found, location),
            Some(other) => Err(TypeError::NotCallable { name: name.to_string(),
                                                        found: other.clone(),
                                                        location }),
            None => Err(TypeError::UnknownFunction { name: name.to_string(),
                                                     location }),
        }
    }

    /// Types a block in a new scope: `Unit` without a result, otherwise the
    /// result's type.
    pub fn check_block(&mut self, statements: &[Expr], result: Option<&Expr>) -> CheckResult<Type> {
        self.scopes.push();
        let ty = self.check_block_body(statements, result);
        self.scopes.pop();
        ty
    }

    fn check_block_body(&mut self, statements: &[Expr], result: Option<&Expr>) -> CheckResult<Type> {
        for statement in statements {
            self.check(statement)?;
        }
        result.map_or(Ok(Type::UNIT), |result| self.check(result))
    }

    /// Types a declaration and binds the name in the current scope.
    ///
    /// # Errors
    /// - [`TypeError::UnknownType`] if the annotation names no type.
    /// - [`TypeError::DeclaredTypeMismatch`] if the annotation disagrees with
    ///   the initializer.
    ///
    /// # Example
    /// ```
    /// use quill::{error::TypeError, interpreter::checker::core::TypeChecker, parse, tokenize};
    ///
    /// let program = parse(&tokenize("var x: Int = true").unwrap()).unwrap();
    /// assert!(matches!(TypeChecker::new().check(&program),
    ///                  Err(TypeError::DeclaredTypeMismatch { .. })));
    /// ```
    pub fn check_variable_declaration(&mut self,
                                      name: &str,
                                      initializer: &Expr,
                                      annotation: Option<&TypeAnnotation>,
                                      location: Location)
                                      -> CheckResult<Type> {
        let found = self.check(initializer)?;

        if let Some(annotation) = annotation {
            let Some(declared) = BasicType::from_name(&annotation.name) else {
                return Err(TypeError::UnknownType { name:     annotation.name.clone(),
                                                    location: annotation.location, });
            };
            let declared = Type::from(declared);
            if declared != found {
                return Err(TypeError::DeclaredTypeMismatch { name: name.to_string(),
                                                             declared,
                                                             found,
                                                             location });
            }
        }

        self.scopes.define(name, found);
        Ok(Type::UNIT)
    }

    /// Types a loop: the condition must be `Bool`, the body is checked and
    /// its type discarded. Always `Unit`.
    pub fn check_while(&mut self, condition: &Expr, body: &Expr) -> CheckResult<Type> {
        self.expect_condition("while", condition)?;
        self.check(body)?;
        Ok(Type::UNIT)
    }

    fn expect_condition(&mut self, construct: &'static str, condition: &Expr) -> CheckResult<()> {
        let found = self.check(condition)?;
        if found != Type::BOOL {
            return Err(TypeError::ConditionNotBool { construct,
                                                     found,
                                                     location: condition.location() });
        }
        Ok(())
    }

    fn apply_signature(&self,
                       symbol: &str,
                       found: Vec<Type>,
                       location: Location)
                       -> CheckResult<Type> {
        match self.scopes.get(symbol) {
            Some(Type::Function(signature)) => {
                Self::match_signature(symbol, signature, found, location)
            },
            _ => Err(TypeError::UnsupportedOperator { op: symbol.to_string(),
                                                      location }),
        }
    }

    fn match_signature(name: &str,
                       signature: &FunctionType,
                       found: Vec<Type>,
                       location: Location)
                       -> CheckResult<Type> {
        if signature.params == found {
            Ok((*signature.result).clone())
        } else {
            Err(TypeError::ArgumentMismatch { name: name.to_string(),
                                              expected: signature.params.clone(),
                                              found,
                                              location })
        }
    }
}
