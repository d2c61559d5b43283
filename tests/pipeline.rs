use quill::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::{ParseError, RuntimeError, TypeError},
    interpret, interpret_with_output,
    interpreter::{
        lexer::{Location, TokenKind},
        types::Type,
        value::Value,
    },
    parse, tokenize, typecheck,
};

fn parse_source(source: &str) -> Expr {
    parse(&tokenize(source).expect("lexing failed")).expect("parsing failed")
}

fn parse_error(source: &str) -> ParseError {
    parse(&tokenize(source).expect("lexing failed")).expect_err("parsing succeeded")
}

fn literal(n: i64, line: usize, column: usize) -> Expr {
    Expr::Literal { value:    LiteralValue::Integer(n),
                    location: Location::new(line, column), }
}

#[test]
fn integer_literals_keep_their_text() {
    for n in [0_i64, 7, 42, 1_000, 9_223_372_036_854_775_807] {
        let tokens = tokenize(&n.to_string()).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[0].text, n.to_string());
    }
}

#[test]
fn lexer_tracks_lines_and_columns() {
    let tokens = tokenize("var x = 1;\n  # comment\n  x <= 10").unwrap();
    let located: Vec<(&str, usize, usize)> =
        tokens.iter()
              .map(|t| (t.text.as_str(), t.location.line, t.location.column))
              .collect();

    assert_eq!(located,
               [("var", 1, 1),
                ("x", 1, 5),
                ("=", 1, 7),
                ("1", 1, 9),
                (";", 1, 10),
                ("x", 3, 3),
                ("<=", 3, 5),
                ("10", 3, 8)]);
}

#[test]
fn lexer_prefers_longest_match() {
    let tokens = tokenize("a==b android not_x or1 != <").unwrap();
    let kinds: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();

    assert_eq!(kinds,
               [(TokenKind::Identifier, "a"),
                (TokenKind::Operator, "=="),
                (TokenKind::Identifier, "b"),
                (TokenKind::Identifier, "android"),
                (TokenKind::Identifier, "not_x"),
                (TokenKind::Identifier, "or1"),
                (TokenKind::Operator, "!="),
                (TokenKind::Operator, "<")]);
}

#[test]
fn lexer_rejects_stray_characters() {
    let error = tokenize("1 +\n  @").unwrap_err();
    assert_eq!(error.location(), Location::new(2, 3));
    assert!(error.to_string().contains("'@'"));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expected =
        Expr::BinaryOp { left:     Box::new(literal(1, 1, 1)),
                         op:       BinaryOperator::Add,
                         right:    Box::new(Expr::BinaryOp { left:     Box::new(literal(2, 1, 5)),
                                                             op:       BinaryOperator::Mul,
                                                             right:    Box::new(literal(3, 1, 9)),
                                                             location: Location::new(1, 7), }),
                         location: Location::new(1, 3), };

    assert_eq!(parse_source("1 + 2 * 3"), expected);
}

#[test]
fn subtraction_associates_left() {
    let expected =
        Expr::BinaryOp { left:     Box::new(Expr::BinaryOp { left:     Box::new(literal(1, 1, 1)),
                                                             op:       BinaryOperator::Sub,
                                                             right:    Box::new(literal(2, 1, 5)),
                                                             location: Location::new(1, 3), }),
                         op:       BinaryOperator::Sub,
                         right:    Box::new(literal(3, 1, 9)),
                         location: Location::new(1, 7), };

    assert_eq!(parse_source("1 - 2 - 3"), expected);
}

#[test]
fn precedence_ladder() {
    let cases = [("a = b = c", "(a = (b = c))"),
                 ("a or b and c", "(a or (b and c))"),
                 ("a and b == c", "(a and (b == c))"),
                 ("a == b < c", "(a == (b < c))"),
                 ("a < b + c", "(a < (b + c))"),
                 ("a + b % c", "(a + (b % c))"),
                 ("-a * b", "((- a) * b)"),
                 ("not not a", "(not (not a))"),
                 ("(a + b) * c", "((a + b) * c)"),
                 ("f(a, b + 1)", "f(a, (b + 1))")];

    for (source, shape) in cases {
        assert_eq!(parse_source(source).to_string(), shape, "for {source:?}");
    }
}

#[test]
fn block_shapes() {
    let cases = [("{ a; }", "{ a; }"),
                 ("{ a }", "{ a }"),
                 ("{}", "{ }"),
                 ("{ { a } { b } }", "{ { a }; { b } }"),
                 ("{ var x = 1; x }", "{ (var x = 1); x }"),
                 ("a; b", "{ a; b }"),
                 ("a; b;", "{ a; b; }"),
                 ("if a then b else if c then d", "(if a then b else (if c then d))"),
                 ("while a do { b; }", "(while a do { b; })")];

    for (source, shape) in cases {
        assert_eq!(parse_source(source).to_string(), shape, "for {source:?}");
    }
}

#[test]
fn node_locations() {
    let program = parse_source("{\n  if x then y\n}");
    let Expr::Block { result: Some(result), location, .. } = &program else {
        panic!("expected a block with a result, got {program}");
    };
    assert_eq!(*location, Location::new(1, 1));
    assert_eq!(result.location(), Location::new(2, 3));

    let sequence = parse_source("x; y");
    assert_eq!(sequence.location(), Location::new(1, 1));
}

#[test]
fn parse_errors() {
    assert_eq!(parse(&[]), Err(ParseError::EmptyInput));

    assert!(matches!(parse_error("1 2"),
                     ParseError::UnexpectedTrailingTokens { location, .. }
                     if location == Location::new(1, 3)));
    assert!(matches!(parse_error("{ 1 2 }"), ParseError::Expected { expected, .. } if expected == ";"));
    assert!(matches!(parse_error("(1"), ParseError::Expected { expected, .. } if expected == ")"));
    assert!(matches!(parse_error("if a b"), ParseError::Expected { expected, .. } if expected == "then"));
    assert!(matches!(parse_error("1 + var x = 2"),
                     ParseError::DeclarationOutsideBlock { .. }));
    assert!(matches!(parse_error("(var x = 2)"), ParseError::DeclarationOutsideBlock { .. }));
    assert!(matches!(parse_error("var while = 1"),
                     ParseError::IdentifierReserved { name, .. } if name == "while"));
    assert!(matches!(parse_error("1 + then"),
                     ParseError::IdentifierReserved { name, .. } if name == "then"));
    assert!(matches!(parse_error("f()"), ParseError::ExpectedExpression { .. }));
    assert!(matches!(parse_error("99999999999999999999"), ParseError::LiteralTooLarge { .. }));
}

#[test]
fn missing_operand_points_at_end_of_input() {
    let error = parse_error("1 +");
    assert_eq!(error.location(), Some(Location::new(1, 3)));
    assert!(error.to_string().contains("end of input"));
}

#[test]
fn declarations_are_scoped() {
    let program = parse_source("var x = 5; x");
    assert_eq!(typecheck(&program), Ok(Type::INT));
    assert_eq!(interpret(&program), Ok(Value::Int(5)));

    let program = parse_source("var x = 5; y");
    assert!(matches!(typecheck(&program),
                     Err(TypeError::UnknownIdentifier { name, .. }) if name == "y"));
    assert!(matches!(interpret(&program),
                     Err(RuntimeError::UnknownVariable { name, .. }) if name == "y"));
}

#[test]
fn annotation_must_match_initializer() {
    let program = parse_source("var x: Int = true");
    assert!(matches!(typecheck(&program),
                     Err(TypeError::DeclaredTypeMismatch { declared, found, .. })
                     if declared == Type::INT && found == Type::BOOL));

    let program = parse_source("var x: Integer = 1");
    assert!(matches!(typecheck(&program),
                     Err(TypeError::UnknownType { name, location })
                     if name == "Integer" && location == Location::new(1, 8)));
}

#[test]
fn typecheck_is_repeatable() {
    let program = parse_source("var a = 1; { var a = true; a }; a + 1");
    let first = typecheck(&program);
    assert_eq!(first, Ok(Type::INT));
    assert_eq!(typecheck(&program), first);
}

#[test]
fn checker_rules() {
    let check = |source: &str| typecheck(&parse_source(source));

    assert_eq!(check("1 < 2 and not false"), Ok(Type::BOOL));
    assert_eq!(check("{ }"), Ok(Type::UNIT));
    assert_eq!(check("{ 1; }"), Ok(Type::UNIT));
    assert_eq!(check("while false do 1"), Ok(Type::UNIT));
    assert_eq!(check("if true then { }"), Ok(Type::UNIT));
    assert_eq!(check("print_int(1)"), Ok(Type::UNIT));
    assert_eq!(check("var b = true; b = false"), Ok(Type::UNIT));

    assert!(matches!(check("if true then 1"), Err(TypeError::BranchMismatch { .. })));
    assert!(matches!(check("if 1 then 2 else 3"),
                     Err(TypeError::ConditionNotBool { construct: "if", .. })));
    assert!(matches!(check("while 0 do { }"),
                     Err(TypeError::ConditionNotBool { construct: "while", .. })));
    assert!(matches!(check("1 = 2 == true"), Err(TypeError::OperandMismatch { .. })));
    assert!(matches!(check("true - 1"), Err(TypeError::ArgumentMismatch { .. })));
    assert!(matches!(check("nothing(1)"), Err(TypeError::UnknownFunction { .. })));
    assert!(matches!(check("var n = 1; n(1)"),
                     Err(TypeError::NotCallable { found, .. }) if found == Type::INT));
    assert!(matches!(check("print_bool(1)"),
                     Err(TypeError::ArgumentMismatch { expected, found, .. })
                     if expected == [Type::BOOL] && found == [Type::INT]));
    assert!(matches!(check("while false do 1 + false"), Err(TypeError::ArgumentMismatch { .. })));
}

#[test]
fn one_plus_two_end_to_end() {
    let tokens = tokenize("1 + 2").unwrap();
    let summary: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(summary,
               [(TokenKind::IntLiteral, "1"),
                (TokenKind::Operator, "+"),
                (TokenKind::IntLiteral, "2")]);

    let program = parse(&tokens).unwrap();
    assert_eq!(program,
               Expr::BinaryOp { left:     Box::new(literal(1, 1, 1)),
                                op:       BinaryOperator::Add,
                                right:    Box::new(literal(2, 1, 5)),
                                location: Location::new(1, 3), });
    assert_eq!(typecheck(&program), Ok(Type::INT));
    assert_eq!(interpret(&program), Ok(Value::Int(3)));
}

#[test]
fn if_else_end_to_end() {
    let program = parse_source("if true then 1 else 2");
    assert_eq!(typecheck(&program), Ok(Type::INT));
    assert_eq!(interpret(&program), Ok(Value::Int(1)));
}

#[test]
fn while_with_unbound_condition_fails_at_the_name() {
    let program = parse_source("while x do x");
    assert_eq!(interpret(&program),
               Err(RuntimeError::UnknownVariable { name:     "x".to_string(),
                                                   location: Location::new(1, 7), }));
}

#[test]
fn operands_are_all_evaluated() {
    let program = parse_source("var n = 0; false and { n = n + 1; true }; n");
    assert_eq!(interpret(&program), Ok(Value::Int(1)));
}

#[test]
fn output_goes_to_the_given_sink() {
    let program = parse_source("var i = 0; while i < 3 do { print_int(i); i = i + 1; }; \
                                print_bool(i == 3)");
    let mut out = Vec::new();

    assert_eq!(interpret_with_output(&program, &mut out), Ok(Value::Unit));
    assert_eq!(String::from_utf8(out).unwrap(), "0\n1\n2\ntrue\n");
}

#[test]
fn runtime_errors_without_checking() {
    let run = |source: &str| interpret_with_output(&parse_source(source), &mut Vec::<u8>::new());

    assert!(matches!(run("1 / 0"), Err(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(run("0 - 9223372036854775807 - 2"), Err(RuntimeError::Overflow { .. })));
    assert!(matches!(run("if 1 then 2"), Err(RuntimeError::ExpectedBoolean { location })
                     if location == Location::new(1, 4)));
    assert!(matches!(run("1 + true"), Err(RuntimeError::TypeError { .. })));
    assert!(matches!(run("(1) = 2"), Err(RuntimeError::InvalidAssignmentTarget { .. })));
    assert!(matches!(run("z = 2"), Err(RuntimeError::UnknownVariable { .. })));
    assert!(matches!(run("nothing(1)"), Err(RuntimeError::UnknownFunction { .. })));
    assert!(matches!(run("var n = 1; n(1)"), Err(RuntimeError::NotCallable { .. })));
    assert!(matches!(run("print_int(1, 2)"),
                     Err(RuntimeError::ArgumentCountMismatch { expected: 1, found: 2, .. })));
    assert_eq!(run("1 == 1"), Ok(Value::Bool(true)));
}
