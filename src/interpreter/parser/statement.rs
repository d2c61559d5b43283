use crate::{
    ast::{Expr, TypeAnnotation},
    interpreter::parser::{
        core::{ParseResult, TokenCursor, parse_expression},
        utils::{expect, parse_identifier},
    },
};

/// Parses a variable declaration.
///
/// Grammar: `declaration := "var" IDENT (":" IDENT)? "=" expression`
///
/// The annotation is kept as written; the type checker decides whether it
/// names a type. Declarations are only reached from statement position, that
/// is directly inside a block or at the top level.
///
/// # Example
/// ```
/// use quill::{ast::Expr, parse, tokenize};
///
/// let expr = parse(&tokenize("var x: Int = 1 + 2").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "(var x: Int = (1 + 2))");
///
/// let Expr::VariableDeclaration { type_annotation, .. } = expr else {
///     panic!("expected a declaration");
/// };
/// assert_eq!(type_annotation.unwrap().name, "Int");
/// ```
pub fn parse_variable_declaration(tokens: &mut TokenCursor) -> ParseResult<Expr> {
    let location = expect(tokens, "var")?.location;
    let (name, _) = parse_identifier(tokens)?;

    let type_annotation = if tokens.peek().is(":") {
        tokens.advance();
        let (name, location) = parse_identifier(tokens)?;
        Some(TypeAnnotation { name, location })
    } else {
        None
    };

    expect(tokens, "=")?;
    let initializer = parse_expression(tokens)?;

    Ok(Expr::VariableDeclaration { name,
                                   initializer: Box::new(initializer),
                                   type_annotation,
                                   location })
}
