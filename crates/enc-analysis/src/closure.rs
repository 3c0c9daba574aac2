//! Independent closures: lambdas, anonymous methods and local functions.
//!
//! Each closure is compiled to its own state machine, so walks over an enclosing body must
//! not descend into one.

use enc_syntax::{
    AstNode, HasBlockOrArrowBody, LambdaExpression, LocalFunctionStatement, SyntaxKind,
    SyntaxNode,
};

pub fn is_closure(node: &SyntaxNode) -> bool {
    let kind = node.kind();
    kind.is_lambda_expression() || kind == SyntaxKind::LocalFunctionStatement
}

/// Pruning predicate for walks that must stay within one state machine.
pub fn is_not_closure(node: &SyntaxNode) -> bool {
    !is_closure(node)
}

/// The body of a closure node: its block, or its expression for `=>` forms.
pub fn closure_body(node: &SyntaxNode) -> Option<SyntaxNode> {
    if let Some(lambda) = LambdaExpression::cast(node.clone()) {
        return lambda
            .body()
            .map(|block| block.syntax().clone())
            .or_else(|| lambda.expression_body().map(|expr| expr.syntax().clone()));
    }

    let function = LocalFunctionStatement::cast(node.clone())?;
    function
        .body()
        .map(|block| block.syntax().clone())
        .or_else(|| {
            function
                .expression_body()
                .and_then(|arrow| arrow.expression())
                .map(|expr| expr.syntax().clone())
        })
}

/// Whether `node` is the body of the closure that immediately owns it.
pub fn is_closure_body(node: &SyntaxNode) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    // Local functions with `=>` bodies hold the expression one level down.
    let owner = if parent.kind() == SyntaxKind::ArrowExpressionClause {
        match parent.parent() {
            Some(owner) if owner.kind() == SyntaxKind::LocalFunctionStatement => owner,
            _ => return false,
        }
    } else {
        parent
    };

    is_closure(&owner) && closure_body(&owner).as_ref() == Some(node)
}

#[cfg(test)]
mod tests {
    use enc_syntax::fixture::*;
    use enc_syntax::SyntaxKind;

    use super::*;

    #[test]
    fn lambdas_and_local_functions_are_closures() {
        let root = block([
            expr_stmt(lambda(&[], name("x"))),
            expr_stmt(simple_lambda(&[], "p", name("p"))),
            expr_stmt(anonymous_method(&[], block([]))),
            local_function(&[], "Local", MemberBody::Block(block([]))),
        ])
        .build();

        assert!(is_closure(&first(&root, SyntaxKind::ParenthesizedLambdaExpression)));
        assert!(is_closure(&first(&root, SyntaxKind::SimpleLambdaExpression)));
        assert!(is_closure(&first(&root, SyntaxKind::AnonymousMethodExpression)));
        assert!(is_closure(&first(&root, SyntaxKind::LocalFunctionStatement)));
        assert!(!is_closure(&root));
        assert!(is_not_closure(&first(&root, SyntaxKind::ExpressionStatement)));
    }

    #[test]
    fn closure_bodies() {
        let root = block([
            expr_stmt(lambda(&[], name("x"))),
            local_function(&[], "Local", MemberBody::Arrow(name("y"))),
            expr_stmt(anonymous_method(&[], block([expr_stmt(name("z"))]))),
        ])
        .build();

        let lambda_node = first(&root, SyntaxKind::ParenthesizedLambdaExpression);
        let lambda_body = closure_body(&lambda_node).unwrap();
        assert_eq!(lambda_body.kind(), SyntaxKind::IdentifierName);
        assert!(is_closure_body(&lambda_body));

        let local = first(&root, SyntaxKind::LocalFunctionStatement);
        let local_body = closure_body(&local).unwrap();
        assert_eq!(local_body.parent().unwrap().kind(), SyntaxKind::ArrowExpressionClause);
        assert!(is_closure_body(&local_body));

        let anon = first(&root, SyntaxKind::AnonymousMethodExpression);
        let anon_body = closure_body(&anon).unwrap();
        assert_eq!(anon_body.kind(), SyntaxKind::Block);
        assert!(is_closure_body(&anon_body));

        // The enclosing block and nested statements are not closure bodies.
        assert!(!is_closure_body(&root));
        assert!(!is_closure_body(&first(&anon_body, SyntaxKind::ExpressionStatement)));
        assert_eq!(closure_body(&root), None);
    }

    #[test]
    fn method_arrow_body_is_not_a_closure_body() {
        let root = method(&[], "M", &[], MemberBody::Arrow(name("x"))).build();
        let expr = first(&root, SyntaxKind::IdentifierName);
        assert!(!is_closure_body(&expr));
    }
}
