use pretty_assertions::assert_eq;

use crate::ast::{
    AccessorDeclaration, AstNode, Block, CompilationUnit, ConstructorDeclaration,
    HasBlockOrArrowBody, HasModifiers, LambdaExpression, LocalDeclarationStatement,
    MethodDeclaration, PropertyDeclaration,
};
use crate::fixture::*;
use crate::SyntaxKind;

#[test]
fn method_accessors() {
    let root = class(
        "C",
        [method(
            &[SyntaxKind::PublicKw, SyntaxKind::AsyncKw],
            "Run",
            &["a", "b"],
            MemberBody::Block(block([expr_stmt(name("x"))])),
        )],
    )
    .build();

    let method = MethodDeclaration::cast(first(&root, SyntaxKind::MethodDeclaration)).unwrap();
    assert_eq!(method.name_token().unwrap().text(), "Run");
    assert!(method.has_modifier(SyntaxKind::AsyncKw));
    assert!(!method.has_modifier(SyntaxKind::StaticKw));

    let params: Vec<_> = method
        .parameter_list()
        .unwrap()
        .parameters()
        .map(|p| p.name_token().unwrap().text().to_string())
        .collect();
    assert_eq!(params, vec!["a", "b"]);

    assert!(method.body().is_some());
    assert!(method.expression_body().is_none());
    assert_eq!(method.body().unwrap().statements().count(), 1);
}

#[test]
fn modifier_keywords_skip_trivia() {
    let root = method(
        &[SyntaxKind::PrivateKw, SyntaxKind::StaticKw],
        "M",
        &[],
        MemberBody::None,
    )
    .build();
    let method = MethodDeclaration::cast(root).unwrap();
    let keywords: Vec<_> = method
        .modifiers()
        .unwrap()
        .keywords()
        .map(|tok| tok.kind())
        .collect();
    assert_eq!(keywords, vec![SyntaxKind::PrivateKw, SyntaxKind::StaticKw]);
}

#[test]
fn expression_bodied_constructor() {
    let root = constructor(&[], "C", &[], MemberBody::Arrow(call("Init", []))).build();
    let ctor = ConstructorDeclaration::cast(root).unwrap();

    assert!(ctor.body().is_none());
    let arrow = ctor.expression_body().unwrap();
    assert_eq!(
        arrow.expression().unwrap().syntax().kind(),
        SyntaxKind::InvocationExpression
    );
    assert!(ctor.parameter_list().unwrap().is_empty());
}

#[test]
fn property_parts() {
    let root = property(
        &[SyntaxKind::PublicKw],
        "P",
        PropertyBody::Accessors(vec![
            accessor(SyntaxKind::GetAccessorDeclaration, MemberBody::None),
            accessor(
                SyntaxKind::SetAccessorDeclaration,
                MemberBody::Block(block([])),
            ),
        ]),
        Some(int(1)),
    )
    .build();
    let prop = PropertyDeclaration::cast(root).unwrap();

    assert_eq!(prop.name_token().unwrap().text(), "P");
    assert!(prop.expression_body().is_none());
    assert_eq!(
        prop.initializer().unwrap().value().unwrap().syntax().kind(),
        SyntaxKind::LiteralExpression
    );

    let accessors: Vec<AccessorDeclaration> = prop.accessor_list().unwrap().accessors().collect();
    assert_eq!(accessors.len(), 2);
    assert!(accessors[0].is_getter());
    assert!(accessors[0].is_auto_implemented());
    assert_eq!(accessors[1].kind(), SyntaxKind::SetAccessorDeclaration);
    assert!(!accessors[1].is_auto_implemented());
}

#[test]
fn lambda_bodies_and_async_token() {
    let expr_lambda = simple_lambda(&[SyntaxKind::AsyncKw], "x", name("x")).build();
    let lambda = LambdaExpression::cast(expr_lambda).unwrap();
    assert!(lambda.async_token().is_some());
    assert!(lambda.body().is_none());
    assert_eq!(
        lambda.expression_body().unwrap().syntax().kind(),
        SyntaxKind::IdentifierName
    );

    let block_lambda = anonymous_method(&[], block([])).build();
    let lambda = LambdaExpression::cast(block_lambda).unwrap();
    assert!(lambda.async_token().is_none());
    assert!(lambda.body().is_some());
    assert!(lambda.expression_body().is_none());
}

#[test]
fn await_using_declaration_tokens() {
    let root = local_decl(
        &[SyntaxKind::AwaitKw, SyntaxKind::UsingKw],
        [("a", name("x")), ("b", name("y"))],
    )
    .build();
    let stmt = LocalDeclarationStatement::cast(root).unwrap();

    assert!(stmt.await_token().is_some());
    assert!(stmt.using_token().is_some());
    assert_eq!(stmt.declaration().unwrap().declarators().count(), 2);
}

#[test]
fn global_statements_must_lead() {
    let scripted = unit([
        global(expr_stmt(call("Main", []))),
        class("C", []),
    ])
    .build();
    let unit_node = CompilationUnit::cast(scripted).unwrap();
    assert!(unit_node.contains_global_statements());
    assert_eq!(unit_node.global_statements().count(), 1);

    let library = unit([class("C", [])]).build();
    assert!(!CompilationUnit::cast(library)
        .unwrap()
        .contains_global_statements());

    let empty = unit([]).build();
    assert!(!CompilationUnit::cast(empty).unwrap().contains_global_statements());
}

#[test]
fn casts_reject_other_kinds() {
    let root = block([]).build();
    assert!(Block::cast(root.clone()).is_some());
    assert!(MethodDeclaration::cast(root.clone()).is_none());
    assert!(AccessorDeclaration::cast(root).is_none());
}
