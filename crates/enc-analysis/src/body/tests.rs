use enc_syntax::fixture::*;
use enc_syntax::{AstNode, CompilationUnit, SyntaxKind, SyntaxNode};
use pretty_assertions::assert_eq;

use super::*;

fn decl(root: &SyntaxNode, kind: SyntaxKind) -> Declaration {
    Declaration::cast(first(root, kind)).unwrap()
}

fn body_text(decl: &Declaration) -> Option<String> {
    declaration_body(decl).map(|body| body.syntax().text().to_string())
}

fn body_block() -> MemberBody {
    MemberBody::Block(block([expr_stmt(name("work"))]))
}

#[test]
fn block_bodies() {
    let root = class(
        "C",
        [
            method(&[], "M", &[], body_block()),
            constructor(&[], "C", &[], body_block()),
            destructor("C", body_block()),
            operator(body_block()),
            conversion_operator(body_block()),
        ],
    )
    .build();

    for kind in [
        SyntaxKind::MethodDeclaration,
        SyntaxKind::ConstructorDeclaration,
        SyntaxKind::DestructorDeclaration,
        SyntaxKind::OperatorDeclaration,
        SyntaxKind::ConversionOperatorDeclaration,
    ] {
        let decl = decl(&root, kind);
        let body = declaration_body(&decl).unwrap_or_else(|| panic!("{kind:?} has no body"));
        assert!(matches!(body, Body::Block(_)), "{kind:?}");
        assert_eq!(body.syntax().text().to_string(), "{work;}");
    }
}

#[test]
fn expression_bodies() {
    let root = class(
        "C",
        [
            method(&[], "M", &[], MemberBody::Arrow(name("a"))),
            constructor(&[], "C", &[], MemberBody::Arrow(name("b"))),
            destructor("C", MemberBody::Arrow(name("c"))),
            operator(MemberBody::Arrow(name("d"))),
            conversion_operator(MemberBody::Arrow(name("e"))),
        ],
    )
    .build();

    let expected = [
        (SyntaxKind::MethodDeclaration, "a"),
        (SyntaxKind::ConstructorDeclaration, "b"),
        (SyntaxKind::DestructorDeclaration, "c"),
        (SyntaxKind::OperatorDeclaration, "d"),
        (SyntaxKind::ConversionOperatorDeclaration, "e"),
    ];
    for (kind, text) in expected {
        let decl = decl(&root, kind);
        let body = declaration_body(&decl).unwrap();
        assert!(matches!(body, Body::Expression(_)), "{kind:?}");
        assert_eq!(body.syntax().text().to_string(), text);
        assert_eq!(
            body.syntax().parent().unwrap().kind(),
            SyntaxKind::ArrowExpressionClause
        );
    }
}

#[test]
fn bodiless_members_have_no_body() {
    let root = unit([
        class(
            "C",
            [
                method(&[SyntaxKind::AbstractKw], "A", &[], MemberBody::None),
                method(&[SyntaxKind::StaticKw, SyntaxKind::ExternKw], "E", &[], MemberBody::None),
            ],
        ),
        interface("I", [method(&[], "M", &[], MemberBody::None)]),
    ])
    .build();

    for method in all(&root, SyntaxKind::MethodDeclaration) {
        let decl = Declaration::cast(method).unwrap();
        assert_eq!(declaration_body(&decl), None);
    }
}

#[test]
fn accessors_share_one_rule() {
    let root = class(
        "C",
        [
            property(
                &[],
                "P",
                PropertyBody::Accessors(vec![
                    accessor(SyntaxKind::GetAccessorDeclaration, MemberBody::Arrow(name("g"))),
                    accessor(SyntaxKind::SetAccessorDeclaration, body_block()),
                ]),
                None,
            ),
            property(
                &[],
                "Q",
                PropertyBody::Accessors(vec![accessor(
                    SyntaxKind::InitAccessorDeclaration,
                    MemberBody::Block(block([])),
                )]),
                None,
            ),
            event(
                "Changed",
                vec![
                    accessor(SyntaxKind::AddAccessorDeclaration, MemberBody::Arrow(name("add"))),
                    accessor(SyntaxKind::RemoveAccessorDeclaration, MemberBody::None),
                ],
            ),
        ],
    )
    .build();

    let expected = [
        (SyntaxKind::GetAccessorDeclaration, Some("g")),
        (SyntaxKind::SetAccessorDeclaration, Some("{work;}")),
        (SyntaxKind::InitAccessorDeclaration, Some("{}")),
        (SyntaxKind::AddAccessorDeclaration, Some("add")),
        (SyntaxKind::RemoveAccessorDeclaration, None),
    ];
    for (kind, text) in expected {
        let decl = decl(&root, kind);
        assert!(matches!(decl, Declaration::Accessor(_)));
        assert_eq!(body_text(&decl).as_deref(), text, "{kind:?}");
    }
}

#[test]
fn property_body_is_its_initializer() {
    let with_initializer = property(
        &[],
        "P",
        PropertyBody::Accessors(vec![accessor(
            SyntaxKind::GetAccessorDeclaration,
            MemberBody::None,
        )]),
        Some(int(42)),
    )
    .build();
    let decl = Declaration::cast(with_initializer).unwrap();
    let body = declaration_body(&decl).unwrap();
    assert!(matches!(body, Body::Expression(_)));
    assert_eq!(body.syntax().text().to_string(), "42");
    assert_eq!(
        check_body_shape(body.syntax(), false),
        Ok(BodyShape::PropertyInitializer)
    );

    let without = property(
        &[],
        "P",
        PropertyBody::Accessors(vec![accessor(
            SyntaxKind::GetAccessorDeclaration,
            body_block(),
        )]),
        None,
    )
    .build();
    assert_eq!(declaration_body(&Declaration::cast(without).unwrap()), None);
}

#[test]
fn arrow_clause_body_belongs_to_property_or_indexer() {
    let root = class(
        "C",
        [
            property(&[], "P", PropertyBody::Arrow(name("p")), None),
            indexer(&[], PropertyBody::Arrow(name("i"))),
            method(&[], "M", &[], MemberBody::Arrow(name("m"))),
        ],
    )
    .build();

    let arrows = all(&root, SyntaxKind::ArrowExpressionClause);
    let texts: Vec<_> = arrows
        .into_iter()
        .map(|arrow| body_text(&Declaration::cast(arrow).unwrap()))
        .collect();
    assert_eq!(texts, vec![Some("p".to_owned()), Some("i".to_owned()), None]);

    // The owners themselves have no body.
    assert_eq!(body_text(&decl(&root, SyntaxKind::PropertyDeclaration)), None);
    assert_eq!(body_text(&decl(&root, SyntaxKind::IndexerDeclaration)), None);
}

#[test]
fn closures_resolve_their_own_bodies() {
    let root = method(
        &[],
        "M",
        &[],
        MemberBody::Block(block([
            local_function(&[], "Local", MemberBody::Arrow(name("l"))),
            expr_stmt(lambda(&[], block([expr_stmt(name("x"))]))),
            expr_stmt(simple_lambda(&[], "p", name("p"))),
        ])),
    )
    .build();

    let local = decl(&root, SyntaxKind::LocalFunctionStatement);
    assert!(local.is_closure());
    assert_eq!(body_text(&local).as_deref(), Some("l"));

    let block_lambda = decl(&root, SyntaxKind::ParenthesizedLambdaExpression);
    assert!(matches!(declaration_body(&block_lambda), Some(Body::Block(_))));

    let expr_lambda = decl(&root, SyntaxKind::SimpleLambdaExpression);
    assert_eq!(body_text(&expr_lambda).as_deref(), Some("p"));
}

#[test]
fn top_level_statements() {
    let script = unit([global(expr_stmt(call("Run", []))), class("C", [])]).build();
    let unit_node = CompilationUnit::cast(script.clone()).unwrap();
    let body = top_level_body(&unit_node).unwrap();
    assert_eq!(body.syntax(), &script);
    assert_eq!(
        check_body_shape(&script, false),
        Ok(BodyShape::TopLevelStatements)
    );

    let library = unit([class("C", [])]).build();
    assert_eq!(top_level_body(&CompilationUnit::cast(library.clone()).unwrap()), None);
    assert!(matches!(
        check_body_shape(&library, false),
        Err(BodyShapeError::NotABody {
            kind: SyntaxKind::CompilationUnit,
            ..
        })
    ));
}

#[test]
fn body_shapes() {
    let root = class(
        "C",
        [
            field(&[], "f", Some(int(1))),
            method(&[], "M", &[], MemberBody::Arrow(name("m"))),
            method(
                &[],
                "N",
                &[],
                MemberBody::Block(block([expr_stmt(lambda(&[], name("inner")))])),
            ),
        ],
    )
    .build();

    let field_init = first(&first(&root, SyntaxKind::FieldDeclaration), SyntaxKind::LiteralExpression);
    assert_eq!(check_body_shape(&field_init, false), Ok(BodyShape::FieldInitializer));

    let arrow_expr = ident_named(&root, "m").parent().unwrap();
    assert_eq!(check_body_shape(&arrow_expr, false), Ok(BodyShape::ArrowExpression));

    let method_block = first(&root, SyntaxKind::Block);
    assert_eq!(check_body_shape(&method_block, false), Ok(BodyShape::Block));

    let lambda_body = ident_named(&root, "inner").parent().unwrap();
    assert_eq!(check_body_shape(&lambda_body, true), Ok(BodyShape::ClosureBody));
    assert!(matches!(
        check_body_shape(&lambda_body, false),
        Err(BodyShapeError::ClosureBodyNotAllowed { .. })
    ));

    let statement = first(&root, SyntaxKind::ExpressionStatement);
    assert!(matches!(
        check_body_shape(&statement, true),
        Err(BodyShapeError::NotABody {
            kind: SyntaxKind::ExpressionStatement,
            ..
        })
    ));
}

#[test]
fn body_shape_error_messages() {
    let root = block([expr_stmt(name("x"))]).build();
    let statement = first(&root, SyntaxKind::ExpressionStatement);
    let err = check_body_shape(&statement, false).unwrap_err();
    assert_eq!(err.to_string(), "ExpressionStatement at 1..3 is not a body");
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "internal consistency failure")]
fn assert_is_body_panics_on_mismatch() {
    let root = block([expr_stmt(name("x"))]).build();
    assert_is_body(&first(&root, SyntaxKind::ExpressionStatement), true);
}

#[test]
fn assert_is_body_accepts_valid_bodies() {
    let root = block([]).build();
    assert_is_body(&root, false);
}

#[test]
fn containing_declaration_skips_unrelated_owners() {
    let root = class(
        "C",
        [
            method(&[], "M", &[], MemberBody::Arrow(name("m"))),
            property(
                &[],
                "P",
                PropertyBody::Accessors(vec![accessor(
                    SyntaxKind::GetAccessorDeclaration,
                    MemberBody::Block(block([return_stmt(Some(name("g")))])),
                )]),
                None,
            ),
        ],
    )
    .build();

    // Arrow clause of a method owns nothing; the method does.
    let in_method = ident_named(&root, "m").parent().unwrap();
    let owner = containing_declaration(&in_method).unwrap();
    assert!(matches!(owner, Declaration::Method(_)));

    let in_getter = ident_named(&root, "g").parent().unwrap();
    let owner = containing_declaration(&in_getter).unwrap();
    assert!(matches!(owner, Declaration::Accessor(_)));

    assert_eq!(containing_declaration(&root), None);
}

#[test]
fn containing_declaration_stops_at_closures() {
    let root = method(
        &[],
        "M",
        &[],
        MemberBody::Block(block([expr_stmt(lambda(
            &[],
            block([expr_stmt(name("inside"))]),
        ))])),
    )
    .build();

    let inside = ident_named(&root, "inside").parent().unwrap();
    let owner = containing_declaration(&inside).unwrap();
    assert!(matches!(owner, Declaration::Lambda(_)));
}

#[test]
fn cast_rejects_non_declarations() {
    let root = block([]).build();
    assert!(Declaration::cast(root).is_none());
    assert!(!Declaration::can_cast(SyntaxKind::FieldDeclaration));
    assert!(Declaration::can_cast(SyntaxKind::RemoveAccessorDeclaration));
}
