use enc_syntax::{
    AstNode, ConstructorDeclaration, FieldDeclaration, HasBlockOrArrowBody, HasModifiers,
    IndexerDeclaration, PropertyDeclaration, SyntaxKind, SyntaxNode, SyntaxToken,
    TypeParameterList,
};

use crate::body::Body;

pub fn is_parameterless_constructor(declaration: &SyntaxNode) -> bool {
    ConstructorDeclaration::cast(declaration.clone()).is_some_and(|ctor| {
        ctor.parameter_list()
            .map_or(true, |params| params.is_empty())
    })
}

/// Whether the compiler would synthesize a backing field for `property`.
///
/// Purely syntactic: true for non-abstract, non-extern properties without an arrow body that
/// have at least one auto-implemented accessor. Only meaningful before lowering.
pub fn has_backing_field(property: &PropertyDeclaration) -> bool {
    if property.has_modifier(SyntaxKind::AbstractKw) || property.has_modifier(SyntaxKind::ExternKw)
    {
        return false;
    }

    property.expression_body().is_none()
        && property
            .accessor_list()
            .is_some_and(|list| list.accessors().any(|accessor| accessor.is_auto_implemented()))
}

/// Modifier keywords of a field or property declaration; `None` for any other node.
pub fn field_or_property_modifiers(node: &SyntaxNode) -> Option<Vec<SyntaxToken>> {
    let modifiers = match node.kind() {
        SyntaxKind::FieldDeclaration => FieldDeclaration::cast(node.clone())?.modifiers(),
        SyntaxKind::PropertyDeclaration => PropertyDeclaration::cast(node.clone())?.modifiers(),
        _ => return None,
    };
    Some(
        modifiers
            .map(|mods| mods.keywords().collect())
            .unwrap_or_default(),
    )
}

/// The code that runs for a property or indexer read: its arrow expression, or the body of
/// its first `get` accessor.
pub fn effective_getter_body(declaration: &SyntaxNode) -> Option<Body> {
    let (expression_body, accessor_list) = match declaration.kind() {
        SyntaxKind::PropertyDeclaration => {
            let property = PropertyDeclaration::cast(declaration.clone())?;
            (property.expression_body(), property.accessor_list())
        }
        SyntaxKind::IndexerDeclaration => {
            let indexer = IndexerDeclaration::cast(declaration.clone())?;
            (indexer.expression_body(), indexer.accessor_list())
        }
        _ => return None,
    };

    if let Some(arrow) = expression_body {
        return arrow.expression().map(Body::Expression);
    }

    let getter = accessor_list?.accessors().find(|accessor| accessor.is_getter())?;
    getter.body().map(Body::Block).or_else(|| {
        getter
            .expression_body()
            .and_then(|arrow| arrow.expression())
            .map(Body::Expression)
    })
}

pub fn has_type_parameters(list: Option<&TypeParameterList>) -> bool {
    list.is_some_and(|list| list.type_parameters().next().is_some())
}
