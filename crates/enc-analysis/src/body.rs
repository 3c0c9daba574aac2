//! Declaration bodies: resolution and shape validation.

use enc_config::ANALYSIS_TARGET;
use enc_syntax::{
    AccessorDeclaration, ArrowExpressionClause, AstNode, Block, CompilationUnit,
    ConstructorDeclaration, ConversionOperatorDeclaration, DestructorDeclaration, Expression,
    HasBlockOrArrowBody, IndexerDeclaration, LambdaExpression, LocalFunctionStatement,
    MethodDeclaration, OperatorDeclaration, PropertyDeclaration, SyntaxKind, SyntaxNode,
    TextRange,
};
use thiserror::Error;

use crate::closure;

/// A declaration that may own an executable body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    Destructor(DestructorDeclaration),
    Operator(OperatorDeclaration),
    ConversionOperator(ConversionOperatorDeclaration),
    /// `get`, `set`, `init`, `add` and `remove` accessors.
    Accessor(AccessorDeclaration),
    Property(PropertyDeclaration),
    Indexer(IndexerDeclaration),
    /// `=> expr` of an expression-bodied member.
    ArrowExpressionClause(ArrowExpressionClause),
    LocalFunction(LocalFunctionStatement),
    Lambda(LambdaExpression),
}

impl AstNode for Declaration {
    fn can_cast(kind: SyntaxKind) -> bool {
        MethodDeclaration::can_cast(kind)
            || ConstructorDeclaration::can_cast(kind)
            || DestructorDeclaration::can_cast(kind)
            || OperatorDeclaration::can_cast(kind)
            || ConversionOperatorDeclaration::can_cast(kind)
            || AccessorDeclaration::can_cast(kind)
            || PropertyDeclaration::can_cast(kind)
            || IndexerDeclaration::can_cast(kind)
            || ArrowExpressionClause::can_cast(kind)
            || LocalFunctionStatement::can_cast(kind)
            || LambdaExpression::can_cast(kind)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let kind = syntax.kind();
        let decl = match kind {
            SyntaxKind::MethodDeclaration => Declaration::Method(MethodDeclaration::cast(syntax)?),
            SyntaxKind::ConstructorDeclaration => {
                Declaration::Constructor(ConstructorDeclaration::cast(syntax)?)
            }
            SyntaxKind::DestructorDeclaration => {
                Declaration::Destructor(DestructorDeclaration::cast(syntax)?)
            }
            SyntaxKind::OperatorDeclaration => {
                Declaration::Operator(OperatorDeclaration::cast(syntax)?)
            }
            SyntaxKind::ConversionOperatorDeclaration => {
                Declaration::ConversionOperator(ConversionOperatorDeclaration::cast(syntax)?)
            }
            SyntaxKind::PropertyDeclaration => {
                Declaration::Property(PropertyDeclaration::cast(syntax)?)
            }
            SyntaxKind::IndexerDeclaration => {
                Declaration::Indexer(IndexerDeclaration::cast(syntax)?)
            }
            SyntaxKind::ArrowExpressionClause => {
                Declaration::ArrowExpressionClause(ArrowExpressionClause::cast(syntax)?)
            }
            SyntaxKind::LocalFunctionStatement => {
                Declaration::LocalFunction(LocalFunctionStatement::cast(syntax)?)
            }
            _ if kind.is_accessor() => Declaration::Accessor(AccessorDeclaration::cast(syntax)?),
            _ if kind.is_lambda_expression() => {
                Declaration::Lambda(LambdaExpression::cast(syntax)?)
            }
            _ => return None,
        };
        Some(decl)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Declaration::Method(it) => it.syntax(),
            Declaration::Constructor(it) => it.syntax(),
            Declaration::Destructor(it) => it.syntax(),
            Declaration::Operator(it) => it.syntax(),
            Declaration::ConversionOperator(it) => it.syntax(),
            Declaration::Accessor(it) => it.syntax(),
            Declaration::Property(it) => it.syntax(),
            Declaration::Indexer(it) => it.syntax(),
            Declaration::ArrowExpressionClause(it) => it.syntax(),
            Declaration::LocalFunction(it) => it.syntax(),
            Declaration::Lambda(it) => it.syntax(),
        }
    }
}

impl Declaration {
    pub fn is_closure(&self) -> bool {
        matches!(self, Declaration::LocalFunction(_) | Declaration::Lambda(_))
    }

    pub fn body(&self) -> Option<Body> {
        declaration_body(self)
    }

    pub fn is_async(&self) -> bool {
        crate::suspension::is_async_declaration(self.syntax())
    }
}

/// The executable part of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Block(Block),
    Expression(Expression),
    /// Top-level statements; the body is the compilation unit itself.
    TopLevel(CompilationUnit),
}

impl Body {
    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Body::Block(it) => it.syntax(),
            Body::Expression(it) => it.syntax(),
            Body::TopLevel(it) => it.syntax(),
        }
    }

    /// Whether `node` lies inside this body (or is the body itself).
    pub fn contains(&self, node: &SyntaxNode) -> bool {
        let body = self.syntax();
        node.ancestors().any(|ancestor| ancestor == *body)
    }
}

/// Returns the body owned by `decl`, if any.
///
/// Block-or-expression members yield whichever form is present. A property only owns its
/// initializer; the body of an expression-bodied property or indexer belongs to its
/// [`Declaration::ArrowExpressionClause`]. Abstract, extern and body-less interface members
/// yield `None`.
pub fn declaration_body(decl: &Declaration) -> Option<Body> {
    let body = match decl {
        Declaration::Method(it) => block_or_arrow(it),
        Declaration::Constructor(it) => block_or_arrow(it),
        Declaration::Destructor(it) => block_or_arrow(it),
        Declaration::Operator(it) => block_or_arrow(it),
        Declaration::ConversionOperator(it) => block_or_arrow(it),
        Declaration::Accessor(it) => block_or_arrow(it),
        Declaration::LocalFunction(it) => block_or_arrow(it),
        Declaration::Lambda(it) => it
            .body()
            .map(Body::Block)
            .or_else(|| it.expression_body().map(Body::Expression)),
        Declaration::Property(it) => it
            .initializer()
            .and_then(|init| init.value())
            .map(Body::Expression),
        Declaration::Indexer(_) => None,
        Declaration::ArrowExpressionClause(it) => {
            let owned_by_property = it.syntax().parent().is_some_and(|parent| {
                matches!(
                    parent.kind(),
                    SyntaxKind::PropertyDeclaration | SyntaxKind::IndexerDeclaration
                )
            });
            if owned_by_property {
                it.expression().map(Body::Expression)
            } else {
                None
            }
        }
    };

    if let Some(body) = &body {
        assert_is_body(body.syntax(), decl.is_closure());
    }

    tracing::trace!(
        target: ANALYSIS_TARGET,
        kind = ?decl.syntax().kind(),
        has_body = body.is_some(),
        "resolved declaration body"
    );
    body
}

fn block_or_arrow<N: HasBlockOrArrowBody>(node: &N) -> Option<Body> {
    node.body().map(Body::Block).or_else(|| {
        node.expression_body()
            .and_then(|arrow| arrow.expression())
            .map(Body::Expression)
    })
}

/// The statement sequence of a compilation unit that contains top-level statements.
pub fn top_level_body(unit: &CompilationUnit) -> Option<Body> {
    unit.contains_global_statements()
        .then(|| Body::TopLevel(unit.clone()))
}

/// Innermost declaration whose body contains `node`.
///
/// Declarations passed on the way up whose body does not contain `node` (an arrow clause of
/// a method, a property whose initializer is elsewhere) are skipped.
pub fn containing_declaration(node: &SyntaxNode) -> Option<Declaration> {
    node.ancestors()
        .skip(1)
        .filter_map(Declaration::cast)
        .find(|decl| decl.body().is_some_and(|body| body.contains(node)))
}

/// The context a body node was accepted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    ClosureBody,
    Block,
    ArrowExpression,
    FieldInitializer,
    PropertyInitializer,
    TopLevelStatements,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BodyShapeError {
    #[error("{kind:?} at {range:?} is a closure body, which is not allowed here")]
    ClosureBodyNotAllowed { kind: SyntaxKind, range: TextRange },
    #[error("{kind:?} at {range:?} is not a body")]
    NotABody { kind: SyntaxKind, range: TextRange },
}

/// Classifies `node` as one of the shapes a body can take.
pub fn check_body_shape(
    node: &SyntaxNode,
    allow_closure: bool,
) -> Result<BodyShape, BodyShapeError> {
    let kind = node.kind();
    let range = node.text_range();

    if closure::is_closure_body(node) {
        if !allow_closure {
            return Err(BodyShapeError::ClosureBodyNotAllowed { kind, range });
        }
        if kind == SyntaxKind::Block || kind.is_expression() {
            return Ok(BodyShape::ClosureBody);
        }
        return Err(BodyShapeError::NotABody { kind, range });
    }

    if kind == SyntaxKind::Block {
        return Ok(BodyShape::Block);
    }

    if kind.is_expression() {
        if let Some(parent) = node.parent() {
            match parent.kind() {
                SyntaxKind::ArrowExpressionClause => return Ok(BodyShape::ArrowExpression),
                SyntaxKind::EqualsValueClause => match parent.parent().map(|it| it.kind()) {
                    Some(SyntaxKind::VariableDeclarator) => {
                        return Ok(BodyShape::FieldInitializer)
                    }
                    Some(SyntaxKind::PropertyDeclaration) => {
                        return Ok(BodyShape::PropertyInitializer)
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }

    if CompilationUnit::cast(node.clone()).is_some_and(|unit| unit.contains_global_statements()) {
        return Ok(BodyShape::TopLevelStatements);
    }

    Err(BodyShapeError::NotABody { kind, range })
}

/// Debug-only check that `node` is a body.
///
/// A failure means the caller resolved a body incorrectly; it is reported and then panics in
/// debug builds. Release builds skip the check entirely.
#[inline]
pub fn assert_is_body(node: &SyntaxNode, allow_closure: bool) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(err) = check_body_shape(node, allow_closure) {
        tracing::error!(target: ANALYSIS_TARGET, error = %err, "invalid body shape");
        panic!("internal consistency failure: {err}");
    }
}

#[cfg(test)]
mod tests;
