//! Resumable points of state-machine bodies and the async/generator classification.

use enc_config::ANALYSIS_TARGET;
use enc_syntax::{
    AstNode, ForEachStatement, HasModifiers, LambdaExpression, LocalDeclarationStatement,
    LocalFunctionStatement, MethodDeclaration, SyntaxKind, SyntaxNode, TextRange, TextSize,
    UsingStatement,
};
use serde::{Deserialize, Serialize};

use crate::closure;
use crate::walk::descendants_pruned;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuspensionKind {
    /// `await expr`.
    AwaitExpression,
    /// `yield return expr;`.
    YieldReturn,
    /// `yield break;`. Marks a generator but never resumes.
    YieldBreak,
    /// `await foreach (...)`.
    AwaitForEach,
    /// `await using (...)` or one declarator of `await using var ...;`.
    AwaitUsing,
}

impl SuspensionKind {
    /// Recognizes the suspension form `node` is written as, if any.
    ///
    /// For `await using` declarations the form is reported on each `VariableDeclarator`, not
    /// on the statement.
    pub fn of(node: &SyntaxNode) -> Option<SuspensionKind> {
        match node.kind() {
            SyntaxKind::AwaitExpression => Some(SuspensionKind::AwaitExpression),
            SyntaxKind::YieldReturnStatement => Some(SuspensionKind::YieldReturn),
            SyntaxKind::YieldBreakStatement => Some(SuspensionKind::YieldBreak),
            SyntaxKind::ForEachStatement => ForEachStatement::cast(node.clone())?
                .await_token()
                .map(|_| SuspensionKind::AwaitForEach),
            SyntaxKind::UsingStatement => UsingStatement::cast(node.clone())?
                .await_token()
                .map(|_| SuspensionKind::AwaitUsing),
            SyntaxKind::VariableDeclarator => {
                let statement = node.parent()?.parent()?;
                LocalDeclarationStatement::cast(statement)?
                    .await_token()
                    .map(|_| SuspensionKind::AwaitUsing)
            }
            _ => None,
        }
    }

    /// Whether the state machine keeps a resumable state for this form.
    pub fn binds_to_resumable_state(self) -> bool {
        !matches!(self, SuspensionKind::YieldBreak)
    }

    pub fn is_generator_statement(self) -> bool {
        matches!(self, SuspensionKind::YieldReturn | SuspensionKind::YieldBreak)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspensionPoint {
    pub kind: SuspensionKind,
    pub node: SyntaxNode,
}

impl SuspensionPoint {
    pub fn offset(&self) -> TextSize {
        self.node.text_range().start()
    }

    pub fn range(&self) -> TextRange {
        self.node.text_range()
    }
}

/// Points inside `body` where its state machine can suspend and later resume, in source order.
///
/// Nested closures own their state machines and are skipped. Only closures are skipped: for a
/// top-level body (the compilation unit) the walk also enters type declarations of the same
/// unit, so awaits inside their members are reported too. Scan a member's own body to get
/// only its points.
pub fn suspension_points(body: &SyntaxNode) -> Vec<SuspensionPoint> {
    let points: Vec<SuspensionPoint> = descendants_pruned(body, closure::is_not_closure)
        .filter_map(|node| {
            let kind = SuspensionKind::of(&node)?;
            kind.binds_to_resumable_state()
                .then_some(SuspensionPoint { kind, node })
        })
        .collect();

    tracing::debug!(
        target: ANALYSIS_TARGET,
        body = ?body.kind(),
        count = points.len(),
        "collected suspension points"
    );
    points
}

/// Whether `body` is a generator body (contains `yield return` or `yield break`).
///
/// A body with only `yield break` still counts, even though it yields no suspension points.
pub fn is_generator(body: &SyntaxNode) -> bool {
    descendants_pruned(body, closure::is_not_closure).any(|node| {
        SuspensionKind::of(&node).is_some_and(SuspensionKind::is_generator_statement)
    })
}

/// Whether `declaration` is marked `async`: a method, local function, lambda or anonymous
/// method with the modifier. An arrow clause is judged by its owning member.
pub fn is_async_declaration(declaration: &SyntaxNode) -> bool {
    let declaration = if declaration.kind() == SyntaxKind::ArrowExpressionClause {
        match declaration.parent() {
            Some(owner) => owner,
            None => return false,
        }
    } else {
        declaration.clone()
    };

    match declaration.kind() {
        SyntaxKind::MethodDeclaration => MethodDeclaration::cast(declaration)
            .is_some_and(|method| method.has_modifier(SyntaxKind::AsyncKw)),
        SyntaxKind::LocalFunctionStatement => LocalFunctionStatement::cast(declaration)
            .is_some_and(|function| function.has_modifier(SyntaxKind::AsyncKw)),
        kind if kind.is_lambda_expression() => LambdaExpression::cast(declaration)
            .is_some_and(|lambda| lambda.async_token().is_some()),
        _ => false,
    }
}
