use super::support;
use crate::ast::AstNode;
use crate::{SyntaxKind, SyntaxToken};

impl super::Modifiers {
    pub fn keywords(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.syntax()
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !t.kind().is_trivia())
    }

    pub fn has(&self, kind: SyntaxKind) -> bool {
        support::token(self.syntax(), kind).is_some()
    }
}

impl super::CompilationUnit {
    /// Global statements precede every other member, so only the first member is checked.
    pub fn contains_global_statements(&self) -> bool {
        self.members()
            .next()
            .is_some_and(|first| first.kind() == SyntaxKind::GlobalStatement)
    }
}

impl super::ParameterList {
    pub fn is_empty(&self) -> bool {
        self.parameters().next().is_none()
    }
}

impl super::AccessorDeclaration {
    pub fn is_getter(&self) -> bool {
        self.kind() == SyntaxKind::GetAccessorDeclaration
    }

    /// `get;`/`set;` style accessors with neither a block nor an arrow body.
    pub fn is_auto_implemented(&self) -> bool {
        use super::HasBlockOrArrowBody;

        self.body().is_none() && self.expression_body().is_none()
    }
}

impl super::LambdaExpression {
    pub fn async_token(&self) -> Option<SyntaxToken> {
        use super::HasModifiers;

        self.modifiers()
            .and_then(|mods| support::token(mods.syntax(), SyntaxKind::AsyncKw))
    }
}
