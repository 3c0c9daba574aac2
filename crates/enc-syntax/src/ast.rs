use crate::syntax_kind::SyntaxKind;
use crate::SyntaxNode;

pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(syntax: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

pub mod support {
    use crate::ast::AstNode;
    use crate::syntax_kind::SyntaxKind;
    use crate::{SyntaxNode, SyntaxToken};

    pub fn child<N: AstNode>(node: &SyntaxNode) -> Option<N> {
        node.children().find_map(N::cast)
    }

    pub fn children<'a, N: AstNode + 'a>(node: &'a SyntaxNode) -> impl Iterator<Item = N> + 'a {
        node.children().filter_map(N::cast)
    }

    pub fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
        node.children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|tok| tok.kind() == kind)
    }

    pub fn tokens<'a>(
        node: &'a SyntaxNode,
        kind: SyntaxKind,
    ) -> impl Iterator<Item = SyntaxToken> + 'a {
        node.children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(move |tok| tok.kind() == kind)
    }

    /// Returns the first identifier token among the node's direct children.
    pub fn ident_token(node: &SyntaxNode) -> Option<SyntaxToken> {
        token(node, SyntaxKind::Identifier)
    }
}

/// Declarations that may carry a `Modifiers` child.
pub trait HasModifiers: AstNode {
    fn modifiers(&self) -> Option<Modifiers> {
        support::child::<Modifiers>(self.syntax())
    }

    fn has_modifier(&self, kind: SyntaxKind) -> bool {
        self.modifiers().is_some_and(|mods| mods.has(kind))
    }
}

/// Members written either as `{ ... }` or as `=> expr;` (or neither, when abstract).
pub trait HasBlockOrArrowBody: AstNode {
    fn body(&self) -> Option<Block> {
        support::child::<Block>(self.syntax())
    }

    fn expression_body(&self) -> Option<ArrowExpressionClause> {
        support::child::<ArrowExpressionClause>(self.syntax())
    }
}

mod nodes;

pub use nodes::*;

mod ext;

#[cfg(test)]
mod tests;
