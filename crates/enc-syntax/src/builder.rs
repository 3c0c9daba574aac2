use rowan::{GreenNode, GreenNodeBuilder};

use crate::{SyntaxKind, SyntaxNode};

/// Builds green trees for the analysis engine.
///
/// Drivers that already own a parser translate its output through this builder. Node
/// starts/finishes must be balanced; [`TreeBuilder::finish`] panics otherwise (the same
/// contract as [`rowan::GreenNodeBuilder`]).
#[derive(Default)]
pub struct TreeBuilder {
    inner: GreenNodeBuilder<'static>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_node(&mut self, kind: SyntaxKind) -> &mut Self {
        debug_assert!(!kind.is_token(), "{kind:?} is a token kind");
        self.inner.start_node(kind.into());
        self
    }

    pub fn finish_node(&mut self) -> &mut Self {
        self.inner.finish_node();
        self
    }

    /// Runs `f` between a `start_node(kind)` / `finish_node()` pair.
    pub fn node(&mut self, kind: SyntaxKind, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.start_node(kind);
        f(self);
        self.finish_node()
    }

    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> &mut Self {
        debug_assert!(kind.is_token(), "{kind:?} is a node kind");
        self.inner.token(kind.into(), text);
        self
    }

    /// Adds a keyword or punctuation token using its canonical spelling.
    pub fn punct(&mut self, kind: SyntaxKind) -> &mut Self {
        let text = kind.fixed_text();
        debug_assert!(text.is_some(), "{kind:?} has no fixed spelling");
        self.token(kind, text.unwrap_or_default())
    }

    pub fn whitespace(&mut self, text: &str) -> &mut Self {
        self.token(SyntaxKind::Whitespace, text)
    }

    pub fn finish(self) -> GreenNode {
        self.inner.finish()
    }

    pub fn finish_syntax(self) -> SyntaxNode {
        SyntaxNode::new_root(self.finish())
    }
}
