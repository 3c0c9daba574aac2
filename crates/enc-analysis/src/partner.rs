//! Correlation of nodes between the old and new tree of an edit.
//!
//! Both lookups walk the two trees in lock-step from their roots, moving to the child with
//! the same ordinal index (tokens included) on each side. Trivia tokens are ordinary children
//! here, so the trees are expected to come from the same producer.

use enc_config::ANALYSIS_TARGET;
use enc_syntax::{SyntaxElement, SyntaxNode, SyntaxToken, TextSize};
use rowan::NodeOrToken;

/// Result of [`find_leaf_and_partner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafMatch {
    /// Token of the left tree at the requested position.
    pub leaf: SyntaxToken,
    /// Innermost left node containing the position (the parent of `leaf`).
    pub left: SyntaxNode,
    /// Node of the right tree at the same path as `left`, if node kinds agreed at every level.
    pub right: Option<SyntaxNode>,
}

/// Finds the token at `position` in the left tree together with a best-effort partner of its
/// parent in the right tree.
///
/// Once the kinds of the two sides differ the right side is dropped for the rest of the
/// descent, even if deeper kinds happen to line up again. Returns `None` if `position` lies
/// outside `left_root` or the descent reaches a node without children.
pub fn find_leaf_and_partner(
    left_root: &SyntaxNode,
    position: TextSize,
    right_root: &SyntaxNode,
) -> Option<LeafMatch> {
    let mut left = left_root.clone();
    let mut right = Some(right_root.clone());
    let mut depth = 0usize;

    loop {
        if let Some(candidate) = &right {
            if candidate.kind() != left.kind() {
                tracing::trace!(
                    target: ANALYSIS_TARGET,
                    depth,
                    left = ?left.kind(),
                    right = ?candidate.kind(),
                    "partner search diverged"
                );
                right = None;
            }
        }

        let (index, child) = child_containing(&left, position)?;
        let child = match child {
            NodeOrToken::Token(leaf) => return Some(LeafMatch { leaf, left, right }),
            NodeOrToken::Node(node) => node,
        };

        right = right
            .and_then(|node| node.children_with_tokens().nth(index))
            .and_then(|element| element.into_node());
        left = child;
        depth += 1;
    }
}

/// Finds the node of the right tree at the same path as `left_node`.
///
/// Only meant for nodes unaffected by the edit: the path from `left_root` to `left_node`
/// must exist with identical kinds in the right tree. `left_node` must be non-empty and lie
/// in the tree of `left_root`; zero-width nodes cannot be located by position. Violations
/// panic in debug builds and yield `None` (or an arbitrary node) otherwise.
pub fn find_partner(
    left_root: &SyntaxNode,
    right_root: &SyntaxNode,
    left_node: &SyntaxNode,
) -> Option<SyntaxNode> {
    debug_assert!(
        !left_node.text_range().is_empty(),
        "partner lookup of a zero-width node"
    );
    debug_assert!(
        left_node.ancestors().any(|ancestor| ancestor == *left_root),
        "node does not belong to the left tree"
    );

    let position = left_node.text_range().start();
    let mut left = left_root.clone();
    let mut right = right_root.clone();

    while left != *left_node {
        debug_assert_eq!(left.kind(), right.kind(), "trees diverge above an unaffected node");

        let (index, child) = child_containing(&left, position)?;
        // Only a zero-width target makes the descent land on a token.
        debug_assert!(child.as_node().is_some(), "descent reached a token");
        left = child.into_node()?;
        right = right.children_with_tokens().nth(index)?.into_node()?;
    }

    Some(right)
}

/// The child of `node` containing `offset`, with its index among all children.
///
/// Zero-width children never contain an offset. An offset equal to the end of `node`
/// selects its last child.
fn child_containing(node: &SyntaxNode, offset: TextSize) -> Option<(usize, SyntaxElement)> {
    let range = node.text_range();
    if offset < range.start() || offset > range.end() {
        return None;
    }

    let mut last = None;
    for (index, child) in node.children_with_tokens().enumerate() {
        if offset < child.text_range().end() {
            return Some((index, child));
        }
        last = Some((index, child));
    }
    last
}
