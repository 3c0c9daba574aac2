use rowan::WalkEvent;

use enc_syntax::SyntaxNode;

/// Pre-order walk over `root` and its descendant nodes.
///
/// Every visited node is yielded, but the walk only enters the children of nodes for which
/// `descend` returns `true`. `root` itself is subject to the same check.
pub fn descendants_pruned<F>(root: &SyntaxNode, mut descend: F) -> impl Iterator<Item = SyntaxNode>
where
    F: FnMut(&SyntaxNode) -> bool,
{
    let mut preorder = root.preorder();
    std::iter::from_fn(move || loop {
        match preorder.next()? {
            WalkEvent::Enter(node) => {
                if !descend(&node) {
                    preorder.skip_subtree();
                }
                return Some(node);
            }
            WalkEvent::Leave(_) => {}
        }
    })
}
