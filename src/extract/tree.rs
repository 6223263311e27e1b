/// A node in a traversable document tree.
///
/// Implementations are cheap handles (references or `Copy` wrappers) so the
/// extractor can walk a real parsed HTML tree and an in-memory fixture with
/// the same code.
pub trait TreeNode: Clone {
    /// Lowercase tag name for element nodes, `None` for everything else.
    fn element_name(&self) -> Option<&str>;

    /// Raw attribute value, `None` when absent or when this is not an element.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Character data for text nodes.
    fn text(&self) -> Option<&str>;

    /// Child nodes in document order.
    fn children(&self) -> impl Iterator<Item = Self>;

    fn is_element(&self, name: &str) -> bool {
        self.element_name()
            .is_some_and(|tag| tag.eq_ignore_ascii_case(name))
    }
}

/// A snapshot of one page: its address plus the root of its node tree.
pub trait Document {
    type Node<'a>: TreeNode
    where
        Self: 'a;

    fn url(&self) -> &str;

    fn root(&self) -> Self::Node<'_>;
}

/// Depth-first, document-order walk over every node below (and including)
/// `root`. `descend` decides whether the children of a visited node are
/// walked; the node itself is always yielded.
pub(crate) fn walk<N, F>(root: N, descend: F) -> Walk<N, F>
where
    N: TreeNode,
    F: Fn(&N) -> bool,
{
    Walk {
        stack: vec![root],
        descend,
    }
}

pub(crate) struct Walk<N, F> {
    stack: Vec<N>,
    descend: F,
}

impl<N, F> Iterator for Walk<N, F>
where
    N: TreeNode,
    F: Fn(&N) -> bool,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        if (self.descend)(&node) {
            let start = self.stack.len();
            self.stack.extend(node.children());
            self.stack[start..].reverse();
        }
        Some(node)
    }
}
