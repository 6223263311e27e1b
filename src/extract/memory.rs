use super::tree::{Document, TreeNode};

/// Owned, in-memory document node.
///
/// Useful for producers that do not start from HTML text and for building
/// small trees in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementNode {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<ElementNode>,
    },
    Text(String),
}

impl ElementNode {
    pub fn element(name: impl Into<String>) -> Self {
        Self::Element {
            name: name.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text_node(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Adds an attribute. No-op on text nodes.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attributes, .. } = &mut self {
            attributes.push((key.into(), value.into()));
        }
        self
    }

    /// Appends a child. No-op on text nodes.
    pub fn child(mut self, node: ElementNode) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Shorthand for appending a text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.child(Self::text_node(text))
    }
}

impl<'a> TreeNode for &'a ElementNode {
    fn element_name(&self) -> Option<&str> {
        match self {
            ElementNode::Element { name, .. } => Some(name.as_str()),
            ElementNode::Text(_) => None,
        }
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        match self {
            ElementNode::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str()),
            ElementNode::Text(_) => None,
        }
    }

    fn text(&self) -> Option<&str> {
        match self {
            ElementNode::Text(text) => Some(text.as_str()),
            ElementNode::Element { .. } => None,
        }
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let nodes: &'a [ElementNode] = match *self {
            ElementNode::Element { children, .. } => children,
            ElementNode::Text(_) => &[],
        };
        nodes.iter()
    }
}

/// An in-memory page: address plus an owned root node (usually `html`).
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    url: String,
    root: ElementNode,
}

impl MemoryDocument {
    pub fn new(url: impl Into<String>, root: ElementNode) -> Self {
        Self {
            url: url.into(),
            root,
        }
    }
}

impl Document for MemoryDocument {
    type Node<'a> = &'a ElementNode;

    fn url(&self) -> &str {
        &self.url
    }

    fn root(&self) -> Self::Node<'_> {
        &self.root
    }
}
