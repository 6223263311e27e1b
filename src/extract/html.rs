use scraper::{ElementRef, Html};

use super::tree::{Document, TreeNode};

/// A page parsed with `scraper` (html5ever), ready for extraction.
pub struct HtmlDocument {
    url: String,
    html: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document. html5ever recovers from any malformed
    /// input, so this never fails.
    pub fn parse(url: impl Into<String>, source: &str) -> Self {
        Self {
            url: url.into(),
            html: Html::parse_document(source),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }
}

impl Document for HtmlDocument {
    type Node<'a> = HtmlNode<'a>;

    fn url(&self) -> &str {
        &self.url
    }

    fn root(&self) -> Self::Node<'_> {
        HtmlNode::Element(self.html.root_element())
    }
}

/// Element or text node of a `scraper` tree. Comments, doctypes and
/// processing instructions are skipped when listing children.
#[derive(Debug, Clone, Copy)]
pub enum HtmlNode<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
}

impl<'a> TreeNode for HtmlNode<'a> {
    fn element_name(&self) -> Option<&str> {
        match self {
            HtmlNode::Element(element) => Some(element.value().name()),
            HtmlNode::Text(_) => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            HtmlNode::Element(element) => element.value().attr(name),
            HtmlNode::Text(_) => None,
        }
    }

    fn text(&self) -> Option<&str> {
        match self {
            HtmlNode::Text(text) => Some(*text),
            HtmlNode::Element(_) => None,
        }
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let element = match *self {
            HtmlNode::Element(element) => Some(element),
            HtmlNode::Text(_) => None,
        };
        element
            .into_iter()
            .flat_map(|element| element.children())
            .filter_map(|child| {
                if let Some(element) = ElementRef::wrap(child) {
                    Some(HtmlNode::Element(element))
                } else {
                    child
                        .value()
                        .as_text()
                        .map(|text| HtmlNode::Text(&**text))
                }
            })
    }
}
