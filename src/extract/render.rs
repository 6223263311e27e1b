use super::tree::TreeNode;

/// Elements whose content is never rendered.
const NON_RENDERED: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Elements that start a new line when rendered.
const BLOCK_LEVEL: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Whether `node` (an element) and its subtree take part in rendering.
pub(crate) fn is_rendered<N: TreeNode>(node: &N) -> bool {
    let Some(tag) = node.element_name() else {
        return true;
    };
    if NON_RENDERED.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
        return false;
    }
    if node.attribute("hidden").is_some() {
        return false;
    }
    node.attribute("style").is_none_or(|style| !hides(style))
}

fn hides(style: &str) -> bool {
    let compact: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    compact
        .split(';')
        .any(|decl| decl == "display:none" || decl == "visibility:hidden")
}

fn is_block<N: TreeNode>(node: &N) -> bool {
    node.element_name()
        .is_some_and(|tag| BLOCK_LEVEL.iter().any(|t| tag.eq_ignore_ascii_case(t)))
}

/// Visible text of `node`, whitespace-collapsed and trimmed.
///
/// Text nodes are concatenated as-is; block-level elements are separated by
/// a break so `<p>a</p><p>b</p>` renders as `a b` rather than `ab`.
pub fn rendered_text<N: TreeNode>(node: &N) -> String {
    let mut raw = String::new();
    push_rendered(node, &mut raw);
    collapse_whitespace(&raw)
}

enum Step<N> {
    Visit(N),
    Break,
}

/// Explicit work stack, so nesting depth is bounded by the heap rather than
/// the call stack.
fn push_rendered<N: TreeNode>(node: &N, out: &mut String) {
    let mut stack = vec![Step::Visit(node.clone())];

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Break => {
                out.push('\n');
                continue;
            }
            Step::Visit(node) => node,
        };
        if let Some(text) = node.text() {
            out.push_str(text);
            continue;
        }
        if !is_rendered(&node) {
            continue;
        }
        if is_block(&node) {
            out.push('\n');
            stack.push(Step::Break);
        }
        let start = stack.len();
        stack.extend(node.children().map(Step::Visit));
        stack[start..].reverse();
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
