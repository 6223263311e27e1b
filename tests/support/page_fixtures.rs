#![allow(dead_code)]

use datazen::extract::{ElementNode, HtmlDocument, MemoryDocument};

pub const PAGE_URL: &str = "https://shop.example.com/about";

/// Parses `body` wrapped in a minimal HTML document with a title.
pub fn html_page(body: &str) -> HtmlDocument {
    HtmlDocument::parse(
        PAGE_URL,
        &format!("<!doctype html><html><head><title>About us</title></head><body>{body}</body></html>"),
    )
}

/// `count` distinct paragraphs, each comfortably inside the text window.
pub fn paragraphs(count: usize) -> String {
    (0..count)
        .map(|i| format!("<p>Paragraph number {i:04} of the page</p>"))
        .collect()
}

pub fn anchors(count: usize) -> String {
    (0..count)
        .map(|i| format!(r#"<a href="https://example.com/item/{i}">item {i}</a>"#))
        .collect()
}

pub fn images(count: usize) -> String {
    (0..count)
        .map(|i| format!(r#"<img src="/static/img/{i}.png" alt="">"#))
        .collect()
}

/// In-memory equivalent of a small page, for threads (the HTML tree is not
/// `Send`) and for trees that never came from HTML text.
pub fn memory_page(index: usize) -> MemoryDocument {
    let body = ElementNode::element("body")
        .child(ElementNode::element("h1").with_text(format!("Catalogue page {index}")))
        .child(
            ElementNode::element("p")
                .with_text(format!("Write to page{index}@example.com for details")),
        )
        .child(ElementNode::element("a").attr("href", format!("/page/{index}")))
        .child(ElementNode::element("img").attr("src", format!("/img/{index}.jpg")));
    MemoryDocument::new(
        format!("https://example.com/page/{index}"),
        ElementNode::element("html").child(body),
    )
}
