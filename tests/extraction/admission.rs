use std::collections::HashSet;

use datazen::extract::{ExtractionOptions, extract};

use super::page_fixtures::html_page;

#[test]
fn text_snippets_stay_inside_length_window() {
    let long = "word ".repeat(120);
    let doc = html_page(&format!(
        "<p>tiny</p><p>exactly10!</p><p>eleven char</p><div>{long}</div><h2>A heading that fits</h2>"
    ));
    let result = extract(&doc, &ExtractionOptions::all());

    assert!(result.text.iter().all(|t| {
        let len = t.chars().count();
        len > 10 && len < 500
    }));
    assert!(result.text.contains(&"eleven char".to_string()));
    assert!(result.text.contains(&"A heading that fits".to_string()));
    assert!(!result.text.contains(&"exactly10!".to_string()));
}

#[test]
fn oversized_container_yields_only_its_paragraphs() {
    let first = format!("First {}", "a".repeat(294));
    let second = format!("Second {}", "b".repeat(293));
    let doc = html_page(&format!("<div><p>{first}</p><p>{second}</p></div>"));

    let result = extract(&doc, &ExtractionOptions::all());

    assert_eq!(result.text, vec![first, second]);
}

#[test]
fn sources_need_http_or_root_relative_prefix() {
    let doc = html_page(
        r##"<a href="https://example.com/a">abs</a>
           <a href="http://example.com/b">plain</a>
           <a href="/c">root</a>
           <a href="javascript:void(0)">js</a>
           <a href="mailto:sales@example.com">mail</a>
           <a href="#top">top</a>
           <a href="relative/d">rel</a>
           <a>no href</a>
           <img src="data:image/png;base64,AAAA">
           <img src="/logo.png">
           <img src="https://cdn.example.com/hero.jpg">"##,
    );
    let result = extract(&doc, &ExtractionOptions::all());

    assert_eq!(
        result.links,
        vec!["https://example.com/a", "http://example.com/b", "/c"]
    );
    assert_eq!(
        result.images,
        vec!["/logo.png", "https://cdn.example.com/hero.jpg"]
    );
    for value in result.links.iter().chain(&result.images) {
        assert!(value.starts_with("http") || value.starts_with('/'));
    }
}

#[test]
fn every_sequence_is_duplicate_free() {
    let doc = html_page(
        r#"<p>Repeated paragraph text</p><p>Repeated paragraph text</p>
           <a href="/x">1</a><a href="/x">2</a><a href="/y">3</a>
           <img src="/i.png"><img src="/i.png">
           <p>Mail a@example.com or a@example.com</p>"#,
    );
    let result = extract(&doc, &ExtractionOptions::all());

    for seq in [&result.text, &result.links, &result.images, &result.emails] {
        let unique: HashSet<_> = seq.iter().collect();
        assert_eq!(unique.len(), seq.len(), "duplicates in {seq:?}");
    }
    assert_eq!(result.links, vec!["/x", "/y"]);
    assert_eq!(result.emails, vec!["a@example.com"]);
}

#[test]
fn emails_found_anywhere_in_body_text() {
    let doc = html_page(
        "<p>Contact: sales@acme.io, support@acme.io</p><footer>sales@acme.io</footer>",
    );
    let options = ExtractionOptions {
        emails: true,
        ..ExtractionOptions::none()
    };
    let result = extract(&doc, &options);

    assert_eq!(result.emails, vec!["sales@acme.io", "support@acme.io"]);
    assert!(result.text.is_empty());
    assert!(result.links.is_empty());
}

#[test]
fn script_style_and_hidden_content_is_skipped() {
    let doc = html_page(
        r#"<script>var s = "<p>not a paragraph</p> ops@example.com";</script>
           <style>p { color: red }</style>
           <p hidden>Hidden paragraph content</p>
           <p style="display: none">Display none paragraph</p>
           <p>Visible paragraph content</p>"#,
    );
    let result = extract(&doc, &ExtractionOptions::all());

    assert_eq!(result.text, vec!["Visible paragraph content"]);
    assert!(result.emails.is_empty());
}

#[test]
fn phone_numbers_are_normalized_and_deduplicated() {
    let doc = html_page("<p>Call (555) 123-4567 or 555.123.4567 today</p>");
    let options = ExtractionOptions {
        phones: true,
        ..ExtractionOptions::none()
    };
    let result = extract(&doc, &options);

    assert_eq!(result.phones.len(), 1);
    assert_eq!(result.phones[0].normalized, "5551234567");
}

#[test]
fn deeply_nested_page_still_yields_emails() {
    let depth = 60_000;
    let doc = html_page(&format!(
        "{}a@example.com{}",
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    ));
    let options = ExtractionOptions {
        emails: true,
        ..ExtractionOptions::none()
    };

    assert_eq!(extract(&doc, &options).emails, vec!["a@example.com"]);
}
