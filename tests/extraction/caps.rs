use datazen::extract::{ExtractionLimits, ExtractionOptions, Extractor, extract};

use super::page_fixtures::{anchors, html_page, images, paragraphs};

#[test]
fn categories_are_capped_at_default_limits() {
    let doc = html_page(&format!(
        "{}{}{}",
        paragraphs(130),
        anchors(150),
        images(80)
    ));
    let result = extract(&doc, &ExtractionOptions::all());

    assert_eq!(result.text.len(), 100);
    assert_eq!(result.links.len(), 100);
    assert_eq!(result.images.len(), 50);
    assert!(result.truncated.text);
    assert!(result.truncated.links);
    assert!(result.truncated.images);

    assert_eq!(result.links[0], "https://example.com/item/0");
    assert_eq!(result.links[99], "https://example.com/item/99");
    assert_eq!(result.images[49], "/static/img/49.png");
}

#[test]
fn exactly_at_cap_is_not_truncated() {
    let doc = html_page(&format!("{}{}", anchors(100), images(50)));
    let result = extract(&doc, &ExtractionOptions::all());

    assert_eq!(result.links.len(), 100);
    assert_eq!(result.images.len(), 50);
    assert!(!result.truncated.any());
}

#[test]
fn emails_are_never_capped() {
    let body: String = (0..150)
        .map(|i| format!("<span>user{i}@example.com</span> "))
        .collect();
    let doc = html_page(&body);
    let options = ExtractionOptions {
        emails: true,
        ..ExtractionOptions::none()
    };

    assert_eq!(extract(&doc, &options).emails.len(), 150);
}

#[test]
fn configured_limits_replace_defaults() {
    let limits = ExtractionLimits {
        max_links: 3,
        max_images: 1,
        ..ExtractionLimits::default()
    };
    let doc = html_page(&format!("{}{}", anchors(5), images(2)));
    let result = Extractor::new(limits).extract(&doc, &ExtractionOptions::all());

    assert_eq!(result.links.len(), 3);
    assert_eq!(result.images, vec!["/static/img/0.png"]);
    assert!(result.truncated.links && result.truncated.images);
}
