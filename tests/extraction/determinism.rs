use datazen::extract::{ExtractionOptions, Extractor, extract};

use super::page_fixtures::{anchors, html_page, memory_page, paragraphs};

#[test]
fn repeated_extraction_is_identical() {
    let doc = html_page(&format!(
        "{}{}<p>mail me at x@example.com</p>",
        paragraphs(20),
        anchors(20)
    ));
    let first = extract(&doc, &ExtractionOptions::all());
    let second = extract(&doc, &ExtractionOptions::all());

    assert_eq!(first, second);
}

#[test]
fn html_and_memory_trees_agree() {
    let html = html_page(
        r#"<h1>Catalogue page 7</h1><p>Write to page7@example.com for details</p>
           <a href="/page/7"></a><img src="/img/7.jpg">"#,
    );
    let memory = memory_page(7);

    let from_html = extract(&html, &ExtractionOptions::all());
    let from_memory = extract(&memory, &ExtractionOptions::all());

    assert_eq!(from_html.links, from_memory.links);
    assert_eq!(from_html.images, from_memory.images);
    assert_eq!(from_html.emails, from_memory.emails);
    assert_eq!(from_html.text, from_memory.text);
}

#[test]
fn one_extractor_serves_parallel_documents() {
    let extractor = Extractor::default();
    let documents: Vec<_> = (0..8).map(memory_page).collect();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = documents
            .iter()
            .map(|doc| scope.spawn(move || extractor.extract(doc, &ExtractionOptions::all())))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("extraction thread panicked"))
            .collect()
    });

    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.url, format!("https://example.com/page/{i}"));
        assert_eq!(result.emails, vec![format!("page{i}@example.com")]);
        assert_eq!(result.links, vec![format!("/page/{i}")]);
    }
}
