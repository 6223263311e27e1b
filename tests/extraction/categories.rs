use datazen::export::ExportFormat;
use datazen::extract::{ExtractionOptions, extract};
use datazen::pipeline::{Category, records_for};
use std::str::FromStr;
use strum::IntoEnumIterator;

use super::page_fixtures::html_page;

#[test]
fn single_category_options_select_only_that_category() {
    let doc = html_page(
        r#"<p>Paragraph with info@example.com inside</p><a href="/a">a</a><img src="/i.png">"#,
    );
    for category in Category::iter() {
        let result = extract(&doc, &category.options());
        let non_empty = [
            !result.text.is_empty(),
            !result.links.is_empty(),
            !result.images.is_empty(),
            !result.emails.is_empty(),
            !result.phones.is_empty(),
        ]
        .into_iter()
        .filter(|x| *x)
        .count();
        assert!(non_empty <= 1, "{category} produced more than one category");
    }
}

#[test]
fn email_records_carry_domain() {
    let doc = html_page("<p>Write to sales@acme.io now</p>");
    let result = extract(&doc, &Category::Emails.options());
    let records = records_for(&result, Category::Emails);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["email"], "sales@acme.io");
    assert_eq!(records[0]["domain"], "acme.io");
}

#[test]
fn category_names_parse_loosely() {
    assert_eq!(Category::from_str("LINKS").unwrap(), Category::Links);
    assert_eq!(Category::from_str("phones").unwrap(), Category::PhoneNumbers);
    assert_eq!(Category::PhoneNumbers.to_string(), "phone_numbers");
    assert!(Category::from_str("videos").is_err());
    assert_eq!(ExportFormat::from_str("CSV").unwrap(), ExportFormat::Csv);
}

#[test]
fn title_is_collected_even_without_categories() {
    let doc = html_page("<p>Anything at all here</p>");
    let result = extract(&doc, &ExtractionOptions::none());

    assert_eq!(result.title, "About us");
    assert_eq!(result.url, super::page_fixtures::PAGE_URL);
}
