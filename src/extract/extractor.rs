use super::patterns::{find_emails, find_phones};
use super::policy::{Collector, ExtractionLimits, admits_source};
use super::render::{is_rendered, rendered_text};
use super::tree::{Document, TreeNode, walk};
use super::types::{ExtractionOptions, ExtractionResult, PhoneNumber};

/// Elements whose rendered text is a snippet candidate.
const TEXT_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6", "span", "div"];

/// Extract with the default limits.
pub fn extract<D: Document>(document: &D, options: &ExtractionOptions) -> ExtractionResult {
    Extractor::default().extract(document, options)
}

/// Scans a document tree into a bounded, deduplicated result set.
///
/// Holds only immutable limits, so one instance can serve any number of
/// documents, including from several threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    limits: ExtractionLimits,
}

impl Extractor {
    pub fn new(limits: ExtractionLimits) -> Self {
        Self { limits }
    }

    pub fn extract<D: Document>(
        &self,
        document: &D,
        options: &ExtractionOptions,
    ) -> ExtractionResult {
        let root = document.root();
        let mut result = ExtractionResult {
            url: document.url().to_string(),
            title: title(root.clone()),
            ..ExtractionResult::default()
        };

        if options.text {
            let (text, truncated) = self.text(root.clone());
            result.text = text;
            result.truncated.text = truncated;
        }

        if options.links || options.images {
            let (links, images) = self.sources(root.clone(), options);
            (result.links, result.truncated.links) = links;
            (result.images, result.truncated.images) = images;
        }

        if options.emails || options.phones {
            let body_text = body(root.clone())
                .map_or_else(|| rendered_text(&root), |body| rendered_text(&body));
            if options.emails {
                result.emails = emails(&body_text);
            }
            if options.phones {
                result.phones = find_phones(&body_text)
                    .into_iter()
                    .map(|m| PhoneNumber {
                        phone: m.raw,
                        normalized: m.normalized,
                    })
                    .collect();
            }
        }

        log_summary(&result);
        result
    }

    fn text<N: TreeNode>(&self, root: N) -> (Vec<String>, bool) {
        let mut collector = Collector::capped(self.limits.max_text);

        for node in walk(root, is_rendered) {
            if collector.is_full() {
                break;
            }
            let is_candidate = node
                .element_name()
                .is_some_and(|tag| TEXT_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)));
            if !is_candidate || !is_rendered(&node) {
                continue;
            }
            let text = rendered_text(&node);
            if self.limits.admits_text(&text) {
                collector.insert(&text);
            }
        }

        collector.finish()
    }

    /// Links and image sources in one pass. Visibility does not matter here:
    /// a hidden anchor still points somewhere.
    fn sources<N: TreeNode>(
        &self,
        root: N,
        options: &ExtractionOptions,
    ) -> ((Vec<String>, bool), (Vec<String>, bool)) {
        let mut links = Collector::capped(self.limits.max_links);
        let mut images = Collector::capped(self.limits.max_images);

        for node in walk(root, |_| true) {
            if options.links && node.is_element("a") {
                if let Some(href) = node.attribute("href")
                    && admits_source(href)
                {
                    links.insert(href.trim());
                }
            } else if options.images && node.is_element("img") {
                if let Some(src) = node.attribute("src")
                    && admits_source(src)
                {
                    images.insert(src.trim());
                }
            }
        }

        (links.finish(), images.finish())
    }
}

fn title<N: TreeNode>(root: N) -> String {
    walk(root, |_| true)
        .find(|n| n.is_element("title"))
        .map(|n| rendered_text(&n))
        .unwrap_or_default()
}

fn body<N: TreeNode>(root: N) -> Option<N> {
    walk(root, |_| true).find(|n| n.is_element("body"))
}

fn emails(body_text: &str) -> Vec<String> {
    let mut collector = Collector::uncapped();
    for email in find_emails(body_text) {
        collector.insert(email);
    }
    collector.finish().0
}

fn log_summary(result: &ExtractionResult) {
    tracing::debug!(
        url = %result.url,
        text = result.text.len(),
        links = result.links.len(),
        images = result.images.len(),
        emails = result.emails.len(),
        phones = result.phones.len(),
        truncated = result.truncated.any(),
        "extraction complete"
    );
}
