//! Page extraction: walks a document tree and collects text snippets, links,
//! image sources, email addresses and phone numbers under fixed admission
//! rules.
//!
//! The traversal runs over the [`TreeNode`] / [`Document`] traits, so the same
//! rules apply to an `html5ever` parse ([`HtmlDocument`]) and to an in-memory
//! tree ([`MemoryDocument`]).

pub mod extractor;
pub mod html;
pub mod memory;
pub mod patterns;
pub mod policy;
pub mod render;
pub mod tree;
pub mod types;

pub use extractor::{Extractor, extract};
pub use html::{HtmlDocument, HtmlNode};
pub use memory::{ElementNode, MemoryDocument};
pub use policy::{ExtractionLimits, admits_source};
pub use render::rendered_text;
pub use tree::{Document, TreeNode};
pub use types::{ExtractionOptions, ExtractionResult, PhoneNumber, Truncation};
