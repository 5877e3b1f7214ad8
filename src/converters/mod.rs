//! Format converters for tagged documents.
//!
//! The structure tree is converted to HTML by [`StructVisitor`], which
//! composes three table-driven pieces:
//! - **tags**: structure type to HTML tag (`P` → `p`, `L` → `ol`/`ul`, ...)
//! - **attributes**: structure attributes to CSS declarations and tag attributes
//! - **font**: font descriptor of a text run to inline CSS
//!
//! # Examples
//!
//! ```no_run
//! use tagged_html::converters::HtmlOptions;
//! use tagged_html::document::{OpenOptions, TaggedDocument};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = TaggedDocument::open("paper.json", &OpenOptions::new())?;
//! let html = doc.to_html(&HtmlOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod font;
pub mod html;
pub mod tags;

pub use attributes::{build_attribute, AttributeTarget, TagAttributes};
pub use font::font_css;
pub use html::{escape_xml, push_escaped, HtmlOptions, StructVisitor, VisitState, STYLESHEET};
pub use tags::{link_href, list_tag, select_tag, tag_rule, TagRule};
