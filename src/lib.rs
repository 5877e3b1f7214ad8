// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::enum_variant_names)]
#![allow(clippy::should_implement_trait)]

//! # Tagged HTML
//!
//! Convert the logical structure tree of a tagged PDF into semantic HTML.
//!
//! ## Core Features
//!
//! - **Structure Tree Model**: ISO 32000-1:2008 sections 14.7-14.8, with RoleMap resolution
//! - **Semantic HTML**: paragraphs, headings, lists, tables and links map to their HTML tags
//! - **Layout Attributes**: colours, alignment, decoration, list numbering and cell spans
//!   become inline CSS and tag attributes
//! - **Font Styling**: text runs carry their font family, weight and style
//! - **Access Control**: owner and user passwords for restricted documents
//!
//! ## Architecture
//!
//! Parsing the PDF itself happens upstream. This crate reads a structure dump
//! (see [`document`]) and converts it in a single depth-first pass
//! ([`converters::StructVisitor`]). The conversion cannot fail once the
//! document is open: unknown structure types are spliced into their parent
//! and unknown attributes are ignored.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tagged_html::{HtmlOptions, OpenOptions, TaggedDocument};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = TaggedDocument::open("paper.json", &OpenOptions::new())?;
//! let html = doc.to_html(&HtmlOptions::default())?;
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Document model
pub mod annotations;
pub mod document;
pub mod fonts;
pub mod object;
/// PDF logical structure (Tagged PDFs)
pub mod structure;

// Access restriction
pub mod encryption;

// Format converters
pub mod converters;

// Re-exports
pub use converters::{HtmlOptions, StructVisitor};
pub use document::{OpenOptions, TaggedDocument};
pub use error::{Error, Result};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
