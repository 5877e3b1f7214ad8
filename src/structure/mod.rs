//! PDF Logical Structure (Tagged PDF) support.
//!
//! This module models the logical structure tree of a tagged document
//! according to ISO 32000-1:2008 Section 14.7.
//!
//! ## Structure Tree
//!
//! A structure tree consists of:
//! - **StructTreeRoot**: The root of the structure hierarchy, with its RoleMap
//! - **StructElem**: Structure elements (paragraphs, headings, tables, lists, ...)
//! - **Marked Content**: The leaves, carrying the text runs of the page content
//! - **Object references**: Links to annotations (`OBJR`)
//!
//! Reading order is the pre-order traversal of the tree: children are stored
//! in the order the document lists them.

mod attributes;
mod role_map;
mod types;

pub use attributes::{Attribute, AttributeKind, AttributeValue};
pub use role_map::{apply_role_map, resolve_role};
pub use types::{MarkedContent, StructChild, StructElem, StructTreeRoot, StructType, TextRun};
