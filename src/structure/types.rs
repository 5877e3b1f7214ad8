//! Types for PDF logical structure trees.
//!
//! Implements structure element types according to ISO 32000-1:2008 Section 14.7.2.

use super::attributes::{Attribute, AttributeKind, AttributeValue};
use crate::fonts::FontDescriptor;
use crate::object::ObjectRef;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// The root of a PDF structure tree (StructTreeRoot dictionary).
///
/// This is the entry point for accessing a document's logical structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructTreeRoot {
    /// Role map for custom structure types (`/RoleMap`)
    #[serde(default)]
    pub role_map: HashMap<String, String>,

    /// Root structure element(s) (`/K`)
    #[serde(default, rename = "kids")]
    pub root_elements: Vec<StructElem>,
}

impl StructTreeRoot {
    /// Create a new structure tree root
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root element to the structure tree
    pub fn add_root_element(&mut self, elem: StructElem) {
        self.root_elements.push(elem);
    }
}

/// A structure element (StructElem) in the structure tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructElem {
    /// Structure type (`/S`)
    #[serde(rename = "type")]
    pub struct_type: StructType,

    /// Attributes (`/A`), in the order the element lists them
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Children in reading order (`/K`)
    #[serde(default, rename = "kids")]
    pub children: Vec<StructChild>,
}

impl StructElem {
    /// Create a new structure element
    pub fn new(struct_type: StructType) -> Self {
        Self {
            struct_type,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a child to this structure element
    pub fn add_child(&mut self, child: StructChild) {
        self.children.push(child);
    }

    /// Builder-style [`add_child`](Self::add_child) for nested elements.
    pub fn with_child(mut self, child: impl Into<StructChild>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder-style attribute addition.
    pub fn with_attribute(mut self, kind: AttributeKind, value: AttributeValue) -> Self {
        self.attributes.push(Attribute { kind, value });
        self
    }

    /// Find the element's own value for an attribute kind.
    pub fn find_attribute(&self, kind: &AttributeKind) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|attr| &attr.kind == kind)
            .map(|attr| &attr.value)
    }
}

/// Child of a structure element.
///
/// In the structure dump an object reference is a `"12 0 R"` string, an
/// element is an object with a `type`, and any other object is marked content.
#[derive(Debug, Clone, PartialEq)]
pub enum StructChild {
    /// Object reference (`OBJR`), e.g. to a link annotation
    ObjectRef(ObjectRef),

    /// Another structure element (recursive hierarchy)
    Element(StructElem),

    /// Marked content carrying the actual text
    Content(MarkedContent),
}

impl<'de> Deserialize<'de> for StructChild {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let child = if value.is_string() {
            serde_json::from_value(value).map(StructChild::ObjectRef)
        } else if value.get("type").is_some() {
            serde_json::from_value(value).map(StructChild::Element)
        } else {
            serde_json::from_value(value).map(StructChild::Content)
        };
        child.map_err(D::Error::custom)
    }
}

impl From<StructElem> for StructChild {
    fn from(elem: StructElem) -> Self {
        StructChild::Element(elem)
    }
}

impl From<MarkedContent> for StructChild {
    fn from(content: MarkedContent) -> Self {
        StructChild::Content(content)
    }
}

impl From<ObjectRef> for StructChild {
    fn from(obj_ref: ObjectRef) -> Self {
        StructChild::ObjectRef(obj_ref)
    }
}

/// Marked content sequence referenced by a structure element.
///
/// This is the content (leaf) node: it carries renderable text as a series
/// of runs, each shown with a single font.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MarkedContent {
    /// Marked Content ID
    #[serde(default)]
    pub mcid: Option<u32>,

    /// Page index containing this marked content
    #[serde(default)]
    pub page: Option<u32>,

    /// Alternate description (`/Alt`)
    #[serde(default, rename = "alt")]
    pub alt_text: Option<String>,

    /// Replacement text (`/ActualText`)
    #[serde(default)]
    pub actual_text: Option<String>,

    /// Text runs in content stream order
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

impl MarkedContent {
    /// Marked content made of the given runs.
    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    /// Text replacing the runs: non-empty alt text, else non-empty actual text.
    pub fn replacement_text(&self) -> Option<&str> {
        fn non_empty(text: &Option<String>) -> Option<&str> {
            text.as_deref().filter(|t| !t.is_empty())
        }
        non_empty(&self.alt_text).or_else(|| non_empty(&self.actual_text))
    }
}

/// A contiguous span of text sharing one font.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TextRun {
    /// Decoded text
    pub text: String,

    /// Font the run was shown with, when known
    #[serde(default)]
    pub font: Option<FontDescriptor>,
}

impl TextRun {
    /// Create a text run.
    pub fn new(text: impl Into<String>, font: Option<FontDescriptor>) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// Standard structure types from PDF spec Section 14.8.4.
///
/// Custom types can be mapped to standard types via the RoleMap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum StructType {
    // Document-level structure types
    /// Document root
    Document,
    /// Part (major division)
    Part,
    /// Article
    Art,
    /// Section
    Sect,
    /// Division
    Div,

    // Paragraph-level structure types
    /// Paragraph
    P,
    /// Heading of unspecified level
    H,
    /// Heading level 1
    H1,
    /// Heading level 2
    H2,
    /// Heading level 3
    H3,
    /// Heading level 4
    H4,
    /// Heading level 5
    H5,
    /// Heading level 6
    H6,

    // List structure types
    /// List
    L,
    /// List item
    LI,
    /// Label (list item marker)
    Lbl,
    /// List body (list item content)
    LBody,

    // Table structure types
    /// Table
    Table,
    /// Table row
    TR,
    /// Table header cell
    TH,
    /// Table data cell
    TD,
    /// Table header group
    THead,
    /// Table body group
    TBody,
    /// Table footer group
    TFoot,

    // Inline structure types
    /// Span (inline generic)
    Span,
    /// Quote
    Quote,
    /// Note
    Note,
    /// Reference
    Reference,
    /// Bibliographic entry
    BibEntry,
    /// Code
    Code,
    /// Link
    Link,
    /// Annotation
    Annot,

    // Illustration structure types
    /// Figure
    Figure,
    /// Formula
    Formula,
    /// Form (input field)
    Form,

    /// Custom structure type not defined in the PDF specification
    Custom(String),
}

impl StructType {
    /// Parse structure type from its name (e.g., "P" -> StructType::P)
    pub fn from_name(s: &str) -> Self {
        match s {
            "Document" => Self::Document,
            "Part" => Self::Part,
            "Art" => Self::Art,
            "Sect" => Self::Sect,
            "Div" => Self::Div,
            "P" => Self::P,
            "H" => Self::H,
            "H1" => Self::H1,
            "H2" => Self::H2,
            "H3" => Self::H3,
            "H4" => Self::H4,
            "H5" => Self::H5,
            "H6" => Self::H6,
            "L" => Self::L,
            "LI" => Self::LI,
            "Lbl" => Self::Lbl,
            "LBody" => Self::LBody,
            "Table" => Self::Table,
            "TR" => Self::TR,
            "TH" => Self::TH,
            "TD" => Self::TD,
            "THead" => Self::THead,
            "TBody" => Self::TBody,
            "TFoot" => Self::TFoot,
            "Span" => Self::Span,
            "Quote" => Self::Quote,
            "Note" => Self::Note,
            "Reference" => Self::Reference,
            "BibEntry" => Self::BibEntry,
            "Code" => Self::Code,
            "Link" => Self::Link,
            "Annot" => Self::Annot,
            "Figure" => Self::Figure,
            "Formula" => Self::Formula,
            "Form" => Self::Form,
            _ => Self::Custom(s.to_string()),
        }
    }

    /// Name of the structure type as written in the document.
    pub fn name(&self) -> &str {
        match self {
            Self::Document => "Document",
            Self::Part => "Part",
            Self::Art => "Art",
            Self::Sect => "Sect",
            Self::Div => "Div",
            Self::P => "P",
            Self::H => "H",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::H4 => "H4",
            Self::H5 => "H5",
            Self::H6 => "H6",
            Self::L => "L",
            Self::LI => "LI",
            Self::Lbl => "Lbl",
            Self::LBody => "LBody",
            Self::Table => "Table",
            Self::TR => "TR",
            Self::TH => "TH",
            Self::TD => "TD",
            Self::THead => "THead",
            Self::TBody => "TBody",
            Self::TFoot => "TFoot",
            Self::Span => "Span",
            Self::Quote => "Quote",
            Self::Note => "Note",
            Self::Reference => "Reference",
            Self::BibEntry => "BibEntry",
            Self::Code => "Code",
            Self::Link => "Link",
            Self::Annot => "Annot",
            Self::Figure => "Figure",
            Self::Formula => "Formula",
            Self::Form => "Form",
            Self::Custom(name) => name,
        }
    }

    /// Check if this is a standard (non-custom) type.
    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl From<String> for StructType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for StructType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
