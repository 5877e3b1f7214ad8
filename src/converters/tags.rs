//! Structure type to HTML tag mapping.

use super::html::escape_xml;
use crate::document::TaggedDocument;
use crate::structure::{AttributeKind, AttributeValue, StructChild, StructElem, StructType};

/// How the tag of a structure type is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    /// Always the same tag
    Fixed(&'static str),
    /// `ol` or `ul`, depending on the effective `/ListNumbering`
    ListNumbering,
}

impl TagRule {
    /// Resolve the rule to a tag name given the effective list numbering.
    pub fn resolve(self, numbering: Option<&AttributeValue>) -> &'static str {
        match self {
            TagRule::Fixed(tag) => tag,
            TagRule::ListNumbering => list_tag(numbering),
        }
    }
}

/// Tag rule of a structure type; `None` means the element has no HTML
/// counterpart and its children are spliced into the parent.
pub fn tag_rule(struct_type: &StructType) -> Option<TagRule> {
    let tag = match struct_type {
        StructType::P => "p",
        StructType::H1 => "h1",
        StructType::H2 => "h2",
        StructType::H3 => "h3",
        StructType::H4 => "h4",
        StructType::H5 => "h5",
        StructType::H6 => "h6",
        StructType::L => return Some(TagRule::ListNumbering),
        StructType::LI => "li",
        StructType::Table => "table",
        StructType::TR => "tr",
        StructType::TH => "th",
        StructType::TD => "td",
        StructType::TBody => "tbody",
        StructType::THead => "thead",
        StructType::Link => "a",
        StructType::Document
        | StructType::Part
        | StructType::Art
        | StructType::Sect
        | StructType::Div
        | StructType::H
        | StructType::Lbl
        | StructType::LBody
        | StructType::TFoot
        | StructType::Span
        | StructType::Quote
        | StructType::Note
        | StructType::Reference
        | StructType::BibEntry
        | StructType::Code
        | StructType::Annot
        | StructType::Figure
        | StructType::Formula
        | StructType::Form
        | StructType::Custom(_) => return None,
    };
    Some(TagRule::Fixed(tag))
}

/// `ol` for numbered list styles, `ul` for everything else.
pub fn list_tag(numbering: Option<&AttributeValue>) -> &'static str {
    match numbering.and_then(AttributeValue::as_name) {
        Some("Decimal" | "UpperRoman" | "LowerRoman" | "UpperAlpha" | "LowerAlpha") => "ol",
        _ => "ul",
    }
}

/// Effective `/ListNumbering` of an element: its own value, else the value
/// inherited from the nearest ancestor that sets one, else the default.
pub fn effective_list_numbering(
    elem: &StructElem,
    inherited: Option<&AttributeValue>,
) -> Option<AttributeValue> {
    elem.find_attribute(&AttributeKind::ListNumbering)
        .or(inherited)
        .cloned()
        .or_else(|| AttributeKind::ListNumbering.default_value())
}

/// Tag for an element, `None` when it has no HTML counterpart.
pub fn select_tag(elem: &StructElem, inherited_numbering: Option<&AttributeValue>) -> Option<&'static str> {
    let rule = tag_rule(&elem.struct_type)?;
    let numbering = match rule {
        TagRule::ListNumbering => effective_list_numbering(elem, inherited_numbering),
        TagRule::Fixed(_) => None,
    };
    Some(rule.resolve(numbering.as_ref()))
}

/// ` href='...'` for a link element.
///
/// Only the first object reference among the children is considered; if it
/// does not lead to an annotation with a URI action the link gets no href.
pub fn link_href(elem: &StructElem, doc: &TaggedDocument) -> Option<String> {
    let obj_ref = elem.children.iter().find_map(|child| match child {
        StructChild::ObjectRef(obj_ref) => Some(*obj_ref),
        _ => None,
    })?;

    match doc.link_uri(obj_ref) {
        Some(uri) => Some(format!(" href='{}'", escape_xml(uri))),
        None => {
            log::debug!("Link annotation {} has no URI action", obj_ref);
            None
        },
    }
}
