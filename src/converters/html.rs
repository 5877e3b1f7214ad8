//! HTML converter for tagged documents.
//!
//! Walks the logical structure tree depth-first and emits semantic HTML:
//! structure types become tags, attributes become inline CSS or tag
//! attributes, and marked content becomes escaped text, with a styled
//! `<span>` for every run whose font is known.
//!
//! # Examples
//!
//! ```no_run
//! use tagged_html::converters::{HtmlOptions, StructVisitor};
//! use tagged_html::document::{OpenOptions, TaggedDocument};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = TaggedDocument::open("report.json", &OpenOptions::new())?;
//! let html = StructVisitor::new(&doc)
//!     .with_options(HtmlOptions::new().with_title("Report"))
//!     .process()?;
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```

use super::attributes::TagAttributes;
use super::font::font_css;
use super::tags::{link_href, select_tag};
use crate::document::TaggedDocument;
use crate::error::{Error, Result};
use crate::structure::{
    AttributeKind, AttributeValue, MarkedContent, StructChild, StructElem, StructType,
};

/// Style block embedded in the document head.
pub const STYLESHEET: &str = concat!(
    "  <style type='text/css'>\n",
    "   * { color: #222; }\n",
    "   table, tbody, thead, tr { margin: 0; padding: 0; }\n",
    "   table { border-collapse: collapse; margin: 0 auto; }\n",
    "   th, td { margin: 0; padding: 0.15em 0.5em; border: 1px solid #aaa; }\n",
    "   th { background: #eee; }\n",
    "  </style>\n",
);

/// Options controlling the generated document.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Embed the static stylesheet in `<head>` (default: true)
    pub embed_stylesheet: bool,
    /// Title to use instead of the document's own title
    pub title: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self {
            embed_stylesheet: true,
            title: None,
        }
    }

    /// Enable or disable the embedded stylesheet.
    pub fn with_stylesheet(mut self, embed: bool) -> Self {
        self.embed_stylesheet = embed;
        self
    }

    /// Override the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Escape `& ' " < >` as named entities.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Append `text` to `out`, escaping `& ' " < >`.
pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Traversal state handed down the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisitState<'a> {
    /// Set while emitting the children of a table. Any element with a tag
    /// clears it once its own children are done, so it does not survive the
    /// first tagged descendant.
    pub in_table: bool,
    /// Nearest `/ListNumbering` set by an ancestor
    pub list_numbering: Option<&'a AttributeValue>,
}

/// Depth-first structure tree to HTML converter.
pub struct StructVisitor<'a> {
    doc: &'a TaggedDocument,
    options: HtmlOptions,
    out: String,
}

impl<'a> StructVisitor<'a> {
    /// Create a converter for a document with default options.
    pub fn new(doc: &'a TaggedDocument) -> Self {
        Self {
            doc,
            options: HtmlOptions::default(),
            out: String::new(),
        }
    }

    /// Replace the conversion options.
    pub fn with_options(mut self, options: HtmlOptions) -> Self {
        self.options = options;
        self
    }

    /// Convert the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoStructureTree`] if the document is not tagged;
    /// nothing is emitted in that case.
    pub fn process(mut self) -> Result<String> {
        let doc = self.doc;
        let tree = doc.structure_tree().ok_or(Error::NoStructureTree)?;

        self.start();
        let mut state = VisitState::default();
        for elem in &tree.root_elements {
            state.in_table = self.visit_element(elem, state);
        }
        self.finish();

        Ok(self.out)
    }

    fn start(&mut self) {
        self.out.push_str(
            "<!DOCTYPE html>\n\
             <html>\n \
             <head>\n  \
             <meta charset='utf-8'>\n",
        );

        let title = self.options.title.as_deref().or(self.doc.title());
        if let Some(title) = title {
            self.out.push_str("  <title>");
            push_escaped(&mut self.out, title);
            self.out.push_str("</title>\n");
        }

        if self.options.embed_stylesheet {
            self.out.push_str(STYLESHEET);
        }

        self.out.push_str(" </head>\n <body>\n\n");
    }

    fn finish(&mut self) {
        self.out.push_str("\n </body>\n</html>\n");
    }

    /// Visit one child; returns the table flag after it.
    fn visit_child(&mut self, child: &'a StructChild, state: VisitState<'a>) -> bool {
        match child {
            StructChild::Element(elem) => self.visit_element(elem, state),
            StructChild::Content(content) => {
                self.emit_content(content);
                state.in_table
            },
            StructChild::ObjectRef(_) => state.in_table,
        }
    }

    /// Visit an element and its subtree; returns the table flag after it.
    fn visit_element(&mut self, elem: &'a StructElem, state: VisitState<'a>) -> bool {
        let child_numbering = elem
            .find_attribute(&AttributeKind::ListNumbering)
            .or(state.list_numbering);

        let Some(tag) = select_tag(elem, state.list_numbering) else {
            log::trace!("No tag for {}, splicing children", elem.struct_type);
            let mut in_table = state.in_table;
            for child in &elem.children {
                in_table = self.visit_child(
                    child,
                    VisitState {
                        in_table,
                        list_numbering: child_numbering,
                    },
                );
            }
            return in_table;
        };

        let suppressed = state.in_table && elem.struct_type == StructType::P;
        if !suppressed {
            let attrs = self.build_tag_attributes(elem);
            self.out.push('<');
            self.out.push_str(tag);
            self.out.push_str(&attrs);
            self.out.push('>');
        }

        let mut in_table = state.in_table || elem.struct_type == StructType::Table;
        for child in &elem.children {
            in_table = self.visit_child(
                child,
                VisitState {
                    in_table,
                    list_numbering: child_numbering,
                },
            );
        }

        if !suppressed {
            self.out.push_str("</");
            self.out.push_str(tag);
            self.out.push_str(">\n");
        }

        false
    }

    fn build_tag_attributes(&self, elem: &StructElem) -> String {
        let mut attrs = TagAttributes::new();

        if elem.struct_type == StructType::Link {
            if let Some(href) = link_href(elem, self.doc) {
                attrs.push_raw(&href);
            }
        }

        for attr in &elem.attributes {
            attrs.push_attribute(attr);
        }

        attrs.finish()
    }

    fn emit_content(&mut self, content: &MarkedContent) {
        if let Some(text) = content.replacement_text() {
            push_escaped(&mut self.out, text);
            return;
        }

        for run in &content.runs {
            match &run.font {
                Some(font) => {
                    self.out.push_str("<span style='");
                    font_css(font, &mut self.out);
                    self.out.push_str("'>");
                    push_escaped(&mut self.out, &run.text);
                    self.out.push_str("</span>");
                },
                None => push_escaped(&mut self.out, &run.text),
            }
        }
    }
}
