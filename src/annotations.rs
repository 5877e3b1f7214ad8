//! Annotation objects reachable from the structure tree.
//!
//! Link structure elements point at their link annotation through an object
//! reference child (`OBJR`). Only what the converter needs is modelled: the
//! annotation subtype and its action.

use serde::Deserialize;

/// An indirect object from the document's object table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum IndirectObject {
    /// Annotation dictionary (`/Type /Annot`)
    Annot(Annotation),
    /// Any other object type; kept only so references to it resolve
    #[serde(other)]
    Other,
}

impl IndirectObject {
    /// Get the annotation if this object is one.
    pub fn as_annotation(&self) -> Option<&Annotation> {
        match self {
            IndirectObject::Annot(annot) => Some(annot),
            IndirectObject::Other => None,
        }
    }
}

/// Annotation dictionary.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Annotation {
    /// Annotation subtype (`Link`, `Widget`, ...)
    #[serde(default)]
    pub subtype: Option<String>,
    /// Action triggered by the annotation (`/A`)
    #[serde(default)]
    pub action: Option<LinkAction>,
}

impl Annotation {
    /// URI of the annotation's action, if it is a URI action.
    pub fn uri(&self) -> Option<&str> {
        match &self.action {
            Some(LinkAction::Uri { uri }) => Some(uri.as_str()),
            _ => None,
        }
    }
}

/// Action attached to a link annotation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum LinkAction {
    /// URI action - navigate to a web URL
    #[serde(rename = "URI")]
    Uri {
        /// Target URI
        uri: String,
    },
    /// GoTo action - navigate to a destination within the document
    GoTo {
        /// Named or explicit destination
        #[serde(default)]
        dest: Option<String>,
    },
    /// GoToR action - navigate to a destination in another document
    #[serde(rename = "GoToR")]
    GoToRemote {
        /// File specification
        file: String,
        /// Destination in remote file
        #[serde(default)]
        dest: Option<String>,
    },
    /// Other action types (Launch, Named, etc.)
    #[serde(other)]
    Other,
}
