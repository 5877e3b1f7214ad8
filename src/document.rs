//! Tagged document model.
//!
//! A [`TaggedDocument`] is the read-only view of a tagged PDF that the HTML
//! converter consumes: its structure tree, document info, the indirect
//! objects the tree points at, and the security handler that guards it.
//!
//! Documents are loaded from a structure dump, a JSON rendition of what the
//! PDF parser extracted:
//!
//! ```json
//! {
//!   "info": { "title": "Annual report" },
//!   "encryption": { "user_password_sha256": "..." },
//!   "struct_tree": {
//!     "role_map": { "Heading1": "H1" },
//!     "kids": [ { "type": "P", "kids": [ { "mcid": 0, "runs": [ { "text": "Hi" } ] } ] } ]
//!   },
//!   "objects": { "12 0 R": { "type": "Annot", "action": { "type": "URI", "uri": "https://example.org" } } }
//! }
//! ```

use crate::annotations::IndirectObject;
use crate::converters::{HtmlOptions, StructVisitor};
use crate::encryption::{AccessLevel, SecurityHandler};
use crate::error::Result;
use crate::object::ObjectRef;
use crate::structure::{apply_role_map, StructElem, StructTreeRoot};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Path that selects standard input in [`TaggedDocument::open`].
pub const STDIN_PATH: &str = "-";

/// Document information dictionary (`/Info`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentInfo {
    /// Document title
    #[serde(default)]
    pub title: Option<String>,
}

/// Credentials used to open an access-restricted document.
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// Owner password
    pub owner_password: Option<String>,
    /// User password
    pub user_password: Option<String>,
}

impl OpenOptions {
    /// Create options without credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the owner password.
    pub fn with_owner_password(mut self, password: impl Into<String>) -> Self {
        self.owner_password = Some(password.into());
        self
    }

    /// Set the user password.
    pub fn with_user_password(mut self, password: impl Into<String>) -> Self {
        self.user_password = Some(password.into());
        self
    }
}

#[derive(Deserialize)]
struct StructureDump {
    #[serde(default)]
    info: DocumentInfo,
    #[serde(default)]
    encryption: Option<SecurityHandler>,
    #[serde(default)]
    struct_tree: Option<StructTreeRoot>,
    #[serde(default)]
    objects: HashMap<ObjectRef, IndirectObject>,
}

/// A tagged document opened for conversion.
#[derive(Debug, Clone)]
pub struct TaggedDocument {
    info: DocumentInfo,
    struct_tree: Option<StructTreeRoot>,
    objects: HashMap<ObjectRef, IndirectObject>,
    access: AccessLevel,
}

impl Default for TaggedDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl TaggedDocument {
    /// Create an empty, untagged document.
    pub fn new() -> Self {
        Self {
            info: DocumentInfo::default(),
            struct_tree: None,
            objects: HashMap::new(),
            access: AccessLevel::Owner,
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.info.title = Some(title.into());
        self
    }

    /// Attach a structure tree. The role map is applied immediately.
    pub fn with_structure_tree(mut self, mut tree: StructTreeRoot) -> Self {
        apply_role_map(&mut tree);
        self.struct_tree = Some(tree);
        self
    }

    /// Register an indirect object.
    pub fn with_object(mut self, obj_ref: ObjectRef, object: IndirectObject) -> Self {
        self.objects.insert(obj_ref, object);
        self
    }

    /// Open a structure dump from a file, or from standard input when the
    /// path is `-`.
    pub fn open(path: impl AsRef<Path>, options: &OpenOptions) -> Result<Self> {
        let path = path.as_ref();
        if path == Path::new(STDIN_PATH) {
            log::debug!("Reading document from standard input");
            return Self::from_reader(std::io::stdin().lock(), options);
        }

        log::debug!("Opening document {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents, options)
    }

    /// Read a structure dump from any reader.
    pub fn from_reader(mut reader: impl Read, options: &OpenOptions) -> Result<Self> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::from_json_str(&contents, options)
    }

    /// Parse a structure dump held in memory.
    pub fn from_json_str(json: &str, options: &OpenOptions) -> Result<Self> {
        let dump: StructureDump = serde_json::from_str(json)?;

        let access = match &dump.encryption {
            Some(handler) => {
                handler.validate()?;
                handler.authenticate(
                    options.owner_password.as_deref(),
                    options.user_password.as_deref(),
                )?
            },
            None => AccessLevel::Owner,
        };

        let mut struct_tree = dump.struct_tree;
        match &mut struct_tree {
            Some(tree) => {
                apply_role_map(tree);
                log::debug!("Structure tree has {} top-level elements", tree.root_elements.len());
            },
            None => log::debug!("Document has no structure tree"),
        }

        Ok(Self {
            info: dump.info,
            struct_tree,
            objects: dump.objects,
            access,
        })
    }

    /// Whether the document is tagged.
    pub fn has_structure_tree(&self) -> bool {
        self.struct_tree.is_some()
    }

    /// The structure tree, if the document is tagged.
    pub fn structure_tree(&self) -> Option<&StructTreeRoot> {
        self.struct_tree.as_ref()
    }

    /// Top-level structure elements in reading order; empty when untagged.
    pub fn top_level_children(&self) -> &[StructElem] {
        self.struct_tree
            .as_ref()
            .map(|tree| tree.root_elements.as_slice())
            .unwrap_or(&[])
    }

    /// Document information dictionary.
    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    /// Document title from the information dictionary.
    pub fn title(&self) -> Option<&str> {
        self.info.title.as_deref()
    }

    /// Access level granted when the document was opened.
    pub fn access_level(&self) -> AccessLevel {
        self.access
    }

    /// Dereference an indirect object.
    pub fn resolve(&self, obj_ref: ObjectRef) -> Option<&IndirectObject> {
        self.objects.get(&obj_ref)
    }

    /// URI of the link annotation behind an object reference.
    pub fn link_uri(&self, obj_ref: ObjectRef) -> Option<&str> {
        self.resolve(obj_ref)
            .and_then(IndirectObject::as_annotation)
            .and_then(|annot| annot.uri())
    }

    /// Convert the structure tree to an HTML document.
    pub fn to_html(&self, options: &HtmlOptions) -> Result<String> {
        StructVisitor::new(self).with_options(options.clone()).process()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::{Annotation, LinkAction};
    use crate::encryption::sha256_hex;
    use crate::error::Error;
    use crate::structure::StructType;

    #[test]
    fn test_untagged_document() {
        let doc = TaggedDocument::from_json_str(r#"{"info": {"title": "Plain"}}"#, &OpenOptions::new())
            .unwrap();
        assert!(!doc.has_structure_tree());
        assert!(doc.top_level_children().is_empty());
        assert_eq!(doc.title(), Some("Plain"));
    }

    #[test]
    fn test_role_map_applied_on_open() {
        let json = r#"{
            "struct_tree": {
                "role_map": {"Heading1": "H1"},
                "kids": [{"type": "Heading1"}]
            }
        }"#;
        let doc = TaggedDocument::from_json_str(json, &OpenOptions::new()).unwrap();
        assert_eq!(doc.top_level_children()[0].struct_type, StructType::H1);
    }

    #[test]
    fn test_corrupt_dump() {
        let err = TaggedDocument::from_json_str("{\"struct_tree\": [", &OpenOptions::new())
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_open_failure());
    }

    #[test]
    fn test_bad_object_key() {
        let err = TaggedDocument::from_json_str(
            r#"{"objects": {"twelve": {"type": "Annot"}}}"#,
            &OpenOptions::new(),
        )
        .unwrap_err();
        assert!(err.is_open_failure());
    }

    #[test]
    fn test_password_protected() {
        let json = format!(
            r#"{{"encryption": {{"owner_password_sha256": "{}", "user_password_sha256": "{}"}}, "struct_tree": {{}}}}"#,
            sha256_hex("owner"),
            sha256_hex("user")
        );

        let err = TaggedDocument::from_json_str(&json, &OpenOptions::new()).unwrap_err();
        assert!(matches!(err, Error::WrongPassword));

        let doc =
            TaggedDocument::from_json_str(&json, &OpenOptions::new().with_user_password("user"))
                .unwrap();
        assert_eq!(doc.access_level(), AccessLevel::User);

        let doc =
            TaggedDocument::from_json_str(&json, &OpenOptions::new().with_owner_password("owner"))
                .unwrap();
        assert_eq!(doc.access_level(), AccessLevel::Owner);
    }

    #[test]
    fn test_link_uri_lookup() {
        let annot = Annotation {
            subtype: Some("Link".to_string()),
            action: Some(LinkAction::Uri {
                uri: "https://example.org".to_string(),
            }),
        };
        let doc = TaggedDocument::new()
            .with_object(ObjectRef::new(12, 0), IndirectObject::Annot(annot))
            .with_object(ObjectRef::new(13, 0), IndirectObject::Other);

        assert_eq!(doc.link_uri(ObjectRef::new(12, 0)), Some("https://example.org"));
        assert_eq!(doc.link_uri(ObjectRef::new(13, 0)), None);
        assert_eq!(doc.link_uri(ObjectRef::new(14, 0)), None);
    }

    #[test]
    fn test_open_missing_file() {
        let err = TaggedDocument::open("/nonexistent/dir/doc.json", &OpenOptions::new())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
