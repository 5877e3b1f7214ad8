//! Indirect object references.
//!
//! Structure elements refer to annotations and other objects through indirect
//! references (`12 0 R`). The structure dump spells them the same way.

use crate::error::Error;
use serde::Deserialize;
use std::str::FromStr;

/// Reference to an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number
    pub gen: u16,
}

impl ObjectRef {
    /// Create a new object reference.
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

impl FromStr for ObjectRef {
    type Err = Error;

    /// Parse `"12 0 R"` (the trailing `R` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDocument(format!("bad object reference '{}'", s));

        let mut parts = s.split_whitespace();
        let id = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let gen = parts
            .next()
            .and_then(|p| p.parse::<u16>().ok())
            .ok_or_else(invalid)?;
        match (parts.next(), parts.next()) {
            (None, None) | (Some("R"), None) => Ok(Self { id, gen }),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for ObjectRef {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
