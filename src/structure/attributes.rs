//! Structure attributes (PDF spec Section 14.8.5).
//!
//! Only the attribute kinds with an HTML rendering get their own variant;
//! every other attribute is preserved as [`AttributeKind::Other`].

use serde::Deserialize;

/// Attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum AttributeKind {
    /// Foreground colour (`/Color`)
    Color,
    /// Background colour (`/BackgroundColor`)
    BackgroundColor,
    /// List numbering style (`/ListNumbering`)
    ListNumbering,
    /// Text alignment within a block (`/TextAlign`)
    TextAlign,
    /// Text decoration (`/TextDecorationType`)
    TextDecorationType,
    /// Rows spanned by a table cell (`/RowSpan`)
    RowSpan,
    /// Columns spanned by a table cell (`/ColSpan`)
    ColSpan,
    /// Any other attribute
    Other(String),
}

impl AttributeKind {
    /// Parse an attribute kind from its name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Color" => Self::Color,
            "BackgroundColor" => Self::BackgroundColor,
            "ListNumbering" => Self::ListNumbering,
            "TextAlign" => Self::TextAlign,
            "TextDecorationType" => Self::TextDecorationType,
            "RowSpan" => Self::RowSpan,
            "ColSpan" => Self::ColSpan,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Default value the PDF specification declares for this attribute.
    pub fn default_value(&self) -> Option<AttributeValue> {
        match self {
            Self::ListNumbering => Some(AttributeValue::name("None")),
            Self::TextAlign => Some(AttributeValue::name("Start")),
            Self::TextDecorationType => Some(AttributeValue::name("None")),
            Self::RowSpan | Self::ColSpan => Some(AttributeValue::Number(1.0)),
            Self::Color | Self::BackgroundColor | Self::Other(_) => None,
        }
    }

    /// Whether children inherit the value from their ancestors.
    pub fn is_inheritable(&self) -> bool {
        matches!(self, Self::ListNumbering)
    }
}

impl From<String> for AttributeKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean flag
    Boolean(bool),
    /// Numeric scalar
    Number(f64),
    /// Named constant, e.g. `Decimal`
    Name(String),
    /// RGB colour with components in `[0, 1]`
    Color([f64; 3]),
    /// Any other numeric array
    Array(Vec<f64>),
    /// Value of any other shape (string arrays, nested arrays, null, ...)
    Other(serde_json::Value),
}

impl AttributeValue {
    /// Named constant value.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Get the named constant, if this is one.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Get the number, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the RGB components, if this is a colour.
    pub fn as_rgb(&self) -> Option<[f64; 3]> {
        match self {
            Self::Color(rgb) => Some(*rgb),
            _ => None,
        }
    }
}

/// One attribute of a structure element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attribute {
    /// Attribute name
    #[serde(rename = "name")]
    pub kind: AttributeKind,
    /// Attribute value
    pub value: AttributeValue,
}
