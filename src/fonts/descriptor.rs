//! Font descriptor (PDF spec Section 9.8).

use bitflags::bitflags;
use serde::{Deserialize, Deserializer};

bitflags! {
    /// Font descriptor `/Flags` (PDF spec Table 123).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontFlags: u32 {
        /// All glyphs have the same width
        const FIXED_PITCH = 1 << 0;
        /// Glyphs have serifs
        const SERIF = 1 << 1;
        /// Font contains glyphs outside the standard Latin set
        const SYMBOLIC = 1 << 2;
        /// Glyphs resemble cursive handwriting
        const SCRIPT = 1 << 3;
        /// Font uses the standard Latin character set
        const NONSYMBOLIC = 1 << 5;
        /// Glyphs have dominant vertical strokes that are slanted
        const ITALIC = 1 << 6;
        /// No lowercase letters
        const ALL_CAP = 1 << 16;
        /// Lowercase letters are smaller uppercase glyphs
        const SMALL_CAP = 1 << 17;
        /// Bold glyphs are painted with extra pixels at small sizes
        const FORCE_BOLD = 1 << 18;
    }
}

/// Font weight as defined by the `/FontWeight` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum FontWeight {
    /// Thin (100)
    Thin = 100,
    /// Extra Light (200)
    ExtraLight = 200,
    /// Light (300)
    Light = 300,
    /// Normal (400)
    Normal = 400,
    /// Medium (500)
    Medium = 500,
    /// Semi Bold (600)
    SemiBold = 600,
    /// Bold (700)
    Bold = 700,
    /// Extra Bold (800)
    ExtraBold = 800,
    /// Black (900)
    Black = 900,
}

impl FontWeight {
    /// Create FontWeight from PDF numeric value.
    ///
    /// Rounds to nearest standard weight value. Non-positive values mean the
    /// weight is not defined.
    pub fn from_pdf_value(value: i32) -> Option<Self> {
        let weight = match value {
            ..=0 => return None,
            1..=150 => FontWeight::Thin,
            151..=250 => FontWeight::ExtraLight,
            251..=350 => FontWeight::Light,
            351..=450 => FontWeight::Normal,
            451..=550 => FontWeight::Medium,
            551..=650 => FontWeight::SemiBold,
            651..=750 => FontWeight::Bold,
            751..=850 => FontWeight::ExtraBold,
            851.. => FontWeight::Black,
        };
        Some(weight)
    }

    /// Get the numeric PDF value for this weight.
    pub fn to_pdf_value(&self) -> u16 {
        *self as u16
    }
}

/// The parts of a font descriptor that influence HTML styling.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FontDescriptor {
    /// PostScript name of the font, informational only
    #[serde(default)]
    pub name: Option<String>,

    /// Descriptor flags
    #[serde(default, deserialize_with = "deserialize_flags")]
    pub flags: FontFlags,

    /// Weight, `None` when the descriptor leaves it unspecified
    #[serde(default, deserialize_with = "deserialize_weight")]
    pub weight: Option<FontWeight>,
}

impl FontDescriptor {
    /// Create a descriptor from flags and an optional weight.
    pub fn new(flags: FontFlags, weight: Option<FontWeight>) -> Self {
        Self {
            name: None,
            flags,
            weight,
        }
    }

    /// Whether the font has serifs.
    pub fn is_serif(&self) -> bool {
        self.flags.contains(FontFlags::SERIF)
    }

    /// Whether the font is monospaced.
    pub fn is_fixed_width(&self) -> bool {
        self.flags.contains(FontFlags::FIXED_PITCH)
    }

    /// Whether the font is italic.
    pub fn is_italic(&self) -> bool {
        self.flags.contains(FontFlags::ITALIC)
    }
}

fn deserialize_flags<'de, D>(deserializer: D) -> Result<FontFlags, D::Error>
where
    D: Deserializer<'de>,
{
    let bits = u32::deserialize(deserializer)?;
    Ok(FontFlags::from_bits_truncate(bits))
}

fn deserialize_weight<'de, D>(deserializer: D) -> Result<Option<FontWeight>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.and_then(|w| FontWeight::from_pdf_value(w.round() as i32)))
}
