//! Inline CSS for the font of a text run.

use crate::fonts::FontDescriptor;

/// Generic CSS family for a font: serif wins over fixed width.
pub fn generic_family(font: &FontDescriptor) -> &'static str {
    if font.is_serif() {
        "serif"
    } else if font.is_fixed_width() {
        "monospace"
    } else {
        "sans-serif"
    }
}

/// Append the font declarations (family, weight, style) to `out`.
pub fn font_css(font: &FontDescriptor, out: &mut String) {
    out.push_str(&format!("font-family: {};", generic_family(font)));

    if let Some(weight) = font.weight {
        out.push_str(&format!("font-weight: {};", weight.to_pdf_value()));
    }

    if font.is_italic() {
        out.push_str("font-style: italic;");
    }
}
