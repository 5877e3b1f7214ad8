//! Attribute to HTML translation.
//!
//! Each structure attribute with an HTML rendering becomes either a CSS
//! declaration (collected into the element's `style` attribute) or a direct
//! tag attribute. Values outside the known vocabulary produce nothing.

use crate::structure::{Attribute, AttributeKind, AttributeValue};

/// Where the fragment of an attribute goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeTarget {
    /// A CSS declaration inside `style='...'`
    Style,
    /// A direct tag attribute such as ` rowspan='2'`
    Attribute,
}

/// Target of an attribute kind, `None` for kinds without HTML rendering.
pub fn target(kind: &AttributeKind) -> Option<AttributeTarget> {
    match kind {
        AttributeKind::Color
        | AttributeKind::BackgroundColor
        | AttributeKind::ListNumbering
        | AttributeKind::TextAlign
        | AttributeKind::TextDecorationType => Some(AttributeTarget::Style),
        AttributeKind::RowSpan | AttributeKind::ColSpan => Some(AttributeTarget::Attribute),
        AttributeKind::Other(_) => None,
    }
}

/// Append the HTML fragment for one attribute to `out`.
pub fn build_attribute(kind: &AttributeKind, value: &AttributeValue, out: &mut String) {
    match kind {
        AttributeKind::Color => push_color("color", value, out),
        AttributeKind::BackgroundColor => push_color("background-color", value, out),
        AttributeKind::ListNumbering => {
            push_declaration("list-style-type", value.as_name().and_then(list_style_type), out)
        },
        AttributeKind::TextAlign => {
            push_declaration("text-align", value.as_name().and_then(text_align), out)
        },
        AttributeKind::TextDecorationType => {
            push_declaration("text-decoration", value.as_name().and_then(text_decoration), out)
        },
        AttributeKind::RowSpan => push_span("rowspan", value, out),
        AttributeKind::ColSpan => push_span("colspan", value, out),
        AttributeKind::Other(_) => {},
    }
}

fn push_declaration(property: &str, css_value: Option<&str>, out: &mut String) {
    if let Some(css_value) = css_value {
        out.push_str(&format!("{}: {};", property, css_value));
    }
}

fn push_color(property: &str, value: &AttributeValue, out: &mut String) {
    if let Some([r, g, b]) = value.as_rgb() {
        out.push_str(&format!(
            "{}: rgb({},{},{});",
            property,
            color_component(r),
            color_component(g),
            color_component(b)
        ));
    }
}

fn color_component(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

fn push_span(attr: &str, value: &AttributeValue, out: &mut String) {
    match value.as_number() {
        Some(n) if n >= 1.0 && n.is_finite() => {
            out.push_str(&format!(" {}='{}'", attr, n.trunc() as u64));
        },
        _ => {},
    }
}

fn list_style_type(name: &str) -> Option<&'static str> {
    Some(match name {
        "None" => "none",
        "Disc" => "disc",
        "Circle" => "circle",
        "Square" => "square",
        "Decimal" => "decimal",
        "UpperRoman" => "upper-roman",
        "LowerRoman" => "lower-roman",
        "UpperAlpha" => "upper-latin",
        "LowerAlpha" => "lower-latin",
        _ => return None,
    })
}

fn text_align(name: &str) -> Option<&'static str> {
    Some(match name {
        "Justify" => "justify",
        "Start" => "left",
        "End" => "right",
        "Center" => "center",
        _ => return None,
    })
}

fn text_decoration(name: &str) -> Option<&'static str> {
    Some(match name {
        "Underline" => "underline",
        "Overline" => "overline",
        "LineThrough" => "line-through",
        "None" => "none",
        _ => return None,
    })
}

/// Attribute and style buffers of the element being emitted.
#[derive(Debug, Default)]
pub struct TagAttributes {
    attrs: String,
    style: String,
}

impl TagAttributes {
    /// Create empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-built direct attribute fragment (with its leading space).
    pub fn push_raw(&mut self, fragment: &str) {
        self.attrs.push_str(fragment);
    }

    /// Translate a structure attribute into the matching buffer.
    pub fn push_attribute(&mut self, attr: &Attribute) {
        match target(&attr.kind) {
            Some(AttributeTarget::Style) => build_attribute(&attr.kind, &attr.value, &mut self.style),
            Some(AttributeTarget::Attribute) => {
                build_attribute(&attr.kind, &attr.value, &mut self.attrs)
            },
            None => {},
        }
    }

    /// Merge the buffers: direct attributes, then ` style='...'` if any.
    pub fn finish(self) -> String {
        let mut out = self.attrs;
        if !self.style.is_empty() {
            out.push_str(" style='");
            out.push_str(&self.style);
            out.push('\'');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(kind: AttributeKind, value: AttributeValue) -> String {
        let mut out = String::new();
        build_attribute(&kind, &value, &mut out);
        out
    }

    fn name(n: &str) -> AttributeValue {
        AttributeValue::name(n)
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            fragment(AttributeKind::Color, AttributeValue::Color([1.0, 0.0, 0.5])),
            "color: rgb(255,0,128);"
        );
        assert_eq!(
            fragment(AttributeKind::BackgroundColor, AttributeValue::Color([0.2, 0.4, 0.6])),
            "background-color: rgb(51,102,153);"
        );
    }

    #[test]
    fn test_color_components_are_clamped() {
        assert_eq!(
            fragment(AttributeKind::Color, AttributeValue::Color([1.5, -0.2, 0.999])),
            "color: rgb(255,0,255);"
        );
    }

    #[test]
    fn test_color_requires_rgb() {
        assert_eq!(fragment(AttributeKind::Color, name("Red")), "");
        assert_eq!(fragment(AttributeKind::Color, AttributeValue::Array(vec![0.5])), "");
    }

    #[test]
    fn test_list_numbering_vocabulary() {
        let expected = [
            ("None", "none"),
            ("Disc", "disc"),
            ("Circle", "circle"),
            ("Square", "square"),
            ("Decimal", "decimal"),
            ("UpperRoman", "upper-roman"),
            ("LowerRoman", "lower-roman"),
            ("UpperAlpha", "upper-latin"),
            ("LowerAlpha", "lower-latin"),
        ];
        for (pdf, css) in expected {
            assert_eq!(
                fragment(AttributeKind::ListNumbering, name(pdf)),
                format!("list-style-type: {};", css)
            );
        }
        assert_eq!(fragment(AttributeKind::ListNumbering, name("Hebrew")), "");
    }

    #[test]
    fn test_text_align_and_decoration() {
        assert_eq!(fragment(AttributeKind::TextAlign, name("Justify")), "text-align: justify;");
        assert_eq!(fragment(AttributeKind::TextAlign, name("Start")), "text-align: left;");
        assert_eq!(fragment(AttributeKind::TextAlign, name("End")), "text-align: right;");
        assert_eq!(fragment(AttributeKind::TextAlign, name("Center")), "text-align: center;");
        assert_eq!(fragment(AttributeKind::TextAlign, name("Middle")), "");

        assert_eq!(
            fragment(AttributeKind::TextDecorationType, name("Underline")),
            "text-decoration: underline;"
        );
        assert_eq!(
            fragment(AttributeKind::TextDecorationType, name("Overline")),
            "text-decoration: overline;"
        );
        assert_eq!(
            fragment(AttributeKind::TextDecorationType, name("LineThrough")),
            "text-decoration: line-through;"
        );
        assert_eq!(
            fragment(AttributeKind::TextDecorationType, name("None")),
            "text-decoration: none;"
        );
        assert_eq!(fragment(AttributeKind::TextDecorationType, AttributeValue::Number(1.0)), "");
    }

    #[test]
    fn test_spans() {
        assert_eq!(fragment(AttributeKind::RowSpan, AttributeValue::Number(3.0)), " rowspan='3'");
        assert_eq!(fragment(AttributeKind::ColSpan, AttributeValue::Number(3.0)), " colspan='3'");
        assert_eq!(fragment(AttributeKind::ColSpan, AttributeValue::Number(2.7)), " colspan='2'");
        assert_eq!(fragment(AttributeKind::RowSpan, AttributeValue::Number(0.0)), "");
        assert_eq!(fragment(AttributeKind::RowSpan, AttributeValue::Number(-2.0)), "");
        assert_eq!(fragment(AttributeKind::RowSpan, AttributeValue::Number(0.5)), "");
        assert_eq!(fragment(AttributeKind::RowSpan, name("Two")), "");
    }

    #[test]
    fn test_unknown_kind_is_ignored() {
        assert_eq!(
            fragment(AttributeKind::Other("Placement".to_string()), name("Block")),
            ""
        );
    }

    #[test]
    fn test_tag_attributes_merge_order() {
        let mut attrs = TagAttributes::new();
        attrs.push_attribute(&Attribute {
            kind: AttributeKind::TextAlign,
            value: name("Center"),
        });
        attrs.push_attribute(&Attribute {
            kind: AttributeKind::ColSpan,
            value: AttributeValue::Number(2.0),
        });
        attrs.push_attribute(&Attribute {
            kind: AttributeKind::Color,
            value: AttributeValue::Color([0.0, 0.0, 0.0]),
        });
        assert_eq!(
            attrs.finish(),
            " colspan='2' style='text-align: center;color: rgb(0,0,0);'"
        );
    }

    #[test]
    fn test_empty_tag_attributes() {
        assert_eq!(TagAttributes::new().finish(), "");
    }
}
