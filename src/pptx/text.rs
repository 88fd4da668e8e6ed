//! Text body model for slide shapes.
//!
//! A text body is a stack of paragraphs sharing one [`TextFormat`]. This
//! mirrors how deck content is authored: each text block on a slide has a
//! single style, and multi-line strings split into paragraphs.

use crate::common::xml::escape_xml;
use crate::error::Result;
use crate::pptx::format::TextFormat;
use std::fmt::Write as FmtWrite;

/// EMUs per point, used for bullet indents.
const EMU_PER_POINT: f64 = 12700.0;

/// Vertical anchoring of text within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Anchor text to the top of the box
    #[default]
    Top,
    /// Center text vertically
    Middle,
}

/// Hanging-bullet configuration for a paragraph.
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    /// Left margin of the bulleted text, in points
    pub indent_pt: f64,
    /// Hanging indent (bullet overhang), in points
    pub hanging_pt: f64,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            indent_pt: 18.0,
            hanging_pt: 6.0,
        }
    }
}

/// A single paragraph within a text body.
#[derive(Debug, Clone)]
pub struct Paragraph {
    /// Paragraph text; empty string renders an empty paragraph
    pub text: String,
    /// Bullet configuration, if the paragraph is bulleted
    pub bullet: Option<Bullet>,
}

/// A text body: paragraphs plus shared formatting.
#[derive(Debug, Clone)]
pub struct TextBody {
    /// Paragraphs in order
    pub paragraphs: Vec<Paragraph>,
    /// Formatting applied to every run
    pub format: TextFormat,
    /// Vertical anchor within the box
    pub anchor: Anchor,
    /// Line spacing multiple (e.g. 1.15); None for single spacing
    pub line_spacing: Option<f64>,
}

impl TextBody {
    /// Build a body from a plain string, splitting on newlines.
    pub fn from_text(text: &str, format: TextFormat) -> Self {
        let paragraphs = text
            .split('\n')
            .map(|line| Paragraph {
                text: line.to_string(),
                bullet: None,
            })
            .collect();
        Self {
            paragraphs,
            format,
            anchor: Anchor::Top,
            line_spacing: None,
        }
    }

    /// Build a bulleted body, one bullet per item.
    pub fn bulleted<S: AsRef<str>>(items: &[S], format: TextFormat) -> Self {
        let paragraphs = items
            .iter()
            .map(|item| Paragraph {
                text: item.as_ref().to_string(),
                bullet: Some(Bullet::default()),
            })
            .collect();
        Self {
            paragraphs,
            format,
            anchor: Anchor::Top,
            line_spacing: None,
        }
    }

    /// Builder method: set the vertical anchor.
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Builder method: set the line spacing multiple.
    pub fn line_spacing(mut self, multiple: f64) -> Self {
        self.line_spacing = Some(multiple);
        self
    }

    /// Concatenated paragraph text, newline-separated.
    pub fn plain_text(&self) -> String {
        let lines: Vec<&str> = self.paragraphs.iter().map(|p| p.text.as_str()).collect();
        lines.join("\n")
    }

    /// Write this body as a `<p:txBody>` element.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        let anchor = match self.anchor {
            Anchor::Top => "t",
            Anchor::Middle => "ctr",
        };
        write!(xml, r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="{}"/>"#, anchor)?;
        xml.push_str("<a:lstStyle/>");

        for para in &self.paragraphs {
            self.write_paragraph(xml, para)?;
        }

        xml.push_str("</p:txBody>");
        Ok(())
    }

    fn write_paragraph(&self, xml: &mut String, para: &Paragraph) -> Result<()> {
        xml.push_str("<a:p>");

        // Paragraph properties: spacing and bullet settings.
        if self.line_spacing.is_some() || para.bullet.is_some() {
            xml.push_str("<a:pPr");
            if let Some(bullet) = &para.bullet {
                let mar_l = (bullet.indent_pt * EMU_PER_POINT) as i64;
                let indent = -(bullet.hanging_pt * EMU_PER_POINT) as i64;
                write!(xml, r#" marL="{}" indent="{}""#, mar_l, indent)?;
            }
            xml.push('>');
            if let Some(multiple) = self.line_spacing {
                write!(
                    xml,
                    r#"<a:lnSpc><a:spcPct val="{}"/></a:lnSpc>"#,
                    (multiple * 100_000.0).round() as i64
                )?;
            }
            match &para.bullet {
                Some(_) => xml.push_str(r#"<a:buChar char="•"/>"#),
                None => xml.push_str("<a:buNone/>"),
            }
            xml.push_str("</a:pPr>");
        }

        if !para.text.is_empty() {
            xml.push_str("<a:r>");
            self.write_run_properties(xml)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(&para.text))?;
            xml.push_str("</a:r>");
        }

        xml.push_str("</a:p>");
        Ok(())
    }

    fn write_run_properties(&self, xml: &mut String) -> Result<()> {
        xml.push_str(r#"<a:rPr lang="en-US" dirty="0""#);

        if let Some(size) = self.format.size {
            write!(xml, r#" sz="{}""#, (size * 100.0).round() as u32)?;
        }
        if self.format.bold {
            xml.push_str(r#" b="1""#);
        }
        if self.format.italic {
            xml.push_str(r#" i="1""#);
        }
        xml.push('>');

        if let Some(ref color) = self.format.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color
            )?;
        }
        if let Some(ref font) = self.format.font {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
        }

        xml.push_str("</a:rPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt() -> TextFormat {
        TextFormat::new("Calibri", 12.5, "374151")
    }

    #[test]
    fn splits_newlines_into_paragraphs() {
        let body = TextBody::from_text("line one\nline two", fmt());
        assert_eq!(body.paragraphs.len(), 2);
        assert_eq!(body.plain_text(), "line one\nline two");
    }

    #[test]
    fn renders_runs_with_format() {
        let body = TextBody::from_text("hello", fmt());
        let mut xml = String::new();
        body.write_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"sz="1250""#));
        assert!(xml.contains(r#"<a:srgbClr val="374151"/>"#));
        assert!(xml.contains(r#"<a:latin typeface="Calibri"/>"#));
        assert!(xml.contains("<a:t>hello</a:t>"));
    }

    #[test]
    fn bulleted_paragraphs_carry_hanging_indent() {
        let body = TextBody::bulleted(&["first", "second"], fmt());
        let mut xml = String::new();
        body.write_xml(&mut xml).unwrap();
        assert_eq!(xml.matches("<a:buChar").count(), 2);
        assert!(xml.contains(r#"marL="228600""#));
        assert!(xml.contains(r#"indent="-76200""#));
    }

    #[test]
    fn line_spacing_is_percentage() {
        let body = TextBody::from_text("x", fmt()).line_spacing(1.15);
        let mut xml = String::new();
        body.write_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<a:spcPct val="115000"/>"#));
    }

    #[test]
    fn text_is_escaped() {
        let body = TextBody::from_text("A & B <ok>", fmt());
        let mut xml = String::new();
        body.write_xml(&mut xml).unwrap();
        assert!(xml.contains("A &amp; B &lt;ok&gt;"));
    }

    #[test]
    fn empty_line_renders_empty_paragraph() {
        let body = TextBody::from_text("a\n\nb", fmt());
        let mut xml = String::new();
        body.write_xml(&mut xml).unwrap();
        assert_eq!(xml.matches("<a:p>").count(), 3);
        assert_eq!(xml.matches("<a:r>").count(), 2);
    }
}
