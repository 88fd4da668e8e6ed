//! Shape types for slide composition.
//!
//! Coordinates and extents are in EMUs (914 400 EMU = 1 inch). Shapes are
//! write-once: constructed with their full styling and serialized to
//! DrawingML when the presentation is saved.

use crate::common::xml::escape_xml;
use crate::error::Result;
use crate::pptx::format::ImageFormat;
use crate::pptx::text::TextBody;
use std::fmt::Write as FmtWrite;

/// EMUs per point, used for line widths and effect distances.
const EMU_PER_POINT: f64 = 12700.0;

/// Solid outline styling for a shape or connector.
#[derive(Debug, Clone)]
pub struct Outline {
    /// Line color in hex RGB
    pub color: String,
    /// Line width in points
    pub width_pt: f64,
}

impl Outline {
    /// A one-point outline in the given color.
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
            width_pt: 1.0,
        }
    }

    /// Builder method: set the line width in points.
    pub fn width(mut self, width_pt: f64) -> Self {
        self.width_pt = width_pt;
        self
    }

    fn write_xml(&self, xml: &mut String, arrow_end: bool) -> Result<()> {
        write!(xml, r#"<a:ln w="{}">"#, (self.width_pt * EMU_PER_POINT) as i64)?;
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            self.color
        )?;
        if arrow_end {
            xml.push_str(r#"<a:headEnd type="none"/><a:tailEnd type="triangle"/>"#);
        }
        xml.push_str("</a:ln>");
        Ok(())
    }
}

/// Outer drop shadow styling.
#[derive(Debug, Clone)]
pub struct OuterShadow {
    /// Shadow color in hex RGB
    pub color: String,
    /// Opacity in [0, 1]
    pub opacity: f64,
    /// Light angle in degrees
    pub angle_deg: f64,
    /// Blur radius in points
    pub blur_pt: f64,
    /// Shadow offset in points
    pub offset_pt: f64,
}

impl OuterShadow {
    /// Soft black shadow with the given opacity, angle, blur, and offset.
    pub fn soft(opacity: f64, angle_deg: f64, blur_pt: f64, offset_pt: f64) -> Self {
        Self {
            color: "000000".to_string(),
            opacity,
            angle_deg,
            blur_pt,
            offset_pt,
        }
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<a:effectLst><a:outerShdw blurRad="{}" dist="{}" dir="{}" rotWithShape="0"><a:srgbClr val="{}"><a:alpha val="{}"/></a:srgbClr></a:outerShdw></a:effectLst>"#,
            (self.blur_pt * EMU_PER_POINT) as i64,
            (self.offset_pt * EMU_PER_POINT) as i64,
            (self.angle_deg * 60_000.0) as i64,
            self.color,
            (self.opacity * 100_000.0).round() as i64,
        )?;
        Ok(())
    }
}

/// Fill, outline, and shadow styling for rectangle shapes.
#[derive(Debug, Clone, Default)]
pub struct ShapeStyle {
    /// Solid fill color in hex RGB; None renders no fill
    pub fill: Option<String>,
    /// Outline; None renders no outline
    pub outline: Option<Outline>,
    /// Outer shadow, if any
    pub shadow: Option<OuterShadow>,
}

impl ShapeStyle {
    /// A filled, outlined card style.
    pub fn card(fill: &str, line: &str) -> Self {
        Self {
            fill: Some(fill.to_string()),
            outline: Some(Outline::new(line)),
            shadow: None,
        }
    }

    /// A solid fill with a matching outline (used for accent strips).
    pub fn solid(color: &str) -> Self {
        Self {
            fill: Some(color.to_string()),
            outline: Some(Outline::new(color)),
            shadow: None,
        }
    }

    /// Builder method: attach an outer shadow.
    pub fn shadow(mut self, shadow: OuterShadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    fn write_fill_line_effects(&self, xml: &mut String) -> Result<()> {
        match &self.fill {
            Some(color) => write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color
            )?,
            None => xml.push_str("<a:noFill/>"),
        }
        if let Some(outline) = &self.outline {
            outline.write_xml(xml, false)?;
        }
        if let Some(shadow) = &self.shadow {
            shadow.write_xml(xml)?;
        }
        Ok(())
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    /// Shape kind and geometry
    pub(crate) kind: ShapeKind,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeKind {
    TextBox {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        body: TextBody,
    },
    Rect {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        style: ShapeStyle,
    },
    RoundRect {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        /// Corner radius in EMUs
        radius: i64,
        style: ShapeStyle,
    },
    Connector {
        x: i64,
        y: i64,
        /// May be negative; serialized as a flipped extent
        width: i64,
        /// May be negative; serialized as a flipped extent
        height: i64,
        outline: Outline,
        arrow_end: bool,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: String,
    },
}

impl Shape {
    pub(crate) fn new_text_box(
        shape_id: u32,
        body: TextBody,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::TextBox {
                x,
                y,
                width,
                height,
                body,
            },
        }
    }

    pub(crate) fn new_rectangle(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        style: ShapeStyle,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::Rect {
                x,
                y,
                width,
                height,
                style,
            },
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_round_rect(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        radius: i64,
        style: ShapeStyle,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::RoundRect {
                x,
                y,
                width,
                height,
                radius,
                style,
            },
        }
    }

    pub(crate) fn new_connector(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        outline: Outline,
        arrow_end: bool,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::Connector {
                x,
                y,
                width,
                height,
                outline,
                arrow_end,
            },
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_picture(
        shape_id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::Picture {
                data,
                format,
                x,
                y,
                width,
                height,
                description,
            },
        }
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.kind {
            ShapeKind::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    /// Get the text body if this shape is a text box.
    pub(crate) fn text_body(&self) -> Option<&TextBody> {
        match &self.kind {
            ShapeKind::TextBox { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Solid colors this shape renders with (fill, outline, text, shadow).
    pub fn colors(&self) -> Vec<&str> {
        let mut colors = Vec::new();
        match &self.kind {
            ShapeKind::TextBox { body, .. } => {
                if let Some(color) = &body.format.color {
                    colors.push(color.as_str());
                }
            }
            ShapeKind::Rect { style, .. } | ShapeKind::RoundRect { style, .. } => {
                if let Some(fill) = &style.fill {
                    colors.push(fill.as_str());
                }
                if let Some(outline) = &style.outline {
                    colors.push(outline.color.as_str());
                }
                if let Some(shadow) = &style.shadow {
                    colors.push(shadow.color.as_str());
                }
            }
            ShapeKind::Connector { outline, .. } => colors.push(outline.color.as_str()),
            ShapeKind::Picture { .. } => {}
        }
        colors
    }

    /// Generate DrawingML for this shape.
    ///
    /// For pictures, `rel_id` is the relationship ID of the embedded image
    /// part within the owning slide.
    pub(crate) fn write_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        match &self.kind {
            ShapeKind::TextBox {
                x,
                y,
                width,
                height,
                body,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                body.write_xml(xml)?;
                xml.push_str("</p:sp>");
            }
            ShapeKind::Rect {
                x,
                y,
                width,
                height,
                style,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                style.write_fill_line_effects(xml)?;
                xml.push_str("</p:spPr></p:sp>");
            }
            ShapeKind::RoundRect {
                x,
                y,
                width,
                height,
                radius,
                style,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rounded Rectangle {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                // adj is the corner radius as a fraction of the shorter side,
                // expressed in 1/100000ths and capped at the preset maximum.
                let shorter = (*width).min(*height).max(1);
                let adj = (*radius * 100_000 / shorter).clamp(0, 50_000);
                write!(
                    xml,
                    r#"<a:prstGeom prst="roundRect"><a:avLst><a:gd name="adj" fmla="val {}"/></a:avLst></a:prstGeom>"#,
                    adj
                )?;
                style.write_fill_line_effects(xml)?;
                xml.push_str("</p:spPr></p:sp>");
            }
            ShapeKind::Connector {
                x,
                y,
                width,
                height,
                outline,
                arrow_end,
            } => {
                xml.push_str("<p:cxnSp><p:nvCxnSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Connector {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvCxnSpPr/><p:nvPr/></p:nvCxnSpPr>");

                xml.push_str("<p:spPr>");
                // Negative extents flip the connector around its bounding box.
                let (off_x, ext_x, flip_h) = normalize_extent(*x, *width);
                let (off_y, ext_y, flip_v) = normalize_extent(*y, *height);
                xml.push_str("<a:xfrm");
                if flip_h {
                    xml.push_str(r#" flipH="1""#);
                }
                if flip_v {
                    xml.push_str(r#" flipV="1""#);
                }
                write!(
                    xml,
                    r#"><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
                    off_x, off_y, ext_x, ext_y
                )?;
                xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
                outline.write_xml(xml, *arrow_end)?;
                xml.push_str("</p:spPr></p:cxnSp>");
            }
            ShapeKind::Picture {
                data: _,
                format: _,
                x,
                y,
                width,
                height,
                description,
            } => {
                xml.push_str("<p:pic><p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
                    self.shape_id,
                    self.shape_id,
                    escape_xml(description)
                )?;
                xml.push_str("<p:cNvPicPr/><p:nvPr/></p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                let rid = rel_id.unwrap_or("rIdImagePlaceholder");
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rid)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch></p:blipFill>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr></p:pic>");
            }
        }
        Ok(())
    }
}

fn write_xfrm(xml: &mut String, x: i64, y: i64, width: i64, height: i64) -> Result<()> {
    write!(
        xml,
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        x, y, width, height
    )?;
    Ok(())
}

/// Convert a possibly-negative extent into (offset, extent, flipped).
fn normalize_extent(offset: i64, extent: i64) -> (i64, i64, bool) {
    if extent < 0 {
        (offset + extent, -extent, true)
    } else {
        (offset, extent, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::format::TextFormat;

    #[test]
    fn text_box_renders_body() {
        let body = TextBody::from_text("Quarterly KPIs", TextFormat::new("Calibri", 20.0, "0B1B3A"));
        let shape = Shape::new_text_box(3, body, 0, 0, 914_400, 457_200);
        let mut xml = String::new();
        shape.write_xml(&mut xml, None).unwrap();
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains("<a:t>Quarterly KPIs</a:t>"));
        assert!(xml.contains("<a:noFill/>"));
    }

    #[test]
    fn round_rect_adj_scales_with_shorter_side() {
        let style = ShapeStyle::card("FFFFFF", "E5E7EB");
        // 1" x 0.5" box with 0.1" radius: adj = 91440 * 100000 / 457200 = 20000
        let shape = Shape::new_round_rect(3, 0, 0, 914_400, 457_200, 91_440, style);
        let mut xml = String::new();
        shape.write_xml(&mut xml, None).unwrap();
        assert!(xml.contains(r#"<a:gd name="adj" fmla="val 20000"/>"#));
    }

    #[test]
    fn shadow_converts_units() {
        let style = ShapeStyle::card("FFFFFF", "E5E7EB").shadow(OuterShadow::soft(0.18, 45.0, 3.0, 2.0));
        let shape = Shape::new_rectangle(3, 0, 0, 914_400, 914_400, style);
        let mut xml = String::new();
        shape.write_xml(&mut xml, None).unwrap();
        assert!(xml.contains(r#"blurRad="38100""#));
        assert!(xml.contains(r#"dist="25400""#));
        assert!(xml.contains(r#"dir="2700000""#));
        assert!(xml.contains(r#"<a:alpha val="18000"/>"#));
    }

    #[test]
    fn connector_flips_negative_height() {
        let outline = Outline::new("6B7280").width(2.0);
        let shape = Shape::new_connector(4, 1_000, 5_000, 2_000, -3_000, outline, true);
        let mut xml = String::new();
        shape.write_xml(&mut xml, None).unwrap();
        assert!(xml.contains(r#"flipV="1""#));
        assert!(xml.contains(r#"<a:off x="1000" y="2000"/>"#));
        assert!(xml.contains(r#"<a:ext cx="2000" cy="3000"/>"#));
        assert!(xml.contains(r#"<a:tailEnd type="triangle"/>"#));
    }

    #[test]
    fn picture_embeds_relationship_id() {
        let shape = Shape::new_picture(
            5,
            vec![0x89, 0x50, 0x4E, 0x47],
            ImageFormat::Png,
            0,
            0,
            914_400,
            914_400,
            "dashboard screenshot".to_string(),
        );
        let mut xml = String::new();
        shape.write_xml(&mut xml, Some("rId7")).unwrap();
        assert!(xml.contains(r#"<a:blip r:embed="rId7"/>"#));
        assert!(xml.contains(r#"descr="dashboard screenshot""#));
    }

    #[test]
    fn colors_reports_all_styling() {
        let style = ShapeStyle::card("FFFFFF", "E5E7EB").shadow(OuterShadow::soft(0.1, 45.0, 2.0, 1.0));
        let shape = Shape::new_rectangle(3, 0, 0, 1, 1, style);
        let colors = shape.colors();
        assert!(colors.contains(&"FFFFFF"));
        assert!(colors.contains(&"E5E7EB"));
        assert!(colors.contains(&"000000"));
    }
}
