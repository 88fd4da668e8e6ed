//! Slide model and XML generation.

use crate::common::xml::escape_xml;
use crate::error::{Error, Result};
use crate::pptx::format::ImageFormat;
use crate::pptx::relmap::RelationshipMapper;
use crate::pptx::shape::{Outline, Shape, ShapeKind, ShapeStyle};
use crate::pptx::text::TextBody;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// A slide in a presentation.
///
/// Slides collect shapes in z-order, plus an optional solid background color
/// and speaker notes. The logical title is metadata recorded by the
/// composition helpers; it is exposed through
/// [`Presentation::outline`](crate::pptx::Presentation::outline) and not
/// rendered as a separate placeholder.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID (unique identifier within the presentation)
    pub(crate) slide_id: u32,
    /// Logical slide title
    pub(crate) title: Option<String>,
    /// Solid background color in hex RGB
    pub(crate) background: Option<String>,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<Shape>,
    /// Speaker notes for the slide
    pub(crate) notes: Option<String>,
}

impl Slide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            title: None,
            background: None,
            shapes: Vec::new(),
            notes: None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Record the logical slide title.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Get the logical slide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set a solid background color (hex RGB).
    pub fn set_background(&mut self, color: &str) {
        self.background = Some(color.to_string());
    }

    /// Set speaker notes for the slide.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = Some(notes.to_string());
    }

    /// Get the speaker notes for the slide.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Check if the slide has speaker notes.
    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    fn next_shape_id(&self) -> u32 {
        // IDs: 1 is reserved for the group shape, user shapes start at 2.
        (self.shapes.len() + 2) as u32
    }

    /// Add a text box to the slide. Position and size are in EMUs.
    pub fn add_text_box(&mut self, body: TextBody, x: i64, y: i64, width: i64, height: i64) {
        let shape = Shape::new_text_box(self.next_shape_id(), body, x, y, width, height);
        self.shapes.push(shape);
    }

    /// Add a rectangle to the slide.
    pub fn add_rectangle(&mut self, x: i64, y: i64, width: i64, height: i64, style: ShapeStyle) {
        let shape = Shape::new_rectangle(self.next_shape_id(), x, y, width, height, style);
        self.shapes.push(shape);
    }

    /// Add a rounded rectangle to the slide.
    ///
    /// `radius` is the corner radius in EMUs.
    pub fn add_round_rect(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        radius: i64,
        style: ShapeStyle,
    ) {
        let shape =
            Shape::new_round_rect(self.next_shape_id(), x, y, width, height, radius, style);
        self.shapes.push(shape);
    }

    /// Add a straight connector to the slide.
    ///
    /// Width and height may be negative to point the connector up or left;
    /// `arrow_end` draws a triangle arrowhead at the far end.
    pub fn add_connector(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        outline: Outline,
        arrow_end: bool,
    ) {
        let shape =
            Shape::new_connector(self.next_shape_id(), x, y, width, height, outline, arrow_end);
        self.shapes.push(shape);
    }

    /// Add a picture to the slide from a file.
    ///
    /// Fails with [`Error::AssetNotFound`] when the file does not exist, and
    /// with [`Error::InvalidFormat`] when the bytes are not a recognized
    /// image format.
    pub fn add_picture<P: AsRef<Path>>(
        &mut self,
        image_path: P,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Result<()> {
        let path = image_path.as_ref();
        if !path.exists() {
            return Err(Error::AssetNotFound(path.display().to_string()));
        }
        let data = std::fs::read(path)?;
        let description = format!("Picture from {}", path.display());
        self.add_picture_from_bytes(data, x, y, width, height, Some(description))
    }

    /// Add a picture to the slide from bytes.
    pub fn add_picture_from_bytes(
        &mut self,
        data: Vec<u8>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: Option<String>,
    ) -> Result<()> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| Error::InvalidFormat("Unknown image format".to_string()))?;

        let desc = description.unwrap_or_else(|| "Picture".to_string());
        let shape = Shape::new_picture(
            self.next_shape_id(),
            data,
            format,
            x,
            y,
            width,
            height,
            desc,
        );
        self.shapes.push(shape);
        Ok(())
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Get the shapes on the slide.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// All text on the slide, one string per text box.
    pub fn texts(&self) -> Vec<String> {
        self.shapes
            .iter()
            .filter_map(|s| s.text_body())
            .map(|body| body.plain_text())
            .collect()
    }

    /// Collect image data for all pictures on the slide, in shape order.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes.iter().filter_map(|s| s.image_data()).collect()
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    ///
    /// # Arguments
    /// * `slide_index` - The index of this slide (used to look up rIds)
    /// * `rel_mapper` - The relationship mapper populated during save
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // Background must come before spTree.
        if let Some(ref color) = self.background {
            write!(
                xml,
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color
            )
            .map_err(|e| Error::Xml(e.to_string()))?;
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        let mut picture_counter = 0;
        for shape in &self.shapes {
            let rel_id = match &shape.kind {
                ShapeKind::Picture { .. } => {
                    let rid = rel_mapper.image_id(slide_index, picture_counter);
                    picture_counter += 1;
                    rid
                }
                _ => None,
            };
            shape.write_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate notes slide XML content, if the slide has notes.
    pub(crate) fn generate_notes_xml(&self) -> Option<Result<String>> {
        let notes_text = self.notes.as_ref()?;

        let mut xml = String::with_capacity(2048);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:notes xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>");
        xml.push_str("<a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        // Notes body placeholder.
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Notes Placeholder"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str("<p:nvPr><p:ph type=\"body\" idx=\"1\"/></p:nvPr>");
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");
        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");

        // One paragraph per notes line.
        for line in notes_text.split('\n') {
            xml.push_str("<a:p>");
            if !line.is_empty() {
                xml.push_str("<a:r>");
                xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"/>");
                if let Err(e) = write!(xml, "<a:t>{}</a:t>", escape_xml(line)) {
                    return Some(Err(Error::Xml(e.to_string())));
                }
                xml.push_str("</a:r>");
            }
            xml.push_str("</a:p>");
        }

        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");
        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:notes>");

        Some(Ok(xml))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::format::TextFormat;

    const PNG_STUB: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn slide() -> Slide {
        Slide::new(256)
    }

    #[test]
    fn background_renders_before_shape_tree() {
        let mut s = slide();
        s.set_background("F8FAFC");
        let xml = s
            .to_xml_with_rels(0, &RelationshipMapper::new())
            .unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="F8FAFC"/>"#));
    }

    #[test]
    fn shape_ids_are_sequential_from_two() {
        let mut s = slide();
        s.add_rectangle(0, 0, 10, 10, ShapeStyle::solid("1F6FEB"));
        s.add_text_box(
            TextBody::from_text("x", TextFormat::default()),
            0,
            0,
            10,
            10,
        );
        let xml = s
            .to_xml_with_rels(0, &RelationshipMapper::new())
            .unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 2"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="TextBox 3"/>"#));
    }

    #[test]
    fn pictures_take_rel_ids_from_mapper() {
        let mut s = slide();
        s.add_picture_from_bytes(PNG_STUB.to_vec(), 0, 0, 10, 10, None)
            .unwrap();
        let mut mapper = RelationshipMapper::new();
        mapper.add_image(0, 0, "rId5".to_string());
        let xml = s.to_xml_with_rels(0, &mapper).unwrap();
        assert!(xml.contains(r#"<a:blip r:embed="rId5"/>"#));
    }

    #[test]
    fn missing_picture_file_is_an_error() {
        let mut s = slide();
        let err = s
            .add_picture("/nonexistent/YTD.png", 0, 0, 10, 10)
            .unwrap_err();
        assert!(matches!(err, Error::AssetNotFound(_)));
        assert_eq!(s.shape_count(), 0);
    }

    #[test]
    fn unknown_image_bytes_are_rejected() {
        let mut s = slide();
        let err = s
            .add_picture_from_bytes(b"plain text".to_vec(), 0, 0, 10, 10, None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn notes_render_one_paragraph_per_line() {
        let mut s = slide();
        s.set_notes("[Sources]\n- https://example.com/date-tables\n[/Sources]");
        let xml = s.generate_notes_xml().unwrap().unwrap();
        assert_eq!(xml.matches("<a:p>").count(), 3);
        assert!(xml.contains("<a:t>[Sources]</a:t>"));
    }

    #[test]
    fn no_notes_no_notes_xml() {
        assert!(slide().generate_notes_xml().is_none());
    }

    #[test]
    fn texts_reports_text_boxes_only() {
        let mut s = slide();
        s.add_rectangle(0, 0, 10, 10, ShapeStyle::solid("FFFFFF"));
        s.add_text_box(
            TextBody::from_text("KPI cards", TextFormat::default()),
            0,
            0,
            10,
            10,
        );
        assert_eq!(s.texts(), vec!["KPI cards".to_string()]);
    }
}
