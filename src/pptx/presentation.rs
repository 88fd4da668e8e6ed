//! Presentation model and package assembly.

use crate::error::{Error, Result};
use crate::opc::constants::{content_type as ct, relationship_type as rt};
use crate::opc::{OpcPackage, PackURI, Part};
use crate::pptx::properties::DocumentProperties;
use crate::pptx::relmap::RelationshipMapper;
use crate::pptx::slide::Slide;
use crate::pptx::template;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// EMUs per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// Widescreen 16:9 slide size (13.333" x 7.5") in EMUs.
pub const WIDESCREEN: (i64, i64) = (12_192_000, 6_858_000);

/// A presentation being assembled for writing.
///
/// Built once by a deck assembler, then serialized with [`save`](Self::save).
#[derive(Debug)]
pub struct Presentation {
    /// Slides in the presentation
    slides: Vec<Slide>,
    /// Slide width in EMUs
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Heading font face, written into the theme part
    major_font: String,
    /// Body font face, written into the theme part
    minor_font: String,
    /// Document metadata
    properties: DocumentProperties,
}

impl Presentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 10 * EMU_PER_INCH,
            slide_height: 7_500 * EMU_PER_INCH / 1_000,
            major_font: "Calibri".to_string(),
            minor_font: "Calibri".to_string(),
            properties: DocumentProperties::new(),
        }
    }

    /// Add a new slide to the presentation.
    pub fn add_slide(&mut self) -> &mut Slide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(Slide::new(slide_id));
        self.slides.last_mut().expect("slide was just pushed")
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get the slides in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Logical slide titles, in slide order.
    pub fn outline(&self) -> impl Iterator<Item = Option<&str>> {
        self.slides.iter().map(|s| s.title())
    }

    /// Set the slide size in EMUs.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the heading and body font faces for the theme part.
    pub fn set_fonts(&mut self, major: &str, minor: &str) {
        self.major_font = major.to_string();
        self.minor_font = minor.to_string();
    }

    /// Get the document metadata.
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Get mutable document metadata.
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Serialize the presentation to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.build_package()?.to_bytes()?)
    }

    /// Serialize the presentation and write it to a file.
    ///
    /// The package is fully assembled in memory before the file is touched,
    /// so a failed save leaves no partial output behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Assemble the OPC package: static parts, slides, media, notes,
    /// relationships, and metadata.
    fn build_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();
        let has_notes = self.slides.iter().any(Slide::has_notes);

        let pres_uri = part_uri("/ppt/presentation.xml")?;
        let master_uri = part_uri("/ppt/slideMasters/slideMaster1.xml")?;
        let layout_uri = part_uri("/ppt/slideLayouts/slideLayout1.xml")?;
        let theme1_uri = part_uri("/ppt/theme/theme1.xml")?;
        let notes_master_uri = part_uri("/ppt/notesMasters/notesMaster1.xml")?;

        // Presentation part first; its relationships accumulate while the
        // dependent parts are added, and its content is generated last.
        let mut pres_part = Part::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());

        // Master, layout, and theme. rId1 on the presentation part must be
        // the slide master; the generated presentation.xml references it.
        pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);

        let mut master_part = Part::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml().into_bytes(),
        );
        master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master_part.relate_to(&theme1_uri, rt::THEME);
        pkg.add_part(master_part);

        let mut layout_part = Part::new(
            layout_uri.clone(),
            ct::PML_SLIDE_LAYOUT,
            template::slide_layout_xml().into_bytes(),
        );
        layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        pkg.add_part(layout_part);

        pkg.add_part(Part::new(
            theme1_uri.clone(),
            ct::OFC_THEME,
            template::theme_xml(&self.major_font, &self.minor_font).into_bytes(),
        ));

        // Notes master and its theme, only when some slide carries notes.
        if has_notes {
            let theme2_uri = part_uri("/ppt/theme/theme2.xml")?;
            let mut notes_master_part = Part::new(
                notes_master_uri.clone(),
                ct::PML_NOTES_MASTER,
                template::notes_master_xml().into_bytes(),
            );
            notes_master_part.relate_to(&theme2_uri, rt::THEME);
            pkg.add_part(notes_master_part);

            pkg.add_part(Part::new(
                theme2_uri,
                ct::OFC_THEME,
                template::theme_xml(&self.major_font, &self.minor_font).into_bytes(),
            ));
        }

        // Slides, their media, and their notes.
        let mut rel_mapper = RelationshipMapper::new();
        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        let mut media: Vec<Vec<u8>> = Vec::new();

        for (index, slide) in self.slides.iter().enumerate() {
            let slide_no = index + 1;
            let slide_uri = part_uri(&format!("/ppt/slides/slide{}.xml", slide_no))?;
            let mut slide_part = Part::new(slide_uri.clone(), ct::PML_SLIDE, Vec::new());
            slide_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);

            // Register images, de-duplicating identical content across the deck.
            for (picture_index, (data, format)) in slide.collect_images().into_iter().enumerate() {
                let (media_no, is_new) =
                    match media.iter().position(|existing| existing.as_slice() == data) {
                        Some(pos) => (pos + 1, false),
                        None => {
                            media.push(data.to_vec());
                            (media.len(), true)
                        }
                    };
                let media_uri = part_uri(&format!(
                    "/ppt/media/image{}.{}",
                    media_no,
                    format.extension()
                ))?;
                if is_new {
                    pkg.add_part(Part::new(
                        media_uri.clone(),
                        format.mime_type(),
                        data.to_vec(),
                    ));
                }
                let rid = slide_part.relate_to(&media_uri, rt::IMAGE);
                rel_mapper.add_image(index, picture_index, rid);
            }

            // Notes slide, when present.
            if let Some(notes_xml) = slide.generate_notes_xml() {
                let notes_uri = part_uri(&format!("/ppt/notesSlides/notesSlide{}.xml", slide_no))?;
                let mut notes_part =
                    Part::new(notes_uri.clone(), ct::PML_NOTES_SLIDE, notes_xml?.into_bytes());
                notes_part.relate_to(&notes_master_uri, rt::NOTES_MASTER);
                notes_part.relate_to(&slide_uri, rt::SLIDE);
                pkg.add_part(notes_part);

                slide_part.relate_to(&notes_uri, rt::NOTES_SLIDE);
            }

            let slide_xml = slide.to_xml_with_rels(index, &rel_mapper)?;
            slide_part.set_blob(slide_xml.into_bytes());
            pkg.add_part(slide_part);

            let rid = pres_part.relate_to(&slide_uri, rt::SLIDE);
            slide_rel_ids.push(rid);
        }

        let notes_master_rel_id =
            has_notes.then(|| pres_part.relate_to(&notes_master_uri, rt::NOTES_MASTER));

        // Presentation-level auxiliary parts.
        for (uri, content_type, blob, reltype) in [
            (
                part_uri("/ppt/presProps.xml")?,
                ct::PML_PRES_PROPS,
                template::pres_props_xml(),
                rt::PRES_PROPS,
            ),
            (
                part_uri("/ppt/viewProps.xml")?,
                ct::PML_VIEW_PROPS,
                template::view_props_xml(),
                rt::VIEW_PROPS,
            ),
            (
                part_uri("/ppt/tableStyles.xml")?,
                ct::PML_TABLE_STYLES,
                template::table_styles_xml(),
                rt::TABLE_STYLES,
            ),
        ] {
            pres_part.relate_to(&uri, reltype);
            pkg.add_part(Part::new(uri, content_type, blob.into_bytes()));
        }

        pres_part.relate_to(&theme1_uri, rt::THEME);

        // Now the presentation XML can reference the recorded rIds.
        let pres_xml =
            self.generate_presentation_xml(&slide_rel_ids, notes_master_rel_id.as_deref())?;
        pres_part.set_blob(pres_xml.into_bytes());
        pkg.add_part(pres_part);

        // Document metadata.
        let core_uri = part_uri("/docProps/core.xml")?;
        let app_uri = part_uri("/docProps/app.xml")?;
        pkg.add_part(Part::new(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_core_xml().into_bytes(),
        ));
        pkg.add_part(Part::new(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            self.properties.to_app_xml(self.slides.len()).into_bytes(),
        ));

        // Package-level relationships.
        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(pkg)
    }

    /// Generate presentation.xml content with actual relationship IDs.
    fn generate_presentation_xml(
        &self,
        slide_rel_ids: &[String],
        notes_master_rel_id: Option<&str>,
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if let Some(rid) = notes_master_rel_id {
            write!(
                xml,
                r#"<p:notesMasterIdLst><p:notesMasterId r:id="{}"/></p:notesMasterIdLst>"#,
                rid
            )
            .map_err(|e| Error::Xml(e.to_string()))?;
        }

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides.iter().enumerate() {
                let rel_id = slide_rel_ids
                    .get(index)
                    .ok_or_else(|| Error::Xml("Slide relationship IDs must be provided".into()))?;
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )
                .map_err(|e| Error::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(|e| Error::Xml(e.to_string()))?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);

        xml.push_str("</p:presentation>");
        Ok(xml)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a part URI, mapping malformed names onto the crate error type.
fn part_uri(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(Error::Xml)
}
