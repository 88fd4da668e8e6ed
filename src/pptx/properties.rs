//! Document metadata properties.
//!
//! Core properties are stored in `docProps/core.xml`, extended properties in
//! `docProps/app.xml`. Timestamps are supplied by the caller rather than read
//! from the clock, so the same input always serializes to the same package.

use crate::common::xml::escape_xml;
use chrono::{DateTime, Utc};

/// Document core properties (metadata).
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Company name, surfaced in app.xml
    pub company: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Document language
    pub language: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    /// Create a new empty document properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document subject.
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the document creator/author.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Set the company name.
    pub fn company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    /// Set the document language.
    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Pin both timestamps to a fixed instant.
    pub fn timestamps(mut self, at: DateTime<Utc>) -> Self {
        self.created = Some(at);
        self.modified = Some(at);
        self
    }

    /// Generate core.xml content for this properties set.
    pub fn to_core_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        if let Some(ref title) = self.title {
            xml.push_str("<dc:title>");
            xml.push_str(&escape_xml(title));
            xml.push_str("</dc:title>");
        }
        if let Some(ref subject) = self.subject {
            xml.push_str("<dc:subject>");
            xml.push_str(&escape_xml(subject));
            xml.push_str("</dc:subject>");
        }
        if let Some(ref creator) = self.creator {
            xml.push_str("<dc:creator>");
            xml.push_str(&escape_xml(creator));
            xml.push_str("</dc:creator>");
        }
        if let Some(ref last_modified_by) = self.last_modified_by {
            xml.push_str("<cp:lastModifiedBy>");
            xml.push_str(&escape_xml(last_modified_by));
            xml.push_str("</cp:lastModifiedBy>");
        }
        if let Some(ref language) = self.language {
            xml.push_str("<dc:language>");
            xml.push_str(&escape_xml(language));
            xml.push_str("</dc:language>");
        }
        if let Some(ref created) = self.created {
            xml.push_str("<dcterms:created xsi:type=\"dcterms:W3CDTF\">");
            xml.push_str(&created.format("%Y-%m-%dT%H:%M:%SZ").to_string());
            xml.push_str("</dcterms:created>");
        }
        if let Some(ref modified) = self.modified {
            xml.push_str("<dcterms:modified xsi:type=\"dcterms:W3CDTF\">");
            xml.push_str(&modified.format("%Y-%m-%dT%H:%M:%SZ").to_string());
            xml.push_str("</dcterms:modified>");
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }

    /// Generate app.xml (extended properties) content.
    pub fn to_app_xml(&self, slide_count: usize) -> String {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
        xml.push_str("<Application>deckforge</Application>");
        xml.push_str(&format!("<Slides>{}</Slides>", slide_count));
        xml.push_str("<PresentationFormat>Widescreen</PresentationFormat>");
        if let Some(ref company) = self.company {
            xml.push_str("<Company>");
            xml.push_str(&escape_xml(company));
            xml.push_str("</Company>");
        }
        xml.push_str("</Properties>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn core_xml_carries_metadata() {
        let at = Utc.with_ymd_and_hms(2026, 1, 20, 0, 0, 0).unwrap();
        let props = DocumentProperties::new()
            .title("Technical Implementation")
            .creator("Activity KPI Dashboard")
            .subject("Power BI + SQL Server")
            .timestamps(at);

        let xml = props.to_core_xml();
        assert!(xml.contains("<dc:title>Technical Implementation</dc:title>"));
        assert!(xml.contains("<dc:creator>Activity KPI Dashboard</dc:creator>"));
        assert!(xml.contains("<dcterms:created xsi:type=\"dcterms:W3CDTF\">2026-01-20T00:00:00Z"));
    }

    #[test]
    fn app_xml_reports_slide_count() {
        let xml = DocumentProperties::new().company(" ").to_app_xml(9);
        assert!(xml.contains("<Slides>9</Slides>"));
        assert!(xml.contains("<Company> </Company>"));
    }

    #[test]
    fn metadata_is_escaped() {
        let props = DocumentProperties::new().title("KPIs & <Insights>");
        assert!(props.to_core_xml().contains("KPIs &amp; &lt;Insights&gt;"));
    }
}
