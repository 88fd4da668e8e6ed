/// Open Packaging Convention (OPC) objects related to package parts.
///
/// Parts are the fundamental units of content in an OPC package. Each part
/// has a unique partname (PackURI), a content type, a binary blob, and may
/// have relationships to other parts.
use crate::opc::packuri::PackURI;
use crate::opc::rel::Relationships;

/// A part in an OPC package, holding its serialized content.
#[derive(Debug)]
pub struct Part {
    /// The partname (URI) of this part
    partname: PackURI,

    /// The content type of this part
    content_type: String,

    /// The binary content of this part
    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl Part {
    /// Create a new part.
    ///
    /// # Arguments
    /// * `partname` - The partname (URI) of this part
    /// * `content_type` - The content type of this part
    /// * `blob` - The binary content of this part
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels: Relationships::new(),
        }
    }

    /// Get the partname of this part.
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Get the content type of this part.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the binary content of this part.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the binary content of this part.
    ///
    /// Used when a part's relationships must exist before its content can be
    /// generated (the content references the rIds).
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    /// Get the relationships for this part.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a relationship to another part.
    ///
    /// The target reference is computed relative to this part's base URI. If
    /// a relationship of the given type to the target already exists, its
    /// rId is returned; otherwise a new relationship is created.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname.base_uri());
        self.rels.get_or_add(reltype, &target_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relate_to_assigns_r_ids_with_relative_targets() {
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        let mut part = Part::new(partname, "application/xml", Vec::new());

        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        let rid = part.relate_to(&slide, "type/slide");
        assert_eq!(rid, "rId1");
        assert_eq!(part.rels().len(), 1);
        assert_eq!(
            part.rels().get("rId1").unwrap().target_ref(),
            "slides/slide1.xml"
        );

        // Same target and type returns the same rId.
        assert_eq!(part.relate_to(&slide, "type/slide"), "rId1");
    }

    #[test]
    fn relate_to_walks_up_directories() {
        let partname = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        let mut part = Part::new(partname, "application/xml", Vec::new());

        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        part.relate_to(&layout, "type/slideLayout");
        assert_eq!(
            part.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );
    }

    #[test]
    fn set_blob_replaces_content() {
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        let mut part = Part::new(partname, "application/xml", Vec::new());
        part.set_blob(b"<p:presentation/>".to_vec());
        assert_eq!(part.blob(), b"<p:presentation/>");
    }
}
