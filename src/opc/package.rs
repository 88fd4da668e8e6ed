/// In-memory representation of an OPC package under construction.
///
/// An `OpcPackage` collects parts and package-level relationships, then hands
/// itself to [`PackageWriter`](crate::opc::pkgwriter::PackageWriter) for
/// serialization. Parts are kept in insertion order so the resulting archive
/// is byte-for-byte reproducible.
use crate::opc::error::{OpcError, Result};
use crate::opc::packuri::PackURI;
use crate::opc::part::Part;
use crate::opc::pkgwriter::PackageWriter;
use crate::opc::rel::Relationships;
use std::path::Path;

/// An OPC package being assembled for writing.
#[derive(Debug, Default)]
pub struct OpcPackage {
    /// All parts, in write order
    parts: Vec<Part>,

    /// Package-level relationships (serialized to /_rels/.rels)
    rels: Relationships,
}

impl OpcPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part to the package.
    ///
    /// Returns a mutable reference to the stored part so callers can attach
    /// relationships after insertion.
    pub fn add_part(&mut self, part: Part) -> &mut Part {
        self.parts.push(part);
        self.parts.last_mut().expect("part was just pushed")
    }

    /// Get a mutable reference to a part by its partname.
    pub fn part_mut(&mut self, partname: &PackURI) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.partname() == partname)
    }

    /// Get an iterator over all parts.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Get the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a package-level relationship.
    ///
    /// # Arguments
    /// * `target` - Target part; the reference is relative to the root
    /// * `reltype` - Relationship type URI
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target.membername())
    }

    /// Serialize this package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Serialize this package and write it to a file.
    ///
    /// The package is fully serialized in memory first, so a failure leaves
    /// no partial file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes).map_err(OpcError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::constants::content_type as ct;

    #[test]
    fn parts_keep_insertion_order() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(Part::new(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
            b"<p/>".to_vec(),
        ));
        pkg.add_part(Part::new(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE,
            b"<s/>".to_vec(),
        ));

        let names: Vec<&str> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(names, ["/ppt/presentation.xml", "/ppt/slides/slide1.xml"]);
    }

    #[test]
    fn part_mut_finds_by_partname() {
        let mut pkg = OpcPackage::new();
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.add_part(Part::new(uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new()));

        pkg.part_mut(&uri).unwrap().set_blob(b"<p/>".to_vec());
        assert_eq!(pkg.part_mut(&uri).unwrap().blob(), b"<p/>");
    }
}
