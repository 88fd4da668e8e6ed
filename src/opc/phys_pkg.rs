//! Provides the physical writer for OPC packages (ZIP archives).
//!
//! Handles the low-level writing of parts to a ZIP archive with Deflate
//! compression. The archive is assembled in memory; timestamps are left at
//! the `zip` crate's fixed default so identical inputs produce identical
//! archives.

use crate::opc::error::{OpcError, Result};
use crate::opc::packuri::PackURI;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Physical package writer for creating OPC packages.
pub struct PhysPkgWriter {
    /// The underlying ZIP archive writer
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the package with Deflate compression.
    ///
    /// # Arguments
    /// * `pack_uri` - The PackURI for the part
    /// * `blob` - The binary content to write
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        self.archive
            .start_file(pack_uri.membername(), options)
            .map_err(|e| OpcError::Zip(e.to_string()))?;
        self.archive.write_all(blob).map_err(OpcError::Io)
    }

    /// Finish writing and return the package bytes.
    ///
    /// Consumes the writer and returns the complete ZIP archive.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self
            .archive
            .finish()
            .map_err(|e| OpcError::Zip(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/test.txt").unwrap();
        writer.write(&pack_uri, b"Hello, World!").unwrap();
        let zip_data = writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
        let mut content = Vec::new();
        archive
            .by_name("test.txt")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"Hello, World!");
    }

    #[test]
    fn test_multiple_parts() {
        let mut writer = PhysPkgWriter::new();

        let content_types = PackURI::new("/[Content_Types].xml").unwrap();
        let rels = PackURI::new("/_rels/.rels").unwrap();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();

        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&rels, b"<Relationships/>").unwrap();
        writer.write(&pres, b"<presentation/>").unwrap();

        let zip_data = writer.finish().unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"ppt/presentation.xml"));
    }

    #[test]
    fn identical_input_produces_identical_archives() {
        let build = || {
            let mut writer = PhysPkgWriter::new();
            let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
            writer.write(&uri, b"<p:sld/>").unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
