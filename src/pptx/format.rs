//! Format types for PPTX presentations.

/// Image format types supported by the deck writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    /// Get the MIME type for this image format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => crate::opc::constants::content_type::PNG,
            Self::Jpeg => crate::opc::constants::content_type::JPEG,
            Self::Gif => crate::opc::constants::content_type::GIF,
        }
    }

    /// Get the file extension for this image format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    /// Detect image format from bytes (magic number detection).
    pub fn detect_from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // GIF: 47 49 46 38 (GIF8)
        if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
            return Some(Self::Gif);
        }

        None
    }
}

/// Text formatting properties applied to a whole text body.
#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Text color in hex RGB (e.g., "0B1B3A")
    pub color: Option<String>,
}

impl TextFormat {
    /// Create a format with the given font face, size, and color.
    pub fn new(font: &str, size: f64, color: &str) -> Self {
        Self {
            font: Some(font.to_string()),
            size: Some(size),
            bold: false,
            italic: false,
            color: Some(color.to_string()),
        }
    }

    /// Builder method: set bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder method: set italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG header bytes are enough for detection.
    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn detects_png() {
        assert_eq!(
            ImageFormat::detect_from_bytes(PNG_MAGIC),
            Some(ImageFormat::Png)
        );
    }

    #[test]
    fn detects_jpeg_and_gif() {
        assert_eq!(
            ImageFormat::detect_from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::detect_from_bytes(b"GIF89a"),
            Some(ImageFormat::Gif)
        );
    }

    #[test]
    fn rejects_unknown_and_short_input() {
        assert_eq!(ImageFormat::detect_from_bytes(b"BM"), None);
        assert_eq!(ImageFormat::detect_from_bytes(b"not an image"), None);
    }
}
