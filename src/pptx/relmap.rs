//! Relationship ID mapper used while saving a presentation.
//!
//! Relationships are created on the slide parts first; the mapper records the
//! assigned IDs so slide XML can be generated with the actual rIds instead of
//! placeholders.

use std::collections::HashMap;

/// Maps slide elements to their relationship IDs.
///
/// Organized per-slide, as each slide part has its own set of relationships.
#[derive(Debug, Default)]
pub(crate) struct RelationshipMapper {
    /// Maps (slide_index, picture_index_in_slide) to relationship ID
    image_ids: HashMap<(usize, usize), String>,
}

impl RelationshipMapper {
    /// Create a new empty relationship mapper.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record an image relationship for a specific slide.
    ///
    /// # Arguments
    /// * `slide_index` - The index of the slide (0-based)
    /// * `picture_index` - The index of the picture within that slide (0-based)
    /// * `rel_id` - The relationship ID (e.g., "rId3")
    pub(crate) fn add_image(&mut self, slide_index: usize, picture_index: usize, rel_id: String) {
        self.image_ids.insert((slide_index, picture_index), rel_id);
    }

    /// Get the relationship ID for a picture in a specific slide.
    pub(crate) fn image_id(&self, slide_index: usize, picture_index: usize) -> Option<&str> {
        self.image_ids
            .get(&(slide_index, picture_index))
            .map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_per_slide_pictures() {
        let mut mapper = RelationshipMapper::new();
        mapper.add_image(0, 0, "rId2".to_string());
        mapper.add_image(4, 1, "rId3".to_string());

        assert_eq!(mapper.image_id(0, 0), Some("rId2"));
        assert_eq!(mapper.image_id(4, 1), Some("rId3"));
        assert_eq!(mapper.image_id(1, 0), None);
    }
}
