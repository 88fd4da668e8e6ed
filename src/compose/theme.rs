//! Deck theme: palette tokens, fonts, and canvas geometry.
//!
//! Every color the decks use comes from the palette, so shared elements can
//! be audited against it. Fonts and canvas size are configuration, not
//! call-site literals.

use crate::pptx::{Presentation, WIDESCREEN};

/// Named color tokens, as hex RRGGBB strings.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Headline and emphasis color
    pub navy: String,
    /// Primary accent
    pub blue: String,
    /// Secondary accent
    pub teal: String,
    /// Darkest body text
    pub gray1: String,
    /// Body text
    pub gray2: String,
    /// Muted text (subtitles, captions)
    pub gray3: String,
    /// Hairlines and card borders
    pub gray4: String,
    /// Card surfaces
    pub white: String,
    /// Slide background
    pub bg: String,
    /// Positive variance
    pub good: String,
    /// Negative variance
    pub bad: String,
    /// Dark code-panel surface
    pub panel: String,
    /// Code text on the dark panel
    pub code: String,
    /// Fact-table card fill in the star-schema diagram
    pub fact_fill: String,
    /// Fact-table card border
    pub fact_line: String,
    /// Dimension-table card fill
    pub dim_fill: String,
    /// Dimension-table card border
    pub dim_line: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            navy: "0B1B3A".into(),
            blue: "1F6FEB".into(),
            teal: "0EA5A8".into(),
            gray1: "111827".into(),
            gray2: "374151".into(),
            gray3: "6B7280".into(),
            gray4: "E5E7EB".into(),
            white: "FFFFFF".into(),
            bg: "F8FAFC".into(),
            good: "16A34A".into(),
            bad: "DC2626".into(),
            panel: "0B1220".into(),
            code: "D1D5DB".into(),
            fact_fill: "EEF2FF".into(),
            fact_line: "C7D2FE".into(),
            dim_fill: "ECFEFF".into(),
            dim_line: "A5F3FC".into(),
        }
    }
}

impl Palette {
    /// All tokens, for palette-membership checks.
    pub fn tokens(&self) -> Vec<&str> {
        vec![
            &self.navy,
            &self.blue,
            &self.teal,
            &self.gray1,
            &self.gray2,
            &self.gray3,
            &self.gray4,
            &self.white,
            &self.bg,
            &self.good,
            &self.bad,
            &self.panel,
            &self.code,
            &self.fact_fill,
            &self.fact_line,
            &self.dim_fill,
            &self.dim_line,
        ]
    }

    /// Check whether a color is one of the palette tokens.
    ///
    /// Shadows are always plain black and count as on-palette.
    pub fn contains(&self, color: &str) -> bool {
        color == "000000" || self.tokens().iter().any(|t| *t == color)
    }
}

/// Theme shared by both decks: palette, fonts, canvas.
///
/// The canvas is the inch coordinate space the composers lay out in; the
/// slide size itself snaps to the standard widescreen EMU dimensions.
#[derive(Debug, Clone)]
pub struct DeckTheme {
    /// Color tokens
    pub palette: Palette,
    /// Heading font face
    pub heading_font: String,
    /// Body font face
    pub body_font: String,
    /// Monospace font face for code snippets
    pub code_font: String,
    /// Canvas width in inches
    pub canvas_width: f64,
    /// Canvas height in inches
    pub canvas_height: f64,
}

impl Default for DeckTheme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            heading_font: "Calibri".into(),
            body_font: "Calibri".into(),
            code_font: "Consolas".into(),
            canvas_width: 13.333,
            canvas_height: 7.5,
        }
    }
}

impl DeckTheme {
    /// Apply canvas size and fonts to a presentation.
    pub fn apply(&self, pres: &mut Presentation) {
        pres.set_slide_size(WIDESCREEN.0, WIDESCREEN.1);
        pres.set_fonts(&self.heading_font, &self.body_font);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_contains_its_own_tokens() {
        let palette = Palette::default();
        for token in palette.tokens() {
            assert!(palette.contains(token));
        }
        assert!(palette.contains("000000"));
        assert!(!palette.contains("FF00FF"));
    }

    #[test]
    fn theme_applies_widescreen_canvas() {
        let mut pres = Presentation::new();
        DeckTheme::default().apply(&mut pres);
        assert_eq!(pres.slide_width(), 12_192_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }
}
