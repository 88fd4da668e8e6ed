//! Primitive slide composers.
//!
//! Thin wrappers that translate semantic parameters (title, body, position)
//! into shape and text placement, so the deck assemblers stay declarative
//! content lists. Positions and sizes are in inches.

use crate::compose::layout::{Rect, emu, pt_emu};
use crate::compose::theme::DeckTheme;
use crate::error::Result;
use crate::pptx::{
    Anchor, OuterShadow, Presentation, ShapeStyle, Slide, TextBody, TextFormat,
};
use std::path::Path;

fn heading(theme: &DeckTheme, size: f64, color: &str) -> TextFormat {
    let mut format = TextFormat::new(&theme.heading_font, size, color);
    format.bold = true;
    format
}

fn body_text(theme: &DeckTheme, size: f64, color: &str) -> TextFormat {
    TextFormat::new(&theme.body_font, size, color)
}

fn add_text(slide: &mut Slide, area: Rect, body: TextBody) {
    let (x, y, w, h) = area.to_emu();
    slide.add_text_box(body, x, y, w, h);
}

/// White card with a hairline border and an optional drop shadow.
pub fn add_card(
    slide: &mut Slide,
    theme: &DeckTheme,
    area: Rect,
    radius_pt: f64,
    shadow: Option<OuterShadow>,
) {
    let mut style = ShapeStyle::card(&theme.palette.white, &theme.palette.gray4);
    style.shadow = shadow;
    let (x, y, w, h) = area.to_emu();
    slide.add_round_rect(x, y, w, h, pt_emu(radius_pt), style);
}

/// Tinted card used for the star-schema table boxes.
pub fn add_tinted_card(slide: &mut Slide, area: Rect, radius_pt: f64, fill: &str, line: &str) {
    let (x, y, w, h) = area.to_emu();
    slide.add_round_rect(x, y, w, h, pt_emu(radius_pt), ShapeStyle::card(fill, line));
}

/// Slide background plus the top header bar with title and optional subtitle.
pub fn add_header(slide: &mut Slide, theme: &DeckTheme, title: &str, subtitle: Option<&str>) {
    slide.set_title(title);
    slide.set_background(&theme.palette.bg);

    // Top bar spans the full canvas width.
    let (x, y, w, h) = Rect::new(0.0, 0.0, theme.canvas_width, 0.68).to_emu();
    slide.add_rectangle(
        x,
        y,
        w,
        h,
        ShapeStyle::card(&theme.palette.white, &theme.palette.gray4),
    );

    add_text(
        slide,
        Rect::new(0.6, 0.16, 9.5, 0.4),
        TextBody::from_text(title, heading(theme, 20.0, &theme.palette.navy)),
    );
    if let Some(subtitle) = subtitle {
        add_text(
            slide,
            Rect::new(0.6, 0.46, 10.5, 0.22),
            TextBody::from_text(subtitle, body_text(theme, 11.0, &theme.palette.gray3)),
        );
    }
}

/// Deck title slide: hero panel, deck title, subtitle, and footer line.
pub fn add_title_slide<'a>(
    pres: &'a mut Presentation,
    theme: &DeckTheme,
    title: &str,
    subtitle: &str,
    footer: &str,
) -> &'a mut Slide {
    let width = theme.canvas_width;
    let slide = pres.add_slide();
    slide.set_title(title);
    slide.set_background(&theme.palette.bg);

    add_card(
        slide,
        theme,
        Rect::new(0.85, 1.45, width - 1.7, 4.15),
        14.0,
        Some(OuterShadow::soft(0.18, 45.0, 3.0, 2.0)),
    );

    add_text(
        slide,
        Rect::new(1.35, 2.05, width - 2.7, 0.9),
        TextBody::from_text(title, heading(theme, 40.0, &theme.palette.navy)),
    );
    add_text(
        slide,
        Rect::new(1.35, 3.1, width - 2.7, 0.6),
        TextBody::from_text(subtitle, body_text(theme, 16.0, &theme.palette.gray2)),
    );
    add_text(
        slide,
        Rect::new(1.35, 5.15, width - 2.7, 0.3),
        TextBody::from_text(footer, body_text(theme, 11.0, &theme.palette.gray3)),
    );

    slide
}

/// Bold block title followed by a hanging-bullet list.
pub fn add_bullets(
    slide: &mut Slide,
    theme: &DeckTheme,
    x: f64,
    y: f64,
    w: f64,
    title: &str,
    items: &[&str],
) {
    add_text(
        slide,
        Rect::new(x, y, w, 0.3),
        TextBody::from_text(title, heading(theme, 16.0, &theme.palette.navy)),
    );
    add_text(
        slide,
        Rect::new(x, y + 0.42, w, 2.1),
        TextBody::bulleted(items, body_text(theme, 12.5, &theme.palette.gray2))
            .anchor(Anchor::Top)
            .line_spacing(1.15),
    );
}

/// Callout card: bold title over body text on a white card.
pub fn add_callout(slide: &mut Slide, theme: &DeckTheme, area: Rect, title: &str, body: &str) {
    add_card(
        slide,
        theme,
        area,
        10.0,
        Some(OuterShadow::soft(0.14, 45.0, 2.5, 2.0)),
    );
    add_text(
        slide,
        Rect::new(area.x + 0.25, area.y + 0.18, area.w - 0.5, 0.3),
        TextBody::from_text(title, heading(theme, 14.0, &theme.palette.navy)),
    );
    add_text(
        slide,
        Rect::new(area.x + 0.25, area.y + 0.55, area.w - 0.5, area.h - 0.7),
        TextBody::from_text(body, body_text(theme, 11.5, &theme.palette.gray2))
            .anchor(Anchor::Top),
    );
}

/// Image card: bordered container around an embedded image with an optional
/// caption. Fails when the referenced image file does not exist.
pub fn add_image_card<P: AsRef<Path>>(
    slide: &mut Slide,
    theme: &DeckTheme,
    image: P,
    area: Rect,
    caption: Option<&str>,
) -> Result<()> {
    add_card(
        slide,
        theme,
        area,
        10.0,
        Some(OuterShadow::soft(0.18, 45.0, 3.0, 2.0)),
    );

    slide.add_picture(
        image,
        emu(area.x + 0.18),
        emu(area.y + 0.18),
        emu(area.w - 0.36),
        emu(area.h - 0.6),
    )?;

    if let Some(caption) = caption {
        add_text(
            slide,
            Rect::new(area.x + 0.18, area.y + area.h - 0.35, area.w - 0.36, 0.25),
            TextBody::from_text(caption, body_text(theme, 10.5, &theme.palette.gray3)),
        );
    }
    Ok(())
}

/// Flow box: white card with a colored accent strip, step title, and body.
pub fn add_flow_box(
    slide: &mut Slide,
    theme: &DeckTheme,
    area: Rect,
    accent: &str,
    title: &str,
    body: &str,
) {
    add_card(
        slide,
        theme,
        area,
        10.0,
        Some(OuterShadow::soft(0.12, 45.0, 2.5, 2.0)),
    );

    let (x, y, _, h) = area.to_emu();
    slide.add_rectangle(x, y, emu(0.08), h, ShapeStyle::solid(accent));

    add_text(
        slide,
        Rect::new(area.x + 0.2, area.y + 0.12, area.w - 0.35, 0.28),
        TextBody::from_text(title, heading(theme, 15.0, &theme.palette.navy)),
    );
    add_text(
        slide,
        Rect::new(area.x + 0.2, area.y + 0.45, area.w - 0.35, 0.6),
        TextBody::from_text(body, body_text(theme, 11.5, &theme.palette.gray2)),
    );
}

/// Dark panel used as a backdrop for code snippets.
pub fn add_panel(slide: &mut Slide, theme: &DeckTheme, area: Rect) {
    let (x, y, w, h) = area.to_emu();
    slide.add_round_rect(
        x,
        y,
        w,
        h,
        pt_emu(10.0),
        ShapeStyle::card(&theme.palette.panel, &theme.palette.panel),
    );
}

/// Bold white label inside a dark panel.
pub fn add_panel_label(slide: &mut Slide, theme: &DeckTheme, x: f64, y: f64, w: f64, label: &str) {
    add_text(
        slide,
        Rect::new(x, y, w, 0.3),
        TextBody::from_text(label, heading(theme, 12.0, &theme.palette.white)),
    );
}

/// Monospace code text inside a dark panel.
pub fn add_code(slide: &mut Slide, theme: &DeckTheme, area: Rect, size_pt: f64, code: &str) {
    add_text(
        slide,
        area,
        TextBody::from_text(code, TextFormat::new(&theme.code_font, size_pt, &theme.palette.code))
            .anchor(Anchor::Top),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::pptx::Presentation;

    fn theme() -> DeckTheme {
        DeckTheme::default()
    }

    #[test]
    fn header_renders_bar_title_and_subtitle() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide();
        add_header(slide, &theme(), "System overview", Some("Data flow"));

        assert_eq!(slide.title(), Some("System overview"));
        // Bar + title + subtitle
        assert_eq!(slide.shape_count(), 3);
        assert_eq!(slide.texts(), vec!["System overview", "Data flow"]);
    }

    #[test]
    fn header_subtitle_is_optional() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide();
        add_header(slide, &theme(), "Report UX", None);
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn header_uses_only_palette_tokens() {
        let theme = theme();
        let mut pres = Presentation::new();
        let slide = pres.add_slide();
        add_header(slide, &theme, "KPI definitions", Some("YTD / LY / rolling"));

        for shape in slide.shapes() {
            for color in shape.colors() {
                assert!(theme.palette.contains(color), "stray color {color}");
            }
        }
    }

    #[test]
    fn title_slide_uses_only_palette_tokens() {
        let theme = theme();
        let mut pres = Presentation::new();
        let slide = add_title_slide(
            &mut pres,
            &theme,
            "Business KPIs & Insights",
            "How to read the dashboard",
            "As-of: Jan 20, 2026",
        );

        assert_eq!(slide.title(), Some("Business KPIs & Insights"));
        assert_eq!(slide.shape_count(), 4);
        for shape in slide.shapes() {
            for color in shape.colors() {
                assert!(theme.palette.contains(color), "stray color {color}");
            }
        }
    }

    #[test]
    fn bullets_render_title_and_items() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide();
        add_bullets(
            slide,
            &theme(),
            0.85,
            1.15,
            6.0,
            "Key changes",
            &["Shift dates", "Rebuild calendar"],
        );

        let texts = slide.texts();
        assert_eq!(texts[0], "Key changes");
        assert_eq!(texts[1], "Shift dates\nRebuild calendar");
    }

    #[test]
    fn callout_renders_card_title_body() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide();
        add_callout(
            slide,
            &theme(),
            Rect::new(0.85, 1.25, 6.2, 2.05),
            "Restore steps",
            "1) Upload\n2) Import",
        );
        // Card + title + body
        assert_eq!(slide.shape_count(), 3);
        assert_eq!(slide.texts()[1], "1) Upload\n2) Import");
    }

    #[test]
    fn image_card_requires_existing_file() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide();
        let err = add_image_card(
            slide,
            &theme(),
            "/definitely/missing.png",
            Rect::new(0.85, 1.25, 5.15, 1.85),
            Some("YTD"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::AssetNotFound(_)));
    }

    #[test]
    fn image_card_embeds_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("YTD.png");
        std::fs::write(&path, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();

        let mut pres = Presentation::new();
        let slide = pres.add_slide();
        add_image_card(
            slide,
            &theme(),
            &path,
            Rect::new(0.85, 1.25, 5.15, 1.85),
            Some("YTD"),
        )
        .unwrap();
        // Card + picture + caption
        assert_eq!(slide.shape_count(), 3);
    }

    #[test]
    fn flow_box_carries_accent_strip() {
        let theme = theme();
        let mut pres = Presentation::new();
        let slide = pres.add_slide();
        add_flow_box(
            slide,
            &theme,
            Rect::new(0.85, 1.25, 3.55, 1.05),
            &theme.palette.blue.clone(),
            "1) Restore DB",
            "Import .bak into SQL Server",
        );

        assert_eq!(slide.shape_count(), 4);
        let accent_used = slide
            .shapes()
            .iter()
            .any(|s| s.colors().contains(&theme.palette.blue.as_str()));
        assert!(accent_used);
    }
}
