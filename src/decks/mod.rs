//! Deck assemblers for the Activity KPI dashboard handoff.
//!
//! Two decks: a technical walkthrough of the pipeline and model, and a
//! business-facing summary of the KPIs. Both are flat, declarative slide
//! lists over the composition toolkit.

pub mod business;
pub mod technical;

pub use business::build_business_deck;
pub use technical::build_technical_deck;

use crate::compose::DeckTheme;
use crate::pptx::Presentation;
use chrono::{DateTime, TimeZone, Utc};
use std::path::{Path, PathBuf};

/// Title-slide footer shared by both decks.
pub(crate) const AS_OF_FOOTER: &str = "As-of: Jan 20, 2026 (project context)";

/// The project as-of date, used to pin document timestamps.
pub(crate) fn as_of_date() -> DateTime<Utc> {
    // Fixed calendar date; valid by construction.
    Utc.with_ymd_and_hms(2026, 1, 20, 0, 0, 0).unwrap()
}

/// Report screenshots embedded in the decks.
#[derive(Debug, Clone)]
pub struct DeckAssets {
    /// YTD report page screenshot
    pub ytd: PathBuf,
    /// Defined-period report page screenshot
    pub defined: PathBuf,
    /// Custom-period report page screenshot
    pub custom: PathBuf,
}

impl DeckAssets {
    /// Resolve the three screenshot paths inside an images directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            ytd: dir.join("YTD.png"),
            defined: dir.join("defined.png"),
            custom: dir.join("custome.png"),
        }
    }
}

/// Canvas size, theme fonts, and document metadata shared by both decks.
pub(crate) fn set_deck_metadata(pres: &mut Presentation, theme: &DeckTheme, title: &str) {
    theme.apply(pres);
    let props = pres.properties_mut();
    *props = crate::pptx::DocumentProperties::new()
        .title(title)
        .creator("Activity KPI Dashboard")
        .company(" ")
        .subject("Power BI + SQL Server")
        .language("en-US")
        .timestamps(as_of_date());
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;
    use std::io::Read;

    const PNG_STUB: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn stub_assets(dir: &Path) -> DeckAssets {
        let assets = DeckAssets::from_dir(dir);
        for path in [&assets.ytd, &assets.defined, &assets.custom] {
            std::fs::write(path, PNG_STUB).unwrap();
        }
        assets
    }

    /// Extract the text runs of every slide part in a saved deck, in slide
    /// order.
    fn slide_texts(bytes: &[u8]) -> Vec<Vec<String>> {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut slide_names: Vec<String> = archive
            .file_names()
            .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
            .map(String::from)
            .collect();
        slide_names.sort();

        let mut decks = Vec::new();
        for name in slide_names {
            let mut xml = String::new();
            archive
                .by_name(&name)
                .unwrap()
                .read_to_string(&mut xml)
                .unwrap();

            let mut reader = quick_xml::Reader::from_str(&xml);
            let mut texts = Vec::new();
            let mut in_text = false;
            loop {
                match reader.read_event().unwrap() {
                    Event::Start(ref e) if e.name().as_ref() == b"a:t" => in_text = true,
                    Event::End(ref e) if e.name().as_ref() == b"a:t" => in_text = false,
                    Event::Text(e) if in_text => {
                        let decoded = e.decode().unwrap();
                        texts.push(
                            quick_xml::escape::unescape(&decoded).unwrap().into_owned(),
                        );
                    }
                    Event::Eof => break,
                    _ => {}
                }
            }
            decks.push(texts);
        }
        decks
    }

    #[test]
    fn end_to_end_writes_two_nonempty_decks() {
        let dir = tempfile::tempdir().unwrap();
        let assets = stub_assets(dir.path());
        let theme = DeckTheme::default();

        let tech_path = dir.path().join("Technical_Implementation.pptx");
        let biz_path = dir.path().join("Business_KPIs.pptx");
        build_technical_deck(&theme, &assets)
            .unwrap()
            .save(&tech_path)
            .unwrap();
        build_business_deck(&theme, &assets)
            .unwrap()
            .save(&biz_path)
            .unwrap();

        for path in [&tech_path, &biz_path] {
            assert!(std::fs::metadata(path).unwrap().len() > 0);
            let bytes = std::fs::read(path).unwrap();
            let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
            assert!(
                archive
                    .file_names()
                    .any(|n| n == "ppt/presentation.xml")
            );
        }
    }

    #[test]
    fn repeated_runs_serialize_identical_slide_text() {
        let dir = tempfile::tempdir().unwrap();
        let assets = stub_assets(dir.path());
        let theme = DeckTheme::default();

        let first = build_technical_deck(&theme, &assets).unwrap().to_bytes().unwrap();
        let second = build_technical_deck(&theme, &assets).unwrap().to_bytes().unwrap();

        let first_texts = slide_texts(&first);
        let second_texts = slide_texts(&second);
        assert_eq!(first_texts.len(), 9);
        assert_eq!(first_texts, second_texts);

        // The technical title slide leads with the deck title.
        assert_eq!(first_texts[0][0], "Technical Implementation");
    }

    #[test]
    fn assets_resolve_fixed_file_names() {
        let assets = DeckAssets::from_dir("images");
        assert_eq!(assets.ytd, PathBuf::from("images/YTD.png"));
        assert_eq!(assets.defined, PathBuf::from("images/defined.png"));
        assert_eq!(assets.custom, PathBuf::from("images/custome.png"));
    }

    #[test]
    fn metadata_is_pinned_to_the_as_of_date() {
        let mut pres = Presentation::new();
        set_deck_metadata(&mut pres, &DeckTheme::default(), "Technical Implementation");
        let props = pres.properties();
        assert_eq!(props.title.as_deref(), Some("Technical Implementation"));
        assert_eq!(props.subject.as_deref(), Some("Power BI + SQL Server"));
        assert_eq!(props.created, props.modified);
        assert_eq!(
            props.created.unwrap().to_rfc3339(),
            "2026-01-20T00:00:00+00:00"
        );
    }
}
