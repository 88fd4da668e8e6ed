//! Technical walkthrough deck: restore, data preparation, model, measures,
//! report UX, refresh, and QA/handoff.

use crate::compose::primitives::{
    add_bullets, add_callout, add_card, add_code, add_flow_box, add_header, add_image_card,
    add_panel, add_panel_label, add_tinted_card, add_title_slide,
};
use crate::compose::{DeckTheme, Rect, emu};
use crate::decks::{AS_OF_FOOTER, DeckAssets, set_deck_metadata};
use crate::error::Result;
use crate::pptx::{Outline, Presentation, TextBody, TextFormat};

/// Build the 9-slide technical deck.
pub fn build_technical_deck(theme: &DeckTheme, assets: &DeckAssets) -> Result<Presentation> {
    let width = theme.canvas_width;
    let mut pres = Presentation::new();
    set_deck_metadata(&mut pres, theme, "Technical Implementation");

    // Slide 1: title
    let slide = add_title_slide(
        &mut pres,
        theme,
        "Technical Implementation",
        "SQL Server (Cloud SQL) + Power BI • Activity KPI Dashboard",
        AS_OF_FOOTER,
    );
    slide.set_notes(
        "[Sources]\n\
         - Date-table/time-intelligence guidance (Power BI): https://learn.microsoft.com/en-us/power-bi/transform-model/desktop-date-tables\n\
         - DATESBETWEEN (DAX): https://learn.microsoft.com/en-us/dax/datesbetween-function-dax\n\
         [/Sources]",
    );

    // Slide 2: architecture overview
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "System overview",
            Some("High-level data flow and modeling approach"),
        );

        // Flow boxes
        let top_y = 1.25;
        let box_h = 1.05;
        let box_w = 3.55;
        let gap = 0.45;
        let x1 = 0.85;
        let x2 = x1 + box_w + gap;
        let x3 = x2 + box_w + gap;

        let boxes = [
            (
                x1,
                "1) Restore DB",
                "Import .bak into SQL Server\n(Cloud SQL for SQL Server)",
                theme.palette.blue.clone(),
            ),
            (
                x2,
                "2) Prepare dataset",
                "Shift dates to 2025/2026\nRebuild Dim_Time_day (2025\u{2013}2026)",
                theme.palette.teal.clone(),
            ),
            (
                x3,
                "3) Power BI model",
                "Star schema\nDAX measures A/B/C\n3 report pages",
                theme.palette.navy.clone(),
            ),
        ];
        for (x, title, body, accent) in &boxes {
            add_flow_box(
                slide,
                theme,
                Rect::new(*x, top_y, box_w, box_h),
                accent,
                title,
                body,
            );
        }

        // Star-schema mini-diagram
        add_card(slide, theme, Rect::new(0.85, 2.75, width - 1.7, 4.35), 12.0, None);
        slide.add_text_box(
            TextBody::from_text(
                "Power BI star schema",
                TextFormat::new(&theme.heading_font, 14.0, &theme.palette.navy).bold(),
            ),
            emu(1.1),
            emu(2.92),
            emu(4.0),
            emu(0.25),
        );

        // Fact table
        add_tinted_card(
            slide,
            Rect::new(5.3, 3.45, 2.75, 1.05),
            10.0,
            &theme.palette.fact_fill,
            &theme.palette.fact_line,
        );
        slide.add_text_box(
            TextBody::from_text(
                "v_Fact_Activities_Shifted",
                TextFormat::new(&theme.heading_font, 12.0, &theme.palette.navy).bold(),
            ),
            emu(5.45),
            emu(3.58),
            emu(2.45),
            emu(0.35),
        );
        slide.add_text_box(
            TextBody::from_text(
                "• ind_id\n• activity_date\n• act_value",
                TextFormat::new(&theme.body_font, 11.0, &theme.palette.gray2),
            ),
            emu(5.55),
            emu(3.92),
            emu(2.35),
            emu(0.55),
        );

        // Dimension tables
        let dims = [
            (3.25, 3.36, 3.63, "Dim_Indicator", "ind_id, ind_desc\u{2026}"),
            (4.35, 4.46, 4.73, "Dim_Time_day", "day_date, week_id\u{2026}"),
        ];
        for (card_y, title_y, body_y, title, body) in &dims {
            add_tinted_card(
                slide,
                Rect::new(2.0, *card_y, 2.4, 0.9),
                10.0,
                &theme.palette.dim_fill,
                &theme.palette.dim_line,
            );
            slide.add_text_box(
                TextBody::from_text(
                    title,
                    TextFormat::new(&theme.heading_font, 12.0, &theme.palette.navy).bold(),
                ),
                emu(2.15),
                emu(*title_y),
                emu(2.1),
                emu(0.3),
            );
            slide.add_text_box(
                TextBody::from_text(
                    body,
                    TextFormat::new(&theme.body_font, 10.5, &theme.palette.gray2),
                ),
                emu(2.15),
                emu(*body_y),
                emu(2.1),
                emu(0.25),
            );
        }

        // Relationship arrows: dimensions into the fact table
        let arrow = Outline::new(&theme.palette.gray3).width(2.0);
        slide.add_connector(emu(4.45), emu(3.7), emu(0.85), 0, arrow.clone(), true);
        slide.add_connector(emu(4.45), emu(4.8), emu(0.85), emu(-0.8), arrow, true);

        add_bullets(
            slide,
            theme,
            1.1,
            5.55,
            3.9,
            "Implementation notes",
            &[
                "Date table is marked in Power BI to enable time-intelligence patterns.",
                "AsOfDate anchored to the latest FACT date (prevents empty future dates).",
                "All KPIs are filtered by selected Indicator (Dim_Indicator).",
            ],
        );

        slide.set_notes(
            "[Sources]\n\
             - Mark as date table (Power BI): https://learn.microsoft.com/en-us/power-bi/transform-model/desktop-date-tables\n\
             - Date table modeling guidance: https://learn.microsoft.com/en-us/power-bi/guidance/model-date-tables\n\
             [/Sources]",
        );
    }

    // Slide 3: database restore
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "Database restore (Cloud SQL for SQL Server)",
            Some("Import .bak into the SQL Server instance"),
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 1.25, 6.2, 2.05),
            "Restore steps",
            "1) Upload the .bak file to Cloud Storage\n\
             2) Import/restore into Cloud SQL (SQL Server)\n\
             3) Verify database and user credentials\n\
             4) Confirm connectivity from Power BI (public IP or proxy)",
        );

        add_panel(slide, theme, Rect::new(7.35, 1.25, 5.15, 2.05));
        add_panel_label(slide, theme, 7.6, 1.42, 4.7, "Example CLI");
        add_code(
            slide,
            theme,
            Rect::new(7.6, 1.78, 4.8, 1.4),
            12.0,
            "gcloud sql import bak INSTANCE \\\n+  gs://BUCKET/backup.bak \\\n+  --database=DB_NAME",
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 3.55, width - 1.7, 3.65),
            "Why this matters",
            "The restored database is the single source used by Power BI. The remaining steps \
             (date shifting, date dimension rebuild, measures) are layered on top without \
             changing the original backup tables.",
        );

        slide.set_notes(
            "[Sources]\n\
             - Cloud SQL for SQL Server import/export with BAK: https://docs.cloud.google.com/sql/docs/sqlserver/import-export/import-export-bak\n\
             - gcloud sql import bak reference: https://docs.cloud.google.com/sdk/gcloud/reference/sql/import/bak\n\
             [/Sources]",
        );
    }

    // Slide 4: data preparation
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "Data preparation (SQL)",
            Some("Shift dates to 2025/2026 and rebuild the date dimension"),
        );

        add_bullets(
            slide,
            theme,
            0.85,
            1.15,
            6.0,
            "Key changes",
            &[
                "Create a view (v_Fact_Activities_Shifted) that moves activity_date forward by +4 years (2021\u{2192}2025, 2022\u{2192}2026).",
                "Cast act_value to INT (defaults invalid values to 0).",
                "Rebuild Dim_Time_day for a full daily calendar (2025-01-01 \u{2192} 2026-12-31) with ISO week_id and LY/LW helper dates.",
            ],
        );

        add_panel(slide, theme, Rect::new(7.05, 1.15, 5.43, 5.75));
        add_panel_label(slide, theme, 7.3, 1.32, 4.95, "Snippet (shift view)");
        add_code(
            slide,
            theme,
            Rect::new(7.3, 1.7, 5.0, 1.2),
            12.0,
            "DATEADD(year, 4, CONVERT(date,\n  TRY_CONVERT(datetimeoffset(0), activity_date)))\nAS activity_date",
        );
        add_panel_label(slide, theme, 7.3, 3.1, 5.0, "Snippet (ISO week_id)");
        add_code(
            slide,
            theme,
            Rect::new(7.3, 3.48, 5.05, 1.55),
            11.2,
            "CONCAT(\n  YEAR(DATEADD(day,3, DATETRUNC(iso_week, d))),\n  RIGHT('00'+CAST(DATEPART(iso_week,d) AS varchar(2)),2)\n) AS week_id",
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 5.95, 6.0, 1.0),
            "Outcome",
            "Power BI can treat the dataset as \u{201c}current/previous year\u{201d} and compute \
             YTD/LY and rolling windows using a complete date dimension.",
        );

        slide.set_notes(
            "[Sources]\n\
             - Time-intelligence patterns rely on a proper date table: https://learn.microsoft.com/en-us/power-bi/transform-model/desktop-date-tables\n\
             [/Sources]",
        );
    }

    // Slide 5: Power BI model
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "Power BI model",
            Some("Tables loaded, relationships, and refresh"),
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 1.25, 6.25, 2.35),
            "Imported tables",
            "• dbo.v_Fact_Activities_Shifted\n\
             • dbo.Dim_Indicator\n\
             • dbo.Dim_Time_day\n\n\
             Optional: Dim_Employees for future slicing (not required for KPIs).",
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 3.85, 6.25, 3.05),
            "Relationships + settings",
            "• Fact[ind_id] \u{2192} Dim_Indicator[ind_id]\n\
             • Fact[activity_date] \u{2192} Dim_Time_day[day_date]\n\
             • Mark Dim_Time_day as the Date table\n\
             • Use AsOfDate = max fact date to avoid empty future periods",
        );

        // Screenshot montage
        slide.add_text_box(
            TextBody::from_text(
                "Report pages (examples)",
                TextFormat::new(&theme.heading_font, 14.0, &theme.palette.navy).bold(),
            ),
            emu(7.35),
            emu(1.25),
            emu(5.15),
            emu(0.3),
        );
        add_image_card(
            slide,
            theme,
            &assets.ytd,
            Rect::new(7.35, 1.6, 5.15, 1.85),
            Some("YTD"),
        )?;
        add_image_card(
            slide,
            theme,
            &assets.defined,
            Rect::new(7.35, 3.55, 5.15, 1.85),
            Some("Defined period (365/180)"),
        )?;
        add_image_card(
            slide,
            theme,
            &assets.custom,
            Rect::new(7.35, 5.5, 5.15, 1.85),
            Some("Custom period comparison"),
        )?;

        slide.set_notes(
            "[Sources]\n\
             - Mark as date table (Power BI): https://learn.microsoft.com/en-us/power-bi/transform-model/desktop-date-tables\n\
             - Date table modeling guidance: https://learn.microsoft.com/en-us/power-bi/guidance/model-date-tables\n\
             [/Sources]",
        );
    }

    // Slide 6: KPI calculations
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "KPI calculations (DAX)",
            Some("Measures for A) YTD, B) rolling windows, C) custom periods"),
        );

        add_bullets(
            slide,
            theme,
            0.85,
            1.15,
            6.2,
            "Core measures",
            &[
                "Activities = SUM(Fact[act_value])",
                "AsOfDate = MAX(Fact[activity_date]) with filters removed",
                "All comparisons are scoped to the selected Indicator (Dim_Indicator).",
            ],
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 3.35, 6.2, 3.55),
            "A/B/C logic summary",
            "A) YTD: Jan 1 \u{2192} AsOfDate; LY = same window 12 months earlier\n\
             B) Defined: Last N days (365/180) \u{2192} AsOfDate; LY = same shifted window\n\
             C) Custom: Period1 vs Period2 defined by slicers; trend shows both periods\n\n\
             Variance % = (Current \u{2212} LY) / LY; arrow \u{25b2}/\u{25bc} based on sign",
        );

        add_panel(slide, theme, Rect::new(7.35, 1.15, 5.15, 5.75));
        add_panel_label(slide, theme, 7.6, 1.32, 4.7, "Example pattern");
        add_code(
            slide,
            theme,
            Rect::new(7.6, 1.7, 4.85, 2.2),
            11.2,
            "m_YTD =\nVAR d = [AsOfDate]\nVAR s = DATE(YEAR(d),1,1)\nRETURN CALCULATE([Activities],\n  DATESBETWEEN(Dim_Time_day[day_date], s, d))",
        );
        add_code(
            slide,
            theme,
            Rect::new(7.6, 4.1, 4.85, 1.25),
            11.2,
            "m_VarPct =\nVAR cur=[Current]\nVAR ly=[LY]\nRETURN DIVIDE(cur-ly, ly)",
        );

        slide.set_notes(
            "[Sources]\n\
             - DATESBETWEEN (DAX): https://learn.microsoft.com/en-us/dax/datesbetween-function-dax\n\
             - DAX time intelligence functions: https://learn.microsoft.com/en-us/dax/time-intelligence-functions-dax\n\
             [/Sources]",
        );
    }

    // Slide 7: report navigation
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "Report UX",
            Some("Three pages (YTD / Defined / Custom) or single-page tabs via bookmarks"),
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 1.25, 6.2, 2.2),
            "Navigation options",
            "Option 1 (simple): Three report pages\n\
             • YTD page\n• Defined Period page\n• Custom Period page\n\n\
             Option 2 (tabbed): One page + bookmark navigator\n\
             • Group visuals by tab (Selection pane)\n• Create bookmarks per tab\n\
             • Use Bookmark navigator buttons",
        );

        add_bullets(
            slide,
            theme,
            0.85,
            3.75,
            6.2,
            "Slicer behavior",
            &[
                "Keep Indicator slicer global (applies across tabs/pages).",
                "For bookmark tabs, disable \u{201c}Data\u{201d} for bookmarks to prevent slicer resets.",
                "Trend charts use a trend measure that returns BLANK outside the selected window.",
            ],
        );

        add_image_card(
            slide,
            theme,
            &assets.defined,
            Rect::new(7.35, 1.25, 5.15, 5.9),
            Some("Example: Defined period page"),
        )?;

        slide.set_notes(
            "[Sources]\n\
             - Bookmarks in Power BI: https://learn.microsoft.com/en-us/power-bi/create-reports/desktop-bookmarks\n\
             - Page & bookmark navigators: https://learn.microsoft.com/en-us/power-bi/create-reports/button-navigators\n\
             [/Sources]",
        );
    }

    // Slide 8: refresh and "today" filtering
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "Refresh & \u{201c}today\u{201d} filtering",
            Some("Optional Power Query filter to restrict dataset to today"),
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 1.25, 6.2, 1.85),
            "Why filter to today?",
            "When the date dimension extends beyond available fact data, visuals may show empty \
             future dates. Filtering to today (or using AsOfDate based on fact max) keeps KPIs \
             aligned with the \u{201c}current\u{201d} reporting cut.",
        );

        add_panel(slide, theme, Rect::new(0.85, 3.35, 6.2, 3.85));
        add_panel_label(slide, theme, 1.1, 3.52, 5.8, "Power Query (M) example");
        add_code(
            slide,
            theme,
            Rect::new(1.1, 3.9, 5.9, 1.4),
            11.6,
            "TodayUTC = Date.From(DateTimeZone.UtcNow()),\nFilteredToToday = Table.SelectRows(\n  #\"Changed Type\", each [activity_date] <= TodayUTC)",
        );

        add_callout(
            slide,
            theme,
            Rect::new(7.35, 1.25, 5.15, 5.95),
            "Recommended approach used in this project",
            "• AsOfDate is based on the latest fact date, so KPIs do not depend on the end of the date table.\n\
             • Optional M filter ensures refresh only includes data up to today (UTC) when required.",
        );

        slide.set_notes(
            "[Sources]\n\
             - Date table settings (Power BI): https://learn.microsoft.com/en-us/power-bi/transform-model/desktop-date-tables\n\
             [/Sources]",
        );
    }

    // Slide 9: QA and handoff
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "QA, validation & handoff",
            Some("How results were checked and what is delivered"),
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 1.25, 6.2, 2.4),
            "Validation checks",
            "• SQL spot-check: SUM(act_value) for an indicator over a known date window\n\
             • Power BI cards match SQL results for the same window\n\
             • Relationships verified (Fact\u{2192}Date, Fact\u{2192}Indicator)\n\
             • Edge cases: LY = 0 handled with DIVIDE() to avoid errors",
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 4.0, 6.2, 2.95),
            "Handoff package (GitHub)",
            "• SQL scripts (shift view + rebuild date dimension)\n\
             • Power BI file (PBIX)\n\
             • Two decks: Technical + Business\n\
             • README with setup steps and troubleshooting",
        );

        add_card(slide, theme, Rect::new(7.35, 1.25, 5.15, 5.7), 10.0, None);
        slide.add_text_box(
            TextBody::from_text(
                "Deliverables",
                TextFormat::new(&theme.heading_font, 14.0, &theme.palette.navy).bold(),
            ),
            emu(7.6),
            emu(1.45),
            emu(4.7),
            emu(0.3),
        );
        slide.add_text_box(
            TextBody::bulleted(
                &[
                    "Activity-KPI-Dashboard.pbix",
                    "Technical_Implementation.pptx",
                    "Business_KPIs.pptx",
                    "SQL scripts + README",
                ],
                TextFormat::new(&theme.body_font, 12.0, &theme.palette.gray2),
            ),
            emu(7.6),
            emu(1.85),
            emu(4.8),
            emu(1.4),
        );

        slide.set_notes(
            "[Sources]\n\
             - DAX time-intelligence overview: https://learn.microsoft.com/en-us/dax/time-intelligence-functions-dax\n\
             [/Sources]",
        );
    }

    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const PNG_STUB: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn stub_assets(dir: &std::path::Path) -> DeckAssets {
        let assets = DeckAssets::from_dir(dir);
        for path in [&assets.ytd, &assets.defined, &assets.custom] {
            std::fs::write(path, PNG_STUB).unwrap();
        }
        assets
    }

    #[test]
    fn technical_deck_has_nine_slides_with_expected_titles() {
        let dir = tempfile::tempdir().unwrap();
        let assets = stub_assets(dir.path());
        let pres = build_technical_deck(&DeckTheme::default(), &assets).unwrap();

        assert_eq!(pres.slide_count(), 9);
        let titles: Vec<_> = pres.outline().map(|t| t.unwrap().to_string()).collect();
        assert_eq!(
            titles,
            [
                "Technical Implementation",
                "System overview",
                "Database restore (Cloud SQL for SQL Server)",
                "Data preparation (SQL)",
                "Power BI model",
                "KPI calculations (DAX)",
                "Report UX",
                "Refresh & \u{201c}today\u{201d} filtering",
                "QA, validation & handoff",
            ]
        );
    }

    #[test]
    fn every_slide_carries_source_notes() {
        let dir = tempfile::tempdir().unwrap();
        let assets = stub_assets(dir.path());
        let pres = build_technical_deck(&DeckTheme::default(), &assets).unwrap();

        for slide in pres.slides() {
            let notes = slide.notes().expect("slide should have notes");
            assert!(notes.starts_with("[Sources]"));
            assert!(notes.ends_with("[/Sources]"));
        }
    }

    #[test]
    fn missing_screenshot_aborts_assembly() {
        let assets = DeckAssets::from_dir(PathBuf::from("/definitely/not/here"));
        let err = build_technical_deck(&DeckTheme::default(), &assets).unwrap_err();
        assert!(matches!(err, crate::error::Error::AssetNotFound(_)));
    }

    #[test]
    fn deck_builds_identically_twice() {
        let dir = tempfile::tempdir().unwrap();
        let assets = stub_assets(dir.path());
        let theme = DeckTheme::default();

        let a = build_technical_deck(&theme, &assets).unwrap();
        let b = build_technical_deck(&theme, &assets).unwrap();

        assert_eq!(a.slide_count(), b.slide_count());
        for (sa, sb) in a.slides().iter().zip(b.slides()) {
            assert_eq!(sa.texts(), sb.texts());
            assert_eq!(sa.notes(), sb.notes());
        }
        assert_eq!(a.to_bytes().unwrap(), b.to_bytes().unwrap());
    }
}
