//! Business-facing deck: what the dashboard answers, KPI definitions, the
//! two period views, and business impact.

use crate::compose::primitives::{
    add_bullets, add_callout, add_card, add_header, add_image_card, add_title_slide,
};
use crate::compose::{DeckTheme, Rect, emu};
use crate::decks::{AS_OF_FOOTER, DeckAssets, set_deck_metadata};
use crate::error::Result;
use crate::pptx::{Presentation, TextBody, TextFormat};

/// Build the 6-slide business deck.
pub fn build_business_deck(theme: &DeckTheme, assets: &DeckAssets) -> Result<Presentation> {
    let width = theme.canvas_width;
    let mut pres = Presentation::new();
    set_deck_metadata(&mut pres, theme, "Business KPIs & Insights");

    // Slide 1: title
    let slide = add_title_slide(
        &mut pres,
        theme,
        "Business KPIs & Insights",
        "How to read the dashboard and what it enables for decision-making",
        AS_OF_FOOTER,
    );
    slide.set_notes(
        "[Sources]\n\
         - Date-table/time-intelligence guidance (Power BI): https://learn.microsoft.com/en-us/power-bi/transform-model/desktop-date-tables\n\
         - DATESBETWEEN (DAX): https://learn.microsoft.com/en-us/dax/datesbetween-function-dax\n\
         [/Sources]",
    );

    // Slide 2: what the dashboard answers
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "What this dashboard answers",
            Some("One place to track activity volume by Indicator, compare periods, and spot trend changes"),
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 1.25, 6.1, 2.55),
            "Primary questions",
            "• Are we up or down vs last year for the same period?\n\
             • Is the change driven by specific activity Indicators (email, meetings, etc.)?\n\
             • Are there spikes/drops that require operational follow-up?\n\
             • How do two business-defined periods compare (custom Period1 vs Period2)?",
        );
        add_callout(
            slide,
            theme,
            Rect::new(0.85, 4.05, 6.1, 3.1),
            "How to use (workflow)",
            "1) Select Indicator (single-select)\n\
             2) Choose the analysis mode: YTD, Defined (365/180), or Custom\n\
             3) Read the KPI cards (Current, LY, % change)\n\
             4) Use the trend chart to interpret timing and volatility",
        );

        add_image_card(
            slide,
            theme,
            &assets.ytd,
            Rect::new(7.35, 1.25, 5.15, 5.9),
            Some("Example: YTD page"),
        )?;

        slide.set_notes(
            "[Sources]\n\
             - Date table/time intelligence patterns in Power BI: https://learn.microsoft.com/en-us/power-bi/transform-model/desktop-date-tables\n\
             [/Sources]",
        );
    }

    // Slide 3: KPI definitions
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "KPI definitions",
            Some("What YTD / LY / rolling windows / custom periods mean"),
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 1.25, width - 1.7, 1.75),
            "Definitions (as-of Jan 20, 2026)",
            "• YTD: Jan 1, 2026 \u{2192} AsOfDate (latest loaded date with activity)\n\
             • YTD LY: Jan 1, 2025 \u{2192} same day-of-year cut (12 months earlier)\n\
             • Last 365/180: trailing window ending at AsOfDate; LY = same shifted window\n\
             • Custom periods: user-selected Period1 vs Period2 ranges\n\
             • % variance: (Current \u{2212} Comparison) / Comparison\n\
             • Arrow: \u{25b2} when % \u{2265} 0, \u{25bc} when % < 0",
        );

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 3.25, 6.1, 3.95),
            "Interpretation tips",
            "• Large % swings on small LY values can be noisy\u{2014}use the trend line to confirm.\n\
             • Look for sustained changes (multi-week) vs single-day spikes.\n\
             • Use Defined Period mode for short-term operational monitoring.",
        );

        add_callout(
            slide,
            theme,
            Rect::new(7.35, 3.25, 5.15, 3.95),
            "What counts as \u{201c}activity\u{201d}",
            "The fact table stores an Indicator ID and an activity count/value per date. \
             Indicator metadata (category/subcategory) enables slicing and consistent reporting \
             across activity types.",
        );

        slide.set_notes(
            "[Sources]\n\
             - DATESBETWEEN (DAX): https://learn.microsoft.com/en-us/dax/datesbetween-function-dax\n\
             - DAX time intelligence functions: https://learn.microsoft.com/en-us/dax/time-intelligence-functions-dax\n\
             [/Sources]",
        );
    }

    // Slide 4: defined period view
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "Defined period (Last 365 / 180 days)",
            Some("Operational monitoring with consistent windows"),
        );

        add_image_card(
            slide,
            theme,
            &assets.defined,
            Rect::new(0.85, 1.25, width - 1.7, 5.95),
            Some("Defined Period view (example screenshot)"),
        )?;

        // Takeaway strip under the screenshot
        add_card(slide, theme, Rect::new(0.95, 6.9, width - 1.9, 0.45), 10.0, None);
        slide.add_text_box(
            TextBody::from_text(
                "Use this view to answer: \u{201c}Are we trending up/down over the last N days, \
                 and how does it compare to last year\u{2019}s same period?\u{201d}",
                TextFormat::new(&theme.body_font, 12.0, &theme.palette.gray2),
            ),
            emu(1.15),
            emu(7.0),
            emu(width - 2.3),
            emu(0.28),
        );

        slide.set_notes(
            "[Sources]\n\
             - Bookmarks & navigation (optional): https://learn.microsoft.com/en-us/power-bi/create-reports/button-navigators\n\
             [/Sources]",
        );
    }

    // Slide 5: custom periods view
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "Custom periods (Period 1 vs Period 2)",
            Some("Compare any two business-defined windows"),
        );

        add_image_card(
            slide,
            theme,
            &assets.custom,
            Rect::new(0.85, 1.25, width - 1.7, 5.95),
            Some("Custom Period view (example screenshot)"),
        )?;

        add_callout(
            slide,
            theme,
            Rect::new(0.85, 6.55, width - 1.7, 0.85),
            "Typical uses",
            "Compare pre/post policy changes, campaigns, org changes, holidays, or project \
             milestones by selecting two date ranges and evaluating both value and trend.",
        );

        slide.set_notes(
            "[Sources]\n\
             - Date table/time intelligence patterns: https://learn.microsoft.com/en-us/power-bi/guidance/model-date-tables\n\
             [/Sources]",
        );
    }

    // Slide 6: business impact and next steps
    {
        let slide = pres.add_slide();
        add_header(
            slide,
            theme,
            "Business impact & next steps",
            Some("How this dashboard supports decision-making"),
        );

        add_bullets(
            slide,
            theme,
            0.85,
            1.2,
            6.25,
            "Business impact",
            &[
                "Single source for activity KPIs across Indicators with consistent comparisons.",
                "Faster trend detection: spikes/drops are visible immediately in the trend charts.",
                "Supports operational planning (resource allocation, workload patterns) using rolling windows.",
                "Supports business review cycles via custom period comparison (Period1 vs Period2).",
            ],
        );

        add_bullets(
            slide,
            theme,
            0.85,
            3.95,
            6.25,
            "Suggested enhancements (optional)",
            &[
                "Add drill-through to employee/department (Dim_Employees) when needed.",
                "Add indicator category rollups and a \u{201c}Top movers\u{201d} view.",
                "Add anomaly flags (simple z-score) to highlight outlier days.",
                "Publish to Power BI Service + scheduled refresh (gateway/proxy as required).",
            ],
        );

        add_callout(
            slide,
            theme,
            Rect::new(7.35, 1.2, 5.15, 5.7),
            "What stakeholders receive",
            "• A self-serve dashboard with three analysis modes\n\
             • Clear definitions of KPIs (YTD, LY, rolling, custom)\n\
             • Visual trend context to interpret changes\n\
             • A technical README + scripts for reproducibility",
        );

        slide.set_notes(
            "[Sources]\n\
             - Power BI bookmarks (for tabbed UX): https://learn.microsoft.com/en-us/power-bi/create-reports/desktop-bookmarks\n\
             - Power BI navigators: https://learn.microsoft.com/en-us/power-bi/create-reports/button-navigators\n\
             [/Sources]",
        );
    }

    Ok(pres)
}
