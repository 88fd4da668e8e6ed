//! Deckforge CLI entry point: builds both handoff decks and writes them to
//! the output directory.

use clap::Parser;
use deckforge::compose::DeckTheme;
use deckforge::decks::{DeckAssets, build_business_deck, build_technical_deck};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Build the Activity KPI dashboard handoff decks.
#[derive(Debug, Parser)]
#[command(name = "deckforge", version, about)]
struct Cli {
    /// Directory the generated .pptx files are written to
    #[arg(long, default_value = "docs")]
    out_dir: PathBuf,

    /// Directory holding the report screenshots (YTD.png, defined.png,
    /// custome.png)
    #[arg(long, default_value = "images")]
    images_dir: PathBuf,
}

fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: &Cli) -> deckforge::Result<()> {
    let theme = DeckTheme::default();
    let assets = DeckAssets::from_dir(&cli.images_dir);

    std::fs::create_dir_all(&cli.out_dir)?;

    let technical = build_technical_deck(&theme, &assets)?;
    let technical_path = cli.out_dir.join("Technical_Implementation.pptx");
    technical.save(&technical_path)?;
    info!(slides = technical.slide_count(), "Wrote: {}", technical_path.display());

    let business = build_business_deck(&theme, &assets)?;
    let business_path = cli.out_dir.join("Business_KPIs.pptx");
    business.save(&business_path)?;
    info!(slides = business.slide_count(), "Wrote: {}", business_path.display());

    Ok(())
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("deck build failed: {err}");
            ExitCode::FAILURE
        }
    }
}
