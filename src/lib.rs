//! Deckforge - generator for the Activity KPI dashboard handoff decks
//!
//! This crate assembles two static PPTX decks describing the Activity KPI
//! data pipeline and reporting dashboard: a technical walkthrough and a
//! business-facing summary. It carries its own minimal writing stack:
//!
//! - **OPC layer**: parts, relationships, content types, and ZIP
//!   serialization for the package container
//! - **PPTX layer**: presentations, slides, shapes (text boxes, cards,
//!   connectors, pictures), speaker notes, and the static master/layout/theme
//!   parts a valid package needs
//! - **Composition toolkit**: palette and layout constants plus the primitive
//!   composers (header bar, title slide, bullets, callouts, image cards)
//! - **Deck assemblers**: the two declarative slide lists
//!
//! # Example - Building and saving a deck
//!
//! ```no_run
//! use deckforge::compose::DeckTheme;
//! use deckforge::decks::{DeckAssets, build_technical_deck};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let theme = DeckTheme::default();
//! let assets = DeckAssets::from_dir("images");
//!
//! let deck = build_technical_deck(&theme, &assets)?;
//! deck.save("docs/Technical_Implementation.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Composing a custom slide
//!
//! ```
//! use deckforge::compose::{DeckTheme, Rect, primitives};
//! use deckforge::pptx::Presentation;
//!
//! let theme = DeckTheme::default();
//! let mut pres = Presentation::new();
//! theme.apply(&mut pres);
//!
//! let slide = pres.add_slide();
//! primitives::add_header(slide, &theme, "Weekly review", None);
//! primitives::add_callout(
//!     slide,
//!     &theme,
//!     Rect::new(0.85, 1.25, 6.2, 2.0),
//!     "Highlights",
//!     "Volume up vs last year.",
//! );
//! assert_eq!(slide.title(), Some("Weekly review"));
//! ```

pub mod common;
pub mod compose;
pub mod decks;
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{Error, Result};
