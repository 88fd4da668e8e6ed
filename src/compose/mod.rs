//! Slide composition toolkit.
//!
//! The theme defines the palette, fonts, and canvas; the primitives lay out
//! headers, title slides, bullet blocks, callouts, image cards, flow boxes,
//! and code panels on top of the pptx layer.

pub mod layout;
pub mod primitives;
pub mod theme;

pub use layout::{Rect, emu, pt_emu};
pub use theme::{DeckTheme, Palette};
