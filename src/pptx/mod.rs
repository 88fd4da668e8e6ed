//! PresentationML writing layer.
//!
//! Models a presentation as write-once slides of shapes, then serializes the
//! whole thing to a .pptx package through the [`opc`](crate::opc) layer.

pub mod format;
pub mod presentation;
pub mod properties;
pub(crate) mod relmap;
pub mod shape;
pub mod slide;
pub mod template;
pub mod text;

pub use format::{ImageFormat, TextFormat};
pub use presentation::{EMU_PER_INCH, Presentation, WIDESCREEN};
pub use properties::DocumentProperties;
pub use shape::{Outline, OuterShadow, Shape, ShapeStyle};
pub use slide::Slide;
pub use text::{Anchor, Bullet, Paragraph, TextBody};
