//! Label-box layout: fitting a title and subtitle into a canvas's safe zone.
//!
//! The steps run in one direction, each a pure function of its inputs:
//!
//! - [`fit_font`](crate::fit_font) shrinks a line's font until it fits the
//!   maximum line width (once, proportionally; see its docs)
//! - the fitted lines are measured again
//! - [`layout_label_box`](crate::layout::layout_label_box) sizes the box, centres
//!   it on the anchor and clamps it horizontally to the [`SafeZone`](crate::layout::SafeZone)
//!
//! [`LayoutEngine`](crate::layout::LayoutEngine) runs all three with one
//! [`LayoutConfig`](crate::LayoutConfig).
//!
//! # Example
//!
//! ```
//! use header_gen::canvas::BLOG_HEADER;
//! use header_gen::layout::{LayoutEngine, TextSpec};
//! use header_gen::FontLibrary;
//!
//! // no families registered, so everything measures with the built-in face
//! let fonts = FontLibrary::new();
//! let engine = LayoutEngine::default();
//!
//! let layout = engine
//!     .layout(
//!         &fonts,
//!         &TextSpec::new("Why Support Liverpool F.C?", "Arial", 64),
//!         &TextSpec::new("The Beautiful Game vs The Lazy Game", "Arial", 32),
//!         &BLOG_HEADER,
//!         None,
//!     )
//!     .expect("valid inputs");
//!
//! let b = layout.label_box;
//! assert!(b.x >= 288 && b.x + b.width <= 1632);
//! ```

mod engine;
mod label_box;
mod safe_zone;

pub use engine::*;
pub use label_box::*;
pub use safe_zone::*;
