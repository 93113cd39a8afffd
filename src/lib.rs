//! Fit a title and subtitle into the safe zone of a raster header image.
//!
//! See [layout] for the fitting and box layout, [Compositor] for painting a
//! layout onto a [DrawTarget], and [HeaderBuilder] for the whole pipeline.

/// The built-in fallback font
pub mod bitmap;

mod builder;
pub use builder::*;

/// Canvas dimensions and common presets
pub mod canvas;

mod colour;
pub use colour::*;

mod compositor;
pub use compositor::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod fit;
pub use fit::*;

mod font;
pub use font::*;

/// Label-box layout within a canvas's safe zone
pub mod layout;

mod metrics;
pub use metrics::*;

mod provider;
pub use provider::*;

mod raster;
pub use raster::*;

mod rect;
pub use rect::*;
