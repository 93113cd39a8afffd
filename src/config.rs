use crate::colour::{colours, Colour};
use crate::layout::SafeZone;

/// Constants for fitting and sizing the label box. Build one with
/// [LayoutConfig::default] and the `with_*` methods; it is never mutated once
/// handed to a [LayoutEngine](crate::layout::LayoutEngine).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal padding between the widest line and each side of the box
    pub padding_px: u32,
    /// Vertical space added to the two line heights to get the box height
    pub inter_line_gap: u32,
    /// Shift applied to the box after centring on the anchor; negative moves it up
    pub vertical_bias: i32,
    /// Region the box must stay inside horizontally
    pub safe_zone: SafeZone,
    /// Multiplier applied to the proportional shrink to absorb metric nonlinearity
    pub shrink_safety_factor: f64,
    /// Subtracted from the safe zone width to get the maximum line width
    pub title_margin_px: u32,
    /// Smallest size a shrink may produce
    pub min_font_size: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            padding_px: 30,
            inter_line_gap: 60,
            vertical_bias: -200,
            safe_zone: SafeZone::default(),
            shrink_safety_factor: 0.9,
            title_margin_px: 40,
            min_font_size: 1,
        }
    }
}

impl LayoutConfig {
    pub fn with_padding(self, padding_px: u32) -> Self {
        LayoutConfig { padding_px, ..self }
    }

    pub fn with_inter_line_gap(self, inter_line_gap: u32) -> Self {
        LayoutConfig {
            inter_line_gap,
            ..self
        }
    }

    pub fn with_vertical_bias(self, vertical_bias: i32) -> Self {
        LayoutConfig {
            vertical_bias,
            ..self
        }
    }

    pub fn with_safe_zone(self, safe_zone: SafeZone) -> Self {
        LayoutConfig { safe_zone, ..self }
    }

    pub fn with_shrink_safety_factor(self, shrink_safety_factor: f64) -> Self {
        LayoutConfig {
            shrink_safety_factor,
            ..self
        }
    }

    pub fn with_title_margin(self, title_margin_px: u32) -> Self {
        LayoutConfig {
            title_margin_px,
            ..self
        }
    }

    pub fn with_min_font_size(self, min_font_size: u32) -> Self {
        LayoutConfig {
            min_font_size: min_font_size.max(1),
            ..self
        }
    }
}

/// How the label box and its two lines are painted
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub fill: Colour,
    pub outline: Colour,
    pub outline_width: u32,
    pub title_colour: Colour,
    pub subtitle_colour: Colour,
    /// Added to `box.y + title_height / 2` to get the title's vertical centre
    pub title_offset: i32,
    /// Added to `box.y + title_height` to get the subtitle's vertical centre
    pub subtitle_offset: i32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            fill: colours::VEIL,
            outline: colours::WHITE,
            outline_width: 4,
            title_colour: colours::INK,
            subtitle_colour: colours::SLATE,
            title_offset: 20,
            subtitle_offset: 50,
        }
    }
}

impl LabelStyle {
    /// Set the title and subtitle colours
    pub fn with_text_colours(self, title: Colour, subtitle: Colour) -> Self {
        LabelStyle {
            title_colour: title,
            subtitle_colour: subtitle,
            ..self
        }
    }

    /// Set the box fill, outline and outline width
    pub fn with_box(self, fill: Colour, outline: Colour, outline_width: u32) -> Self {
        LabelStyle {
            fill,
            outline,
            outline_width,
            ..self
        }
    }

    pub fn with_offsets(self, title_offset: i32, subtitle_offset: i32) -> Self {
        LabelStyle {
            title_offset,
            subtitle_offset,
            ..self
        }
    }
}
