//! Page geometry and the fixed style presets. Nothing here depends on input.

use serde::{Deserialize, Serialize};

use crate::document::font_metrics::FontFace;

/// A4 in PostScript points.
pub const A4_WIDTH_PT: f32 = 595.28;
pub const A4_HEIGHT_PT: f32 = 841.89;
pub const MARGIN_PT: f32 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// `0x1f5a8a` -> components in `0.0..=1.0`.
    pub fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub face: FontFace,
    pub size_pt: f32,
    /// Baseline-to-baseline distance.
    pub leading_pt: f32,
    pub color: Rgb,
    /// Skipped when the block starts a page.
    pub space_before_pt: f32,
    pub space_after_pt: f32,
}

/// Horizontal rule spanning the content width, drawn at the bottom of its box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleStyle {
    pub thickness_pt: f32,
    pub color: Rgb,
    pub box_height_pt: f32,
}

/// Layout parameters for every page of a generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,
    pub margin_top_pt: f32,
    pub margin_bottom_pt: f32,
    pub title: TextStyle,
    pub heading: TextStyle,
    pub body: TextStyle,
    pub divider: RuleStyle,
}

impl PageConfig {
    pub fn content_width(&self) -> f32 {
        self.width_pt - self.margin_left_pt - self.margin_right_pt
    }

    /// Y of the top edge of the content area (PDF origin is bottom-left).
    pub fn content_top(&self) -> f32 {
        self.height_pt - self.margin_top_pt
    }

    pub fn content_bottom(&self) -> f32 {
        self.margin_bottom_pt
    }
}

/// A4 with 36pt margins and the title / heading / body presets.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        width_pt: A4_WIDTH_PT,
        height_pt: A4_HEIGHT_PT,
        margin_left_pt: MARGIN_PT,
        margin_right_pt: MARGIN_PT,
        margin_top_pt: MARGIN_PT,
        margin_bottom_pt: MARGIN_PT,
        title: TextStyle {
            face: FontFace::HelveticaBold,
            size_pt: 20.0,
            leading_pt: 24.0,
            color: Rgb::from_hex(0x1f5a8a),
            space_before_pt: 0.0,
            space_after_pt: 10.0,
        },
        heading: TextStyle {
            face: FontFace::HelveticaBold,
            size_pt: 13.0,
            leading_pt: 16.0,
            color: Rgb::from_hex(0x2b6fb3),
            space_before_pt: 10.0,
            space_after_pt: 4.0,
        },
        body: TextStyle {
            face: FontFace::Helvetica,
            size_pt: 11.0,
            leading_pt: 14.0,
            color: Rgb::BLACK,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
        },
        divider: RuleStyle {
            thickness_pt: 1.0,
            color: Rgb::from_hex(0xcccccc),
            box_height_pt: 6.0,
        },
    }
}
