//! Fixed layout constants for the card.
//!
//! [`CardStyle`] describes *what* the card looks like, not *how* it is drawn.
//! It is the interface between the CLI (which only overrides `site_name`) and
//! the [`card`](super::card) compositor. Anchor points near the right and
//! bottom edges are stored as insets so they stay pinned to the corner if the
//! canvas dimensions ever change.

use image::Rgba;

/// Visual constants for a rendered card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background fill color.
    pub background: Rgba<u8>,
    /// Border and text color.
    pub foreground: Rgba<u8>,
    /// Border thickness in pixels, measured inward from each edge.
    pub border_thickness: u32,
    /// Pixel size of the hashtag row text.
    pub tag_size: f32,
    /// Pixel size of the title text.
    pub title_size: f32,
    /// Pixel size of the site name text.
    pub site_size: f32,
    /// Horizontal gap between words in the title block.
    pub word_gap: u32,
    /// Horizontal gap between hashtags in the tag row.
    pub tag_gap: u32,
    /// Baseline x of the first hashtag.
    pub tag_origin_x: i32,
    /// Shared baseline y of the tag row and the site name.
    pub footer_baseline: i32,
    /// Site name baseline x, as an inset from the right edge.
    pub site_inset_x: i32,
    /// Width the profile picture is downscaled to, preserving aspect ratio.
    pub profile_width: u32,
    /// Top-left corner of the profile overlay, as insets from the
    /// bottom-right corner.
    pub profile_inset: (i32, i32),
    /// Text drawn as the site name block.
    pub site_name: String,
}

impl CardStyle {
    /// Absolute top-left corner of the profile overlay.
    pub fn profile_origin(&self) -> (i64, i64) {
        (
            self.width as i64 - self.profile_inset.0 as i64,
            self.height as i64 - self.profile_inset.1 as i64,
        )
    }

    /// Absolute baseline point of the site name.
    pub fn site_origin(&self) -> (i32, i32) {
        (self.width as i32 - self.site_inset_x, self.footer_baseline)
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            width: 876,
            height: 438,
            background: Rgba([33, 33, 33, 255]),
            foreground: Rgba([239, 239, 239, 255]),
            border_thickness: 10,
            tag_size: 18.0,
            title_size: 48.0,
            site_size: 24.0,
            word_gap: 15,
            tag_gap: 10,
            tag_origin_x: 30,
            footer_baseline: 404,
            site_inset_x: 270,
            profile_width: 100,
            profile_inset: (150, 165),
            site_name: "example.com".to_string(),
        }
    }
}
