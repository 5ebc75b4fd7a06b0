//! Text backend trait and shared error type.
//!
//! The [`Typeface`] trait defines the three operations the layout and
//! compositing code needs from a font: line height, run measurement, and a
//! baseline draw. Measurement and drawing must walk glyphs identically so a
//! measured run occupies exactly the pixels a drawn run does.
//!
//! The production implementation is
//! [`GlyphTypeface`](super::font::GlyphTypeface) — a parsed TTF behind
//! `ab_glyph`. Tests use [`tests::MockTypeface`], which assigns every
//! character a fixed advance, so layout logic is exercised without a font
//! file on disk.

use image::{Rgba, RgbaImage};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypefaceError {
    #[error("unable to read font file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to parse font file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ab_glyph::InvalidFont,
    },
}

/// Trait for text measurement and rasterization backends.
pub trait Typeface {
    /// Height of one text row at the given pixel size (ascent + descent).
    fn line_height(&self, size: f32) -> u32;

    /// Pixel width of a rendered run at the given size.
    fn text_width(&self, text: &str, size: f32) -> u32;

    /// Draw a run with its baseline starting at `(x, y)`, in a solid color.
    /// Pixels outside the canvas are clipped silently.
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: i32,
        y: i32,
        size: f32,
        color: Rgba<u8>,
    );
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// A single recorded `draw_text` call.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DrawOp {
        pub text: String,
        pub x: i32,
        pub y: i32,
        pub size: f32,
    }

    /// Mock typeface with a fixed per-character advance.
    ///
    /// Records draw calls instead of rasterizing, so tests can assert cursor
    /// positions and layout decisions. Uses Mutex so `draw_text` can record
    /// through `&self` like the real backend.
    pub struct MockTypeface {
        pub advance: u32,
        pub row_height: u32,
        pub ops: Mutex<Vec<DrawOp>>,
    }

    impl MockTypeface {
        pub fn new(advance: u32, row_height: u32) -> Self {
            Self {
                advance,
                row_height,
                ops: Mutex::new(Vec::new()),
            }
        }

        pub fn recorded(&self) -> Vec<DrawOp> {
            self.ops.lock().unwrap().clone()
        }
    }

    impl Typeface for MockTypeface {
        fn line_height(&self, _size: f32) -> u32 {
            self.row_height
        }

        fn text_width(&self, text: &str, _size: f32) -> u32 {
            text.chars().count() as u32 * self.advance
        }

        fn draw_text(
            &self,
            _canvas: &mut RgbaImage,
            text: &str,
            x: i32,
            y: i32,
            size: f32,
            _color: Rgba<u8>,
        ) {
            self.ops.lock().unwrap().push(DrawOp {
                text: text.to_string(),
                x,
                y,
                size,
            });
        }
    }

    #[test]
    fn mock_width_is_advance_times_chars() {
        let face = MockTypeface::new(10, 20);
        assert_eq!(face.text_width("hello", 48.0), 50);
        assert_eq!(face.text_width("", 48.0), 0);
    }

    #[test]
    fn mock_records_draw_calls() {
        let face = MockTypeface::new(10, 20);
        let mut canvas = RgbaImage::new(10, 10);
        face.draw_text(&mut canvas, "hi", 3, 7, 18.0, Rgba([0, 0, 0, 255]));

        let ops = face.recorded();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].text, "hi");
        assert_eq!((ops[0].x, ops[0].y), (3, 7));
    }
}
