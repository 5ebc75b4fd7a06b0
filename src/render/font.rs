//! Production typeface backed by `ab_glyph`.
//!
//! A TTF file is read and parsed once at startup; the parsed font is
//! read-only for the rest of the run. Measurement and drawing share the same
//! cursor walk (horizontal advance plus pair kerning), so
//! [`Typeface::text_width`] reports exactly the span [`Typeface::draw_text`]
//! covers.

use super::typeface::{Typeface, TypefaceError};
use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// A parsed TrueType font.
pub struct GlyphTypeface {
    font: FontVec,
}

impl std::fmt::Debug for GlyphTypeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphTypeface").finish_non_exhaustive()
    }
}

impl GlyphTypeface {
    /// Read and parse a font file.
    pub fn load(path: &Path) -> Result<Self, TypefaceError> {
        let bytes = std::fs::read(path).map_err(|source| TypefaceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(bytes).map_err(|source| TypefaceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { font })
    }

    /// Walk a run's glyphs left to right, calling `visit` with each glyph id
    /// and its cursor x. Returns the cursor after the final advance.
    fn walk_glyphs<F>(&self, text: &str, size: f32, mut visit: F) -> f32
    where
        F: FnMut(GlyphId, f32),
    {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut cursor = 0.0;
        let mut prev: Option<GlyphId> = None;

        for c in text.chars() {
            let id = self.font.glyph_id(c);
            if let Some(prev) = prev {
                cursor += scaled.kern(prev, id);
            }
            visit(id, cursor);
            cursor += scaled.h_advance(id);
            prev = Some(id);
        }
        cursor
    }
}

impl Typeface for GlyphTypeface {
    fn line_height(&self, size: f32) -> u32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        // descent is negative in ab_glyph
        (scaled.ascent() - scaled.descent()).ceil() as u32
    }

    fn text_width(&self, text: &str, size: f32) -> u32 {
        self.walk_glyphs(text, size, |_, _| {}).ceil() as u32
    }

    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: i32,
        y: i32,
        size: f32,
        color: Rgba<u8>,
    ) {
        let scale = PxScale::from(size);
        self.walk_glyphs(text, size, |id, cursor| {
            let glyph = id.with_scale_and_position(scale, point(x as f32 + cursor, y as f32));
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                return;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if px >= 0 && py >= 0 && (px as u32) < canvas.width() && (py as u32) < canvas.height()
                {
                    blend(canvas.get_pixel_mut(px as u32, py as u32), color, coverage);
                }
            });
        });
    }
}

/// Blend `src` onto `dst` weighted by glyph coverage. The canvas is opaque,
/// so only the color channels participate.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let a = coverage.clamp(0.0, 1.0);
    for i in 0..3 {
        dst.0[i] = (src.0[i] as f32 * a + dst.0[i] as f32 * (1.0 - a)).round() as u8;
    }
}
