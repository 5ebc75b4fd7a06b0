//! Card composition — the linear drawing sequence over one canvas.
//!
//! [`render_card`] owns the only mutable state in the program, an
//! [`RgbaImage`], and applies every drawing step in a fixed order:
//!
//! 1. uniform background fill
//! 2. border frame (four filled strips)
//! 3. profile picture overlay (Lanczos3 downscale, alpha "over" composite)
//! 4. hashtag row
//! 5. centered, word-wrapped title block
//! 6. site name
//!
//! Every primitive clips silently at the canvas edges; nothing here fails
//! except loading the profile picture.

use super::layout::{baseline_y, centered_x, wrap_words};
use super::style::CardStyle;
use super::typeface::Typeface;
use crate::frontmatter::PostMeta;
use image::imageops::FilterType;
use image::{ImageReader, Rgba, RgbaImage, imageops};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unable to open profile picture {path}: {source}")]
    ProfileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to decode profile picture {path}: {source}")]
    ProfileDecode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Compose the full card for a post.
pub fn render_card(
    meta: &PostMeta,
    typeface: &impl Typeface,
    style: &CardStyle,
    profile_path: &Path,
) -> Result<RgbaImage, RenderError> {
    let mut canvas = RgbaImage::from_pixel(style.width, style.height, style.background);

    draw_border(&mut canvas, style);
    overlay_profile(&mut canvas, profile_path, style)?;
    draw_tag_row(&mut canvas, typeface, style, &meta.tags);
    draw_title(&mut canvas, typeface, style, &meta.title);
    draw_site_name(&mut canvas, typeface, style);

    Ok(canvas)
}

/// Fill a rectangle, clipped to the canvas.
fn fill_rect(canvas: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x1 = x0.saturating_add(w).min(canvas.width());
    let y1 = y0.saturating_add(h).min(canvas.height());
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Draw the border as four filled strips: left, right, top, bottom.
/// Corner pixels belong to whichever strip lands last.
fn draw_border(canvas: &mut RgbaImage, style: &CardStyle) {
    let (w, h) = (style.width, style.height);
    let t = style.border_thickness;
    let color = style.foreground;

    fill_rect(canvas, 0, 0, t, h, color);
    fill_rect(canvas, w.saturating_sub(t), 0, t, h, color);
    fill_rect(canvas, 0, 0, w, t, color);
    fill_rect(canvas, 0, h.saturating_sub(t), w, t, color);
}

/// Height that preserves the source aspect ratio at `target_width`.
fn scaled_height(source: (u32, u32), target_width: u32) -> u32 {
    let (w, h) = source;
    ((h as f64 * target_width as f64 / w as f64).round() as u32).max(1)
}

/// Decode the profile picture, downscale it to the configured width, and
/// alpha-composite it near the bottom-right corner.
fn overlay_profile(
    canvas: &mut RgbaImage,
    path: &Path,
    style: &CardStyle,
) -> Result<(), RenderError> {
    let img = ImageReader::open(path)
        .map_err(|source| RenderError::ProfileOpen {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| RenderError::ProfileDecode {
            path: path.to_path_buf(),
            source,
        })?;

    let height = scaled_height((img.width(), img.height()), style.profile_width);
    let resized = img
        .resize_exact(style.profile_width, height, FilterType::Lanczos3)
        .to_rgba8();

    let (x, y) = style.profile_origin();
    imageops::overlay(canvas, &resized, x, y);
    Ok(())
}

/// Draw `#tag` tokens left to right from the tag origin. No wrapping — a row
/// longer than the canvas clips at the right edge.
fn draw_tag_row(canvas: &mut RgbaImage, typeface: &impl Typeface, style: &CardStyle, tags: &[String]) {
    let mut cursor = style.tag_origin_x;
    for tag in tags {
        let text = format!("#{tag}");
        typeface.draw_text(
            canvas,
            &text,
            cursor,
            style.footer_baseline,
            style.tag_size,
            style.foreground,
        );
        cursor += typeface.text_width(&text, style.tag_size) as i32 + style.tag_gap as i32;
    }
}

/// Lay the title out with the greedy wrap and draw each word at its
/// precomputed offset, rows vertically centered as a block.
fn draw_title(canvas: &mut RgbaImage, typeface: &impl Typeface, style: &CardStyle, title: &str) {
    let lines = wrap_words(title, style.width, style.word_gap, |word| {
        typeface.text_width(word, style.title_size)
    });
    let line_height = typeface.line_height(style.title_size);
    let total_rows = lines.len();

    for (row, line) in lines.iter().enumerate() {
        let y = baseline_y(style.height, line_height, total_rows, row);
        let start_x = centered_x(style.width, line.width);
        for word in &line.words {
            typeface.draw_text(
                canvas,
                &word.text,
                start_x + word.x_offset as i32,
                y,
                style.title_size,
                style.foreground,
            );
        }
    }
}

fn draw_site_name(canvas: &mut RgbaImage, typeface: &impl Typeface, style: &CardStyle) {
    let (x, y) = style.site_origin();
    typeface.draw_text(
        canvas,
        &style.site_name,
        x,
        y,
        style.site_size,
        style.foreground,
    );
}
