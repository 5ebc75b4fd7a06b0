//! Card writing and CLI summary output.
//!
//! The writer derives the output file name from the post's base name
//! (extension stripped, `.png` appended), creates the output directory if it
//! does not exist yet, and encodes the canvas losslessly through a buffered
//! PNG encoder.
//!
//! Summary formatting follows the format/print split: [`format_summary`] is
//! pure and returns strings for testability, [`print_summary`] writes them to
//! stdout.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::frontmatter::PostMeta;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("unable to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to create image file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to encode PNG {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Output file name for a post: base name without extension, plus `.png`.
///
/// `posts/2024-01-01-hello.md` → `2024-01-01-hello.png`
pub fn card_file_name(post_path: &Path) -> String {
    let stem = post_path
        .file_stem()
        .unwrap_or(post_path.as_os_str())
        .to_string_lossy();
    format!("{stem}.png")
}

/// Write the canvas as a PNG under `output_dir`, creating the directory if
/// needed. Returns the path of the written file.
pub fn write_card(
    canvas: &RgbaImage,
    post_path: &Path,
    output_dir: &Path,
) -> Result<PathBuf, OutputError> {
    std::fs::create_dir_all(output_dir).map_err(|source| OutputError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(card_file_name(post_path));
    let file = std::fs::File::create(&path).map_err(|source| OutputError::CreateFile {
        path: path.clone(),
        source,
    })?;
    let writer = BufWriter::new(file);

    PngEncoder::new(writer)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| OutputError::Encode {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

/// Format the success summary.
///
/// ```text
/// Hello World (2 tags)
///     Card: static/images/logos/2024-01-01-hello.png (876x438)
/// ```
pub fn format_summary(meta: &PostMeta, card_path: &Path, dimensions: (u32, u32)) -> Vec<String> {
    let tags = match meta.tags.len() {
        1 => "1 tag".to_string(),
        n => format!("{n} tags"),
    };
    vec![
        format!("{} ({})", meta.title, tags),
        format!(
            "    Card: {} ({}x{})",
            card_path.display(),
            dimensions.0,
            dimensions.1
        ),
    ]
}

/// Print the success summary to stdout.
pub fn print_summary(meta: &PostMeta, card_path: &Path, dimensions: (u32, u32)) {
    for line in format_summary(meta, card_path, dimensions) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::typeface::tests::MockTypeface;
    use crate::render::{CardStyle, render_card};
    use image::Rgba;
    use tempfile::TempDir;

    fn sample_meta() -> PostMeta {
        PostMeta {
            title: "Hello World".to_string(),
            tags: vec!["go".to_string(), "blog".to_string()],
        }
    }

    // =========================================================================
    // naming
    // =========================================================================

    #[test]
    fn file_name_strips_extension() {
        assert_eq!(
            card_file_name(Path::new("posts/2024-01-01-hello.md")),
            "2024-01-01-hello.png"
        );
    }

    #[test]
    fn file_name_without_extension() {
        assert_eq!(card_file_name(Path::new("posts/hello")), "hello.png");
    }

    #[test]
    fn file_name_keeps_inner_dots() {
        assert_eq!(
            card_file_name(Path::new("v1.2-release.md")),
            "v1.2-release.png"
        );
    }

    // =========================================================================
    // writing
    // =========================================================================

    #[test]
    fn write_creates_directory_and_file() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("static/images/logos");
        let canvas = RgbaImage::from_pixel(876, 438, Rgba([33, 33, 33, 255]));

        let path = write_card(&canvas, Path::new("posts/hello.md"), &out_dir).unwrap();
        assert_eq!(path, out_dir.join("hello.png"));
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn write_is_idempotent_over_existing_directory() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("logos");
        let canvas = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));

        write_card(&canvas, Path::new("a.md"), &out_dir).unwrap();
        write_card(&canvas, Path::new("b.md"), &out_dir).unwrap();
        assert!(out_dir.join("a.png").exists());
        assert!(out_dir.join("b.png").exists());
    }

    #[test]
    fn written_png_decodes_back_identically() {
        let tmp = TempDir::new().unwrap();
        let canvas = RgbaImage::from_fn(32, 16, |x, y| {
            Rgba([(x * 8) as u8, (y * 16) as u8, 128, 255])
        });

        let path = write_card(&canvas, Path::new("roundtrip.md"), tmp.path()).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (32, 16));
        assert_eq!(decoded, canvas);
    }

    #[test]
    fn unwritable_directory_errors() {
        let tmp = TempDir::new().unwrap();
        // A file where the directory should be
        let blocker = tmp.path().join("logos");
        std::fs::write(&blocker, b"file in the way").unwrap();
        let canvas = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));

        let err = write_card(&canvas, Path::new("a.md"), &blocker).unwrap_err();
        assert!(matches!(err, OutputError::CreateDir { .. }));
    }

    // =========================================================================
    // summary
    // =========================================================================

    #[test]
    fn summary_shows_title_tags_path_and_dimensions() {
        let lines = format_summary(
            &sample_meta(),
            Path::new("static/images/logos/hello.png"),
            (876, 438),
        );
        assert_eq!(lines[0], "Hello World (2 tags)");
        assert_eq!(lines[1], "    Card: static/images/logos/hello.png (876x438)");
    }

    #[test]
    fn summary_singular_tag() {
        let meta = PostMeta {
            title: "Hi".to_string(),
            tags: vec!["go".to_string()],
        };
        let lines = format_summary(&meta, Path::new("hi.png"), (876, 438));
        assert_eq!(lines[0], "Hi (1 tag)");
    }

    // =========================================================================
    // end to end: render + write
    // =========================================================================

    #[test]
    fn full_pipeline_produces_decodable_card() {
        let tmp = TempDir::new().unwrap();
        let profile = tmp.path().join("profile.png");
        RgbaImage::from_pixel(100, 100, Rgba([200, 0, 0, 255]))
            .save(&profile)
            .unwrap();

        let face = MockTypeface::new(10, 56);
        let style = CardStyle::default();
        let canvas = render_card(&sample_meta(), &face, &style, &profile).unwrap();

        let out_dir = tmp.path().join("static/images/logos");
        let path = write_card(&canvas, Path::new("posts/2024-01-01-hello.md"), &out_dir).unwrap();

        assert_eq!(path, out_dir.join("2024-01-01-hello.png"));
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (876, 438));
        // Border and background survive the encode round trip
        assert_eq!(*decoded.get_pixel(0, 0), Rgba([239, 239, 239, 255]));
        assert_eq!(*decoded.get_pixel(400, 200), Rgba([33, 33, 33, 255]));
    }
}
