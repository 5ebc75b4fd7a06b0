use blog_card::render::{CardStyle, GlyphTypeface};
use blog_card::{frontmatter, output, render};
use clap::Parser;
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "blog-card")]
#[command(about = "Generate a social-card thumbnail for a blog post")]
#[command(long_about = "\
Generate a social-card thumbnail for a blog post

Reads the post's front matter and renders an 876x438 PNG card: dark
background, light border, your profile picture, the post's hashtags, the
title centered and word-wrapped, and your site name.

Front matter (either fencing, at the very top of the post):

  ---                        +++
  title: Hello World         title = \"Hello World\"
  tags: go, blog             tags = [\"go\", \"blog\"]
  ---                        +++

The card is written to <output-dir>/<post-basename>.png.")]
#[command(version = version_string())]
struct Cli {
    /// Blog post file to generate a card for
    post: PathBuf,

    /// TrueType font used for all text on the card
    #[arg(
        long,
        default_value = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"
    )]
    font: PathBuf,

    /// Profile picture composited near the bottom-right corner
    #[arg(long, default_value = "static/images/profile.png")]
    profile: PathBuf,

    /// Directory the card PNG is written to
    #[arg(long, default_value = "static/images/logos")]
    output_dir: PathBuf,

    /// Site name drawn in the bottom-right text block
    #[arg(long, default_value = "example.com")]
    site_name: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let meta = frontmatter::read_post_meta(&cli.post)?;
    let typeface = GlyphTypeface::load(&cli.font)?;
    let style = CardStyle {
        site_name: cli.site_name,
        ..CardStyle::default()
    };

    let canvas = render::render_card(&meta, &typeface, &style, &cli.profile)?;
    let card_path = output::write_card(&canvas, &cli.post, &cli.output_dir)?;
    output::print_summary(&meta, &card_path, canvas.dimensions());

    Ok(())
}
