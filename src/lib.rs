//! # Blog Card
//!
//! Generates a static social-card thumbnail for a blog post: front matter in,
//! one 876×438 PNG out.
//!
//! # Architecture: One Linear Pass
//!
//! The whole program is a strict sequence over a single in-memory canvas:
//!
//! ```text
//! 1. Read      post front matter  →  PostMeta (title, tags)
//! 2. Render    background → border → profile picture → tags → title → site name
//! 3. Write     canvas  →  static/images/logos/<post>.png
//! ```
//!
//! There is no state between runs, no network, and no concurrency. Any
//! failure aborts the run with a descriptive error; no partial card is ever
//! left at the output path.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | Parses the leading `---`/`+++` metadata block into `PostMeta` |
//! | [`render`] | Layout math, glyph rasterization, and canvas composition |
//! | [`output`] | Output naming, directory creation, PNG encoding, CLI summary |
//!
//! # Design Decisions
//!
//! ## Single-Pass Title Layout
//!
//! The title block is the one nontrivial algorithm: greedy word wrapping into
//! horizontally centered rows, the block itself vertically centered. Layout
//! runs in one pass that records each word's final x-offset
//! ([`render::layout::wrap_words`]), so measurement and drawing cannot drift
//! apart and a line's width never includes a trailing word gap.
//!
//! ## Typeface Behind a Trait
//!
//! Text measurement and rasterization sit behind
//! [`render::Typeface`], with the production implementation
//! ([`render::GlyphTypeface`]) wrapping a parsed TTF via `ab_glyph`. Layout
//! and composition tests run against a mock with fixed per-character
//! advances, so the test suite needs no font files and no golden images.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, Lanczos3 resampling, alpha compositing, and PNG encoding all
//! come from the `image` crate; glyph outlines from `ab_glyph`. The binary is
//! fully self-contained — no system font stack, no native image libraries.

pub mod frontmatter;
pub mod output;
pub mod render;
