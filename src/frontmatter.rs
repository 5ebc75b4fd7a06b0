//! Post metadata extraction from front matter.
//!
//! A post declares its title and tags in a metadata block at the very top of
//! the file, in one of two fencings:
//!
//! ```text
//! ---                        +++
//! title: Hello World         title = "Hello World"
//! tags: go, blog             tags = ["go", "blog"]
//! ---                        +++
//! ```
//!
//! The TOML form (`+++`) is deserialized with serde. The YAML-style form
//! (`---`) is a simple key/value scan — `title` is taken verbatim, `tags`
//! accepts both a comma list (`go, blog`) and an inline array
//! (`[go, blog]`), with optional quoting per item. Unknown keys are ignored;
//! the post body is never read.
//!
//! Parsing is all-or-nothing: a missing block, an unterminated block, bad
//! TOML, or an empty title each abort with a distinct error and no partial
//! result.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("unable to read post {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path}: no front matter block at the start of the file")]
    Missing { path: PathBuf },
    #[error("{path}: front matter block is never closed")]
    Unterminated { path: PathBuf },
    #[error("{path}: invalid TOML front matter: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{path}: front matter has no title")]
    MissingTitle { path: PathBuf },
}

/// Metadata drawn onto the card. Parsed once, immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Read and parse the front matter of the post at `path`.
pub fn read_post_meta(path: &Path) -> Result<PostMeta, FrontmatterError> {
    let content = std::fs::read_to_string(path).map_err(|source| FrontmatterError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let meta = match detect_block(&content) {
        Detected::Yaml(block) => parse_yaml_like(block),
        Detected::Toml(block) => {
            toml::from_str(block).map_err(|source| FrontmatterError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        }
        Detected::Unterminated => {
            return Err(FrontmatterError::Unterminated {
                path: path.to_path_buf(),
            });
        }
        Detected::None => {
            return Err(FrontmatterError::Missing {
                path: path.to_path_buf(),
            });
        }
    };

    if meta.title.trim().is_empty() {
        return Err(FrontmatterError::MissingTitle {
            path: path.to_path_buf(),
        });
    }
    Ok(meta)
}

enum Detected<'a> {
    Yaml(&'a str),
    Toml(&'a str),
    Unterminated,
    None,
}

/// Detect a leading `---` or `+++` fenced block.
fn detect_block(content: &str) -> Detected<'_> {
    let trimmed = content.trim_start();

    for (fence, close, is_toml) in [("---", "\n---", false), ("+++", "\n+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence) {
            return match rest.find(close) {
                Some(end) => {
                    let block = rest[..end].trim();
                    if is_toml {
                        Detected::Toml(block)
                    } else {
                        Detected::Yaml(block)
                    }
                }
                None => Detected::Unterminated,
            };
        }
    }
    Detected::None
}

/// Parse simple YAML-like `key: value` lines.
fn parse_yaml_like(block: &str) -> PostMeta {
    let mut meta = PostMeta {
        title: String::new(),
        tags: Vec::new(),
    };

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "title" => meta.title = unquote(value).to_string(),
            "tags" => meta.tags = parse_tag_list(value),
            _ => {}
        }
    }
    meta
}

/// Split `go, blog` or `[go, blog]` into tag tokens, dropping empties.
fn parse_tag_list(value: &str) -> Vec<String> {
    let inner = value
        .trim()
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    inner
        .split(',')
        .map(|item| unquote(item.trim()).to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
