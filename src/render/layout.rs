//! Pure layout math for the title block.
//!
//! All functions here are pure and testable without fonts, images, or I/O —
//! callers pass a measure function instead of a typeface.
//!
//! The title is laid out in a single greedy pass: words are packed onto a
//! line while they fit, and each placed word carries its final x-offset
//! within the line. Measuring and drawing therefore cannot disagree about
//! where a word lands, and a line's width is simply the end of its last
//! word — the trailing word gap is never part of it.

/// A word with its resolved horizontal position within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub text: String,
    /// Offset from the line's left edge, in pixels.
    pub x_offset: u32,
}

/// One laid-out line of the title block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLine {
    pub words: Vec<PlacedWord>,
    /// Exact rendered width: last word's offset plus its measured width.
    pub width: u32,
}

/// Greedy-pack whitespace-delimited words into lines of at most `max_width`.
///
/// A line's first word is always placed at offset 0, even if it alone exceeds
/// `max_width` — an oversized word gets its own line and clips at the canvas
/// edge rather than producing an empty line. Each further word is appended at
/// `width + gap` while `width + gap + word_width < max_width` holds.
///
/// An empty or all-whitespace title produces no lines.
pub fn wrap_words<F>(title: &str, max_width: u32, gap: u32, measure: F) -> Vec<LayoutLine>
where
    F: Fn(&str) -> u32,
{
    let mut lines: Vec<LayoutLine> = Vec::new();
    let mut current: Option<LayoutLine> = None;

    for word in title.split_whitespace() {
        let word_width = measure(word);

        match current.as_mut() {
            Some(line) if line.width + gap + word_width < max_width => {
                let x_offset = line.width + gap;
                line.words.push(PlacedWord {
                    text: word.to_string(),
                    x_offset,
                });
                line.width = x_offset + word_width;
            }
            Some(line) => {
                lines.push(std::mem::replace(line, single_word_line(word, word_width)));
            }
            None => {
                current = Some(single_word_line(word, word_width));
            }
        }
    }

    if let Some(line) = current {
        lines.push(line);
    }
    lines
}

fn single_word_line(word: &str, width: u32) -> LayoutLine {
    LayoutLine {
        words: vec![PlacedWord {
            text: word.to_string(),
            x_offset: 0,
        }],
        width,
    }
}

/// Left edge x that horizontally centers a line on the canvas.
///
/// Negative for lines wider than the canvas — the draw call clips.
pub fn centered_x(canvas_width: u32, line_width: u32) -> i32 {
    (canvas_width as i32 - line_width as i32) / 2
}

/// Baseline y of row `row` in a block of `total_rows` rows stacked with no
/// inter-line gap, vertically centered on the canvas.
pub fn baseline_y(canvas_height: u32, line_height: u32, total_rows: usize, row: usize) -> i32 {
    let block = total_rows as i32 * line_height as i32;
    (canvas_height as i32 - block) / 2 + row as i32 * line_height as i32
}
