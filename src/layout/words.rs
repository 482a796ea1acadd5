//! Word-level input model and text block assembly.
//!
//! `Word` and `Letter` are the input contract: upstream recognition produces
//! them from glyph runs. `TextLine` and `TextBlock` are the output side,
//! assembled from the leaves of a partition tree.

use rust_decimal::Decimal;

use crate::geom::{PdfPoint, PdfRectangle};

/// A recognized glyph with its bounding geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Letter {
    glyph_rectangle: PdfRectangle,
}

impl Letter {
    pub const fn new(glyph_rectangle: PdfRectangle) -> Self {
        Self { glyph_rectangle }
    }

    /// Geometry of the glyph. Width and height may be negative for flipped
    /// glyph orientations.
    pub const fn glyph_rectangle(&self) -> PdfRectangle {
        self.glyph_rectangle
    }
}

/// A recognized word: its text, its letters and the box covering them.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    text: String,
    bounding_box: PdfRectangle,
    letters: Vec<Letter>,
}

impl Word {
    /// Creates a word from its letters. The bounding box is the union of the
    /// normalized glyph bounds.
    pub fn new(text: impl Into<String>, letters: Vec<Letter>) -> Self {
        let bounding_box = union_of(letters.iter().map(|l| l.glyph_rectangle().normalized()));
        Self {
            text: text.into(),
            bounding_box,
            letters,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn bounding_box(&self) -> PdfRectangle {
        self.bounding_box
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// True when the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One visual line of words, ordered left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    words: Vec<Word>,
    bounding_box: PdfRectangle,
}

impl TextLine {
    pub fn new(mut words: Vec<Word>) -> Self {
        words.sort_by(|a, b| a.bounding_box().left().cmp(&b.bounding_box().left()));
        let bounding_box = union_of(words.iter().map(|w| w.bounding_box()));
        Self {
            words,
            bounding_box,
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub const fn bounding_box(&self) -> PdfRectangle {
        self.bounding_box
    }

    /// Line text with single spaces between words.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(word.text());
        }
        out
    }
}

/// A contiguous block of text lines, ordered top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    lines: Vec<TextLine>,
    bounding_box: PdfRectangle,
}

impl TextBlock {
    pub fn new(lines: Vec<TextLine>) -> Self {
        let bounding_box = union_of(lines.iter().map(|l| l.bounding_box()));
        Self {
            lines,
            bounding_box,
        }
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    pub const fn bounding_box(&self) -> PdfRectangle {
        self.bounding_box
    }

    /// All words of the block in reading order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.lines.iter().flat_map(|line| line.words().iter())
    }

    /// Block text with lines separated by newlines.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.text());
        }
        out
    }
}

/// Groups a leaf's words into text lines by vertical proximity.
///
/// Scanning left to right, a word joins the first open line whose vertical
/// extent overlaps its own; otherwise it opens a new line. Lines come back
/// ordered top to bottom.
pub fn group_into_lines(words: &[Word]) -> Vec<TextLine> {
    let mut ordered: Vec<&Word> = words.iter().collect();
    ordered.sort_by(|a, b| a.bounding_box().left().cmp(&b.bounding_box().left()));

    let mut open: Vec<(Decimal, Decimal, Vec<Word>)> = Vec::new();
    for word in ordered {
        let bounds = word.bounding_box();
        let joined = open
            .iter()
            .position(|(bottom, top, _)| bounds.bottom() <= *top && *bottom <= bounds.top());
        match joined {
            Some(i) => {
                let (bottom, top, members) = &mut open[i];
                *bottom = (*bottom).min(bounds.bottom());
                *top = (*top).max(bounds.top());
                members.push(word.clone());
            }
            None => open.push((bounds.bottom(), bounds.top(), vec![word.clone()])),
        }
    }

    open.sort_by(|a, b| b.1.cmp(&a.1));
    open.into_iter()
        .map(|(_, _, members)| TextLine::new(members))
        .collect()
}

fn union_of(boxes: impl Iterator<Item = PdfRectangle>) -> PdfRectangle {
    boxes
        .reduce(|a, b| a.union(b))
        .unwrap_or(PdfRectangle::new(PdfPoint::ORIGIN, PdfPoint::ORIGIN))
}
