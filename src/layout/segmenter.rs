//! Recursive X-Y cut page segmentation.
//!
//! Builds a partition tree over word bounding boxes by alternating vertical
//! and horizontal cuts along low-density valleys of the projection profiles.
//! Gap thresholds adapt to the dominant font metrics of the words under
//! consideration, so dense text merges while column gutters and paragraph
//! gaps split.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use super::words::{group_into_lines, TextBlock, Word};
use crate::geom::PdfRectangle;

/// Node of the recursive partition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PartitionNode {
    /// Terminal group of words.
    Leaf(Vec<Word>),
    /// Sub-partitions produced by a cut.
    Internal(Vec<PartitionNode>),
}

impl PartitionNode {
    /// Leaves of the tree in document order. The empty sentinel yields
    /// nothing.
    pub fn leaves(&self) -> Vec<&[Word]> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a [Word]>) {
        match self {
            PartitionNode::Leaf(words) => {
                if !words.is_empty() {
                    out.push(words.as_slice());
                }
            }
            PartitionNode::Internal(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    const fn empty() -> Self {
        PartitionNode::Leaf(Vec::new())
    }
}

/// Statistical mode of the samples, binned to three decimal places.
///
/// Ties resolve to the smallest tied value and an empty sample yields zero,
/// so the default thresholds are total and deterministic.
pub fn dominant_value(samples: &[Decimal]) -> Decimal {
    let mut counts: FxHashMap<Decimal, usize> = FxHashMap::default();
    for sample in samples {
        *counts.entry(sample.round_dp(3)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|(va, ca), (vb, cb)| ca.cmp(cb).then_with(|| vb.cmp(va)))
        .map(|(value, _)| value)
        .unwrap_or(Decimal::ZERO)
}

/// Segments words into text blocks with default thresholds: dominant font
/// width is the mode of the letter widths, dominant font height is 1.5 times
/// the mode of the letter heights, and no minimum band width.
pub fn get_blocks(words: &[Word]) -> Vec<TextBlock> {
    get_blocks_with_width(words, Decimal::ZERO)
}

/// Same as [`get_blocks`] with a minimum band width below which vertical
/// cuts are suppressed.
pub fn get_blocks_with_width(words: &[Word], minimum_width: Decimal) -> Vec<TextBlock> {
    get_blocks_with(words, minimum_width, dominant_value, |samples| {
        Decimal::new(15, 1) * dominant_value(samples)
    })
}

/// Segments with constant gap thresholds instead of sampled ones.
pub fn get_blocks_with_thresholds(
    words: &[Word],
    minimum_width: Decimal,
    dominant_font_width: Decimal,
    dominant_font_height: Decimal,
) -> Vec<TextBlock> {
    get_blocks_with(
        words,
        minimum_width,
        move |_| dominant_font_width,
        move |_| dominant_font_height,
    )
}

/// Full form: the threshold functions map the letter width/height samples of
/// the words under consideration to a single gap threshold.
pub fn get_blocks_with<FW, FH>(
    words: &[Word],
    minimum_width: Decimal,
    dominant_font_width: FW,
    dominant_font_height: FH,
) -> Vec<TextBlock>
where
    FW: Fn(&[Decimal]) -> Decimal,
    FH: Fn(&[Decimal]) -> Decimal,
{
    partition(words, minimum_width, dominant_font_width, dominant_font_height)
        .leaves()
        .into_iter()
        .map(|leaf| TextBlock::new(group_into_lines(leaf)))
        .collect()
}

/// Builds the raw partition tree without materializing blocks.
pub fn partition<FW, FH>(
    words: &[Word],
    minimum_width: Decimal,
    dominant_font_width: FW,
    dominant_font_height: FH,
) -> PartitionNode
where
    FW: Fn(&[Decimal]) -> Decimal,
    FH: Fn(&[Decimal]) -> Decimal,
{
    vertical_cut(
        words.to_vec(),
        minimum_width,
        &dominant_font_width,
        &dominant_font_height,
        0,
    )
}

struct DominantFont {
    width: Decimal,
    height: Decimal,
}

/// Evaluates both threshold functions over the glyph samples of `words`.
/// Glyph extents may be negative for flipped orientations; magnitudes are
/// sampled.
fn dominant_font<FW, FH>(words: &[Word], width_fn: &FW, height_fn: &FH) -> DominantFont
where
    FW: Fn(&[Decimal]) -> Decimal,
    FH: Fn(&[Decimal]) -> Decimal,
{
    let mut widths = Vec::new();
    let mut heights = Vec::new();
    for word in words {
        for letter in word.letters() {
            widths.push(letter.glyph_rectangle().width().abs());
            heights.push(letter.glyph_rectangle().height().abs());
        }
    }
    DominantFont {
        width: width_fn(&widths),
        height: height_fn(&heights),
    }
}

fn words_bounds(words: &[Word]) -> Option<PdfRectangle> {
    words
        .iter()
        .map(|w| w.bounding_box())
        .reduce(|a, b| a.union(b))
}

fn vertical_cut<FW, FH>(
    words: Vec<Word>,
    minimum_width: Decimal,
    width_fn: &FW,
    height_fn: &FH,
    level: u32,
) -> PartitionNode
where
    FW: Fn(&[Decimal]) -> Decimal,
    FH: Fn(&[Decimal]) -> Decimal,
{
    let mut survivors: Vec<Word> = words.into_iter().filter(|w| !w.is_blank()).collect();
    if survivors.is_empty() {
        return PartitionNode::empty();
    }
    let band_width = words_bounds(&survivors).map_or(Decimal::ZERO, |b| b.width());
    survivors.sort_by(|a, b| a.bounding_box().left().cmp(&b.bounding_box().left()));
    if survivors.len() == 1 || band_width <= minimum_width {
        return PartitionNode::Leaf(survivors);
    }

    let dominant = dominant_font(&survivors, width_fn, height_fn);

    // Horizontal projection profile: runs of (left, right) intervals.
    let mut profile: Vec<(Decimal, Decimal)> = Vec::new();
    let first = survivors[0].bounding_box();
    let (mut lo, mut hi) = (first.left(), first.right());
    let last = survivors.len() - 1;
    for (i, word) in survivors.iter().enumerate().skip(1) {
        let bounds = word.bounding_box();
        let (left, right) = (bounds.left(), bounds.right());
        if (left >= lo && left <= hi) || (right >= lo && right <= hi) {
            // The left sort rules out left < lo; strictly contained words
            // leave the run unchanged.
            if left >= lo && left <= hi && right > hi {
                hi = right;
            }
        } else if left - hi <= dominant.width {
            hi = right;
        } else if hi - lo < minimum_width {
            // The run is still too narrow to stand alone.
            hi = right;
        } else if i != last {
            profile.push((lo, hi));
            lo = left;
            hi = right;
        }
        if i == last {
            // The final run is appended as-is. A cut landing on the last
            // word therefore never claims it; salvage below picks it up.
            profile.push((lo, hi));
        }
    }

    let mut claimed = vec![false; survivors.len()];
    let mut children = Vec::with_capacity(profile.len());
    for &(lo, hi) in &profile {
        let mut band = Vec::new();
        for (i, word) in survivors.iter().enumerate() {
            let bounds = word.bounding_box();
            if bounds.left() >= lo && bounds.right() <= hi {
                band.push(word.clone());
                claimed[i] = true;
            }
        }
        if !band.is_empty() {
            children.push(horizontal_cut(band, minimum_width, width_fn, height_fn, level));
        }
    }

    // Words no run claimed survive as singleton leaves.
    for (i, word) in survivors.iter().enumerate() {
        if !claimed[i] {
            children.push(PartitionNode::Leaf(vec![word.clone()]));
        }
    }

    PartitionNode::Internal(children)
}

fn horizontal_cut<FW, FH>(
    words: Vec<Word>,
    minimum_width: Decimal,
    width_fn: &FW,
    height_fn: &FH,
    mut level: u32,
) -> PartitionNode
where
    FW: Fn(&[Decimal]) -> Decimal,
    FH: Fn(&[Decimal]) -> Decimal,
{
    let mut survivors: Vec<Word> = words.iter().filter(|w| !w.is_blank()).cloned().collect();
    if survivors.is_empty() {
        return PartitionNode::empty();
    }
    survivors.sort_by(|a, b| a.bounding_box().bottom().cmp(&b.bounding_box().bottom()));
    if survivors.len() == 1 {
        return PartitionNode::Leaf(survivors);
    }

    let dominant = dominant_font(&survivors, width_fn, height_fn);

    // Vertical projection profile: runs of (bottom, top) intervals.
    let mut profile: Vec<(Decimal, Decimal)> = Vec::new();
    let first = survivors[0].bounding_box();
    let (mut lo, mut hi) = (first.bottom(), first.top());
    let last = survivors.len() - 1;
    for (i, word) in survivors.iter().enumerate().skip(1) {
        let bounds = word.bounding_box();
        let (bottom, top) = (bounds.bottom(), bounds.top());
        if (bottom >= lo && bottom <= hi) || (top >= lo && top <= hi) {
            if bottom >= lo && bottom <= hi && top > hi {
                hi = top;
            }
        } else if bottom - hi <= dominant.height {
            hi = top;
        } else if i != last {
            profile.push((lo, hi));
            lo = bottom;
            hi = top;
        }
        if i == last {
            profile.push((lo, hi));
        }
    }

    if profile.len() == 1 {
        if level >= 1 {
            // The group refuses to split on either axis; stop recursing.
            return PartitionNode::Leaf(words);
        }
        level += 1;
    }

    let mut claimed = vec![false; survivors.len()];
    let mut children = Vec::with_capacity(profile.len());
    for &(lo, hi) in &profile {
        let mut band = Vec::new();
        for (i, word) in survivors.iter().enumerate() {
            let bounds = word.bounding_box();
            if bounds.bottom() >= lo && bounds.top() <= hi {
                band.push(word.clone());
                claimed[i] = true;
            }
        }
        if !band.is_empty() {
            children.push(vertical_cut(band, minimum_width, width_fn, height_fn, level));
        }
    }

    for (i, word) in survivors.iter().enumerate() {
        if !claimed[i] {
            children.push(PartitionNode::Leaf(vec![word.clone()]));
        }
    }

    PartitionNode::Internal(children)
}
