//! Distance measures and nearest-neighbor search over typed collections.
//!
//! Coordinates live in exact decimals; distances fall back to IEEE-754 for
//! `sqrt` and `atan2`.

use ordered_float::OrderedFloat;

use crate::error::{LayoutError, Result};
use crate::geom::PdfPoint;

/// Euclidean distance between two points.
pub fn euclidean(point1: PdfPoint, point2: PdfPoint) -> f64 {
    let dx = point2.x_f64() - point1.x_f64();
    let dy = point2.y_f64() - point1.y_f64();
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance with per-axis weights.
pub fn weighted_euclidean(point1: PdfPoint, point2: PdfPoint, wx: f64, wy: f64) -> f64 {
    let dx = point2.x_f64() - point1.x_f64();
    let dy = point2.y_f64() - point1.y_f64();
    (wx * dx * dx + wy * dy * dy).sqrt()
}

/// Manhattan distance between two points.
pub fn manhattan(point1: PdfPoint, point2: PdfPoint) -> f64 {
    (point2.x_f64() - point1.x_f64()).abs() + (point2.y_f64() - point1.y_f64()).abs()
}

/// Absolute vertical separation.
pub fn vertical(point1: PdfPoint, point2: PdfPoint) -> f64 {
    (point2.y_f64() - point1.y_f64()).abs()
}

/// Absolute horizontal separation.
pub fn horizontal(point1: PdfPoint, point2: PdfPoint) -> f64 {
    (point2.x_f64() - point1.x_f64()).abs()
}

/// Angle from `point1` to `point2` in degrees.
pub fn angle(point1: PdfPoint, point2: PdfPoint) -> f64 {
    let dx = point2.x_f64() - point1.x_f64();
    let dy = point2.y_f64() - point1.y_f64();
    dy.atan2(dx).to_degrees()
}

/// Finds the candidate nearest to `element` under `distance`, excluding
/// candidates equal to the element itself.
///
/// The projections map an item to the geometry the distance runs over, so
/// the same scan serves points and line segments alike. Returns the index
/// and distance of the winner, or `Ok(None)` when every candidate is
/// excluded. Empty candidate lists are a caller error.
pub fn find_index_nearest<T, G, FC, FP, D>(
    element: &T,
    candidates: &[T],
    candidate_projection: FC,
    pivot_projection: FP,
    distance: D,
) -> Result<Option<(usize, f64)>>
where
    T: PartialEq,
    G: Copy,
    FC: Fn(&T) -> G,
    FP: Fn(&T) -> G,
    D: Fn(G, G) -> f64,
{
    if candidates.is_empty() {
        return Err(LayoutError::EmptyCandidates);
    }
    let pivot = pivot_projection(element);
    Ok(candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| *candidate != element)
        .map(|(i, candidate)| (i, distance(candidate_projection(candidate), pivot)))
        .min_by_key(|&(_, d)| OrderedFloat(d)))
}
