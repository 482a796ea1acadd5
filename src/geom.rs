//! Geometric value types in PDF device-space convention.
//!
//! Coordinates are exact decimals with a bottom-left origin; the y axis grows
//! upward. All types here are immutable values, copied on use.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PdfPoint {
    pub x: Decimal,
    pub y: Decimal,
}

impl PdfPoint {
    pub const ORIGIN: PdfPoint = PdfPoint {
        x: Decimal::ZERO,
        y: Decimal::ZERO,
    };

    pub const fn new(x: Decimal, y: Decimal) -> Self {
        Self { x, y }
    }

    pub(crate) fn x_f64(&self) -> f64 {
        self.x.to_f64().unwrap_or_default()
    }

    pub(crate) fn y_f64(&self) -> f64 {
        self.y.to_f64().unwrap_or_default()
    }
}

/// A 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PdfVector {
    pub x: Decimal,
    pub y: Decimal,
}

impl PdfVector {
    pub const fn new(x: Decimal, y: Decimal) -> Self {
        Self { x, y }
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PdfLine {
    pub point1: PdfPoint,
    pub point2: PdfPoint,
}

impl PdfLine {
    pub const fn new(point1: PdfPoint, point2: PdfPoint) -> Self {
        Self { point1, point2 }
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> PdfPoint {
        PdfPoint::new(
            (self.point1.x + self.point2.x) / Decimal::TWO,
            (self.point1.y + self.point2.y) / Decimal::TWO,
        )
    }
}

/// An axis-aligned rectangle described by its four corners.
///
/// `left`/`right`/`bottom`/`top` re-derive the axis-aligned extent from the
/// stored corners. `width` and `height` are signed corner differences, so a
/// flipped glyph box reports negative extents while keeping its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PdfRectangle {
    top_left: PdfPoint,
    top_right: PdfPoint,
    bottom_left: PdfPoint,
    bottom_right: PdfPoint,
}

impl PdfRectangle {
    /// Axis-aligned rectangle from two opposite corners. Coordinates are not
    /// reordered; a swapped pair yields negative width/height.
    pub const fn new(bottom_left: PdfPoint, top_right: PdfPoint) -> Self {
        Self {
            top_left: PdfPoint::new(bottom_left.x, top_right.y),
            top_right,
            bottom_left,
            bottom_right: PdfPoint::new(top_right.x, bottom_left.y),
        }
    }

    /// Rectangle from four explicit corners, stored verbatim.
    pub const fn from_corners(
        top_left: PdfPoint,
        top_right: PdfPoint,
        bottom_left: PdfPoint,
        bottom_right: PdfPoint,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    pub const fn top_left(&self) -> PdfPoint {
        self.top_left
    }

    pub const fn top_right(&self) -> PdfPoint {
        self.top_right
    }

    pub const fn bottom_left(&self) -> PdfPoint {
        self.bottom_left
    }

    pub const fn bottom_right(&self) -> PdfPoint {
        self.bottom_right
    }

    pub fn left(&self) -> Decimal {
        self.top_left
            .x
            .min(self.top_right.x)
            .min(self.bottom_left.x)
            .min(self.bottom_right.x)
    }

    pub fn right(&self) -> Decimal {
        self.top_left
            .x
            .max(self.top_right.x)
            .max(self.bottom_left.x)
            .max(self.bottom_right.x)
    }

    pub fn top(&self) -> Decimal {
        self.top_left
            .y
            .max(self.top_right.y)
            .max(self.bottom_left.y)
            .max(self.bottom_right.y)
    }

    pub fn bottom(&self) -> Decimal {
        self.top_left
            .y
            .min(self.top_right.y)
            .min(self.bottom_left.y)
            .min(self.bottom_right.y)
    }

    /// Signed width along the bottom edge.
    pub fn width(&self) -> Decimal {
        self.bottom_right.x - self.bottom_left.x
    }

    /// Signed height along the left edge.
    pub fn height(&self) -> Decimal {
        self.top_left.y - self.bottom_left.y
    }

    pub fn centroid(&self) -> PdfPoint {
        PdfPoint::new(
            (self.left() + self.right()) / Decimal::TWO,
            (self.bottom() + self.top()) / Decimal::TWO,
        )
    }

    /// Same extent with corners reordered so width and height are
    /// non-negative.
    pub fn normalized(self) -> PdfRectangle {
        PdfRectangle::new(
            PdfPoint::new(self.left(), self.bottom()),
            PdfPoint::new(self.right(), self.top()),
        )
    }

    /// Smallest axis-aligned rectangle covering both.
    pub fn union(self, other: PdfRectangle) -> PdfRectangle {
        let a = self.normalized();
        let b = other.normalized();
        PdfRectangle::new(
            PdfPoint::new(a.left().min(b.left()), a.bottom().min(b.bottom())),
            PdfPoint::new(a.right().max(b.right()), a.top().max(b.top())),
        )
    }
}
