//! Affine transformation matrix for PDF device-space geometry.
//!
//! A 3x3 homogeneous matrix in the PDF column convention. The nine entries
//! are laid out as `a, b, row1 / c, d, row2 / e, f, row3`; for every affine
//! PDF transform the third column (`row1`, `row2`, `row3`) is `(0, 0, 1)`,
//! and it is carried only so that composition with non-affine matrices stays
//! well defined.

use std::fmt;
use std::ops::{Index, Mul};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{LayoutError, Result};
use crate::geom::{PdfPoint, PdfRectangle, PdfVector};

/// A 3x3 transformation matrix over exact decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformationMatrix {
    a: Decimal,
    b: Decimal,
    row1: Decimal,
    c: Decimal,
    d: Decimal,
    row2: Decimal,
    e: Decimal,
    f: Decimal,
    row3: Decimal,
}

impl TransformationMatrix {
    /// The identity transform.
    pub const IDENTITY: TransformationMatrix = TransformationMatrix {
        a: Decimal::ONE,
        b: Decimal::ZERO,
        row1: Decimal::ZERO,
        c: Decimal::ZERO,
        d: Decimal::ONE,
        row2: Decimal::ZERO,
        e: Decimal::ZERO,
        f: Decimal::ZERO,
        row3: Decimal::ONE,
    };

    /// Matrix from all nine entries.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        a: Decimal,
        b: Decimal,
        row1: Decimal,
        c: Decimal,
        d: Decimal,
        row2: Decimal,
        e: Decimal,
        f: Decimal,
        row3: Decimal,
    ) -> Self {
        Self {
            a,
            b,
            row1,
            c,
            d,
            row2,
            e,
            f,
            row3,
        }
    }

    /// Matrix from the PDF 6-tuple `(a, b, c, d, e, f)`; the third column is
    /// `(0, 0, 1)`.
    pub const fn from_values(
        a: Decimal,
        b: Decimal,
        c: Decimal,
        d: Decimal,
        e: Decimal,
        f: Decimal,
    ) -> Self {
        Self::new(
            a,
            b,
            Decimal::ZERO,
            c,
            d,
            Decimal::ZERO,
            e,
            f,
            Decimal::ONE,
        )
    }

    /// Matrix from the linear part alone; translations are zero.
    pub const fn from_linear(a: Decimal, b: Decimal, c: Decimal, d: Decimal) -> Self {
        Self::from_values(a, b, c, d, Decimal::ZERO, Decimal::ZERO)
    }

    /// Matrix from a slice of 9, 6 or 4 values.
    pub fn from_array(values: &[Decimal]) -> Result<Self> {
        match *values {
            [a, b, c, d] => Ok(Self::from_linear(a, b, c, d)),
            [a, b, c, d, e, f] => Ok(Self::from_values(a, b, c, d, e, f)),
            [a, b, row1, c, d, row2, e, f, row3] => {
                Ok(Self::new(a, b, row1, c, d, row2, e, f, row3))
            }
            _ => Err(LayoutError::InvalidMatrixLength(values.len())),
        }
    }

    /// Translation matrix: the identity with offsets `x`, `y`.
    pub fn translation(x: Decimal, y: Decimal) -> Self {
        Self {
            e: x,
            f: y,
            ..Self::IDENTITY
        }
    }

    pub const fn a(&self) -> Decimal {
        self.a
    }

    pub const fn b(&self) -> Decimal {
        self.b
    }

    pub const fn c(&self) -> Decimal {
        self.c
    }

    pub const fn d(&self) -> Decimal {
        self.d
    }

    pub const fn e(&self) -> Decimal {
        self.e
    }

    pub const fn f(&self) -> Decimal {
        self.f
    }

    /// Entry at `(row, col)`, rows and columns in `[0, 3)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Decimal> {
        match (row, col) {
            (0, 0) => Ok(self.a),
            (0, 1) => Ok(self.b),
            (0, 2) => Ok(self.row1),
            (1, 0) => Ok(self.c),
            (1, 1) => Ok(self.d),
            (1, 2) => Ok(self.row2),
            (2, 0) => Ok(self.e),
            (2, 1) => Ok(self.f),
            (2, 2) => Ok(self.row3),
            _ => Err(LayoutError::MatrixIndexOutOfRange { row, col }),
        }
    }

    /// Transforms a point: `(a·x + c·y + e, b·x + d·y + f)`.
    pub fn transform(&self, point: PdfPoint) -> PdfPoint {
        PdfPoint::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Transforms a vector with the same formula as [`transform`],
    /// translation included.
    ///
    /// [`transform`]: TransformationMatrix::transform
    // TODO: direction vectors should be invariant under translation; revisit
    // whether e/f belong in this formula.
    pub fn transform_vector(&self, vector: PdfVector) -> PdfVector {
        PdfVector::new(
            self.a * vector.x + self.c * vector.y + self.e,
            self.b * vector.x + self.d * vector.y + self.f,
        )
    }

    /// Transforms all four corners independently and rebuilds the rectangle
    /// from them.
    pub fn transform_rectangle(&self, rectangle: PdfRectangle) -> PdfRectangle {
        PdfRectangle::from_corners(
            self.transform(rectangle.top_left()),
            self.transform(rectangle.top_right()),
            self.transform(rectangle.bottom_left()),
            self.transform(rectangle.bottom_right()),
        )
    }

    /// Maps an x coordinate through the horizontal part: `a·x + e`.
    pub fn transform_x(&self, x: Decimal) -> Decimal {
        self.a * x + self.e
    }

    /// Translates by `(x, y)` inside the projection; only the bottom row
    /// changes.
    pub fn translate(&self, x: Decimal, y: Decimal) -> Self {
        Self {
            e: x * self.a + y * self.c + self.e,
            f: x * self.b + y * self.d + self.f,
            row3: x * self.row1 + y * self.row2 + self.row3,
            ..*self
        }
    }

    /// Standard 3x3 product `self · other`.
    pub fn multiply(&self, other: &TransformationMatrix) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c + self.row1 * other.e,
            b: self.a * other.b + self.b * other.d + self.row1 * other.f,
            row1: self.a * other.row1 + self.b * other.row2 + self.row1 * other.row3,
            c: self.c * other.a + self.d * other.c + self.row2 * other.e,
            d: self.c * other.b + self.d * other.d + self.row2 * other.f,
            row2: self.c * other.row1 + self.d * other.row2 + self.row2 * other.row3,
            e: self.e * other.a + self.f * other.c + self.row3 * other.e,
            f: self.e * other.b + self.f * other.d + self.row3 * other.f,
            row3: self.e * other.row1 + self.f * other.row2 + self.row3 * other.row3,
        }
    }

    /// Elementwise scalar product.
    pub fn multiply_scalar(&self, scalar: Decimal) -> Self {
        Self {
            a: self.a * scalar,
            b: self.b * scalar,
            row1: self.row1 * scalar,
            c: self.c * scalar,
            d: self.d * scalar,
            row2: self.row2 * scalar,
            e: self.e * scalar,
            f: self.f * scalar,
            row3: self.row3 * scalar,
        }
    }

    /// Horizontal scaling factor.
    ///
    /// With no rotation (`b == 0` and `c == 0`) this is `a` itself, sign
    /// included. Otherwise the matrix factors as rotation-then-scale, where
    /// `a = sx·cos θ` and `b = sx·sin θ`, so `sqrt(a² + b²)` recovers the
    /// magnitude of `sx`. The square root runs in floating point and the
    /// result is cast back to decimal.
    pub fn scaling_factor_x(&self) -> Decimal {
        if self.b == Decimal::ZERO && self.c == Decimal::ZERO {
            return self.a;
        }
        let a = self.a.to_f64().unwrap_or_default();
        let b = self.b.to_f64().unwrap_or_default();
        Decimal::from_f64(a.hypot(b)).unwrap_or(Decimal::MAX)
    }
}

impl Index<(usize, usize)> for TransformationMatrix {
    type Output = Decimal;

    fn index(&self, (row, col): (usize, usize)) -> &Decimal {
        match (row, col) {
            (0, 0) => &self.a,
            (0, 1) => &self.b,
            (0, 2) => &self.row1,
            (1, 0) => &self.c,
            (1, 1) => &self.d,
            (1, 2) => &self.row2,
            (2, 0) => &self.e,
            (2, 1) => &self.f,
            (2, 2) => &self.row3,
            _ => panic!("matrix index out of range: ({row}, {col})"),
        }
    }
}

impl Mul for TransformationMatrix {
    type Output = TransformationMatrix;

    fn mul(self, rhs: TransformationMatrix) -> TransformationMatrix {
        self.multiply(&rhs)
    }
}

impl Mul<Decimal> for TransformationMatrix {
    type Output = TransformationMatrix;

    fn mul(self, rhs: Decimal) -> TransformationMatrix {
        self.multiply_scalar(rhs)
    }
}

impl fmt::Display for TransformationMatrix {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            out,
            "{}, {}, {}\r\n{}, {}, {}\r\n{}, {}, {}",
            self.a, self.b, self.row1, self.c, self.d, self.row2, self.e, self.f, self.row3
        )
    }
}
