//! Tests for the affine transformation matrix: construction, algebra,
//! point/vector/rectangle transforms and scaling extraction.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pagecut::{LayoutError, PdfPoint, PdfRectangle, PdfVector, TransformationMatrix};

fn point(x: Decimal, y: Decimal) -> PdfPoint {
    PdfPoint::new(x, y)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn from_array_accepts_lengths_4_6_and_9() {
    let four = [dec!(2), dec!(0), dec!(0), dec!(3)];
    let m = TransformationMatrix::from_array(&four).unwrap();
    assert_eq!(m, TransformationMatrix::from_linear(dec!(2), dec!(0), dec!(0), dec!(3)));
    assert_eq!(m.e(), dec!(0));
    assert_eq!(m.f(), dec!(0));

    let six = [dec!(1), dec!(0), dec!(0), dec!(1), dec!(7), dec!(8)];
    let m = TransformationMatrix::from_array(&six).unwrap();
    assert_eq!(m, TransformationMatrix::translation(dec!(7), dec!(8)));

    let nine = [
        dec!(1), dec!(0), dec!(0),
        dec!(0), dec!(1), dec!(0),
        dec!(0), dec!(0), dec!(1),
    ];
    let m = TransformationMatrix::from_array(&nine).unwrap();
    assert_eq!(m, TransformationMatrix::IDENTITY);
}

#[test]
fn from_array_rejects_other_lengths() {
    for len in [0usize, 1, 2, 3, 5, 7, 8, 10] {
        let values = vec![Decimal::ONE; len];
        assert_eq!(
            TransformationMatrix::from_array(&values),
            Err(LayoutError::InvalidMatrixLength(len)),
            "length {len} should be rejected"
        );
    }
}

// ============================================================================
// Indexing
// ============================================================================

#[test]
fn get_maps_rows_to_the_storage_layout() {
    let m = TransformationMatrix::new(
        dec!(1), dec!(2), dec!(3),
        dec!(4), dec!(5), dec!(6),
        dec!(7), dec!(8), dec!(9),
    );
    let expected = [
        [dec!(1), dec!(2), dec!(3)],
        [dec!(4), dec!(5), dec!(6)],
        [dec!(7), dec!(8), dec!(9)],
    ];
    for (row, row_values) in expected.iter().enumerate() {
        for (col, value) in row_values.iter().enumerate() {
            assert_eq!(m.get(row, col).unwrap(), *value);
            assert_eq!(m[(row, col)], *value);
        }
    }
}

#[test]
fn get_rejects_out_of_range_indices() {
    let m = TransformationMatrix::IDENTITY;
    assert_eq!(
        m.get(3, 0),
        Err(LayoutError::MatrixIndexOutOfRange { row: 3, col: 0 })
    );
    assert_eq!(
        m.get(0, 3),
        Err(LayoutError::MatrixIndexOutOfRange { row: 0, col: 3 })
    );
    assert_eq!(
        m.get(4, 7),
        Err(LayoutError::MatrixIndexOutOfRange { row: 4, col: 7 })
    );
}

// ============================================================================
// Algebra
// ============================================================================

#[test]
fn identity_is_neutral_for_multiplication() {
    let m = TransformationMatrix::from_values(dec!(2), dec!(3), dec!(-1), dec!(4), dec!(5), dec!(6));
    assert_eq!(TransformationMatrix::IDENTITY.multiply(&m), m);
    assert_eq!(m.multiply(&TransformationMatrix::IDENTITY), m);
}

#[test]
fn multiplication_is_associative() {
    let a = TransformationMatrix::from_values(dec!(1), dec!(2), dec!(3), dec!(4), dec!(5), dec!(6));
    let b = TransformationMatrix::from_values(dec!(-2), dec!(0), dec!(1), dec!(3), dec!(7), dec!(-1));
    let c = TransformationMatrix::translation(dec!(10), dec!(-4));
    assert_eq!((a * b) * c, a * (b * c));
}

#[test]
fn scalar_multiplication_is_elementwise() {
    let m = TransformationMatrix::from_values(dec!(1), dec!(2), dec!(3), dec!(4), dec!(5), dec!(6));
    let doubled = m * dec!(2);
    assert_eq!(doubled.a(), dec!(2));
    assert_eq!(doubled.f(), dec!(12));
    assert_eq!(doubled.get(2, 2).unwrap(), dec!(2));
}

#[test]
fn translation_composition_accumulates_offsets() {
    let composed = TransformationMatrix::translation(dec!(2), dec!(3))
        .multiply(&TransformationMatrix::translation(dec!(5), dec!(7)));
    assert_eq!(
        composed.transform(point(dec!(0), dec!(0))),
        point(dec!(7), dec!(10))
    );
}

#[test]
fn translate_only_touches_the_bottom_row() {
    let m = TransformationMatrix::from_values(dec!(2), dec!(0), dec!(0), dec!(3), dec!(1), dec!(1));
    let t = m.translate(dec!(4), dec!(5));
    assert_eq!(t.a(), dec!(2));
    assert_eq!(t.d(), dec!(3));
    // e' = x*a + y*c + e, f' = x*b + y*d + f
    assert_eq!(t.e(), dec!(9));
    assert_eq!(t.f(), dec!(16));
    assert_eq!(t.get(2, 2).unwrap(), dec!(1));
}

// ============================================================================
// Transforms
// ============================================================================

#[test]
fn identity_round_trips_points() {
    let p = point(dec!(3.5), dec!(-2.25));
    assert_eq!(TransformationMatrix::IDENTITY.transform(p), p);
}

#[test]
fn translation_moves_points_by_the_offsets() {
    let m = TransformationMatrix::translation(dec!(2), dec!(3));
    assert_eq!(
        m.transform(point(dec!(1.5), dec!(-1))),
        point(dec!(3.5), dec!(2))
    );
}

#[test]
fn vectors_currently_receive_the_translation_too() {
    let m = TransformationMatrix::translation(dec!(2), dec!(3));
    let v = m.transform_vector(PdfVector::new(dec!(1), dec!(1)));
    assert_eq!(v, PdfVector::new(dec!(3), dec!(4)));
}

#[test]
fn transform_x_applies_the_horizontal_map() {
    let m = TransformationMatrix::from_values(dec!(2), dec!(0), dec!(0), dec!(1), dec!(5), dec!(0));
    assert_eq!(m.transform_x(dec!(3)), dec!(11));
}

#[test]
fn rectangle_corners_transform_independently() {
    // quarter turn counter-clockwise
    let rotate = TransformationMatrix::from_values(
        dec!(0), dec!(1), dec!(-1), dec!(0), dec!(0), dec!(0),
    );
    let rect = PdfRectangle::new(point(dec!(1), dec!(2)), point(dec!(4), dec!(6)));
    let rotated = rotate.transform_rectangle(rect);

    assert_eq!(rotated.top_left(), rotate.transform(rect.top_left()));
    assert_eq!(rotated.top_right(), rotate.transform(rect.top_right()));
    assert_eq!(rotated.bottom_left(), rotate.transform(rect.bottom_left()));
    assert_eq!(rotated.bottom_right(), rotate.transform(rect.bottom_right()));

    // the derived extent still reads axis-aligned
    assert_eq!(rotated.left(), dec!(-6));
    assert_eq!(rotated.right(), dec!(-2));
    assert_eq!(rotated.bottom(), dec!(1));
    assert_eq!(rotated.top(), dec!(4));
}

// ============================================================================
// Scaling extraction
// ============================================================================

#[test]
fn pure_scale_returns_a_with_sign() {
    let m = TransformationMatrix::from_values(dec!(2.5), dec!(0), dec!(0), dec!(4), dec!(0), dec!(0));
    assert_eq!(m.scaling_factor_x(), dec!(2.5));

    let mirrored =
        TransformationMatrix::from_values(dec!(-2.5), dec!(0), dec!(0), dec!(4), dec!(0), dec!(0));
    assert_eq!(mirrored.scaling_factor_x(), dec!(-2.5));
}

#[test]
fn rotated_scale_returns_the_magnitude() {
    let sx = 2.0f64;
    let sy = 3.0f64;
    let theta = std::f64::consts::FRAC_PI_4;
    let m = TransformationMatrix::from_values(
        Decimal::from_f64(sx * theta.cos()).unwrap(),
        Decimal::from_f64(sx * theta.sin()).unwrap(),
        Decimal::from_f64(-sy * theta.sin()).unwrap(),
        Decimal::from_f64(sy * theta.cos()).unwrap(),
        dec!(0),
        dec!(0),
    );
    let got = m.scaling_factor_x();
    let err = (got - dec!(2)).abs();
    assert!(err < dec!(0.000001), "expected ~2, got {got}");
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn display_renders_three_rows() {
    let m = TransformationMatrix::IDENTITY;
    assert_eq!(m.to_string(), "1, 0, 0\r\n0, 1, 0\r\n0, 0, 1");
}
