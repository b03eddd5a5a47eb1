//! Fast vector and scalar helpers for the voxelizer.
//!
//! These are simplified versions of the usual engine math routines. They skip
//! the generic handling the engine does (NaN-aware min/max, float log2) and
//! keep only what voxelization needs.
//!
//! A few helpers have preconditions. The plain version checks them with an
//! assertion, the `try_` version reports a [`PreconditionError`] instead.

use super::error::PreconditionError;
use super::vec::Vec3;

/// Magnitude at or below which a vector is treated as zero by [`normalize`]
pub const VEC3_EPSILON: f32 = 1e-5;

/// Tolerance used by [`is_equal`]
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

#[inline]
pub fn cross(lhs: Vec3, rhs: Vec3) -> Vec3 {
    Vec3 {
        x: lhs.y * rhs.z - lhs.z * rhs.y,
        y: lhs.z * rhs.x - lhs.x * rhs.z,
        z: lhs.x * rhs.y - lhs.y * rhs.x,
    }
}

/// Scale `value` to unit length.
///
/// Vectors with a magnitude of [`VEC3_EPSILON`] or less come back as
/// [`Vec3::ZERO`] instead of being divided by (almost) zero.
#[inline]
pub fn normalize(value: Vec3) -> Vec3 {
    let mag = magnitude(value);
    if mag > VEC3_EPSILON {
        value / mag
    } else {
        Vec3::ZERO
    }
}

#[inline]
pub fn magnitude(v: Vec3) -> f32 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

#[inline]
pub fn dot(lhs: Vec3, rhs: Vec3) -> f32 {
    lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z
}

/// Dot `lhs` with every row, storing the result for row `i` in component `i`.
///
/// Components without a row stay zero.
///
/// # Panics
///
/// When more than 3 rows are given.
pub fn dot_rows(lhs: Vec3, rows: &[Vec3]) -> Vec3 {
    assert!(rows.len() <= 3, "at most 3 rows, got {}", rows.len());
    let mut result = Vec3::ZERO;
    for (i, row) in rows.iter().enumerate() {
        result[i] = dot(lhs, *row);
    }
    result
}

pub fn try_dot_rows(lhs: Vec3, rows: &[Vec3]) -> Result<Vec3, PreconditionError> {
    if rows.len() > 3 {
        return Err(PreconditionError::TooManyRows { len: rows.len() });
    }
    Ok(dot_rows(lhs, rows))
}

/// Sum of the element wise products of two equally long slices.
///
/// # Panics
///
/// When the slices differ in length.
pub fn dot_slices(lhs: &[f32], rhs: &[f32]) -> f32 {
    assert_eq!(lhs.len(), rhs.len(), "slices must have the same length");
    lhs.iter().zip(rhs).fold(0.0, |acc, (l, r)| acc + l * r)
}

pub fn try_dot_slices(lhs: &[f32], rhs: &[f32]) -> Result<f32, PreconditionError> {
    if lhs.len() != rhs.len() {
        return Err(PreconditionError::LengthMismatch {
            lhs: lhs.len(),
            rhs: rhs.len(),
        });
    }
    Ok(dot_slices(lhs, rhs))
}

/// Component wise minimum of `point` and the running `bound`
#[inline]
pub fn min_vec(point: Vec3, bound: Vec3) -> Vec3 {
    Vec3 {
        x: min(point.x, bound.x),
        y: min(point.y, bound.y),
        z: min(point.z, bound.z),
    }
}

/// Component wise maximum of `point` and the running `bound`
#[inline]
pub fn max_vec(point: Vec3, bound: Vec3) -> Vec3 {
    Vec3 {
        x: max(point.x, bound.x),
        y: max(point.y, bound.y),
        z: max(point.z, bound.z),
    }
}

/// Absolute value without the sign bit handling of `f32::abs`.
///
/// Zero takes the negating branch, so `abs(0.0)` is `-0.0`. Both compare
/// equal to zero.
#[inline]
pub fn abs(x: f32) -> f32 {
    if x > 0.0 { x } else { -x }
}

#[inline]
pub fn max(x1: f32, x2: f32) -> f32 {
    if x1 > x2 { x1 } else { x2 }
}

#[inline]
pub fn min(x1: f32, x2: f32) -> f32 {
    if x1 < x2 { x1 } else { x2 }
}

/// Approximate equality with [`DEFAULT_TOLERANCE`]
#[inline]
pub fn is_equal(a: f32, b: f32) -> bool {
    is_equal_within(a, b, DEFAULT_TOLERANCE)
}

/// True when `a` and `b` are strictly less than `delta` apart
#[inline]
pub fn is_equal_within(a: f32, b: f32, delta: f32) -> bool {
    abs(a - b) < delta
}

/// Floor of the base 2 logarithm, found with a branchless binary search over
/// the bit width.
///
/// The result is meaningless for `v <= 0`; debug builds assert on it.
#[inline]
pub fn log2(mut v: i64) -> i32 {
    debug_assert!(v > 0, "log2 of non-positive value: {v}");
    let mut r = 0;
    // (mask - v) is negative exactly when v has bits above the mask
    for (mask, shift) in [
        (0xFFFF_FFFF, 32),
        (0xFFFF, 16),
        (0xFF, 8),
        (0xF, 4),
        (0x3, 2),
    ] {
        let s = ((mask - v) >> 63) & shift;
        v >>= s;
        r |= s;
    }
    (r | (v >> 1)) as i32
}

pub fn try_log2(v: i64) -> Result<i32, PreconditionError> {
    if v <= 0 {
        return Err(PreconditionError::NonPositiveLog2 { value: v });
    }
    Ok(log2(v))
}

/// Grid index of `pos` along one axis of a grid starting at `min`.
///
/// Rounds to the nearest index, ties away from zero.
#[inline]
pub fn translate_position(min: f32, pos: f32, cell_size: f32) -> i32 {
    let diff = pos - min;
    (diff / cell_size).round() as i32
}

pub fn try_translate_position(
    min: f32,
    pos: f32,
    cell_size: f32,
) -> Result<i32, PreconditionError> {
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return Err(PreconditionError::InvalidCellSize { cell_size });
    }
    Ok(translate_position(min, pos, cell_size))
}

/// [`translate_position`] on all three axes
pub fn translate_point(min: Vec3, pos: Vec3, cell_size: f32) -> [i32; 3] {
    [
        translate_position(min.x, pos.x, cell_size),
        translate_position(min.y, pos.y, cell_size),
        translate_position(min.z, pos.z, cell_size),
    ]
}
