mod grid;

pub use grid::{is_integral, snap_to_index, to_index, GridIndex};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type, used for extents and offsets.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global tolerance for floating-point comparisons.
///
/// Shared by the embedded-region divisibility check, fixed-node matching and
/// grid-index snapping.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` if `a` and `b` differ by at most [`TOLERANCE`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Returns `true` if every coordinate of `a` matches `b` within [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point3, b: &Point3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}
