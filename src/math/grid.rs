use std::fmt;

use super::{Point3, TOLERANCE};

/// Integer lattice coordinate `(i, j, k)`, the identity of a mesh node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridIndex {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl GridIndex {
    /// Creates a new grid index.
    #[must_use]
    pub const fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// Returns the index shifted by `(di, dj, dk)`.
    #[must_use]
    pub const fn offset(self, di: usize, dj: usize, dk: usize) -> Self {
        Self::new(self.i + di, self.j + dj, self.k + dk)
    }

    /// World position of this lattice point for the given element edge length.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_point(self, element_size: f64) -> Point3 {
        Point3::new(
            self.i as f64 * element_size,
            self.j as f64 * element_size,
            self.k as f64 * element_size,
        )
    }

    /// Snaps a world position to the nearest lattice point.
    ///
    /// Returns `None` if any coordinate lies below the origin.
    #[must_use]
    pub fn from_point(point: &Point3, element_size: f64) -> Option<Self> {
        Some(Self::new(
            snap_to_index(point.x, element_size)?,
            snap_to_index(point.y, element_size)?,
            snap_to_index(point.z, element_size)?,
        ))
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}

/// Returns `true` if `x` is an integer within [`TOLERANCE`].
#[must_use]
pub fn is_integral(x: f64) -> bool {
    (x - x.round()).abs() <= TOLERANCE
}

/// Converts a physical length to a grid-index count, rounding to the nearest
/// integer. Negative lengths map to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_index(length: f64, element_size: f64) -> usize {
    (length / element_size).round().max(0.0) as usize
}

/// Snaps a single coordinate to its lattice index.
///
/// The quotient is biased by [`TOLERANCE`] before rounding so exact half-steps
/// always resolve upward.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn snap_to_index(coordinate: f64, element_size: f64) -> Option<usize> {
    let index = (coordinate / element_size + TOLERANCE).round();
    if !index.is_finite() || index < 0.0 {
        return None;
    }
    Some(index as usize)
}
