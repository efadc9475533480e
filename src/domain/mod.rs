mod partition;

pub use partition::{IndexRegion, Interval, Partition, PartitionDomain, RegionKind};

use crate::error::{DomainError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Rectangular notch removed from the bottom-right of the domain.
///
/// Only the x component of `offset` and the y component of `extent` shape the
/// notch: it spans from `offset.x` to the outer right edge and from `y = 0` up
/// to `extent.y`, through the full depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutout {
    /// Size of the notch.
    pub extent: Vector3,
    /// Lower-left corner of the notch.
    pub offset: Vector3,
}

impl Cutout {
    /// The absence of a cutout.
    pub const NONE: Self = Self {
        extent: Vector3::new(0.0, 0.0, 0.0),
        offset: Vector3::new(0.0, 0.0, 0.0),
    };

    /// Creates a new cutout.
    #[must_use]
    pub fn new(extent: Vector3, offset: Vector3) -> Self {
        Self { extent, offset }
    }

    /// Returns `true` if extent and offset are both zero.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.extent.iter().chain(self.offset.iter()).all(|v| v.abs() <= TOLERANCE)
    }

    /// Height of the notch, measured from the x axis.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.extent.y
    }

    /// x coordinate of the notch's left wall.
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset.x
    }
}

impl Default for Cutout {
    fn default() -> Self {
        Self::NONE
    }
}

/// Geometry parameters for an L-shaped domain with an embedded sub-region.
///
/// The embedded sub-region sits at the origin corner. All extents are
/// measured from the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainSpec {
    /// Edge length of every hexahedral element.
    pub element_size: f64,
    /// Outer extent of the domain.
    pub outer: Vector3,
    /// Extent of the embedded sub-region.
    pub embedded: Vector3,
    /// Optional notch; [`Cutout::NONE`] yields a plain rectangular prism.
    pub cutout: Cutout,
    /// World coordinates of nodes that receive full translational constraint.
    pub fixed_points: Vec<Point3>,
}

impl DomainSpec {
    /// Starts building a spec with a unit element size and no cutout.
    #[must_use]
    pub fn builder() -> DomainSpecBuilder {
        DomainSpecBuilder::default()
    }

    /// Checks element size and extents for positivity.
    ///
    /// Divisibility of the embedded sub-region is checked by
    /// [`PartitionDomain`], right before generation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidElementSize`] or
    /// [`DomainError::InvalidExtent`] for non-positive or non-finite values.
    pub fn validate(&self) -> Result<()> {
        if !(self.element_size.is_finite() && self.element_size > 0.0) {
            return Err(DomainError::InvalidElementSize(self.element_size).into());
        }
        let extents = [
            ("outer x", self.outer.x),
            ("outer y", self.outer.y),
            ("outer z", self.outer.z),
            ("embedded x", self.embedded.x),
            ("embedded y", self.embedded.y),
            ("embedded z", self.embedded.z),
        ];
        for (axis, value) in extents {
            if !(value.is_finite() && value > 0.0) {
                return Err(DomainError::InvalidExtent { axis, value }.into());
            }
        }
        Ok(())
    }
}

impl Default for DomainSpec {
    /// The reference notch problem: a 100 × 100 × 1 plate with a 60 × 50 notch
    /// at x = 40 and an 8 × 8 embedded block.
    fn default() -> Self {
        Self {
            element_size: 1.0,
            outer: Vector3::new(100.0, 100.0, 1.0),
            embedded: Vector3::new(8.0, 8.0, 1.0),
            cutout: Cutout::new(Vector3::new(60.0, 50.0, 1.0), Vector3::new(40.0, 0.0, 0.0)),
            fixed_points: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(40.0, 0.0, 0.0),
                Point3::new(40.0, 0.0, 1.0),
                Point3::new(40.0, 50.0, 0.0),
                Point3::new(40.0, 50.0, 1.0),
            ],
        }
    }
}

/// Chainable builder for [`DomainSpec`].
#[derive(Debug, Clone)]
pub struct DomainSpecBuilder {
    spec: DomainSpec,
}

impl Default for DomainSpecBuilder {
    fn default() -> Self {
        Self {
            spec: DomainSpec {
                element_size: 1.0,
                outer: Vector3::new(1.0, 1.0, 1.0),
                embedded: Vector3::new(1.0, 1.0, 1.0),
                cutout: Cutout::NONE,
                fixed_points: Vec::new(),
            },
        }
    }
}

impl DomainSpecBuilder {
    #[must_use]
    pub fn element_size(mut self, size: f64) -> Self {
        self.spec.element_size = size;
        self
    }

    #[must_use]
    pub fn outer(mut self, x: f64, y: f64, z: f64) -> Self {
        self.spec.outer = Vector3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn embedded(mut self, x: f64, y: f64, z: f64) -> Self {
        self.spec.embedded = Vector3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn cutout(mut self, extent: Vector3, offset: Vector3) -> Self {
        self.spec.cutout = Cutout::new(extent, offset);
        self
    }

    /// Adds one fixed node coordinate.
    #[must_use]
    pub fn fixed_point(mut self, point: Point3) -> Self {
        self.spec.fixed_points.push(point);
        self
    }

    #[must_use]
    pub fn fixed_points(mut self, points: impl IntoIterator<Item = Point3>) -> Self {
        self.spec.fixed_points.extend(points);
        self
    }

    /// Finishes the spec.
    ///
    /// # Errors
    ///
    /// Returns an error if [`DomainSpec::validate`] rejects the parameters.
    pub fn build(self) -> Result<DomainSpec> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    #[test]
    fn builder_collects_parameters() {
        let spec = DomainSpec::builder()
            .element_size(0.5)
            .outer(4.0, 3.0, 1.0)
            .embedded(1.0, 1.0, 1.0)
            .cutout(Vector3::new(2.0, 1.0, 1.0), Vector3::new(2.0, 0.0, 0.0))
            .fixed_point(Point3::origin())
            .build()
            .unwrap();
        assert_eq!(spec.element_size, 0.5);
        assert_eq!(spec.outer, Vector3::new(4.0, 3.0, 1.0));
        assert_eq!(spec.fixed_points.len(), 1);
        assert!(!spec.cutout.is_none());
    }

    #[test]
    fn zero_cutout_is_none() {
        assert!(Cutout::NONE.is_none());
        assert!(Cutout::default().is_none());
        assert!(!Cutout::new(Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn rejects_non_positive_element_size() {
        let result = DomainSpec::builder().element_size(0.0).build();
        assert!(matches!(
            result,
            Err(MeshError::Domain(DomainError::InvalidElementSize(_)))
        ));
    }

    #[test]
    fn rejects_non_finite_extent() {
        let result = DomainSpec::builder().outer(1.0, f64::NAN, 1.0).build();
        assert!(matches!(
            result,
            Err(MeshError::Domain(DomainError::InvalidExtent { axis: "outer y", .. }))
        ));
    }

    #[test]
    fn default_is_the_reference_problem() {
        let spec = DomainSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.cutout.height(), 50.0);
        assert_eq!(spec.cutout.offset_x(), 40.0);
        assert_eq!(spec.fixed_points.len(), 6);
    }
}
