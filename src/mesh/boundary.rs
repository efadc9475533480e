use tracing::debug;

use super::{Constraint, Node};
use crate::domain::DomainSpec;
use crate::math::{approx_eq, points_coincide, Point3, TOLERANCE};

/// Labels nodes with translational constraint codes.
///
/// Rules run in order, later ones overriding earlier ones:
///
/// 1. every node starts at [`Constraint::Z`];
/// 2. [`Constraint::YZ`] on `y = 0`, or on the cutout's top edge right of the
///    cutout wall and below the outer top edge;
/// 3. [`Constraint::ZX`] on `x = 0`, or on the cutout wall below the cutout
///    height and left of the outer right edge;
/// 4. [`Constraint::XYZ`] on any listed fixed point.
///
/// The `y = 0` and `x = 0` clauses are unqualified; only the cutout clauses
/// carry the extra conditions. Rotations stay fully locked.
pub struct AssignConstraints<'a> {
    spec: &'a DomainSpec,
}

impl<'a> AssignConstraints<'a> {
    /// Creates a new `AssignConstraints` operation.
    #[must_use]
    pub fn new(spec: &'a DomainSpec) -> Self {
        Self { spec }
    }

    /// Overwrites `tc` and `rc` of every node.
    pub fn execute(&self, nodes: &mut [Node]) {
        let mut fixed = 0usize;
        for node in nodes.iter_mut() {
            node.tc = self.constraint_at(&node.position);
            node.rc = Constraint::XYZ;
            if node.tc == Constraint::XYZ {
                fixed += 1;
            }
        }
        debug!(nodes = nodes.len(), fixed, "assigned constraints");
    }

    /// Translational constraint for a node at `position`.
    #[must_use]
    pub fn constraint_at(&self, position: &Point3) -> Constraint {
        let spec = self.spec;
        let (x, y) = (position.x, position.y);
        let height = spec.cutout.height();
        let offset = spec.cutout.offset_x();
        let mut tc = Constraint::Z;

        let on_cutout_top =
            approx_eq(y, height) && x - offset > TOLERANCE && !approx_eq(y, spec.outer.y);
        if approx_eq(y, 0.0) || on_cutout_top {
            tc = Constraint::YZ;
        }

        let on_cutout_wall =
            approx_eq(x, offset) && height - y > TOLERANCE && !approx_eq(x, spec.outer.x);
        if approx_eq(x, 0.0) || on_cutout_wall {
            tc = Constraint::ZX;
        }

        if spec.fixed_points.iter().any(|p| points_coincide(p, position)) {
            tc = Constraint::XYZ;
        }
        tc
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    fn notched() -> DomainSpec {
        DomainSpec::builder()
            .outer(10.0, 8.0, 1.0)
            .embedded(2.0, 2.0, 1.0)
            .cutout(Vector3::new(6.0, 5.0, 1.0), Vector3::new(4.0, 0.0, 0.0))
            .fixed_point(Point3::new(4.0, 5.0, 1.0))
            .build()
            .unwrap()
    }

    fn tc(spec: &DomainSpec, x: f64, y: f64, z: f64) -> Constraint {
        AssignConstraints::new(spec).constraint_at(&Point3::new(x, y, z))
    }

    // ── Edge rules ─────────────────────────────────────────────

    #[test]
    fn interior_defaults_to_z() {
        assert_eq!(tc(&notched(), 2.0, 6.0, 0.0), Constraint::Z);
    }

    #[test]
    fn bottom_edge_locks_y() {
        assert_eq!(tc(&notched(), 2.0, 0.0, 1.0), Constraint::YZ);
    }

    #[test]
    fn left_edge_locks_x() {
        assert_eq!(tc(&notched(), 0.0, 3.0, 0.0), Constraint::ZX);
    }

    #[test]
    fn x_rule_overrides_y_rule_at_origin_corner() {
        assert_eq!(tc(&notched(), 0.0, 0.0, 0.0), Constraint::ZX);
    }

    #[test]
    fn cutout_top_edge_locks_y() {
        let spec = notched();
        assert_eq!(tc(&spec, 7.0, 5.0, 0.0), Constraint::YZ);
        assert_eq!(tc(&spec, 10.0, 5.0, 0.0), Constraint::YZ);
    }

    #[test]
    fn cutout_wall_locks_x() {
        let spec = notched();
        assert_eq!(tc(&spec, 4.0, 0.0, 0.0), Constraint::ZX);
        assert_eq!(tc(&spec, 4.0, 3.0, 1.0), Constraint::ZX);
    }

    #[test]
    fn re_entrant_corner_keeps_default() {
        assert_eq!(tc(&notched(), 4.0, 5.0, 0.0), Constraint::Z);
    }

    #[test]
    fn outer_top_and_right_edges_keep_default() {
        let spec = notched();
        assert_eq!(tc(&spec, 5.0, 8.0, 0.0), Constraint::Z);
        assert_eq!(tc(&spec, 10.0, 7.0, 0.0), Constraint::Z);
    }

    #[test]
    fn cutout_reaching_outer_top_leaves_top_row_default() {
        let spec = DomainSpec::builder()
            .outer(10.0, 8.0, 1.0)
            .embedded(2.0, 2.0, 1.0)
            .cutout(Vector3::new(6.0, 8.0, 1.0), Vector3::new(4.0, 0.0, 0.0))
            .build()
            .unwrap();
        assert_eq!(tc(&spec, 7.0, 8.0, 0.0), Constraint::Z);
        assert_eq!(tc(&spec, 10.0, 8.0, 1.0), Constraint::Z);
        assert_eq!(tc(&spec, 4.0, 3.0, 0.0), Constraint::ZX);
    }

    #[test]
    fn cutout_wall_on_outer_right_edge_leaves_edge_default() {
        let spec = DomainSpec::builder()
            .outer(10.0, 8.0, 1.0)
            .embedded(2.0, 2.0, 1.0)
            .cutout(Vector3::new(0.0, 5.0, 1.0), Vector3::new(10.0, 0.0, 0.0))
            .build()
            .unwrap();
        assert_eq!(tc(&spec, 10.0, 3.0, 0.0), Constraint::Z);
        assert_eq!(tc(&spec, 10.0, 4.0, 1.0), Constraint::Z);
        assert_eq!(tc(&spec, 10.0, 0.0, 0.0), Constraint::YZ);
    }

    #[test]
    fn bottom_rule_is_unqualified_without_cutout() {
        let spec = DomainSpec::builder().outer(3.0, 3.0, 1.0).build().unwrap();
        assert_eq!(tc(&spec, 3.0, 0.0, 0.0), Constraint::YZ);
        assert_eq!(tc(&spec, 0.0, 3.0, 0.0), Constraint::ZX);
        assert_eq!(tc(&spec, 3.0, 3.0, 0.0), Constraint::Z);
    }

    // ── Fixed points ───────────────────────────────────────────

    #[test]
    fn fixed_point_overrides_edge_rules() {
        let spec = notched();
        assert_eq!(tc(&spec, 4.0, 5.0, 1.0), Constraint::XYZ);
        assert_eq!(tc(&spec, 4.0, 5.0, 0.0), Constraint::Z);
    }

    #[test]
    fn fixed_point_matches_within_tolerance() {
        let spec = DomainSpec::builder()
            .element_size(0.1)
            .outer(1.0, 1.0, 0.1)
            .embedded(0.1, 0.1, 0.1)
            .fixed_point(Point3::new(0.3, 0.0, 0.0))
            .build()
            .unwrap();
        assert_eq!(tc(&spec, 3.0 * 0.1, 0.0, 0.0), Constraint::XYZ);
        assert_eq!(tc(&spec, 0.3 + 1e-6, 0.0, 0.0), Constraint::YZ);
    }

    #[test]
    fn execute_sets_rotations_locked() {
        let spec = notched();
        let mut nodes = vec![
            Node::new(1, Point3::new(0.0, 0.0, 0.0)),
            Node::new(2, Point3::new(4.0, 5.0, 1.0)),
        ];
        nodes[0].rc = Constraint::Free;
        AssignConstraints::new(&spec).execute(&mut nodes);
        assert_eq!(nodes[0].tc, Constraint::ZX);
        assert_eq!(nodes[1].tc, Constraint::XYZ);
        assert!(nodes.iter().all(|n| n.rc == Constraint::XYZ));
    }
}
