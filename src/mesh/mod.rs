mod boundary;
mod generate;
mod generate_elements;
mod generate_nodes;
mod grid_map;

pub use boundary::AssignConstraints;
pub use generate::GenerateMesh;
pub use generate_elements::GenerateElements;
pub use generate_nodes::{GenerateNodes, GeneratedNodes};
pub use grid_map::GridMap;

use crate::math::Point3;

/// 1-based node identifier.
pub type NodeId = usize;

/// 1-based element identifier.
pub type ElementId = usize;

/// Set of locked degrees of freedom, encoded as the 0–7 constraint codes used
/// by the keyword file format for both translations and rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Constraint {
    Free,
    X,
    Y,
    Z,
    XY,
    YZ,
    ZX,
    XYZ,
}

impl Constraint {
    /// Numeric code written to the mesh file.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::X => 1,
            Self::Y => 2,
            Self::Z => 3,
            Self::XY => 4,
            Self::YZ => 5,
            Self::ZX => 6,
            Self::XYZ => 7,
        }
    }

    /// Inverse of [`Self::code`].
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::Free,
            1 => Self::X,
            2 => Self::Y,
            3 => Self::Z,
            4 => Self::XY,
            5 => Self::YZ,
            6 => Self::ZX,
            7 => Self::XYZ,
            _ => return None,
        })
    }
}

/// Material classification of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Material surrounding the embedded sub-region.
    Surrounding,
    /// Material of the embedded sub-region.
    Embedded,
}

impl Material {
    /// Part identifier written to the mesh file.
    #[must_use]
    pub const fn part_id(self) -> u32 {
        match self {
            Self::Surrounding => 1,
            Self::Embedded => 2,
        }
    }

    /// Inverse of [`Self::part_id`].
    #[must_use]
    pub const fn from_part_id(part_id: u32) -> Option<Self> {
        match part_id {
            1 => Some(Self::Surrounding),
            2 => Some(Self::Embedded),
            _ => None,
        }
    }
}

/// A mesh node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Point3,
    /// Translational constraint.
    pub tc: Constraint,
    /// Rotational constraint. Always fully locked.
    pub rc: Constraint,
}

impl Node {
    /// Creates a node with the default z-only translational constraint.
    #[must_use]
    pub fn new(id: NodeId, position: Point3) -> Self {
        Self {
            id,
            position,
            tc: Constraint::Z,
            rc: Constraint::XYZ,
        }
    }
}

/// An 8-node hexahedral element.
///
/// Vertices follow the bottom face `(i,j) (i+1,j) (i+1,j+1) (i,j+1)`, then the
/// top face in the same planar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub material: Material,
    pub nodes: [NodeId; 8],
}

/// A generated hexahedral mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub nodes: Vec<Node>,
    pub elements: Vec<Element>,
}

impl Mesh {
    /// Number of elements per material, as `(surrounding, embedded)`.
    #[must_use]
    pub fn material_counts(&self) -> (usize, usize) {
        let embedded = self
            .elements
            .iter()
            .filter(|e| e.material == Material::Embedded)
            .count();
        (self.elements.len() - embedded, embedded)
    }

    /// Number of nodes with all translations locked.
    #[must_use]
    pub fn fixed_node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.tc == Constraint::XYZ).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_codes_round_trip() {
        for code in 0..=7 {
            let constraint = Constraint::from_code(code);
            assert_eq!(constraint.map(Constraint::code), Some(code));
        }
        assert_eq!(Constraint::from_code(8), None);
    }

    #[test]
    fn part_ids() {
        assert_eq!(Material::Surrounding.part_id(), 1);
        assert_eq!(Material::Embedded.part_id(), 2);
        assert_eq!(Material::from_part_id(2), Some(Material::Embedded));
        assert_eq!(Material::from_part_id(0), None);
    }

    #[test]
    fn new_node_defaults() {
        let node = Node::new(1, Point3::origin());
        assert_eq!(node.tc, Constraint::Z);
        assert_eq!(node.rc, Constraint::XYZ);
    }

    #[test]
    fn summary_counts() {
        let mut fixed = Node::new(1, Point3::origin());
        fixed.tc = Constraint::XYZ;
        let mesh = Mesh {
            nodes: vec![fixed, Node::new(2, Point3::new(1.0, 0.0, 0.0))],
            elements: vec![
                Element { id: 1, material: Material::Embedded, nodes: [1; 8] },
                Element { id: 2, material: Material::Surrounding, nodes: [2; 8] },
                Element { id: 3, material: Material::Surrounding, nodes: [2; 8] },
            ],
        };
        assert_eq!(mesh.material_counts(), (2, 1));
        assert_eq!(mesh.fixed_node_count(), 1);
    }
}
