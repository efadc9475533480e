use tracing::debug;

use super::{GridMap, Node};
use crate::domain::Partition;

/// Nodes in emission order together with their lattice map.
#[derive(Debug, Clone)]
pub struct GeneratedNodes {
    pub nodes: Vec<Node>,
    pub grid: GridMap,
}

/// Enumerates the lattice points of a [`Partition`] and assigns sequential
/// node IDs.
pub struct GenerateNodes<'a> {
    partition: &'a Partition,
}

impl<'a> GenerateNodes<'a> {
    /// Creates a new `GenerateNodes` operation.
    #[must_use]
    pub fn new(partition: &'a Partition) -> Self {
        Self { partition }
    }

    /// Emits one node per lattice point, region by region.
    ///
    /// IDs start at 1 and follow emission order. The grid map is filled from
    /// the lattice index of each emitted point, so it agrees with
    /// [`GridMap::from_nodes`] without any floating-point snapping.
    #[must_use]
    pub fn execute(&self) -> GeneratedNodes {
        let count = self.partition.node_count();
        let mut nodes = Vec::with_capacity(count);
        let mut grid = GridMap::with_capacity(count);

        for (offset, index) in self.partition.nodes().enumerate() {
            let id = offset + 1;
            nodes.push(Node::new(id, index.to_point(self.partition.element_size)));
            grid.insert(index, id);
        }

        debug!(nodes = nodes.len(), "generated nodes");
        GeneratedNodes { nodes, grid }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::domain::{DomainSpec, PartitionDomain};
    use crate::math::{GridIndex, Point3, Vector3};

    fn generate(spec: &DomainSpec) -> GeneratedNodes {
        let partition = PartitionDomain::new(spec).execute().unwrap();
        GenerateNodes::new(&partition).execute()
    }

    #[test]
    fn ids_are_dense_and_one_based() {
        let spec = DomainSpec::builder().outer(3.0, 2.0, 1.0).build().unwrap();
        let generated = generate(&spec);
        assert_eq!(generated.nodes.len(), 4 * 3 * 2);
        for (n, node) in generated.nodes.iter().enumerate() {
            assert_eq!(node.id, n + 1);
        }
    }

    #[test]
    fn emission_starts_with_embedded_block() {
        let spec = DomainSpec::builder()
            .outer(3.0, 3.0, 1.0)
            .embedded(1.0, 1.0, 1.0)
            .build()
            .unwrap();
        let generated = generate(&spec);
        let first: Vec<Point3> = generated.nodes.iter().take(5).map(|n| n.position).collect();
        assert_eq!(
            first,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ]
        );
    }

    #[test]
    fn coordinates_scale_with_element_size() {
        let spec = DomainSpec::builder()
            .element_size(0.25)
            .outer(0.5, 0.5, 0.25)
            .embedded(0.25, 0.25, 0.25)
            .build()
            .unwrap();
        let generated = generate(&spec);
        let last = generated.nodes.last().unwrap();
        assert_relative_eq!(last.position.x, 0.5);
        assert_relative_eq!(last.position.y, 0.5);
        assert_relative_eq!(last.position.z, 0.25);
    }

    #[test]
    fn emission_map_matches_snapped_map() {
        let spec = DomainSpec::builder()
            .element_size(0.1)
            .outer(1.0, 0.8, 0.2)
            .embedded(0.3, 0.2, 0.1)
            .cutout(Vector3::new(0.6, 0.5, 0.2), Vector3::new(0.4, 0.0, 0.0))
            .build()
            .unwrap();
        let generated = generate(&spec);
        let snapped = GridMap::from_nodes(&generated.nodes, 0.1);
        assert_eq!(generated.grid.len(), generated.nodes.len());
        assert_eq!(snapped, generated.grid);
        assert!(generated.grid.get(GridIndex::new(5, 4, 0)).is_none());
    }
}
