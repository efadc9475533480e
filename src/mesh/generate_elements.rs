use tracing::{debug, trace};

use super::{Element, GridMap, Material};
use crate::domain::Partition;

/// Builds hexahedral elements over the unit cells of a [`Partition`].
pub struct GenerateElements<'a> {
    partition: &'a Partition,
    grid: &'a GridMap,
}

impl<'a> GenerateElements<'a> {
    /// Creates a new `GenerateElements` operation.
    #[must_use]
    pub fn new(partition: &'a Partition, grid: &'a GridMap) -> Self {
        Self { partition, grid }
    }

    /// Emits one element per cell whose eight corners all exist.
    ///
    /// Cells with a missing corner are dropped whole. Element IDs start at 1
    /// and follow the region traversal order used for nodes.
    #[must_use]
    pub fn execute(&self) -> Vec<Element> {
        let mut elements = Vec::new();
        let mut dropped = 0usize;

        for origin in self.partition.cells() {
            let Some(nodes) = self.grid.cell_corners(origin) else {
                trace!(%origin, "dropping cell with missing corner");
                dropped += 1;
                continue;
            };
            let material = if self.partition.is_embedded_cell(origin) {
                Material::Embedded
            } else {
                Material::Surrounding
            };
            elements.push(Element {
                id: elements.len() + 1,
                material,
                nodes,
            });
        }

        debug!(elements = elements.len(), dropped, "generated elements");
        elements
    }
}
