use std::collections::HashMap;

use super::{Node, NodeId};
use crate::math::GridIndex;

/// Map from lattice index to node identity.
///
/// A lookup of an index that was never emitted returns `None`; the cutout's
/// missing corner points are expected to miss.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridMap {
    ids: HashMap<GridIndex, NodeId>,
}

impl GridMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashMap::with_capacity(capacity),
        }
    }

    /// Builds the map by snapping each node's coordinates to the lattice.
    ///
    /// Nodes lying below the origin are skipped.
    #[must_use]
    pub fn from_nodes(nodes: &[Node], element_size: f64) -> Self {
        let mut map = Self::with_capacity(nodes.len());
        for node in nodes {
            if let Some(index) = GridIndex::from_point(&node.position, element_size) {
                map.insert(index, node.id);
            }
        }
        map
    }

    /// Records `id` at `index`, returning the previous occupant if any.
    pub fn insert(&mut self, index: GridIndex, id: NodeId) -> Option<NodeId> {
        self.ids.insert(index, id)
    }

    /// Looks up the node at `index`.
    #[must_use]
    pub fn get(&self, index: GridIndex) -> Option<NodeId> {
        self.ids.get(&index).copied()
    }

    /// Looks up the eight corners of the cell at `origin`, bottom face first.
    ///
    /// Returns `None` if any corner is missing.
    #[must_use]
    pub fn cell_corners(&self, origin: GridIndex) -> Option<[NodeId; 8]> {
        const CORNERS: [(usize, usize, usize); 8] = [
            (0, 0, 0),
            (1, 0, 0),
            (1, 1, 0),
            (0, 1, 0),
            (0, 0, 1),
            (1, 0, 1),
            (1, 1, 1),
            (0, 1, 1),
        ];
        let mut ids = [0; 8];
        for (slot, (di, dj, dk)) in ids.iter_mut().zip(CORNERS) {
            *slot = self.get(origin.offset(di, dj, dk))?;
        }
        Some(ids)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
