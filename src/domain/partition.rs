use std::collections::HashSet;
use std::ops::{Range, RangeInclusive};

use tracing::debug;

use super::DomainSpec;
use crate::error::{DomainError, Result};
use crate::math::{is_integral, to_index, GridIndex};

/// Role of a rectangular block in the domain decomposition.
///
/// Variants are listed in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// The embedded sub-region block at the origin corner.
    Embedded,
    /// Above the embedded block, up to the cutout height.
    AboveEmbedded,
    /// Above the embedded block, from the cutout height to the outer height.
    UpperLeft,
    /// Right of the embedded block, up to its height.
    RightOfEmbedded,
    /// Right of the embedded block, from its height up to the cutout height.
    RightAboveEmbedded,
    /// Right of the embedded block, from the cutout height to the outer height.
    UpperRight,
    /// Beyond the cutout's left wall, from the cutout height to the outer height.
    BeyondCutout,
}

/// Lattice-index span along one axis.
///
/// Spans either include their start (`[start, end]`) or exclude it
/// (`(start, end]`); excluding the start lets neighbouring regions share a
/// boundary without emitting its lattice points twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
    pub includes_start: bool,
}

impl Interval {
    /// The closed span `[start, end]`.
    #[must_use]
    pub const fn closed(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            includes_start: true,
        }
    }

    /// The half-open span `(start, end]`.
    #[must_use]
    pub const fn after(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            includes_start: false,
        }
    }

    /// Lattice indices emitted for this span. Empty when `end` precedes the
    /// first index.
    #[must_use]
    pub fn nodes(&self) -> RangeInclusive<usize> {
        self.first_node()..=self.end
    }

    /// Cell origins covered by this span: one less than the node bound.
    #[must_use]
    pub fn cells(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of lattice indices in [`Self::nodes`].
    #[must_use]
    pub fn node_len(&self) -> usize {
        (self.end + 1).saturating_sub(self.first_node())
    }

    fn first_node(&self) -> usize {
        if self.includes_start {
            self.start
        } else {
            self.start + 1
        }
    }
}

/// One axis-aligned block of the decomposition, spanning the full depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRegion {
    pub kind: RegionKind,
    pub i: Interval,
    pub j: Interval,
    pub k: Interval,
}

impl IndexRegion {
    /// Lattice points of the region, `k` outermost and `i` innermost.
    pub fn nodes(&self) -> impl Iterator<Item = GridIndex> {
        let Self { i, j, k, .. } = *self;
        k.nodes().flat_map(move |kk| {
            j.nodes()
                .flat_map(move |jj| i.nodes().map(move |ii| GridIndex::new(ii, jj, kk)))
        })
    }

    /// Cell origins of the region, in the same order as [`Self::nodes`].
    pub fn cells(&self) -> impl Iterator<Item = GridIndex> {
        let Self { i, j, k, .. } = *self;
        k.cells().flat_map(move |kk| {
            j.cells()
                .flat_map(move |jj| i.cells().map(move |ii| GridIndex::new(ii, jj, kk)))
        })
    }

    /// Number of lattice points emitted by [`Self::nodes`].
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.i.node_len() * self.j.node_len() * self.k.node_len()
    }
}

/// The index-space decomposition of a domain.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Edge length that converts grid indices to world coordinates.
    pub element_size: f64,
    /// Outer grid counts `(nx, ny, nz)`.
    pub outer: GridIndex,
    /// Embedded sub-region grid counts, unclamped.
    pub embedded: GridIndex,
    /// Column index of the notch's left wall. Equals `nx` without a cutout.
    pub notch_offset: usize,
    /// Row index of the notch's top edge. Equals `ny` without a cutout.
    pub notch_height: usize,
    /// Disjoint blocks, in traversal order.
    pub regions: Vec<IndexRegion>,
}

impl Partition {
    /// Every lattice point of the domain, in emission order.
    pub fn nodes(&self) -> impl Iterator<Item = GridIndex> + '_ {
        self.regions.iter().flat_map(IndexRegion::nodes)
    }

    /// Every candidate cell origin, in emission order.
    pub fn cells(&self) -> impl Iterator<Item = GridIndex> + '_ {
        self.regions.iter().flat_map(IndexRegion::cells)
    }

    /// Total number of lattice points across all regions.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.regions.iter().map(IndexRegion::node_count).sum()
    }

    /// Returns `true` if `index` is a lattice point of the notched domain.
    #[must_use]
    pub fn contains_node(&self, index: GridIndex) -> bool {
        let inside = index.i <= self.outer.i && index.j <= self.outer.j && index.k <= self.outer.k;
        let in_notch = index.i > self.notch_offset && index.j < self.notch_height;
        inside && !in_notch
    }

    /// Returns `true` if the cell at `origin` lies within the embedded
    /// sub-region on all three axes.
    #[must_use]
    pub fn is_embedded_cell(&self, origin: GridIndex) -> bool {
        origin.i < self.embedded.i && origin.j < self.embedded.j && origin.k < self.embedded.k
    }

    /// Returns `true` if no lattice point is emitted by two regions.
    #[must_use]
    pub fn is_disjoint(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.node_count());
        self.nodes().all(|index| seen.insert(index))
    }
}

/// Decomposes a [`DomainSpec`] into disjoint index regions.
pub struct PartitionDomain<'a> {
    spec: &'a DomainSpec,
}

impl<'a> PartitionDomain<'a> {
    /// Creates a new `PartitionDomain` operation.
    #[must_use]
    pub fn new(spec: &'a DomainSpec) -> Self {
        Self { spec }
    }

    /// Executes the decomposition.
    ///
    /// A cutout whose extent and offset are both zero is treated as a notch
    /// starting at the outer right edge with the outer height, which leaves
    /// the region beyond the cutout empty.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonIntegralEmbedded`] if the embedded x or y
    /// extent is not a whole number of elements, or any error raised by
    /// [`DomainSpec::validate`].
    pub fn execute(&self) -> Result<Partition> {
        let spec = self.spec;
        spec.validate()?;
        let size = spec.element_size;

        let nx_embedded = spec.embedded.x / size;
        let ny_embedded = spec.embedded.y / size;
        if !(is_integral(nx_embedded) && is_integral(ny_embedded)) {
            return Err(DomainError::NonIntegralEmbedded {
                nx: nx_embedded,
                ny: ny_embedded,
            }
            .into());
        }

        let outer = GridIndex::new(
            to_index(spec.outer.x, size),
            to_index(spec.outer.y, size),
            to_index(spec.outer.z, size),
        );
        let embedded = GridIndex::new(
            to_index(spec.embedded.x, size),
            to_index(spec.embedded.y, size),
            to_index(spec.embedded.z, size),
        );
        let (notch_offset, notch_height) = if spec.cutout.is_none() {
            (outer.i, outer.j)
        } else {
            (
                to_index(spec.cutout.offset_x(), size).min(outer.i),
                to_index(spec.cutout.height(), size).min(outer.j),
            )
        };

        // The left strip stops at the notch wall so an embedded block reaching
        // past it never emits notch points.
        let left = embedded.i.min(notch_offset);
        let lower = embedded.j.min(outer.j);
        let upper = lower.max(notch_height);

        let depth = Interval::closed(0, outer.k);
        let region = |kind, i, j| IndexRegion { kind, i, j, k: depth };
        let regions = vec![
            region(RegionKind::Embedded, Interval::closed(0, left), Interval::closed(0, lower)),
            region(
                RegionKind::AboveEmbedded,
                Interval::closed(0, left),
                Interval::after(lower, notch_height),
            ),
            region(
                RegionKind::UpperLeft,
                Interval::closed(0, left),
                Interval::after(upper, outer.j),
            ),
            region(
                RegionKind::RightOfEmbedded,
                Interval::after(left, notch_offset),
                Interval::closed(0, lower),
            ),
            region(
                RegionKind::RightAboveEmbedded,
                Interval::after(left, notch_offset),
                Interval::after(lower, notch_height),
            ),
            region(
                RegionKind::UpperRight,
                Interval::after(left, notch_offset),
                Interval::after(upper, outer.j),
            ),
            region(
                RegionKind::BeyondCutout,
                Interval::after(notch_offset, outer.i),
                Interval::closed(notch_height, outer.j),
            ),
        ];

        let partition = Partition {
            element_size: size,
            outer,
            embedded,
            notch_offset,
            notch_height,
            regions,
        };
        debug!(
            outer = %partition.outer,
            embedded = %partition.embedded,
            notch_offset,
            notch_height,
            nodes = partition.node_count(),
            "partitioned domain"
        );
        Ok(partition)
    }
}
