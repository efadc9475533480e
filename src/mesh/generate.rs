use std::path::Path;

use tracing::info;

use super::{AssignConstraints, GenerateElements, GenerateNodes, Mesh};
use crate::codec::write_mesh_file;
use crate::domain::{DomainSpec, PartitionDomain};
use crate::error::Result;

/// Runs the full generation pipeline for one [`DomainSpec`]:
/// partition, nodes, constraints, elements.
pub struct GenerateMesh<'a> {
    spec: &'a DomainSpec,
}

impl<'a> GenerateMesh<'a> {
    /// Creates a new `GenerateMesh` operation.
    #[must_use]
    pub fn new(spec: &'a DomainSpec) -> Self {
        Self { spec }
    }

    /// Generates the mesh in memory.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`](crate::error::DomainError) if the spec fails
    /// validation. No node is generated in that case.
    pub fn execute(&self) -> Result<Mesh> {
        let partition = PartitionDomain::new(self.spec).execute()?;
        let generated = GenerateNodes::new(&partition).execute();
        let mut nodes = generated.nodes;
        AssignConstraints::new(self.spec).execute(&mut nodes);
        let elements = GenerateElements::new(&partition, &generated.grid).execute();

        let mesh = Mesh { nodes, elements };
        let (surrounding, embedded) = mesh.material_counts();
        info!(
            nodes = mesh.nodes.len(),
            elements = mesh.elements.len(),
            surrounding,
            embedded,
            "generated mesh"
        );
        Ok(mesh)
    }

    /// Generates the mesh and writes it to `path`.
    ///
    /// The file is only created once generation has succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec fails validation or the file cannot be
    /// written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<Mesh> {
        let mesh = self.execute()?;
        write_mesh_file(path, &mesh)?;
        Ok(mesh)
    }
}
