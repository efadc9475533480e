use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::{ElementRow, MeshTables, NodeRow};
use crate::error::{CodecError, Result};

/// File name of the exported node table.
pub const NODES_CSV: &str = "nodes.csv";

/// File name of the exported element table.
pub const ELEMENTS_CSV: &str = "elements.csv";

#[derive(Serialize)]
struct ElementRecord {
    #[serde(rename = "Element ID")]
    id: usize,
    #[serde(rename = "Part ID")]
    part: u32,
    #[serde(rename = "N1")]
    n1: usize,
    #[serde(rename = "N2")]
    n2: usize,
    #[serde(rename = "N3")]
    n3: usize,
    #[serde(rename = "N4")]
    n4: usize,
    #[serde(rename = "N5")]
    n5: usize,
    #[serde(rename = "N6")]
    n6: usize,
    #[serde(rename = "N7")]
    n7: usize,
    #[serde(rename = "N8")]
    n8: usize,
}

impl From<&ElementRow> for ElementRecord {
    fn from(row: &ElementRow) -> Self {
        let [n1, n2, n3, n4, n5, n6, n7, n8] = row.nodes;
        Self {
            id: row.id,
            part: row.part,
            n1,
            n2,
            n3,
            n4,
            n5,
            n6,
            n7,
            n8,
        }
    }
}

/// Writes the node table as CSV with a `Node ID,X,Y,Z,TC,RC` header.
///
/// # Errors
///
/// Returns [`CodecError::Csv`] if a row cannot be written.
pub fn write_nodes_csv<W: Write>(writer: W, rows: &[NodeRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row).map_err(CodecError::from)?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes the element table as CSV with an `Element ID,Part ID,N1..N8` header.
///
/// # Errors
///
/// Returns [`CodecError::Csv`] if a row cannot be written.
pub fn write_elements_csv<W: Write>(writer: W, rows: &[ElementRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(ElementRecord::from(row))
            .map_err(CodecError::from)?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes `nodes.csv` and `elements.csv` into `dir`.
///
/// # Errors
///
/// Returns an error if either file cannot be created or written.
pub fn export_tables(dir: impl AsRef<Path>, tables: &MeshTables) -> Result<()> {
    let dir = dir.as_ref();
    let create = |name: &str| {
        let path = dir.join(name);
        File::create(&path).map_err(|source| CodecError::File { path, source })
    };
    write_nodes_csv(create(NODES_CSV)?, &tables.nodes)?;
    write_elements_csv(create(ELEMENTS_CSV)?, &tables.elements)?;
    info!(dir = %dir.display(), "tables exported");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::codec::decode_mesh;

    const SAMPLE: &str = "\
*NODE
       1 0.000000000E+00 0.000000000E+00 0.000000000E+00       6       7
       2 2.500000000E-01 0.000000000E+00 0.000000000E+00       5       7
*ELEMENT_SOLID
       1       2       1       2       4       3       5       6       8       7
*END
";

    #[test]
    fn node_csv_has_header_and_rows() {
        let tables = decode_mesh(SAMPLE);
        let mut out = Vec::new();
        write_nodes_csv(&mut out, &tables.nodes).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Node ID,X,Y,Z,TC,RC");
        assert_eq!(lines[2], "2,0.25,0.0,0.0,5,7");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn element_csv_flattens_connectivity() {
        let tables = decode_mesh(SAMPLE);
        let mut out = Vec::new();
        write_elements_csv(&mut out, &tables.elements).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Element ID,Part ID,N1,N2,N3,N4,N5,N6,N7,N8\n1,2,1,2,4,3,5,6,8,7\n"
        );
    }

    #[test]
    fn empty_tables_write_no_rows() {
        let mut out = Vec::new();
        write_elements_csv(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn export_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        export_tables(dir.path(), &decode_mesh(SAMPLE)).unwrap();
        let nodes = std::fs::read_to_string(dir.path().join(NODES_CSV)).unwrap();
        let elements = std::fs::read_to_string(dir.path().join(ELEMENTS_CSV)).unwrap();
        assert_eq!(nodes.lines().count(), 3);
        assert_eq!(elements.lines().count(), 2);
    }
}
