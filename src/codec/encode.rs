use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::iter;
use std::path::Path;

use tracing::info;

use super::{ELEMENT_KEYWORD, END_KEYWORD, FIELD_WIDTH, NODE_KEYWORD};
use crate::error::{CodecError, Result};
use crate::mesh::{Element, Mesh, Node};

/// Formats `value` in scientific notation with 9 digits after the point and
/// a signed exponent of at least two digits, e.g. `4.000000000E+01`.
#[must_use]
pub fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:.9E}");
    let Some((mantissa, exponent)) = formatted.split_once('E') else {
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}E{sign}{digits:0>2}")
}

/// One node line: right-justified ID, a space, three coordinates separated by
/// spaces, then the `tc` and `rc` fields with no separating space.
#[must_use]
pub fn format_node_line(node: &Node) -> String {
    format!(
        "{:>w$} {} {} {}{:>w$}{:>w$}",
        node.id,
        format_scientific(node.position.x),
        format_scientific(node.position.y),
        format_scientific(node.position.z),
        node.tc.code(),
        node.rc.code(),
        w = FIELD_WIDTH,
    )
}

/// One element line: ten consecutive right-justified integer fields.
#[must_use]
pub fn format_element_line(element: &Element) -> String {
    let nodes: String = element
        .nodes
        .iter()
        .map(|id| format!("{id:>w$}", w = FIELD_WIDTH))
        .collect();
    format!(
        "{:>w$}{:>w$}{nodes}",
        element.id,
        element.material.part_id(),
        w = FIELD_WIDTH
    )
}

/// Streams a [`Mesh`] to any [`Write`] sink.
pub struct MeshWriter<W: Write> {
    writer: W,
}

impl<W: Write> MeshWriter<W> {
    /// Creates a new `MeshWriter`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the node section, the element section and the end marker.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying writer.
    pub fn write_mesh(&mut self, mesh: &Mesh) -> io::Result<()> {
        for line in mesh_lines(mesh) {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Encodes a mesh to a `String`.
#[must_use]
pub fn encode_mesh(mesh: &Mesh) -> String {
    mesh_lines(mesh).fold(String::new(), |mut out, line| {
        out.push_str(&line);
        out.push('\n');
        out
    })
}

fn mesh_lines(mesh: &Mesh) -> impl Iterator<Item = String> + '_ {
    iter::once(NODE_KEYWORD.to_owned())
        .chain(mesh.nodes.iter().map(format_node_line))
        .chain(iter::once(ELEMENT_KEYWORD.to_owned()))
        .chain(mesh.elements.iter().map(format_element_line))
        .chain(iter::once(END_KEYWORD.to_owned()))
}

/// Writes a mesh file to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`CodecError::File`] if the file cannot be created or written.
pub fn write_mesh_file(path: impl AsRef<Path>, mesh: &Mesh) -> Result<()> {
    let path = path.as_ref();
    let file_error = |source| CodecError::File {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(file_error)?;
    MeshWriter::new(BufWriter::new(file))
        .write_mesh(mesh)
        .map_err(file_error)?;
    info!(path = %path.display(), "mesh written");
    Ok(())
}
