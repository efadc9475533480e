mod decode;
mod encode;
mod export;

pub use decode::{
    decode_mesh, extract_section, parse_elements, parse_nodes, read_mesh_file, ElementRow,
    MeshTables, NodeRow,
};
pub use encode::{
    encode_mesh, format_element_line, format_node_line, format_scientific, write_mesh_file,
    MeshWriter,
};
pub use export::{export_tables, write_elements_csv, write_nodes_csv, ELEMENTS_CSV, NODES_CSV};

/// Header of the node section.
pub const NODE_KEYWORD: &str = "*NODE";

/// Header of the hexahedral element section.
pub const ELEMENT_KEYWORD: &str = "*ELEMENT_SOLID";

/// Terminating marker line.
pub const END_KEYWORD: &str = "*END";

/// Width of every integer field.
///
/// Node rows carry a right-justified ID, three `.9E` coordinates and the two
/// constraint flags; element rows are ten consecutive integer fields:
///
/// ```text
/// *NODE
///        1 0.000000000E+00 0.000000000E+00 0.000000000E+00       6       7
/// *ELEMENT_SOLID
///        1       2       1       2       4       3       5       6       8       7
/// *END
/// ```
pub const FIELD_WIDTH: usize = 8;
