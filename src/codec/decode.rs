use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::{ELEMENT_KEYWORD, FIELD_WIDTH, NODE_KEYWORD};
use crate::error::{CodecError, Result};
use crate::mesh::{Element, ElementId, Mesh, Node, NodeId};

#[allow(clippy::expect_used)]
static NODE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(\d+)\s+([-+0-9.Ee]+)\s+([-+0-9.Ee]+)\s+([-+0-9.Ee]+)\s+(\d+)\s+(\d+)",
    )
    .expect("node row pattern is valid")
});

#[allow(clippy::expect_used)]
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// One decoded node row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRow {
    #[serde(rename = "Node ID")]
    pub id: NodeId,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
    #[serde(rename = "TC")]
    pub tc: u32,
    #[serde(rename = "RC")]
    pub rc: u32,
}

impl From<&Node> for NodeRow {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id,
            x: node.position.x,
            y: node.position.y,
            z: node.position.z,
            tc: node.tc.code().into(),
            rc: node.rc.code().into(),
        }
    }
}

/// One decoded element row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRow {
    pub id: ElementId,
    pub part: u32,
    pub nodes: [NodeId; 8],
}

impl From<&Element> for ElementRow {
    fn from(element: &Element) -> Self {
        Self {
            id: element.id,
            part: element.material.part_id(),
            nodes: element.nodes,
        }
    }
}

/// Node and element tables recovered from a mesh file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshTables {
    pub nodes: Vec<NodeRow>,
    pub elements: Vec<ElementRow>,
}

impl From<&Mesh> for MeshTables {
    fn from(mesh: &Mesh) -> Self {
        Self {
            nodes: mesh.nodes.iter().map(NodeRow::from).collect(),
            elements: mesh.elements.iter().map(ElementRow::from).collect(),
        }
    }
}

/// Collects the non-blank lines of the section headed by `keyword`.
///
/// A line starting with `*` switches reading on if it begins with `keyword`
/// (case-insensitive) and off otherwise. The first blank line met while
/// reading ends the scan. A missing section yields no lines.
#[must_use]
pub fn extract_section<'a>(content: &'a str, keyword: &str) -> Vec<&'a str> {
    let keyword = keyword.to_ascii_uppercase();
    let mut section = Vec::new();
    let mut reading = false;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('*') {
            reading = trimmed.to_ascii_uppercase().starts_with(&keyword);
            continue;
        }
        if !reading {
            continue;
        }
        if trimmed.is_empty() {
            break;
        }
        section.push(line);
    }
    section
}

/// Parses node lines. Lines that do not match the node field pattern, or
/// whose fields fail to convert, are skipped.
#[must_use]
pub fn parse_nodes(lines: &[&str]) -> Vec<NodeRow> {
    lines
        .iter()
        .filter_map(|line| {
            let row = parse_node_line(line);
            if row.is_none() {
                debug!(line, "skipping malformed node row");
            }
            row
        })
        .collect()
}

fn parse_node_line(line: &str) -> Option<NodeRow> {
    let caps = NODE_ROW.captures(line)?;
    Some(NodeRow {
        id: caps[1].parse().ok()?,
        x: caps[2].parse().ok()?,
        y: caps[3].parse().ok()?,
        z: caps[4].parse().ok()?,
        tc: caps[5].parse().ok()?,
        rc: caps[6].parse().ok()?,
    })
}

/// Parses element lines. A row must yield exactly ten integers; other lines
/// are skipped.
#[must_use]
pub fn parse_elements(lines: &[&str]) -> Vec<ElementRow> {
    lines
        .iter()
        .filter_map(|line| {
            let row = parse_element_line(line);
            if row.is_none() {
                debug!(line, "skipping malformed element row");
            }
            row
        })
        .collect()
}

fn parse_element_line(line: &str) -> Option<ElementRow> {
    let fields = fixed_width_fields(line).or_else(|| digit_tokens(line))?;
    let [id, part, nodes @ ..] = fields;
    Some(ElementRow {
        id,
        part: u32::try_from(part).ok()?,
        nodes,
    })
}

/// Splits an 80-column line into ten 8-character integer fields, which also
/// recovers fields that touch without whitespace.
///
/// Every column must hold one right-justified integer: leading spaces, then
/// digits up to the column edge.
fn fixed_width_fields(line: &str) -> Option<[usize; 10]> {
    let line = line.trim_end();
    if line.len() != FIELD_WIDTH * 10 || !line.is_ascii() {
        return None;
    }
    let mut fields = [0; 10];
    for (slot, chunk) in fields.iter_mut().zip(line.as_bytes().chunks(FIELD_WIDTH)) {
        let digits = std::str::from_utf8(chunk).ok()?.trim_start_matches(' ');
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = digits.parse().ok()?;
    }
    Some(fields)
}

fn digit_tokens(line: &str) -> Option<[usize; 10]> {
    let tokens: Vec<usize> = DIGITS
        .find_iter(line)
        .map(|m| m.as_str().parse())
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    tokens.try_into().ok()
}

/// Decodes the node and element sections of a mesh file's contents.
#[must_use]
pub fn decode_mesh(content: &str) -> MeshTables {
    let nodes = parse_nodes(&extract_section(content, NODE_KEYWORD));
    let elements = parse_elements(&extract_section(content, ELEMENT_KEYWORD));
    debug!(nodes = nodes.len(), elements = elements.len(), "decoded mesh");
    MeshTables { nodes, elements }
}

/// Reads and decodes a mesh file.
///
/// # Errors
///
/// Returns [`CodecError::File`] if the file cannot be read.
pub fn read_mesh_file(path: impl AsRef<Path>) -> Result<MeshTables> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CodecError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_mesh(&content))
}
