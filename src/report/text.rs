// src/report/text.rs

//! Plain-text DAG report.
//!
//! ```text
//! Edges:
//! 3 -> 0
//! dummy_source -> 3
//! Vertices with no incoming edges (V_noIncoming):
//! 3
//! Vertices with no outgoing edges (V_noOutgoing):
//! 0
//! Node: 3: {'c': 2, 'q': 5, 'd': 1}
//! ```
//!
//! The frontier sections list the sets computed *before* the dummy nodes
//! were attached.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::dag::{Dag, Frontier};
use crate::errors::{DagError, Result};
use crate::fs::FileSystem;
use crate::types::{NodeAttrs, NodeId};

pub const EDGES_HEADER: &str = "Edges:";
pub const NO_INCOMING_HEADER: &str = "Vertices with no incoming edges (V_noIncoming):";
pub const NO_OUTGOING_HEADER: &str = "Vertices with no outgoing edges (V_noOutgoing):";

static EDGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+) -> (\S+)$").expect("edge line regex is valid"));

static NODE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Node: (\S+): \{'c': (-?\d+), 'q': (-?\d+), 'd': (-?\d+)\}$")
        .expect("node line regex is valid")
});

/// Render the report as a string.
pub fn render_text_report(dag: &Dag, frontier: &Frontier) -> String {
    let mut out = String::new();

    out.push_str(EDGES_HEADER);
    out.push('\n');
    for (from, to) in dag.edges() {
        let _ = writeln!(out, "{from} -> {to}");
    }

    out.push_str(NO_INCOMING_HEADER);
    out.push('\n');
    out.push_str(&join_ids(&frontier.no_incoming));
    out.push('\n');

    out.push_str(NO_OUTGOING_HEADER);
    out.push('\n');
    out.push_str(&join_ids(&frontier.no_outgoing));
    out.push('\n');

    for (id, attrs) in dag.nodes_with_attrs() {
        let _ = writeln!(out, "Node: {id}: {attrs}");
    }

    out
}

/// Render the report and write it to `path`.
pub fn write_text_report(
    fs: &dyn FileSystem,
    path: &Path,
    dag: &Dag,
    frontier: &Frontier,
) -> Result<()> {
    let report = render_text_report(dag, frontier);
    fs.write(path, report.as_bytes())?;
    info!(path = %path.display(), bytes = report.len(), "wrote text report");
    Ok(())
}

/// Hex blake3 digest of a rendered report.
pub fn fingerprint(report: &str) -> String {
    blake3::hash(report.as_bytes()).to_hex().to_string()
}

fn join_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Contents of a text report read back from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReport {
    pub edges: Vec<(NodeId, NodeId)>,
    pub no_incoming: Vec<NodeId>,
    pub no_outgoing: Vec<NodeId>,
    pub nodes: Vec<(NodeId, NodeAttrs)>,
}

/// Parse a report produced by [`render_text_report`].
///
/// Line numbers in errors are 1-based.
pub fn parse_text_report(input: &str) -> Result<ParsedReport> {
    let mut parsed = ParsedReport::default();
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')));
    let last_line = input.lines().count();

    match lines.next() {
        Some((_, EDGES_HEADER)) => {}
        Some((line_no, _)) => {
            return Err(DagError::parse(line_no, format!("expected {EDGES_HEADER:?}")));
        }
        None => return Err(DagError::parse(1, "empty report")),
    }

    loop {
        match lines.next() {
            Some((_, NO_INCOMING_HEADER)) => break,
            Some((line_no, line)) => parsed.edges.push(parse_edge(line_no, line)?),
            None => {
                return Err(DagError::parse(
                    last_line,
                    format!("missing {NO_INCOMING_HEADER:?} section"),
                ));
            }
        }
    }
    if let Some((line_no, line)) = lines.next() {
        parsed.no_incoming = parse_id_list(line_no, line)?;
    }

    match lines.next() {
        Some((_, NO_OUTGOING_HEADER)) => {}
        Some((line_no, _)) => {
            return Err(DagError::parse(line_no, format!("expected {NO_OUTGOING_HEADER:?}")));
        }
        None => {
            return Err(DagError::parse(
                last_line,
                format!("missing {NO_OUTGOING_HEADER:?} section"),
            ));
        }
    }
    if let Some((line_no, line)) = lines.next() {
        parsed.no_outgoing = parse_id_list(line_no, line)?;
    }

    for (line_no, line) in lines {
        if !line.is_empty() {
            parsed.nodes.push(parse_node(line_no, line)?);
        }
    }

    debug!(
        edges = parsed.edges.len(),
        nodes = parsed.nodes.len(),
        "parsed text report"
    );
    Ok(parsed)
}

fn parse_edge(line_no: usize, line: &str) -> Result<(NodeId, NodeId)> {
    let caps = EDGE_LINE
        .captures(line)
        .ok_or_else(|| DagError::parse(line_no, format!("malformed edge line {line:?}")))?;
    let from = parse_id(line_no, &caps[1])?;
    let to = parse_id(line_no, &caps[2])?;
    Ok((from, to))
}

fn parse_node(line_no: usize, line: &str) -> Result<(NodeId, NodeAttrs)> {
    let caps = NODE_LINE
        .captures(line)
        .ok_or_else(|| DagError::parse(line_no, format!("malformed node line {line:?}")))?;
    let id = parse_id(line_no, &caps[1])?;
    let int = |i: usize| {
        caps[i]
            .parse::<i32>()
            .map_err(|e| DagError::parse(line_no, format!("bad attribute value: {e}")))
    };
    Ok((id, NodeAttrs::new(int(2)?, int(3)?, int(4)?)))
}

fn parse_id_list(line_no: usize, line: &str) -> Result<Vec<NodeId>> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_id(line_no, s))
        .collect()
}

fn parse_id(line_no: usize, s: &str) -> Result<NodeId> {
    s.parse::<NodeId>().map_err(|e| DagError::parse(line_no, e))
}
