use std::fmt;
use std::str::FromStr;

/// `d` value of the synthetic source node.
pub const DUMMY_SOURCE_D: i32 = -1;
/// `d` value of the synthetic sink node.
pub const DUMMY_SINK_D: i32 = -2;

/// Identifier of a node in a generated DAG.
///
/// Original vertices keep the index they had in the sampled undirected graph;
/// the two synthetic nodes get their own variants so they can never collide
/// with a vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeId {
    Original(usize),
    DummySource,
    DummySink,
}

impl NodeId {
    pub fn is_dummy(&self) -> bool {
        !matches!(self, NodeId::Original(_))
    }

    /// Vertex index for original nodes.
    pub fn index(&self) -> Option<usize> {
        match self {
            NodeId::Original(i) => Some(*i),
            NodeId::DummySource | NodeId::DummySink => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Original(i) => write!(f, "{i}"),
            NodeId::DummySource => f.write_str("dummy_source"),
            NodeId::DummySink => f.write_str("dummy_sink"),
        }
    }
}

impl FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dummy_source" => Ok(NodeId::DummySource),
            "dummy_sink" => Ok(NodeId::DummySink),
            other => other
                .parse::<usize>()
                .map(NodeId::Original)
                .map_err(|_| format!("invalid node id: {other:?}")),
        }
    }
}

/// Per-node attributes.
///
/// - `c`: cost, 1..=8 for original nodes, 0 for dummies.
/// - `q`: quality value, shared by all original nodes with the same `d`.
/// - `d`: category, 0 or 1 for original nodes, -1 for the dummy source and
///   -2 for the dummy sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeAttrs {
    pub c: i32,
    pub q: i32,
    pub d: i32,
}

impl NodeAttrs {
    pub fn new(c: i32, q: i32, d: i32) -> Self {
        Self { c, q, d }
    }

    pub fn dummy_source() -> Self {
        Self::new(0, 0, DUMMY_SOURCE_D)
    }

    pub fn dummy_sink() -> Self {
        Self::new(0, 0, DUMMY_SINK_D)
    }
}

impl fmt::Display for NodeAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'c': {}, 'q': {}, 'd': {}}}", self.c, self.q, self.d)
    }
}
