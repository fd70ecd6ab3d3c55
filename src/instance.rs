//! Immutable problem description.
//!
//! An [`Instance`] owns the node table and a precomputed symmetric Euclidean
//! distance matrix. It is constructed once, validated up front, and read-only
//! for the lifetime of a run.

use crate::error::Error;

/// Identifier of a node. Ids are 1-based and contiguous; id 1 is the depot.
pub type NodeId = usize;

/// A weighted location.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique 1-based identifier.
    pub id: NodeId,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Profit collected on first visit. The depot scores 0.
    pub score: u64,
}

impl Node {
    /// Creates a node.
    pub fn new(id: NodeId, x: f64, y: f64, score: u64) -> Self {
        Self { id, x, y, score }
    }
}

/// The id of the depot node. Every tour starts and ends here.
pub const DEPOT: NodeId = 1;

/// An immutable orienteering instance: nodes, pairwise distances, and the
/// travel-time budget.
#[derive(Debug, Clone)]
pub struct Instance {
    nodes: Vec<Node>,
    /// Flat row-major `n * n` distance matrix, indexed by `id - 1`.
    distances: Vec<f64>,
    time_budget: f64,
}

impl Instance {
    /// Builds an instance from a node table and a travel-time budget.
    ///
    /// Nodes are sorted by id. Validation requires unique contiguous ids
    /// `1..=n`, finite coordinates, a depot (id 1) with score 0, and a
    /// finite nonnegative budget. The Euclidean distance matrix is computed
    /// here, once.
    pub fn new(mut nodes: Vec<Node>, time_budget: f64) -> Result<Self, Error> {
        if nodes.is_empty() {
            return Err(Error::InvalidInstance("node table is empty".into()));
        }
        if !time_budget.is_finite() || time_budget < 0.0 {
            return Err(Error::InvalidInstance(format!(
                "time budget must be finite and nonnegative, got {time_budget}"
            )));
        }

        nodes.sort_by_key(|n| n.id);
        for (i, node) in nodes.iter().enumerate() {
            if node.id != i + 1 {
                return Err(Error::InvalidInstance(format!(
                    "node ids must be unique and contiguous from 1, found {} at position {}",
                    node.id, i
                )));
            }
            if !node.x.is_finite() || !node.y.is_finite() {
                return Err(Error::InvalidInstance(format!(
                    "node {} has non-finite coordinates",
                    node.id
                )));
            }
        }
        if nodes[DEPOT - 1].score != 0 {
            return Err(Error::InvalidInstance(format!(
                "depot score must be 0, got {}",
                nodes[DEPOT - 1].score
            )));
        }

        let n = nodes.len();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = (nodes[i].x - nodes[j].x).hypot(nodes[i].y - nodes[j].y);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        Ok(Self {
            nodes,
            distances,
            time_budget,
        })
    }

    /// Number of nodes, depot included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The depot id.
    pub fn depot(&self) -> NodeId {
        DEPOT
    }

    /// The travel-time budget.
    pub fn time_budget(&self) -> f64 {
        self.time_budget
    }

    /// All nodes, ordered by id.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Score of the node with the given id.
    pub fn score(&self, id: NodeId) -> u64 {
        self.nodes[id - 1].score
    }

    /// Distance between two nodes. Symmetric; zero on the diagonal.
    pub fn distance(&self, a: NodeId, b: NodeId) -> f64 {
        self.distances[(a - 1) * self.nodes.len() + (b - 1)]
    }
}
