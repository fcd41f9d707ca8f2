use crate::graph::Position;
use thiserror::Error;

/// The cost model the matching charges its edit operations against. Fixed
/// for one scoring run; all functions are pure.
///
/// `N` is the node label type, so alternative models (labeled edges,
/// non-Euclidean node distances) plug in without touching the matching
/// algorithm.
pub trait CostModel<N> {
    /// Cost of deleting or inserting a node.
    fn node_del_ins(&self) -> f64;

    /// Cost of deleting or inserting an edge.
    fn edge_del_ins(&self) -> f64;

    /// Cost of substituting the label of one node with another.
    fn node_sub(&self, a: &N, b: &N) -> f64;

    /// Cost of substituting one edge label with another. Unlabeled edges
    /// substitute for free.
    fn edge_sub(&self, _a: f64, _b: f64) -> f64 {
        0.0
    }
}

/// Rejected cost model parameters. The lower-bound and normalization
/// arithmetic of the matching assumes non-negative costs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostModelError {
    #[error("node deletion/insertion cost must be non-negative, got {0}")]
    InvalidNodeCost(f64),

    #[error("edge deletion/insertion cost must be non-negative, got {0}")]
    InvalidEdgeCost(f64),
}

/// Euclidean cost function for keypoint graphs:
/// - deleting/inserting a node has a fixed cost (`node_cost`)
/// - deleting/inserting an edge has a fixed cost (`edge_cost`)
/// - substituting a node label costs the Euclidean distance between the keypoints
/// - substituting the unlabeled edges costs zero
#[derive(Debug, Copy, Clone)]
pub struct EuclideanCost {
    node_cost: f64,
    edge_cost: f64,
}

impl EuclideanCost {
    pub fn new(node_cost: f64, edge_cost: f64) -> Result<EuclideanCost, CostModelError> {
        // the negated comparison also rejects NaN
        if !(node_cost >= 0.0) {
            return Err(CostModelError::InvalidNodeCost(node_cost));
        }
        if !(edge_cost >= 0.0) {
            return Err(CostModelError::InvalidEdgeCost(edge_cost));
        }
        Ok(EuclideanCost {
            node_cost,
            edge_cost,
        })
    }
}

impl CostModel<Position> for EuclideanCost {
    fn node_del_ins(&self) -> f64 {
        self.node_cost
    }

    fn edge_del_ins(&self) -> f64 {
        self.edge_cost
    }

    fn node_sub(&self, a: &Position, b: &Position) -> f64 {
        a.distance(b)
    }
}
