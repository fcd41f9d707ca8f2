//! Hausdorff edit distance between two keypoint graphs.

use crate::cost::CostModel;
use crate::edge_matching::hausdorff_edge_cost;
use crate::graph_traits::Graph;
use ndarray::Array1;

/// Approximation of graph edit distance based on independent nearest-neighbor
/// matching of substructures (a node plus its incident edges).
///
/// Both input graphs are expected to be normalized to zero-mean coordinates
/// and read-only for the duration of the call; `score` never mutates them.
/// Edge records must point at nodes of their own graph. That precondition is
/// the graph builder's responsibility and is not validated here.
#[derive(Debug)]
pub struct HausdorffEditDistance<C> {
    cost: C,
}

impl<C> HausdorffEditDistance<C> {
    pub fn new(cost: C) -> HausdorffEditDistance<C> {
        HausdorffEditDistance { cost }
    }

    /// Computes the Hausdorff edit distance between `g1` and `g2`,
    /// normalized with the maximum graph edit distance between them.
    ///
    /// The result is 0.0 for identical graphs and grows with structural
    /// dissimilarity; for ordinary inputs it stays near [0, 1], but the
    /// upper bound is not guaranteed for arbitrary cost ratios.
    pub fn score<G>(&self, g1: &G, g2: &G) -> f64
    where
        G: Graph,
        C: CostModel<G::NODE>,
    {
        let p = g1.num_nodes();
        let q = g2.num_nodes();

        // cost A -> B seeded with node plus edge deletion; deleting a node
        // takes its incident edges with it, and each edge is seen from both
        // endpoints, hence the factor 0.5
        let mut cost_ab = Array1::from_shape_fn(p, |i| {
            self.cost.node_del_ins() + 0.5 * g1.node_degree(i) as f64 * self.cost.edge_del_ins()
        });

        // cost B -> A seeded with node plus edge insertion
        let mut cost_ba = Array1::from_shape_fn(q, |j| {
            self.cost.node_del_ins() + 0.5 * g2.node_degree(j) as f64 * self.cost.edge_del_ins()
        });

        // cost of substituting substructures; each node independently claims
        // its cheapest partner or keeps its deletion/insertion cost
        for i in 0..p {
            let edges1 = g1.edges_of(i);
            for j in 0..q {
                let edges2 = g2.edges_of(j);

                let sub_node = self.cost.node_sub(g1.node_value(i), g2.node_value(j));
                let mut sub_edges = hausdorff_edge_cost(edges1, edges2, &self.cost);

                // the independent edge matching can undercount when the
                // degrees differ; the cardinality mismatch alone costs at
                // least this much
                let min_edges = (g1.node_degree(i) as f64 - g2.node_degree(j) as f64).abs()
                    * self.cost.edge_del_ins();
                if min_edges > sub_edges {
                    sub_edges = min_edges;
                }

                let substitution = 0.5 * (sub_node + 0.5 * sub_edges);
                if substitution < cost_ab[i] {
                    cost_ab[i] = substitution;
                }
                if substitution < cost_ba[j] {
                    cost_ba[j] = substitution;
                }
            }
        }

        let mut distance = cost_ab.sum() + cost_ba.sum();

        // lower bound from the node count mismatch alone
        let min_nodes = (p as f64 - q as f64).abs() * self.cost.node_del_ins();
        if min_nodes > distance {
            distance = min_nodes;
        }

        // normalize with the maximum graph edit distance, deleting all of g1
        // and inserting all of g2
        let max_nodes = (p + q) as f64 * self.cost.node_del_ins();
        let mut max_edges = 0.0;
        for i in 0..p {
            max_edges += 0.5 * g1.node_degree(i) as f64 * self.cost.edge_del_ins();
        }
        for j in 0..q {
            max_edges += 0.5 * g2.node_degree(j) as f64 * self.cost.edge_del_ins();
        }

        if max_nodes + max_edges == 0.0 {
            // two empty graphs are identical
            return 0.0;
        }

        distance / (max_nodes + max_edges)
    }
}
