//! Hausdorff edit cost between two sets of incident edges.

use crate::cost::CostModel;
use crate::graph_traits::Edges;
use ndarray::Array1;

/// Approximate edit cost between the edge sets of a node pair being compared.
///
/// Each edge starts out deleted (left set) or inserted (right set) and then
/// independently claims the cheapest substitution it sees; no one-to-one
/// assignment is enforced. This is the deliberate Hausdorff relaxation that
/// keeps the cost O(m * n) instead of solving an exact cubic assignment.
pub fn hausdorff_edge_cost<N, E1, E2, C>(edges1: &E1, edges2: &E2, cost: &C) -> f64
where
    E1: Edges,
    E2: Edges,
    C: CostModel<N>,
{
    let m = edges1.num_edges();
    let n = edges2.num_edges();

    let mut cost_ab = Array1::from_elem(m, cost.edge_del_ins());
    let mut cost_ba = Array1::from_elem(n, cost.edge_del_ins());

    for i in 0..m {
        for j in 0..n {
            let sub = 0.5 * cost.edge_sub(edges1.nth_edge_weight(i), edges2.nth_edge_weight(j));
            if sub < cost_ab[i] {
                cost_ab[i] = sub;
            }
            if sub < cost_ba[j] {
                cost_ba[j] = sub;
            }
        }
    }

    cost_ab.sum() + cost_ba.sum()
}
