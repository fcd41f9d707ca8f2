//! An approximation of graph edit distance for keypoint graphs, based on
//! Hausdorff matching of local substructures according to [this paper][1].
//!
//! [1]: https://doi.org/10.1016/j.patcog.2014.07.015 "2015, Fischer, Suen,
//!      Frinken, Riesen, Bunke, Approximation of Graph Edit Distance Based
//!      on Hausdorff Matching"

pub mod graph;
mod cost;
mod edge_matching;
mod graph_traits;
mod hausdorff;

pub use {cost::*, edge_matching::*, graph_traits::*, hausdorff::*};

/// Scores the structural dissimilarity of two graphs under the given cost
/// model: 0.0 for identical graphs, larger for more dissimilar ones, so
/// ranking candidates against a query is a sort by ascending score.
pub fn score_graphs<T, C>(a: &T, b: &T, cost: C) -> f64
where
    T: Graph,
    C: CostModel<T::NODE>,
{
    HausdorffEditDistance::new(cost).score(a, b)
}
