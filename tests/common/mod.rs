use graph_hausdorff_matching::graph::{GraphBuilder, OwnedGraph, Position};
use graph_hausdorff_matching::{score_graphs, EuclideanCost};

// reasonable defaults, assuming a node spacing around 25.0 on the keypoint
// graphs
pub const NODE_COST: f64 = 25.0;
pub const EDGE_COST: f64 = 50.0;

pub fn cost() -> EuclideanCost {
    EuclideanCost::new(NODE_COST, EDGE_COST).unwrap()
}

pub fn score(a: &OwnedGraph<Position>, b: &OwnedGraph<Position>) -> f64 {
    score_graphs(a, b, cost())
}

/// A `w` x `h` grid of keypoints with 4-neighborhood connectivity, `spacing`
/// apart, centered to zero mean.
pub fn grid(graph_id: &str, w: usize, h: usize, spacing: f64) -> OwnedGraph<Position> {
    let mut builder: GraphBuilder<(usize, usize), Position> = GraphBuilder::new(graph_id);
    for y in 0..h {
        for x in 0..w {
            builder.add_node((x, y), Position::new(x as f64 * spacing, y as f64 * spacing));
        }
    }
    for y in 0..h {
        for x in 0..w {
            if x + 1 < w {
                builder.add_edge((x, y), (x + 1, y));
            }
            if y + 1 < h {
                builder.add_edge((x, y), (x, y + 1));
            }
        }
    }
    let mut graph = builder.graph();
    graph.normalize();
    graph
}
