//! Traits that represent an abstract graph upon which our algorithm operates.

use petgraph::{graph::NodeIndex, Graph as PetGraph, Undirected};

/// Abstract representation of the incident edges of a node. Used by the algorithm.
pub trait Edges {
    /// The number of incident edges
    fn num_edges(&self) -> usize;

    /// Returns the neighbor node index of the nth-edge
    fn nth_edge(&self, n: usize) -> Option<usize>;

    /// Returns the label of the nth-edge. Keypoint graphs carry no edge
    /// labels, so the default is 0.0. Labeled-edge variants override this
    /// together with a cost model whose `edge_sub` compares the labels.
    fn nth_edge_weight(&self, _n: usize) -> f64 {
        0.0
    }
}

/// Abstract representation of a Graph. Used by the algorithm.
pub trait Graph {
    type EDGE: Edges;
    type NODE: Clone;

    fn num_nodes(&self) -> usize;
    fn node_degree(&self, node_idx: usize) -> usize;
    fn node_value(&self, node_idx: usize) -> &Self::NODE;
    fn edges_of(&self, node_idx: usize) -> &Self::EDGE;

    fn to_petgraph(&self) -> PetGraph<Self::NODE, (), Undirected> {
        let mut graph = PetGraph::new_undirected();
        for i in 0..self.num_nodes() {
            let idx = graph.add_node(self.node_value(i).clone());
            assert!(idx.index() == i);
        }
        // every undirected connection is stored as two edge records, one
        // per endpoint; emit each connection once
        for i in 0..self.num_nodes() {
            let edges = self.edges_of(i);
            for k in 0..edges.num_edges() {
                let j = edges.nth_edge(k).unwrap();
                if i <= j {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }
        graph
    }
}
