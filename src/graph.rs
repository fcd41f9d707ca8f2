use super::graph_traits::{Edges, Graph};
use petgraph::Graph as PetGraph;
use petgraph::Undirected;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A 2D keypoint label.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Position {
        Position { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An edge record of one endpoint. Stores the arena index of the neighbor
/// node, never an owning reference, so undirected connections (two records,
/// one per endpoint) cannot form an ownership cycle.
#[derive(Debug)]
pub struct Edge {
    /// Node index type. Our graphs never exceed 4 billion nodes.
    neighbor: u32,
}

impl Edge {
    pub fn new(node_idx: usize) -> Edge {
        assert!(node_idx <= u32::max_value() as usize);
        Edge {
            neighbor: node_idx as u32,
        }
    }

    pub fn neighbor(&self) -> usize {
        self.neighbor as usize
    }
}

#[derive(Debug)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    pub fn new(edges: Vec<Edge>) -> EdgeList {
        EdgeList { edges }
    }
}

impl Edges for EdgeList {
    #[inline]
    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn nth_edge(&self, n: usize) -> Option<usize> {
        self.edges.get(n).map(|e| e.neighbor as usize)
    }
}

#[derive(Debug)]
pub struct Node<T: Debug> {
    edges: EdgeList,
    node_value: T,
}

impl<T: Debug> Node<T> {
    pub fn new(edges: EdgeList, node_value: T) -> Node<T> {
        Node { edges, node_value }
    }

    pub fn node_value(&self) -> &T {
        &self.node_value
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.edges.push(edge);
    }

    fn degree(&self) -> usize {
        self.edges.num_edges()
    }
}

/// An attributed keypoint graph owning its nodes in an arena. Node order is
/// irrelevant to the matching but stable, so scores are reproducible.
#[derive(Debug)]
pub struct OwnedGraph<T: Debug + Default + Clone> {
    graph_id: String,
    nodes: Vec<Node<T>>,
}

impl<T: Debug + Default + Clone> OwnedGraph<T> {
    pub fn new(graph_id: &str, nodes: Vec<Node<T>>) -> OwnedGraph<T> {
        OwnedGraph {
            graph_id: graph_id.to_owned(),
            nodes,
        }
    }

    pub fn from_petgraph(graph_id: &str, pg: &PetGraph<T, (), Undirected>) -> OwnedGraph<T> {
        OwnedGraph {
            graph_id: graph_id.to_owned(),
            nodes: pg
                .node_indices()
                .map(|i| {
                    Node::new(
                        EdgeList::new(pg.neighbors(i).map(|j| Edge::new(j.index())).collect()),
                        pg.node_weight(i)
                            .map(|v| v.clone())
                            .unwrap_or_else(|| T::default()),
                    )
                })
                .collect(),
        }
    }

    pub fn graph_id(&self) -> &str {
        &self.graph_id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push_empty_node(&mut self, node_value: T) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node::new(EdgeList::new(Vec::new()), node_value));
        idx
    }
}

impl OwnedGraph<Position> {
    /// Centers the node labels around (0,0), so absolute position does not
    /// affect cross-graph comparison. Called once after construction; the
    /// matching itself never normalizes.
    pub fn normalize(&mut self) {
        if self.nodes.is_empty() {
            return;
        }
        let n = self.nodes.len() as f64;
        let mut mean_x = 0.0;
        let mut mean_y = 0.0;
        for node in &self.nodes {
            mean_x += node.node_value.x;
            mean_y += node.node_value.y;
        }
        mean_x /= n;
        mean_y /= n;
        for node in &mut self.nodes {
            node.node_value.x -= mean_x;
            node.node_value.y -= mean_y;
        }
    }
}

impl<T: Debug + Default + Clone> Graph for OwnedGraph<T> {
    type EDGE = EdgeList;
    type NODE = T;

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn node_degree(&self, node_idx: usize) -> usize {
        self.nodes[node_idx].degree()
    }

    #[inline]
    fn node_value(&self, node_idx: usize) -> &Self::NODE {
        self.nodes[node_idx].node_value()
    }

    #[inline]
    fn edges_of(&self, node_idx: usize) -> &Self::EDGE {
        &self.nodes[node_idx].edges
    }
}

/// Builds an `OwnedGraph` from externally keyed nodes, e.g. the string node
/// ids of a GXL file.
pub struct GraphBuilder<K: Ord, T: Debug + Default + Clone> {
    // maps the external node key to its index in the node arena
    node_map: BTreeMap<K, usize>,
    graph: OwnedGraph<T>,
}

impl<K: Ord, T: Debug + Default + Clone> GraphBuilder<K, T> {
    pub fn new(graph_id: &str) -> GraphBuilder<K, T> {
        GraphBuilder {
            node_map: BTreeMap::new(),
            graph: OwnedGraph::new(graph_id, Vec::new()),
        }
    }

    pub fn graph(self) -> OwnedGraph<T> {
        self.graph
    }

    pub fn add_node(&mut self, node_id: K, node_value: T) -> usize {
        match self.node_map.entry(node_id) {
            Entry::Vacant(e) => {
                let next_id = self.graph.push_empty_node(node_value);
                e.insert(next_id);
                next_id
            }
            Entry::Occupied(_) => {
                panic!("duplicate node id");
            }
        }
    }

    // returns node index
    fn add_or_get_node(&mut self, node_id: K) -> usize {
        match self.node_map.entry(node_id) {
            Entry::Vacant(e) => {
                let next_id = self.graph.push_empty_node(T::default());
                e.insert(next_id);
                next_id
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    /// Adds the undirected connection (a, b): an edge record on each
    /// endpoint.
    pub fn add_edge(&mut self, node_id_a: K, node_id_b: K) {
        let index_a = self.add_or_get_node(node_id_a);
        let index_b = self.add_or_get_node(node_id_b);
        self.graph.nodes[index_a].add_edge(Edge::new(index_b));
        self.graph.nodes[index_b].add_edge(Edge::new(index_a));
    }
}
