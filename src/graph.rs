//! Dense undirected graph with weighted edges.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use rand::distributions::Uniform;
use rand::Rng;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An undirected graph on the nodes `0 .. n`, stored as an adjacency
/// matrix of edge weights.
///
/// A weight of `0.0` means “no edge”, so an edge can never carry a zero
/// weight. Every node also carries a value, which starts out as
/// `f64::MAX` and is not used by the spanning tree algorithms.
///
/// Node indices are a caller contract: methods index the matrix directly
/// and panic on a node outside `0 .. num_nodes()`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GraphParts"))]
pub struct UndirectedGraph {
    num_nodes: usize,
    num_edges: usize,
    weights: Vec<f64>,
    node_values: Vec<f64>,
}
// Invariant: self.weights.len() == self.num_nodes * self.num_nodes
// Invariant: self.node_values.len() == self.num_nodes
// Invariant: weight(i, j) == weight(j, i)

// Deserialized fields, checked against the invariants above before they
// become a graph.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GraphParts {
    num_nodes: usize,
    num_edges: usize,
    weights: Vec<f64>,
    node_values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<GraphParts> for UndirectedGraph {
    type Error = String;

    fn try_from(parts: GraphParts) -> std::result::Result<Self, String> {
        let n = parts.num_nodes;
        if n.checked_mul(n) != Some(parts.weights.len()) {
            return Err(format!("{} weights for {} nodes", parts.weights.len(), n));
        }
        if parts.node_values.len() != n {
            return Err(format!("{} node values for {} nodes", parts.node_values.len(), n));
        }

        let graph = UndirectedGraph {
            num_nodes: n,
            num_edges: parts.num_edges,
            weights: parts.weights,
            node_values: parts.node_values,
        };

        let mut num_edges = 0;
        for i in 0 .. n {
            for j in i .. n {
                if graph.edge_value(i, j) != graph.edge_value(j, i) {
                    return Err(format!("weights of ({}, {}) are not symmetric", i, j));
                }
                if graph.is_adjacent(i, j) { num_edges += 1; }
            }
        }
        if num_edges != graph.num_edges {
            return Err(format!("edge count {} but {} edges present", graph.num_edges, num_edges));
        }

        Ok(graph)
    }
}

impl Default for UndirectedGraph {
    fn default() -> Self {
        UndirectedGraph::new(0)
    }
}

impl UndirectedGraph {
    /// Creates a graph of `num_nodes` nodes and no edges.
    ///
    /// # Panics
    ///
    /// If the `num_nodes * num_nodes` matrix cannot be allocated.
    pub fn new(num_nodes: usize) -> Self {
        UndirectedGraph::try_new(num_nodes).expect("UndirectedGraph::new: too many nodes")
    }

    /// Creates a graph of `num_nodes` nodes and no edges, or returns
    /// `None` if the `num_nodes * num_nodes` matrix cannot be allocated.
    pub fn try_new(num_nodes: usize) -> Option<Self> {
        let len = num_nodes.checked_mul(num_nodes)?;

        let mut weights = Vec::new();
        weights.try_reserve_exact(len).ok()?;
        weights.resize(len, 0.0);

        let mut node_values = Vec::new();
        node_values.try_reserve_exact(num_nodes).ok()?;
        node_values.resize(num_nodes, f64::MAX);

        Some(UndirectedGraph {
            num_nodes,
            num_edges: 0,
            weights,
            node_values,
        })
    }

    /// Generates a random graph, seeded from the thread-local generator.
    ///
    /// See [`random_with_rng`](#method.random_with_rng).
    pub fn random(num_nodes: usize, density: f64, weight_range: (f64, f64)) -> Result<Self> {
        UndirectedGraph::random_with_rng(num_nodes, density, weight_range, &mut rand::thread_rng())
    }

    /// Generates a random graph of `num_nodes` nodes.
    ///
    /// Each pair of distinct nodes is joined with probability `density`,
    /// by an edge whose weight is drawn uniformly from the inclusive
    /// range `weight_range`. The edge count is therefore only expected
    /// to be `density * n * (n - 1) / 2`, except at densities `0` and `1`.
    ///
    /// # Errors
    ///
    /// If `density` is outside `[0, 1]`, the weight range is not
    /// `0 < lo <= hi` with both ends finite, or the adjacency matrix for
    /// `num_nodes` cannot be allocated.
    pub fn random_with_rng<R: Rng + ?Sized>(num_nodes: usize,
                                            density: f64,
                                            weight_range: (f64, f64),
                                            rng: &mut R) -> Result<Self> {
        if !(0.0 ..= 1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }

        let (lo, hi) = weight_range;
        if !(lo > 0.0 && lo <= hi && hi.is_finite()) {
            return Err(Error::InvalidWeightRange { lo, hi });
        }

        let weight = Uniform::new_inclusive(lo, hi);
        let mut graph = UndirectedGraph::try_new(num_nodes)
            .ok_or(Error::TooManyNodes(num_nodes))?;

        for i in 0 .. num_nodes {
            for j in i + 1 .. num_nodes {
                if rng.gen::<f64>() < density {
                    graph.add_edge(i, j, rng.sample(weight));
                }
            }
        }

        log::debug!("generated graph: {} nodes, {} edges (density {})",
                    graph.num_nodes, graph.num_edges, density);
        Ok(graph)
    }

    /// Loads a graph from an edge-list file.
    ///
    /// See [`from_reader`](#method.from_reader) for the format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        UndirectedGraph::from_reader(file)
    }

    /// Loads a graph from an edge list.
    ///
    /// The input is whitespace-separated tokens: the node count, then
    /// any number of `node1 node2 weight` triples, each of which sets
    /// the weight of that edge. Loading stops quietly at the end of the
    /// input or at the first triple that is incomplete, names a node out
    /// of range, or has a weight that is zero or not finite; the edges
    /// read so far are kept.
    ///
    /// # Errors
    ///
    /// If reading fails, or the first token is missing or is not a node
    /// count small enough for the adjacency matrix to be allocated.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        input.parse()
    }

    /// The number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// The number of edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Is there an edge between the two nodes?
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.edge_value(a, b) != 0.0
    }

    /// The nodes adjacent to `node`, in ascending order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(node)
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight != 0.0)
            .map(|(neighbor, _)| neighbor)
    }

    /// Replaces the contents of `neighbors` with the nodes adjacent to
    /// `node`, in ascending order.
    pub fn neighbors_into(&self, node: usize, neighbors: &mut Vec<usize>) {
        neighbors.clear();
        neighbors.extend(self.neighbors(node));
    }

    /// Every edge `(i, j, weight)` with `i < j`, row by row.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0 .. self.num_nodes).flat_map(move |i| {
            (i + 1 .. self.num_nodes)
                .filter_map(move |j| self.edge(i, j).map(|weight| (i, j, weight)))
        })
    }

    /// Adds an edge between the two nodes, or re-weights an existing one.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) {
        self.set_edge_value(a, b, weight);
    }

    /// Removes the edge between the two nodes, if there is one.
    pub fn delete_edge(&mut self, a: usize, b: usize) {
        self.set_edge_value(a, b, 0.0);
    }

    /// The weight of the edge between the two nodes, or `0.0` if they are
    /// not adjacent.
    pub fn edge_value(&self, a: usize, b: usize) -> f64 {
        self.weights[self.index(a, b)]
    }

    /// The weight of the edge between the two nodes, if there is one.
    pub fn edge(&self, a: usize, b: usize) -> Option<f64> {
        match self.edge_value(a, b) {
            weight if weight == 0.0 => None,
            weight => Some(weight),
        }
    }

    /// Sets the weight of the edge between the two nodes.
    ///
    /// The edge count goes up if the nodes were not adjacent. A weight of
    /// `0.0` removes the edge, and the count goes down only if there was
    /// one.
    pub fn set_edge_value(&mut self, a: usize, b: usize, weight: f64) {
        match (self.is_adjacent(a, b), weight != 0.0) {
            (false, true)  => self.num_edges += 1,
            (true,  false) => self.num_edges -= 1,
            _              => {}
        }

        let ab = self.index(a, b);
        let ba = self.index(b, a);
        self.weights[ab] = weight;
        self.weights[ba] = weight;
    }

    /// The value of the given node.
    ///
    /// # Panics
    ///
    /// If `node` is out of range.
    pub fn node_value(&self, node: usize) -> f64 {
        self.node_values[node]
    }

    /// Sets the value of the given node.
    ///
    /// # Panics
    ///
    /// If `node` is out of range.
    pub fn set_node_value(&mut self, node: usize, value: f64) {
        self.node_values[node] = value;
    }

    // HELPERS

    fn index(&self, a: usize, b: usize) -> usize {
        assert!(a < self.num_nodes && b < self.num_nodes,
                "node ({}, {}) out of range for {} nodes", a, b, self.num_nodes);
        a * self.num_nodes + b
    }

    fn row(&self, node: usize) -> &[f64] {
        let start = self.index(node, 0);
        &self.weights[start .. start + self.num_nodes]
    }
}

impl FromStr for UndirectedGraph {
    type Err = Error;

    /// Parses an edge list; see
    /// [`from_reader`](struct.UndirectedGraph.html#method.from_reader).
    fn from_str(input: &str) -> Result<Self> {
        let mut tokens = input.split_whitespace();

        let header = tokens.next().ok_or(Error::MissingNodeCount)?;
        let num_nodes = header.parse::<usize>()
            .map_err(|_| Error::InvalidNodeCount { token: header.to_owned() })?;

        let mut graph = UndirectedGraph::try_new(num_nodes)
            .ok_or_else(|| Error::InvalidNodeCount { token: header.to_owned() })?;
        let mut triples = 0;

        while let Some(first) = tokens.next() {
            let triple = [Some(first), tokens.next(), tokens.next()];
            match parse_triple(&triple, num_nodes) {
                Some((a, b, weight)) => graph.add_edge(a, b, weight),
                None => {
                    log::warn!("stopped reading edges at triple {}: {:?}",
                               triples, triple);
                    break;
                }
            }
            triples += 1;
        }

        log::debug!("loaded graph: {} nodes, {} edges from {} triples",
                    graph.num_nodes, graph.num_edges, triples);
        Ok(graph)
    }
}

fn parse_triple(triple: &[Option<&str>; 3], num_nodes: usize) -> Option<(usize, usize, f64)> {
    let a = triple[0]?.parse::<usize>().ok()?;
    let b = triple[1]?.parse::<usize>().ok()?;
    let weight = triple[2]?.parse::<f64>().ok()?;

    if a < num_nodes && b < num_nodes && weight != 0.0 && weight.is_finite() {
        Some((a, b, weight))
    } else {
        None
    }
}
