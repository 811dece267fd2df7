//! Minimum spanning trees by Prim’s and Kruskal’s algorithms.

use std::fmt;

use crate::disjoint_set::DisjointSet;
use crate::graph::UndirectedGraph;
use crate::priority_queue::PriorityQueue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The edges chosen by a spanning tree algorithm, in the order they were
/// chosen, each with its weight.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpanningTree {
    edges: Vec<(usize, usize)>,
    costs: Vec<f64>,
}
// Invariant: self.edges.len() == self.costs.len()

impl SpanningTree {
    /// The chosen edges as `(origin, destination)` pairs.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// The weight of each chosen edge, parallel to [`edges`](#method.edges).
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// The number of edges in the tree.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Is the tree devoid of edges?
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The sum of the edge weights.
    pub fn total_cost(&self) -> f64 {
        self.costs.iter().sum()
    }

    /// Each edge as `(origin, destination, weight)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.edges.iter()
            .zip(&self.costs)
            .map(|(&(origin, destination), &cost)| (origin, destination, cost))
    }

    /// Does the tree reach every node of `graph`?
    ///
    /// Both algorithms return fewer than `num_nodes - 1` edges when the
    /// graph is disconnected.
    pub fn spans(&self, graph: &UndirectedGraph) -> bool {
        self.len() + 1 >= graph.num_nodes()
    }

    /// Splits the tree into its edge and cost lists.
    pub fn into_parts(self) -> (Vec<(usize, usize)>, Vec<f64>) {
        (self.edges, self.costs)
    }

    fn push(&mut self, edge: (usize, usize), cost: f64) {
        log::trace!("accepted edge {} -> {} ({})", edge.0, edge.1, cost);
        self.edges.push(edge);
        self.costs.push(cost);
    }
}

impl fmt::Display for SpanningTree {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for (origin, destination, cost) in self.iter() {
            writeln!(formatter, "{} -> {} ({})", origin, destination, cost)?;
        }
        Ok(())
    }
}

/// A minimum spanning tree algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// [`UndirectedGraph::prim`](struct.UndirectedGraph.html#method.prim)
    Prim,
    /// [`UndirectedGraph::kruskal`](struct.UndirectedGraph.html#method.kruskal)
    Kruskal,
}

impl Algorithm {
    /// Both algorithms, Prim’s first.
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Kruskal];

    /// Runs this algorithm on `graph`.
    pub fn run(self, graph: &UndirectedGraph) -> SpanningTree {
        match self {
            Algorithm::Prim    => graph.prim(),
            Algorithm::Kruskal => graph.kruskal(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Algorithm::Prim    => formatter.write_str("Prim's"),
            Algorithm::Kruskal => formatter.write_str("Kruskal's"),
        }
    }
}

impl UndirectedGraph {
    /// Grows a minimum spanning tree out from node 0 with Prim’s
    /// algorithm.
    ///
    /// Candidate edges wait in a min-queue keyed on weight. Edges whose
    /// far end has been reached since they were queued are skipped when
    /// they come out rather than removed early, so this runs in
    /// *O(E log E)*.
    ///
    /// If some node cannot be reached from node 0 the queue runs dry
    /// first, and the result is the spanning tree of node 0’s component.
    /// An empty graph yields an empty tree.
    pub fn prim(&self) -> SpanningTree {
        let mut tree = SpanningTree::default();
        let num_nodes = self.num_nodes();
        if num_nodes == 0 { return tree; }

        let mut candidates = PriorityQueue::new(false);
        let mut visited = vec![false; num_nodes];
        let mut num_visited = 1;

        visited[0] = true;
        for neighbor in self.neighbors(0) {
            candidates.push((0, neighbor), self.edge_value(0, neighbor));
        }

        while num_visited < num_nodes {
            let ((origin, destination), cost) = match candidates.pop_with_priority() {
                Some(candidate) => candidate,
                None => {
                    log::warn!("Prim's: only {} of {} nodes reachable from node 0",
                               num_visited, num_nodes);
                    break;
                }
            };

            if visited[destination] { continue; }

            visited[destination] = true;
            num_visited += 1;
            tree.push((origin, destination), cost);

            for neighbor in self.neighbors(destination) {
                if !visited[neighbor] {
                    candidates.push((destination, neighbor),
                                    self.edge_value(destination, neighbor));
                }
            }
        }

        log::debug!("Prim's: {} edges, total cost {}", tree.len(), tree.total_cost());
        tree
    }

    /// Finds a minimum spanning tree with Kruskal’s algorithm.
    ///
    /// Every edge goes into a min-queue keyed on weight; each edge that
    /// comes out joining two different components is kept. This runs in
    /// *O(E log E)*.
    ///
    /// A disconnected graph yields a spanning forest, with fewer than
    /// `num_nodes - 1` edges. An empty graph yields an empty tree.
    pub fn kruskal(&self) -> SpanningTree {
        let mut tree = SpanningTree::default();
        let num_nodes = self.num_nodes();
        if num_nodes == 0 { return tree; }

        let mut components = DisjointSet::new(num_nodes);
        let mut candidates = PriorityQueue::new(false);

        for (i, j, weight) in self.edges() {
            candidates.push((i, j), weight);
        }

        while let Some(((a, b), cost)) = candidates.pop_with_priority() {
            if components.merge(a, b) {
                tree.push((a, b), cost);
            }
        }

        log::debug!("Kruskal's: {} edges, {} components, total cost {}",
                    tree.len(), components.num_sets(), tree.total_cost());
        tree
    }
}
