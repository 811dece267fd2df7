#![doc(html_root_url = "https://docs.rs/spanning-trees/0.1.0")]
//! Minimum spanning trees of dense undirected graphs, by Prim’s and
//! Kruskal’s algorithms.
//!
//! The pieces are:
//!
//! |           | role | used by |
//! | :-------- | :--- | :------ |
//! | [`UndirectedGraph`](struct.UndirectedGraph.html) | adjacency-matrix graph, random or loaded from an edge list | both |
//! | [`PriorityQueue`](struct.PriorityQueue.html) | binary heap of `(element, priority)` pairs | both |
//! | [`DisjointSet`](struct.DisjointSet.html) | union-find with path compression and union by rank | Kruskal’s |
//!
//! Nodes are the dense indices `0 .. n`.
//!
//! # Examples
//!
//! Kruskal’s and Prim’s algorithms on a small grid:
//!
//! ```
//! use spanning_trees::UndirectedGraph;
//!
//! //  0 ------ 1 ------ 2
//! //  |    6   |    5   |
//! //  | 8      | 1      | 4
//! //  |        |        |
//! //  3 ------ 4 ------ 5
//! //  |    7   |    2   |
//! //  | 3      | 12     | 11
//! //  |        |        |
//! //  6 ------ 7 ------ 8
//! //       9        10
//! let graph: UndirectedGraph = "
//!     9
//!     0 1 6    0 3 8
//!     1 2 5    1 4 1
//!     2 5 4
//!     3 4 7    3 6 3
//!     4 5 2    4 7 12
//!     5 8 11
//!     6 7 9
//!     7 8 10
//! ".parse().unwrap();
//!
//! let kruskal = graph.kruskal();
//! assert_eq!(kruskal.edges(),
//!            &[(1, 4), (4, 5), (3, 6), (2, 5), (0, 1), (3, 4), (6, 7), (7, 8)]);
//!
//! let prim = graph.prim();
//! assert_eq!(prim.total_cost(), kruskal.total_cost());
//! assert!(prim.spans(&graph));
//! ```
//!
//! Random graphs draw an edge for each pair of nodes with probability
//! `density`, weighted uniformly from an inclusive range:
//!
//! ```
//! use spanning_trees::UndirectedGraph;
//!
//! let graph = UndirectedGraph::random(50, 1.0, (1.0, 10.0)).unwrap();
//! assert_eq!(50 * 49 / 2, graph.num_edges());
//! assert_eq!(49, graph.prim().len());
//! ```

#![warn(missing_docs)]

mod error;
mod disjoint_set;
mod priority_queue;
mod graph;
mod mst;

pub use error::*;
pub use disjoint_set::*;
pub use priority_queue::*;
pub use graph::*;
pub use mst::*;
