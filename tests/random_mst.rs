#[macro_use]
extern crate quickcheck;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spanning_trees::{DisjointSet, PriorityQueue, UndirectedGraph};

// The largest graph we'll generate.
const MAX_NODES: usize = 40;

quickcheck! {
    fn prop_prim_and_kruskal_agree(seed: u64, nodes: u8, density: u8) -> bool {
        let graph = connected_graph(seed, nodes as usize % MAX_NODES + 1, density as f64 / 255.0);
        let prim = graph.prim();
        let kruskal = graph.kruskal();

        prim.spans(&graph)
            && kruskal.spans(&graph)
            && prim.len() == graph.num_nodes() - 1
            && kruskal.len() == graph.num_nodes() - 1
            && (prim.total_cost() - kruskal.total_cost()).abs() < 1e-6
    }

    fn prop_kruskal_picks_a_forest_of_graph_edges(seed: u64, nodes: u8, density: u8) -> bool {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = nodes as usize % MAX_NODES + 1;
        let graph = UndirectedGraph::random_with_rng(n, density as f64 / 255.0, (1.0, 50.0), &mut rng)
            .unwrap();

        let tree = graph.kruskal();
        let mut components = DisjointSet::new(n);
        for (a, b, cost) in tree.iter() {
            if graph.edge_value(a, b) != cost || !components.merge(a, b) {
                return false;
            }
        }

        // A spanning forest joins everything the graph joins.
        let mut reference = DisjointSet::new(n);
        for (a, b, _) in graph.edges() {
            reference.merge(a, b);
        }
        components.num_sets() == reference.num_sets()
    }

    fn prop_queue_drains_in_order(priorities: Vec<i32>, prefer_high: bool) -> bool {
        let mut pq = PriorityQueue::new(prefer_high);
        for (i, &priority) in priorities.iter().enumerate() {
            pq.push(i, priority);
        }

        let mut expected = priorities.clone();
        expected.sort();
        if prefer_high { expected.reverse(); }

        let mut drained = Vec::with_capacity(priorities.len());
        while let Some((i, priority)) = pq.pop_with_priority() {
            if priorities[i] != priority { return false; }
            drained.push(priority);
        }

        drained == expected
    }
}

// A random graph with a path 0 - 1 - ... - n-1 added so it is connected.
fn connected_graph(seed: u64, n: usize, density: f64) -> UndirectedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UndirectedGraph::random_with_rng(n, density, (1.0, 100.0), &mut rng).unwrap();

    for i in 1 .. n {
        if !graph.is_adjacent(i - 1, i) {
            graph.add_edge(i - 1, i, rng.gen_range(1.0 ..= 100.0));
        }
    }

    graph
}
