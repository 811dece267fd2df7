use spanning_trees::{Algorithm, UndirectedGraph};

fn sample() -> UndirectedGraph {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample.txt");
    UndirectedGraph::from_file(path).unwrap()
}

#[test]
fn loads_edges() {
    let graph = sample();

    assert_eq!(20, graph.num_nodes());
    assert_eq!(60, graph.num_edges());

    for &(a, b) in &[(0, 1), (0, 2), (0, 3), (19, 16), (19, 17), (19, 18)] {
        assert!(graph.is_adjacent(a, b));
        assert!(graph.is_adjacent(b, a));
    }

    assert_eq!(27.0, graph.edge_value(10, 12));
    assert_eq!(13.0, graph.edge_value(10, 13));
    assert_eq!(25.0, graph.edge_value(10, 14));
}

#[test]
fn spanning_trees_agree() {
    let graph = sample();

    for &algorithm in &Algorithm::ALL {
        let tree = algorithm.run(&graph);
        assert!(!tree.is_empty());
        assert_eq!(19, tree.len());
        assert_eq!(tree.len(), tree.costs().len());
        assert!(tree.spans(&graph));
        assert_eq!(133.0, tree.total_cost(), "{}", algorithm);
    }
}
