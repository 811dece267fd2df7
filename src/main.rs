use std::env;
use std::process;

use spanning_trees::{Algorithm, UndirectedGraph};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let program = args.first().map_or("spanning-trees", String::as_str);
        eprintln!("Usage: {} <filename>", program);
        process::exit(1);
    }

    let graph = match UndirectedGraph::from_file(&args[1]) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}: {}", args[1], err);
            process::exit(1);
        }
    };

    for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
        if i > 0 { println!(); }

        let tree = algorithm.run(&graph);
        println!("{} algorithm's total cost: {}", algorithm, tree.total_cost());
        print!("{}", tree);
    }
}
