#[macro_use]
extern crate quickcheck;

use quickcheck::{Arbitrary, Gen};
use spanning_trees::DisjointSet;

// The number of elements we'll test on.
const DS_LEN: usize = 50;

// The percentage of commands that should be connectivity queries; the
// rest are merges.
const QUERY_PCT: usize = 60;

// The maximum length of each generated script.
const MAX_SCRIPT_LEN: usize = 200;

quickcheck! {
    fn prop_disjoint_set_simulates_labeling(script: Script) -> bool {
        let mut tester = Tester::new();
        tester.execute(&script)
    }
}

// We run the same operations on a `DisjointSet` and on a naive labeling,
// where merging relabels a whole class, and compare the answers.
struct Tester {
    sets:   DisjointSet,
    labels: Vec<usize>,
}

impl Tester {
    fn new() -> Self {
        Tester {
            sets:   DisjointSet::new(DS_LEN),
            labels: (0 .. DS_LEN).collect(),
        }
    }

    fn num_labels(&self) -> usize {
        let mut labels = self.labels.clone();
        labels.sort();
        labels.dedup();
        labels.len()
    }

    // Executes the script, returning false at the first disagreement.
    fn execute(&mut self, script: &Script) -> bool {
        for cmd in &script.0 {
            match *cmd {
                Cmd::Merge(i, j) => {
                    let expected = self.labels[i] != self.labels[j];
                    if expected {
                        let (from, to) = (self.labels[j], self.labels[i]);
                        for label in &mut self.labels {
                            if *label == from { *label = to; }
                        }
                    }
                    if self.sets.merge(i, j) != expected { return false; }
                }
                Cmd::Query(i, j) => {
                    let expected = self.labels[i] == self.labels[j];
                    if self.sets.is_connected(i, j) != expected { return false; }
                }
            }

            if self.sets.num_sets() != self.num_labels() { return false; }
        }

        self.sets.len() == DS_LEN
    }
}

// A script is a sequence of commands.
#[derive(Clone, Debug)]
struct Script(Vec<Cmd>);

// A command is either a merge or a connectivity query.
#[derive(Clone, Debug)]
enum Cmd {
    Merge(usize, usize),
    Query(usize, usize),
}

fn gen_below<G: Gen>(g: &mut G, bound: usize) -> usize {
    usize::arbitrary(g) % bound
}

impl Arbitrary for Script {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let len = gen_below(g, MAX_SCRIPT_LEN);
        let mut result = Vec::with_capacity(len);

        for _ in 0 .. len {
            result.push(Cmd::arbitrary(g))
        }

        Script(result)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Script))
    }
}

impl Arbitrary for Cmd {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let choice = gen_below(g, 100) + 1;
        let i = gen_below(g, DS_LEN);
        let j = gen_below(g, DS_LEN);

        match choice {
            1 ..= QUERY_PCT => Cmd::Query(i, j),
            _               => Cmd::Merge(i, j),
        }
    }
}
