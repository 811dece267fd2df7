use std::cell::Cell;
use std::fmt::{self, Debug};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vector-based union-find over the elements `0 .. n`.
///
/// Each element stores the index of its parent; an element whose parent
/// is itself is the root (representative) of its set. Finds compress
/// paths fully and merges are balanced by rank.
///
/// # Panics
///
/// Element indices are a caller contract: passing an index outside
/// `0 .. len()` to any method panics on the slice access.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DisjointSetParts"))]
pub struct DisjointSet {
    parents: Vec<Cell<usize>>,
    ranks: Vec<u8>,
    num_sets: usize,
}
// Invariant: self.parents.len() == self.ranks.len()
// Invariant: self.num_sets == number of i with parent(i) == i
// Invariant: rank(parent(i)) > rank(i) unless i is a root, so parents
//            never form a cycle

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct DisjointSetParts {
    parents: Vec<usize>,
    ranks: Vec<u8>,
    num_sets: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<DisjointSetParts> for DisjointSet {
    type Error = String;

    fn try_from(parts: DisjointSetParts) -> Result<Self, String> {
        let len = parts.parents.len();
        if parts.ranks.len() != len {
            return Err(format!("{} ranks for {} elements", parts.ranks.len(), len));
        }

        let mut roots = 0;
        for (i, &parent) in parts.parents.iter().enumerate() {
            if parent >= len {
                return Err(format!("parent {} of {} out of range", parent, i));
            } else if parent == i {
                roots += 1;
            } else if parts.ranks[parent] <= parts.ranks[i] {
                return Err(format!("parent {} of {} does not outrank it", parent, i));
            }
        }
        if roots != parts.num_sets {
            return Err(format!("{} sets but {} roots", parts.num_sets, roots));
        }

        Ok(DisjointSet {
            parents: parts.parents.into_iter().map(Cell::new).collect(),
            ranks: parts.ranks,
            num_sets: parts.num_sets,
        })
    }
}

impl Debug for DisjointSet {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "DisjointSet({:?})", self.parents)
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        DisjointSet::new(0)
    }
}

impl DisjointSet {
    /// Creates `size` singleton sets, each element its own root.
    pub fn new(size: usize) -> Self {
        DisjointSet {
            parents: (0..size).map(Cell::new).collect(),
            ranks: vec![0; size],
            num_sets: size,
        }
    }

    /// The number of elements in all the sets.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Is the disjoint set devoid of elements?
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// The number of disjoint sets, which is the number of roots.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Joins the sets of the two given elements.
    ///
    /// Returns whether anything changed. That is, if the sets were
    /// different, it returns `true` and there is one set fewer, but if
    /// they were already the same then it returns `false`.
    pub fn merge(&mut self, a: usize, b: usize) -> bool {
        let a = self.find(a);
        let b = self.find(b);

        if a == b { return false; }

        let rank_a = self.ranks[a];
        let rank_b = self.ranks[b];

        if rank_a < rank_b {
            self.set_parent(a, b);
        } else if rank_a > rank_b {
            self.set_parent(b, a);
        } else {
            self.set_parent(b, a);
            self.ranks[a] = rank_a.saturating_add(1);
        }

        self.num_sets -= 1;
        true
    }

    /// Finds the representative element for the given element’s set.
    ///
    /// Every element visited on the way is re-pointed directly at the
    /// root, so membership is unchanged but later finds are shorter.
    pub fn find(&self, element: usize) -> usize {
        let mut root = element;
        while self.parent(root) != root {
            root = self.parent(root);
        }

        let mut current = element;
        while current != root {
            let next = self.parent(current);
            self.set_parent(current, root);
            current = next;
        }

        root
    }

    /// Determines whether two elements are in the same set.
    pub fn is_connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the representative of every element, indexed by element.
    pub fn to_vec(&self) -> Vec<usize> {
        (0 .. self.len()).map(|i| self.find(i)).collect()
    }

    // HELPERS

    fn parent(&self, element: usize) -> usize {
        self.parents[element].get()
    }

    fn set_parent(&self, element: usize, parent: usize) {
        self.parents[element].set(parent);
    }
}
