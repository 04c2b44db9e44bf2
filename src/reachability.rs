use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::graph::Graph;

/// Is there a directed path from `src` to `tgt` using the edges currently in
/// `g`? Every node reaches itself through the empty path.
pub fn is_reachable<L: Clone + Eq + Hash + Debug>(g: &Graph<L>, src: &L, tgt: &L) -> bool {
    let mut visited = HashSet::<&L>::new();
    let mut stack = vec![src];
    while let Some(cur) = stack.pop() {
        if cur == tgt {
            return true;
        }
        if visited.insert(cur) {
            stack.extend(g.successors(cur));
        }
    }
    false
}

/// All nodes reachable from `src`, including `src`, in discovery order.
pub fn reachable_from<'a, L: Clone + Eq + Hash + Debug>(
    g: &'a Graph<L>,
    src: &'a L,
) -> IndexSet<&'a L> {
    let mut visited = IndexSet::new();
    let mut stack = vec![src];
    while let Some(cur) = stack.pop() {
        if visited.insert(cur) {
            stack.extend(g.successors(cur).filter(|l| !visited.contains(l)));
        }
    }
    visited
}

impl<L: Clone + Eq + Hash + Debug> Graph<L> {
    pub fn is_reachable(&self, src: &L, tgt: &L) -> bool {
        is_reachable(self, src, tgt)
    }
}
