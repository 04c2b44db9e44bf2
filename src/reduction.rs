//! Transitive reduction.
//!
//! Every edge of the input is visited exactly once, in the order of
//! [`Graph::edges`] at the time the reduction starts. The edge is taken out of
//! the working graph and stays out if its endpoints are still connected;
//! otherwise it is put back where it was. On cyclic graphs the result depends
//! on this order, the reachability relation never does.
//!
//! Self-loops are always dropped, since every node reaches itself through the
//! empty path.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use crate::graph::Graph;


/// Consumes the working graph and returns it without redundant edges.
pub fn reduce<L: Clone + Eq + Hash + Debug>(mut g: Graph<L>) -> Graph<L> {
    let snapshot = g
        .edges()
        .map(|(src, tgt)| (src.clone(), tgt.clone()))
        .collect::<Vec<_>>();
    for (src, tgt) in snapshot {
        let slot = g.delete_edge(&src, &tgt);
        if g.is_reachable(&src, &tgt) {
            trace!("dropping redundant edge {:?} -> {:?}", src, tgt);
        } else {
            g.restore_edge(src, tgt, slot);
        }
    }
    g
}

impl<L: Clone + Eq + Hash + Debug> Graph<L> {
    pub fn reduce(&mut self) {
        *self = reduce(std::mem::take(self));
    }
    pub fn reduced(&self) -> Self {
        reduce(self.clone())
    }
}
