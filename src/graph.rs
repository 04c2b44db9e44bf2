use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<L> {
    #[error("edge refers to unknown node `{0}`")]
    UnknownNode(L),
}

/// A directed graph stored as an adjacency map.
///
/// Nodes and the successors of each node keep their insertion order, which
/// determines both the order of [`Graph::edges`] and the serialized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<L: Eq + Hash> {
    edges: IndexMap<L, IndexSet<L>>,
}

impl<L: Clone + Eq + Hash + Debug> Default for Graph<L> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<L: Clone + Eq + Hash + Debug> Graph<L> {
    pub fn empty() -> Self {
        Graph {
            edges: IndexMap::new(),
        }
    }

    /// Builds a graph from edges, declaring each endpoint before its edge.
    pub fn from_edges(edges: impl IntoIterator<Item = (L, L)>) -> Self {
        let mut g = Graph::empty();
        for (src, tgt) in edges {
            g.add_node(src.clone());
            g.add_node(tgt.clone());
            g.edges.entry(src).or_default().insert(tgt);
        }
        g
    }

    /// Returns `true` if the node was not present before.
    pub fn add_node(&mut self, l: L) -> bool {
        if self.edges.contains_key(&l) {
            return false;
        }
        self.edges.insert(l, IndexSet::new());
        true
    }

    /// Inserts the edge `src -> tgt`. Both endpoints must already be nodes.
    ///
    /// Returns `Ok(false)` if the edge was already present.
    pub fn add_edge(&mut self, src: L, tgt: L) -> Result<bool, GraphError<L>> {
        if !self.edges.contains_key(&tgt) {
            return Err(GraphError::UnknownNode(tgt));
        }
        match self.edges.get_mut(&src) {
            Some(tgts) => Ok(tgts.insert(tgt)),
            None => Err(GraphError::UnknownNode(src)),
        }
    }

    /// Removes the edge `src -> tgt` and returns the position it had among the
    /// successors of `src`, or `None` if there was no such edge.
    pub fn delete_edge(&mut self, src: &L, tgt: &L) -> Option<usize> {
        let tgts = self.edges.get_mut(src)?;
        tgts.shift_remove_full(tgt).map(|(i, _)| i)
    }

    /// Undoes a [`Graph::delete_edge`], putting the edge back at `slot`.
    pub(crate) fn restore_edge(&mut self, src: L, tgt: L, slot: Option<usize>) {
        let tgts = self.edges.entry(src).or_default();
        match slot {
            Some(i) if i <= tgts.len() => {
                tgts.shift_insert(i, tgt);
            }
            _ => {
                tgts.insert(tgt);
            }
        }
    }

    pub fn successors<'a>(&'a self, src: &L) -> impl Iterator<Item = &'a L> + 'a {
        self.edges.get(src).into_iter().flatten()
    }

    pub fn has_node(&self, l: &L) -> bool {
        self.edges.contains_key(l)
    }

    pub fn has_edge(&self, src: &L, tgt: &L) -> bool {
        self.edges.get(src).is_some_and(|tgts| tgts.contains(tgt))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &L> + '_ {
        self.edges.keys()
    }

    /// All edges, grouped by source in node order.
    pub fn edges(&self) -> impl Iterator<Item = (&L, &L)> + '_ {
        self.edges
            .iter()
            .flat_map(|(src, tgts)| tgts.iter().map(move |tgt| (src, tgt)))
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|tgts| tgts.len()).sum()
    }

    /// Both graphs have the same nodes and every edge of `self` is in `other`.
    pub fn is_subgraph_of(&self, other: &Self) -> bool {
        if self.node_count() != other.node_count() {
            return false;
        }
        for (src, tgts) in &self.edges {
            let Some(tgts2) = other.edges.get(src) else {
                return false;
            };
            if !tgts.iter().all(|tgt| tgts2.contains(tgt)) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Graph<&'static str> {
        let mut g = Graph::empty();
        for l in ["a", "b", "c"] {
            g.add_node(l);
        }
        g
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = abc();
        assert!(!g.add_node("a"));
        assert!(g.add_node("d"));
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn add_edge_requires_known_nodes() {
        let mut g = abc();
        assert_eq!(g.add_edge("a", "x"), Err(GraphError::UnknownNode("x")));
        assert_eq!(g.add_edge("x", "a"), Err(GraphError::UnknownNode("x")));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.add_edge("a", "b"), Ok(true));
        assert_eq!(g.add_edge("a", "b"), Ok(false));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn delete_edge_reports_slot() {
        let mut g = abc();
        g.add_edge("a", "b").unwrap();
        g.add_edge("a", "c").unwrap();
        g.add_edge("a", "a").unwrap();
        assert_eq!(g.delete_edge(&"a", &"c"), Some(1));
        assert_eq!(g.delete_edge(&"a", &"c"), None);
        assert_eq!(g.delete_edge(&"x", &"c"), None);
        assert_eq!(g.successors(&"a").copied().collect::<Vec<_>>(), ["b", "a"]);

        g.restore_edge("a", "c", Some(1));
        assert_eq!(
            g.successors(&"a").copied().collect::<Vec<_>>(),
            ["b", "c", "a"]
        );
    }

    #[test]
    fn successors_of_unknown_node_is_empty() {
        let g = abc();
        assert_eq!(g.successors(&"z").count(), 0);
        assert!(!g.has_edge(&"z", &"a"));
    }

    #[test]
    fn edges_in_insertion_order() {
        let g = Graph::from_edges([(3, 1), (1, 2), (3, 2)]);
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), [3, 1, 2]);
        assert_eq!(
            g.edges().map(|(a, b)| (*a, *b)).collect::<Vec<_>>(),
            [(3, 1), (3, 2), (1, 2)]
        );
    }

    #[test]
    fn clone_is_independent() {
        let g = Graph::from_edges([(1, 2), (2, 3)]);
        let mut h = g.clone();
        h.delete_edge(&1, &2);
        h.add_node(4);
        assert!(g.has_edge(&1, &2));
        assert!(!g.has_node(&4));
        assert!(!h.has_edge(&1, &2));
    }

    #[test]
    fn subgraph() {
        let g = Graph::from_edges([(1, 2), (2, 3), (1, 3)]);
        let mut h = g.clone();
        h.delete_edge(&1, &3);
        assert!(h.is_subgraph_of(&g));
        assert!(!g.is_subgraph_of(&h));
        h.add_node(4);
        assert!(!h.is_subgraph_of(&g));
    }
}
