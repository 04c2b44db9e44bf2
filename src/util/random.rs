use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::graph::Graph;

/// A random graph over the nodes `0..num_nodes`, each ordered pair (including
/// self-loops) being an edge with probability `density`.
pub fn rand_graph(seed: u64, num_nodes: usize, density: f64) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::empty();
    for l in 0..num_nodes {
        g.add_node(l);
    }
    for src in 0..num_nodes {
        for tgt in 0..num_nodes {
            if rng.gen_bool(density) {
                g.add_edge(src, tgt).unwrap();
            }
        }
    }
    g
}

/// Like [`rand_graph`], but only with edges from smaller to larger nodes.
pub fn rand_dag(seed: u64, num_nodes: usize, density: f64) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::empty();
    for l in 0..num_nodes {
        g.add_node(l);
    }
    for src in 0..num_nodes {
        for tgt in src + 1..num_nodes {
            if rng.gen_bool(density) {
                g.add_edge(src, tgt).unwrap();
            }
        }
    }
    g
}
