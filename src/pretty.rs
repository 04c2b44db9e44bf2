use std::fmt::Debug;
use std::hash::Hash;

use crate::{
    graph::Graph,
    syntax::EdgeDecl,
    util::{
        pretty::{Pretty, PrettyEnv},
        span::Spanned,
    },
};

type UserState = ();

/// A graph together with the name it is printed under.
pub struct Digraph<'a, L: Eq + Hash> {
    pub name: &'a str,
    pub graph: &'a Graph<L>,
}

impl<'a, L: Eq + Hash> Digraph<'a, L> {
    pub fn new(name: &'a str, graph: &'a Graph<L>) -> Self {
        Self { name, graph }
    }
}

impl<T: Pretty<UserState>> Pretty<UserState> for Spanned<T> {
    fn pp(&self, p: &mut PrettyEnv<UserState>) {
        self.val.pp(p)
    }
}

impl Pretty<UserState> for EdgeDecl {
    fn pp(&self, p: &mut PrettyEnv<UserState>) {
        p.pp(&self.src);
        p.pp(" -> ");
        p.pp(&self.tgt);
    }
}

impl<'a, L> Pretty<UserState> for Digraph<'a, L>
where
    L: Pretty<UserState> + Clone + Eq + Hash + Debug,
{
    fn pp(&self, p: &mut PrettyEnv<UserState>) {
        p.pp("Digraph ");
        p.pp(self.name);
        p.pp(" {");
        p.block(|p| {
            for (src, tgt) in self.graph.edges() {
                p.nl();
                p.pp(src);
                p.pp(" -> ");
                p.pp(tgt);
            }
        });
        p.nl();
        p.pp("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::pretty::{pretty, pretty_def, PrettyOpts};

    fn strings(edges: &[(&str, &str)]) -> Graph<String> {
        Graph::from_edges(edges.iter().map(|(a, b)| (a.to_string(), b.to_string())))
    }

    #[test]
    fn graph() {
        let g = strings(&[("1", "2"), ("2", "3"), ("1", "3")]);
        assert_eq!(
            pretty_def(Digraph::new("G", &g)),
            "Digraph G {\n1 -> 2\n1 -> 3\n2 -> 3\n}"
        );
    }

    #[test]
    fn empty_graph() {
        let g = Graph::<String>::empty();
        assert_eq!(pretty_def(Digraph::new("G", &g)), "Digraph G {\n}");
    }

    #[test]
    fn indented() {
        let g = strings(&[("a", "b")]);
        let opts = PrettyOpts { indent_by: 4 };
        assert_eq!(
            pretty(&opts, Digraph::new("deps", &g)),
            "Digraph deps {\n    a -> b\n}"
        );
    }

    #[test]
    fn edge_decl() {
        let e = EdgeDecl {
            src: Spanned::new("x".to_string(), 0..1),
            tgt: Spanned::new("y".to_string(), 5..6),
        };
        assert_eq!(pretty_def::<UserState>(&e), "x -> y");
    }
}
