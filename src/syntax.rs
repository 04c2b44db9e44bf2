use crate::graph::{Graph, GraphError};
use crate::util::span::Spanned;

pub type Label = String;
pub type SLabel = Spanned<Label>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeDecl {
    pub src: SLabel,
    pub tgt: SLabel,
}
pub type SEdgeDecl = Spanned<EdgeDecl>;

/// A parsed `Digraph <name> { ... }` document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphDecl {
    pub name: SLabel,
    pub edges: Vec<SEdgeDecl>,
}

impl GraphDecl {
    /// Builds the graph, declaring the endpoints of each edge line before the
    /// edge itself. Nodes keep the order of their first mention.
    pub fn to_graph(&self) -> Result<Graph<Label>, Spanned<GraphError<Label>>> {
        let mut g = Graph::empty();
        for e in &self.edges {
            g.add_node(e.src.val.clone());
            g.add_node(e.tgt.val.clone());
            g.add_edge(e.src.val.clone(), e.tgt.val.clone())
                .map_err(|err| Spanned::new(err, e.span.clone()))?;
        }
        Ok(g)
    }
}
