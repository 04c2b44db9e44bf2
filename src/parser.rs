use crate::lexer::Token;
use crate::syntax::*;
use crate::util::peg_logos::SpannedToks;
use crate::util::span::Spanned;

use peg::error::ParseError;

pub type Toks<'a> = SpannedToks<'a, Token<'a>>;

pub fn parse(toks: &Toks) -> Result<GraphDecl, ParseError<usize>> {
    dot_parser::graph(toks, toks)
}

#[cfg_attr(rustfmt, rustfmt_skip)]
peg::parser! {
    pub grammar dot_parser<'a>(toks: &'a Toks<'a>) for Toks<'a> {
        use Token::*;

        rule spanned<T>(t: rule<T>) -> Spanned<T>
            = start:position!() x:t() end:position!() { Spanned::new(x, toks.byte_span(start, end)) }

        rule tok(t: Token<'a>) -> () = quiet!{[t2 if t == t2] { () }} / expected!(t.to_str())

        rule nl() = tok(NewLine)

        // Labels

        pub rule label() -> Label
            = quiet!{[Ident(x)] { x.to_owned() }}
            / quiet!{[Digraph] { "Digraph".to_owned() }}
            / expected!("node label")
        pub rule slabel() -> SLabel = spanned(<label()>)

        // Edge lines

        pub rule edge() -> EdgeDecl
            = src:slabel() tok(Arrow) tgt:slabel() tok(Semicolon)? { EdgeDecl { src, tgt } }
        pub rule sedge() -> SEdgeDecl = spanned(<edge()>)

        // Whole graphs

        rule header() -> SLabel = tok(Digraph) name:slabel() tok(BraceL) { name }

        pub rule graph() -> GraphDecl
            = nl()* name:header() nl()+ edges:(e:sedge() nl()+ { e })* tok(BraceR) nl()*
              { GraphDecl { name, edges } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn parse_str(src: &str) -> Result<GraphDecl, ParseError<usize>> {
        parse(&lex(src).unwrap())
    }

    fn edges(g: &GraphDecl) -> Vec<(&str, &str)> {
        g.edges
            .iter()
            .map(|e| (e.src.as_str(), e.tgt.as_str()))
            .collect()
    }

    #[test]
    fn simple() {
        let g = parse_str("Digraph G {\n1 -> 2\n2 -> 3\n}\n").unwrap();
        assert_eq!(g.name.val, "G");
        assert_eq!(edges(&g), [("1", "2"), ("2", "3")]);
    }

    #[test]
    fn empty() {
        let g = parse_str("Digraph G {\n}").unwrap();
        assert!(g.edges.is_empty());
    }

    #[test]
    fn lenient_layout() {
        let src = "\nDigraph deps {\n\n  a -> b;\n\tb -> Digraph\n\n}\n\n";
        let g = parse_str(src).unwrap();
        assert_eq!(g.name.val, "deps");
        assert_eq!(edges(&g), [("a", "b"), ("b", "Digraph")]);
    }

    #[test]
    fn edge_spans() {
        let src = "Digraph G {\n10 -> 20\n}";
        let g = parse_str(src).unwrap();
        let e = &g.edges[0];
        assert_eq!(&src[e.span.clone()], "10 -> 20");
        assert_eq!(&src[e.tgt.span.clone()], "20");
    }

    #[test]
    fn rejects_malformed() {
        for src in [
            "",
            "Digraph G {\n1 -> 2\n",
            "1 -> 2\n}",
            "Digraph {\n}",
            "Digraph G {\n1 -> \n}",
            "Digraph G {\n1 2\n}",
            "Digraph G {\n1 -> 2 -> 3\n}",
            "Digraph G { 1 -> 2 }",
            "Digraph G {\n}\n1 -> 2\n",
        ] {
            assert!(parse_str(src).is_err(), "accepted {src:?}");
        }
    }

    #[test]
    fn error_location() {
        let src = "Digraph G {\n1 -> 2\n3 4\n}";
        let e = parse_str(src).unwrap_err();
        assert_eq!(e.location, src.find('4').unwrap());
        assert!(e.expected.tokens().any(|t| t == "->"));
    }
}
