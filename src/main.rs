pub mod args;
pub mod error_reporting;
pub mod graph;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod reachability;
pub mod reduction;
pub mod syntax;
pub mod util;


use std::io::{IsTerminal, Write};
use std::process::exit;

use tracing::{debug, info, trace};

use crate::{
    args::{parse_args, Args},
    error_reporting::{report_error, IErr},
    graph::Graph,
    pretty::Digraph,
    syntax::Label,
    util::pretty::{pretty, pretty_def, PrettyOpts},
};

fn main() {
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            eprint!("{e}");
            exit(e.exit_code())
        }
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_max_level(args.log_level())
        .init();

    let src_path = args.src_path.to_string_lossy();
    let src = match std::fs::read_to_string(&args.src_path) {
        Ok(src) => src,
        Err(e) => {
            report_error(&src_path, "", IErr::Input(e));
            exit(1)
        }
    };
    if let Err(e) = run(&args, &src, &mut std::io::stdout().lock()) {
        report_error(&src_path, &src, e);
        exit(1)
    }
}

pub fn run(args: &Args, src: &str, out: &mut impl Write) -> Result<(), IErr> {
    let opts = PrettyOpts {
        indent_by: args.indent,
    };
    let simplified = simplify(&args.src_path.to_string_lossy(), src, &opts)?;
    writeln!(out, "{simplified}")
        .and_then(|()| out.flush())
        .map_err(IErr::Output)
}

/// Reads a graph from `src`, removes its transitively-inferrible edges and
/// renders the result in the input format.
pub fn simplify(src_path: &str, src: &str, opts: &PrettyOpts) -> Result<String, IErr> {
    let (name, graph) = read_graph(src)?;
    info!("Read the graph from {src_path}");

    let simplified = graph.reduced();
    info!("Simplified the graph");
    debug!(
        "kept {} of {} edges between {} nodes",
        simplified.edge_count(),
        graph.edge_count(),
        graph.node_count()
    );

    Ok(pretty(opts, Digraph::new(&name, &simplified)))
}

pub fn read_graph(src: &str) -> Result<(Label, Graph<Label>), IErr> {
    let toks = lexer::lex(src).map_err(IErr::Lexer)?;
    for (i, t) in toks.toks.iter().enumerate() {
        trace!("token {i}:\t{:?}", t.val);
    }

    let decl = parser::parse(&toks).map_err(IErr::Parser)?;
    for e in &decl.edges {
        trace!("edge {}", pretty_def::<()>(e));
    }

    let graph = decl.to_graph().map_err(IErr::Graph)?;
    Ok((decl.name.val, graph))
}
