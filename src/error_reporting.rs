use std::ops::Range;

use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use peg::error::ParseError;
use thiserror::Error;

use crate::{
    graph::GraphError, lexer::LexerError, syntax::Label as NodeLabel, util::span::Spanned,
};

#[derive(Debug, Error)]
pub enum IErr {
    #[error("could not read the graph: {0}")]
    Input(std::io::Error),
    #[error("could not write the simplified graph: {0}")]
    Output(std::io::Error),
    #[error("lexing failed: {}", .0.val)]
    Lexer(LexerError),
    #[error("parsing failed: expected {}", .0.expected)]
    Parser(ParseError<usize>),
    #[error("invalid graph: {}", .0.val)]
    Graph(Spanned<GraphError<NodeLabel>>),
}

pub struct CSource {
    pub path: String,
    pub data: String,
}

pub struct CLabel {
    pub span: Range<usize>,
    pub msg: String,
}

pub fn label(span: Range<usize>, msg: impl AsRef<str>) -> CLabel {
    CLabel {
        span,
        msg: msg.as_ref().to_string(),
    }
}

fn report(
    src: &CSource,
    loc: usize,
    msg: impl AsRef<str>,
    labels: impl IntoIterator<Item = CLabel>,
) {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    let res = Report::build(ReportKind::Error, (&src.path, loc..loc))
        .with_config(ariadne::Config::default().with_index_type(IndexType::Byte))
        .with_message(msg.as_ref())
        .with_labels(labels.into_iter().map(|l| {
            Label::new((&src.path, l.span))
                .with_message(l.msg)
                .with_color(a)
        }))
        .finish()
        .eprint((&src.path, Source::from(&src.data)));
    if let Err(e) = res {
        eprintln!("{}: {}", src.path, msg.as_ref());
        eprintln!("(failed to render diagnostic: {e})");
    }
}

/// Prints `e` to stderr, pointing into `src` where the error has a location.
pub fn report_error(src_path: &str, src: &str, e: IErr) {
    let src = CSource {
        path: src_path.to_string(),
        data: src.to_string(),
    };

    match e {
        IErr::Input(e) => {
            eprintln!("Error: could not read {}: {e}", src.path);
        }
        e @ IErr::Output(_) => {
            eprintln!("Error: {e}");
        }
        IErr::Lexer(e) => {
            report(
                &src,
                e.span.start,
                "Lexing failed",
                [label(e.span, "Unexpected character")],
            );
        }
        IErr::Parser(e) => {
            report(
                &src,
                e.location,
                "Parsing failed",
                [label(
                    e.location..e.location,
                    format!("Expected {}", e.expected),
                )],
            );
        }
        IErr::Graph(e) => match e.val {
            GraphError::UnknownNode(l) => {
                report(
                    &src,
                    e.span.start,
                    "Invalid graph",
                    [label(e.span, format!("Edge refers to the unknown node `{l}`"))],
                );
            }
        },
    }
}
