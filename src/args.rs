use std::{ffi::OsString, path::PathBuf};

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser};
use thiserror::Error;
use tracing::Level;

const FORMAT_HELP: &str = "\
GRAPH_FILE describes a directed graph. The first line is always

    Digraph G {

and the last line is always

    }

Each line in between describes an edge. For example,

    1 -> 2

is a directed edge from the node labelled '1' to the node labelled '2'.
The simplified graph is printed to stdout in the same format.";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = FORMAT_HELP)]
struct Cli {
    /// Path to the graph file to simplify.
    #[arg(value_name = "GRAPH_FILE")]
    graph_files: Vec<PathBuf>,

    /// Print debug information; repeat to also list every removed edge.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Only print errors to stderr.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Indent the edge lines of the output by this many spaces.
    #[arg(long = "indent", value_name = "N", default_value_t = 0)]
    indent: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub src_path: PathBuf,
    pub verbose: u8,
    pub quiet: bool,
    pub indent: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// `--help` or `--version` was requested.
    #[error("{0}")]
    Help(String),
    /// Not exactly one graph file was given.
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Malformed(String),
}

impl ArgsError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ArgsError::Help(_) => 0,
            ArgsError::Malformed(_) => 1,
            ArgsError::Usage(_) => 2,
        }
    }
}

pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

pub fn parse_args<I, T>(itr: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(itr).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            ArgsError::Help(e.render().to_string())
        }
        _ => ArgsError::Malformed(format!("{}\n{}", e.render(), usage())),
    })?;
    let [src_path]: [PathBuf; 1] = cli
        .graph_files
        .try_into()
        .map_err(|_| ArgsError::Usage(usage()))?;
    Ok(Args {
        src_path,
        verbose: cli.verbose,
        quiet: cli.quiet,
        indent: cli.indent,
    })
}

impl Args {
    pub fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::WARN,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }
}
