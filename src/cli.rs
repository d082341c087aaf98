//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "sparsify", about = "sparse classification corpus conversion tool.")]
/// Holds every command that is callable by the `sparsify` command.
pub enum Sparsify {
    #[structopt(about = "Convert a JSONL dataset into text and label files")]
    Convert(Convert),
    #[structopt(about = "Print instance and class counts of a JSONL dataset")]
    Stat(Stat),
}

#[derive(Debug, StructOpt)]
/// Convert command and parameters.
///
/// ```sh
/// sparsify-convert 0.1.0
/// Convert a JSONL dataset into text and label files
///
/// USAGE:
///     sparsify convert [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -h, --help                 Prints help information
///         --labels-are-1based    label indices start at 1: class count is the max index
///         --title-only           write only titles to the text file
///     -V, --version              Prints version information
///
/// OPTIONS:
///     -p, --prefix <prefix>      output filename prefix [default: trn]
///
/// ARGS:
///     <src>    source dataset (JSONL)
///     <dst>    destination directory, created if absent
/// ```
pub struct Convert {
    #[structopt(parse(from_os_str), help = "source dataset (JSONL)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination directory, created if absent")]
    pub dst: PathBuf,
    #[structopt(
        help = "output filename prefix",
        long = "prefix",
        default_value = "trn",
        short = "p"
    )]
    pub prefix: String,
    #[structopt(long = "title-only", help = "write only titles to the text file")]
    pub title_only: bool,
    #[structopt(
        long = "labels-are-1based",
        help = "label indices start at 1: class count is the max index"
    )]
    pub one_based: bool,
}

#[derive(Debug, StructOpt)]
/// Stat command and parameters.
pub struct Stat {
    #[structopt(parse(from_os_str), help = "source dataset (JSONL)")]
    pub src: PathBuf,
    #[structopt(
        long = "labels-are-1based",
        help = "label indices start at 1: class count is the max index"
    )]
    pub one_based: bool,
}
