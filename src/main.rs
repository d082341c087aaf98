//! # Sparsify
//!
//! Sparsify converts a JSONL dataset into the two-file corpus format used by
//! sparse multi-label classification toolkits: a text file with one line per
//! instance, and a label file holding `index:weight` pairs under a
//! `num_instances num_classes` header.
//!
//! ```sh
//! sparsify 0.1.0
//! sparse classification corpus conversion tool.
//!
//! USAGE:
//!     sparsify <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     convert    Convert a JSONL dataset into text and label files
//!     help       Prints this message or the help of the given subcommand(s)
//!     stat       Print instance and class counts of a JSONL dataset
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use sparsify::error::Error;
use sparsify::pipeline::{scan, Convert, LabelOrigin, Pipeline};

fn main() {
    env_logger::init();

    let opt = cli::Sparsify::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(opt: cli::Sparsify) -> Result<(), Error> {
    match opt {
        cli::Sparsify::Convert(c) => {
            let p = Convert::new(
                c.src,
                c.dst,
                c.prefix,
                c.title_only,
                LabelOrigin::from_flag(c.one_based),
            );
            p.run()?;
        }

        cli::Sparsify::Stat(s) => {
            let summary = scan(&s.src, LabelOrigin::from_flag(s.one_based))?;
            println!("{} {}", summary.instances, summary.classes);
        }
    };
    Ok(())
}
