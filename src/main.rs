//! `nw-naive`: the baseline entry point of the alignment benchmark.
//!
//! Synthesizes `A = a^N` and `B = b^N`, aligns them under unit costs and
//! prints the distance (which is `N`).
//!
//! Run with:
//! `cargo run --release -- 2000`

use std::process::ExitCode;

use clap::Parser;
use wavefront_nw::{models::UnitCost, AlignmentEngineBuilder, Sequence, Traversal};

#[derive(Parser, Debug)]
#[command(name = "nw-naive")]
#[command(about = "Edit distance between two synthesized sequences, wavefront baseline", long_about = None)]
#[command(version)]
struct Cli {
    /// Length N of both synthesized sequences (a^N and b^N)
    #[arg(value_name = "N", default_value_t = 2000)]
    size: usize,

    /// Align these two sequences instead of the synthesized ones
    #[arg(long, num_args = 2, value_names = ["A", "B"], conflicts_with = "size")]
    sequences: Option<Vec<String>>,

    /// Cell traversal order
    #[arg(short, long, value_name = "ORDER", default_value_t = Traversal::Wavefront)]
    traversal: Traversal,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn inputs(&self) -> (Sequence, Sequence) {
        match self.sequences.as_deref() {
            Some([a, b]) => (Sequence::from(a.as_str()), Sequence::from(b.as_str())),
            _ => (
                Sequence::repeat(b'a', self.size),
                Sequence::repeat(b'b', self.size),
            ),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let (a, b) = cli.inputs();
    log::info!(
        "aligning sequences of length {} and {} ({} traversal)",
        a.len(),
        b.len(),
        cli.traversal
    );

    let engine = AlignmentEngineBuilder::new(UnitCost)
        .traversal(cli.traversal)
        .build();
    match engine.distance(&a, &b) {
        Ok(distance) => {
            println!("{distance}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
