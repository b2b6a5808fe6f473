use clap::Parser;

#[derive(Parser)]
#[command(name = "cube-tiler")]
#[command(about = "Enumerate maximum-score pentomino tilings of the 60-tile cube graph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all logging but warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
