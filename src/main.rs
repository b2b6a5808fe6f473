use anyhow::Context;
use clap::Parser;
use tracing::info;

use cube_tiler::cli::Cli;
use cube_tiler::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_cli(cli.verbose, cli.quiet).context("failed to initialize logging")?;

    info!("building exact-cover matrix over every candidate placement");
    let (mut dlx, mut context) = cube_tiler::build_matrix().context("failed to build the exact-cover matrix")?;

    info!(rows = dlx.row_count(), "searching for maximum-score tilings");
    dlx.search(&mut context);

    info!(
        best_score = context.best_score(),
        solutions_found = context.solutions_found(),
        "search complete"
    );
    Ok(())
}
