use clap::Parser;

use crate::cli::Cli;
use opacify::args::Args;
use opacify::run;

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(Args { image: cli.image })
}
