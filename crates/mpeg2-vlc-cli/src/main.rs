use clap::Parser;
use mpeg2_vlc::VlcError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, VlcError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.encoder_options();

    match args.command {
        Commands::Intra(intra) => intra.run(options),
        Commands::NonIntra(non_intra) => non_intra.run(options),
        Commands::Motion(motion) => motion.run(options),
    }
}
