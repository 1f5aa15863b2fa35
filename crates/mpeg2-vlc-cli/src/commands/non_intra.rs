use std::path::PathBuf;

use clap::Args;
use mpeg2_vlc::commands::{BlockCoding, BlockFileOptions};
use mpeg2_vlc::EncoderOptions;

use crate::CliResult;

/// Encodes raw coefficient blocks as non-intra blocks
#[derive(Args, Debug)]
pub struct NonIntraArgs {
    /// Raw little-endian i16 coefficients, 64 per block in natural order
    #[arg(short = 'i', long = "in", value_name = "block file", required = true)]
    pub blocks: PathBuf,

    /// Coded blocks will be stored in that file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output: PathBuf,
}

impl NonIntraArgs {
    pub fn run(self, options: EncoderOptions) -> CliResult<()> {
        let opts = BlockFileOptions {
            coding: BlockCoding::NonIntra,
            encoder: options,
        };
        let stats = mpeg2_vlc::commands::encode_blocks(&self.blocks, &self.output, &opts)?;

        log::info!("{} non-intra blocks, {} bits", stats.blocks, stats.bits);
        Ok(())
    }
}
