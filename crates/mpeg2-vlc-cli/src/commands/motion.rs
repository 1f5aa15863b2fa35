use std::path::PathBuf;

use clap::Args;
use mpeg2_vlc::EncoderOptions;

use crate::CliResult;

/// Encodes motion vector differentials
#[derive(Args, Debug)]
pub struct MotionArgs {
    /// Text file with whitespace separated differentials
    #[arg(short = 'i', long = "in", value_name = "vector file", required = true)]
    pub vectors: PathBuf,

    /// Coded vectors will be stored in that file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output: PathBuf,

    /// Range selector, 1 to 9
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=9)
    )]
    pub f_code: u8,
}

impl MotionArgs {
    pub fn run(self, options: EncoderOptions) -> CliResult<()> {
        let stats = mpeg2_vlc::commands::encode_motion_vectors(
            &self.vectors,
            &self.output,
            self.f_code,
            &options,
        )?;

        if stats.out_of_range > 0 {
            log::warn!(
                "{} of {} motion vectors were out of range for f_code {}",
                stats.out_of_range,
                stats.vectors,
                self.f_code
            );
        }
        log::info!("{} motion vectors, {} bits", stats.vectors, stats.bits);
        Ok(())
    }
}
