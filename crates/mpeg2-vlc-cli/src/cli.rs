use clap::{Parser, Subcommand};
use mpeg2_vlc::{EncoderOptions, ScanOrder};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Use the alternate scan instead of zig-zag
    #[arg(long, global = true)]
    pub alternate_scan: bool,

    /// Code intra blocks with table B-15 (intra_vlc_format = 1)
    #[arg(long, global = true)]
    pub intra_vlc_format: bool,

    /// Do not warn about motion vectors outside of their f_code range
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions::default()
            .with_scan(ScanOrder::from_alternate_scan(self.alternate_scan))
            .with_intra_vlc_format(self.intra_vlc_format)
            .with_quiet(self.quiet)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Intra(intra::IntraArgs),
    NonIntra(non_intra::NonIntraArgs),
    Motion(motion::MotionArgs),
}
