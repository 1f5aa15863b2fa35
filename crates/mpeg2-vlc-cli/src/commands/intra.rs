use std::path::PathBuf;

use clap::{Args, ValueEnum};
use mpeg2_vlc::commands::{BlockCoding, BlockFileOptions, ChromaFormat};
use mpeg2_vlc::EncoderOptions;

use crate::CliResult;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ChromaFormatArg {
    #[default]
    #[value(name = "420")]
    Yuv420,
    #[value(name = "422")]
    Yuv422,
    #[value(name = "444")]
    Yuv444,
}

impl From<ChromaFormatArg> for ChromaFormat {
    fn from(arg: ChromaFormatArg) -> Self {
        match arg {
            ChromaFormatArg::Yuv420 => ChromaFormat::Yuv420,
            ChromaFormatArg::Yuv422 => ChromaFormat::Yuv422,
            ChromaFormatArg::Yuv444 => ChromaFormat::Yuv444,
        }
    }
}

/// Encodes raw coefficient blocks as intra blocks
#[derive(Args, Debug)]
pub struct IntraArgs {
    /// Raw little-endian i16 coefficients, 64 per block in natural order
    #[arg(short = 'i', long = "in", value_name = "block file", required = true)]
    pub blocks: PathBuf,

    /// Coded blocks will be stored in that file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output: PathBuf,

    /// Block layout of a macroblock, decides luma and chroma blocks
    #[arg(long, value_enum, default_value_t = ChromaFormatArg::Yuv420)]
    pub chroma_format: ChromaFormatArg,
}

impl IntraArgs {
    pub fn run(self, options: EncoderOptions) -> CliResult<()> {
        let opts = BlockFileOptions {
            coding: BlockCoding::Intra(self.chroma_format.into()),
            encoder: options,
        };
        let stats = mpeg2_vlc::commands::encode_blocks(&self.blocks, &self.output, &opts)?;

        log::info!("{} intra blocks, {} bits", stats.blocks, stats.bits);
        Ok(())
    }
}
