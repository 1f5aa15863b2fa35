//! File level drivers around the block and motion vector encoders.
//!
//! Input blocks are raw little-endian `i16` coefficients, 64 per block in
//! natural order. Input motion vectors are whitespace separated integers.
//! Output is the bare concatenation of the codes, zero padded to a whole byte.
//!
//! The whole output is coded in memory first; the destination is only
//! written once the input turned out to be valid.
//!
//! A motion vector still out of range after folding is counted and coded
//! unclamped as long as its motion code stays within -16..=16. Beyond that no
//! code exists and the file fails with [`VlcError::MotionCodeOutOfRange`].

use byteorder::{ByteOrder, LittleEndian};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::block::{encode_intra_block, encode_non_intra_block, Block};
use crate::context::{CodingContext, ComponentClass, EncoderOptions};
use crate::error::{Result, VlcError};
use crate::motion::{encode_motion_vector, MotionRange};
use crate::vlc::VlcWriter;

/// Size of one block in the raw input.
pub const BLOCK_BYTES: usize = 64 * 2;

/// Chroma sampling, decides the block layout of a macroblock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChromaFormat {
    #[default]
    Yuv420,
    Yuv422,
    Yuv444,
}

impl ChromaFormat {
    pub fn blocks_per_macroblock(self) -> usize {
        match self {
            ChromaFormat::Yuv420 => 6,
            ChromaFormat::Yuv422 => 8,
            ChromaFormat::Yuv444 => 12,
        }
    }

    /// Component class of the `block`-th block inside a macroblock.
    ///
    /// Four luma blocks come first, then Cb and Cr alternate.
    pub fn component_class(self, block: usize) -> ComponentClass {
        let block = block % self.blocks_per_macroblock();
        if block < 4 {
            ComponentClass::Luma
        } else if block % 2 == 0 {
            ComponentClass::Cb
        } else {
            ComponentClass::Cr
        }
    }
}

/// How every block of an input is coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCoding {
    Intra(ChromaFormat),
    NonIntra,
}

impl Default for BlockCoding {
    fn default() -> Self {
        Self::Intra(ChromaFormat::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlockFileOptions {
    pub coding: BlockCoding,
    pub encoder: EncoderOptions,
}

/// What a block encoding run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFileStats {
    pub blocks: usize,
    /// Bits of all codes, without the final padding.
    pub bits: u64,
}

/// What a motion vector encoding run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionFileStats {
    pub vectors: usize,
    /// Differentials still out of range after folding but coded anyway.
    /// Only a motion code of exactly 16 can get here; larger ones fail the file.
    pub out_of_range: usize,
    /// Bits of all codes, without the final padding.
    pub bits: u64,
}

/// Encode all blocks of a raw coefficient file into `destination`.
pub fn encode_blocks(
    source: &Path,
    destination: &Path,
    opts: &BlockFileOptions,
) -> Result<BlockFileStats> {
    let data = fs::read(source).map_err(|source| VlcError::ReadError { source })?;

    let mut coded = Vec::new();
    let stats = encode_block_data(&data, &mut coded, opts)?;
    fs::write(destination, coded).map_err(|source| VlcError::WriteError { source })?;

    log::debug!(
        "encoded {} blocks from {} into {} bits",
        stats.blocks,
        source.display(),
        stats.bits
    );
    Ok(stats)
}

/// Encode raw coefficient bytes into `out`.
pub fn encode_block_data<W: Write>(
    data: &[u8],
    out: W,
    opts: &BlockFileOptions,
) -> Result<BlockFileStats> {
    if data.len() % BLOCK_BYTES != 0 {
        return Err(VlcError::InvalidBlockData { len: data.len() });
    }

    let mut ctx = CodingContext::new(&opts.encoder);
    let mut writer = VlcWriter::new(out);
    let mut block: Block = [0; 64];
    let mut blocks = 0;

    for (index, chunk) in data.chunks_exact(BLOCK_BYTES).enumerate() {
        LittleEndian::read_i16_into(chunk, &mut block);
        match opts.coding {
            BlockCoding::Intra(chroma_format) => {
                let component = chroma_format.component_class(index);
                encode_intra_block(&mut ctx, &block, component, &mut writer)?;
            }
            BlockCoding::NonIntra => encode_non_intra_block(&ctx, &block, &mut writer)?,
        }
        blocks += 1;
    }

    let bits = writer.bit_count();
    writer.finish()?;

    Ok(BlockFileStats { blocks, bits })
}

/// Encode all motion vector differentials of a text file into `destination`.
pub fn encode_motion_vectors(
    source: &Path,
    destination: &Path,
    f_code: u8,
    opts: &EncoderOptions,
) -> Result<MotionFileStats> {
    let text = fs::read_to_string(source).map_err(|source| VlcError::ReadError { source })?;

    let mut coded = Vec::new();
    let stats = encode_motion_text(&text, &mut coded, f_code, opts)?;
    fs::write(destination, coded).map_err(|source| VlcError::WriteError { source })?;

    log::debug!(
        "encoded {} motion vectors from {} into {} bits, {} out of range",
        stats.vectors,
        source.display(),
        stats.bits,
        stats.out_of_range
    );
    Ok(stats)
}

/// Encode whitespace separated motion vector differentials into `out`.
pub fn encode_motion_text<W: Write>(
    text: &str,
    out: W,
    f_code: u8,
    opts: &EncoderOptions,
) -> Result<MotionFileStats> {
    if !(1..=9).contains(&f_code) {
        return Err(VlcError::InvalidFCode { f_code });
    }

    let values = text
        .split_whitespace()
        .map(|token| {
            token.parse::<i32>().map_err(|_| VlcError::InvalidMotionVector {
                value: token.to_string(),
            })
        })
        .collect::<Result<Vec<i32>>>()?;

    let ctx = CodingContext::new(opts);
    let range = MotionRange::new(f_code);
    let mut writer = VlcWriter::new(out);
    let mut out_of_range = 0;

    for &dmv in &values {
        if !range.contains(range.fold(dmv)) {
            out_of_range += 1;
        }
        encode_motion_vector(&ctx, dmv, f_code, &mut writer)?;
    }

    let bits = writer.bit_count();
    writer.finish()?;

    Ok(MotionFileStats {
        vectors: values.len(),
        out_of_range,
        bits,
    })
}
