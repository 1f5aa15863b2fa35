//! MPEG-2 Video Variable Length Coding
//!
//! This crate turns quantized 8x8 DCT blocks and motion vector differentials
//! into the variable length codes of ISO/IEC 13818-2.
//!
//! # Layer Responsibilities
//!
//! This crate handles **entropy coding** of single blocks and single motion
//! vector components only:
//! - DC prediction and DC differential coding of intra blocks
//! - Run/level coding along the zig-zag or alternate scan
//! - End of block punctuation for both coefficient tables
//! - Folding and splitting of motion vector differentials
//!
//! Transform, quantization, motion estimation, rate control and all headers
//! are handled by outer layers.
//!
//! # Example
//!
//! ```
//! use mpeg2_vlc::{encode_intra_block, CodingContext, ComponentClass, EncoderOptions, VlcWriter};
//!
//! let mut ctx = CodingContext::new(&EncoderOptions::default());
//! let mut writer = VlcWriter::new(Vec::new());
//!
//! let mut block = [0i16; 64];
//! block[0] = 3;
//! encode_intra_block(&mut ctx, &block, ComponentClass::Luma, &mut writer)?;
//!
//! // '01' size 2, '11' differential 3, '10' end of block, padding
//! assert_eq!(writer.finish()?, vec![0b0111_1000]);
//! # Ok::<(), mpeg2_vlc::VlcError>(())
//! ```

#![warn(clippy::redundant_else)]

pub mod block;
pub mod commands;
mod context;
mod error;
pub mod motion;
pub mod scan;
mod sink;
pub mod vlc;

pub use block::{encode_intra_block, encode_non_intra_block, Block, RunLevel};
pub use context::{CodingContext, ComponentClass, EncoderOptions};
pub use error::{Result, VlcError};
pub use motion::{encode_motion_vector, MotionComponents, MotionRange};
pub use scan::ScanOrder;
pub use sink::{Emitted, SymbolRecorder, VlcSink};
pub use vlc::VlcWriter;
