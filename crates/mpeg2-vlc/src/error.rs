//! Error types for variable length coding.

use std::fmt;
use thiserror::Error;

/// Result type alias for VLC operations.
pub type Result<T> = std::result::Result<T, VlcError>;

/// Errors that can occur while emitting variable length codes.
///
/// The block and motion vector encoders never raise an error of their own,
/// they only pass on what the [`VlcSink`](crate::VlcSink) reports.
#[derive(Error)]
pub enum VlcError {
    /// DC differential does not fit into the 11 bit size categories.
    #[error("DC differential {diff} out of range (maximum magnitude is 2047)")]
    DcOutOfRange { diff: i32 },

    /// Run/level pair that no AC code and no escape code can represent.
    #[error("AC coefficient out of range: run {run}, level {level}")]
    LevelOutOfRange { run: u8, level: i16 },

    /// Motion code outside of the -16..=16 range of Table B-10.
    #[error("motion code {code} out of range (must be -16..=16)")]
    MotionCodeOutOfRange { code: i32 },

    /// f_code outside of the 1..=9 range.
    #[error("invalid f_code: {f_code} (must be 1-9)")]
    InvalidFCode { f_code: u8 },

    /// Coefficient input that does not end on a block boundary.
    #[error("block data of {len} bytes is not a multiple of 128 bytes")]
    InvalidBlockData { len: usize },

    /// Motion vector input that contains something other than integers.
    #[error("invalid motion vector value: {value:?}")]
    InvalidMotionVector { value: String },

    /// Failure to read the input file.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// I/O error during bit operations.
    #[error("bit I/O error: {0}")]
    BitIo(#[from] std::io::Error),
}

impl fmt::Debug for VlcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display for Debug so unwrap() shows the readable message
        write!(f, "{self}")
    }
}
