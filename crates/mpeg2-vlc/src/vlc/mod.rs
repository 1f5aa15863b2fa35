//! Standard MPEG-2 code tables and a bit writer that applies them.

pub mod tables;

use std::io;

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use self::tables::{
    ac_code, VlcCode, DC_CHROMA_SIZE, DC_LUMA_SIZE, ESCAPE, MAX_LEVEL, MAX_RUN, MOTION_CODE,
};
use crate::error::{Result, VlcError};
use crate::sink::VlcSink;

/// Largest DC differential magnitude (11 bit `dct_dc_differential`).
const MAX_DC_DIFF: u32 = 2047;

/// [`VlcSink`] that writes the codes of ISO/IEC 13818-2 Annex B to a byte sink.
///
/// Bits are packed MSB first. Call [`finish`](Self::finish) to pad the last
/// byte and get the underlying writer back.
pub struct VlcWriter<W: io::Write> {
    writer: BitWriter<W, BigEndian>,
    bit_count: u64,
}

impl<W: io::Write> VlcWriter<W> {
    pub fn new(writer: W) -> Self {
        VlcWriter {
            writer: BitWriter::endian(writer, BigEndian),
            bit_count: 0,
        }
    }

    /// Number of bits emitted so far, padding included.
    #[inline]
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    #[inline]
    pub fn is_byte_aligned(&self) -> bool {
        self.writer.byte_aligned()
    }

    /// Pad with zero bits up to the next byte boundary.
    pub fn byte_align(&mut self) -> Result<()> {
        let padding = (8 - self.bit_count % 8) % 8;
        self.writer.byte_align()?;
        self.bit_count += padding;
        Ok(())
    }

    /// Pad the last byte and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.byte_align()?;
        Ok(self.writer.into_writer())
    }

    #[inline]
    fn put(&mut self, code: VlcCode) -> Result<()> {
        self.emit_bits(u32::from(code.code), u32::from(code.len))
    }

    #[inline]
    fn put_sign(&mut self, negative: bool) -> Result<()> {
        self.emit_bits(u32::from(negative), 1)
    }

    /// `dct_dc_size` code followed by `dct_dc_differential`.
    fn put_dc(&mut self, table: &[VlcCode; 12], diff: i32) -> Result<()> {
        let magnitude = diff.unsigned_abs();
        if magnitude > MAX_DC_DIFF {
            return Err(VlcError::DcOutOfRange { diff });
        }

        let size = 32 - magnitude.leading_zeros();
        self.put(table[size as usize])?;

        if size > 0 {
            // negative values are sent as diff + 2^size - 1, i.e. with a leading zero
            let bits = if diff >= 0 {
                magnitude
            } else {
                ((1u32 << size) - 1) - magnitude
            };
            self.emit_bits(bits, size)?;
        }

        log::trace!("DC: diff={}, size={}", diff, size);
        Ok(())
    }
}

impl<W: io::Write> VlcSink for VlcWriter<W> {
    fn emit_bits(&mut self, value: u32, length: u32) -> Result<()> {
        debug_assert!(length <= 32);
        if length == 0 {
            return Ok(());
        }

        let value = if length < 32 {
            value & ((1u32 << length) - 1)
        } else {
            value
        };
        self.writer.write(length, value)?;
        self.bit_count += u64::from(length);
        Ok(())
    }

    fn emit_dc_luma(&mut self, diff: i32) -> Result<()> {
        self.put_dc(&DC_LUMA_SIZE, diff)
    }

    fn emit_dc_chroma(&mut self, diff: i32) -> Result<()> {
        self.put_dc(&DC_CHROMA_SIZE, diff)
    }

    fn emit_ac(&mut self, run: u8, level: i16, use_intra_table: bool) -> Result<()> {
        let magnitude = level.unsigned_abs();
        if magnitude == 0 || magnitude > MAX_LEVEL || run > MAX_RUN {
            return Err(VlcError::LevelOutOfRange { run, level });
        }

        match ac_code(run, magnitude, use_intra_table) {
            Some(code) => {
                self.put(code)?;
                self.put_sign(level < 0)
            }
            None => {
                log::trace!("escape: run={}, level={}", run, level);
                self.put(ESCAPE)?;
                self.emit_bits(u32::from(run), 6)?;
                // 12 bit two's complement
                self.emit_bits(level as u32, 12)
            }
        }
    }

    fn emit_ac_first(&mut self, run: u8, level: i16) -> Result<()> {
        if run == 0 && (level == 1 || level == -1) {
            // '1s' instead of '11s', the '10' slot is taken by EOB otherwise
            self.emit_bits(0b10 | u32::from(level < 0), 2)
        } else {
            self.emit_ac(run, level, false)
        }
    }

    fn emit_motion_code(&mut self, code: i32) -> Result<()> {
        let magnitude = code.unsigned_abs() as usize;
        let vlc = MOTION_CODE
            .get(magnitude)
            .copied()
            .ok_or(VlcError::MotionCodeOutOfRange { code })?;

        self.put(vlc)?;
        if code != 0 {
            self.put_sign(code < 0)?;
        }
        Ok(())
    }
}
