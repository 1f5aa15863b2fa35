//! Output side of the encoders.
//!
//! The block and motion vector encoders decide *what* is coded and in which
//! order; a [`VlcSink`] decides how each symbol turns into bits. Calls arrive
//! in final bitstream order and must be appended in exactly that order.

use crate::error::Result;

/// Receiver of the symbols produced by the encoders.
pub trait VlcSink {
    /// Append the `length` low-order bits of `value`, most significant bit first.
    fn emit_bits(&mut self, value: u32, length: u32) -> Result<()>;

    /// DC differential of a luminance block.
    fn emit_dc_luma(&mut self, diff: i32) -> Result<()>;

    /// DC differential of a chrominance block.
    fn emit_dc_chroma(&mut self, diff: i32) -> Result<()>;

    /// Run/level pair, coded with table one (`use_intra_table`) or table zero.
    fn emit_ac(&mut self, run: u8, level: i16, use_intra_table: bool) -> Result<()>;

    /// First run/level pair of a non-intra block.
    fn emit_ac_first(&mut self, run: u8, level: i16) -> Result<()>;

    /// Coarse part of a motion vector component.
    fn emit_motion_code(&mut self, code: i32) -> Result<()>;

    /// Non-fatal diagnostic.
    fn report_warning(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}

impl<S: VlcSink + ?Sized> VlcSink for &mut S {
    fn emit_bits(&mut self, value: u32, length: u32) -> Result<()> {
        (**self).emit_bits(value, length)
    }

    fn emit_dc_luma(&mut self, diff: i32) -> Result<()> {
        (**self).emit_dc_luma(diff)
    }

    fn emit_dc_chroma(&mut self, diff: i32) -> Result<()> {
        (**self).emit_dc_chroma(diff)
    }

    fn emit_ac(&mut self, run: u8, level: i16, use_intra_table: bool) -> Result<()> {
        (**self).emit_ac(run, level, use_intra_table)
    }

    fn emit_ac_first(&mut self, run: u8, level: i16) -> Result<()> {
        (**self).emit_ac_first(run, level)
    }

    fn emit_motion_code(&mut self, code: i32) -> Result<()> {
        (**self).emit_motion_code(code)
    }

    fn report_warning(&mut self, message: &str) {
        (**self).report_warning(message)
    }
}

/// One symbol as handed to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted {
    Bits { value: u32, length: u32 },
    DcLuma(i32),
    DcChroma(i32),
    Ac {
        run: u8,
        level: i16,
        intra_table: bool,
    },
    AcFirst { run: u8, level: i16 },
    MotionCode(i32),
}

/// Sink that keeps every symbol and warning instead of producing bits.
///
/// Handy for tracing what the encoders decide and for checking symbol
/// sequences without going through the code tables.
#[derive(Debug, Clone, Default)]
pub struct SymbolRecorder {
    symbols: Vec<Emitted>,
    warnings: Vec<String>,
}

impl SymbolRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn symbols(&self) -> &[Emitted] {
        &self.symbols
    }

    #[inline]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.symbols.clear();
        self.warnings.clear();
    }

    pub fn into_symbols(self) -> Vec<Emitted> {
        self.symbols
    }
}

impl VlcSink for SymbolRecorder {
    fn emit_bits(&mut self, value: u32, length: u32) -> Result<()> {
        self.symbols.push(Emitted::Bits { value, length });
        Ok(())
    }

    fn emit_dc_luma(&mut self, diff: i32) -> Result<()> {
        self.symbols.push(Emitted::DcLuma(diff));
        Ok(())
    }

    fn emit_dc_chroma(&mut self, diff: i32) -> Result<()> {
        self.symbols.push(Emitted::DcChroma(diff));
        Ok(())
    }

    fn emit_ac(&mut self, run: u8, level: i16, use_intra_table: bool) -> Result<()> {
        self.symbols.push(Emitted::Ac {
            run,
            level,
            intra_table: use_intra_table,
        });
        Ok(())
    }

    fn emit_ac_first(&mut self, run: u8, level: i16) -> Result<()> {
        self.symbols.push(Emitted::AcFirst { run, level });
        Ok(())
    }

    fn emit_motion_code(&mut self, code: i32) -> Result<()> {
        self.symbols.push(Emitted::MotionCode(code));
        Ok(())
    }

    fn report_warning(&mut self, message: &str) {
        log::debug!("recorded warning: {}", message);
        self.warnings.push(message.to_string());
    }
}
