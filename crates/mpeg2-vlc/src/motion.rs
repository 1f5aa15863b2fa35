//! Motion vector component coding (ISO/IEC 13818-2 §7.6.3.1).
//!
//! A differential is folded into the range addressable with the given
//! `f_code` and split into a variable length `motion_code` plus a fixed
//! length `motion_residual` of `f_code - 1` bits.

use crate::context::CodingContext;
use crate::error::Result;
use crate::sink::VlcSink;

/// Range parameters derived from one `f_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionRange {
    /// Number of residual bits, `f_code - 1`.
    pub r_size: u32,
    /// Scale factor `2^r_size`.
    pub f: i32,
    /// Smallest differential that needs no folding, `-16 * f`.
    pub min: i32,
    /// Largest differential that needs no folding, `16 * f - 1`.
    pub max: i32,
    /// Span of the wrap around, `32 * f`.
    pub span: i32,
}

impl MotionRange {
    /// `f_code` must be at least 1; the caller validates it.
    pub fn new(f_code: u8) -> Self {
        debug_assert!(f_code >= 1, "f_code must be at least 1");
        let r_size = u32::from(f_code) - 1;
        let f = 1i32 << r_size;
        MotionRange {
            r_size,
            f,
            min: -16 * f,
            max: 16 * f - 1,
            span: 32 * f,
        }
    }

    #[inline]
    pub fn contains(&self, dmv: i32) -> bool {
        (self.min..=self.max).contains(&dmv)
    }

    /// One folding pass: wrap `dmv` by one span if it is outside the range.
    ///
    /// Values more than one span away stay out of range.
    pub fn fold(&self, dmv: i32) -> i32 {
        if dmv > self.max {
            dmv - self.span
        } else if dmv < self.min {
            dmv + self.span
        } else {
            dmv
        }
    }

    /// Split a folded differential into `motion_code` and `motion_residual`.
    pub fn split(&self, dmv: i32) -> MotionComponents {
        let temp = dmv.abs() + self.f - 1;
        let magnitude = temp / self.f;
        let motion_code = if dmv < 0 { -magnitude } else { magnitude };
        MotionComponents {
            motion_code,
            motion_residual: (temp % self.f) as u32,
        }
    }
}

/// The two coded parts of one motion vector component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionComponents {
    pub motion_code: i32,
    pub motion_residual: u32,
}

/// Encode one motion vector component differential.
///
/// A differential that is still out of range after folding is reported
/// through [`VlcSink::report_warning`] (unless the context is quiet) and then
/// coded as is, without clamping.
///
/// # Arguments
/// * `ctx` - Coding context, only consulted for warning suppression
/// * `dmv` - Difference to the predicted vector component
/// * `f_code` - Range selector, at least 1
/// * `sink` - Receives `motion_code` and, if any, `motion_residual`
pub fn encode_motion_vector<S: VlcSink>(
    ctx: &CodingContext,
    dmv: i32,
    f_code: u8,
    sink: &mut S,
) -> Result<MotionComponents> {
    let range = MotionRange::new(f_code);
    let folded = range.fold(dmv);

    if !range.contains(folded) && !ctx.is_quiet() {
        sink.report_warning(&format!(
            "invalid motion vector: {} (folded {}) outside [{}, {}] for f_code {}",
            dmv, folded, range.min, range.max, f_code
        ));
    }

    let components = range.split(folded);
    log::trace!(
        "motion vector: dmv={}, folded={}, motion_code={}, motion_residual={}",
        dmv,
        folded,
        components.motion_code,
        components.motion_residual
    );

    sink.emit_motion_code(components.motion_code)?;
    if range.r_size > 0 && components.motion_code != 0 {
        sink.emit_bits(components.motion_residual, range.r_size)?;
    }

    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EncoderOptions;
    use crate::sink::{Emitted, SymbolRecorder};

    fn parts(motion_code: i32, motion_residual: u32) -> MotionComponents {
        MotionComponents {
            motion_code,
            motion_residual,
        }
    }

    #[test]
    fn test_range_for_f_code() {
        let range = MotionRange::new(1);
        assert_eq!((range.r_size, range.f), (0, 1));
        assert_eq!((range.min, range.max, range.span), (-16, 15, 32));

        let range = MotionRange::new(3);
        assert_eq!((range.r_size, range.f), (2, 4));
        assert_eq!((range.min, range.max, range.span), (-64, 63, 128));
    }

    #[test]
    fn test_fold() {
        let range = MotionRange::new(1);
        assert_eq!(range.fold(20), -12);
        assert_eq!(range.fold(-20), 12);
        assert_eq!(range.fold(15), 15);
        assert_eq!(range.fold(-16), -16);
        assert_eq!(range.fold(16), -16);
        assert_eq!(range.fold(-17), 15);
    }

    #[test]
    fn test_split() {
        let range = MotionRange::new(2);
        assert_eq!(range.split(5), parts(3, 0));
        assert_eq!(range.split(-5), parts(-3, 0));
        assert_eq!(range.split(4), parts(2, 1));
        assert_eq!(range.split(0), parts(0, 1));
    }

    #[test]
    fn test_residual_bits_follow_nonzero_code() {
        let ctx = CodingContext::default();
        let mut sink = SymbolRecorder::new();

        encode_motion_vector(&ctx, 5, 2, &mut sink).unwrap();

        assert_eq!(
            sink.symbols(),
            &[
                Emitted::MotionCode(3),
                Emitted::Bits {
                    value: 0,
                    length: 1,
                },
            ]
        );
    }

    #[test]
    fn test_zero_code_has_no_residual() {
        let ctx = CodingContext::default();
        for f_code in 1..=9u8 {
            let mut sink = SymbolRecorder::new();
            encode_motion_vector(&ctx, 0, f_code, &mut sink).unwrap();
            let expected = [Emitted::MotionCode(0)];
            assert_eq!(sink.symbols(), &expected, "f_code {}", f_code);
        }
    }

    #[test]
    fn test_f_code_one_has_no_residual() {
        let ctx = CodingContext::default();
        let mut sink = SymbolRecorder::new();

        encode_motion_vector(&ctx, 20, 1, &mut sink).unwrap();

        assert_eq!(sink.symbols(), &[Emitted::MotionCode(-12)]);
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn test_out_of_range_warns_and_proceeds_unclamped() {
        let ctx = CodingContext::default();
        let mut sink = SymbolRecorder::new();

        // 50 folds once to 18, still above 15
        let components = encode_motion_vector(&ctx, 50, 1, &mut sink).unwrap();

        assert_eq!(components.motion_code, 18);
        assert_eq!(sink.symbols(), &[Emitted::MotionCode(18)]);
        assert_eq!(sink.warnings().len(), 1);
        assert!(sink.warnings()[0].starts_with("invalid motion vector"));
    }

    #[test]
    fn test_quiet_context_suppresses_warning() {
        let ctx = CodingContext::new(&EncoderOptions::default().with_quiet(true));
        let mut sink = SymbolRecorder::new();

        encode_motion_vector(&ctx, -50, 1, &mut sink).unwrap();

        assert_eq!(sink.symbols(), &[Emitted::MotionCode(-18)]);
        assert!(sink.warnings().is_empty());
    }
}
