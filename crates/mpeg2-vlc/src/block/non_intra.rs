//! Non-intra coded blocks (ISO/IEC 13818-2 §6.2.6, §7.2.2).

use super::{run_levels, Block};
use crate::context::CodingContext;
use crate::error::Result;
use crate::sink::VlcSink;
use crate::vlc::tables::EOB_TABLE_ZERO;

/// Encode a non-intra block: all 64 coefficients as run/level pairs, then end of block.
///
/// The first pair goes through [`VlcSink::emit_ac_first`], all later ones
/// through [`VlcSink::emit_ac`] with table zero. `intra_vlc_format` has no
/// influence here and the DC predictors are left alone.
pub fn encode_non_intra_block<S: VlcSink>(
    ctx: &CodingContext,
    block: &Block,
    sink: &mut S,
) -> Result<()> {
    let mut pairs = 0usize;

    for pair in run_levels(block, ctx.scan_table(), 0) {
        log::trace!("non-intra AC: run={}, level={}", pair.run, pair.level);
        if pairs == 0 {
            sink.emit_ac_first(pair.run, pair.level)?;
        } else {
            sink.emit_ac(pair.run, pair.level, false)?;
        }
        pairs += 1;
    }

    let eob = EOB_TABLE_ZERO;
    sink.emit_bits(u32::from(eob.code), u32::from(eob.len))?;

    log::trace!("non-intra block: pairs={}", pairs);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EncoderOptions;
    use crate::sink::{Emitted, SymbolRecorder};

    const EOB: Emitted = Emitted::Bits {
        value: 0b10,
        length: 2,
    };

    fn ac(run: u8, level: i16) -> Emitted {
        Emitted::Ac {
            run,
            level,
            intra_table: false,
        }
    }

    #[test]
    fn test_empty_block_emits_only_eob() {
        let ctx = CodingContext::default();
        let mut sink = SymbolRecorder::new();

        encode_non_intra_block(&ctx, &[0i16; 64], &mut sink).unwrap();

        assert_eq!(sink.symbols(), &[EOB]);
    }

    #[test]
    fn test_first_coefficient_path_fires_once() {
        let ctx = CodingContext::default();
        let mut sink = SymbolRecorder::new();

        let mut block = [0i16; 64];
        block[8] = -1; // scan position 2
        block[9] = 3; // scan position 4
        block[63] = 2;
        encode_non_intra_block(&ctx, &block, &mut sink).unwrap();

        assert_eq!(
            sink.symbols(),
            &[
                Emitted::AcFirst { run: 2, level: -1 },
                ac(1, 3),
                ac(58, 2),
                EOB,
            ]
        );
    }

    #[test]
    fn test_dc_position_is_a_regular_coefficient() {
        let ctx = CodingContext::default();
        let mut sink = SymbolRecorder::new();

        let mut block = [0i16; 64];
        block[0] = 1;
        block[1] = 1;
        encode_non_intra_block(&ctx, &block, &mut sink).unwrap();

        assert_eq!(
            sink.symbols(),
            &[Emitted::AcFirst { run: 0, level: 1 }, ac(0, 1), EOB]
        );
    }

    #[test]
    fn test_ignores_intra_vlc_format_and_predictors() {
        let options = EncoderOptions::default().with_intra_vlc_format(true);
        let ctx = CodingContext::new(&options);
        let mut sink = SymbolRecorder::new();

        let mut block = [0i16; 64];
        block[0] = 9;
        block[2] = 4;
        encode_non_intra_block(&ctx, &block, &mut sink).unwrap();

        assert_eq!(
            sink.symbols(),
            &[Emitted::AcFirst { run: 0, level: 9 }, ac(4, 4), EOB]
        );
        assert_eq!(ctx.dc_predictor(crate::ComponentClass::Luma), 0);
    }
}
