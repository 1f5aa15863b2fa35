//! Intra coded blocks (ISO/IEC 13818-2 §6.2.6, §7.2.1).

use super::{run_levels, Block};
use crate::context::{CodingContext, ComponentClass};
use crate::error::Result;
use crate::sink::VlcSink;
use crate::vlc::tables::{EOB_TABLE_ONE, EOB_TABLE_ZERO};

/// Encode an intra block: DC differential, AC run/level pairs, end of block.
///
/// The DC predictor of `component` is replaced by `block[0]` before anything
/// is emitted, so it is updated even when the sink fails.
///
/// # Arguments
/// * `ctx` - Coding context; scan order and `intra_vlc_format` are read, DC predictor written
/// * `block` - Quantized coefficients in natural order
/// * `component` - Luma selects Table B-12 for the DC size, both chroma classes Table B-13
/// * `sink` - Receives the symbols in bitstream order
pub fn encode_intra_block<S: VlcSink>(
    ctx: &mut CodingContext,
    block: &Block,
    component: ComponentClass,
    sink: &mut S,
) -> Result<()> {
    let dc_diff = ctx.predict_dc(component, block[0]);
    if component.is_luma() {
        sink.emit_dc_luma(dc_diff)?;
    } else {
        sink.emit_dc_chroma(dc_diff)?;
    }

    let intra_vlc_format = ctx.intra_vlc_format();
    let scan = ctx.scan_table();
    let mut pairs = 0usize;

    for pair in run_levels(block, scan, 1) {
        log::trace!("intra AC: run={}, level={}", pair.run, pair.level);
        sink.emit_ac(pair.run, pair.level, intra_vlc_format)?;
        pairs += 1;
    }

    let eob = if intra_vlc_format {
        EOB_TABLE_ONE
    } else {
        EOB_TABLE_ZERO
    };
    sink.emit_bits(u32::from(eob.code), u32::from(eob.len))?;

    log::trace!(
        "intra block: component={:?}, dc_diff={}, pairs={}",
        component,
        dc_diff,
        pairs
    );
    Ok(())
}
