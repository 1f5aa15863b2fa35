//! Fixed code tables of ISO/IEC 13818-2 Annex B.
//!
//! Codes are stored without their trailing sign bit. A zero length marks a
//! run/level combination that has no entry and must be escape coded.

/// One variable length code: the `len` low bits of `code`, MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VlcCode {
    pub code: u16,
    pub len: u8,
}

const fn c(code: u16, len: u8) -> VlcCode {
    VlcCode { code, len }
}

const NO_CODE: VlcCode = c(0, 0);

/// End of block with table zero (B-14): `10`.
pub const EOB_TABLE_ZERO: VlcCode = c(0b10, 2);

/// End of block with table one (B-15): `0110`.
pub const EOB_TABLE_ONE: VlcCode = c(0b0110, 4);

/// Escape prefix of both DCT coefficient tables: `0000 01`.
pub const ESCAPE: VlcCode = c(0b00_0001, 6);

/// Largest run that can appear in a block.
pub const MAX_RUN: u8 = 63;

/// Largest level magnitude the 12 bit escape can carry.
pub const MAX_LEVEL: u16 = 2047;

/// Table B-10, `motion_code` magnitudes 0..=16.
#[rustfmt::skip]
pub const MOTION_CODE: [VlcCode; 17] = [
    c(0x01, 1), c(0x01, 2), c(0x01, 3), c(0x01, 4), c(0x03, 6), c(0x05, 7),
    c(0x04, 7), c(0x03, 7), c(0x0b, 9), c(0x0a, 9), c(0x09, 9), c(0x11, 10),
    c(0x10, 10), c(0x0f, 10), c(0x0e, 10), c(0x0d, 10), c(0x0c, 10),
];

/// Table B-12, `dct_dc_size_luminance` for sizes 0..=11.
#[rustfmt::skip]
pub const DC_LUMA_SIZE: [VlcCode; 12] = [
    c(0x004, 3), c(0x000, 2), c(0x001, 2), c(0x005, 3), c(0x006, 3), c(0x00e, 4),
    c(0x01e, 5), c(0x03e, 6), c(0x07e, 7), c(0x0fe, 8), c(0x1fe, 9), c(0x1ff, 9),
];

/// Table B-13, `dct_dc_size_chrominance` for sizes 0..=11.
#[rustfmt::skip]
pub const DC_CHROMA_SIZE: [VlcCode; 12] = [
    c(0x000, 2), c(0x001, 2), c(0x002, 2), c(0x006, 3), c(0x00e, 4), c(0x01e, 5),
    c(0x03e, 6), c(0x07e, 7), c(0x0fe, 8), c(0x1fe, 9), c(0x3fe, 10), c(0x3ff, 10),
];

/// Table B-14, runs 0 and 1, levels 1..=40.
#[rustfmt::skip]
const TABLE_ZERO_SHORT_RUNS: [[VlcCode; 40]; 2] = [
    [
        c(0x03, 2), c(0x04, 4), c(0x05, 5), c(0x06, 7), c(0x26, 8), c(0x21, 8),
        c(0x0a, 10), c(0x1d, 12), c(0x18, 12), c(0x13, 12), c(0x10, 12), c(0x1a, 13),
        c(0x19, 13), c(0x18, 13), c(0x17, 13), c(0x1f, 14), c(0x1e, 14), c(0x1d, 14),
        c(0x1c, 14), c(0x1b, 14), c(0x1a, 14), c(0x19, 14), c(0x18, 14), c(0x17, 14),
        c(0x16, 14), c(0x15, 14), c(0x14, 14), c(0x13, 14), c(0x12, 14), c(0x11, 14),
        c(0x10, 14), c(0x18, 15), c(0x17, 15), c(0x16, 15), c(0x15, 15), c(0x14, 15),
        c(0x13, 15), c(0x12, 15), c(0x11, 15), c(0x10, 15),
    ],
    [
        c(0x03, 3), c(0x06, 6), c(0x25, 8), c(0x0c, 10), c(0x1b, 12), c(0x16, 13),
        c(0x15, 13), c(0x1f, 15), c(0x1e, 15), c(0x1d, 15), c(0x1c, 15), c(0x1b, 15),
        c(0x1a, 15), c(0x19, 15), c(0x13, 16), c(0x12, 16), c(0x11, 16), c(0x10, 16),
        NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE,
        NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE,
        NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE,
        NO_CODE, NO_CODE, NO_CODE, NO_CODE,
    ],
];

/// Table B-14, runs 2..=31, levels 1..=5.
#[rustfmt::skip]
const TABLE_ZERO_LONG_RUNS: [[VlcCode; 5]; 30] = [
    [c(0x05, 4), c(0x04, 7), c(0x0b, 10), c(0x14, 12), c(0x14, 13)],
    [c(0x07, 5), c(0x24, 8), c(0x1c, 12), c(0x13, 13), NO_CODE],
    [c(0x06, 5), c(0x0f, 10), c(0x12, 12), NO_CODE, NO_CODE],
    [c(0x07, 6), c(0x09, 10), c(0x12, 13), NO_CODE, NO_CODE],
    [c(0x05, 6), c(0x1e, 12), c(0x14, 16), NO_CODE, NO_CODE],
    [c(0x04, 6), c(0x15, 12), NO_CODE, NO_CODE, NO_CODE],
    [c(0x07, 7), c(0x11, 12), NO_CODE, NO_CODE, NO_CODE],
    [c(0x05, 7), c(0x11, 13), NO_CODE, NO_CODE, NO_CODE],
    [c(0x27, 8), c(0x10, 13), NO_CODE, NO_CODE, NO_CODE],
    [c(0x23, 8), c(0x1a, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x22, 8), c(0x19, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x20, 8), c(0x18, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x0e, 10), c(0x17, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x0d, 10), c(0x16, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x08, 10), c(0x15, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x1f, 12), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1a, 12), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x19, 12), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x17, 12), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x16, 12), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1f, 13), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1e, 13), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1d, 13), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1c, 13), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1b, 13), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1f, 16), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1e, 16), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1d, 16), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1c, 16), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1b, 16), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
];

/// Table B-15, runs 0 and 1, levels 1..=40.
#[rustfmt::skip]
const TABLE_ONE_SHORT_RUNS: [[VlcCode; 40]; 2] = [
    [
        c(0x02, 2), c(0x06, 3), c(0x07, 4), c(0x1c, 5), c(0x1d, 5), c(0x05, 6),
        c(0x04, 6), c(0x7b, 7), c(0x7c, 7), c(0x23, 8), c(0x22, 8), c(0xfa, 8),
        c(0xfb, 8), c(0xfe, 8), c(0xff, 8), c(0x1f, 14), c(0x1e, 14), c(0x1d, 14),
        c(0x1c, 14), c(0x1b, 14), c(0x1a, 14), c(0x19, 14), c(0x18, 14), c(0x17, 14),
        c(0x16, 14), c(0x15, 14), c(0x14, 14), c(0x13, 14), c(0x12, 14), c(0x11, 14),
        c(0x10, 14), c(0x18, 15), c(0x17, 15), c(0x16, 15), c(0x15, 15), c(0x14, 15),
        c(0x13, 15), c(0x12, 15), c(0x11, 15), c(0x10, 15),
    ],
    [
        c(0x02, 3), c(0x06, 5), c(0x79, 7), c(0x27, 8), c(0x20, 8), c(0x16, 13),
        c(0x15, 13), c(0x1f, 15), c(0x1e, 15), c(0x1d, 15), c(0x1c, 15), c(0x1b, 15),
        c(0x1a, 15), c(0x19, 15), c(0x13, 16), c(0x12, 16), c(0x11, 16), c(0x10, 16),
        NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE,
        NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE,
        NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE, NO_CODE,
        NO_CODE, NO_CODE, NO_CODE, NO_CODE,
    ],
];

/// Table B-15, runs 2..=31, levels 1..=5.
#[rustfmt::skip]
const TABLE_ONE_LONG_RUNS: [[VlcCode; 5]; 30] = [
    [c(0x05, 5), c(0x07, 7), c(0xfc, 8), c(0x0c, 10), c(0x14, 13)],
    [c(0x07, 5), c(0x26, 8), c(0x1c, 12), c(0x13, 13), NO_CODE],
    [c(0x06, 6), c(0xfd, 8), c(0x12, 12), NO_CODE, NO_CODE],
    [c(0x07, 6), c(0x04, 9), c(0x12, 13), NO_CODE, NO_CODE],
    [c(0x06, 7), c(0x1e, 12), c(0x14, 16), NO_CODE, NO_CODE],
    [c(0x04, 7), c(0x15, 12), NO_CODE, NO_CODE, NO_CODE],
    [c(0x05, 7), c(0x11, 12), NO_CODE, NO_CODE, NO_CODE],
    [c(0x78, 7), c(0x11, 13), NO_CODE, NO_CODE, NO_CODE],
    [c(0x7a, 7), c(0x10, 13), NO_CODE, NO_CODE, NO_CODE],
    [c(0x21, 8), c(0x1a, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x25, 8), c(0x19, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x24, 8), c(0x18, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x05, 9), c(0x17, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x07, 9), c(0x16, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x0d, 10), c(0x15, 16), NO_CODE, NO_CODE, NO_CODE],
    [c(0x1f, 12), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1a, 12), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x19, 12), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x17, 12), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x16, 12), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1f, 13), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1e, 13), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1d, 13), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1c, 13), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1b, 13), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1f, 16), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1e, 16), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1d, 16), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1c, 16), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
    [c(0x1b, 16), NO_CODE, NO_CODE, NO_CODE, NO_CODE],
];

/// Table entry for a run/level magnitude pair, `None` if it needs an escape.
///
/// `intra_table` selects table one (B-15) instead of table zero (B-14).
pub fn ac_code(run: u8, magnitude: u16, intra_table: bool) -> Option<VlcCode> {
    if magnitude == 0 {
        return None;
    }
    let level = magnitude as usize - 1;
    let run = run as usize;

    let code = if run < 2 && level < 40 {
        if intra_table {
            TABLE_ONE_SHORT_RUNS[run][level]
        } else {
            TABLE_ZERO_SHORT_RUNS[run][level]
        }
    } else if (2..32).contains(&run) && level < 5 {
        if intra_table {
            TABLE_ONE_LONG_RUNS[run - 2][level]
        } else {
            TABLE_ZERO_LONG_RUNS[run - 2][level]
        }
    } else {
        return None;
    };

    (code.len != 0).then_some(code)
}
