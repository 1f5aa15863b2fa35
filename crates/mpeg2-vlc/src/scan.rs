//! Coefficient scan orders (ISO/IEC 13818-2 Figure 7-2 and 7-3).
//!
//! Both tables map a scan position (the order in which coefficients are run
//! length coded) to the natural, row-major index inside the 8x8 block.

/// Zig-zag scan: scan position → natural index.
#[rustfmt::skip]
pub const ZIG_ZAG_SCAN: [usize; 64] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Alternate scan, used for interlaced material: scan position → natural index.
#[rustfmt::skip]
pub const ALTERNATE_SCAN: [usize; 64] = [
     0,  8, 16, 24,  1,  9,  2, 10,
    17, 25, 32, 40, 48, 56, 57, 49,
    41, 33, 26, 18,  3, 11,  4, 12,
    19, 27, 34, 42, 50, 58, 35, 43,
    51, 59, 20, 28,  5, 13,  6, 14,
    21, 29, 36, 44, 52, 60, 37, 45,
    53, 61, 22, 30,  7, 15, 23, 31,
    38, 46, 54, 62, 39, 47, 55, 63,
];

/// Selects which of the two scan tables is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanOrder {
    #[default]
    ZigZag,
    Alternate,
}

impl ScanOrder {
    /// `alternate_scan` flag as carried in the picture coding extension.
    pub fn from_alternate_scan(alternate_scan: bool) -> Self {
        if alternate_scan {
            ScanOrder::Alternate
        } else {
            ScanOrder::ZigZag
        }
    }

    /// The scan permutation of this order.
    #[inline]
    pub fn table(self) -> &'static [usize; 64] {
        match self {
            ScanOrder::ZigZag => &ZIG_ZAG_SCAN,
            ScanOrder::Alternate => &ALTERNATE_SCAN,
        }
    }
}
