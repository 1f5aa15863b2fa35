//! Encoder options and the per-session coding context.

use crate::scan::ScanOrder;

/// Color component class of a block, selecting DC table and DC predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentClass {
    Luma,
    Cb,
    Cr,
}

impl ComponentClass {
    /// Class for the indices 0 (luma), 1 (Cb) and 2 (Cr).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ComponentClass::Luma),
            1 => Some(ComponentClass::Cb),
            2 => Some(ComponentClass::Cr),
            _ => None,
        }
    }

    /// Predictor slot of this class.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ComponentClass::Luma => 0,
            ComponentClass::Cb => 1,
            ComponentClass::Cr => 2,
        }
    }

    #[inline]
    pub fn is_luma(self) -> bool {
        self == ComponentClass::Luma
    }
}

/// Options that stay fixed for a coding session.
#[derive(Debug, Clone, Default)]
pub struct EncoderOptions {
    /// Scan order used for all blocks (`alternate_scan`).
    pub scan: ScanOrder,

    /// Use Table B-15 and the `0110` end of block for intra blocks (`intra_vlc_format`).
    pub intra_vlc_format: bool,

    /// Suppresses warnings about invalid motion vectors.
    pub quiet: bool,
}

impl EncoderOptions {
    pub fn with_scan(mut self, scan: ScanOrder) -> Self {
        self.scan = scan;
        self
    }

    pub fn with_intra_vlc_format(mut self, intra_vlc_format: bool) -> Self {
        self.intra_vlc_format = intra_vlc_format;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Mutable state shared by all block and motion vector encode calls of a session.
///
/// Only the DC predictors change between calls; they are written by
/// [`encode_intra_block`](crate::encode_intra_block) and nowhere else.
#[derive(Debug, Clone, Default)]
pub struct CodingContext {
    dc_predictors: [i16; 3],
    scan: ScanOrder,
    intra_vlc_format: bool,
    quiet: bool,
}

impl CodingContext {
    /// New context with all DC predictors at zero.
    pub fn new(options: &EncoderOptions) -> Self {
        CodingContext {
            dc_predictors: [0; 3],
            scan: options.scan,
            intra_vlc_format: options.intra_vlc_format,
            quiet: options.quiet,
        }
    }

    /// Resets all DC predictors to zero.
    ///
    /// The slice (or restart) driver decides when this happens.
    pub fn reset_dc_predictors(&mut self) {
        self.dc_predictors = [0; 3];
    }

    #[inline]
    pub fn dc_predictor(&self, component: ComponentClass) -> i16 {
        self.dc_predictors[component.index()]
    }

    /// Stores `dc` as the new predictor and returns the differential to the old one.
    #[inline]
    pub(crate) fn predict_dc(&mut self, component: ComponentClass, dc: i16) -> i32 {
        let slot = &mut self.dc_predictors[component.index()];
        let diff = i32::from(dc) - i32::from(*slot);
        *slot = dc;
        diff
    }

    /// The active scan permutation.
    #[inline]
    pub fn scan_table(&self) -> &'static [usize; 64] {
        self.scan.table()
    }

    #[inline]
    pub fn scan_order(&self) -> ScanOrder {
        self.scan
    }

    #[inline]
    pub fn intra_vlc_format(&self) -> bool {
        self.intra_vlc_format
    }

    #[inline]
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
