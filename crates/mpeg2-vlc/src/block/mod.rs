//! Run/level coding of quantized 8x8 DCT blocks.
//!
//! - `intra` - blocks with a predicted DC term (ISO/IEC 13818-2 §7.2.1)
//! - `non_intra` - blocks coded as prediction error, no separate DC term

mod intra;
mod non_intra;

pub use intra::encode_intra_block;
pub use non_intra::encode_non_intra_block;

/// One quantized block in natural (row-major) order, index 0 is DC.
pub type Block = [i16; 64];

/// Zero run in front of a nonzero coefficient, paired with that coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLevel {
    pub run: u8,
    pub level: i16,
}

/// Iterates the nonzero coefficients of `block` along `scan`, starting at
/// scan position `start`, together with the zero run in front of each.
///
/// The run counter starts at zero and restarts after every yielded pair;
/// trailing zeros are not reported.
pub fn run_levels<'a>(
    block: &'a Block,
    scan: &'static [usize; 64],
    start: usize,
) -> impl Iterator<Item = RunLevel> + 'a {
    let mut run = 0u8;
    scan[start..].iter().filter_map(move |&natural| {
        let level = block[natural];
        if level == 0 {
            run += 1;
            None
        } else {
            let pair = RunLevel { run, level };
            run = 0;
            Some(pair)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{ALTERNATE_SCAN, ZIG_ZAG_SCAN};

    #[test]
    fn test_run_levels_zig_zag() {
        let mut block = [0i16; 64];
        block[1] = 4; // scan position 1
        block[16] = -2; // scan position 3
        block[63] = 1; // scan position 63

        let pairs: Vec<RunLevel> = run_levels(&block, &ZIG_ZAG_SCAN, 1).collect();
        assert_eq!(
            pairs,
            vec![
                RunLevel { run: 0, level: 4 },
                RunLevel { run: 1, level: -2 },
                RunLevel { run: 59, level: 1 },
            ]
        );
    }

    #[test]
    fn test_run_levels_follow_the_scan() {
        let mut block = [0i16; 64];
        block[8] = 7;

        // natural index 8 is scan position 2 in zig-zag, 1 in alternate
        let zig_zag: Vec<RunLevel> = run_levels(&block, &ZIG_ZAG_SCAN, 0).collect();
        let alternate: Vec<RunLevel> = run_levels(&block, &ALTERNATE_SCAN, 0).collect();

        assert_eq!(zig_zag, vec![RunLevel { run: 2, level: 7 }]);
        assert_eq!(alternate, vec![RunLevel { run: 1, level: 7 }]);
    }

    #[test]
    fn test_run_levels_skip_start() {
        let mut block = [0i16; 64];
        block[0] = 100;

        assert_eq!(run_levels(&block, &ZIG_ZAG_SCAN, 1).count(), 0);
        assert_eq!(run_levels(&block, &ZIG_ZAG_SCAN, 0).count(), 1);
    }
}
