#![allow(dead_code)]

use bitstream_io::{BigEndian, BitRead, BitReader};
use mpeg2_vlc::vlc::tables::{
    ac_code, VlcCode, DC_CHROMA_SIZE, DC_LUMA_SIZE, EOB_TABLE_ONE, EOB_TABLE_ZERO, ESCAPE,
    MOTION_CODE,
};
use mpeg2_vlc::{Block, MotionRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AcSymbol {
    EndOfBlock,
    Escape,
    RunLevel { run: u8, magnitude: u16 },
}

fn ac_codes(intra_table: bool) -> Vec<(VlcCode, AcSymbol)> {
    let eob = if intra_table { EOB_TABLE_ONE } else { EOB_TABLE_ZERO };
    let mut codes = vec![(eob, AcSymbol::EndOfBlock), (ESCAPE, AcSymbol::Escape)];
    for run in 0..32u8 {
        for magnitude in 1..=40u16 {
            if let Some(code) = ac_code(run, magnitude, intra_table) {
                codes.push((code, AcSymbol::RunLevel { run, magnitude }));
            }
        }
    }
    codes
}

fn sized_codes(table: &[VlcCode]) -> Vec<(VlcCode, u32)> {
    table
        .iter()
        .enumerate()
        .map(|(size, code)| (*code, size as u32))
        .collect()
}

struct Bits<'a> {
    reader: BitReader<&'a [u8], BigEndian>,
    read: u64,
}

impl Bits<'_> {
    fn bit(&mut self) -> u32 {
        self.read += 1;
        u32::from(self.reader.read_bit().expect("stream ended early"))
    }

    fn take(&mut self, count: u32) -> u32 {
        (0..count).fold(0, |acc, _| (acc << 1) | self.bit())
    }

    /// Reads bits until they form one of `codes`, starting from an already read prefix.
    fn symbol<T: Copy>(&mut self, codes: &[(VlcCode, T)], mut code: u32, mut len: u8) -> T {
        loop {
            if let Some((_, symbol)) = codes
                .iter()
                .find(|(vlc, _)| vlc.len == len && u32::from(vlc.code) == code)
            {
                return *symbol;
            }
            assert!(len < 17, "no code matches {:b} ({} bits)", code, len);
            code = (code << 1) | self.bit();
            len += 1;
        }
    }
}

/// Bit exact decoder for the output of `VlcWriter`, written against the code tables only.
pub struct ReferenceDecoder<'a> {
    bits: Bits<'a>,
    table_zero: Vec<(VlcCode, AcSymbol)>,
    table_one: Vec<(VlcCode, AcSymbol)>,
    dc_luma: Vec<(VlcCode, u32)>,
    dc_chroma: Vec<(VlcCode, u32)>,
    motion: Vec<(VlcCode, u32)>,
}

impl<'a> ReferenceDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            bits: Bits {
                reader: BitReader::endian(data, BigEndian),
                read: 0,
            },
            table_zero: ac_codes(false),
            table_one: ac_codes(true),
            dc_luma: sized_codes(&DC_LUMA_SIZE),
            dc_chroma: sized_codes(&DC_CHROMA_SIZE),
            motion: sized_codes(&MOTION_CODE),
        }
    }

    pub fn bits_read(&self) -> u64 {
        self.bits.read
    }

    fn dc_differential(&mut self, luma: bool) -> i32 {
        let table = if luma { &self.dc_luma } else { &self.dc_chroma };
        let size = self.bits.symbol(table, 0, 0);
        if size == 0 {
            return 0;
        }
        let value = self.bits.take(size) as i32;
        if value >> (size - 1) == 1 {
            value
        } else {
            value - ((1 << size) - 1)
        }
    }

    /// Places one AC symbol into `block`, returns false at the end of block.
    fn apply(
        &mut self,
        symbol: AcSymbol,
        block: &mut Block,
        scan: &[usize; 64],
        pos: &mut usize,
    ) -> bool {
        let (run, level) = match symbol {
            AcSymbol::EndOfBlock => return false,
            AcSymbol::Escape => {
                let run = self.bits.take(6) as usize;
                let raw = self.bits.take(12) as i32;
                let level = if raw >= 2048 { raw - 4096 } else { raw };
                (run, level as i16)
            }
            AcSymbol::RunLevel { run, magnitude } => {
                let negative = self.bits.bit() == 1;
                let level = magnitude as i16;
                (run as usize, if negative { -level } else { level })
            }
        };
        *pos += run;
        assert!(*pos < 64, "run past the end of the block");
        block[scan[*pos]] = level;
        *pos += 1;
        true
    }

    fn ac_coefficients(
        &mut self,
        block: &mut Block,
        scan: &[usize; 64],
        mut pos: usize,
        intra_table: bool,
    ) {
        loop {
            let codes = if intra_table { &self.table_one } else { &self.table_zero };
            let symbol = self.bits.symbol(codes, 0, 0);
            if !self.apply(symbol, block, scan, &mut pos) {
                break;
            }
        }
    }

    pub fn intra_block(
        &mut self,
        dc_predictor: &mut i16,
        luma: bool,
        scan: &[usize; 64],
        intra_vlc_format: bool,
    ) -> Block {
        let mut block = [0; 64];
        let dc = i32::from(*dc_predictor) + self.dc_differential(luma);
        *dc_predictor = dc as i16;
        block[0] = dc as i16;
        self.ac_coefficients(&mut block, scan, 1, intra_vlc_format);
        block
    }

    pub fn non_intra_block(&mut self, scan: &[usize; 64]) -> Block {
        let mut block = [0; 64];
        let mut pos = 0;
        if self.bits.bit() == 1 {
            // '1s' is run 0, level 1 in first position
            let negative = self.bits.bit() == 1;
            block[scan[0]] = if negative { -1 } else { 1 };
            pos = 1;
        } else {
            let symbol = self.bits.symbol(&self.table_zero, 0, 1);
            if !self.apply(symbol, &mut block, scan, &mut pos) {
                return block;
            }
        }
        self.ac_coefficients(&mut block, scan, pos, false);
        block
    }

    /// Reconstructed differential, equal to the input modulo the range span.
    pub fn motion_vector(&mut self, f_code: u8) -> i32 {
        let range = MotionRange::new(f_code);
        let magnitude = self.bits.symbol(&self.motion, 0, 0) as i32;
        if magnitude == 0 {
            return 0;
        }
        let negative = self.bits.bit() == 1;
        let residual = self.bits.take(range.r_size) as i32;
        let delta = (magnitude - 1) * range.f + residual + 1;
        if negative {
            -delta
        } else {
            delta
        }
    }
}
