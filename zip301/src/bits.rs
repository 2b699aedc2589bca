use bit_vec::BitVec;

use crate::prefix_code_table::CodeTable;

/// Encoded content packed MSB first. `bit_count` excludes the zero padding
/// that completes the last byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    pub bytes: Vec<u8>,
    pub bit_count: usize,
}

/// Concatenates the code of every byte in `content`.
///
/// Bytes without a code in `codes` are skipped; the table is expected to be
/// built from the same content.
pub fn pack(codes: &CodeTable, content: &[u8]) -> PackedBits {
    let mut bits = BitVec::new();
    for code in content.iter().filter_map(|&byte| codes.get(byte)) {
        bits.extend(code.iter());
    }

    PackedBits {
        bit_count: bits.len(),
        // to_bytes puts the first bit in the high-order position and pads with zeros
        bytes: bits.to_bytes(),
    }
}

/// Sequential MSB-first cursor over a byte buffer.
pub struct BitReader<'a> {
    data: &'a [u8],
    byte_index: usize,
    bit_position: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_index: 0,
            bit_position: 7,
        }
    }

    /// Returns `None` once every byte has been read.
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = self.data.get(self.byte_index)?;
        let bit = (byte >> self.bit_position) & 1 == 1;

        if self.bit_position == 0 {
            self.bit_position = 7;
            self.byte_index += 1;
        } else {
            self.bit_position -= 1;
        }

        Some(bit)
    }

    pub fn bits_read(&self) -> usize {
        self.byte_index * 8 + (7 - self.bit_position as usize)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_bit()
    }
}
