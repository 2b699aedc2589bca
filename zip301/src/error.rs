use derive_more::Display;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum CodecError {
    #[display(fmt = "malformed archive: {}", _0)]
    MalformedArchive(MalformedArchive),
}

impl std::error::Error for CodecError {}

impl From<MalformedArchive> for CodecError {
    fn from(reason: MalformedArchive) -> Self {
        CodecError::MalformedArchive(reason)
    }
}

/// Why an archive was rejected. `line` values are 1-based header line numbers.
#[derive(Debug, Display, PartialEq, Eq, Clone)]
pub enum MalformedArchive {
    #[display(fmt = "the code table delimiter was not found")]
    MissingDelimiter,

    #[display(fmt = "line {} is not of the form `<code> <symbol>`", line)]
    InvalidTableLine { line: usize },

    #[display(fmt = "line {} has a code that is not a non-empty string of 0s and 1s", line)]
    InvalidCode { line: usize },

    #[display(fmt = "line {} has an unknown symbol token", line)]
    UnknownSymbolToken { line: usize },

    #[display(fmt = "the code on line {} conflicts with an earlier code", line)]
    ConflictingCode { line: usize },

    #[display(fmt = "the bit count line is missing")]
    MissingBitCount,

    #[display(fmt = "the bit count is not a valid number")]
    InvalidBitCount,

    #[display(
        fmt = "the bit count {} exceeds the {} bits of payload",
        bit_count,
        payload_bits
    )]
    BitCountExceedsPayload { bit_count: usize, payload_bits: usize },

    #[display(fmt = "no code matches the bits ending at offset {}", bit_offset)]
    UnknownCodePath { bit_offset: usize },

    #[display(fmt = "the payload ends in the middle of a code")]
    TruncatedCode,
}
