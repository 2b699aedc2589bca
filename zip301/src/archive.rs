use bit_vec::BitVec;
use log::debug;

use crate::{
    bits::PackedBits,
    error::MalformedArchive,
    prefix_code_table::{code_to_string, CodeTable},
    trie::{CodeConflict, DecodeTrie},
    whitespace::{symbol_decoding, symbol_encoding},
};

pub const HEADER_END_INDICATION: &[u8] = b"*****";

/// Archive contents after the header has been read.
#[derive(Debug)]
pub struct ParsedArchive<'a> {
    pub trie: DecodeTrie,
    pub bit_count: usize,
    pub payload: &'a [u8],
}

/// Lays out the code table, the delimiter, the bit count and the payload.
/// `codes` is `None` for empty content, which leaves the table section empty.
pub fn write_archive(codes: Option<&CodeTable>, packed: &PackedBits) -> Vec<u8> {
    let mut archive = Vec::with_capacity(packed.bytes.len() + 64);

    for (symbol, code) in codes.iter().flat_map(|codes| codes.iter()) {
        archive.extend_from_slice(code_to_string(code).as_bytes());
        archive.push(b' ');
        archive.extend(symbol_encoding(symbol));
        archive.push(b'\n');
    }

    archive.extend_from_slice(HEADER_END_INDICATION);
    archive.push(b'\n');
    archive.extend_from_slice(packed.bit_count.to_string().as_bytes());
    archive.push(b'\n');
    archive.extend_from_slice(&packed.bytes);

    archive
}

pub fn read_archive(archive: &[u8]) -> Result<ParsedArchive<'_>, MalformedArchive> {
    let mut trie = DecodeTrie::new();
    let mut rest = archive;
    let mut line_number = 0;

    loop {
        let (line, remaining) = next_line(rest).ok_or(MalformedArchive::MissingDelimiter)?;
        rest = remaining;
        line_number += 1;

        if line == HEADER_END_INDICATION {
            break;
        }

        let (code, symbol) = read_table_line(line, line_number)?;
        trie.insert(&code, symbol)
            .map_err(|CodeConflict| MalformedArchive::ConflictingCode { line: line_number })?;
    }

    let (bit_count, payload) = next_line(rest).ok_or(MalformedArchive::MissingBitCount)?;
    let bit_count = std::str::from_utf8(bit_count)
        .ok()
        .and_then(|bit_count| bit_count.trim().parse::<usize>().ok())
        .ok_or(MalformedArchive::InvalidBitCount)?;

    let payload_bits = payload.len().saturating_mul(8);
    if bit_count > payload_bits {
        return Err(MalformedArchive::BitCountExceedsPayload {
            bit_count,
            payload_bits,
        });
    }

    debug!(
        "read {} table lines into a trie of {} nodes, {} bits of payload",
        line_number - 1,
        trie.node_count(),
        bit_count
    );

    Ok(ParsedArchive {
        trie,
        bit_count,
        payload,
    })
}

fn next_line(content: &[u8]) -> Option<(&[u8], &[u8])> {
    let end = content.iter().position(|&byte| byte == b'\n')?;
    Some((&content[..end], &content[end + 1..]))
}

fn read_table_line(line: &[u8], line_number: usize) -> Result<(BitVec, u8), MalformedArchive> {
    let separator = line
        .iter()
        .position(|&byte| byte == b' ')
        .ok_or(MalformedArchive::InvalidTableLine { line: line_number })?;
    let (code, token) = (&line[..separator], &line[separator + 1..]);

    if code.is_empty() || !code.iter().all(|byte| matches!(byte, b'0' | b'1')) {
        return Err(MalformedArchive::InvalidCode { line: line_number });
    }
    let code = code.iter().map(|&byte| byte == b'1').collect();

    let symbol = symbol_decoding(token)
        .ok_or(MalformedArchive::UnknownSymbolToken { line: line_number })?;

    Ok((code, symbol))
}
