// Header lines are `<code> <symbol>\n`, so whitespace symbols are written as
// keywords instead of the raw byte.

pub fn symbol_encoding(symbol: u8) -> Vec<u8> {
    match symbol {
        b'\n' => b"newline".to_vec(),
        b'\r' => b"return".to_vec(),
        b'\t' => b"tab".to_vec(),
        b' ' => b"space".to_vec(),
        byte => vec![byte],
    }
}

/// `None` when the token is neither a keyword nor a single byte.
pub fn symbol_decoding(token: &[u8]) -> Option<u8> {
    match token {
        b"newline" => Some(b'\n'),
        b"return" => Some(b'\r'),
        b"tab" => Some(b'\t'),
        b"space" => Some(b' '),
        [byte] => Some(*byte),
        _ => None,
    }
}
