use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::debug;

use crate::{
    archive::{read_archive, write_archive},
    bits::{pack, BitReader, PackedBits},
    error::CodecError,
    frequency::FrequencyTable,
    paths::{archive_path, decompressed_path},
    prefix_code_table::CodeTable,
};

/// Compresses `content` into a self-describing archive.
pub fn compress(content: &[u8]) -> Vec<u8> {
    let frequencies = FrequencyTable::new(content);
    let codes = match CodeTable::from_frequencies(&frequencies) {
        Some(codes) => codes,
        None => {
            let empty = PackedBits {
                bytes: Vec::new(),
                bit_count: 0,
            };
            return write_archive(None, &empty);
        }
    };

    let packed = pack(&codes, content);
    debug!(
        "{} bytes with {} distinct symbols packed into {} bits",
        frequencies.total(),
        codes.len(),
        packed.bit_count
    );

    write_archive(Some(&codes), &packed)
}

/// Restores the content of an archive produced by [`compress`].
pub fn decompress(archive: &[u8]) -> Result<Vec<u8>, CodecError> {
    let parsed = read_archive(archive)?;
    let mut reader = BitReader::new(parsed.payload);
    let content = parsed.trie.decode(&mut reader, parsed.bit_count)?;
    Ok(content)
}

/// Reads `source`, writes its archive next to it and returns the archive path.
pub fn compress_file(source: impl AsRef<Path>, extension: &str) -> anyhow::Result<PathBuf> {
    let source = source.as_ref();
    let content = fs::read(source)
        .with_context(|| format!("Error opening file: {}", source.display()))?;

    let output = archive_path(source, extension);
    fs::write(&output, compress(&content))
        .with_context(|| format!("Error writing file: {}", output.display()))?;

    Ok(output)
}

/// Reads `archive`, writes the restored content next to it and returns that path.
pub fn decompress_file(archive: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
    let archive = archive.as_ref();
    let content = fs::read(archive)
        .with_context(|| format!("Error opening file: {}", archive.display()))?;

    let restored = decompress(&content)
        .with_context(|| format!("Failed to decompress {}", archive.display()))?;

    let output = decompressed_path(archive);
    fs::write(&output, restored)
        .with_context(|| format!("Error writing file: {}", output.display()))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use rstest::rstest;

    use super::{compress, compress_file, decompress, decompress_file};
    use crate::{
        error::{CodecError, MalformedArchive},
        frequency::FrequencyTable,
        prefix_code_table::CodeTable,
    };

    fn all_byte_values() -> Vec<u8> {
        (0..=255u8).collect()
    }

    #[rstest]
    #[case::empty(Vec::new())]
    #[case::single_symbol(b"AAAA".to_vec())]
    #[case::single_byte(vec![0])]
    #[case::frequencies(b"aabbbcc".to_vec())]
    #[case::whitespace(b"line one\r\n\tline two\n  \n".to_vec())]
    #[case::keyword_lookalikes(b"newline return tab space *****\n0\n".to_vec())]
    #[case::all_byte_values(all_byte_values())]
    #[case::lorem(include_bytes!("../tests/lorem.txt").to_vec())]
    fn test_round_trip(#[case] content: Vec<u8>) {
        let archive = compress(&content);
        assert_eq!(decompress(&archive).unwrap(), content);
    }

    #[test]
    fn test_empty_input_gives_table_less_archive() {
        assert_eq!(compress(&[]), b"*****\n0\n");
    }

    #[test]
    fn test_compression_is_deterministic() {
        let content = include_bytes!("../tests/lorem.txt");
        assert_eq!(compress(content), compress(content));
    }

    #[test]
    fn test_bit_count_matches_code_lengths() {
        let content = include_bytes!("../tests/lorem.txt");
        let frequencies = FrequencyTable::new(content);
        let codes = CodeTable::from_frequencies(&frequencies).unwrap();
        let expected_bits: usize = content
            .iter()
            .map(|&byte| codes.get(byte).unwrap().len())
            .sum();
        assert_eq!(codes.encoded_bit_count(&frequencies), expected_bits);

        let archive = compress(content);
        let bit_count_line = format!("*****\n{expected_bits}\n");
        let position = archive
            .windows(bit_count_line.len())
            .position(|window| window == bit_count_line.as_bytes())
            .unwrap();
        let payload = &archive[position + bit_count_line.len()..];
        assert_eq!(payload.len(), (expected_bits + 7) / 8);
    }

    #[test]
    fn test_missing_delimiter_is_rejected() {
        let archive = compress(b"aabbbcc");
        let delimiter = archive
            .windows(5)
            .position(|window| window == b"*****")
            .unwrap();

        assert_eq!(
            decompress(&archive[..delimiter]),
            Err(CodecError::MalformedArchive(
                MalformedArchive::MissingDelimiter
            ))
        );

        let without_delimiter: Vec<u8> = archive
            .split(|&byte| byte == b'\n')
            .filter(|line| *line != b"*****")
            .collect::<Vec<_>>()
            .join(&b'\n');
        assert!(matches!(
            decompress(&without_delimiter),
            Err(CodecError::MalformedArchive(_))
        ));
    }

    #[test]
    fn test_corrupted_table_is_rejected() {
        let archive = b"0 a\n10 b\n*****\n3\n\xe0";
        assert_eq!(
            decompress(archive),
            Err(CodecError::MalformedArchive(
                MalformedArchive::UnknownCodePath { bit_offset: 1 }
            ))
        );
    }

    #[test]
    fn test_files_round_trip() {
        let dir = env::temp_dir().join(format!("zip301-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let source = dir.join("lorem.txt");
        fs::write(&source, include_bytes!("../tests/lorem.txt")).unwrap();

        let archive = compress_file(&source, "zip").unwrap();
        assert_eq!(archive, dir.join("lorem.zip301"));

        let restored = decompress_file(&archive).unwrap();
        assert_eq!(restored, dir.join("lorem2.txt"));
        assert_eq!(
            fs::read(&restored).unwrap(),
            include_bytes!("../tests/lorem.txt")
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_source_is_reported() {
        let missing = env::temp_dir().join("zip301-does-not-exist.txt");
        let err = compress_file(&missing, "zip").unwrap_err();
        assert!(err.to_string().starts_with("Error opening file"));
    }
}
