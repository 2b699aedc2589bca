pub mod archive;
pub mod bits;
pub mod encode_decode;
pub mod error;
pub mod frequency;
pub mod paths;
pub mod prefix_code_table;
pub mod trie;
mod whitespace;

pub use encode_decode::{compress, compress_file, decompress, decompress_file};
pub use error::{CodecError, MalformedArchive};
