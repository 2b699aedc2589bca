use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "zip";

/// `notes.txt` becomes `notes.<extension>301`, next to the source file.
pub fn archive_path(source: impl AsRef<Path>, extension: &str) -> PathBuf {
    source.as_ref().with_extension(format!("{extension}301"))
}

/// `notes.zip301` becomes `notes2.txt`, next to the archive.
pub fn decompressed_path(archive: impl AsRef<Path>) -> PathBuf {
    let archive = archive.as_ref();
    let mut file_name = archive.file_stem().unwrap_or_default().to_os_string();
    file_name.push("2.txt");
    archive.with_file_name(file_name)
}
