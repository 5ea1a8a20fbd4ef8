use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::error::{ComposeError, ComposeResult};

/// Bytes inspected by the binary heuristic.
const BINARY_SNIFF_LEN: u64 = 512;

/// Read a referenced text file.
pub fn read_text_file(path: &Path) -> ComposeResult<String> {
    match fs::metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ComposeError::FileNotFound {
                file: path.to_path_buf(),
            });
        }
        _ => {}
    }

    if is_binary_file(path) {
        return Err(ComposeError::BinaryFile {
            file: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| ComposeError::FileRead {
        file: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// A file is binary when its first 512 bytes contain a NUL.
///
/// Open and read failures count as "not binary" so the full read that
/// follows reports the real I/O error.
pub fn is_binary_file(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut head = Vec::with_capacity(BINARY_SNIFF_LEN as usize);
    match file.take(BINARY_SNIFF_LEN).read_to_end(&mut head) {
        Ok(_) => head.contains(&0),
        Err(_) => false,
    }
}
