//! Reading text from files and stdin, with a shared size cap.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Largest accepted input, applied to files and stdin alike.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads from the given file, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    path.map_or_else(read_stdin, read_file)
}

/// Reads a whole file as UTF-8, rejecting files over [`MAX_INPUT_SIZE`].
pub fn read_file(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to access file: {}", path.display()))?;

    let size = metadata.len() as usize;
    if size > MAX_INPUT_SIZE {
        bail!(
            "Input size ({:.1} MB) exceeds the maximum allowed size (1 MB).\n\n\
             Consider splitting the file into smaller parts.",
            size as f64 / 1024.0 / 1024.0
        );
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

#[allow(clippy::significant_drop_tightening)]
fn read_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];
    let mut stdin = io::stdin().lock();

    loop {
        let bytes_read = stdin
            .read(&mut chunk)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..bytes_read]);

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} MB) exceeds the maximum allowed size (1 MB).\n\n\
                 Consider splitting the input into smaller parts.",
                buffer.len() as f64 / 1024.0 / 1024.0
            );
        }
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}
