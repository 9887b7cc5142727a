use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum transcript size: 64MB
const MAX_TRANSCRIPT_BYTES: u64 = 64 * 1024 * 1024;

/// Read an exported transcript as UTF-8 text
///
/// The size check runs on the open handle so the file cannot change between the check
/// and the read.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or its metadata read
/// - The file is larger than 64MB
/// - The content is not valid UTF-8
pub fn read_transcript(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open transcript: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut raw = String::new();
    file.read_to_string(&mut raw)
        .with_context(|| format!("Transcript is not valid UTF-8 text: {}", path.display()))?;
    Ok(raw)
}

/// Validates that a file's size is within acceptable limits (64MB)
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the file is too large.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_TRANSCRIPT_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_TRANSCRIPT_BYTES
        );
    }

    Ok(())
}
