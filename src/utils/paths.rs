use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size of an input log: 256MB
const MAX_FILE_SIZE_BYTES: u64 = 256 * 1024 * 1024;

/// File name suffixes stripped from log file names by default
pub const DEFAULT_LOG_SUFFIXES: &[&str] = &[".txt", ".log"];

/// Strips each suffix once, in the given order
///
/// # Examples
///
/// ```
/// use irc_log_html::trim_suffixes;
///
/// assert_eq!(trim_suffixes("#rust.txt", &[".txt", ".log"]), "#rust");
/// assert_eq!(trim_suffixes("#rust.bin", &[".txt", ".log"]), "#rust.bin");
/// ```
pub fn trim_suffixes<'a, S: AsRef<str>>(name: &'a str, suffixes: &[S]) -> &'a str {
    suffixes
        .iter()
        .fold(name, |name, suffix| name.strip_suffix(suffix.as_ref()).unwrap_or(name))
}

/// Derives a channel name from a log file path
///
/// Uses the file's base name with the known suffixes removed. Non-UTF-8 names are
/// converted lossily.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use irc_log_html::channel_name_from_path;
///
/// let name = channel_name_from_path(Path::new("/var/log/irc/#test-channel.txt"), &[".txt"]);
/// assert_eq!(name, "#test-channel");
/// ```
pub fn channel_name_from_path<S: AsRef<str>>(path: &Path, suffixes: &[S]) -> String {
    let base = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    trim_suffixes(&base, suffixes).to_string()
}

/// Validates that a file's size is within acceptable limits (256MB)
///
/// Takes an open file handle so the size check applies to the file that is actually read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 256MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Opens an input log for reading after checking it is a regular file of acceptable size
pub fn open_log_file(path: &Path) -> Result<File> {
    let file =
        File::open(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    validate_file_size(&file, path)?;
    Ok(file)
}
