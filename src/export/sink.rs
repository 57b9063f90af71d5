//! Output file naming and writing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::IifError;

/// File extension of IIF files.
pub const IIF_EXTENSION: &str = "iif";

/// Normalize a target filename to end in `.iif`.
///
/// The final path component is split on its last `.`: the segment after it
/// is replaced by `iif`, or `.iif` is appended when there is no dot.
/// Directories in the path are left untouched.
///
/// ```
/// use iif::export::iif_path;
///
/// assert_eq!(iif_path("test").to_str(), Some("test.iif"));
/// assert_eq!(iif_path("test.ii").to_str(), Some("test.iif"));
/// ```
pub fn iif_path(filename: impl AsRef<Path>) -> PathBuf {
    let path = filename.as_ref();
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        let mut owned = path.as_os_str().to_owned();
        owned.push(".");
        owned.push(IIF_EXTENSION);
        return PathBuf::from(owned);
    };

    let normalized = match name.rsplit_once('.') {
        Some((stem, _)) => format!("{stem}.{IIF_EXTENSION}"),
        None => format!("{name}.{IIF_EXTENSION}"),
    };
    path.with_file_name(normalized)
}

/// Write IIF content to `filename` (normalized with [`iif_path`]),
/// replacing any existing file. Returns the path written.
pub fn write_iif(content: &[u8], filename: impl AsRef<Path>) -> Result<PathBuf, IifError> {
    let path = iif_path(filename);
    fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote IIF file");
    Ok(path)
}
