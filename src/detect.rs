use std::path::Path;

/// Supported compression formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
}

impl Compression {
    /// Returns true when the input is compressed.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use gtf2bed::detect::Compression;
    ///
    /// assert!(Compression::Gzip.is_compressed());
    /// assert!(!Compression::None.is_compressed());
    /// ```
    pub fn is_compressed(self) -> bool {
        !matches!(self, Compression::None)
    }
}

/// Detects compression from the last file extension.
///
/// `.gz` selects gzip and `.bz2` selects bzip2; anything else, including
/// no extension at all, is read as plain text. The annotation dialect is
/// never inferred from the name.
///
/// # Example
///
/// ```rust, ignore
/// use gtf2bed::detect::{detect_compression, Compression};
/// use std::path::Path;
///
/// assert_eq!(detect_compression(Path::new("file.gtf.gz")), Compression::Gzip);
/// ```
pub fn detect_compression(path: &Path) -> Compression {
    extension_lowercase(path)
        .as_deref()
        .and_then(compression_from_extension)
        .unwrap_or(Compression::None)
}

/// Extracts the lowercase extension from a path.
fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Maps an extension (without the dot) to its compression.
fn compression_from_extension(ext: &str) -> Option<Compression> {
    match ext {
        "gz" | "gzip" => Some(Compression::Gzip),
        "bz2" | "bzip2" => Some(Compression::Bzip2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lowercase() {
        assert_eq!(
            extension_lowercase(Path::new("file.GZ")),
            Some("gz".to_string())
        );
        assert_eq!(extension_lowercase(Path::new("file")), None);
    }

    #[test]
    fn test_is_compressed() {
        assert!(Compression::Bzip2.is_compressed());
        assert!(!Compression::None.is_compressed());
    }
}
