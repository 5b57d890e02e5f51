use std::path::PathBuf;

/// Errors raised by an [`InputSource`](super::InputSource)
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The input could not be read as UTF-8 text
    #[error("Error reading file {}: {source}", path.display())]
    Read {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be listed
    #[error("Error listing directory {}: {source}", path.display())]
    ListDir {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
