/// Failures inside a SPLASH calculator.
///
/// These never escape [`SplashVerifier`](super::SplashVerifier); it treats
/// every one of them as "verification skipped".
#[derive(Debug, thiserror::Error)]
pub enum SplashError {
    /// Transport or decoding failure talking to the SPLASH service
    #[cfg(feature = "splash-http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("SPLASH API error: status {0}")]
    Status(u16),

    /// The calculator produced no checksum
    #[error("SPLASH calculator returned an empty value")]
    Empty,
}
