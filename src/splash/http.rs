//! SPLASH calculation through the public Fiehn lab web service.
//!
//! Only available with the `splash-http` feature.

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use super::{spectrum_string, SplashCalculator, SplashError, DEFAULT_SPLASH_URL};
use crate::record::PeakPoint;

#[derive(Debug, Deserialize)]
struct SplashResponse {
    #[serde(default)]
    splash: Option<String>,
}

/// Computes SPLASH values by POSTing the spectrum to a SPLASH service
#[derive(Debug, Clone)]
pub struct HttpSplashCalculator {
    client: Client,
    url: String,
}

impl Default for HttpSplashCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSplashCalculator {
    /// Client for the public service
    pub fn new() -> Self {
        Self::with_url(DEFAULT_SPLASH_URL)
    }

    /// Client for a service at `url`
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Endpoint the spectrum is sent to
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SplashCalculator for HttpSplashCalculator {
    async fn calculate(&self, peaks: &[PeakPoint]) -> Result<String, SplashError> {
        let spectrum = spectrum_string(peaks);
        debug!("Requesting SPLASH for {} peaks from {}", peaks.len(), self.url);

        let response = self
            .client
            .post(&self.url)
            .form(&[("spectrum", spectrum)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SplashError::Status(response.status().as_u16()));
        }

        let body: SplashResponse = response.json().await?;
        match body.splash {
            Some(splash) if !splash.is_empty() => Ok(splash),
            _ => Err(SplashError::Empty),
        }
    }
}
