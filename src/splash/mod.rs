//! # SPLASH Verification
//!
//! Checks the `PK$SPLASH` value of a record against a checksum recomputed
//! from its peak list. The calculation itself is a capability
//! ([`SplashCalculator`]) so that the network client stays optional.
//!
//! Verification is time-bounded and fails open: when the calculator errors,
//! returns nothing, or does not answer within the timeout, the record is
//! treated as valid and a warning is logged.
//!
//! ## Example
//!
//! ```rust,ignore
//! use massbank::splash::{HttpSplashCalculator, SplashVerifier};
//!
//! let verifier = SplashVerifier::new(HttpSplashCalculator::new());
//! let ok = verifier.verify(&record).await;
//! ```

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use tokio::time::timeout;

use crate::record::{PeakPoint, Record};
use crate::validator::{ErrorKind, ValidationError};

mod error;
#[cfg(feature = "splash-http")]
mod http;

pub use error::SplashError;
#[cfg(feature = "splash-http")]
pub use http::HttpSplashCalculator;


/// Public SPLASH service endpoint
pub const DEFAULT_SPLASH_URL: &str = "https://splash.fiehnlab.ucdavis.edu/splash/it";

/// Time allowed for one calculation before verification is skipped
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can compute the SPLASH of a peak list
pub trait SplashCalculator: Send + Sync {
    /// SPLASH of `peaks`; an empty or failed result means "unknown"
    fn calculate(
        &self,
        peaks: &[PeakPoint],
    ) -> impl Future<Output = Result<String, SplashError>> + Send;
}

/// Spectrum in the `mz:intensity mz:intensity ...` form used by SPLASH services
pub fn spectrum_string(peaks: &[PeakPoint]) -> String {
    peaks
        .iter()
        .map(|p| format!("{}:{}", p.mz, p.intensity))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result of checking one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashCheck {
    /// No `PK$SPLASH` value or no peaks to check against
    NotApplicable,
    /// The checksum could not be computed; treated as valid
    Skipped(String),
    /// Stored and computed checksums agree
    Match,
    /// Stored and computed checksums differ
    Mismatch {
        /// Value stored in the record
        expected: String,
        /// Value computed from the peaks
        calculated: String,
    },
}

impl SplashCheck {
    /// False only for a confirmed mismatch
    pub fn is_valid(&self) -> bool {
        !matches!(self, SplashCheck::Mismatch { .. })
    }

    /// Validation error for a mismatch, attributed to `source`
    pub fn to_error(&self, source: &str) -> Option<ValidationError> {
        match self {
            SplashCheck::Mismatch {
                expected,
                calculated,
            } => Some(ValidationError::new(
                source,
                ErrorKind::Validation,
                format!(
                    "PK$SPLASH {} does not match calculated SPLASH {}",
                    expected, calculated
                ),
            )),
            _ => None,
        }
    }
}

/// Verifies record checksums with a bounded wait
pub struct SplashVerifier<C: SplashCalculator> {
    calculator: C,
    timeout: Duration,
}

impl<C: SplashCalculator> SplashVerifier<C> {
    /// Verifier using [`DEFAULT_TIMEOUT`]
    pub fn new(calculator: C) -> Self {
        Self {
            calculator,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the time allowed per calculation
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Time allowed per calculation
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check one record
    pub async fn check(&self, record: &Record) -> SplashCheck {
        let expected = match record.peak_data.splash.as_deref() {
            Some(splash) if !splash.is_empty() => splash,
            _ => return SplashCheck::NotApplicable,
        };
        if record.peak_data.peaks.is_empty() {
            return SplashCheck::NotApplicable;
        }

        let points = record.peak_data.points();
        let calculated = match timeout(self.timeout, self.calculator.calculate(&points)).await {
            Ok(Ok(calculated)) if !calculated.is_empty() => calculated,
            Ok(Ok(_)) => {
                warn!("{}: SPLASH calculator returned nothing, skipping", record.accession);
                return SplashCheck::Skipped(SplashError::Empty.to_string());
            }
            Ok(Err(err)) => {
                warn!("{}: SPLASH verification skipped: {}", record.accession, err);
                return SplashCheck::Skipped(err.to_string());
            }
            Err(_) => {
                warn!(
                    "{}: SPLASH verification timed out after {:?}",
                    record.accession, self.timeout
                );
                return SplashCheck::Skipped(format!("timed out after {:?}", self.timeout));
            }
        };

        if calculated == expected {
            debug!("{}: SPLASH verified", record.accession);
            SplashCheck::Match
        } else {
            SplashCheck::Mismatch {
                expected: expected.to_string(),
                calculated,
            }
        }
    }

    /// True unless the stored SPLASH is known to be wrong
    pub async fn verify(&self, record: &Record) -> bool {
        self.check(record).await.is_valid()
    }
}
