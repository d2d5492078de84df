//! Certmonger tracking registry reader.

use tracing::debug;

use crate::error::Result;
use crate::exec::{CommandRunner, SystemRunner};
use crate::{parser, settings, MonitoredCert};

/// Client for the certmonger renewal daemon's tracking list.
#[derive(Debug, Clone)]
pub struct CertmongerClient<R = SystemRunner> {
    /// `getcert` executable path (defaults to "getcert").
    pub getcert_path: String,
    runner: R,
}

impl Default for CertmongerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CertmongerClient<SystemRunner> {
    /// Create a client running the system `getcert`.
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl<R: CommandRunner> CertmongerClient<R> {
    /// Create a client over a custom command runner.
    pub fn with_runner(runner: R) -> Self {
        Self {
            getcert_path: settings::GETCERT.to_string(),
            runner,
        }
    }

    /// Certificates currently tracked for automatic renewal.
    pub fn tracked_certs(&self) -> Result<Vec<MonitoredCert>> {
        let output = self.runner.run(&self.getcert_path, &["list"])?;
        let tracked = parser::parse_tracked_certs(&output);
        debug!("Certificates tracked by certmonger: {}", tracked.len());
        Ok(tracked)
    }
}
