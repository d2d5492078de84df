//! NSS certificate database client.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::Result;
use crate::exec::{CommandRunner, SystemRunner};
use crate::{parser, settings, CertRecord};

/// Client for inspecting NSS certificate databases via `certutil`.
///
/// Every operation shells one `certutil` invocation to completion; nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct CertDatabase<R = SystemRunner> {
    /// `certutil` executable path (defaults to "certutil").
    pub certutil_path: String,
    runner: R,
}

impl Default for CertDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl CertDatabase<SystemRunner> {
    /// Create a client running the system `certutil`.
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl<R: CommandRunner> CertDatabase<R> {
    /// Create a client over a custom command runner.
    pub fn with_runner(runner: R) -> Self {
        Self {
            certutil_path: settings::CERTUTIL.to_string(),
            runner,
        }
    }

    /// List the certificates held in the database at `path`.
    pub fn list_certs(&self, path: &str) -> Result<Vec<CertRecord>> {
        let output = self.runner.run(&self.certutil_path, &["-d", path, "-L"])?;
        let certs = parser::parse_cert_listing(&output);
        debug!("Certificates found: {:?}", certs);
        Ok(certs)
    }

    /// Raw detail output for one certificate, addressed by exact nickname.
    pub fn cert_detail(&self, path: &str, name: &str) -> Result<String> {
        self.runner
            .run(&self.certutil_path, &["-d", path, "-L", "-n", name])
    }

    /// Expiration sweep over every certificate in the database at `path`.
    ///
    /// Returns `(name, is_valid)` pairs in listing order. Validity is checked
    /// against the system clock at call time, so results spanning an expiry
    /// boundary are not idempotent.
    pub fn certs_expired(&self, path: &str) -> Result<Vec<(String, bool)>> {
        let mut statuses = Vec::new();

        for cert in self.list_certs(path)? {
            let detail = self.cert_detail(path, &cert.name)?;
            let is_valid = parser::cert_is_valid(&detail, Utc::now().naive_utc());

            info!("Certificate \"{}\" is expired: {}", cert.name, !is_valid);
            statuses.push((cert.name, is_valid));
        }

        Ok(statuses)
    }
}
