//! Key-recovery (KRA) subsystem readiness check.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::exec::CommandRunner;
use crate::nssdb::CertDatabase;

/// Substring marking a KRA certificate nickname, matched case-insensitively.
const KRA_MARKER: &str = "kra";

/// Diagnostic summary of the KRA install state. Both flags are always
/// computed; neither gates the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KraReadiness {
    /// The KRA directory exists and is a directory.
    pub kra_in_expected_path: bool,
    /// The certificate database lists a KRA certificate.
    pub kra_cert_present: bool,
}

/// Report whether the KRA subsystem is installed where expected and whether
/// its certificate database holds a KRA certificate.
pub fn check_kra_setup<R: CommandRunner>(
    db: &CertDatabase<R>,
    kra_dir: &Path,
    cert_db_path: &str,
) -> Result<KraReadiness> {
    let kra_in_expected_path = kra_dir.is_dir();

    let kra_cert_present = db
        .list_certs(cert_db_path)?
        .iter()
        .any(|cert| cert.name.to_lowercase().contains(KRA_MARKER));

    info!(
        "KRA is installed: {}. Cert was found: {}",
        kra_in_expected_path, kra_cert_present
    );

    Ok(KraReadiness {
        kra_in_expected_path,
        kra_cert_present,
    })
}
