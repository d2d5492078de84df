//! Certificate store auditing for FreeIPA-style deployments.
//!
//! Shells out to `certutil` and `getcert`, turns their line-oriented output
//! into structured records, and evaluates a CSV-declared certificate policy
//! (location, trust flags, renewal tracking) against the live store. The tool
//! only inspects and reports; it never modifies certificates or the renewal
//! daemon.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod exec;
pub mod kra;
pub mod monitor;
pub mod nssdb;
pub mod parser;
pub mod policy;
pub mod settings;

pub use error::{AuditError, Result};
pub use exec::{CommandRunner, SystemRunner};
pub use kra::{check_kra_setup, KraReadiness};
pub use monitor::CertmongerClient;
pub use nssdb::CertDatabase;
pub use policy::{load_policy, PolicyChecker, PolicyRow, Verdict, Violation};

/// One certificate as listed by `certutil -L`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertRecord {
    /// Certificate nickname; may contain internal whitespace.
    pub name: String,
    /// Compact trust-flag token, e.g. `u,u,u`.
    pub trust_flags: String,
}

/// One certificate tracked for renewal by certmonger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredCert {
    /// Value of the `certificate:` field of a `getcert list` entry.
    pub certificate: String,
}
