//! Declarative certificate policy evaluation.
//!
//! A policy is a `;`-delimited CSV with header columns `path`, `name`,
//! `flags` and `certmonger`. The engine walks rows in order and stops at the
//! first violation; violations are expected outcomes, reported as values
//! rather than errors.

use std::io::Read;

use serde::{Deserialize, Deserializer};
use tracing::{error, info};

use crate::error::Result;
use crate::exec::CommandRunner;
use crate::monitor::CertmongerClient;
use crate::nssdb::CertDatabase;
use crate::{CertRecord, MonitoredCert};

/// One row of the policy file: where a certificate must live, what trust
/// flags it must carry, and whether certmonger must be tracking it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyRow {
    pub path: String,
    pub name: String,
    pub flags: String,
    #[serde(deserialize_with = "literal_true")]
    pub certmonger: bool,
}

// The policy file spells the tracking requirement as the literal string
// `True`; any other value reads as not required.
fn literal_true<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(value == "True")
}

/// Load policy rows from `;`-delimited CSV data with a header line.
pub fn load_policy(data: impl Read) -> Result<Vec<PolicyRow>> {
    let mut rows = Vec::new();

    for row in csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_reader(data)
        .into_deserialize()
    {
        rows.push(row?);
    }

    Ok(rows)
}

/// Why a policy run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Certificate is missing from the database it should live in.
    NotFound { path: String, name: String },
    /// Certificate exists but carries different trust flags.
    WrongFlags {
        path: String,
        name: String,
        expected: String,
        actual: String,
    },
    /// Certificate is not tracked for renewal by certmonger.
    NotMonitored { path: String, name: String },
}

/// Outcome of one policy evaluation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every row was satisfied.
    Satisfied,
    /// Evaluation stopped at the first violated row.
    Violated(Violation),
}

impl Verdict {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Verdict::Satisfied)
    }
}

/// Fail-fast policy engine over an NSS database and the certmonger registry.
///
/// The listing for a database path is fetched once per consecutive group of
/// rows naming that path. Precondition: rows are grouped by `path`; the
/// engine does not re-sort them, and ungrouped input only costs extra
/// listings, never wrong answers per row.
pub struct PolicyChecker<'a, D, M> {
    db: &'a CertDatabase<D>,
    monitor: &'a CertmongerClient<M>,
}

impl<'a, D: CommandRunner, M: CommandRunner> PolicyChecker<'a, D, M> {
    pub fn new(db: &'a CertDatabase<D>, monitor: &'a CertmongerClient<M>) -> Self {
        Self { db, monitor }
    }

    /// Evaluate rows in order, stopping at the first violation.
    ///
    /// The certmonger tracking list is fetched at most once per run, lazily,
    /// the first time a row requires it. An empty row set is satisfied.
    pub fn evaluate(&self, rows: &[PolicyRow]) -> Result<Verdict> {
        let mut current_path: Option<&str> = None;
        let mut listing: Vec<CertRecord> = Vec::new();
        let mut tracked: Option<Vec<MonitoredCert>> = None;

        for row in rows {
            if current_path != Some(row.path.as_str()) {
                listing = self.db.list_certs(&row.path)?;
                current_path = Some(row.path.as_str());
            }

            // Duplicate nicknames are tolerated; the first listed wins.
            let Some(found) = listing.iter().find(|cert| cert.name == row.name) else {
                error!(
                    "Certificate \"{}\" not found in database {}",
                    row.name, row.path
                );
                return Ok(Verdict::Violated(Violation::NotFound {
                    path: row.path.clone(),
                    name: row.name.clone(),
                }));
            };

            if found.trust_flags != row.flags {
                error!(
                    "Certificate \"{}\" in {} has trust flags \"{}\", expected \"{}\"",
                    row.name, row.path, found.trust_flags, row.flags
                );
                return Ok(Verdict::Violated(Violation::WrongFlags {
                    path: row.path.clone(),
                    name: row.name.clone(),
                    expected: row.flags.clone(),
                    actual: found.trust_flags.clone(),
                }));
            }

            if row.certmonger {
                if tracked.is_none() {
                    tracked = Some(self.monitor.tracked_certs()?);
                }
                let registry = tracked.as_deref().unwrap_or_default();

                let is_monitored = registry
                    .iter()
                    .any(|entry| entry.certificate.contains(row.name.as_str()));

                if !is_monitored {
                    error!(
                        "Certificate \"{}\" from {} is not tracked for renewal by certmonger",
                        row.name, row.path
                    );
                    return Ok(Verdict::Violated(Violation::NotMonitored {
                        path: row.path.clone(),
                        name: row.name.clone(),
                    }));
                }
            }
        }

        info!("Certificates checked successfully.");
        Ok(Verdict::Satisfied)
    }
}
