//! IPA certificate store health checker CLI.
//!
//! # Usage
//!
//! ```bash
//! # List the certificates in an NSS database
//! ipa-cert-health list-certs /etc/pki/pki-tomcat/alias
//!
//! # Report which certificates in a database are expired
//! ipa-cert-health certs-expired /etc/pki/pki-tomcat/alias
//!
//! # Validate locations, trust flags and renewal tracking against a policy file
//! ipa-cert-health check-certs-policy --csv-file certs_list.csv
//!
//! # Verify the key-recovery subsystem install
//! ipa-cert-health check-kra-setup
//! ```

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ipa_cert_health::{
    check_kra_setup, load_policy, settings, CertDatabase, CertmongerClient, PolicyChecker,
};

/// Health checker for the certificate stores of a FreeIPA deployment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CheckCommand,
}

#[derive(Subcommand, Debug)]
enum CheckCommand {
    /// List the certificates in an NSS database
    ListCerts {
        /// NSS certificate database path
        path: String,
    },
    /// Report expiration status for every certificate in an NSS database
    CertsExpired {
        /// NSS certificate database path
        path: String,
    },
    /// Validate certificate locations, trust flags and renewal tracking
    CheckCertsPolicy {
        /// Policy file with path, name, flags and certmonger columns
        #[arg(long, default_value = settings::DEFAULT_POLICY_FILE)]
        csv_file: PathBuf,
    },
    /// Verify the key-recovery subsystem install
    CheckKraSetup {
        /// Where the KRA directory should be found
        #[arg(long, default_value = settings::KRA_DEFAULT_DIR)]
        dir: PathBuf,
        /// Certificate database holding the KRA certificate
        #[arg(long, default_value = settings::KRA_DEFAULT_CERT_DB)]
        cert: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let db = CertDatabase::new();

    match cli.command {
        CheckCommand::ListCerts { path } => {
            for cert in db.list_certs(&path)? {
                println!("{}  {}", cert.name, cert.trust_flags);
            }
        }

        CheckCommand::CertsExpired { path } => {
            for (name, is_valid) in db.certs_expired(&path)? {
                println!("{}  expired: {}", name, !is_valid);
            }
        }

        CheckCommand::CheckCertsPolicy { csv_file } => {
            let file = File::open(&csv_file)
                .with_context(|| format!("Failed to open policy file {}", csv_file.display()))?;
            let rows = load_policy(file)?;

            let monitor = CertmongerClient::new();
            let verdict = PolicyChecker::new(&db, &monitor).evaluate(&rows)?;

            if !verdict.is_satisfied() {
                std::process::exit(1);
            }
        }

        CheckCommand::CheckKraSetup { dir, cert } => {
            check_kra_setup(&db, &dir, &cert)?;
        }
    }

    Ok(())
}
