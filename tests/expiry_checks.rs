//! Expiration sweep behavior against scripted certutil output.

mod common;

use common::ScriptedRunner;
use ipa_cert_health::CertDatabase;

const DB: &str = "/etc/pki/pki-tomcat/alias";

const LISTING: &str = "\
Certificate Nickname                                         Trust Attributes
                                                             SSL,S/MIME,JAR/XPI

Server-Cert cert-pki-ca                                      u,u,u
subsystemCert cert-pki-ca                                    u,u,u
";

// Valid until 2038; expired since 2000.
const FRESH_DETAIL: &str = "\
        Validity:
            Not Before: Wed Jan 01 12:00:00 2020
            Not After : Tue Jan 19 03:14:07 2038
";
const STALE_DETAIL: &str = "\
        Validity:
            Not Before: Thu Jan 01 00:00:00 1998
            Not After : Sat Jan 01 00:00:00 2000
";

#[test]
fn sweep_reports_each_certificate_in_listing_order() {
    let runner = ScriptedRunner::new()
        .on(&format!("certutil -d {} -L", DB), LISTING)
        .on(
            &format!("certutil -d {} -L -n Server-Cert cert-pki-ca", DB),
            FRESH_DETAIL,
        )
        .on(
            &format!("certutil -d {} -L -n subsystemCert cert-pki-ca", DB),
            STALE_DETAIL,
        );
    let db = CertDatabase::with_runner(runner);

    let statuses = db.certs_expired(DB).unwrap();

    assert_eq!(
        statuses,
        vec![
            ("Server-Cert cert-pki-ca".to_string(), true),
            ("subsystemCert cert-pki-ca".to_string(), false),
        ]
    );
}

#[test]
fn sweep_treats_missing_not_after_as_expired() {
    let runner = ScriptedRunner::new()
        .on(&format!("certutil -d {} -L", DB), "Orphan-Cert    u,u,u\n")
        .on(
            &format!("certutil -d {} -L -n Orphan-Cert", DB),
            "certificate detail with no validity section\n",
        );
    let db = CertDatabase::with_runner(runner);

    let statuses = db.certs_expired(DB).unwrap();
    assert_eq!(statuses, vec![("Orphan-Cert".to_string(), false)]);
}

#[test]
fn sweep_over_empty_database_is_empty() {
    let runner = ScriptedRunner::new().on(
        &format!("certutil -d {} -L", DB),
        "Certificate Nickname                                         Trust Attributes\n",
    );
    let db = CertDatabase::with_runner(runner);

    assert!(db.certs_expired(DB).unwrap().is_empty());
}
