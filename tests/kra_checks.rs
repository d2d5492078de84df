//! KRA readiness flag independence.

mod common;

use std::path::Path;

use common::ScriptedRunner;
use ipa_cert_health::{check_kra_setup, CertDatabase};

const CERT_DB: &str = "/etc/pki/pki-tomcat/alias";

const LISTING_WITH_KRA: &str = "\
transportCert cert-pki-kra                                   u,u,u
auditSigningCert cert-pki-ca                                 u,u,Pu
";

const LISTING_WITHOUT_KRA: &str = "\
Server-Cert cert-pki-ca                                      u,u,u
";

fn db_with_listing(listing: &str) -> CertDatabase<ScriptedRunner> {
    let runner = ScriptedRunner::new().on(&format!("certutil -d {} -L", CERT_DB), listing);
    CertDatabase::with_runner(runner)
}

#[test]
fn both_flags_set_when_dir_and_cert_present() {
    let kra_dir = tempfile::tempdir().unwrap();
    let db = db_with_listing(LISTING_WITH_KRA);

    let readiness = check_kra_setup(&db, kra_dir.path(), CERT_DB).unwrap();

    assert!(readiness.kra_in_expected_path);
    assert!(readiness.kra_cert_present);
}

#[test]
fn both_flags_clear_when_dir_and_cert_absent() {
    let db = db_with_listing(LISTING_WITHOUT_KRA);

    let readiness =
        check_kra_setup(&db, Path::new("/nonexistent/kra/dir"), CERT_DB).unwrap();

    assert!(!readiness.kra_in_expected_path);
    assert!(!readiness.kra_cert_present);
}

#[test]
fn flags_are_independent() {
    // Directory present, certificate absent.
    let kra_dir = tempfile::tempdir().unwrap();
    let db = db_with_listing(LISTING_WITHOUT_KRA);
    let readiness = check_kra_setup(&db, kra_dir.path(), CERT_DB).unwrap();
    assert!(readiness.kra_in_expected_path);
    assert!(!readiness.kra_cert_present);

    // Directory absent, certificate present.
    let db = db_with_listing(LISTING_WITH_KRA);
    let readiness =
        check_kra_setup(&db, Path::new("/nonexistent/kra/dir"), CERT_DB).unwrap();
    assert!(!readiness.kra_in_expected_path);
    assert!(readiness.kra_cert_present);
}

#[test]
fn marker_match_is_case_insensitive() {
    let db = db_with_listing("storageCert cert-pki-KRA    u,u,u\n");
    let readiness =
        check_kra_setup(&db, Path::new("/nonexistent/kra/dir"), CERT_DB).unwrap();
    assert!(readiness.kra_cert_present);
}

#[test]
fn a_file_at_the_kra_path_is_not_an_install() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let db = db_with_listing(LISTING_WITH_KRA);

    let readiness = check_kra_setup(&db, file.path(), CERT_DB).unwrap();
    assert!(!readiness.kra_in_expected_path);
}
