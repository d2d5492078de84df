//! Well-known tool names and default paths.

/// NSS certificate database tool.
pub const CERTUTIL: &str = "certutil";

/// Certmonger query tool.
pub const GETCERT: &str = "getcert";

/// Where the key-recovery subsystem directory should be found.
pub const KRA_DEFAULT_DIR: &str = "/var/lib/pki/pki-tomcat/kra";

/// Certificate database holding the key-recovery subsystem certificate.
pub const KRA_DEFAULT_CERT_DB: &str = "/etc/pki/pki-tomcat/alias";

/// Default policy file checked by `check-certs-policy`.
pub const DEFAULT_POLICY_FILE: &str = "certs_list.csv";
