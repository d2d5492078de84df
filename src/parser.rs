//! Parsers for `certutil` and `getcert` output.
//!
//! All parsers here are total: lines that do not match the expected shape are
//! skipped silently, never reported as errors. The listing tool's banner
//! format is not contractually stable, so omission is the only safe reaction
//! to an unrecognized line.

use chrono::NaiveDateTime;

use crate::{CertRecord, MonitoredCert};

/// Letters NSS uses inside a trust-flag token.
const TRUST_FLAG_CHARS: &str = "pPcCTuwgG";

/// Timestamp format certutil prints for validity fields.
const NOT_AFTER_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Parse `certutil -d <path> -L` output into certificate records.
///
/// Each data line is a nickname (which may contain spaces) followed by
/// whitespace and a trailing trust-flag token. Header, footer and banner
/// lines yield nothing.
pub fn parse_cert_listing(output: &str) -> Vec<CertRecord> {
    output.lines().filter_map(parse_listing_line).collect()
}

fn parse_listing_line(line: &str) -> Option<CertRecord> {
    let (name, flags) = line.trim_end().rsplit_once(char::is_whitespace)?;
    if !is_trust_flag_token(flags) {
        return None;
    }

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some(CertRecord {
        name: name.to_string(),
        trust_flags: flags.to_string(),
    })
}

/// True for tokens like `u,u,u`, `CT,C,C`, `u,u,` or `,,`: exactly three
/// comma-separated groups of NSS trust-flag letters, groups possibly empty.
/// Rejects the `SSL,S/MIME,JAR/XPI` attributes banner, whose groups carry
/// letters outside the flag alphabet.
fn is_trust_flag_token(token: &str) -> bool {
    let groups: Vec<&str> = token.split(',').collect();
    if groups.len() != 3 {
        return false;
    }

    groups
        .iter()
        .all(|group| group.chars().all(|ch| TRUST_FLAG_CHARS.contains(ch)))
}

/// Extract the "Not After" timestamp from certificate detail output.
///
/// Returns `None` when the field is missing or its value does not parse;
/// callers treat that as "not valid" rather than an error.
pub fn parse_not_after(detail: &str) -> Option<NaiveDateTime> {
    for line in detail.lines() {
        let Some((_, rest)) = line.split_once("Not After") else {
            continue;
        };

        let value = rest.trim_start().trim_start_matches(':').trim();
        if let Some(timestamp) = parse_cert_timestamp(value) {
            return Some(timestamp);
        }
    }

    None
}

fn parse_cert_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, NOT_AFTER_FORMAT) {
        return Some(timestamp);
    }

    // Some certutil builds append a timezone name after the year.
    let (rest, _tz) = value.rsplit_once(char::is_whitespace)?;
    NaiveDateTime::parse_from_str(rest.trim_end(), NOT_AFTER_FORMAT).ok()
}

/// Verdict over certificate detail output: `true` iff the "Not After"
/// timestamp lies strictly after `now`. A missing or unparseable field reads
/// as not valid.
pub fn cert_is_valid(detail: &str, now: NaiveDateTime) -> bool {
    parse_not_after(detail).is_some_and(|not_after| not_after > now)
}

/// Parse `getcert list` output into the set of tracked certificates.
///
/// One entry per `certificate:` field line; everything else is skipped.
pub fn parse_tracked_certs(output: &str) -> Vec<MonitoredCert> {
    output
        .lines()
        .filter_map(|line| {
            let value = line.trim().strip_prefix("certificate:")?.trim();
            if value.is_empty() {
                return None;
            }
            Some(MonitoredCert {
                certificate: value.to_string(),
            })
        })
        .collect()
}
