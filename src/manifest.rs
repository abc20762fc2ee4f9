//! SHA256SUMS manifest parsing.
//!
//! A manifest is plain text with one `<hex digest><whitespace><filename>`
//! pair per line. Lines that do not split into two fields are skipped.

/// One digest/filename pair from a manifest. Transient; nothing outlives
/// the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumRecord {
    pub digest: String,
    pub filename: String,
}

/// Parses manifest text into records, keeping input order.
pub fn parse(text: &str) -> Vec<ChecksumRecord> {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let digest = fields.next()?;
            let filename = fields.next()?;
            if !is_hex_digest(digest) {
                return None;
            }
            Some(ChecksumRecord {
                digest: digest.to_string(),
                filename: filename.to_string(),
            })
        })
        .collect()
}

/// Finds the digest for an exact filename match. `debian-…-netinst.iso`
/// must not match `debian-…-netinst.cd` or any other near-miss.
pub fn digest_for(text: &str, filename: &str) -> Option<String> {
    parse(text)
        .into_iter()
        .find(|record| record.filename == filename)
        .map(|record| record.digest)
}

fn is_hex_digest(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}
