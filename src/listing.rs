//! Directory index scraping.
//!
//! The mirror serves a fancy-index HTML page where each entry is an anchor
//! inside a `<td class="indexcolname">` cell. That markup coupling is fragile,
//! so it stays behind [`DirectoryIndex`]; callers only see "URL in, entry
//! names out".

use crate::error::PinError;
use crate::fetch::{self, Timeouts};
use regex::Regex;

/// Lists directory entries published at a URL.
pub trait DirectoryIndex {
    fn entries(&self, url: &str) -> Result<Vec<String>, PinError>;
}

/// Production index reader: one GET, then href extraction from the
/// known table markup.
pub struct HtmlIndex {
    timeouts: Timeouts,
    /// Matches the anchor inside an `indexcolname` cell and captures its href.
    href_re: Regex,
}

impl HtmlIndex {
    pub fn new(timeouts: Timeouts) -> Self {
        Self {
            timeouts,
            href_re: Regex::new(r#"<td\s+class="indexcolname"\s*>\s*<a\s+href="([^"]*)""#).unwrap(),
        }
    }

    /// Extracts entry names in document order. Cells of other classes
    /// (last-modified, size, description) are ignored.
    fn scrape(&self, html: &str) -> Vec<String> {
        self.href_re
            .captures_iter(html)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

impl DirectoryIndex for HtmlIndex {
    fn entries(&self, url: &str) -> Result<Vec<String>, PinError> {
        let html = fetch::get_text(url, self.timeouts)?;
        let entries = self.scrape(&html);
        tracing::debug!("index at {} lists {} entries", url, entries.len());
        Ok(entries)
    }
}
