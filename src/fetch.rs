//! Blocking HTTP GET via libcurl.
//!
//! Two GETs happen per run (mirror index, then manifest); both block the
//! calling thread and fail on non-2xx status.

use crate::error::PinError;
use std::time::Duration;

/// Connect and overall-request deadlines for one GET.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(15),
            request: Duration::from_secs(60),
        }
    }
}

/// Fetches `url` and returns the body as UTF-8 text.
///
/// Follows redirects. Any curl-level failure, non-2xx status, or non-UTF-8
/// body maps to [`PinError::Transport`].
pub fn get_text(url: &str, timeouts: Timeouts) -> Result<String, PinError> {
    let transport = |reason: String| PinError::Transport {
        url: url.to_string(),
        reason,
    };

    let (status, body) = perform_get(url, timeouts).map_err(|e| transport(e.to_string()))?;
    if status < 200 || status >= 300 {
        return Err(transport(format!("HTTP {}", status)));
    }
    tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, status, body.len());

    String::from_utf8(body).map_err(|_| transport("response body is not valid UTF-8".to_string()))
}

fn perform_get(url: &str, timeouts: Timeouts) -> Result<(u32, Vec<u8>), curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(timeouts.connect)?;
    easy.timeout(timeouts.request)?;

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok((status, body))
}
