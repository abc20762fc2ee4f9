//! CLI for the debpin release pinner.

use crate::config::{self, DebpinConfig};
use crate::listing::HtmlIndex;
use crate::outputs;
use crate::pin;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Resolve the newest archived Debian release and pin its netinst ISO.
#[derive(Debug, Parser)]
#[command(name = "debpin")]
#[command(about = "Pin the newest archived Debian netinst ISO for build tooling", long_about = None)]
pub struct Cli {
    /// Archive index URL to scrape (overrides the configured mirror).
    #[arg(long, value_name = "URL")]
    pub mirror: Option<String>,

    /// Directory the artifact files are written into.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Resolve and print the artifact lines without writing any files.
    #[arg(long)]
    pub print_only: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mirror_url = effective_mirror(self.mirror.as_deref(), &cfg)?;
        let timeouts = cfg.timeouts();
        let index = HtmlIndex::new(timeouts);

        if self.print_only {
            let pinned = pin::pin_latest(&index, &mirror_url, timeouts)?;
            print!("{}", outputs::hash_line(&pinned.digest));
            print!("{}", outputs::vars_line(&pinned.iso_url));
        } else {
            let pinned = pin::pin_and_write(&index, &mirror_url, timeouts, &self.output_dir)?;
            println!("pinned debian {} ({})", pinned.version, pinned.iso_url);
        }
        Ok(())
    }
}

/// Flag wins over config; either way the URL must parse and be http(s).
/// A trailing slash is trimmed so URL joins stay canonical.
fn effective_mirror(flag: Option<&str>, cfg: &DebpinConfig) -> Result<String> {
    let raw = flag.unwrap_or(cfg.mirror_url.as_str());
    let parsed = Url::parse(raw).with_context(|| format!("invalid mirror URL: {raw}"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("mirror URL must be http or https: {raw}");
    }
    Ok(raw.trim_end_matches('/').to_string())
}
