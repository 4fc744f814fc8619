//! Client-side operations behind the `9de` subcommands

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;
use ui9_config::{keys, ConfigSnapshot, ConfigWriter};
use ui9_ctl::{Client, CtlError};

/// Send `words` as one control command and return the reply line.
pub fn ctl(client: &Client, words: &[String]) -> Result<String> {
    client
        .ctl(&words.join(" "))
        .with_context(|| format!("Failed to reach {}", client.path().display()))
}

/// Whether a reply line reports a rejected command.
pub fn is_rejection(reply: &str) -> bool {
    reply.starts_with("err ")
}

pub fn status(client: &Client, json: bool) -> Result<String> {
    let status = client
        .status()
        .with_context(|| format!("Failed to reach {}", client.path().display()))?;
    if json {
        Ok(status.to_json()?)
    } else {
        Ok(status.to_text())
    }
}

/// Copy event lines to `out` until the service hangs up.
pub fn events(client: &Client, out: &mut dyn Write) -> Result<()> {
    let stream = client
        .events()
        .with_context(|| format!("Failed to reach {}", client.path().display()))?;
    for line in stream {
        let line = match line {
            Ok(line) => line,
            Err(CtlError::Busy) => bail!("another events reader is already attached"),
            Err(e) => return Err(e.into()),
        };
        writeln!(out, "{line}")?;
        out.flush()?;
    }
    Ok(())
}

fn known(key: &str) -> Result<()> {
    if !keys::is_known(key) {
        bail!("unknown config key `{key}`");
    }
    Ok(())
}

/// Resolved value of `key`; empty when unset.
pub fn config_get(cfg: &ConfigSnapshot, key: &str) -> Result<String> {
    known(key)?;
    Ok(cfg.get(key).unwrap_or_default())
}

/// Rewrite `key` in the file at `path`, keeping every other line.
pub fn config_set(path: &Path, key: &str, value: &str) -> Result<()> {
    known(key)?;
    ConfigWriter::open(path)?
        .set(key, value)
        .commit()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(key, value, path = %path.display(), "config updated");
    Ok(())
}

pub fn config_show(cfg: &ConfigSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(cfg)?)
}

/// Ask running surfaces to reload. A missing service is not an error.
pub fn request_reload(client: &Client) -> Option<String> {
    match client.ctl("reload") {
        Ok(reply) => Some(reply),
        Err(e) => {
            tracing::debug!(socket = %client.path().display(), "reload not sent: {e}");
            None
        }
    }
}
