//! Config rewriting
//!
//! Edits keep every unrelated line byte-for-byte and land on disk through a
//! write-then-rename with one `.bak` kept.

use crate::error::{ConfigError, Result};
use crate::keys;
use crate::value::{normalize_value, strip_comment};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// First line of a freshly created config file.
pub const HEADER: &str = "# 9DE config (name=value only)\n";

/// Replace every effective assignment of `key` with `key=value`, or append
/// one when the key is absent.
///
/// ```rust
/// use ui9_config::set_key;
///
/// let text = "# mine\nui_alpha=100 # old\nui_style=dark\n";
/// assert_eq!(
///     set_key(text, "ui_alpha", "200"),
///     "# mine\nui_alpha=200\nui_style=dark\n"
/// );
/// assert_eq!(set_key("a=1", "b", "2"), "a=1\nb=2\n");
/// ```
pub fn set_key(text: &str, key: &str, value: &str) -> String {
    let mut out = String::with_capacity(text.len() + key.len() + value.len() + 2);
    let mut found = false;

    for line in text.split_inclusive('\n') {
        let body = line.trim_end_matches(['\n', '\r']);
        let matches = strip_comment(body)
            .split_once('=')
            .is_some_and(|(k, _)| k.trim() == key);

        if matches {
            found = true;
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        } else {
            out.push_str(line);
        }
    }

    if !found {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Normalize a list value and wrap it in double quotes.
pub fn quote_list(value: &str) -> String {
    format!("\"{}\"", normalize_value(value))
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Write `contents` to `<path>.new`, rotate the current file to
/// `<path>.bak`, then rename the new file into place.
///
/// Backup rotation is best effort. If the final rename fails the previous
/// contents survive as `<path>.bak`.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = sibling(path, ".new");
    let bak = sibling(path, ".bak");

    let written = fs::File::create(&tmp).and_then(|mut f| {
        f.write_all(contents.as_bytes())?;
        f.sync_all()
    });
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp);
        return Err(ConfigError::Write { path: tmp, source });
    }

    match fs::remove_file(&bak) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %bak.display(), error = %e, "could not remove old backup"),
    }
    if path.exists() {
        if let Err(e) = fs::rename(path, &bak) {
            tracing::warn!(path = %path.display(), error = %e, "could not keep backup");
        }
    }

    fs::rename(&tmp, path).map_err(|source| ConfigError::Replace {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "config written");
    Ok(())
}

/// Batches several [`set_key`] passes over one config file.
#[derive(Clone, Debug)]
pub struct ConfigWriter {
    path: PathBuf,
    text: String,
}

impl ConfigWriter {
    /// Load `path`, or start from [`HEADER`] when it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = match fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HEADER.to_string(),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        Ok(Self { path, text })
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Set `key`; list keys are quoted automatically.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        let value = if keys::is_list(key) {
            quote_list(value)
        } else {
            value.to_string()
        };
        self.text = set_key(&self.text, key, &value);
        self
    }

    pub fn set_int(&mut self, key: &str, value: i32) -> &mut Self {
        self.set(key, &value.to_string())
    }

    pub fn set_flag(&mut self, key: &str, value: bool) -> &mut Self {
        self.set(key, if value { "1" } else { "0" })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn commit(&self) -> Result<()> {
        write_atomic(&self.path, &self.text)
    }
}
