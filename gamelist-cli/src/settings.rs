//! Saved CLI settings (default namespace prefix, config file location).
//!
//! The settings file lives at `~/.config/gamelist/settings.toml`. Edits are
//! surgical updates on a `toml::Value` so unknown keys survive a rewrite.

use std::io;
use std::path::{Path, PathBuf};

use crate::CliError;

/// Prefix used when neither `--prefix` nor the settings file provides one.
pub(crate) const DEFAULT_PREFIX: &str = "mame";

/// Canonical path to the settings file: `~/.config/gamelist/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamelist").join("settings.toml")
}

/// Resolve the namespace prefix using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `listing.default_prefix` in `settings.toml`
/// 3. `"mame"`
pub(crate) fn resolve_prefix(cli_override: Option<String>) -> Result<String, CliError> {
    resolve_prefix_at(&settings_path(), cli_override)
}

fn resolve_prefix_at(settings: &Path, cli_override: Option<String>) -> Result<String, CliError> {
    let prefix = cli_override
        .or_else(|| load_default_prefix_at(settings))
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
    validate_prefix(&prefix)?;
    Ok(prefix)
}

/// A prefix must be non-empty and must not contain the `/` separator,
/// otherwise qualified names could not be split back apart.
pub(crate) fn validate_prefix(prefix: &str) -> Result<(), CliError> {
    if prefix.is_empty() {
        return Err(CliError::config("prefix must not be empty"));
    }
    if prefix.contains('/') {
        return Err(CliError::config(format!(
            "prefix '{}' must not contain '/'",
            prefix
        )));
    }
    Ok(())
}

/// Read `listing.default_prefix` from the settings file, if set.
fn load_default_prefix_at(settings: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let prefix = doc.get("listing")?.get("default_prefix")?.as_str()?;
    if prefix.is_empty() {
        None
    } else {
        Some(prefix.to_string())
    }
}

/// Save (or clear) the default prefix in `settings.toml`.
pub(crate) fn save_default_prefix(prefix: Option<&str>) -> io::Result<()> {
    save_default_prefix_at(&settings_path(), prefix)
}

fn save_default_prefix_at(settings: &Path, prefix: Option<&str>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let listing = table
        .entry("listing")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let listing_table = listing
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[listing] is not a table"))?;

    match prefix {
        Some(p) => {
            listing_table.insert(
                "default_prefix".to_string(),
                toml::Value::String(p.to_string()),
            );
        }
        None => {
            listing_table.remove("default_prefix");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
