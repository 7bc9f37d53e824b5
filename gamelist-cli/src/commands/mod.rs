pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod stats;

use std::fs::File;
use std::path::Path;

use gamelist_core::{Catalog, PlayLevel};
use gamelist_xml::LoadSummary;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Load a listing file into a fresh catalog, showing byte progress on the
/// terminal unless `quiet` is set.
pub(crate) fn load_listing(
    path: &Path,
    namespace: &str,
    quiet: bool,
) -> Result<(Catalog, LoadSummary), CliError> {
    let file = File::open(path)?;
    let total = file.metadata().map(|m| m.len()).unwrap_or(0);

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(total)
    };
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} [{bar:30.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .expect("static pattern")
            .progress_chars("=> "),
    );
    pb.set_message(
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    );

    let mut catalog = Catalog::new();
    let result = gamelist_xml::load(pb.wrap_read(file), namespace, &mut catalog);
    pb.finish_and_clear();

    let summary = result?;
    log::debug!(
        "Loaded {} game(s) from {} ({} rejected)",
        summary.committed,
        path.display(),
        summary.rejected,
    );
    Ok((catalog, summary))
}

/// Look up a game by its qualified name, or by its local name within
/// `namespace`.
pub(crate) fn find_game<'a>(
    catalog: &'a Catalog,
    namespace: &str,
    name: &str,
) -> Option<&'a gamelist_core::GameRecord> {
    catalog
        .get(name)
        .or_else(|| catalog.get(&gamelist_core::qualified_name(namespace, name)))
}

/// Colored label for a play level.
pub(crate) fn play_label(play: PlayLevel) -> String {
    let label = play.as_str();
    match play {
        PlayLevel::Full => label.if_supports_color(Stdout, |t| t.green()).to_string(),
        PlayLevel::MinorIssues => label.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        PlayLevel::MajorIssues => label.if_supports_color(Stdout, |t| t.magenta()).to_string(),
        PlayLevel::NotPlayable => label.if_supports_color(Stdout, |t| t.red()).to_string(),
    }
}

/// Format a byte count, using KB or MB only for exact multiples.
pub(crate) fn format_bytes(bytes: u64) -> String {
    const MB: u64 = 1024 * 1024;
    if bytes >= MB && bytes.is_multiple_of(MB) {
        format!("{} MB", bytes / MB)
    } else if bytes >= 1024 && bytes.is_multiple_of(1024) {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Truncate a string to `max` characters, appending "..." when cut.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
#[path = "../tests/commands_tests.rs"]
mod tests;
