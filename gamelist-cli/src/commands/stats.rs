use std::collections::BTreeMap;
use std::path::Path;

use gamelist_core::{GameRecord, PlayLevel};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{format_bytes, load_listing, play_label};

/// Aggregate counts over a loaded catalog.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ListingStats {
    pub games: usize,
    pub clones: usize,
    pub resources: usize,
    pub vector: usize,
    pub vertical: usize,
    pub with_devices: usize,
    pub total_size: u64,
    pub by_play: BTreeMap<PlayLevel, usize>,
}

impl ListingStats {
    pub(crate) fn collect<'a>(records: impl Iterator<Item = &'a GameRecord>) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.games += 1;
            if record.is_clone() {
                stats.clones += 1;
            }
            if record.is_derived_resource() {
                stats.resources += 1;
            }
            if record.is_vector() {
                stats.vector += 1;
            }
            if record.is_vertical() {
                stats.vertical += 1;
            }
            if !record.devices.is_empty() {
                stats.with_devices += 1;
            }
            stats.total_size = stats.total_size.saturating_add(record.size);
            *stats.by_play.entry(record.play).or_default() += 1;
        }
        stats
    }
}

pub(crate) fn run_stats(path: &Path, namespace: &str, quiet: bool) -> Result<(), CliError> {
    let (catalog, summary) = load_listing(path, namespace, quiet)?;
    let stats = ListingStats::collect(catalog.iter());

    log::info!(
        "{}",
        "Listing Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  File:       {}", path.display());
    log::info!("  Namespace:  {}", namespace);
    log::info!(
        "  Read:       {} line(s), {}",
        summary.lines,
        format_bytes(summary.bytes)
    );
    crate::log_blank();
    log::info!("  Games:          {:>8}", stats.games);
    log::info!("  Clones:         {:>8}", stats.clones);
    log::info!("  BIOS/resources: {:>8}", stats.resources);
    log::info!("  Vector:         {:>8}", stats.vector);
    log::info!("  Vertical:       {:>8}", stats.vertical);
    log::info!("  With devices:   {:>8}", stats.with_devices);
    log::info!("  Duplicates:     {:>8} (ignored)", summary.rejected);
    log::info!("  ROM data:       {}", format_bytes(stats.total_size));
    crate::log_blank();
    log::info!("  By play level:");
    for &level in PlayLevel::all() {
        let count = stats.by_play.get(&level).copied().unwrap_or(0);
        log::info!("    {:>8}  {}", count, play_label(level));
    }

    Ok(())
}
