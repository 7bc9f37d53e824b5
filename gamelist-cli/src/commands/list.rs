use std::path::Path;

use gamelist_core::GameRecord;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{load_listing, play_label, truncate_str};

/// Which records `list` prints, by clone status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloneFilter {
    All,
    ClonesOnly,
    ParentsOnly,
}

impl CloneFilter {
    pub(crate) fn from_flags(clones: bool, no_clones: bool) -> Self {
        match (clones, no_clones) {
            (true, _) => Self::ClonesOnly,
            (false, true) => Self::ParentsOnly,
            (false, false) => Self::All,
        }
    }

    pub(crate) fn accepts(self, record: &GameRecord) -> bool {
        match self {
            Self::All => true,
            Self::ClonesOnly => record.is_clone(),
            Self::ParentsOnly => !record.is_clone(),
        }
    }
}

/// Select the records to print, in catalog order.
pub(crate) fn select<'a>(
    records: impl Iterator<Item = &'a GameRecord>,
    filter: CloneFilter,
    limit: Option<usize>,
) -> Vec<&'a GameRecord> {
    records
        .filter(|r| filter.accepts(r))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

pub(crate) fn run_list(
    path: &Path,
    namespace: &str,
    quiet: bool,
    json: bool,
    limit: Option<usize>,
    filter: CloneFilter,
) -> Result<(), CliError> {
    let (catalog, summary) = load_listing(path, namespace, quiet || json)?;
    let selected = select(catalog.iter(), filter, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for record in &selected {
        let mut line = format!(
            "  {:<24} {:<4} {}",
            record.name.if_supports_color(Stdout, |t| t.bold()),
            record.year,
            truncate_str(&record.description, 48),
        );
        if !record.manufacturer.is_empty() {
            line.push_str(&format!(
                " ({})",
                record.manufacturer.if_supports_color(Stdout, |t| t.dimmed())
            ));
        }
        line.push_str(&format!(" [{}]", play_label(record.play)));
        log::info!("{}", line);
    }

    crate::log_blank();
    log::info!(
        "{} of {} game(s) shown",
        selected.len(),
        summary.committed,
    );
    if summary.rejected > 0 {
        log::warn!("{} duplicate game(s) ignored", summary.rejected);
    }

    Ok(())
}
