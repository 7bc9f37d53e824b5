use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings;

pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings::settings_path();
    log::info!(
        "{}",
        "Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  File: {}", path.display());
    crate::log_blank();

    match settings::load_settings_string() {
        Some(contents) => {
            for line in contents.lines() {
                log::info!("  {}", line);
            }
        }
        None => {
            log::info!("  No settings saved.");
            log::info!(
                "  Default prefix: {}",
                settings::DEFAULT_PREFIX.if_supports_color(Stdout, |t| t.dimmed())
            );
        }
    }
    Ok(())
}

pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}

pub(crate) fn run_config_set_prefix(prefix: &str) -> Result<(), CliError> {
    settings::validate_prefix(prefix)?;
    settings::save_default_prefix(Some(prefix))?;
    log::info!(
        "{} Default prefix set to '{}'",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        prefix,
    );
    Ok(())
}

pub(crate) fn run_config_clear_prefix() -> Result<(), CliError> {
    settings::save_default_prefix(None)?;
    log::info!(
        "{} Default prefix cleared (using '{}')",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings::DEFAULT_PREFIX,
    );
    Ok(())
}
