//! Logger setup. All user-facing output goes through the `log` macros.

use std::io::Write;

use log::LevelFilter;

/// Install the global logger. Must be called once, before any output.
///
/// Normal runs print bare `info` messages to stdout. `quiet` keeps only
/// warnings and errors; `verbose` adds debug messages tagged with their
/// level and target. `RUST_LOG` overrides both.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let mut builder = builder(quiet, verbose);
    builder.parse_default_env();
    builder.init();
}

fn builder(quiet: bool, verbose: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(quiet, verbose))
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder
}

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
