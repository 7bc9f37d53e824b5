use std::path::Path;

use gamelist_core::GameRecord;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{find_game, format_bytes, load_listing, play_label};

pub(crate) fn run_show(
    path: &Path,
    namespace: &str,
    quiet: bool,
    name: &str,
) -> Result<(), CliError> {
    let (catalog, _) = load_listing(path, namespace, quiet)?;
    let record = find_game(&catalog, namespace, name)
        .ok_or_else(|| CliError::not_found(format!("'{}' in {}", name, path.display())))?;

    print_record(record);
    Ok(())
}

fn print_record(record: &GameRecord) {
    log::info!("{}", record.name.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Description:   {}", record.description);
    log::info!("  Manufacturer:  {}", record.manufacturer);
    log::info!("  Year:          {}", record.year);
    if let Some(ref parent) = record.clone_of {
        log::info!("  Clone of:      {}", parent);
    }
    if let Some(ref rom_of) = record.rom_of {
        log::info!("  ROMs from:     {}", rom_of);
    }
    log::info!("  ROM size:      {}", format_bytes(record.size));
    log::info!("  Playable:      {}", play_label(record.play));

    let mut traits = Vec::new();
    if record.is_derived_resource() {
        traits.push("bios/resource");
    }
    if record.is_vector() {
        traits.push("vector");
    }
    if record.is_vertical() {
        traits.push("vertical");
    }
    if !traits.is_empty() {
        log::info!("  Flags:         {}", traits.join(", "));
    }

    if record.width > 0 || record.height > 0 {
        log::info!("  Screen:        {}x{}", record.width, record.height);
    }
    if record.aspect_x > 0 || record.aspect_y > 0 {
        log::info!("  Aspect:        {}:{}", record.aspect_x, record.aspect_y);
    }

    if !record.devices.is_empty() {
        crate::log_blank();
        log::info!("  Devices:");
        for device in &record.devices {
            if device.extensions.is_empty() {
                log::info!("    {}", device.name);
            } else {
                log::info!("    {:<16} .{}", device.name, device.extensions.join(" ."));
            }
        }
    }
}
