//! Field handlers and the record builder they write into.

use gamelist_core::{DeviceRecord, GameFlags, GameRecord, PlayLevel, RecordSink};

use crate::error::InvalidState;

/// What happened to the element or attribute a handler is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent<'a> {
    /// The element opened. Attributes have not been seen yet.
    Open,
    /// The element closed; carries all character data it accumulated.
    Data(&'a [u8]),
    /// Fired right after `Data`.
    Close,
}

/// A recognized element or attribute of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Game,
    Runnable,
    Name,
    Description,
    Manufacturer,
    Year,
    CloneOf,
    RomOf,
    Rom,
    RomMerge,
    RomSize,
    Device,
    DeviceName,
    DeviceExtensionName,
    DriverStatus,
    DriverColor,
    DriverSound,
    VideoScreen,
    VideoOrientation,
    VideoWidth,
    VideoHeight,
    VideoAspectX,
    VideoAspectY,
}

impl Field {
    /// Apply `event` to the records under construction.
    ///
    /// Finished games are handed to `sink` when their element closes.
    pub fn handle(
        self,
        event: FieldEvent<'_>,
        builder: &mut RecordBuilder,
        sink: &mut dyn RecordSink,
    ) -> Result<(), InvalidState> {
        match (self, event) {
            (Self::Game, FieldEvent::Open) => builder.open_game(),
            (Self::Game, FieldEvent::Close) => builder.close_game(sink)?,
            (Self::Rom, FieldEvent::Open) => builder.open_rom(),
            (Self::Rom, FieldEvent::Close) => builder.close_rom()?,
            (Self::Device, FieldEvent::Open) => builder.open_device(),
            (Self::Device, FieldEvent::Close) => builder.close_device()?,
            (field, FieldEvent::Data(data)) => {
                let text = std::str::from_utf8(data).map_err(|_| InvalidState)?;
                field.apply_text(text, builder)?
            }
            _ => {}
        }
        Ok(())
    }

    fn apply_text(self, text: &str, builder: &mut RecordBuilder) -> Result<(), InvalidState> {
        match self {
            Self::Game | Self::Rom | Self::Device => {}
            Self::RomSize => builder.rom.size = parse_leading_u64(text),
            Self::RomMerge => builder.rom.merge = true,
            Self::DeviceName => builder.device_mut()?.name = text.to_string(),
            Self::DeviceExtensionName => builder.device_mut()?.extensions.push(text.to_string()),
            Self::Runnable => builder
                .game_mut()?
                .flags
                .set(GameFlags::DERIVED_RESOURCE, text == "no"),
            Self::Name => {
                let game = builder.game_mut()?;
                game.name = game.qualify(text);
            }
            Self::Description => builder.game_mut()?.description = text.to_string(),
            Self::Manufacturer => builder.game_mut()?.manufacturer = text.to_string(),
            Self::Year => builder.game_mut()?.year = text.to_string(),
            Self::CloneOf => {
                let game = builder.game_mut()?;
                game.clone_of = Some(game.qualify(text));
            }
            Self::RomOf => {
                let game = builder.game_mut()?;
                game.rom_of = Some(game.qualify(text));
            }
            Self::DriverStatus => {
                let game = builder.game_mut()?;
                if text == "preliminary" {
                    game.play = PlayLevel::NotPlayable;
                }
            }
            Self::DriverColor => {
                let game = builder.game_mut()?;
                if text == "preliminary" {
                    game.play = game.play.raise(PlayLevel::MajorIssues);
                }
            }
            Self::DriverSound => {
                let game = builder.game_mut()?;
                if text == "preliminary" {
                    game.play = game.play.raise(PlayLevel::MinorIssues);
                }
            }
            Self::VideoScreen => builder
                .game_mut()?
                .flags
                .set(GameFlags::VECTOR, text == "vector"),
            Self::VideoOrientation => builder
                .game_mut()?
                .flags
                .set(GameFlags::VERTICAL, text == "vertical"),
            Self::VideoWidth => builder.game_mut()?.width = parse_leading_u32(text),
            Self::VideoHeight => builder.game_mut()?.height = parse_leading_u32(text),
            Self::VideoAspectX => builder.game_mut()?.aspect_x = parse_leading_u32(text),
            Self::VideoAspectY => builder.game_mut()?.aspect_y = parse_leading_u32(text),
        }
        Ok(())
    }
}

/// Size and merge marker of the rom element currently open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomEntry {
    pub size: u64,
    pub merge: bool,
}

/// Owns everything under construction during one load.
#[derive(Debug)]
pub struct RecordBuilder {
    namespace: String,
    game: Option<GameRecord>,
    device: Option<DeviceRecord>,
    rom: RomEntry,
    committed: usize,
    rejected: usize,
}

impl RecordBuilder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            game: None,
            device: None,
            rom: RomEntry::default(),
            committed: 0,
            rejected: 0,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The game currently being assembled, if any.
    pub fn game(&self) -> Option<&GameRecord> {
        self.game.as_ref()
    }

    pub fn device(&self) -> Option<&DeviceRecord> {
        self.device.as_ref()
    }

    pub fn rom(&self) -> RomEntry {
        self.rom
    }

    /// Games the sink accepted.
    pub fn committed(&self) -> usize {
        self.committed
    }

    /// Games the sink refused.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn game_mut(&mut self) -> Result<&mut GameRecord, InvalidState> {
        self.game.as_mut().ok_or(InvalidState)
    }

    fn device_mut(&mut self) -> Result<&mut DeviceRecord, InvalidState> {
        self.device.as_mut().ok_or(InvalidState)
    }

    fn open_game(&mut self) {
        self.game = Some(GameRecord::new(self.namespace.as_str()));
    }

    fn close_game(&mut self, sink: &mut dyn RecordSink) -> Result<(), InvalidState> {
        let game = self.game.take().ok_or(InvalidState)?;
        if sink.insert(game) {
            self.committed += 1;
        } else {
            self.rejected += 1;
        }
        Ok(())
    }

    fn open_rom(&mut self) {
        self.rom = RomEntry::default();
    }

    fn close_rom(&mut self) -> Result<(), InvalidState> {
        let rom = std::mem::take(&mut self.rom);
        let game = self.game_mut()?;
        if !rom.merge {
            game.size = game.size.saturating_add(rom.size);
        }
        Ok(())
    }

    fn open_device(&mut self) {
        self.device = Some(DeviceRecord::new());
    }

    fn close_device(&mut self) -> Result<(), InvalidState> {
        let (Some(game), Some(device)) = (self.game.as_mut(), self.device.take()) else {
            return Err(InvalidState);
        };
        game.devices.push(device);
        Ok(())
    }
}

/// Parse the leading integer of `text` the way C `atoi` does.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit, and text without digits yields 0. Negative values clamp to 0.
pub fn parse_leading_u64(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        });
    if negative { 0 } else { value }
}

fn parse_leading_u32(text: &str) -> u32 {
    u32::try_from(parse_leading_u64(text)).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "tests/field_tests.rs"]
mod tests;
