//! Game and device records assembled from a machine-readable listing.

use bitflags::bitflags;
use serde::Serialize;

use crate::play::PlayLevel;

bitflags! {
    /// Properties derived from a listing entry.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct GameFlags: u32 {
        /// Not runnable by itself (a BIOS or other shared resource).
        const DERIVED_RESOURCE = 0x01;
        /// Uses a vector display.
        const VECTOR = 0x02;
        /// Screen is mounted vertically.
        const VERTICAL = 0x04;
    }
}

/// A media device a machine exposes (cartridge slot, floppy drive, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceRecord {
    pub name: String,
    /// File extensions the device accepts, in document order.
    pub extensions: Vec<String>,
}

impl DeviceRecord {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One playable title from a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Namespace of the engine that produced the listing (e.g. "arcade").
    pub namespace: String,
    /// Identity name, qualified as `namespace/local`.
    pub name: String,
    pub description: String,
    pub manufacturer: String,
    pub year: String,
    /// Qualified name of the parent set, if this is a clone.
    pub clone_of: Option<String>,
    /// Qualified name of the set this one borrows roms from.
    pub rom_of: Option<String>,
    /// Total size in bytes of the roms not merged from another set.
    pub size: u64,
    pub play: PlayLevel,
    pub flags: GameFlags,
    pub width: u32,
    pub height: u32,
    pub aspect_x: u32,
    pub aspect_y: u32,
    pub devices: Vec<DeviceRecord>,
}

impl GameRecord {
    /// Create an empty record bound to `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Qualify a local name with this record's namespace.
    pub fn qualify(&self, local: &str) -> String {
        qualified_name(&self.namespace, local)
    }

    /// The name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name
            .strip_prefix(self.namespace.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(&self.name)
    }

    pub fn is_clone(&self) -> bool {
        self.clone_of.is_some()
    }

    pub fn is_derived_resource(&self) -> bool {
        self.flags.contains(GameFlags::DERIVED_RESOURCE)
    }

    pub fn is_vector(&self) -> bool {
        self.flags.contains(GameFlags::VECTOR)
    }

    pub fn is_vertical(&self) -> bool {
        self.flags.contains(GameFlags::VERTICAL)
    }
}

/// Build the identity name `namespace/local`.
pub fn qualified_name(namespace: &str, local: &str) -> String {
    format!("{namespace}/{local}")
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
