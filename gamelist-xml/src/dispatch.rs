//! Path matching and the dispatch table.
//!
//! Every recognized element or attribute is identified by the chain of
//! tag names from the document root down to itself. The table below maps
//! those chains to the [`Field`] that handles them; anything not listed
//! is accepted but ignored.

use crate::field::Field;

/// A named set of interchangeable tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSet {
    /// Document roots, one per emulation engine family.
    Root,
    /// Per-title entries.
    Game,
}

impl TagSet {
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            Self::Root => &["mame", "mess", "raine"],
            Self::Game => &["game", "machine"],
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.members().contains(&tag)
    }
}

/// One position of a path pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathToken {
    /// Matches exactly this tag name.
    Literal(&'static str),
    /// Matches any member of the set.
    Set(TagSet),
}

impl PathToken {
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Self::Literal(name) => *name == tag,
            Self::Set(set) => set.contains(tag),
        }
    }
}

/// A path pattern and the field handler bound to it.
#[derive(Debug, Clone, Copy)]
pub struct DispatchEntry {
    pub path: &'static [PathToken],
    pub field: Field,
}

impl DispatchEntry {
    /// Number of levels a path must have to match this entry.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn matches(&self, path: &[&str]) -> bool {
        self.depth() == path.len()
            && self
                .path
                .iter()
                .zip(path)
                .all(|(token, tag)| token.matches(tag))
    }
}

use PathToken::{Literal, Set};

const ROOT: PathToken = Set(TagSet::Root);
const GAME: PathToken = Set(TagSet::Game);

const fn entry(path: &'static [PathToken], field: Field) -> DispatchEntry {
    DispatchEntry { path, field }
}

/// Recognized paths, in precedence order.
pub static DISPATCH_TABLE: &[DispatchEntry] = &[
    entry(&[ROOT, GAME], Field::Game),
    entry(&[ROOT, GAME, Literal("runnable")], Field::Runnable),
    entry(&[ROOT, GAME, Literal("name")], Field::Name),
    entry(&[ROOT, GAME, Literal("description")], Field::Description),
    entry(&[ROOT, GAME, Literal("manufacturer")], Field::Manufacturer),
    entry(&[ROOT, GAME, Literal("year")], Field::Year),
    entry(&[ROOT, GAME, Literal("cloneof")], Field::CloneOf),
    entry(&[ROOT, GAME, Literal("romof")], Field::RomOf),
    entry(&[ROOT, GAME, Literal("rom")], Field::Rom),
    entry(&[ROOT, GAME, Literal("rom"), Literal("merge")], Field::RomMerge),
    entry(&[ROOT, GAME, Literal("rom"), Literal("size")], Field::RomSize),
    entry(&[ROOT, GAME, Literal("device")], Field::Device),
    entry(&[ROOT, GAME, Literal("device"), Literal("name")], Field::DeviceName),
    entry(
        &[ROOT, GAME, Literal("device"), Literal("extension"), Literal("name")],
        Field::DeviceExtensionName,
    ),
    entry(&[ROOT, GAME, Literal("driver"), Literal("status")], Field::DriverStatus),
    entry(&[ROOT, GAME, Literal("driver"), Literal("color")], Field::DriverColor),
    entry(&[ROOT, GAME, Literal("driver"), Literal("sound")], Field::DriverSound),
    entry(&[ROOT, GAME, Literal("video"), Literal("screen")], Field::VideoScreen),
    entry(
        &[ROOT, GAME, Literal("video"), Literal("orientation")],
        Field::VideoOrientation,
    ),
    entry(&[ROOT, GAME, Literal("video"), Literal("width")], Field::VideoWidth),
    entry(&[ROOT, GAME, Literal("video"), Literal("height")], Field::VideoHeight),
    entry(&[ROOT, GAME, Literal("video"), Literal("aspectx")], Field::VideoAspectX),
    entry(&[ROOT, GAME, Literal("video"), Literal("aspecty")], Field::VideoAspectY),
];

/// Find the handler for a root-to-current tag chain.
///
/// The first entry in table order whose every position matches wins.
pub fn resolve(path: &[&str]) -> Option<Field> {
    resolve_in(DISPATCH_TABLE, path)
}

pub(crate) fn resolve_in(table: &[DispatchEntry], path: &[&str]) -> Option<Field> {
    table
        .iter()
        .find(|entry| entry.matches(path))
        .map(|entry| entry.field)
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
