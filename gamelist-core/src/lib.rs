//! Data model for game catalogs built from emulator listings.
//!
//! Records are produced by `gamelist-xml` and consumed through the
//! [`RecordSink`] trait, so callers can collect them into a [`Catalog`]
//! or any other collection.

pub mod catalog;
pub mod play;
pub mod record;

pub use catalog::{Catalog, RecordSink};
pub use play::{PlayLevel, PlayLevelParseError};
pub use record::{DeviceRecord, GameFlags, GameRecord, qualified_name};
