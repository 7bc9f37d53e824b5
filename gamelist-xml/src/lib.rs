//! Streaming loader for machine-readable emulator listings.
//!
//! A listing is walked element by element. Each element's root-to-current
//! tag path is looked up in a dispatch table, and the matching field
//! handler updates the game record being assembled. Attributes are
//! treated as one-level-deeper child elements, so a field can be written
//! either way.

pub mod dispatch;
pub mod error;
pub mod field;
pub mod level;
pub mod load;
pub mod reader;

pub use dispatch::{DISPATCH_TABLE, DispatchEntry, PathToken, TagSet, resolve};
pub use error::{InvalidState, LoadError};
pub use field::{Field, FieldEvent, RecordBuilder, RomEntry};
pub use level::{LevelFrame, LevelStack, MAX_DEPTH};
pub use load::{LoadSummary, load, load_path};
pub use reader::{CHUNK_SIZE, ChunkReader};
