// Save/Load system for league careers
// JSON snapshots with versioning, validation and step-wise migration

pub mod error;
pub mod format;
pub mod manager;
pub mod migration;

pub use error::SaveError;
pub use format::{deserialize_snapshot, serialize_snapshot, LeagueSnapshot};
pub use manager::{SaveManager, SaveSlotInfo};
pub use migration::migrate_snapshot;

pub const SNAPSHOT_VERSION: u32 = 1;
