use super::error::SaveError;
use super::format::{deserialize_snapshot, serialize_snapshot, LeagueSnapshot};
use super::migration::migrate_snapshot;
use crate::state::League;

use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const SLOT_COUNT: u8 = 3;

/// Slot-based persistence rooted at a directory the caller owns.
pub struct SaveManager {
    root: PathBuf,
}

impl SaveManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Save a career to a numbered slot.
    pub fn save_to_slot(&self, slot: u8, league: &League) -> Result<(), SaveError> {
        Self::validate_slot(slot)?;
        let snapshot = LeagueSnapshot::new(league.clone());
        self.save_to_path(&self.slot_path(slot), &snapshot)?;
        log::info!("Career saved to slot {}", slot);
        Ok(())
    }

    /// Load a career from a numbered slot, migrating if needed.
    pub fn load_from_slot(&self, slot: u8) -> Result<League, SaveError> {
        Self::validate_slot(slot)?;
        let snapshot = self.load_from_path(&self.slot_path(slot))?;
        log::info!("Career loaded from slot {}", slot);
        Ok(snapshot.league)
    }

    pub fn auto_save(&self, league: &League) -> Result<(), SaveError> {
        let snapshot = LeagueSnapshot::new(league.clone());
        self.save_to_path(&self.auto_save_path(), &snapshot)?;
        log::debug!("Auto-save completed");
        Ok(())
    }

    pub fn load_auto_save(&self) -> Result<League, SaveError> {
        let snapshot = self.load_from_path(&self.auto_save_path())?;
        Ok(snapshot.league)
    }

    pub fn slot_exists(&self, slot: u8) -> bool {
        Self::validate_slot(slot).is_ok() && self.slot_path(slot).exists()
    }

    pub fn auto_save_exists(&self) -> bool {
        self.auto_save_path().exists()
    }

    pub fn delete_slot(&self, slot: u8) -> Result<(), SaveError> {
        Self::validate_slot(slot)?;
        let path = self.slot_path(slot);
        if path.exists() {
            remove_file(&path)?;
            log::info!("Deleted save slot {}", slot);
        }
        Ok(())
    }

    /// Lightweight slot metadata for a career-select screen.
    pub fn slot_info(&self, slot: u8) -> Result<Option<SaveSlotInfo>, SaveError> {
        Self::validate_slot(slot)?;
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let snapshot = self.load_from_path(&path)?;
        let user = snapshot
            .league
            .teams
            .iter()
            .find(|t| t.id == snapshot.league.player_team_id)
            .ok_or_else(|| SaveError::Corrupted("user team missing".into()))?;

        Ok(Some(SaveSlotInfo {
            slot,
            timestamp: snapshot.timestamp,
            version: snapshot.version,
            week: snapshot.league.season.week,
            season: snapshot.league.season.season,
            squad_name: user.name.clone(),
            championships: snapshot.league.career_championships,
        }))
    }

    pub fn all_slot_info(&self) -> Vec<SaveSlotInfo> {
        let mut slots = Vec::new();
        for slot in 0..SLOT_COUNT {
            if let Ok(Some(info)) = self.slot_info(slot) {
                slots.push(info);
            }
        }
        slots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)); // Most recent first
        slots
    }

    // Private helper methods

    fn validate_slot(slot: u8) -> Result<(), SaveError> {
        if slot >= SLOT_COUNT {
            return Err(SaveError::InvalidSlot { slot: slot as i64 });
        }
        Ok(())
    }

    fn slot_path(&self, slot: u8) -> PathBuf {
        self.root.join(format!("career_slot_{}.json", slot))
    }

    fn auto_save_path(&self) -> PathBuf {
        self.root.join("auto_save.json")
    }

    fn save_to_path(&self, path: &Path, snapshot: &LeagueSnapshot) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serialize_snapshot(snapshot)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }
        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    fn load_from_path(&self, path: &Path) -> Result<LeagueSnapshot, SaveError> {
        if !path.exists() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }

        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let snapshot = migrate_snapshot(deserialize_snapshot(&data)?)?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(snapshot)
    }
}

#[derive(Debug, Clone)]
pub struct SaveSlotInfo {
    pub slot: u8,
    pub timestamp: u64,
    pub version: u32,
    pub week: u32,
    pub season: u32,
    pub squad_name: String,
    pub championships: u32,
}

impl SaveSlotInfo {
    pub fn display_text(&self) -> String {
        format!(
            "Slot {}: {} - Week {} Season {} ({} titles)",
            self.slot, self.squad_name, self.week, self.season, self.championships
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeasonMode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tempfile::TempDir;

    fn fresh_league(seed: u64) -> League {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        League::new(&mut rng, "Alpha Squad", SeasonMode::Standard)
    }

    #[test]
    fn save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path());
        let league = fresh_league(1);

        manager.save_to_slot(0, &league).unwrap();
        let loaded = manager.load_from_slot(0).unwrap();

        assert_eq!(loaded.teams.len(), league.teams.len());
        assert_eq!(loaded.draft.pool.len(), league.draft.pool.len());
        assert_eq!(loaded.phase, league.phase);
    }

    #[test]
    fn atomic_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path());
        let league = fresh_league(2);

        manager.save_to_slot(1, &league).unwrap();

        let path = manager.slot_path(1);
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn slot_validation() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path());
        assert!(manager.load_from_slot(SLOT_COUNT).is_err());
        assert!(!manager.slot_exists(SLOT_COUNT));
        assert!(manager.save_to_slot(255, &fresh_league(3)).is_err());
    }

    #[test]
    fn missing_slot_is_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path());
        let err = manager.load_from_slot(0).unwrap_err();
        assert!(matches!(err, SaveError::FileNotFound { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn slot_info_reports_progress() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path());
        let league = fresh_league(4);
        manager.save_to_slot(2, &league).unwrap();

        let info = manager.slot_info(2).unwrap().expect("slot populated");
        assert_eq!(info.week, 1);
        assert_eq!(info.season, 1);
        assert_eq!(info.squad_name, "Alpha Squad");
        assert!(manager.slot_info(0).unwrap().is_none());
        assert_eq!(manager.all_slot_info().len(), 1);
    }

    #[test]
    fn auto_save_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path());
        assert!(!manager.auto_save_exists());
        manager.auto_save(&fresh_league(5)).unwrap();
        assert!(manager.auto_save_exists());
        let loaded = manager.load_auto_save().unwrap();
        assert_eq!(loaded.player_team_id, "player-squad");
    }
}
