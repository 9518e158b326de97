//! Snapshot envelope and its JSON wire form.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::error::SaveError;
use super::SNAPSHOT_VERSION;
use crate::state::League;

/// A versioned, timestamped capture of a full league career.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub version: u32,
    /// Unix milliseconds at capture time.
    pub timestamp: u64,
    pub league: League,
}

impl LeagueSnapshot {
    pub fn new(league: League) -> Self {
        Self { version: SNAPSHOT_VERSION, timestamp: now_millis(), league }
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = now_millis();
    }
}

fn now_millis() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
}

pub fn serialize_snapshot(snapshot: &LeagueSnapshot) -> Result<Vec<u8>, SaveError> {
    Ok(serde_json::to_vec(snapshot)?)
}

pub fn deserialize_snapshot(data: &[u8]) -> Result<LeagueSnapshot, SaveError> {
    Ok(serde_json::from_slice(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeasonMode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fresh_league() -> League {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        League::new(&mut rng, "Alpha Squad", SeasonMode::Standard)
    }

    #[test]
    fn snapshot_survives_the_wire() {
        let snapshot = LeagueSnapshot::new(fresh_league());
        let bytes = serialize_snapshot(&snapshot).unwrap();
        let restored = deserialize_snapshot(&bytes).unwrap();

        assert_eq!(restored.version, SNAPSHOT_VERSION);
        assert_eq!(restored.league.teams.len(), snapshot.league.teams.len());
        assert_eq!(restored.league.draft.pool.len(), snapshot.league.draft.pool.len());
        assert_eq!(restored.league.player_team_id, "player-squad");
    }

    #[test]
    fn garbage_bytes_are_an_encoding_error() {
        let err = deserialize_snapshot(b"not json at all").unwrap_err();
        assert!(matches!(err, SaveError::Encoding(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn legacy_role_name_still_parses() {
        let mut snapshot = LeagueSnapshot::new(fresh_league());
        snapshot.league.draft.pool.truncate(1);
        let mut json = String::from_utf8(serialize_snapshot(&snapshot).unwrap()).unwrap();
        let role = format!("\"{:?}\"", snapshot.league.draft.pool[0].role);
        json = json.replacen(&role, "\"Medic\"", 1);

        let restored = deserialize_snapshot(json.as_bytes()).unwrap();
        assert_eq!(restored.league.draft.pool[0].role, crate::models::Role::Support);
    }
}
