use super::error::SaveError;
use super::format::LeagueSnapshot;
use super::SNAPSHOT_VERSION;

/// Migrate snapshot data from older versions to the current version, then
/// validate the invariants every consumer relies on.
pub fn migrate_snapshot(mut snapshot: LeagueSnapshot) -> Result<LeagueSnapshot, SaveError> {
    let original_version = snapshot.version;

    snapshot = match snapshot.version {
        0 => migrate_v0_to_v1(snapshot)?,
        1 => snapshot,
        v if v > SNAPSHOT_VERSION => {
            // Future version - might be compatible
            log::warn!(
                "Loading snapshot from future version {} (current: {})",
                v,
                SNAPSHOT_VERSION
            );
            snapshot
        }
        _ => {
            return Err(SaveError::VersionMismatch {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
    };

    validate(&snapshot)?;

    snapshot.version = SNAPSHOT_VERSION;
    snapshot.update_timestamp();

    if original_version != SNAPSHOT_VERSION {
        log::info!("Migrated snapshot from version {} to {}", original_version, SNAPSHOT_VERSION);
    }

    Ok(snapshot)
}

/// Migrate from version 0 to version 1
fn migrate_v0_to_v1(mut snapshot: LeagueSnapshot) -> Result<LeagueSnapshot, SaveError> {
    log::info!("Migrating snapshot from version 0 to 1");

    // v0 careers predate baseline stat tracking and could carry a week or
    // season counter of zero.
    if snapshot.league.season.week == 0 {
        snapshot.league.season.week = 1;
    }
    if snapshot.league.season.season == 0 {
        snapshot.league.season.season = 1;
    }
    for team in &mut snapshot.league.teams {
        for pilot in &mut team.roster {
            if pilot.original_stats.is_none() {
                pilot.refresh_original_stats();
            }
        }
    }
    for pilot in &mut snapshot.league.free_agents {
        if pilot.original_stats.is_none() {
            pilot.refresh_original_stats();
        }
    }

    Ok(snapshot)
}

fn validate(snapshot: &LeagueSnapshot) -> Result<(), SaveError> {
    let league = &snapshot.league;
    if league.teams.is_empty() {
        return Err(SaveError::Corrupted("snapshot contains no teams".into()));
    }
    if !league.teams.iter().any(|t| t.id == league.player_team_id) {
        return Err(SaveError::Corrupted(format!(
            "user team {} is missing from the league",
            league.player_team_id
        )));
    }
    if league.season.week == 0 {
        return Err(SaveError::Corrupted("season week must start at 1".into()));
    }
    Ok(())
}

/// Check if a snapshot needs migration before use.
pub fn needs_migration(snapshot: &LeagueSnapshot) -> bool {
    snapshot.version < SNAPSHOT_VERSION
}
