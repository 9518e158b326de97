//! Rivalry intensity tracking between franchises.

use crate::models::Rivalry;

pub const REASON_CLOSE_MATCH: &str = "Close Match";
pub const REASON_BLOWOUT: &str = "Blowout";
pub const REASON_STOLEN_TALENT: &str = "Stolen Talent";

/// Intensity a poached-player grudge starts at.
pub const STOLEN_TALENT_INTENSITY: u8 = 50;

/// Fold one encounter into a team's rivalry list and return the new list,
/// sorted descending by intensity.
///
/// Close finishes (margin <= 5) add 15 intensity, blowouts (margin > 35)
/// add 10, anything else decays an existing rivalry by 2. A decay never
/// creates an entry, and an entry is never deleted; it bottoms out at 0.
/// The reason tag only changes when intensity rose.
pub fn update_rivalry(
    rivalries: &[Rivalry],
    opponent_id: &str,
    opponent_name: &str,
    score_diff: i64,
    week: u32,
) -> Vec<Rivalry> {
    let (delta, reason) = if score_diff.abs() <= 5 {
        (15i16, REASON_CLOSE_MATCH)
    } else if score_diff.abs() > 35 {
        (10, REASON_BLOWOUT)
    } else {
        (-2, "")
    };

    let mut updated = rivalries.to_vec();
    if let Some(existing) = updated.iter_mut().find(|r| r.opponent_id == opponent_id) {
        existing.intensity = (existing.intensity as i16 + delta).clamp(0, 100) as u8;
        if delta > 0 {
            existing.reason = reason.to_string();
        }
        existing.last_encounter_week = week;
    } else if delta > 0 {
        updated.push(Rivalry {
            opponent_id: opponent_id.to_string(),
            opponent_name: opponent_name.to_string(),
            reason: reason.to_string(),
            intensity: delta as u8,
            last_encounter_week: week,
        });
    }

    updated.sort_by(|a, b| b.intensity.cmp(&a.intensity));
    updated
}

/// Direct entry point for rivalries that do not come from a scoreline,
/// e.g. a free agent signed away from a former team. Creates the entry at
/// the given intensity or tops up an existing one, overriding the reason.
pub fn record_rivalry(
    rivalries: &[Rivalry],
    opponent_id: &str,
    opponent_name: &str,
    reason: &str,
    intensity: u8,
    week: u32,
) -> Vec<Rivalry> {
    let mut updated = rivalries.to_vec();
    if let Some(existing) = updated.iter_mut().find(|r| r.opponent_id == opponent_id) {
        existing.intensity = (existing.intensity as u16 + intensity as u16).min(100) as u8;
        existing.reason = reason.to_string();
        existing.last_encounter_week = week;
    } else {
        updated.push(Rivalry {
            opponent_id: opponent_id.to_string(),
            opponent_name: opponent_name.to_string(),
            reason: reason.to_string(),
            intensity: intensity.min(100),
            last_encounter_week: week,
        });
    }
    updated.sort_by(|a, b| b.intensity.cmp(&a.intensity));
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_match_creates_a_rivalry() {
        let out = update_rivalry(&[], "cpu-1", "Pirates", 3, 4);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].intensity, 15);
        assert_eq!(out[0].reason, REASON_CLOSE_MATCH);
        assert_eq!(out[0].last_encounter_week, 4);
    }

    #[test]
    fn blowout_creates_a_rivalry_either_direction() {
        for diff in [40i64, -40] {
            let out = update_rivalry(&[], "cpu-1", "Pirates", diff, 1);
            assert_eq!(out[0].intensity, 10);
            assert_eq!(out[0].reason, REASON_BLOWOUT);
        }
    }

    #[test]
    fn boring_encounters_never_create_an_entry() {
        let mut rivalries = Vec::new();
        for week in 1..10 {
            rivalries = update_rivalry(&rivalries, "cpu-1", "Pirates", 20, week);
        }
        assert!(rivalries.is_empty());
    }

    #[test]
    fn decay_floors_at_zero_without_deleting() {
        let mut rivalries = update_rivalry(&[], "cpu-1", "Pirates", 2, 1);
        for week in 2..30 {
            rivalries = update_rivalry(&rivalries, "cpu-1", "Pirates", 20, week);
        }
        assert_eq!(rivalries.len(), 1);
        assert_eq!(rivalries[0].intensity, 0);
        // The original reason survives decay.
        assert_eq!(rivalries[0].reason, REASON_CLOSE_MATCH);
    }

    #[test]
    fn intensity_caps_at_hundred() {
        let mut rivalries = Vec::new();
        for week in 1..20 {
            rivalries = update_rivalry(&rivalries, "cpu-1", "Pirates", 0, week);
        }
        assert_eq!(rivalries[0].intensity, 100);
    }

    #[test]
    fn list_stays_sorted_by_intensity() {
        let mut rivalries = update_rivalry(&[], "cpu-1", "Pirates", 40, 1); // 10
        rivalries = update_rivalry(&rivalries, "cpu-2", "Veloce", 1, 2); // 15
        assert_eq!(rivalries[0].opponent_id, "cpu-2");
        assert_eq!(rivalries[1].opponent_id, "cpu-1");
    }

    #[test]
    fn stolen_talent_entry_point() {
        let out = record_rivalry(&[], "cpu-3", "Prime", REASON_STOLEN_TALENT, 50, 6);
        assert_eq!(out[0].reason, REASON_STOLEN_TALENT);
        assert_eq!(out[0].intensity, 50);
    }
}
