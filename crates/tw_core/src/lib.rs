//! # tw_core - Deterministic Esports Franchise Simulation Engine
//!
//! This library simulates a season-long esports league career: drafting a
//! squad, weekly matches, training, staff, free agency, rivalries and a
//! four-team playoff, over standard (one-shot) or dynasty (multi-season)
//! campaigns.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same career)
//! - Injectable RNG at every entry point that rolls dice
//! - Versioned JSON snapshots with step-wise migration

// Allow unused code for features under development
#![allow(dead_code)]
// Game management APIs often require many parameters
#![allow(clippy::too_many_arguments)]
// Large enum variants - boxing would require API changes
#![allow(clippy::large_enum_variant)]

pub mod data;
pub mod economy;
pub mod engine;
pub mod error;
pub mod models;
pub mod narrative;
pub mod player;
pub mod rivalry;
pub mod save;
pub mod state;

// Re-export the error type
pub use error::{CoreError, Result};

// Re-export the player system
pub use player::{
    generate_player, player_overall, select_starters, team_effective_strength, team_overall,
    LineupPolicy,
};

// Re-export the match engine
pub use engine::{generate_season_schedule, simulate_match};

// Re-export league orchestration
pub use state::{DraftPick, DraftState, League, Phase, TrainingReport, TrainingStat, WeekReport};

// Re-export the save system
pub use save::{LeagueSnapshot, SaveError, SaveManager};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeasonMode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run_career(seed: u64) -> Vec<(String, u32, i64)> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut league = League::new(&mut rng, "Alpha Squad", SeasonMode::Standard);
        league.set_auto_draft(true);
        league.advance_cpu_picks().unwrap();
        for _ in 0..crate::data::TOTAL_SEASON_WEEKS {
            league.advance_week(&mut rng).unwrap();
        }
        league
            .standings()
            .iter()
            .map(|t| (t.id.clone(), t.wins, t.kd_diff()))
            .collect()
    }

    #[test]
    fn same_seed_same_career() {
        assert_eq!(run_career(4242), run_career(4242));
    }

    #[test]
    fn different_seeds_diverge() {
        // Two seeds producing identical full-season standings would point
        // at a wiring bug, not coincidence.
        assert_ne!(run_career(1), run_career(2));
    }
}
