//! Pilot generation and rating.

pub mod calculator;
pub mod generator;

pub use calculator::{
    player_overall, player_overall_for, select_starters, select_starters_with, team_overall,
    team_effective_strength, LineupPolicy,
};
pub use generator::generate_player;
