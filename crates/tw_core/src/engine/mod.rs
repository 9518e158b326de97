//! Match resolution and schedule generation.

pub mod match_sim;
pub mod schedule;

pub use match_sim::simulate_match;
pub use schedule::generate_season_schedule;
