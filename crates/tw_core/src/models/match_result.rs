use serde::{Deserialize, Serialize};

use super::{Role, Strategy};

/// An arena in the map rotation. All maps except the neutral one grant a
/// +15% effective-overall bonus to starters of the favored role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    pub name: String,
    pub kind: String,
    pub bonus_role: Option<Role>,
}

impl GameMap {
    pub fn new(name: &str, kind: &str, bonus_role: Option<Role>) -> Self {
        Self { name: name.to_string(), kind: kind.to_string(), bonus_role }
    }
}

/// The outcome of one simulated match. Immutable once produced; applying
/// the result to team records is the orchestrator's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_id: String,
    pub away_id: String,
    pub home_score: u32,
    pub away_score: u32,
    pub winner_id: String,
    /// Narrative tag describing a strategy counter, empty when none fired.
    pub counter_msg: String,
    pub map: GameMap,
    pub home_strategy: Strategy,
    pub away_strategy: Strategy,
    pub viewership: u64,
}

impl MatchResult {
    /// Score margin from the winner's perspective.
    pub fn margin(&self) -> u32 {
        self.home_score.abs_diff(self.away_score)
    }
}
