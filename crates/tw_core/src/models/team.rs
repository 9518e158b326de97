use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Player;

/// Tactical posture for a match. The three strategies form a counter cycle:
/// Rush beats Control, Control beats Trap, Trap beats Rush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Rush,
    Control,
    Trap,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Rush, Strategy::Control, Strategy::Trap];

    /// The strategy this one counters.
    pub fn counters(&self) -> Strategy {
        match self {
            Strategy::Rush => Strategy::Control,
            Strategy::Control => Strategy::Trap,
            Strategy::Trap => Strategy::Rush,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Rush => "Rush",
            Strategy::Control => "Control",
            Strategy::Trap => "Trap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StaffRole {
    HeadCoach,
    Recruiter,
    Strategist,
    Accountant,
    CommunityManager,
}

impl StaffRole {
    pub const ALL: [StaffRole; 5] = [
        StaffRole::HeadCoach,
        StaffRole::Recruiter,
        StaffRole::Strategist,
        StaffRole::Accountant,
        StaffRole::CommunityManager,
    ];
}

/// Staff quality bands. Prismatic can only be reached through promotion,
/// never hired directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StaffTier {
    Bronze,
    Silver,
    Gold,
    Prismatic,
}

impl StaffTier {
    /// The tier reached by one promotion, if any remains.
    pub fn next(&self) -> Option<StaffTier> {
        match self {
            StaffTier::Bronze => Some(StaffTier::Silver),
            StaffTier::Silver => Some(StaffTier::Gold),
            StaffTier::Gold => Some(StaffTier::Prismatic),
            StaffTier::Prismatic => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub tier: StaffTier,
    /// Multiplicative or fractional effect depending on the role.
    pub bonus_val: f64,
}

/// A grudge held against another franchise. Never deleted once created;
/// boring encounters decay it toward zero instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rivalry {
    pub opponent_id: String,
    /// Denormalized snapshot so feeds render without a roster lookup.
    pub opponent_name: String,
    pub reason: String,
    pub intensity: u8,
    #[serde(default)]
    pub last_encounter_week: u32,
}

/// Weekly training session counters, reset after each match week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCounts {
    pub aim: u8,
    pub iq: u8,
    pub team_building: u8,
}

impl TrainingCounts {
    pub fn total(&self) -> u8 {
        self.aim + self.iq + self.team_building
    }
}

fn default_chemistry() -> u8 {
    50
}

/// A league franchise. Exactly one team has `is_player` set; the rest are
/// CPU-run under identical simulation rules.
///
/// Roster order matters for the user team: the first five slots are the
/// starting lineup. CPU teams auto-optimize their lineup instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub is_player: bool,
    pub roster: Vec<Player>,
    pub budget: i64,
    pub wins: u32,
    pub losses: u32,
    pub kills: u32,
    pub deaths: u32,
    pub championships: u32,
    pub strategy: Strategy,
    #[serde(default)]
    pub training_counts: TrainingCounts,
    #[serde(default)]
    pub staff: BTreeMap<StaffRole, StaffMember>,
    #[serde(default)]
    pub rivalries: Vec<Rivalry>,
    #[serde(default = "default_chemistry")]
    pub chemistry: u8,
    #[serde(default)]
    pub trade_refusals: u32,
}

impl Team {
    pub fn new(id: &str, name: &str, is_player: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            is_player,
            roster: Vec::new(),
            budget: crate::data::STARTING_BUDGET,
            wins: 0,
            losses: 0,
            kills: 0,
            deaths: 0,
            championships: 0,
            strategy: Strategy::Rush,
            training_counts: TrainingCounts::default(),
            staff: BTreeMap::new(),
            rivalries: Vec::new(),
            chemistry: 50,
            trade_refusals: 0,
        }
    }

    pub fn kd_diff(&self) -> i64 {
        self.kills as i64 - self.deaths as i64
    }

    pub fn staff_member(&self, role: StaffRole) -> Option<&StaffMember> {
        self.staff.get(&role)
    }

    /// The rivalry entry against the given opponent, if one has formed.
    pub fn rivalry_with(&self, opponent_id: &str) -> Option<&Rivalry> {
        self.rivalries.iter().find(|r| r.opponent_id == opponent_id)
    }

    pub fn player_index(&self, player_id: &str) -> Option<usize> {
        self.roster.iter().position(|p| p.id == player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_cycle_is_closed() {
        for s in Strategy::ALL {
            // Following the counter chain three times returns to the start.
            assert_eq!(s.counters().counters().counters(), s);
        }
    }

    #[test]
    fn prismatic_is_terminal() {
        assert_eq!(StaffTier::Prismatic.next(), None);
        assert_eq!(StaffTier::Gold.next(), Some(StaffTier::Prismatic));
    }

    #[test]
    fn team_defaults_backfill_on_load() {
        // A pre-rivalry snapshot omits several fields; serde defaults must
        // reconstruct them rather than failing the load.
        let json = r#"{
            "id": "cpu-0", "name": "Pirates", "is_player": false,
            "roster": [], "budget": 250,
            "wins": 3, "losses": 1, "kills": 120, "deaths": 90,
            "championships": 0, "strategy": "Rush"
        }"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.chemistry, 50);
        assert!(team.rivalries.is_empty());
        assert!(team.staff.is_empty());
        assert_eq!(team.trade_refusals, 0);
        assert_eq!(team.training_counts.total(), 0);
    }
}
