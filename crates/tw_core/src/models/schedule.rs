use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::MatchResult;

/// One fixture. The result is attached after the match week is simulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMatch {
    pub home_id: String,
    pub away_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
}

impl ScheduleMatch {
    pub fn new(home_id: &str, away_id: &str) -> Self {
        Self { home_id: home_id.to_string(), away_id: away_id.to_string(), result: None }
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home_id == team_id || self.away_id == team_id
    }
}

/// Week number mapped to that week's fixtures, in kickoff order.
pub type SeasonSchedule = BTreeMap<u32, Vec<ScheduleMatch>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonMode {
    Standard,
    Dynasty,
}

impl SeasonMode {
    /// Roster size cap for this mode.
    pub fn roster_cap(&self) -> usize {
        match self {
            SeasonMode::Standard => 10,
            SeasonMode::Dynasty => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayoffStage {
    Semis,
    Finals,
    Complete,
}

/// The post-season bracket: two semifinals, then a single final.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayoffBracket {
    pub semis: Vec<ScheduleMatch>,
    pub finals: Vec<ScheduleMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonState {
    pub week: u32,
    pub year: u32,
    pub season: u32,
    pub is_drafting: bool,
    pub mode: SeasonMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_stage: Option<PlayoffStage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_matches: Option<PlayoffBracket>,
}

impl SeasonState {
    pub fn new(mode: SeasonMode) -> Self {
        Self {
            week: 1,
            year: 2026,
            season: 1,
            is_drafting: true,
            mode,
            playoff_stage: None,
            playoff_matches: None,
        }
    }

    /// True once the regular season has handed off to the bracket.
    pub fn in_playoffs(&self) -> bool {
        self.playoff_stage.is_some()
    }
}
