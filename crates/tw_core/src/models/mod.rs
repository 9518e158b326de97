//! League entity models shared across the engine.

mod match_result;
mod player;
mod schedule;
mod team;

pub use match_result::{GameMap, MatchResult};
pub use player::{Player, PlayerTier, Role, StatSnapshot};
pub use schedule::{
    PlayoffBracket, PlayoffStage, ScheduleMatch, SeasonMode, SeasonSchedule, SeasonState,
};
pub use team::{Rivalry, StaffMember, StaffRole, StaffTier, Strategy, Team, TrainingCounts};
