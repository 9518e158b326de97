use serde::{Deserialize, Serialize};

/// Combat role a pilot occupies in the starting five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Rusher,
    Sniper,
    // "Medic" was retired after season one; old snapshots still carry it.
    #[serde(alias = "Medic")]
    Support,
    Flanker,
    Anchor,
}

impl Role {
    pub const ALL: [Role; 5] =
        [Role::Rusher, Role::Sniper, Role::Support, Role::Flanker, Role::Anchor];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Rusher => "Rusher",
            Role::Sniper => "Sniper",
            Role::Support => "Support",
            Role::Flanker => "Flanker",
            Role::Anchor => "Anchor",
        }
    }
}

/// Aim/IQ values captured when the current season began, used to report
/// development deltas at season's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSnapshot {
    pub aim: u8,
    pub iq: u8,
}

/// A pilot under contract or in a pool.
///
/// Skill stats are always clamped to [0, 99]; morale to [0, 100]. Potential
/// is aspirational only; a pilot can regress below it and it is never
/// re-raised to match the derived overall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub gamertag: String,
    pub role: Role,
    pub age: u8,
    pub aim: u8,
    pub iq: u8,
    pub potential: u8,
    /// Season salary in currency units (thousands).
    pub salary: i64,
    pub contract_years: u8,
    pub morale: u8,
    /// Last franchise this pilot played for, set when released to free
    /// agency. A back-reference, not ownership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_team_id: Option<String>,
    /// Backfilled from current stats on older snapshots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_stats: Option<StatSnapshot>,
}

impl Player {
    /// Development delta since the season started, `(aim, iq)`.
    pub fn development(&self) -> (i16, i16) {
        match self.original_stats {
            Some(orig) => {
                (self.aim as i16 - orig.aim as i16, self.iq as i16 - orig.iq as i16)
            }
            None => (0, 0),
        }
    }

    /// Refresh the season-start snapshot to the current stats.
    pub fn refresh_original_stats(&mut self) {
        self.original_stats = Some(StatSnapshot { aim: self.aim, iq: self.iq });
    }
}

/// Quality band used by the generator when rolling stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTier {
    Normal,
    Legend,
}
