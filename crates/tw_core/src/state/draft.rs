//! Entry draft state machine: snake order, pick clock, auto-draft.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::{
    DRAFT_CLOCK, DRAFT_POOL_SIZE, DRAFT_ROUNDS, NAMED_LEGEND_CHANCE, NAMED_POOL_DRAW,
    POOL_FORCED_LEGENDS, REAL_PLAYER_NAMES,
};
use crate::error::{CoreError, Result};
use crate::models::{Player, PlayerTier, Team};
use crate::player::calculator::player_overall;
use crate::player::generator::generate_player;

use super::{League, Phase};

/// One completed selection, newest first in the draft log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub round: usize,
    pub team_id: String,
    pub team_name: String,
    pub player: String,
    pub overall: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftState {
    /// Remaining prospects, kept sorted descending by overall so index 0
    /// is always best-available.
    pub pool: Vec<Player>,
    /// Team ids in pick order across all rounds (snake).
    pub order: Vec<String>,
    pub current_pick: usize,
    /// Ticks left on the current pick's clock.
    pub clock: u32,
    /// When set, the user's picks resolve best-available with no delay.
    pub auto_draft: bool,
    pub log: Vec<DraftPick>,
}

impl DraftState {
    /// The team holding the current pick, or None once the order is spent.
    pub fn on_the_clock(&self) -> Option<&str> {
        self.order.get(self.current_pick).map(|s| s.as_str())
    }

    pub fn is_complete(&self) -> bool {
        self.current_pick >= self.order.len() || self.pool.is_empty()
    }

    fn round_of(&self, pick_index: usize, team_count: usize) -> usize {
        pick_index / team_count + 1
    }
}

/// Generate a fresh season pool: a shuffled draw of named veterans (each
/// with a 15% Legend roll) topped up with generated rookies, of which the
/// first eight are forced Legends. Sorted descending by overall.
pub(crate) fn generate_draft_pool<R: Rng>(rng: &mut R) -> Vec<Player> {
    let mut names: Vec<&str> = REAL_PLAYER_NAMES.to_vec();
    names.shuffle(rng);
    names.truncate(NAMED_POOL_DRAW);

    let mut pool: Vec<Player> = names
        .iter()
        .map(|name| {
            let tier = if rng.gen_bool(NAMED_LEGEND_CHANCE) {
                PlayerTier::Legend
            } else {
                PlayerTier::Normal
            };
            generate_player(rng, tier, Some(name))
        })
        .collect();

    let remaining = DRAFT_POOL_SIZE.saturating_sub(pool.len());
    for i in 0..remaining {
        let tier =
            if i < POOL_FORCED_LEGENDS { PlayerTier::Legend } else { PlayerTier::Normal };
        pool.push(generate_player(rng, tier, None));
    }

    pool.sort_by(|a, b| player_overall(b).cmp(&player_overall(a)));
    pool
}

/// Snake order: teams shuffled once, then the sequence reverses every
/// other round.
pub(crate) fn build_draft_order<R: Rng>(rng: &mut R, teams: &[Team]) -> Vec<String> {
    let mut seed: Vec<&Team> = teams.iter().collect();
    seed.shuffle(rng);

    let mut order = Vec::with_capacity(teams.len() * DRAFT_ROUNDS);
    for round in 0..DRAFT_ROUNDS {
        if round % 2 == 0 {
            order.extend(seed.iter().map(|t| t.id.clone()));
        } else {
            order.extend(seed.iter().rev().map(|t| t.id.clone()));
        }
    }
    order
}

impl League {
    /// Execute a pick for the team currently on the clock.
    pub fn run_draft_pick(&mut self, team_id: &str, player_id: &str) -> Result<DraftPick> {
        if self.phase != Phase::Drafting {
            return Err(CoreError::WrongPhase("the draft is not running".into()));
        }
        match self.draft.on_the_clock() {
            Some(on_clock) if on_clock == team_id => {}
            Some(on_clock) => {
                return Err(CoreError::InvalidParameter(format!(
                    "{} is on the clock, not {}",
                    on_clock, team_id
                )));
            }
            None => return Err(CoreError::WrongPhase("the draft order is spent".into())),
        }

        let pool_idx = self
            .draft
            .pool
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| CoreError::NotFound(format!("player {} not in pool", player_id)))?;
        let player = self.draft.pool.remove(pool_idx);

        let team_count = self.teams.len();
        let round = self.draft.round_of(self.draft.current_pick, team_count);
        let team = self
            .team_mut(team_id)
            .ok_or_else(|| CoreError::NotFound(format!("team {}", team_id)))?;
        let pick = DraftPick {
            round,
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            player: player.gamertag.clone(),
            overall: player_overall(&player),
        };
        team.roster.push(player);

        log::debug!(
            "round {} pick: {} selects {} ({})",
            pick.round,
            pick.team_name,
            pick.player,
            pick.overall
        );
        self.draft.log.insert(0, pick.clone());
        self.draft.current_pick += 1;
        self.draft.clock = DRAFT_CLOCK;

        if self.draft.is_complete() {
            self.finish_draft();
        }
        Ok(pick)
    }

    /// Best-available pick for whichever team is on the clock.
    pub fn auto_pick(&mut self) -> Result<Option<DraftPick>> {
        if self.phase != Phase::Drafting {
            return Err(CoreError::WrongPhase("the draft is not running".into()));
        }
        let team_id = match self.draft.on_the_clock() {
            Some(id) => id.to_string(),
            None => return Ok(None),
        };
        let player_id = match self.draft.pool.first() {
            Some(p) => p.id.clone(),
            None => {
                self.finish_draft();
                return Ok(None);
            }
        };
        self.run_draft_pick(&team_id, &player_id).map(Some)
    }

    /// Resolve consecutive CPU picks (and the user's, under auto-draft)
    /// until the user is on the clock or the draft completes.
    pub fn advance_cpu_picks(&mut self) -> Result<Vec<DraftPick>> {
        let mut picks = Vec::new();
        while self.phase == Phase::Drafting {
            let on_clock = match self.draft.on_the_clock() {
                Some(id) => id.to_string(),
                None => break,
            };
            if on_clock == self.player_team_id && !self.draft.auto_draft {
                break;
            }
            match self.auto_pick()? {
                Some(pick) => picks.push(pick),
                None => break,
            }
        }
        Ok(picks)
    }

    /// Run the pick clock down. On expiry the pick on the clock resolves
    /// best-available, user or CPU alike.
    pub fn tick_draft_clock(&mut self, ticks: u32) -> Result<Option<DraftPick>> {
        if self.phase != Phase::Drafting {
            return Err(CoreError::WrongPhase("the draft is not running".into()));
        }
        self.draft.clock = self.draft.clock.saturating_sub(ticks);
        if self.draft.clock == 0 {
            return self.auto_pick();
        }
        Ok(None)
    }

    pub fn set_auto_draft(&mut self, enabled: bool) {
        self.draft.auto_draft = enabled;
    }

    /// Finish the draft immediately. CPU teams take best-available for
    /// every remaining pick; the user's remaining picks are forfeited, not
    /// auto-filled.
    pub fn end_draft_early(&mut self) -> Result<Vec<DraftPick>> {
        if self.phase != Phase::Drafting {
            return Err(CoreError::WrongPhase("the draft is not running".into()));
        }
        self.draft.auto_draft = true;

        let mut picks = Vec::new();
        while self.draft.current_pick < self.draft.order.len() && !self.draft.pool.is_empty() {
            let team_id = self.draft.order[self.draft.current_pick].clone();
            if team_id == self.player_team_id {
                // Forfeited by choice: skip without consuming a prospect.
                self.draft.current_pick += 1;
                continue;
            }
            let player_id = self.draft.pool[0].id.clone();
            picks.push(self.run_draft_pick(&team_id, &player_id)?);
            if self.phase != Phase::Drafting {
                return Ok(picks);
            }
        }
        if self.phase == Phase::Drafting {
            self.finish_draft();
        }
        Ok(picks)
    }

    /// Undrafted prospects become the season's free-agent pool.
    pub(crate) fn finish_draft(&mut self) {
        self.free_agents = std::mem::take(&mut self.draft.pool);
        self.season.is_drafting = false;
        self.phase = Phase::RegularSeason;
        log::info!(
            "draft complete after {} picks, {} free agents available",
            self.draft.current_pick,
            self.free_agents.len()
        );
    }
}
