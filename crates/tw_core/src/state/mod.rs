//! League orchestration: the single-owner aggregate for all league state
//! and its phase transitions.
//!
//! Only this module mutates teams, the schedule and the season. The
//! rating, match, rivalry and economy functions it calls are pure; every
//! transition commits its state changes before any presentation concern
//! (recaps, feeds) is serviced.

mod draft;
mod front_office;

pub use draft::{DraftPick, DraftState};
pub use front_office::{TrainingReport, TrainingStat};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::{MAPS, SQUAD_NAME_PRESETS, TOTAL_SEASON_WEEKS};
use crate::error::{CoreError, Result};
use crate::models::{
    GameMap, MatchResult, PlayoffBracket, PlayoffStage, Player, ScheduleMatch, SeasonMode,
    SeasonSchedule, SeasonState, StaffRole, Strategy, Team,
};
use crate::rivalry::update_rivalry;

/// Where the league sits in its season state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Drafting,
    RegularSeason,
    Playoffs,
    SeasonSummary,
    GameOver,
}

/// What one call to [`League::advance_week`] did.
#[derive(Debug, Clone, Default)]
pub struct WeekReport {
    pub week: u32,
    pub results: Vec<MatchResult>,
    /// The user team's result this week, if it played.
    pub player_result: Option<MatchResult>,
    /// Prize plus sponsor money credited to the user team (before payroll).
    pub player_earnings: i64,
    pub emergency_funding: bool,
    pub playoffs_seeded: bool,
    pub champion_id: Option<String>,
    pub game_over: bool,
}

/// The whole league: teams, season, schedule, draft and free agency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub teams: Vec<Team>,
    pub player_team_id: String,
    pub season: SeasonState,
    pub schedule: SeasonSchedule,
    pub free_agents: Vec<Player>,
    #[serde(default)]
    pub draft: DraftState,
    #[serde(default)]
    pub career_championships: u32,
    pub phase: Phase,
    /// User-team contracts that lapse at rollover (dynasty), offered for
    /// re-signing during the season summary.
    #[serde(default)]
    pub expiring_contracts: Vec<String>,
}

impl League {
    /// Found the league: one user franchise plus CPU squads from the
    /// preset name list, a full round-robin schedule, and the opening
    /// draft pool and snake order.
    pub fn new<R: Rng>(rng: &mut R, squad_name: &str, mode: SeasonMode) -> Self {
        let mut teams = vec![Team::new("player-squad", squad_name, true)];
        for (i, name) in SQUAD_NAME_PRESETS.iter().take(crate::data::LEAGUE_SIZE - 1).enumerate()
        {
            let mut cpu = Team::new(&format!("cpu-{}", i), name, false);
            cpu.chemistry = 60 + rng.gen_range(0..20u8);
            teams.push(cpu);
        }

        let schedule = crate::engine::generate_season_schedule(&teams);
        let draft = DraftState {
            pool: draft::generate_draft_pool(rng),
            order: draft::build_draft_order(rng, &teams),
            current_pick: 0,
            clock: crate::data::DRAFT_CLOCK,
            auto_draft: false,
            log: Vec::new(),
        };

        log::info!("league founded: {} squads, mode {:?}", teams.len(), mode);
        Self {
            teams,
            player_team_id: "player-squad".to_string(),
            season: SeasonState::new(mode),
            schedule,
            free_agents: Vec::new(),
            draft,
            career_championships: 0,
            phase: Phase::Drafting,
            expiring_contracts: Vec::new(),
        }
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn player_team(&self) -> &Team {
        self.team(&self.player_team_id).expect("user team must exist")
    }

    fn team_index(&self, id: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.id == id)
    }

    /// Standings order: wins, then kill-death differential.
    pub fn standings(&self) -> Vec<&Team> {
        let mut sorted: Vec<&Team> = self.teams.iter().collect();
        sorted.sort_by(|a, b| b.wins.cmp(&a.wins).then(b.kd_diff().cmp(&a.kd_diff())));
        sorted
    }

    /// Advance the league by one step: a regular-season match week, the
    /// playoff seeding hand-off, or one playoff round.
    pub fn advance_week<R: Rng>(&mut self, rng: &mut R) -> Result<WeekReport> {
        match self.phase {
            Phase::RegularSeason => {}
            Phase::Playoffs => return self.advance_playoffs(rng),
            _ => return Err(CoreError::WrongPhase("no matches to simulate".into())),
        }

        if self.season.week > TOTAL_SEASON_WEEKS {
            return self.seed_playoffs();
        }
        self.simulate_regular_week(rng)
    }

    fn simulate_regular_week<R: Rng>(&mut self, rng: &mut R) -> Result<WeekReport> {
        let week = self.season.week;
        let map = random_map(rng);
        self.roll_cpu_strategies(rng);

        let fixtures = self.schedule.get(&week).cloned().unwrap_or_default();
        let mut report = WeekReport { week, ..WeekReport::default() };
        let mut played: Vec<ScheduleMatch> = Vec::with_capacity(fixtures.len());

        for fixture in &fixtures {
            let result = self.play_fixture(rng, fixture, &map, false)?;
            self.apply_regular_result(&result, week);

            if result.home_id == self.player_team_id || result.away_id == self.player_team_id {
                report.player_earnings = self.user_earnings(&result);
                report.player_result = Some(result.clone());
            }
            let mut done = fixture.clone();
            done.result = Some(result.clone());
            played.push(done);
            report.results.push(result);
        }
        self.schedule.insert(week, played);

        for team in &mut self.teams {
            team.training_counts = Default::default();
        }

        // League-mandated solvency backstop for the user franchise.
        let user_idx = self.team_index(&self.player_team_id).expect("user team");
        if self.teams[user_idx].budget < 50 {
            self.teams[user_idx].budget += 100;
            report.emergency_funding = true;
            log::info!("emergency funding injected for {}", self.teams[user_idx].name);
        }
        if self.teams[user_idx].budget < 0 {
            self.phase = Phase::GameOver;
            report.game_over = true;
            log::warn!("user franchise insolvent, season over");
            return Ok(report);
        }

        self.season.week += 1;
        if week == TOTAL_SEASON_WEEKS {
            self.phase = Phase::Playoffs;
        }
        Ok(report)
    }

    /// Top four qualify; semifinals pair 1v4 and 2v3.
    fn seed_playoffs(&mut self) -> Result<WeekReport> {
        let qualified: Vec<String> =
            self.standings().iter().take(4).map(|t| t.id.clone()).collect();
        let bracket = PlayoffBracket {
            semis: vec![
                ScheduleMatch::new(&qualified[0], &qualified[3]),
                ScheduleMatch::new(&qualified[1], &qualified[2]),
            ],
            finals: Vec::new(),
        };
        self.season.playoff_stage = Some(PlayoffStage::Semis);
        self.season.playoff_matches = Some(bracket);
        self.phase = Phase::Playoffs;
        log::info!("playoffs seeded: {:?}", qualified);

        Ok(WeekReport { week: self.season.week, playoffs_seeded: true, ..Default::default() })
    }

    fn advance_playoffs<R: Rng>(&mut self, rng: &mut R) -> Result<WeekReport> {
        let stage = match self.season.playoff_stage {
            Some(stage) => stage,
            None => return self.seed_playoffs(),
        };
        if stage == PlayoffStage::Complete {
            self.enter_season_summary();
            return Ok(WeekReport { week: self.season.week, ..Default::default() });
        }

        let map = random_map(rng);
        let week = self.season.week;
        let bracket = self.season.playoff_matches.clone().unwrap_or_default();
        let round = match stage {
            PlayoffStage::Semis => bracket.semis.clone(),
            _ => bracket.finals.clone(),
        };

        let mut report = WeekReport { week, ..WeekReport::default() };
        let mut played = Vec::with_capacity(round.len());
        for fixture in &round {
            let result = self.play_fixture(rng, fixture, &map, true)?;
            self.apply_rivalries(&result, week);
            if result.home_id == self.player_team_id || result.away_id == self.player_team_id {
                report.player_result = Some(result.clone());
            }
            let mut done = fixture.clone();
            done.result = Some(result.clone());
            played.push(done);
            report.results.push(result);
        }

        let mut bracket = self.season.playoff_matches.clone().unwrap_or_default();
        match stage {
            PlayoffStage::Semis => {
                let finalists: Vec<String> = played
                    .iter()
                    .map(|m| m.result.as_ref().expect("just simulated").winner_id.clone())
                    .collect();
                bracket.finals = vec![ScheduleMatch::new(&finalists[0], &finalists[1])];
                bracket.semis = played;
                self.season.playoff_stage = Some(PlayoffStage::Finals);
            }
            _ => {
                let champion_id =
                    played[0].result.as_ref().expect("just simulated").winner_id.clone();
                bracket.finals = played;
                self.season.playoff_stage = Some(PlayoffStage::Complete);
                let season = self.season.season;
                if let Some(champ) = self.team_mut(&champion_id) {
                    champ.championships += 1;
                    log::info!("{} win the season {} title", champ.name, season);
                }
                if champion_id == self.player_team_id {
                    self.career_championships += 1;
                }
                report.champion_id = Some(champion_id);
            }
        }
        self.season.playoff_matches = Some(bracket);
        Ok(report)
    }

    fn enter_season_summary(&mut self) {
        self.phase = Phase::SeasonSummary;
        self.expiring_contracts = if self.season.mode == SeasonMode::Dynasty {
            self.player_team()
                .roster
                .iter()
                .filter(|p| p.contract_years <= 1)
                .map(|p| p.id.clone())
                .collect()
        } else {
            Vec::new()
        };
    }

    /// Roll the league into its next campaign.
    ///
    /// Standard mode wipes rosters, staff, rivalries and budgets. Dynasty
    /// mode ages contracts (dropping expired pilots), regresses chemistry
    /// toward 50 and carries part of the budget forward. Either way a new
    /// pool is generated and a fresh snake order drawn.
    pub fn start_next_season<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        if self.phase != Phase::SeasonSummary {
            return Err(CoreError::WrongPhase("the season has not concluded".into()));
        }

        let mode = self.season.mode;
        for team in &mut self.teams {
            team.wins = 0;
            team.losses = 0;
            team.kills = 0;
            team.deaths = 0;
            team.training_counts = Default::default();
            team.trade_refusals = 0;
            match mode {
                SeasonMode::Standard => {
                    team.roster.clear();
                    team.budget = crate::data::STARTING_BUDGET;
                    team.staff.clear();
                    team.chemistry = 50;
                    team.rivalries.clear();
                }
                SeasonMode::Dynasty => {
                    for p in &mut team.roster {
                        p.refresh_original_stats();
                        p.contract_years = p.contract_years.saturating_sub(1);
                    }
                    team.roster.retain(|p| p.contract_years > 0);
                    team.budget = crate::data::STARTING_BUDGET + team.budget.min(100);
                    team.chemistry = (team.chemistry + 50) / 2;
                }
            }
        }

        self.season.week = 1;
        self.season.season += 1;
        self.season.is_drafting = true;
        self.season.playoff_stage = None;
        self.season.playoff_matches = None;
        self.schedule = crate::engine::generate_season_schedule(&self.teams);
        self.draft = DraftState {
            pool: draft::generate_draft_pool(rng),
            order: draft::build_draft_order(rng, &self.teams),
            current_pick: 0,
            clock: crate::data::DRAFT_CLOCK,
            auto_draft: false,
            log: Vec::new(),
        };
        self.expiring_contracts.clear();
        self.phase = Phase::Drafting;
        log::info!("season {} begins", self.season.season);
        Ok(())
    }

    // Helpers

    fn play_fixture<R: Rng>(
        &self,
        rng: &mut R,
        fixture: &ScheduleMatch,
        map: &GameMap,
        is_playoff: bool,
    ) -> Result<MatchResult> {
        let home = self
            .team(&fixture.home_id)
            .ok_or_else(|| CoreError::NotFound(format!("team {}", fixture.home_id)))?;
        let away = self
            .team(&fixture.away_id)
            .ok_or_else(|| CoreError::NotFound(format!("team {}", fixture.away_id)))?;
        Ok(crate::engine::simulate_match(rng, home, away, map, is_playoff))
    }

    /// Fold one regular-season result into records, chemistry, morale,
    /// rivalries and budgets.
    fn apply_regular_result(&mut self, result: &MatchResult, week: u32) {
        let dynasty = self.season.mode == SeasonMode::Dynasty;
        let hi = self.team_index(&result.home_id).expect("home team");
        let ai = self.team_index(&result.away_id).expect("away team");
        let home_won = result.winner_id == result.home_id;
        let (wi, li) = if home_won { (hi, ai) } else { (ai, hi) };

        self.teams[wi].wins += 1;
        self.teams[li].losses += 1;
        self.teams[hi].kills += result.home_score;
        self.teams[hi].deaths += result.away_score;
        self.teams[ai].kills += result.away_score;
        self.teams[ai].deaths += result.home_score;

        if dynasty {
            self.teams[wi].chemistry = (self.teams[wi].chemistry + 2).min(100);
            self.teams[li].chemistry = self.teams[li].chemistry.saturating_sub(1);
            for p in &mut self.teams[wi].roster {
                p.morale = (p.morale + 3).min(100);
            }
            for p in &mut self.teams[li].roster {
                p.morale = p.morale.saturating_sub(2);
            }
        }

        self.apply_rivalries(result, week);

        let home_delta = financial_delta(&self.teams[hi], home_won, result.viewership);
        let away_delta = financial_delta(&self.teams[ai], !home_won, result.viewership);
        self.teams[hi].budget += home_delta;
        self.teams[ai].budget += away_delta;
    }

    fn apply_rivalries(&mut self, result: &MatchResult, week: u32) {
        let hi = self.team_index(&result.home_id).expect("home team");
        let ai = self.team_index(&result.away_id).expect("away team");
        let diff = result.home_score as i64 - result.away_score as i64;
        let (home_name, away_name) =
            (self.teams[hi].name.clone(), self.teams[ai].name.clone());

        self.teams[hi].rivalries = update_rivalry(
            &self.teams[hi].rivalries,
            &result.away_id,
            &away_name,
            diff,
            week,
        );
        self.teams[ai].rivalries = update_rivalry(
            &self.teams[ai].rivalries,
            &result.home_id,
            &home_name,
            -diff,
            week,
        );
    }

    fn user_earnings(&self, result: &MatchResult) -> i64 {
        let team = self.player_team();
        let won = result.winner_id == team.id;
        let mut prize: i64 = if won { 25 } else { 12 };
        if let Some(cm) = team.staff_member(StaffRole::CommunityManager) {
            prize = (prize as f64 * cm.bonus_val).floor() as i64;
        }
        prize + (result.viewership / 5000) as i64
    }

    fn roll_cpu_strategies<R: Rng>(&mut self, rng: &mut R) {
        for team in &mut self.teams {
            if !team.is_player {
                team.strategy = *Strategy::ALL.choose(rng).expect("non-empty");
            }
        }
    }
}

fn random_map<R: Rng>(rng: &mut R) -> GameMap {
    MAPS[rng.gen_range(0..MAPS.len())].clone()
}

/// Weekly budget delta: prize money (scaled by the community manager),
/// sponsor money from viewership, minus the week's payroll.
fn financial_delta(team: &Team, won: bool, viewership: u64) -> i64 {
    let mut prize: i64 = if won { 25 } else { 12 };
    if let Some(cm) = team.staff_member(StaffRole::CommunityManager) {
        prize = (prize as f64 * cm.bonus_val).floor() as i64;
    }
    prize += (viewership / 5000) as i64;

    let payroll: i64 = team.roster.iter().map(|p| p.salary).sum::<i64>()
        / crate::data::TOTAL_SEASON_WEEKS as i64;
    prize - payroll
}
