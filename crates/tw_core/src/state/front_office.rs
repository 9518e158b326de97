//! User-team management: training sessions, the staff market, free
//! agency, releases, contract extensions and trades.
//!
//! Every operation here validates funds against the available budget
//! (budget minus remaining contract obligations), not the raw balance.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::{
    staff_bonus, STAFF_HIRE_COSTS, STAFF_PROMOTION_COSTS, STAFF_RELEASE_REFUNDS,
    TOTAL_SEASON_WEEKS,
};
use crate::economy::{available_funds, evaluate_trade, prorated_salary};
use crate::error::{CoreError, Result};
use crate::models::{StaffMember, StaffRole, StaffTier};
use crate::rivalry::{record_rivalry, REASON_STOLEN_TALENT, STOLEN_TALENT_INTENSITY};

use super::{League, Phase};

/// Weekly training sessions the user team can run.
const WEEKLY_TRAINING_CAP: u8 = 3;
/// Team building is intensive and runs at most once per week.
const TEAM_BUILDING_CAP: u8 = 1;
/// Success odds for the first, second and third stat session of a week.
const SESSION_RATES: [u32; 3] = [100, 66, 33];
/// Pilots drawn into each stat session.
const TRAINEES_PER_SESSION: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingStat {
    Aim,
    Iq,
    TeamBuilding,
}

/// Outcome of one training session.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub stat: TrainingStat,
    pub success: bool,
    pub cost: i64,
    pub chemistry_delta: i16,
    /// Per-pilot stat deltas, by gamertag. Empty for team building.
    pub changes: Vec<(String, i16)>,
}

impl League {
    /// Run one training session for the user team. Cost doubles with each
    /// session already used this week; stat sessions get harder too.
    pub fn train<R: Rng>(&mut self, rng: &mut R, stat: TrainingStat) -> Result<TrainingReport> {
        if self.phase != Phase::RegularSeason || self.season.week > TOTAL_SEASON_WEEKS {
            return Err(CoreError::WrongPhase(
                "the training facility is closed for the post-season".into(),
            ));
        }

        let week = self.season.week;
        let user_id = self.player_team_id.clone();
        let team = self.team_mut(&user_id).expect("user team must exist");

        let used = team.training_counts.total();
        if used >= WEEKLY_TRAINING_CAP {
            return Err(CoreError::TrainingCapReached(format!(
                "{} sessions already used this week",
                WEEKLY_TRAINING_CAP
            )));
        }
        if stat == TrainingStat::TeamBuilding
            && team.training_counts.team_building >= TEAM_BUILDING_CAP
        {
            return Err(CoreError::TrainingCapReached(
                "team building is limited to once per week".into(),
            ));
        }

        let cost = 3i64 << used;
        let funds = available_funds(team, week);
        if funds < cost {
            return Err(CoreError::InsufficientFunds { needed: cost, available: funds });
        }

        let mut report = TrainingReport {
            stat,
            success: true,
            cost,
            chemistry_delta: 0,
            changes: Vec::new(),
        };

        match stat {
            TrainingStat::TeamBuilding => {
                let delta = rng.gen_range(10..=15i16);
                team.chemistry = (team.chemistry as i16 + delta).clamp(0, 100) as u8;
                report.chemistry_delta = delta;
                team.training_counts.team_building += 1;
            }
            _ => {
                let rate = SESSION_RATES[used as usize];
                let success = rng.gen_range(0..100u32) < rate;
                report.success = success;
                report.chemistry_delta = if success { 2 } else { -5 };
                team.chemistry =
                    (team.chemistry as i16 + report.chemistry_delta).clamp(0, 100) as u8;

                let mut indices: Vec<usize> = (0..team.roster.len()).collect();
                indices.shuffle(rng);
                for idx in indices.into_iter().take(TRAINEES_PER_SESSION) {
                    let delta: i16 =
                        if success { rng.gen_range(1..=3) } else { -rng.gen_range(1..=2) };
                    let pilot = &mut team.roster[idx];
                    let value = match stat {
                        TrainingStat::Aim => &mut pilot.aim,
                        _ => &mut pilot.iq,
                    };
                    *value = (*value as i16 + delta).clamp(0, 99) as u8;
                    report.changes.push((pilot.gamertag.clone(), delta));
                }
                match stat {
                    TrainingStat::Aim => team.training_counts.aim += 1,
                    _ => team.training_counts.iq += 1,
                }
            }
        }

        team.budget -= cost;
        log::debug!("training session ({:?}) complete, cost {}", stat, cost);
        Ok(report)
    }

    /// Hire a staff member at Bronze, Silver or Gold. Prismatic staff can
    /// only be reached through promotion.
    pub fn hire_staff(&mut self, role: StaffRole, tier: StaffTier, name: &str) -> Result<()> {
        let cost = match tier {
            StaffTier::Bronze => STAFF_HIRE_COSTS[0],
            StaffTier::Silver => STAFF_HIRE_COSTS[1],
            StaffTier::Gold => STAFF_HIRE_COSTS[2],
            StaffTier::Prismatic => {
                return Err(CoreError::InvalidParameter(
                    "Prismatic staff cannot be hired directly".into(),
                ));
            }
        };

        let week = self.season.week;
        let user_id = self.player_team_id.clone();
        let team = self.team_mut(&user_id).expect("user team must exist");
        let funds = available_funds(team, week);
        if funds < cost {
            return Err(CoreError::InsufficientFunds { needed: cost, available: funds });
        }

        team.budget -= cost;
        team.staff.insert(
            role,
            StaffMember { name: name.to_string(), tier, bonus_val: staff_bonus(role, tier) },
        );
        Ok(())
    }

    /// Promote an existing staff member one tier.
    pub fn promote_staff(&mut self, role: StaffRole) -> Result<StaffTier> {
        let week = self.season.week;
        let user_id = self.player_team_id.clone();
        let team = self.team_mut(&user_id).expect("user team must exist");

        let current = team
            .staff_member(role)
            .map(|s| s.tier)
            .ok_or_else(|| CoreError::NotFound(format!("no {:?} on payroll", role)))?;
        let next = current.next().ok_or_else(|| {
            CoreError::InvalidParameter("already at the Prismatic tier".into())
        })?;
        let cost = match current {
            StaffTier::Bronze => STAFF_PROMOTION_COSTS[0],
            StaffTier::Silver => STAFF_PROMOTION_COSTS[1],
            _ => STAFF_PROMOTION_COSTS[2],
        };

        let funds = available_funds(team, week);
        if funds < cost {
            return Err(CoreError::InsufficientFunds { needed: cost, available: funds });
        }

        team.budget -= cost;
        let member = team.staff.get_mut(&role).expect("checked above");
        member.tier = next;
        member.bonus_val = staff_bonus(role, next);
        Ok(next)
    }

    /// Release a staff member, recouping part of the hire cost.
    pub fn release_staff(&mut self, role: StaffRole) -> Result<i64> {
        let user_id = self.player_team_id.clone();
        let team = self.team_mut(&user_id).expect("user team must exist");
        let member = team
            .staff
            .remove(&role)
            .ok_or_else(|| CoreError::NotFound(format!("no {:?} on payroll", role)))?;
        let refund = STAFF_RELEASE_REFUNDS[member.tier as usize];
        team.budget += refund;
        Ok(refund)
    }

    /// Sign a free agent to the user team. The contract obligation is the
    /// prorated remainder of the season's salary, discounted by the
    /// recruiter. Poaching a pilot from a former team sparks a rivalry.
    pub fn sign_free_agent(&mut self, player_id: &str) -> Result<()> {
        let week = self.season.week;
        let cap = self.season.mode.roster_cap();
        let dynasty = self.season.mode == crate::models::SeasonMode::Dynasty;
        let user_id = self.player_team_id.clone();

        let pool_idx = self
            .free_agents
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| CoreError::NotFound(format!("free agent {}", player_id)))?;

        let team = self.team(&user_id).expect("user team must exist");
        if team.roster.len() >= cap {
            return Err(CoreError::RosterFull { cap });
        }

        let player = &self.free_agents[pool_idx];
        let mut obligation = prorated_salary(player.salary, week);
        if let Some(recruiter) = team.staff_member(StaffRole::Recruiter) {
            obligation = (obligation as f64 * (1.0 - recruiter.bonus_val)).floor() as i64;
        }
        let funds = available_funds(team, week);
        if funds < obligation {
            return Err(CoreError::InsufficientFunds { needed: obligation, available: funds });
        }

        let player = self.free_agents.remove(pool_idx);
        let former = player
            .previous_team_id
            .as_ref()
            .filter(|id| **id != user_id)
            .and_then(|id| self.team(id))
            .map(|t| (t.id.clone(), t.name.clone()));

        let team = self.team_mut(&user_id).expect("user team must exist");
        if dynasty {
            team.chemistry = team.chemistry.saturating_sub(10);
        }
        if let Some((former_id, former_name)) = former {
            team.rivalries = record_rivalry(
                &team.rivalries,
                &former_id,
                &former_name,
                REASON_STOLEN_TALENT,
                STOLEN_TALENT_INTENSITY,
                week,
            );
        }
        log::debug!("{} signs free agent {}", team.name, player.gamertag);
        team.roster.push(player);
        Ok(())
    }

    /// Release a pilot from the user roster into free agency.
    pub fn release_player(&mut self, player_id: &str) -> Result<()> {
        let dynasty = self.season.mode == crate::models::SeasonMode::Dynasty;
        let user_id = self.player_team_id.clone();
        let team = self.team_mut(&user_id).expect("user team must exist");

        let idx = team
            .player_index(player_id)
            .ok_or_else(|| CoreError::NotFound(format!("pilot {} not on roster", player_id)))?;
        let mut player = team.roster.remove(idx);
        if dynasty {
            team.chemistry = team.chemistry.saturating_sub(5);
        }
        player.previous_team_id = Some(user_id);
        self.free_agents.insert(0, player);
        Ok(())
    }

    /// Re-sign a pilot whose contract lapses at rollover: a fresh two-year
    /// deal at a 30% salary markup. Only offered during the season summary.
    pub fn resign_player(&mut self, player_id: &str) -> Result<()> {
        if self.phase != Phase::SeasonSummary {
            return Err(CoreError::WrongPhase("extensions open at the season summary".into()));
        }
        let pos = self
            .expiring_contracts
            .iter()
            .position(|id| id == player_id)
            .ok_or_else(|| {
                CoreError::InvalidParameter("that contract is not expiring".into())
            })?;

        let week = self.season.week;
        let user_id = self.player_team_id.clone();
        let team = self.team_mut(&user_id).expect("user team must exist");
        let idx = team
            .player_index(player_id)
            .ok_or_else(|| CoreError::NotFound(format!("pilot {} not on roster", player_id)))?;

        let markup = (team.roster[idx].salary as f64 * 1.3).floor() as i64;
        let funds = available_funds(team, week);
        if funds < markup {
            return Err(CoreError::InsufficientFunds { needed: markup, available: funds });
        }

        team.roster[idx].salary = markup;
        team.roster[idx].contract_years = 2;
        self.expiring_contracts.remove(pos);
        Ok(())
    }

    /// Propose a trade with another franchise. The opposing GM accepts
    /// only when the incoming value beats the outgoing by a 10% premium;
    /// a rejection is remembered. A completed trade dents the user team's
    /// chemistry.
    pub fn propose_trade(
        &mut self,
        target_team_id: &str,
        offered_ids: &[String],
        requested_ids: &[String],
    ) -> Result<()> {
        if target_team_id == self.player_team_id {
            return Err(CoreError::InvalidParameter("cannot trade with yourself".into()));
        }
        if offered_ids.is_empty() && requested_ids.is_empty() {
            return Err(CoreError::InvalidParameter("an empty trade has no effect".into()));
        }
        if has_duplicate_ids(offered_ids) || has_duplicate_ids(requested_ids) {
            return Err(CoreError::InvalidParameter(
                "a pilot cannot appear twice in a trade bundle".into(),
            ));
        }

        let user_id = self.player_team_id.clone();
        let user = self.team(&user_id).expect("user team must exist");
        let target = self
            .team(target_team_id)
            .ok_or_else(|| CoreError::NotFound(format!("team {}", target_team_id)))?;

        let offered = collect_players(user, offered_ids)?;
        let requested = collect_players(target, requested_ids)?;
        let cap = self.season.mode.roster_cap();
        let after = user.roster.len().saturating_sub(offered.len()) + requested.len();
        if after > cap {
            return Err(CoreError::RosterFull { cap });
        }

        if !evaluate_trade(&offered, &requested) {
            self.team_mut(target_team_id).expect("checked above").trade_refusals += 1;
            return Err(CoreError::TradeRejected(
                "the opposing GM believes they are giving up too much value".into(),
            ));
        }

        let user = self.team_mut(&user_id).expect("user team must exist");
        let outgoing = extract_players(user, offered_ids);
        let target = self.team_mut(target_team_id).expect("checked above");
        let incoming = extract_players(target, requested_ids);
        target.roster.extend(outgoing);

        let user = self.team_mut(&user_id).expect("user team must exist");
        user.roster.extend(incoming);
        user.chemistry = user.chemistry.saturating_sub(10);
        log::info!("trade completed with {}", target_team_id);
        Ok(())
    }
}

fn has_duplicate_ids(ids: &[String]) -> bool {
    ids.iter()
        .enumerate()
        .any(|(i, id)| ids[..i].contains(id))
}

fn collect_players<'a>(
    team: &'a crate::models::Team,
    ids: &[String],
) -> Result<Vec<&'a crate::models::Player>> {
    ids.iter()
        .map(|id| {
            team.roster
                .iter()
                .find(|p| p.id == *id)
                .ok_or_else(|| CoreError::NotFound(format!("pilot {} not on {}", id, team.name)))
        })
        .collect()
}

fn extract_players(team: &mut crate::models::Team, ids: &[String]) -> Vec<crate::models::Player> {
    let mut taken = Vec::with_capacity(ids.len());
    let mut i = 0;
    while i < team.roster.len() {
        if ids.contains(&team.roster[i].id) {
            taken.push(team.roster.remove(i));
        } else {
            i += 1;
        }
    }
    taken
}
