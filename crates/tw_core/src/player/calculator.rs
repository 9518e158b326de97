//! Rating engine: pilot overalls, lineup selection and match-effective
//! team strength.
//!
//! The arithmetic deliberately floors after every pipeline stage rather
//! than once at the end; downstream balance numbers depend on the exact
//! rounding sequence.

use crate::models::{GameMap, Player, Role, StaffRole, Team};

/// Role-weighted overall from raw stats.
///
/// Snipers are aim-weighted (0.7/0.3), Supports IQ-weighted (0.3/0.7),
/// every other role an even split.
pub fn player_overall_for(aim: u8, iq: u8, role: Role) -> u8 {
    let (aim_w, iq_w) = match role {
        Role::Sniper => (0.7, 0.3),
        Role::Support => (0.3, 0.7),
        _ => (0.5, 0.5),
    };
    (aim as f64 * aim_w + iq as f64 * iq_w).floor() as u8
}

pub fn player_overall(p: &Player) -> u8 {
    player_overall_for(p.aim, p.iq, p.role)
}

/// How a team's starting five is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineupPolicy {
    /// The first five roster slots, as ordered by the manager.
    ManualOrder,
    /// The five highest overalls, recomputed every match.
    AutoBest,
}

impl LineupPolicy {
    /// The policy a team plays under: the user orders their own lineup,
    /// CPU franchises always field their best five.
    pub fn for_team(team: &Team) -> LineupPolicy {
        if team.is_player {
            LineupPolicy::ManualOrder
        } else {
            LineupPolicy::AutoBest
        }
    }
}

/// The starters a team fields, at most [`crate::data::STARTERS`] pilots.
/// Short rosters field whoever is available.
pub fn select_starters(team: &Team) -> Vec<&Player> {
    select_starters_with(team, LineupPolicy::for_team(team))
}

pub fn select_starters_with(team: &Team, policy: LineupPolicy) -> Vec<&Player> {
    match policy {
        LineupPolicy::ManualOrder => {
            team.roster.iter().take(crate::data::STARTERS).collect()
        }
        LineupPolicy::AutoBest => {
            let mut all: Vec<&Player> = team.roster.iter().collect();
            all.sort_by(|a, b| player_overall(b).cmp(&player_overall(a)));
            all.truncate(crate::data::STARTERS);
            all
        }
    }
}

/// Average starter overall. Zero for an empty roster.
pub fn team_overall(team: &Team) -> u32 {
    let starters = select_starters(team);
    if starters.is_empty() {
        return 0;
    }
    let sum: u32 = starters.iter().map(|p| player_overall(p) as u32).sum();
    sum / starters.len() as u32
}

/// Match-effective strength on a given map.
///
/// Per starter: +15% when the role matches the map bonus, then a mild
/// morale modifier centered at 75. The starter average then takes a
/// chemistry modifier (0 chem = 0.9x, 100 chem = 1.1x) and the head
/// coach multiplier when one is hired.
pub fn team_effective_strength(team: &Team, map: &GameMap) -> u32 {
    let starters = select_starters(team);
    if starters.is_empty() {
        return 0;
    }

    let mut total: u32 = 0;
    for p in &starters {
        let mut effective = player_overall(p) as f64;
        if map.bonus_role == Some(p.role) {
            effective = (effective * 1.15).floor();
        }
        let morale_mod = 1.0 + (p.morale as f64 - 75.0) / 500.0;
        effective = (effective * morale_mod).floor();
        total += effective as u32;
    }

    let mut avg = total / starters.len() as u32;

    let chem_mod = 0.9 + team.chemistry as f64 / 500.0;
    avg = (avg as f64 * chem_mod).floor() as u32;

    if let Some(coach) = team.staff_member(StaffRole::HeadCoach) {
        avg = (avg as f64 * coach.bonus_val).floor() as u32;
    }
    avg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StaffMember, StaffTier};

    fn pilot(id: &str, role: Role, aim: u8, iq: u8) -> Player {
        Player {
            id: id.to_string(),
            gamertag: id.to_string(),
            role,
            age: 20,
            aim,
            iq,
            potential: 90,
            salary: 10,
            contract_years: 1,
            morale: 75,
            previous_team_id: None,
            original_stats: None,
        }
    }

    #[test]
    fn overall_uses_role_weighting() {
        assert_eq!(player_overall_for(80, 60, Role::Sniper), 74); // 56 + 18
        assert_eq!(player_overall_for(80, 60, Role::Support), 66); // 24 + 42
        assert_eq!(player_overall_for(80, 60, Role::Rusher), 70);
        assert_eq!(player_overall_for(81, 60, Role::Rusher), 70); // floored
    }

    #[test]
    fn overall_stays_in_range() {
        for role in Role::ALL {
            assert_eq!(player_overall_for(0, 0, role), 0);
            assert_eq!(player_overall_for(99, 99, role), 99);
        }
    }

    #[test]
    fn empty_roster_rates_zero() {
        let team = Team::new("t", "Empty", false);
        assert_eq!(team_overall(&team), 0);
        assert_eq!(team_effective_strength(&team, &crate::data::MAPS[0]), 0);
    }

    #[test]
    fn cpu_lineup_takes_best_five() {
        let mut team = Team::new("t", "CPU", false);
        // Weakest pilots occupy the first slots.
        for i in 0..3 {
            team.roster.push(pilot(&format!("weak{}", i), Role::Rusher, 50, 50));
        }
        for i in 0..5 {
            team.roster.push(pilot(&format!("star{}", i), Role::Rusher, 90, 90));
        }
        let starters = select_starters(&team);
        assert_eq!(starters.len(), 5);
        assert!(starters.iter().all(|p| p.aim == 90));
    }

    #[test]
    fn user_lineup_respects_manual_order() {
        let mut team = Team::new("t", "User", true);
        for i in 0..3 {
            team.roster.push(pilot(&format!("weak{}", i), Role::Rusher, 50, 50));
        }
        for i in 0..5 {
            team.roster.push(pilot(&format!("star{}", i), Role::Rusher, 90, 90));
        }
        let starters = select_starters(&team);
        // The benched stars do not play: first five slots are fielded.
        assert_eq!(starters.iter().filter(|p| p.aim == 50).count(), 3);
    }

    #[test]
    fn map_bonus_applies_to_matching_role_only() {
        let mut team = Team::new("t", "CPU", false);
        team.roster.push(pilot("r", Role::Rusher, 80, 80));
        let neutral = team_effective_strength(&team, &crate::data::MAPS[0]);
        let cqc = team_effective_strength(&team, &crate::data::MAPS[1]); // Rusher map
        assert!(cqc > neutral);

        let sniper_map = team_effective_strength(&team, &crate::data::MAPS[2]);
        assert_eq!(sniper_map, neutral);
    }

    #[test]
    fn chemistry_scales_the_team_average() {
        let mut team = Team::new("t", "CPU", false);
        for i in 0..5 {
            team.roster.push(pilot(&format!("p{}", i), Role::Flanker, 80, 80));
        }
        team.chemistry = 0;
        let low = team_effective_strength(&team, &crate::data::MAPS[0]);
        team.chemistry = 100;
        let high = team_effective_strength(&team, &crate::data::MAPS[0]);
        // 0.9x vs 1.1x of the same floored average.
        assert_eq!(low, 72);
        assert_eq!(high, 88);
    }

    #[test]
    fn head_coach_multiplies_after_chemistry() {
        let mut team = Team::new("t", "CPU", false);
        for i in 0..5 {
            team.roster.push(pilot(&format!("p{}", i), Role::Flanker, 80, 80));
        }
        team.chemistry = 50; // neutral 1.0x
        let before = team_effective_strength(&team, &crate::data::MAPS[0]);
        team.staff.insert(
            StaffRole::HeadCoach,
            StaffMember { name: "Coach".into(), tier: StaffTier::Gold, bonus_val: 1.10 },
        );
        let after = team_effective_strength(&team, &crate::data::MAPS[0]);
        assert_eq!(after, (before as f64 * 1.10).floor() as u32);
    }
}
