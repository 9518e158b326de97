//! Single-match resolution.

use rand::Rng;

use crate::models::{GameMap, MatchResult, StaffRole, Team};
use crate::player::calculator::{player_overall, team_effective_strength};

/// Default counter multiplier when no strategist is on staff.
const BASE_COUNTER_MULT: f64 = 1.10;

/// Resolve one match. Pure except for the RNG: team records, budgets and
/// rivalries are the caller's responsibility to update from the result.
///
/// The home side gets a flat +2 scoring term, and a raw tie is broken by
/// decrementing the away score, so home never loses a true tie. At most one
/// side can land a strategy counter since each strategy counters exactly
/// one other.
pub fn simulate_match<R: Rng>(
    rng: &mut R,
    home: &Team,
    away: &Team,
    map: &GameMap,
    is_playoff: bool,
) -> MatchResult {
    let mut home_str = team_effective_strength(home, map);
    let mut away_str = team_effective_strength(away, map);

    let home_strat = home.strategy;
    let away_strat = away.strategy;

    let mut counter_msg = String::new();
    if home_strat.counters() == away_strat {
        let mult = counter_mult(home);
        home_str = (home_str as f64 * mult).floor() as u32;
        counter_msg = format!(
            "{} countered {} (+{}%)",
            home_strat.name(),
            away_strat.name(),
            ((mult - 1.0) * 100.0).floor() as u32
        );
    } else if away_strat.counters() == home_strat {
        let mult = counter_mult(away);
        away_str = (away_str as f64 * mult).floor() as u32;
        counter_msg = format!(
            "{} countered {} (+{}%)",
            away_strat.name(),
            home_strat.name(),
            ((mult - 1.0) * 100.0).floor() as u32
        );
    }

    let home_score = roll_score(rng, home_str, 2);
    let away_score = roll_score(rng, away_str, 0);

    let viewership = roll_viewership(rng, home, away, home_score, away_score, is_playoff);

    let (home_score, away_score) = if home_score == away_score {
        (home_score, away_score - 1)
    } else {
        (home_score, away_score)
    };
    let winner_id =
        if home_score > away_score { home.id.clone() } else { away.id.clone() };

    MatchResult {
        home_id: home.id.clone(),
        away_id: away.id.clone(),
        home_score,
        away_score,
        winner_id,
        counter_msg,
        map: map.clone(),
        home_strategy: home_strat,
        away_strategy: away_strat,
        viewership,
    }
}

fn counter_mult(team: &Team) -> f64 {
    team.staff_member(StaffRole::Strategist).map(|s| s.bonus_val).unwrap_or(BASE_COUNTER_MULT)
}

fn roll_score<R: Rng>(rng: &mut R, strength: u32, home_field: i64) -> u32 {
    let base = (strength as f64 * 0.8).floor() as i64;
    (base + home_field + rng.gen_range(-10..=9i64)).clamp(10, 100) as u32
}

/// Broadcast audience for a match: star power, team reputation, rivalry
/// heat, playoff hype and a viral bonus for close finishes.
fn roll_viewership<R: Rng>(
    rng: &mut R,
    home: &Team,
    away: &Team,
    home_score: u32,
    away_score: u32,
    is_playoff: bool,
) -> u64 {
    let mut viewers: u64 = 5000;

    let stars = home.roster.iter().chain(away.roster.iter())
        .filter(|p| player_overall(p) > 85)
        .count() as u64;
    viewers += stars * 1500;

    viewers += (home.wins + away.wins) as u64 * 200;

    if let Some(rivalry) = home.rivalry_with(&away.id) {
        viewers += rivalry.intensity as u64 * 100;
    }

    if is_playoff {
        viewers *= 2;
    }

    viewers += rng.gen_range(0..3000u64);

    if home_score.abs_diff(away_score) <= 5 {
        viewers += 5000;
    }
    viewers
}
