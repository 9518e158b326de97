//! Round-robin schedule generation.

use crate::data::TOTAL_SEASON_WEEKS;
use crate::models::{ScheduleMatch, SeasonSchedule, Team};

/// Build the full regular-season schedule with the circle-rotation
/// algorithm: slot 0 stays fixed while the remaining N-1 slots rotate one
/// step per week, pairing slot i against slot N-1-i. Home and away swap
/// every full rotation cycle so home games balance out. Assumes an even
/// team count.
///
/// Produces exactly N/2 fixtures per week with every team playing once,
/// repeating the rotation when the season outlasts one cycle.
pub fn generate_season_schedule(teams: &[Team]) -> SeasonSchedule {
    let ids: Vec<&str> = teams.iter().map(|t| t.id.as_str()).collect();
    let n = ids.len();
    let mut weeks = SeasonSchedule::new();

    for week in 1..=TOTAL_SEASON_WEEKS {
        let cycle = (week as usize - 1) % (n - 1);
        let swap_home = ((week as usize - 1) / (n - 1)) % 2 == 1;
        let mut fixtures = Vec::with_capacity(n / 2);

        for i in 0..n / 2 {
            let t1 = ids[rotate(i, cycle, n)];
            let t2 = ids[rotate(n - 1 - i, cycle, n)];
            if swap_home {
                fixtures.push(ScheduleMatch::new(t2, t1));
            } else {
                fixtures.push(ScheduleMatch::new(t1, t2));
            }
        }
        weeks.insert(week, fixtures);
    }
    weeks
}

/// Position of the team occupying `idx` after `step` rotations. Slot 0
/// never moves.
fn rotate(idx: usize, step: usize, total: usize) -> usize {
    if idx == 0 {
        0
    } else {
        (idx - 1 + step) % (total - 1) + 1
    }
}
