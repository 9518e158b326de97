//! Seam for the external narrative-text service.
//!
//! Recaps are flavor only: the orchestrator commits every state change
//! before a recap is requested, and any failure here falls back to a fixed
//! string without touching league state. Implementations backed by a real
//! service should enforce their own bounded timeout; no retries are
//! expected.

use crate::models::{MatchResult, Player};

pub const FALLBACK_MATCH_RECAP: &str = "The squads clashed in deep space. Results finalized.";
pub const FALLBACK_SCOUTING_REPORT: &str = "Standard league scouting report available.";

/// Produces free-text blurbs for completed matches and scouting lookups.
pub trait NarrativeSource {
    fn match_recap(
        &self,
        result: &MatchResult,
        home_name: &str,
        away_name: &str,
    ) -> Result<String, String>;

    fn scouting_report(&self, player: &Player) -> Result<String, String>;
}

/// Offline source returning the static fallback lines. Also the substitute
/// used when a real service errors or times out.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticNarrative;

impl NarrativeSource for StaticNarrative {
    fn match_recap(
        &self,
        _result: &MatchResult,
        _home_name: &str,
        _away_name: &str,
    ) -> Result<String, String> {
        Ok(FALLBACK_MATCH_RECAP.to_string())
    }

    fn scouting_report(&self, _player: &Player) -> Result<String, String> {
        Ok(FALLBACK_SCOUTING_REPORT.to_string())
    }
}

/// Fetch a recap, substituting the fallback on any failure.
pub fn recap_or_fallback<N: NarrativeSource>(
    source: &N,
    result: &MatchResult,
    home_name: &str,
    away_name: &str,
) -> String {
    source
        .match_recap(result, home_name, away_name)
        .unwrap_or_else(|err| {
            log::warn!("narrative service failed, using fallback: {}", err);
            FALLBACK_MATCH_RECAP.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameMap, Strategy};

    struct BrokenService;

    impl NarrativeSource for BrokenService {
        fn match_recap(&self, _: &MatchResult, _: &str, _: &str) -> Result<String, String> {
            Err("timeout".into())
        }
        fn scouting_report(&self, _: &Player) -> Result<String, String> {
            Err("timeout".into())
        }
    }

    fn result() -> MatchResult {
        MatchResult {
            home_id: "a".into(),
            away_id: "b".into(),
            home_score: 50,
            away_score: 40,
            winner_id: "a".into(),
            counter_msg: String::new(),
            map: GameMap::new("Training Grounds", "Standard", None),
            home_strategy: Strategy::Rush,
            away_strategy: Strategy::Trap,
            viewership: 9000,
        }
    }

    #[test]
    fn failure_substitutes_the_fallback() {
        let recap = recap_or_fallback(&BrokenService, &result(), "A", "B");
        assert_eq!(recap, FALLBACK_MATCH_RECAP);
    }

    #[test]
    fn static_source_always_succeeds() {
        let recap = recap_or_fallback(&StaticNarrative, &result(), "A", "B");
        assert_eq!(recap, FALLBACK_MATCH_RECAP);
    }
}
