//! Engine configuration: the policy choices callers may override.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How third place is derived when the bracket has no third-place match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirdPlacePolicy {
    /// Loser of the first completed semifinal (in bracket order).
    #[default]
    FirstSemifinalLoser,
    /// Both semifinal losers share third place.
    Shared,
}

impl FromStr for ThirdPlacePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first_semifinal_loser" => Ok(ThirdPlacePolicy::FirstSemifinalLoser),
            "shared" => Ok(ThirdPlacePolicy::Shared),
            other => Err(format!("unknown third place policy: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub third_place: ThirdPlacePolicy,
    /// Accept equal scores in elimination matches; slot two then advances.
    #[serde(default)]
    pub allow_elimination_draws: bool,
}

impl EngineConfig {
    /// Read overrides from `TOURNAMENT_THIRD_PLACE` and `TOURNAMENT_ALLOW_ELIMINATION_DRAWS`.
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let third_place = std::env::var("TOURNAMENT_THIRD_PLACE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let allow_elimination_draws = std::env::var("TOURNAMENT_ALLOW_ELIMINATION_DRAWS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self {
            third_place,
            allow_elimination_draws,
        }
    }
}
