//! # EP Score
//!
//! The score is computed by the server. The client renders the breakdown it is
//! given and only computes values itself for preview copy
//! ([`ScoreBreakdown::preview`]), e.g. "connect LinkedIn to reach 75".

use serde::{Deserialize, Serialize};
use std::fmt;

pub const BASE_POINTS: u32 = 20;
pub const GMAIL_POINTS: u32 = 25;
pub const LINKEDIN_POINTS: u32 = 30;
pub const EDU_BONUS_POINTS: u32 = 25;
pub const MAX_SCORE: u32 = 100;

/// Per-component points as reported by `/api/user/score`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub base: u32,
    #[serde(default)]
    pub gmail: u32,
    #[serde(default)]
    pub linkedin: u32,
    #[serde(default)]
    pub edu_bonus: u32,
}

impl ScoreBreakdown {
    /// Expected breakdown for a set of connected anchors. Preview only.
    pub fn preview(gmail: bool, linkedin: bool, edu_verified: bool) -> Self {
        let points = |on: bool, pts: u32| if on { pts } else { 0 };
        Self {
            base: BASE_POINTS,
            gmail: points(gmail, GMAIL_POINTS),
            linkedin: points(linkedin, LINKEDIN_POINTS),
            edu_bonus: points(edu_verified, EDU_BONUS_POINTS),
        }
    }

    /// Sum of the components, capped at [`MAX_SCORE`].
    pub fn total(&self) -> u32 {
        (self.base + self.gmail + self.linkedin + self.edu_bonus).min(MAX_SCORE)
    }

    /// Rows for display: label, earned points, available points.
    pub fn rows(&self) -> [(&'static str, u32, u32); 4] {
        [
            ("Base account", self.base, BASE_POINTS),
            ("Gmail anchor", self.gmail, GMAIL_POINTS),
            ("LinkedIn anchor", self.linkedin, LINKEDIN_POINTS),
            (".edu email bonus", self.edu_bonus, EDU_BONUS_POINTS),
        ]
    }
}

/// Response of `GET /api/user/score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScoreResponse {
    pub trust_score: u32,
    #[serde(default)]
    pub breakdown: ScoreBreakdown,
}

impl ScoreResponse {
    pub fn clearance(&self) -> Clearance {
        Clearance::from_score(self.trust_score)
    }
}

/// Tier label derived from an EP Score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Clearance {
    Spectator,
    Player,
    Master,
    Grandmaster,
}

impl Clearance {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 100 => Clearance::Grandmaster,
            s if s >= 75 => Clearance::Master,
            s if s >= 50 => Clearance::Player,
            _ => Clearance::Spectator,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Clearance::Spectator => "Spectator",
            Clearance::Player => "Player",
            Clearance::Master => "Master",
            Clearance::Grandmaster => "Grandmaster",
        }
    }
}

impl fmt::Display for Clearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_breakdown_sums_for_every_combination() {
        for mask in 0u8..8 {
            let (gmail, linkedin, edu) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            let breakdown = ScoreBreakdown::preview(gmail, linkedin, edu);
            let expected = 20
                + if gmail { 25 } else { 0 }
                + if linkedin { 30 } else { 0 }
                + if edu { 25 } else { 0 };
            assert_eq!(breakdown.total(), expected, "mask {mask}");
        }
        assert_eq!(ScoreBreakdown::preview(true, true, true).total(), 100);
    }

    #[test]
    fn test_clearance_thresholds() {
        assert_eq!(Clearance::from_score(0), Clearance::Spectator);
        assert_eq!(Clearance::from_score(49), Clearance::Spectator);
        assert_eq!(Clearance::from_score(50), Clearance::Player);
        assert_eq!(Clearance::from_score(74), Clearance::Player);
        assert_eq!(Clearance::from_score(75), Clearance::Master);
        assert_eq!(Clearance::from_score(99), Clearance::Master);
        assert_eq!(Clearance::from_score(100), Clearance::Grandmaster);
    }

    #[test]
    fn test_clearance_of_each_preview() {
        // base + gmail = 45
        assert_eq!(
            Clearance::from_score(ScoreBreakdown::preview(true, false, false).total()),
            Clearance::Spectator
        );
        // base + linkedin = 50
        assert_eq!(
            Clearance::from_score(ScoreBreakdown::preview(false, true, false).total()),
            Clearance::Player
        );
        // base + gmail + linkedin = 75
        assert_eq!(
            Clearance::from_score(ScoreBreakdown::preview(true, true, false).total()),
            Clearance::Master
        );
    }

    #[test]
    fn test_total_is_capped() {
        let inflated = ScoreBreakdown { base: 50, gmail: 50, linkedin: 50, edu_bonus: 0 };
        assert_eq!(inflated.total(), 100);
    }

    #[test]
    fn test_score_response_shape() {
        let resp: ScoreResponse = serde_json::from_value(json!({
            "trust_score": 55,
            "breakdown": {"base": 20, "gmail": 0, "linkedin": 30, "edu_bonus": 5}
        }))
        .unwrap();
        assert_eq!(resp.trust_score, 55);
        assert_eq!(resp.breakdown.total(), 55);
        assert_eq!(resp.clearance(), Clearance::Player);
    }
}
