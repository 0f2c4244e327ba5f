use std::sync::Arc;

use regex::Regex;

use crate::log_warn;
use crate::modules::recipe::domain::value_objects::scoring_snapshot::ScoringSnapshot;
use crate::modules::scoring::domain::ScoringOracle;

/// Score substituted whenever the oracle cannot be consulted or its reply
/// contains no usable number. A recipe must always end up with some score,
/// so failures never reach the caller.
pub const FALLBACK_SCORE: i32 = 50;

const MIN_SCORE: i32 = 1;
const MAX_SCORE: i32 = 100;

/// Maps a recipe snapshot to a nutrition score in [1,100].
///
/// Holds the injected oracle capability; pure given the oracle reply and
/// persists nothing. Interpretation of the reply: first run of decimal
/// digits, clamped into range.
pub struct NutritionEngine {
    oracle: Arc<dyn ScoringOracle>,
}

impl NutritionEngine {
    pub fn new(oracle: Arc<dyn ScoringOracle>) -> Self {
        Self { oracle }
    }

    pub async fn compute(&self, snapshot: &ScoringSnapshot) -> i32 {
        match self.oracle.score(&snapshot.prompt()).await {
            Ok(reply) => match Self::parse_score(&reply) {
                Some(score) => score,
                None => {
                    log_warn!(
                        "Oracle reply for '{}' contained no score, using fallback {}: {:?}",
                        snapshot.title,
                        FALLBACK_SCORE,
                        reply
                    );
                    FALLBACK_SCORE
                }
            },
            Err(e) => {
                log_warn!(
                    "Oracle unavailable while scoring '{}', using fallback {}: {}",
                    snapshot.title,
                    FALLBACK_SCORE,
                    e
                );
                FALLBACK_SCORE
            }
        }
    }

    /// First run of decimal digits in the reply, clamped into [1,100].
    fn parse_score(reply: &str) -> Option<i32> {
        let digits = Regex::new(r"[0-9]+").unwrap();
        let run = digits.find(reply)?.as_str();
        let value = run.parse::<i64>().ok()?;
        Some(value.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as i32)
    }
}
