use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::match_types::Match;

/// Published once for every successful join, after the engine has released its lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFoundEvent {
    pub matched: Match,
    pub matched_at: DateTime<Utc>,
}

impl MatchFoundEvent {
    pub fn new(matched: Match) -> Self {
        Self { matched, matched_at: Utc::now() }
    }
}
