use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::penalty::{Penalty, PLUS_TWO_SECS};

/// One finished solve as it is kept in history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveRecord {
    /// Effective time in seconds, +2 already included
    pub time: f64,
    #[serde(default)]
    pub penalty: Penalty,
}

impl SolveRecord {
    pub fn new(time: f64, penalty: Penalty) -> Self {
        Self { time, penalty }
    }

    /// Build the record for a solve that ran for `elapsed` with a penalty
    /// frozen at the end of inspection.
    pub fn finalize(elapsed: Duration, penalty: Penalty) -> Self {
        let raw = elapsed.as_secs_f64();
        let time = match penalty {
            Penalty::PlusTwo => raw + PLUS_TWO_SECS,
            // a DNF keeps the raw time for reference only
            Penalty::Dnf | Penalty::None => raw,
        };
        Self { time, penalty }
    }

    pub fn is_dnf(&self) -> bool {
        self.penalty == Penalty::Dnf
    }
}

impl fmt::Display for SolveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.penalty {
            Penalty::Dnf => write!(f, "DNF"),
            Penalty::PlusTwo => write!(f, "{:.5} (+2)", self.time),
            Penalty::None => write!(f, "{:.5}", self.time),
        }
    }
}
