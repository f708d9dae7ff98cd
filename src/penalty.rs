use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Inspection time allowed before any penalty applies
pub const INSPECTION_LIMIT: Duration = Duration::from_secs(15);

/// Inspection time after which the solve is a DNF
pub const DNF_LIMIT: Duration = Duration::from_secs(17);

/// Seconds added to a solve carrying a +2
pub const PLUS_TWO_SECS: f64 = 2.0;

/// Penalty attached to a solve.
///
/// Serialized as `""`, `"+2"` and `"DNF"` so history files written by
/// earlier versions keep loading.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
pub enum Penalty {
    #[default]
    #[serde(rename = "")]
    #[strum(to_string = "")]
    None,
    #[serde(rename = "+2")]
    #[strum(to_string = "+2")]
    PlusTwo,
    #[serde(rename = "DNF")]
    #[strum(to_string = "DNF")]
    Dnf,
}

impl Penalty {
    /// Penalty earned by an inspection that has lasted `inspected`
    pub fn for_inspection(inspected: Duration) -> Self {
        if inspected > DNF_LIMIT {
            Penalty::Dnf
        } else if inspected > INSPECTION_LIMIT {
            Penalty::PlusTwo
        } else {
            Penalty::None
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Penalty::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn no_penalty_up_to_fifteen_seconds() {
        assert_eq!(Penalty::for_inspection(Duration::ZERO), Penalty::None);
        assert_eq!(Penalty::for_inspection(millis(8_500)), Penalty::None);
        assert_eq!(Penalty::for_inspection(millis(15_000)), Penalty::None);
    }

    #[test]
    fn plus_two_between_fifteen_and_seventeen() {
        assert_eq!(Penalty::for_inspection(millis(15_001)), Penalty::PlusTwo);
        assert_eq!(Penalty::for_inspection(millis(16_000)), Penalty::PlusTwo);
        assert_eq!(Penalty::for_inspection(millis(17_000)), Penalty::PlusTwo);
    }

    #[test]
    fn dnf_past_seventeen_seconds() {
        assert_eq!(Penalty::for_inspection(millis(17_001)), Penalty::Dnf);
        assert_eq!(Penalty::for_inspection(millis(60_000)), Penalty::Dnf);
    }

    #[test]
    fn penalty_escalation_is_monotone() {
        let mut last = Penalty::None;
        for ms in (0..30_000).step_by(37) {
            let p = Penalty::for_inspection(millis(ms));
            let rank = |p: Penalty| match p {
                Penalty::None => 0,
                Penalty::PlusTwo => 1,
                Penalty::Dnf => 2,
            };
            assert!(rank(p) >= rank(last), "penalty went back at {ms}ms");
            last = p;
        }
    }

    #[test]
    fn display_matches_stored_form() {
        assert_eq!(Penalty::None.to_string(), "");
        assert_eq!(Penalty::PlusTwo.to_string(), "+2");
        assert_eq!(Penalty::Dnf.to_string(), "DNF");
    }

    #[test]
    fn serde_uses_legacy_strings() {
        assert_eq!(serde_json::to_string(&Penalty::None).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Penalty::PlusTwo).unwrap(), "\"+2\"");
        assert_eq!(
            serde_json::from_str::<Penalty>("\"DNF\"").unwrap(),
            Penalty::Dnf
        );
    }
}
