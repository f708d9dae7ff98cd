use crate::app::{NumberedSolve, Snapshot};
use crate::penalty::Penalty;
use crate::timer::Phase;

/// Seconds with the five decimals the timer has always shown
pub fn format_seconds(secs: f64) -> String {
    format!("{secs:.5}")
}

/// Main figure on the timer screen
pub fn timer_label(snap: &Snapshot) -> String {
    match snap.phase {
        Phase::Inspecting => {
            let mut label = format!("Inspection: {:2}", snap.countdown.unwrap_or(0));
            if !snap.penalty.is_none() {
                label.push_str(&format!(" ({})", snap.penalty));
            }
            label
        }
        Phase::Running => match snap.penalty {
            Penalty::Dnf => "DNF".to_string(),
            Penalty::PlusTwo => format!("{} (+2)", format_seconds(snap.elapsed.as_secs_f64())),
            Penalty::None => format_seconds(snap.elapsed.as_secs_f64()),
        },
        Phase::Idle => match snap.last_solve {
            Some(record) => record.to_string(),
            None => format_seconds(0.0),
        },
    }
}

pub fn help_line(inspection: bool) -> &'static str {
    if inspection {
        "[space] start/stop/next  [r] reset  [v] view all solves  [q] quit"
    } else {
        "[space] start/stop  [r] reset  [v] view all solves  [q] quit"
    }
}

pub fn recent_row(row: &NumberedSolve) -> String {
    format!("{:2}. {}", row.number, row.record)
}

pub fn history_row(row: &NumberedSolve) -> String {
    format!("{:3}. {}", row.number, row.record)
}
