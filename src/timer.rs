use std::time::{Duration, Instant};

use crate::penalty::{Penalty, INSPECTION_LIMIT};
use crate::solve::SolveRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum Phase {
    #[default]
    Idle,
    Inspecting,
    Running,
}

/// The live timing session.
///
/// `advance` walks Idle -> Inspecting -> Running -> Idle, `reset` drops
/// back to Idle from anywhere, and `tick` refreshes the cached elapsed
/// time while a phase is live. The penalty is recomputed from the
/// inspection duration on every refresh and frozen once Running starts.
#[derive(Debug, Clone)]
pub struct Timer {
    phase: Phase,
    phase_start: Option<Instant>,
    elapsed: Duration,
    pending_penalty: Penalty,
    inspection: bool,
}

impl Timer {
    pub fn new(inspection: bool) -> Self {
        Self {
            phase: Phase::Idle,
            phase_start: None,
            elapsed: Duration::ZERO,
            pending_penalty: Penalty::None,
            inspection,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn pending_penalty(&self) -> Penalty {
        self.pending_penalty
    }

    pub fn inspection_enabled(&self) -> bool {
        self.inspection
    }

    /// Ticks are only wanted while something is being timed
    pub fn needs_tick(&self) -> bool {
        matches!(self.phase, Phase::Inspecting | Phase::Running)
    }

    /// Whole seconds of inspection left, only while inspecting
    pub fn countdown(&self) -> Option<u64> {
        match self.phase {
            Phase::Inspecting => Some(
                INSPECTION_LIMIT
                    .as_secs()
                    .saturating_sub(self.elapsed.as_secs()),
            ),
            _ => None,
        }
    }

    /// Handle the single "advance" input. Returns the finished solve when
    /// this call stopped a running timer.
    pub fn advance(&mut self, now: Instant) -> Option<SolveRecord> {
        match self.phase {
            Phase::Idle if self.inspection => {
                self.enter(Phase::Inspecting, now);
                self.pending_penalty = Penalty::None;
                None
            }
            Phase::Idle => {
                self.enter(Phase::Running, now);
                self.pending_penalty = Penalty::None;
                None
            }
            Phase::Inspecting => {
                self.refresh(now);
                self.enter(Phase::Running, now);
                None
            }
            Phase::Running => {
                self.refresh(now);
                let record = SolveRecord::finalize(self.elapsed, self.pending_penalty);
                self.reset();
                Some(record)
            }
        }
    }

    /// Refresh elapsed time. Returns true if another tick should follow.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.refresh(now);
        self.needs_tick()
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.phase_start = None;
        self.elapsed = Duration::ZERO;
        self.pending_penalty = Penalty::None;
    }

    fn enter(&mut self, phase: Phase, now: Instant) {
        self.phase = phase;
        self.phase_start = Some(now);
        self.elapsed = Duration::ZERO;
    }

    fn refresh(&mut self, now: Instant) {
        let Some(start) = self.phase_start else {
            return;
        };
        self.elapsed = now.saturating_duration_since(start);
        if self.phase == Phase::Inspecting {
            self.pending_penalty = Penalty::for_inspection(self.elapsed);
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(true)
    }
}
