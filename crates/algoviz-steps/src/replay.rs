//! Replaying a recorded run frame by frame.

use serde::Serialize;

use crate::event::{StepEvent, StepKind};

/// State of the visualized array after a prefix of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Number of events applied.
    pub step: usize,
    pub array: Vec<i64>,
    /// Indices touched by the last applied event.
    pub highlighted: Vec<usize>,
    pub active_range: Option<[usize; 2]>,
    pub comparisons: usize,
    pub writes: usize,
    pub swaps: usize,
    pub found_index: Option<usize>,
    pub finished: bool,
}

impl Frame {
    /// Rebuild state from the first `up_to` events of `steps`.
    pub fn from_steps(initial: &[i64], steps: &[StepEvent], up_to: usize) -> Self {
        let mut frame = Frame {
            array: initial.to_vec(),
            ..Frame::default()
        };

        for event in steps.iter().take(up_to) {
            frame.step += 1;
            frame.highlighted = event.highlighted();
            if let Some(snapshot) = event.snapshot() {
                frame.array = snapshot.to_vec();
            }

            match event {
                StepEvent::Compare { .. } | StepEvent::Probe { .. } => frame.comparisons += 1,
                StepEvent::Swap { .. } => {
                    frame.writes += 1;
                    frame.swaps += 1;
                }
                StepEvent::Overwrite { .. } => frame.writes += 1,
                StepEvent::Merge { range: [lo, _, hi], .. } => {
                    frame.writes += 1;
                    frame.active_range = Some([*lo, *hi]);
                }
                StepEvent::Partition { range, .. } | StepEvent::Range { range } => {
                    frame.active_range = Some(*range);
                }
                StepEvent::Found { index } => frame.found_index = Some(*index),
                StepEvent::NotFound | StepEvent::Done { .. } => {}
            }
            frame.finished = event.is_terminal();
        }

        frame
    }
}

/// Cursor over the events of one run.
pub struct Replay {
    initial: Vec<i64>,
    steps: Vec<StepEvent>,
    position: usize,
}

impl Replay {
    pub fn new(initial: Vec<i64>, steps: Vec<StepEvent>) -> Self {
        Self {
            initial,
            steps,
            position: 0,
        }
    }

    /// Number of events applied so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Move to `position`, clamped to the end of the run.
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.steps.len());
    }

    /// Apply the next event and return it.
    pub fn step_forward(&mut self) -> Option<&StepEvent> {
        let event = self.steps.get(self.position)?;
        self.position += 1;
        Some(event)
    }

    /// Un-apply the last event.
    pub fn step_backward(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.steps.len()
    }

    /// Fraction of events applied, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.position as f64 / self.steps.len() as f64
        }
    }

    /// Events not yet applied.
    pub fn remaining(&self) -> &[StepEvent] {
        &self.steps[self.position..]
    }

    /// How many applied events are of `kind`.
    pub fn count_applied(&self, kind: StepKind) -> usize {
        self.steps[..self.position]
            .iter()
            .filter(|s| s.kind() == kind)
            .count()
    }

    pub fn frame(&self) -> Frame {
        Frame::from_steps(&self.initial, &self.steps, self.position)
    }
}
