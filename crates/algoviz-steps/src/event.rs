//! Step events for algorithm visualization timelines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One primitive operation performed by an algorithm during a run.
///
/// Array snapshots are owned copies taken at the moment the event was
/// recorded; later mutations of the working array never reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepEvent {
    /// The relative order of two elements was examined
    Compare { indices: [usize; 2] },

    /// Two elements were exchanged
    Swap { indices: [usize; 2], array: Vec<i64> },

    /// A single slot was written
    Overwrite {
        index: usize,
        value: i64,
        array: Vec<i64>,
    },

    /// One placement while merging `[lo, mid]` with `[mid + 1, hi]`
    Merge { range: [usize; 3], array: Vec<i64> },

    /// A pivot was fixed at its final position inside `[lo, hi]`
    Partition { pivot: usize, range: [usize; 2] },

    /// A search inspected one element
    Probe { index: usize },

    /// The active search interval
    Range { range: [usize; 2] },

    /// Target located
    Found { index: usize },

    /// Target absent
    NotFound,

    /// Sort finished
    Done { array: Vec<i64> },
}

/// Fieldless discriminant of a [`StepEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Compare,
    Swap,
    Overwrite,
    Merge,
    Partition,
    Probe,
    Range,
    Found,
    NotFound,
    Done,
}

impl StepEvent {
    /// Get the kind of this event.
    pub fn kind(&self) -> StepKind {
        match self {
            StepEvent::Compare { .. } => StepKind::Compare,
            StepEvent::Swap { .. } => StepKind::Swap,
            StepEvent::Overwrite { .. } => StepKind::Overwrite,
            StepEvent::Merge { .. } => StepKind::Merge,
            StepEvent::Partition { .. } => StepKind::Partition,
            StepEvent::Probe { .. } => StepKind::Probe,
            StepEvent::Range { .. } => StepKind::Range,
            StepEvent::Found { .. } => StepKind::Found,
            StepEvent::NotFound => StepKind::NotFound,
            StepEvent::Done { .. } => StepKind::Done,
        }
    }

    /// Whether this event ends a run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StepEvent::Done { .. } | StepEvent::Found { .. } | StepEvent::NotFound
        )
    }

    /// The array snapshot carried by this event, if any.
    pub fn snapshot(&self) -> Option<&[i64]> {
        match self {
            StepEvent::Swap { array, .. }
            | StepEvent::Overwrite { array, .. }
            | StepEvent::Merge { array, .. }
            | StepEvent::Done { array } => Some(array),
            StepEvent::Compare { .. }
            | StepEvent::Partition { .. }
            | StepEvent::Probe { .. }
            | StepEvent::Range { .. }
            | StepEvent::Found { .. }
            | StepEvent::NotFound => None,
        }
    }

    /// Indices this event draws attention to.
    pub fn highlighted(&self) -> Vec<usize> {
        match self {
            StepEvent::Compare { indices } | StepEvent::Swap { indices, .. } => indices.to_vec(),
            StepEvent::Overwrite { index, .. }
            | StepEvent::Probe { index }
            | StepEvent::Found { index } => vec![*index],
            StepEvent::Partition { pivot, .. } => vec![*pivot],
            StepEvent::Merge { .. }
            | StepEvent::Range { .. }
            | StepEvent::NotFound
            | StepEvent::Done { .. } => Vec::new(),
        }
    }
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepEvent::Compare { indices: [i, j] } => write!(f, "Compare indices {i} and {j}"),
            StepEvent::Swap { indices: [i, j], .. } => write!(f, "Swap indices {i} and {j}"),
            StepEvent::Overwrite { index, value, .. } => {
                write!(f, "Write value {value} at index {index}")
            }
            StepEvent::Merge { range: [lo, mid, hi], .. } => {
                write!(f, "Merge range [{lo}, {mid}]..{hi}")
            }
            StepEvent::Partition { pivot, range: [lo, hi] } => {
                write!(f, "Partition around pivot index {pivot} in range [{lo}, {hi}]")
            }
            StepEvent::Probe { index } => write!(f, "Probe index {index}"),
            StepEvent::Range { range: [lo, hi] } => write!(f, "Search range [{lo}, {hi}]"),
            StepEvent::Found { index } => write!(f, "Found target at index {index}"),
            StepEvent::NotFound => f.write_str("Target not found"),
            StepEvent::Done { .. } => f.write_str("Sorting complete"),
        }
    }
}

/// Aggregate counts implied by a step sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// `compare` and `probe` events
    pub comparisons: usize,
    /// `swap`, `overwrite` and `merge` events
    pub writes: usize,
    pub swaps: usize,
    pub found_index: Option<usize>,
}

impl Summary {
    /// Tally a step sequence.
    pub fn from_steps(steps: &[StepEvent]) -> Self {
        let mut summary = Summary::default();
        for step in steps {
            match step {
                StepEvent::Compare { .. } | StepEvent::Probe { .. } => summary.comparisons += 1,
                StepEvent::Swap { .. } => {
                    summary.writes += 1;
                    summary.swaps += 1;
                }
                StepEvent::Overwrite { .. } | StepEvent::Merge { .. } => summary.writes += 1,
                StepEvent::Found { index } => summary.found_index = Some(*index),
                StepEvent::Partition { .. }
                | StepEvent::Range { .. }
                | StepEvent::NotFound
                | StepEvent::Done { .. } => {}
            }
        }
        summary
    }
}

/// Append-only recorder shared by the generators.
///
/// Owns the working copy of the array so every snapshot is cloned from the
/// current state at emission time.
#[derive(Debug)]
pub(crate) struct Recorder {
    pub(crate) array: Vec<i64>,
    steps: Vec<StepEvent>,
}

impl Recorder {
    pub(crate) fn new(input: &[i64]) -> Self {
        Self {
            array: input.to_vec(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    pub(crate) fn compare(&mut self, i: usize, j: usize) {
        self.steps.push(StepEvent::Compare { indices: [i, j] });
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.array.swap(i, j);
        self.steps.push(StepEvent::Swap {
            indices: [i, j],
            array: self.array.clone(),
        });
    }

    pub(crate) fn overwrite(&mut self, index: usize, value: i64) {
        self.array[index] = value;
        self.steps.push(StepEvent::Overwrite {
            index,
            value,
            array: self.array.clone(),
        });
    }

    pub(crate) fn merge_place(&mut self, k: usize, value: i64, range: [usize; 3]) {
        self.array[k] = value;
        self.steps.push(StepEvent::Merge {
            range,
            array: self.array.clone(),
        });
    }

    pub(crate) fn partition(&mut self, pivot: usize, lo: usize, hi: usize) {
        self.steps.push(StepEvent::Partition {
            pivot,
            range: [lo, hi],
        });
    }

    pub(crate) fn probe(&mut self, index: usize) {
        self.steps.push(StepEvent::Probe { index });
    }

    pub(crate) fn range(&mut self, lo: usize, hi: usize) {
        self.steps.push(StepEvent::Range { range: [lo, hi] });
    }

    pub(crate) fn found(mut self, index: usize) -> Vec<StepEvent> {
        self.steps.push(StepEvent::Found { index });
        self.steps
    }

    pub(crate) fn not_found(mut self) -> Vec<StepEvent> {
        self.steps.push(StepEvent::NotFound);
        self.steps
    }

    pub(crate) fn done(mut self) -> Vec<StepEvent> {
        let array = self.array.clone();
        self.steps.push(StepEvent::Done { array });
        self.steps
    }
}
