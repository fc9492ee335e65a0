//! Algoviz Step Engine
//!
//! Deterministic step-event generators for classic sorting and searching
//! algorithms, used to animate how an algorithm manipulates an array.
//!
//! # Architecture
//!
//! - **Events**: The closed [`StepEvent`] vocabulary and run [`Summary`]
//! - **Sorting**: Bubble, selection, insertion, merge and quick sort
//! - **Searching**: Linear, binary and jump search
//! - **Dispatch**: Maps an [`AlgorithmId`] to its generator
//! - **Replay**: Rebuilds array state and counters at any step of a run
//!
//! Every generator works on a private copy of its input and returns the
//! complete event list; nothing is shared between runs.
//!
//! # Usage
//!
//! ```
//! use algoviz_steps::{generate, AlgorithmId, RunOptions, StepEvent};
//!
//! let run = generate(AlgorithmId::Bubble, &[5, 3, 1, 4, 2], &RunOptions::default());
//! assert_eq!(run.steps.last(), Some(&StepEvent::Done { array: vec![1, 2, 3, 4, 5] }));
//! ```

mod algorithm;
mod dispatch;
mod error;
mod event;
mod replay;

pub mod searching;
pub mod sorting;

pub use algorithm::{AlgorithmId, AlgorithmKind, Complexity, SortOrder};
pub use dispatch::{generate, generate_named, Run, RunOptions};
pub use error::{Error, Result};
pub use event::{StepEvent, StepKind, Summary};
pub use replay::{Frame, Replay};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_run_ends_in_one_terminal_event() {
        let input = [8, 3, 5, 3, 9, 1];
        for id in AlgorithmId::ALL {
            let run = generate(id, &input, &RunOptions::search(5));
            let terminals = run.steps.iter().filter(|s| s.is_terminal()).count();
            assert_eq!(terminals, 1, "{id}");
            assert!(run.steps.last().is_some_and(|s| s.is_terminal()), "{id}");
        }
    }

    #[test]
    fn replay_reaches_done_snapshot() {
        let input = vec![4, 2, 9, 1, 7];
        let run = generate(AlgorithmId::Merge, &input, &RunOptions::default());

        let mut replay = Replay::new(input, run.steps.clone());
        replay.seek(run.steps.len());
        assert_eq!(replay.frame().array, vec![1, 2, 4, 7, 9]);
        assert_eq!(replay.frame().writes, run.summary.writes);
    }
}
