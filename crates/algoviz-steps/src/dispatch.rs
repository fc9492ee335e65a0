//! Single entry point from algorithm id to generator.

use serde::{Deserialize, Serialize};

use crate::algorithm::{AlgorithmId, SortOrder};
use crate::error::Result;
use crate::event::{StepEvent, Summary};
use crate::{searching, sorting};

/// Per-run options. `order` only affects sorts, `target` only searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    #[serde(default)]
    pub target: Option<i64>,
    #[serde(default)]
    pub order: SortOrder,
}

impl RunOptions {
    pub fn sort(order: SortOrder) -> Self {
        Self {
            target: None,
            order,
        }
    }

    pub fn search(target: i64) -> Self {
        Self {
            target: Some(target),
            order: SortOrder::default(),
        }
    }
}

/// The complete output of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub steps: Vec<StepEvent>,
    pub summary: Summary,
}

impl Run {
    fn from_steps(steps: Vec<StepEvent>) -> Self {
        let summary = Summary::from_steps(&steps);
        Self { steps, summary }
    }

    /// The last event of the run.
    pub fn terminal(&self) -> Option<&StepEvent> {
        self.steps.last()
    }
}

/// Run `algorithm` over `input` to completion.
///
/// A search without a target yields a bare `not_found`.
pub fn generate(algorithm: AlgorithmId, input: &[i64], options: &RunOptions) -> Run {
    let order = options.order;
    let steps = match (algorithm, options.target) {
        (AlgorithmId::Bubble, _) => sorting::bubble(input, order),
        (AlgorithmId::Selection, _) => sorting::selection(input, order),
        (AlgorithmId::Insertion, _) => sorting::insertion(input, order),
        (AlgorithmId::Merge, _) => sorting::merge(input, order),
        (AlgorithmId::Quick, _) => sorting::quick(input, order),
        (AlgorithmId::Linear, Some(target)) => searching::linear(input, target),
        (AlgorithmId::Binary, Some(target)) => searching::binary(input, target),
        (AlgorithmId::Jump, Some(target)) => searching::jump(input, target),
        (AlgorithmId::Linear | AlgorithmId::Binary | AlgorithmId::Jump, None) => {
            vec![StepEvent::NotFound]
        }
    };
    Run::from_steps(steps)
}

/// Like [`generate`], resolving the algorithm from its wire id.
pub fn generate_named(algorithm: &str, input: &[i64], options: &RunOptions) -> Result<Run> {
    let id = algorithm.parse::<AlgorithmId>()?;
    Ok(generate(id, input, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn dispatches_every_id() {
        let input = [5, 3, 1, 4, 2];
        for id in AlgorithmId::ALL {
            let run = generate(id, &input, &RunOptions::search(4));
            assert!(run.terminal().is_some_and(StepEvent::is_terminal), "{id}");
        }
    }

    #[test]
    fn unknown_algorithm_has_no_steps() {
        let result = generate_named("bogo", &[1, 2, 3], &RunOptions::default());
        assert_eq!(result, Err(Error::UnknownAlgorithm("bogo".into())));
    }

    #[test]
    fn named_matches_typed() {
        let input = [9, 2, 7, 2, 5];
        let opts = RunOptions::sort(SortOrder::Descending);
        assert_eq!(
            generate_named("merge", &input, &opts).unwrap(),
            generate(AlgorithmId::Merge, &input, &opts)
        );
    }

    #[test]
    fn search_without_target_is_minimal() {
        let run = generate(AlgorithmId::Binary, &[1, 2, 3, 4, 5], &RunOptions::default());
        assert_eq!(run.steps, vec![StepEvent::NotFound]);
        assert_eq!(run.summary.comparisons, 0);
        assert_eq!(run.summary.found_index, None);
    }

    #[test]
    fn summary_reports_found_index() {
        let run = generate(AlgorithmId::Linear, &[4, 6, 8, 10, 12], &RunOptions::search(8));
        assert_eq!(run.summary.found_index, Some(2));
        assert_eq!(run.summary.comparisons, 3);
        assert_eq!(run.summary.writes, 0);
    }

    #[test]
    fn caller_array_is_untouched() {
        let input = vec![5, 4, 3, 2, 1];
        let before = input.clone();
        let _ = generate(AlgorithmId::Quick, &input, &RunOptions::default());
        assert_eq!(input, before);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: RunOptions = serde_json::from_str(r#"{"target": 7}"#).unwrap();
        assert_eq!(opts, RunOptions::search(7));

        let opts: RunOptions = serde_json::from_str(r#"{"order": "desc"}"#).unwrap();
        assert_eq!(opts.order, SortOrder::Descending);
        assert_eq!(opts.target, None);
    }
}
