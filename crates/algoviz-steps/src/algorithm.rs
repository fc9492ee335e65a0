//! Algorithm identifiers, sort order, and catalog metadata.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of algorithms the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Linear,
    Binary,
    Jump,
}

/// Whether an algorithm sorts or searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Sorting,
    Searching,
}

/// Theoretical complexity, as shown next to the live counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<&'static str>,
}

impl AlgorithmId {
    /// Every algorithm, sorts first.
    pub const ALL: [AlgorithmId; 8] = [
        AlgorithmId::Bubble,
        AlgorithmId::Selection,
        AlgorithmId::Insertion,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Linear,
        AlgorithmId::Binary,
        AlgorithmId::Jump,
    ];

    /// Wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Selection => "selection",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Merge => "merge",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Linear => "linear",
            AlgorithmId::Binary => "binary",
            AlgorithmId::Jump => "jump",
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            AlgorithmId::Bubble
            | AlgorithmId::Selection
            | AlgorithmId::Insertion
            | AlgorithmId::Merge
            | AlgorithmId::Quick => AlgorithmKind::Sorting,
            AlgorithmId::Linear | AlgorithmId::Binary | AlgorithmId::Jump => {
                AlgorithmKind::Searching
            }
        }
    }

    /// Searches that only work on ascending input.
    pub fn requires_sorted_input(&self) -> bool {
        matches!(self, AlgorithmId::Binary | AlgorithmId::Jump)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "Bubble Sort",
            AlgorithmId::Selection => "Selection Sort",
            AlgorithmId::Insertion => "Insertion Sort",
            AlgorithmId::Merge => "Merge Sort",
            AlgorithmId::Quick => "Quick Sort",
            AlgorithmId::Linear => "Linear Search",
            AlgorithmId::Binary => "Binary Search",
            AlgorithmId::Jump => "Jump Search",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AlgorithmId::Bubble => {
                "Repeatedly compares adjacent elements and swaps them if out of order."
            }
            AlgorithmId::Selection => {
                "Finds the extreme element of the unsorted part and places it at the front."
            }
            AlgorithmId::Insertion => {
                "Builds the sorted array one item at a time by inserting at the correct position."
            }
            AlgorithmId::Merge => {
                "Divide and conquer algorithm that recursively splits and merges arrays."
            }
            AlgorithmId::Quick => "Divide and conquer using partitioning around a pivot.",
            AlgorithmId::Linear => "Sequentially checks each element for the target value.",
            AlgorithmId::Binary => {
                "Searches a sorted array by repeatedly dividing the search interval in half."
            }
            AlgorithmId::Jump => "Searches in fixed-size jumps, then linearly scans a block.",
        }
    }

    pub fn complexity(&self) -> Complexity {
        let (best, average, worst, space) = match self {
            AlgorithmId::Bubble => ("O(n)", "O(n^2)", "O(n^2)", Some("O(1)")),
            AlgorithmId::Selection => ("O(n^2)", "O(n^2)", "O(n^2)", Some("O(1)")),
            AlgorithmId::Insertion => ("O(n)", "O(n^2)", "O(n^2)", Some("O(1)")),
            AlgorithmId::Merge => ("O(n log n)", "O(n log n)", "O(n log n)", Some("O(n)")),
            AlgorithmId::Quick => ("O(n log n)", "O(n log n)", "O(n^2)", Some("O(log n)")),
            AlgorithmId::Linear => ("O(1)", "O(n)", "O(n)", None),
            AlgorithmId::Binary => ("O(1)", "O(log n)", "O(log n)", None),
            AlgorithmId::Jump => ("O(√n)", "O(√n)", "O(√n)", None),
        };
        Complexity {
            best,
            average,
            worst,
            space,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Requested order of a sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Ordering of `a` relative to `b` under this sort order.
    pub fn compare(&self, a: i64, b: i64) -> Ordering {
        match self {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        }
    }

    /// `a` must come strictly after `b`.
    pub fn out_of_order(&self, a: i64, b: i64) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// `a` must come strictly before `b`.
    pub fn precedes(&self, a: i64, b: i64) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Whether `values` are arranged in this order.
    pub fn is_sorted(&self, values: &[i64]) -> bool {
        values.windows(2).all(|w| !self.out_of_order(w[0], w[1]))
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(Error::InvalidOrder(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_strings() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.as_str().parse::<AlgorithmId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(
            "bogo".parse::<AlgorithmId>(),
            Err(Error::UnknownAlgorithm("bogo".into()))
        );
        // ids are case sensitive on the wire
        assert!("Bubble".parse::<AlgorithmId>().is_err());
    }

    #[test]
    fn kinds_partition_the_catalog() {
        let sorts = AlgorithmId::ALL
            .iter()
            .filter(|id| id.kind() == AlgorithmKind::Sorting)
            .count();
        assert_eq!(sorts, 5);
        assert!(AlgorithmId::Binary.requires_sorted_input());
        assert!(!AlgorithmId::Linear.requires_sorted_input());
    }

    #[test]
    fn order_comparisons() {
        assert!(SortOrder::Ascending.out_of_order(5, 3));
        assert!(!SortOrder::Ascending.out_of_order(3, 3));
        assert!(SortOrder::Descending.out_of_order(3, 5));
        assert!(SortOrder::Descending.precedes(5, 3));
        // no overflow at the extremes
        assert!(SortOrder::Ascending.out_of_order(i64::MAX, i64::MIN));
    }

    #[test]
    fn order_parses_wire_names() {
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert!("down".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn searches_have_no_space_entry() {
        assert_eq!(AlgorithmId::Quick.complexity().worst, "O(n^2)");
        assert_eq!(AlgorithmId::Jump.complexity().space, None);
    }
}
