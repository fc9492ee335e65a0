//! Searching step generators.
//!
//! Binary and jump search expect ascending input; arranging it is the
//! caller's job. Every run ends in exactly one `found` or `not_found`.

use crate::event::{Recorder, StepEvent};

/// Probe every index in order until the target turns up.
pub fn linear(input: &[i64], target: i64) -> Vec<StepEvent> {
    let mut rec = Recorder::new(input);

    for (i, &value) in input.iter().enumerate() {
        rec.probe(i);
        if value == target {
            return rec.found(i);
        }
    }

    rec.not_found()
}

/// Halve the interval `[lo, hi]` around `mid = (lo + hi) / 2`.
pub fn binary(input: &[i64], target: i64) -> Vec<StepEvent> {
    let mut rec = Recorder::new(input);
    if input.is_empty() {
        return rec.not_found();
    }

    let (mut lo, mut hi) = (0usize, input.len() - 1);
    loop {
        rec.range(lo, hi);
        let mid = (lo + hi) / 2;
        rec.probe(mid);

        if input[mid] == target {
            return rec.found(mid);
        }
        if input[mid] < target {
            lo = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            hi = mid - 1;
        }
        if lo > hi {
            break;
        }
    }

    rec.not_found()
}

/// Block size used by [`jump`]: `max(1, floor(sqrt(n)))`.
pub fn jump_block_size(n: usize) -> usize {
    ((n as f64).sqrt() as usize).max(1)
}

/// Jump ahead block by block, then scan the block that may hold the target.
///
/// The final block is scanned to its end; an element greater than the target
/// does not stop the scan early.
pub fn jump(input: &[i64], target: i64) -> Vec<StepEvent> {
    let mut rec = Recorder::new(input);
    let n = input.len();
    if n == 0 {
        return rec.not_found();
    }

    let block = jump_block_size(n);
    let mut lo = 0;
    let hi = loop {
        let hi = (lo + block).min(n) - 1;
        rec.range(lo, hi);
        rec.probe(hi);
        if input[hi] >= target {
            break hi;
        }
        lo = hi + 1;
        if lo >= n {
            return rec.not_found();
        }
    };

    for i in lo..=hi {
        rec.probe(i);
        if input[i] == target {
            return rec.found(i);
        }
    }

    rec.not_found()
}
