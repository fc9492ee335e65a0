//! Sorting step generators.
//!
//! Each generator copies its input into a recorder, runs the textbook
//! algorithm on that copy, and returns the recorded events ending in a single
//! `done` carrying the sorted array.

use crate::algorithm::SortOrder;
use crate::event::{Recorder, StepEvent};

/// Bubble sort with early exit once a pass makes no swap.
pub fn bubble(input: &[i64], order: SortOrder) -> Vec<StepEvent> {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    for pass in 0..n {
        let mut swapped = false;
        // the last `pass` elements are already in place
        for j in 0..n - pass - 1 {
            rec.compare(j, j + 1);
            if order.out_of_order(rec.array[j], rec.array[j + 1]) {
                rec.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    rec.done()
}

/// Selection sort: at most one swap per position.
pub fn selection(input: &[i64], order: SortOrder) -> Vec<StepEvent> {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    for i in 0..n {
        let mut extreme = i;
        for j in i + 1..n {
            rec.compare(extreme, j);
            if order.out_of_order(rec.array[extreme], rec.array[j]) {
                extreme = j;
            }
        }
        if extreme != i {
            rec.swap(i, extreme);
        }
    }

    rec.done()
}

/// Shift-based insertion sort.
pub fn insertion(input: &[i64], order: SortOrder) -> Vec<StepEvent> {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    for i in 1..n {
        let key = rec.array[i];
        // `hole` is the slot the key would occupy right now
        let mut hole = i;
        while hole > 0 {
            let j = hole - 1;
            rec.compare(j, hole);
            if !order.out_of_order(rec.array[j], key) {
                break;
            }
            let shifted = rec.array[j];
            rec.overwrite(hole, shifted);
            hole = j;
        }
        rec.overwrite(hole, key);
    }

    rec.done()
}

/// Top-down merge sort, stable.
pub fn merge(input: &[i64], order: SortOrder) -> Vec<StepEvent> {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n > 1 {
        merge_sort(&mut rec, 0, n - 1, order);
    }
    rec.done()
}

fn merge_sort(rec: &mut Recorder, lo: usize, hi: usize, order: SortOrder) {
    if lo >= hi {
        return;
    }
    let mid = (lo + hi) / 2;
    merge_sort(rec, lo, mid, order);
    merge_sort(rec, mid + 1, hi, order);
    merge_runs(rec, lo, mid, hi, order);
}

/// Emits exactly `hi - lo + 1` merge events.
fn merge_runs(rec: &mut Recorder, lo: usize, mid: usize, hi: usize, order: SortOrder) {
    let left = rec.array[lo..=mid].to_vec();
    let right = rec.array[mid + 1..=hi].to_vec();
    let range = [lo, mid, hi];
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        rec.compare(lo + i, mid + 1 + j);
        // left run wins ties
        let value = if order.out_of_order(left[i], right[j]) {
            let value = right[j];
            j += 1;
            value
        } else {
            let value = left[i];
            i += 1;
            value
        };
        rec.merge_place(k, value, range);
        k += 1;
    }
    for &value in left[i..].iter().chain(&right[j..]) {
        rec.merge_place(k, value, range);
        k += 1;
    }
}

/// Quick sort with Lomuto partitioning; the pivot is the last element.
pub fn quick(input: &[i64], order: SortOrder) -> Vec<StepEvent> {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n > 1 {
        quick_sort(&mut rec, 0, n - 1, order);
    }
    rec.done()
}

fn quick_sort(rec: &mut Recorder, lo: usize, hi: usize, order: SortOrder) {
    if lo >= hi {
        return;
    }
    let p = partition(rec, lo, hi, order);
    if p > lo {
        quick_sort(rec, lo, p - 1, order);
    }
    quick_sort(rec, p + 1, hi, order);
}

fn partition(rec: &mut Recorder, lo: usize, hi: usize, order: SortOrder) -> usize {
    let pivot = rec.array[hi];
    let mut store = lo;

    for j in lo..hi {
        rec.compare(j, hi);
        if order.precedes(rec.array[j], pivot) {
            if store != j {
                rec.swap(store, j);
            }
            store += 1;
        }
    }
    if store != hi {
        rec.swap(store, hi);
    }
    rec.partition(store, lo, hi);
    store
}
