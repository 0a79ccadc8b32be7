use derive_getters::Dissolve;
use eyre::Result;

use super::interval::{Interval, IntervalOp};
use crate::num::PrimInt;

// Variant order is the tie-break at equal positions: starts are swept before ends, so intervals
// that share a boundary point end up in the same run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
enum Event {
    Start,
    End,
}

/// Result of merging a collection of intervals: maximal runs of overlapping or touching inputs,
/// sorted by start and pairwise disjoint, together with the number of merged inputs.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Dissolve)]
pub struct MergedIntervals<Idx: PrimInt> {
    intervals: Vec<Interval<Idx>>,
    inputs: usize,
}

impl<Idx: PrimInt> MergedIntervals<Idx> {
    pub fn intervals(&self) -> &[Interval<Idx>] {
        &self.intervals
    }

    /// Number of intervals that were merged.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Number of merged runs.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Ratio of merged runs to input intervals. None if nothing was merged.
    pub fn ratio(&self) -> Option<f64> {
        match self.inputs {
            0 => None,
            inputs => Some(self.intervals.len() as f64 / inputs as f64),
        }
    }

    /// Total number of positions covered by the merged runs. None if the total doesn't fit into
    /// the index type.
    pub fn covered(&self) -> Option<Idx> {
        self.intervals
            .iter()
            .try_fold(Idx::zero(), |total, interval| total.checked_add(&interval.len()?))
    }
}

impl<Idx: PrimInt> Interval<Idx> {
    /// Coalesce overlapping and touching intervals with a boundary-counting sweep.
    ///
    /// Each interval contributes a start and an end event. Events are sorted by position, with
    /// starts preceding ends at the same coordinate, and the sweep tracks how many intervals are
    /// currently open. A run opens when the depth leaves zero and closes when it returns to zero.
    /// Runs are therefore emitted in ascending order of their start.
    pub fn merge(intervals: &[Self]) -> MergedIntervals<Idx> {
        let mut events = Vec::with_capacity(intervals.len() * 2);
        for interval in intervals {
            events.push((interval.start(), Event::Start));
            events.push((interval.end(), Event::End));
        }
        events.sort_unstable();

        let mut merged = Vec::new();
        let mut depth = 0usize;
        let mut run_start = None;
        for (position, event) in events {
            match event {
                Event::Start => {
                    if depth == 0 {
                        run_start = Some(position);
                    }
                    depth += 1;
                }
                Event::End => {
                    // Every end is preceded by the start of the same interval
                    depth -= 1;
                    if depth == 0 {
                        if let Some(start) = run_start.take() {
                            merged.push(Interval { start, end: position });
                        }
                    }
                }
            }
        }

        MergedIntervals {
            intervals: merged,
            inputs: intervals.len(),
        }
    }
}

/// Validate raw (start, end) pairs and merge them. Fails on the first pair with start > end.
pub fn merge_pairs<Idx: PrimInt>(
    pairs: impl IntoIterator<Item = (Idx, Idx)>,
) -> Result<MergedIntervals<Idx>> {
    let intervals = pairs
        .into_iter()
        .map(Interval::try_from)
        .collect::<Result<Vec<_>>>()?;
    Ok(Interval::merge(&intervals))
}

impl<Idx: PrimInt> From<MergedIntervals<Idx>> for Vec<Interval<Idx>> {
    fn from(merged: MergedIntervals<Idx>) -> Self {
        merged.intervals
    }
}

impl<'a, Idx: PrimInt> IntoIterator for &'a MergedIntervals<Idx> {
    type Item = &'a Interval<Idx>;
    type IntoIter = std::slice::Iter<'a, Interval<Idx>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<Idx: PrimInt, const N: usize> PartialEq<[(Idx, Idx); N]> for MergedIntervals<Idx> {
    fn eq(&self, other: &[(Idx, Idx); N]) -> bool {
        self.intervals.len() == N && self.intervals.iter().zip(other).all(|(x, y)| x == y)
    }
}
