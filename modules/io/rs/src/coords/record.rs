use contigprobe_core_rs::loc::{Interval, IntervalOp, Orientation};
use derive_getters::Dissolve;
use eyre::{ensure, Result};

/// A single alignment reported by show-coords.
#[derive(Debug, Clone, PartialEq, Default, Dissolve)]
pub struct Record {
    reference_span: Interval<u64>,
    query_span: Interval<u64>,
    query_orientation: Orientation,
    reference_aligned: u64,
    query_aligned: u64,
    identity: f64,
    reference: String,
    query: String,
}

impl Record {
    /// Build a record from raw show-coords columns. Query coordinates may be given in either
    /// order: a start greater than the end marks a reverse complement alignment.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reference_span: Interval<u64>,
        query_start: u64,
        query_end: u64,
        reference_aligned: u64,
        query_aligned: u64,
        identity: f64,
        reference: String,
        query: String,
    ) -> Result<Self> {
        ensure!(
            (0.0..=100.0).contains(&identity),
            "show-coords identity must be between 0 and 100, got {}",
            identity
        );
        ensure!(!reference.is_empty(), "show-coords reference tag can't be empty");
        ensure!(!query.is_empty(), "show-coords query tag can't be empty");

        let (query_span, query_orientation) = if query_start <= query_end {
            (Interval::new(query_start, query_end)?, Orientation::Forward)
        } else {
            (Interval::new(query_end, query_start)?, Orientation::Reverse)
        };

        Ok(Self {
            reference_span,
            query_span,
            query_orientation,
            reference_aligned,
            query_aligned,
            identity,
            reference,
            query,
        })
    }

    pub fn reference_span(&self) -> Interval<u64> {
        self.reference_span
    }

    pub fn query_span(&self) -> Interval<u64> {
        self.query_span
    }

    pub fn query_orientation(&self) -> Orientation {
        self.query_orientation
    }

    /// Aligned length in the reference (the LEN 1 column).
    pub fn reference_aligned(&self) -> u64 {
        self.reference_aligned
    }

    /// Aligned length in the query (the LEN 2 column).
    pub fn query_aligned(&self) -> u64 {
        self.query_aligned
    }

    pub fn identity(&self) -> f64 {
        self.identity
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True if the sequence was aligned against itself.
    pub fn is_self_hit(&self) -> bool {
        self.reference == self.query
    }
}

// Records are viewed through their reference span
impl IntervalOp for Record {
    type Idx = u64;

    fn start(&self) -> Self::Idx {
        self.reference_span.start()
    }

    fn end(&self) -> Self::Idx {
        self.reference_span.end()
    }
}
