pub use interval::{Interval, IntervalOp};
pub use merge::{merge_pairs, MergedIntervals};
pub use orientation::Orientation;

mod interval;
mod merge;
mod orientation;
