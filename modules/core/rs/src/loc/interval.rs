use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

use crate::num::PrimInt;
use ::num::{CheckedAdd, CheckedSub, One};
#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Dissolve;
use eyre::{ensure, Report, Result};
use impl_tools::autoimpl;

/// Interval is a closed region [start, end] on a caller-defined coordinate axis.
/// Coordinates are kept as given: 0-based and 1-based axes are never normalized.
/// It's not represented as a Rust-native RangeInclusive for a couple of reasons:
/// - Prohibit intervals with negative length (start > end) at construction time
/// - Implement custom traits (e.g. Dissolve) and methods (e.g. contains, intersects, envelops).
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Dissolve)]
pub struct Interval<Idx: PrimInt> {
    pub(super) start: Idx,
    pub(super) end: Idx,
}

/// Trait for types that can be generally viewed as closed intervals [start, end].
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>, Rc<T>, Arc<T>)]
#[allow(clippy::len_without_is_empty)]
pub trait IntervalOp {
    type Idx: PrimInt;

    /// First position covered by the interval-like object.
    fn start(&self) -> Self::Idx;

    /// Last position covered by the interval-like object.
    fn end(&self) -> Self::Idx;

    /// Number of positions covered by the interval-like object (both ends included).
    /// None if the count doesn't fit into the index type, e.g. for [0, u64::MAX].
    fn len(&self) -> Option<Self::Idx> {
        self.end()
            .checked_sub(&self.start())?
            .checked_add(&<Self::Idx as One>::one())
    }

    /// Check if the interval-like object contains a given position.
    fn contains(&self, pos: Self::Idx) -> bool {
        self.start() <= pos && pos <= self.end()
    }

    /// Check if the interval-like object shares at least one position with another one.
    /// Intervals that only share a boundary point do intersect.
    fn intersects(&self, other: &Self) -> bool {
        self.start() <= other.end() && other.start() <= self.end()
    }

    /// Check if the interval-like object fully covers another interval-like object.
    fn envelops(&self, other: &Self) -> bool {
        self.start() <= other.start() && other.end() <= self.end()
    }

    /// Turn the interval-like object into a basic closed interval.
    fn as_interval(&self) -> Interval<Self::Idx> {
        Interval {
            start: self.start(),
            end: self.end(),
        }
    }
}

impl<T: PrimInt> IntervalOp for Interval<T> {
    type Idx = T;

    #[inline(always)]
    fn start(&self) -> Self::Idx {
        self.start
    }
    #[inline(always)]
    fn end(&self) -> Self::Idx {
        self.end
    }
}

impl<Idx: PrimInt> Interval<Idx> {
    pub fn new(start: Idx, end: Idx) -> Result<Self> {
        ensure!(
            start <= end,
            "Invalid interval: start > end in ({:?}, {:?})",
            start,
            end
        );
        Ok(Self { start, end })
    }
}

impl<Idx: PrimInt> Default for Interval<Idx> {
    fn default() -> Self {
        Self {
            start: Idx::zero(),
            end: Idx::zero(),
        }
    }
}

impl<Idx: PrimInt + Display> Display for Interval<Idx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<Idx: PrimInt> TryFrom<(Idx, Idx)> for Interval<Idx> {
    type Error = Report;

    fn try_from(value: (Idx, Idx)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl<Idx: PrimInt> From<Interval<Idx>> for (Idx, Idx) {
    fn from(interval: Interval<Idx>) -> Self {
        (interval.start, interval.end)
    }
}

impl<Idx: PrimInt> PartialEq<(Idx, Idx)> for Interval<Idx> {
    fn eq(&self, other: &(Idx, Idx)) -> bool {
        self.start == other.0 && self.end == other.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct() {
        assert_eq!(Interval::new(0, 10).unwrap(), Interval { start: 0, end: 10 });
        assert_eq!(Interval::new(5, 5).unwrap(), Interval { start: 5, end: 5 });
        assert!(Interval::new(1, 0).is_err());
        assert!(Interval::<i64>::try_from((10, -10)).is_err());
    }

    #[test]
    fn test_construct_error_names_the_pair() {
        let err = Interval::new(12u64, 3u64).unwrap_err();
        assert!(err.to_string().contains("(12, 3)"), "{}", err);
    }

    #[test]
    fn test_len() {
        assert_eq!(Interval::new(0, 10).unwrap().len(), Some(11));
        assert_eq!(Interval::new(7, 7).unwrap().len(), Some(1));
    }

    #[test]
    fn test_len_at_type_bounds() {
        assert_eq!(Interval::new(0u64, u64::MAX).unwrap().len(), None);
        assert_eq!(Interval::new(1u64, u64::MAX).unwrap().len(), Some(u64::MAX));
        assert_eq!(Interval::new(i64::MIN, i64::MAX).unwrap().len(), None);
        assert_eq!(Interval::new(i64::MIN, -2).unwrap().len(), Some(i64::MAX));
        assert_eq!(Interval::new(u8::MAX, u8::MAX).unwrap().len(), Some(1));
    }

    #[test]
    fn test_contains() {
        let interval = Interval::new(1, 10).unwrap();
        assert_eq!(interval.contains(0), false);
        assert_eq!(interval.contains(1), true);
        assert_eq!(interval.contains(5), true);
        assert_eq!(interval.contains(10), true);
        assert_eq!(interval.contains(11), false);
    }

    #[test]
    fn test_intersects() {
        let interval = Interval::new(1, 10).unwrap();
        assert_eq!(interval.intersects(&Interval::new(-5, 0).unwrap()), false);
        assert_eq!(interval.intersects(&Interval::new(0, 1).unwrap()), true);
        assert_eq!(interval.intersects(&Interval::new(5, 9).unwrap()), true);
        assert_eq!(interval.intersects(&Interval::new(10, 11).unwrap()), true);
        assert_eq!(interval.intersects(&Interval::new(11, 12).unwrap()), false);
    }

    #[test]
    fn test_envelops() {
        let interval = Interval::new(1, 10).unwrap();
        assert!(interval.envelops(&interval));
        assert!(interval.envelops(&Interval::new(2, 9).unwrap()));
        assert!(!interval.envelops(&Interval::new(0, 9).unwrap()));
        assert!(!interval.envelops(&Interval::new(2, 11).unwrap()));
    }

    #[test]
    fn test_tuples() {
        let interval = Interval::new(-1i32, 5).unwrap();
        assert_eq!(<(i32, i32)>::from(interval), (-1, 5));
        assert_eq!(interval, (-1, 5));
        assert_eq!(interval.to_string(), "[-1, 5]");
    }
}
