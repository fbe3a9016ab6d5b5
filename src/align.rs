//! Sparse-to-dense axis alignment
//!
//! Report tables omit rows with no activity, so a day or month present in
//! the chart axis may have no data point. The aligner walks the dense axis
//! and the ascending sparse x-values together and records, for every dense
//! position, the index of the matching sparse point (or nothing). The
//! resulting `IndexRefs` projects any of the bundle's parallel arrays onto
//! the dense axis.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::errors::AlignError;
use crate::types::YearMonth;

/// One entry per dense-axis position: the sparse index, or `None` for a gap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexRefs(Vec<Option<usize>>);

impl IndexRefs {
    /// References where every dense position is a gap
    pub fn empty(len: usize) -> Self {
        Self(vec![None; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of dense positions that reference a data point
    pub fn present_count(&self) -> usize {
        self.0.iter().filter(|r| r.is_some()).count()
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.0
    }

    /// Map a sparse array onto the dense axis, `None` where there is no data
    ///
    /// # Examples
    /// ```
    /// use report_charts::align::align_range;
    ///
    /// let refs = align_range(1..=5, &[2, 4]).unwrap();
    /// let dense = refs.project(&["b", "d"]);
    /// assert_eq!(dense, vec![None, Some("b"), None, Some("d"), None]);
    /// ```
    pub fn project<T: Clone>(&self, sparse: &[T]) -> Vec<Option<T>> {
        self.0
            .iter()
            .map(|r| r.and_then(|i| sparse.get(i).cloned()))
            .collect()
    }
}

/// Co-advancing scan of a dense axis against an ascending sparse list
///
/// Fails when a sparse value is never met, which happens if the list is
/// unsorted, has duplicates or strays outside the dense axis.
fn co_scan<X, I>(dense: I, sparse: &[X]) -> Result<IndexRefs, AlignError>
where
    X: PartialEq,
    I: IntoIterator<Item = X>,
{
    let mut next = 0;
    let refs: Vec<Option<usize>> = dense
        .into_iter()
        .map(|x| {
            if sparse.get(next) == Some(&x) {
                next += 1;
                Some(next - 1)
            } else {
                None
            }
        })
        .collect();

    if next == sparse.len() {
        Ok(IndexRefs(refs))
    } else {
        Err(AlignError::Unaligned {
            matched: next,
            total: sparse.len(),
        })
    }
}

/// Align scalar x-values (days, hours) against an inclusive range
///
/// # Examples
/// ```
/// use report_charts::align::align_range;
///
/// let refs = align_range(1..=30, &[3, 4, 28]).unwrap();
/// assert_eq!(refs.len(), 30);
/// assert_eq!(refs.as_slice()[2], Some(0));
/// assert_eq!(refs.as_slice()[27], Some(2));
/// assert!(align_range(1..=30, &[4, 3]).is_err());
/// ```
pub fn align_range(range: RangeInclusive<u32>, sparse: &[u32]) -> Result<IndexRefs, AlignError> {
    co_scan(range, sparse)
}

/// `count` consecutive months starting at `first`
///
/// # Examples
/// ```
/// use report_charts::align::month_axis;
/// use report_charts::types::YearMonth;
///
/// let axis = month_axis(YearMonth::new(2020, 11).unwrap(), 4);
/// let labels: Vec<String> = axis.iter().map(|m| m.to_string()).collect();
/// assert_eq!(labels, vec!["2020-11", "2020-12", "2021-01", "2021-02"]);
/// ```
pub fn month_axis(first: YearMonth, count: usize) -> Vec<YearMonth> {
    std::iter::successors(Some(first), |m| Some(m.next()))
        .take(count)
        .collect()
}

/// Align month keys against `count` consecutive months starting at `first`
pub fn align_months(
    first: YearMonth,
    count: usize,
    sparse: &[YearMonth],
) -> Result<IndexRefs, AlignError> {
    co_scan(month_axis(first, count), sparse)
}
