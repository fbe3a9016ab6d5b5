//! Alignment properties over generated sparse axes

use report_charts::align::{align_months, align_range, month_axis, IndexRefs};
use report_charts::types::YearMonth;

/// Every subset of days 1..=n drawn from a bit mask, ascending
fn subsets(n: u32) -> impl Iterator<Item = Vec<u32>> {
    (0u32..(1 << n)).map(move |mask| (1..=n).filter(|d| mask & (1 << (d - 1)) != 0).collect())
}

#[test]
fn test_refs_cover_dense_axis() {
    for sparse in subsets(8) {
        let refs = align_range(1..=8, &sparse).unwrap();
        assert_eq!(refs.len(), 8);
        assert_eq!(refs.present_count(), sparse.len());
    }
}

#[test]
fn test_refs_point_at_matching_values() {
    for sparse in subsets(8) {
        let refs = align_range(1..=8, &sparse).unwrap();
        for (pos, r) in refs.as_slice().iter().enumerate() {
            let day = pos as u32 + 1;
            match r {
                Some(i) => assert_eq!(sparse[*i], day),
                None => assert!(!sparse.contains(&day)),
            }
        }
    }
}

#[test]
fn test_projection_keeps_values_in_order() {
    for sparse in subsets(7) {
        let values: Vec<u64> = sparse.iter().map(|d| u64::from(*d) * 100).collect();
        let refs = align_range(1..=7, &sparse).unwrap();
        let present: Vec<u64> = refs.project(&values).into_iter().flatten().collect();
        assert_eq!(present, values);
    }
}

#[test]
fn test_unsorted_input_is_rejected() {
    assert!(align_range(1..=31, &[10, 9]).is_err());
    assert!(align_range(0..=23, &[0, 24]).is_err());
}

#[test]
fn test_empty_axis() {
    let refs = align_range(1..=0, &[]).unwrap();
    assert!(refs.is_empty());
    assert_eq!(refs, IndexRefs::empty(0));
}

#[test]
fn test_month_axis_spans_years() {
    let first = YearMonth::new(2019, 6).unwrap();
    let axis = month_axis(first, 24);
    assert_eq!(axis.len(), 24);
    assert_eq!(axis[23], YearMonth::new(2021, 5).unwrap());
    assert!(axis.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_month_gaps_across_year_end() {
    let first = YearMonth::new(2020, 10).unwrap();
    let sparse = [
        YearMonth::new(2020, 10).unwrap(),
        YearMonth::new(2021, 1).unwrap(),
        YearMonth::new(2021, 3).unwrap(),
    ];
    let refs = align_months(first, 6, &sparse).unwrap();
    assert_eq!(
        refs.as_slice(),
        &[Some(0), None, None, Some(1), None, Some(2)]
    );
}
