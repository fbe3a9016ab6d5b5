//! Row collection across a table's row groups

use super::table::{ReportTable, Row};

/// Data rows of a table in document order, flattened across row groups
///
/// Returns an empty list when the table is absent or when any row group is
/// present but empty. Callers treat an empty list as "no data".
pub fn collect_rows(table: Option<&ReportTable>) -> Vec<&Row> {
    let Some(table) = table else {
        return Vec::new();
    };
    if table.groups.iter().any(|g| g.rows.is_empty()) {
        return Vec::new();
    }
    table.groups.iter().flat_map(|g| g.rows.iter()).collect()
}

/// Drop footer groups: groups in which every row is narrower than `columns`
///
/// Rows of other groups are kept as they are, including short ones, so
/// that the extractor's cell-count check still sees them.
pub fn skip_footer_groups(rows: Vec<&Row>, columns: usize) -> Vec<&Row> {
    let footer_groups: Vec<usize> = {
        let mut groups: Vec<usize> = rows.iter().map(|r| r.group).collect();
        groups.dedup();
        groups
            .into_iter()
            .filter(|&g| {
                rows.iter()
                    .filter(|r| r.group == g)
                    .all(|r| r.cells.len() < columns)
            })
            .collect()
    };

    rows.into_iter()
        .filter(|r| !footer_groups.contains(&r.group))
        .collect()
}
