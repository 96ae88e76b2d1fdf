use super::model::Dataset;

// ---------------------------------------------------------------------------
// Keyword search over the visible cells
// ---------------------------------------------------------------------------

/// Return indices of records with at least one cell containing `keyword`.
///
/// Matching is a case-insensitive substring test against the cell text as
/// displayed, over the dataset's columns only. A blank keyword matches every
/// record.
pub fn matching_indices(dataset: &Dataset, keyword: &str) -> Vec<usize> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return (0..dataset.len()).collect();
    }

    (0..dataset.len())
        .filter(|&row| {
            dataset
                .column_names
                .iter()
                .any(|col| dataset.cell(row, col).to_lowercase().contains(&needle))
        })
        .collect()
}
