use crate::models::{Dataset, RegionCount, StatusFilter, SummaryCounts};
use std::collections::HashMap;

pub fn summarize(dataset: &Dataset) -> SummaryCounts {
    let mut summary = SummaryCounts {
        total: dataset.len() as u64,
        ..SummaryCounts::default()
    };

    for record in dataset.records() {
        match record.current_status.as_deref() {
            Some("Hospitalized") => summary.active += 1,
            Some("Recovered") => summary.recovered += 1,
            Some("Deceased") => summary.deceased += 1,
            _ => {}
        }
    }

    summary
}

/// Cases per region for rows matching `filter`, highest count first.
///
/// Regions with equal counts keep the order in which they first appear in
/// the dataset. Rows without a region are skipped.
pub fn breakdown(dataset: &Dataset, filter: StatusFilter) -> Vec<RegionCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<RegionCount> = Vec::new();

    let regions = dataset
        .records()
        .iter()
        .filter(|record| filter.matches(record))
        .filter_map(|record| record.detected_state.as_deref());

    for region in regions {
        match positions.get(region) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(region, counts.len());
                counts.push(RegionCount::new(region, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
