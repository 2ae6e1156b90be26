use crate::charts::ChartPair;
use crate::errors::UnknownStatus;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One patient row. Missing cells are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatientRecord {
    pub current_status: Option<String>,
    pub detected_state: Option<String>,
}

impl PatientRecord {
    pub fn new(current_status: &str, detected_state: &str) -> Self {
        Self {
            current_status: cell_value(current_status),
            detected_state: cell_value(detected_state),
        }
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.current_status.as_deref() == Some(status)
    }
}

/// Cell contents read as missing, the same set pandas' `read_csv` uses by default.
pub const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn cell_value(value: &str) -> Option<String> {
    if MISSING_MARKERS.iter().any(|marker| *marker == value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// The patient table, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<PatientRecord>,
}

impl Dataset {
    pub fn new(records: Vec<PatientRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<PatientRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = PatientRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub total: u64,
    pub active: u64,
    pub recovered: u64,
    pub deceased: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Hospitalized,
    Recovered,
    Deceased,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Hospitalized,
        StatusFilter::Recovered,
        StatusFilter::Deceased,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Hospitalized => "Hospitalized",
            StatusFilter::Recovered => "Recovered",
            StatusFilter::Deceased => "Deceased",
        }
    }

    /// The `current_status` value rows must carry, or `None` for every row.
    pub fn status(self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            other => Some(other.as_str()),
        }
    }

    pub fn matches(self, record: &PatientRecord) -> bool {
        match self.status() {
            None => true,
            Some(status) => record.has_status(status),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        StatusFilter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == value)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region: String,
    pub count: u64,
}

impl RegionCount {
    pub fn new(region: impl Into<String>, count: u64) -> Self {
        Self {
            region: region.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

/// Everything the page needs after the dropdown settles on `filter`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub filter: StatusFilter,
    pub summary: SummaryCounts,
    pub breakdown: Vec<RegionCount>,
    pub charts: ChartPair,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_markers_read_as_none() {
        for marker in MISSING_MARKERS {
            let record = PatientRecord::new(marker, marker);
            assert_eq!(record.current_status, None, "marker {marker:?}");
            assert_eq!(record.detected_state, None, "marker {marker:?}");
        }
    }

    #[test]
    fn near_missing_values_are_kept() {
        let record = PatientRecord::new("na", " NA");
        assert_eq!(record.current_status.as_deref(), Some("na"));
        assert_eq!(record.detected_state.as_deref(), Some(" NA"));
    }

    #[test]
    fn status_filter_parses_dropdown_values() {
        for filter in StatusFilter::ALL {
            assert_eq!(filter.as_str().parse::<StatusFilter>(), Ok(filter));
        }
    }

    #[test]
    fn status_filter_rejects_other_values() {
        let err = "Migrated".parse::<StatusFilter>().unwrap_err();
        assert_eq!(err, UnknownStatus("Migrated".to_string()));
        assert_eq!(
            err.to_string(),
            "status must be one of All, Hospitalized, Recovered, Deceased (got 'Migrated')"
        );
        let source: &dyn std::error::Error = &err;
        assert!(source.source().is_none());
    }
}
