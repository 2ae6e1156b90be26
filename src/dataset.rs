use crate::errors::LoadError;
use crate::models::{Dataset, PatientRecord};
use std::{
    env, io,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::{debug, info};

pub const STATUS_COLUMN: &str = "current_status";
pub const STATE_COLUMN: &str = "detected_state";

const DEFAULT_DATA_PATH: &str = "dataset/IndividualDetails.csv";

pub fn resolve_data_path() -> PathBuf {
    match env::var("COVID_DATA_PATH") {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

pub async fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_dataset(bytes.as_slice())?;
    info!(rows = dataset.len(), path = %path.display(), "loaded patient dataset");
    Ok(dataset)
}

/// Reads patient rows from CSV with a header line. Columns other than
/// `current_status` and `detected_state` are ignored.
///
/// Short rows are accepted and their absent cells read as missing; a row
/// with more fields than the header is rejected.
pub fn parse_dataset<R: io::Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let status_idx = column_index(&headers, STATUS_COLUMN)?;
    let state_idx = column_index(&headers, STATE_COLUMN)?;
    debug!(columns = headers.len(), status_idx, state_idx, "resolved csv columns");

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        if row.len() > headers.len() {
            return Err(LoadError::TooManyFields {
                line: row.position().map_or(0, |pos| pos.line()),
                found: row.len(),
                expected: headers.len(),
            });
        }
        records.push(PatientRecord::new(
            row.get(status_idx).unwrap_or_default(),
            row.get(state_idx).unwrap_or_default(),
        ));
    }

    Ok(Dataset::new(records))
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(LoadError::MissingColumn(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,detected_city,detected_state,nationality,current_status
1,Thrissur,Kerala,India,Recovered
2,Alappuzha,Kerala,India,Recovered
3,Jaipur,Rajasthan,Italy,Hospitalized
4,,Delhi,India,Deceased
";

    fn unique_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = env::temp_dir();
        path.push(format!("covid_dashboard_{}_{}_{name}", std::process::id(), nanos));
        path
    }

    #[test]
    fn parse_keeps_required_columns_and_ignores_the_rest() {
        let dataset = parse_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.records()[0], PatientRecord::new("Recovered", "Kerala"));
        assert_eq!(dataset.records()[3], PatientRecord::new("Deceased", "Delhi"));
    }

    #[test]
    fn parse_treats_empty_cells_as_missing() {
        let csv = "current_status,detected_state\nHospitalized,\n,Goa\n";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.records()[0].detected_state, None);
        assert_eq!(dataset.records()[1].current_status, None);
        assert_eq!(dataset.records()[1].detected_state.as_deref(), Some("Goa"));
    }

    #[test]
    fn parse_drops_na_regions_from_breakdowns() {
        let csv = "current_status,detected_state\nRecovered,NA\nRecovered,Kerala\nNaN,Goa\n";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.records()[0].detected_state, None);
        assert_eq!(dataset.records()[2].current_status, None);
        assert_eq!(
            crate::stats::breakdown(&dataset, crate::models::StatusFilter::Recovered),
            vec![crate::models::RegionCount::new("Kerala", 1)]
        );
    }

    #[test]
    fn parse_keeps_values_verbatim() {
        let csv = "current_status,detected_state\nRecovered ,Tamil Nadu\n";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert!(!dataset.records()[0].has_status("Recovered"));
        assert!(dataset.records()[0].has_status("Recovered "));
    }

    #[test]
    fn parse_header_only_yields_empty_dataset() {
        let dataset = parse_dataset("current_status,detected_state\n".as_bytes()).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn parse_rejects_missing_state_column() {
        let err = parse_dataset("id,current_status\n1,Recovered\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(STATE_COLUMN)));
    }

    #[test]
    fn parse_rejects_missing_status_column() {
        let err = parse_dataset("id,detected_state\n1,Kerala\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(STATUS_COLUMN)));
    }

    #[test]
    fn parse_rejects_empty_input() {
        let err = parse_dataset("".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(_)));
    }

    #[test]
    fn parse_accepts_short_rows() {
        let csv = "id,current_status,detected_state,notes\n1,Recovered,Kerala\n2,Deceased\n";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0], PatientRecord::new("Recovered", "Kerala"));
        assert_eq!(dataset.records()[1].current_status.as_deref(), Some("Deceased"));
        assert_eq!(dataset.records()[1].detected_state, None);
    }

    #[test]
    fn parse_rejects_rows_longer_than_header() {
        let csv = "current_status,detected_state\nRecovered,Goa\nRecovered,Kerala,extra\n";
        let err = parse_dataset(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::TooManyFields {
                line,
                found,
                expected,
            } => {
                assert_eq!(line, 3);
                assert_eq!(found, 3);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_rejects_malformed_utf8() {
        let mut csv = b"current_status,detected_state\nRecovered,".to_vec();
        csv.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let err = parse_dataset(csv.as_slice()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[tokio::test]
    async fn load_reads_file_from_disk() {
        let path = unique_path("patients.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let dataset = load_dataset(&path).await.unwrap();
        assert_eq!(dataset.len(), 4);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn load_missing_file_reports_path() {
        let path = unique_path("does-not-exist.csv");
        let err = load_dataset(&path).await.unwrap_err();
        match &err {
            LoadError::Io { path: reported, source } => {
                assert_eq!(reported, &path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("does-not-exist.csv"));
    }
}
