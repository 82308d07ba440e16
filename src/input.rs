//! @ai:module:intent JSON loader for benchmark result sets
//! @ai:module:layer infrastructure
//! @ai:module:public_api load_results, parse_results

use crate::error::{Error, Result};
use crate::metrics::ResultRecord;
use std::path::Path;

/// @ai:intent Load all result records from a JSON file
/// @ai:pre path points to a JSON array of result records
/// @ai:effects fs:read
pub fn load_results(path: &Path) -> Result<Vec<ResultRecord>> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_results(&content).map_err(|source| Error::InputUnparseable {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Loaded {} result records from {}", records.len(), path.display());
    Ok(records)
}

/// @ai:intent Parse result records from JSON text
/// @ai:effects pure
pub fn parse_results(content: &str) -> serde_json::Result<Vec<ResultRecord>> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_results(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
        assert!(err.to_string().starts_with("File not found:"));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("results.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_results(&path).unwrap_err();
        assert!(matches!(err, Error::InputUnparseable { .. }));
    }

    #[test]
    fn test_load_benchmark_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("results.json");
        std::fs::write(
            &path,
            r#"[
                {"system": "P2pComm", "timestamp": "2026-01-19T00:00:00Z",
                 "metrics": {"votes_per_second": 1200.5, "latency_p50": 850, "node_count": 5}},
                {"system": "MtlsComm", "timestamp": "2026-01-19T00:05:00Z",
                 "metrics": {"votes_per_second": 1500.0, "latency_p50": 700, "node_count": 5}}
            ]"#,
        )
        .unwrap();

        let records = load_results(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subject, "P2pComm");
        assert!((records[1].value("latency_p50") - 700.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_non_numeric_metric() {
        let result = parse_results(r#"[{"system": "A", "metrics": {"latency_p50": "fast"}}]"#);
        assert!(result.is_err());
    }
}
