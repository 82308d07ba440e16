//! @ai:module:intent Report generation for comparison results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, TableReporter, ChartGenerator, CsvExporter, JsonReporter

pub mod charts;
pub mod csv_export;
pub mod json_report;
pub mod table;

pub use charts::{ChartGenerator, ChartGeneratorTrait, ChartGroup, CHART_GROUPS};
pub use csv_export::{CsvExporter, CsvExporterTrait};
pub use json_report::{JsonReporter, JsonReporterTrait};
pub use table::TableReporter;

use crate::config::OutputConfig;
use crate::metrics::ComparisonReport;
use anyhow::Result;

/// @ai:intent Files produced by one generate_all call
#[derive(Debug, Default)]
pub struct GeneratedArtifacts {
    pub charts: Vec<String>,
    pub chart_error: Option<String>,
    pub csv: bool,
    pub json: bool,
}

/// @ai:intent Combined file-output generator
pub struct ReportGenerator {
    charts: ChartGenerator,
    csv: CsvExporter,
    json: JsonReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            charts: ChartGenerator::new(),
            csv: CsvExporter::new(),
            json: JsonReporter::new(),
        }
    }

    /// @ai:intent Generate charts, CSV and optional JSON; chart failures only warn
    /// @ai:effects fs:write
    pub fn generate_all(
        &self,
        report: &ComparisonReport,
        output: &OutputConfig,
    ) -> Result<GeneratedArtifacts> {
        let mut artifacts = GeneratedArtifacts::default();

        if output.charts {
            match self.charts.generate_all(report, &output.charts_dir) {
                Ok(files) => {
                    tracing::info!("Charts saved to: {}", output.charts_dir.display());
                    artifacts.charts = files;
                }
                Err(e) => {
                    tracing::warn!("Could not generate charts: {:#}", e);
                    artifacts.chart_error = Some(format!("{:#}", e));
                }
            }
        }

        self.csv.generate(report, &output.csv_file)?;
        tracing::info!("CSV exported to: {}", output.csv_file.display());
        artifacts.csv = true;

        if let Some(json_file) = &output.json_file {
            self.json.generate(report, json_file)?;
            tracing::info!("JSON report written to: {}", json_file.display());
            artifacts.json = true;
        }

        Ok(artifacts)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::analysis::analyze;
    use crate::metrics::{ComparisonReport, ResultRecord};
    use crate::subject::{Subject, SubjectPair};
    use crate::verdict::WeightPolicy;

    /// Votes won by A, p50 won by B (both weight 10), latency_mean unweighted.
    pub fn sample_report() -> ComparisonReport {
        let records = vec![
            ResultRecord::new(
                "A",
                [
                    ("votes_per_second", 1000.0),
                    ("latency_p50", 100.0),
                    ("latency_mean", 50.0),
                ],
            ),
            ResultRecord::new(
                "B",
                [
                    ("votes_per_second", 900.0),
                    ("latency_p50", 80.0),
                    ("latency_mean", 55.0),
                ],
            ),
        ];
        let subjects = SubjectPair::new(Subject::new("A"), Subject::new("B"));
        analyze(&records, &subjects, WeightPolicy::ExplicitOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_support::sample_report;
    use tempfile::TempDir;

    #[test]
    fn test_generate_all_writes_csv_and_json() {
        let temp = TempDir::new().unwrap();
        let output = OutputConfig {
            charts_dir: temp.path().join("charts"),
            csv_file: temp.path().join("comparison.csv"),
            json_file: Some(temp.path().join("report.json")),
            charts: false,
        };

        let artifacts = ReportGenerator::new()
            .generate_all(&sample_report(), &output)
            .unwrap();

        assert!(artifacts.csv && artifacts.json);
        assert!(artifacts.charts.is_empty());
        assert!(!temp.path().join("charts").exists());
        assert!(temp.path().join("comparison.csv").exists());
        assert!(temp.path().join("report.json").exists());
    }

    #[test]
    fn test_chart_failure_does_not_abort_csv() {
        let temp = TempDir::new().unwrap();
        // A file where the charts directory should be makes create_dir_all fail
        let blocked = temp.path().join("charts");
        std::fs::write(&blocked, "not a directory").unwrap();

        let output = OutputConfig {
            charts_dir: blocked,
            csv_file: temp.path().join("comparison.csv"),
            json_file: None,
            charts: true,
        };

        let artifacts = ReportGenerator::new()
            .generate_all(&sample_report(), &output)
            .unwrap();

        assert!(artifacts.chart_error.is_some());
        assert!(artifacts.csv);
        assert!(!artifacts.json);
        assert!(temp.path().join("comparison.csv").exists());
    }
}
