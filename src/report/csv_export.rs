//! @ai:module:intent CSV export of the comparison list
//! @ai:module:layer infrastructure
//! @ai:module:public_api CsvExporter, CsvExporterTrait
//! @ai:module:stateless true

use crate::metrics::ComparisonReport;
use anyhow::{Context, Result};
use std::path::Path;

/// @ai:intent Trait for CSV export
pub trait CsvExporterTrait: Send + Sync {
    /// @ai:intent Write the comparison list as CSV
    fn generate(&self, report: &ComparisonReport, output_path: &Path) -> Result<()>;
}

/// @ai:intent Writes one CSV row per comparison
pub struct CsvExporter;

impl CsvExporter {
    /// @ai:intent Create a new CSV exporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render the CSV document
    /// @ai:effects pure
    pub fn render(report: &ComparisonReport) -> String {
        let mut output = format!(
            "Metric,{},{},Difference %,Winner\n",
            report.subjects.a.label, report.subjects.b.label
        );

        for comp in &report.comparisons {
            output.push_str(&format!(
                "{},{:.2},{:.2},{:.2},{}\n",
                comp.metric, comp.value_a, comp.value_b, comp.percent_difference, comp.winner
            ));
        }

        output
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvExporterTrait for CsvExporter {
    /// @ai:intent Write CSV to file, creating the parent directory
    /// @ai:effects fs:write
    fn generate(&self, report: &ComparisonReport, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(output_path, Self::render(report))
            .with_context(|| format!("Failed to write CSV: {}", output_path.display()))?;
        Ok(())
    }
}
