//! @ai:module:intent Text report with a per-category comparison table and overall summary
//! @ai:module:layer infrastructure
//! @ai:module:public_api TableReporter
//! @ai:module:stateless true

use crate::metrics::{Comparison, ComparisonReport, MetricCategory};
use crate::subject::Side;

const WIDTH: usize = 100;

/// @ai:intent Renders the console comparison report
pub struct TableReporter;

impl TableReporter {
    /// @ai:intent Create a new table reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Format the signed difference with a direction marker
    /// @ai:effects pure
    fn format_difference(value: f64) -> String {
        let marker = if value > 0.0 { '↑' } else { '↓' };
        format!("{}{:>9.1}%", marker, value.abs())
    }

    /// @ai:intent Format one comparison row
    /// @ai:effects pure
    fn format_row(comp: &Comparison) -> String {
        let mark = if comp.winning_side == Side::B {
            "✓"
        } else {
            ""
        };

        format!(
            "{:<35} | {:>15.2} | {:>15.2} | {} | {:<20} {}\n",
            comp.metric,
            comp.value_a,
            comp.value_b,
            Self::format_difference(comp.percent_difference),
            comp.winner,
            mark
        )
    }

    /// @ai:intent Render the grouped comparison table
    /// @ai:effects pure
    pub fn render_table(&self, report: &ComparisonReport) -> String {
        let rule = "=".repeat(WIDTH);
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", rule));
        output.push_str("COMPREHENSIVE BENCHMARK COMPARISON\n");
        output.push_str(&format!("{}\n\n", rule));
        output.push_str(&format!(
            "{:<35} | {:>15} | {:>15} | {:>10} | {:<20}\n",
            "Metric", report.subjects.a.label, report.subjects.b.label, "Diff %", "Winner"
        ));
        output.push_str(&format!("{}\n", "-".repeat(WIDTH)));

        for category in MetricCategory::ALL {
            output.push_str(&format!("\n{}\n", category.as_str().to_uppercase()));
            output.push_str(&format!("{}\n", "-".repeat(WIDTH)));

            for comp in report.in_category(category) {
                output.push_str(&Self::format_row(comp));
            }
        }

        output.push_str(&format!("\n{}\n", rule));
        output
    }

    /// @ai:intent Render the overall winner block
    /// @ai:effects pure
    pub fn render_summary(&self, report: &ComparisonReport) -> String {
        let rule = "=".repeat(WIDTH);
        let verdict = &report.verdict;
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", rule));
        output.push_str("OVERALL WINNER\n");
        output.push_str(&format!("{}\n\n", rule));
        output.push_str(&format!(
            "{:<25} {:>3} points ({:.1}%)\n",
            format!("{}:", report.subjects.a.legend),
            verdict.score_a,
            verdict.percentage_a
        ));
        output.push_str(&format!(
            "{:<25} {:>3} points ({:.1}%)\n",
            format!("{}:", report.subjects.b.legend),
            verdict.score_b,
            verdict.percentage_b
        ));

        if !verdict.by_category.is_empty() {
            output.push('\n');
            for cat in &verdict.by_category {
                output.push_str(&format!(
                    "  {:<18} {:>3} - {:<3} {}\n",
                    cat.category.as_str(),
                    cat.score_a,
                    cat.score_b,
                    cat.winner
                ));
            }
        }

        output.push_str(&format!(
            "\nWinner: {}\n\n",
            verdict.overall_winner.to_uppercase()
        ));
        output.push_str(&format!("{}\n", rule));
        output
    }

    /// @ai:intent Render table followed by summary
    /// @ai:effects pure
    pub fn render(&self, report: &ComparisonReport) -> String {
        let mut output = self.render_table(report);
        output.push_str(&self.render_summary(report));
        output
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::sample_report;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_difference() {
        assert_eq!(TableReporter::format_difference(25.0), "↑     25.0%");
        assert_eq!(TableReporter::format_difference(-20.0), "↓     20.0%");
        assert_eq!(TableReporter::format_difference(0.0), "↓      0.0%");
    }

    #[test]
    fn test_row_marks_subject_b_wins() {
        let report = sample_report();
        let row = TableReporter::format_row(&report.comparisons[1]);

        assert_eq!(
            row,
            format!(
                "{:<35} | {:>15} | {:>15} | ↓     20.0% | {:<20} ✓\n",
                "latency_p50", "100.00", "80.00", "B"
            )
        );
    }

    #[test]
    fn test_table_groups_by_category() {
        let output = TableReporter::new().render_table(&sample_report());

        let throughput = output.find("THROUGHPUT").unwrap();
        let latency = output.find("LATENCY").unwrap();
        let resource = output.find("RESOURCE USAGE").unwrap();
        let votes = output.find("votes_per_second").unwrap();
        let p50 = output.find("latency_p50").unwrap();

        assert!(throughput < votes && votes < latency);
        assert!(latency < p50 && p50 < resource);
        assert!(output.contains("1000.00"));
    }

    #[test]
    fn test_summary_shows_scores_and_winner() {
        let output = TableReporter::new().render_summary(&sample_report());

        assert!(output.contains("OVERALL WINNER"));
        assert!(output.contains(" 10 points (50.0%)"));
        assert!(output.contains("Winner: A"));
    }

    #[test]
    fn test_empty_report_renders_headers_only() {
        let mut report = sample_report();
        report.comparisons.clear();
        let output = TableReporter::new().render_table(&report);

        assert!(output.contains("RELIABILITY"));
        assert!(!output.contains("latency_p50"));
    }
}
