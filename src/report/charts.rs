//! @ai:module:intent Grouped bar charts per metric category
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator, ChartGeneratorTrait, ChartGroup
//! @ai:module:stateless true

use crate::metrics::{ComparisonReport, MetricCategory, MetricDirectory};
use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const SUBJECT_A_COLOR: RGBColor = RGBColor(0x34, 0x98, 0xdb);
const SUBJECT_B_COLOR: RGBColor = RGBColor(0x2e, 0xcc, 0x71);
const BAR_WIDTH: f64 = 0.35;

/// @ai:intent One chart: a category, its title, axis names and file name
#[derive(Debug, Clone, Copy)]
pub struct ChartGroup {
    pub category: MetricCategory,
    pub file_name: &'static str,
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
}

/// Categories that get a chart, in generation order.
pub const CHART_GROUPS: [ChartGroup; 3] = [
    ChartGroup {
        category: MetricCategory::Throughput,
        file_name: "throughput_comparison.png",
        title: "Throughput Comparison",
        x_desc: "Metric",
        y_desc: "Value",
    },
    ChartGroup {
        category: MetricCategory::Latency,
        file_name: "latency_comparison.png",
        title: "Latency Comparison (μs)",
        x_desc: "Percentile",
        y_desc: "Latency (μs)",
    },
    ChartGroup {
        category: MetricCategory::ResourceUsage,
        file_name: "resource_comparison.png",
        title: "Resource Usage Comparison",
        x_desc: "Metric",
        y_desc: "Value",
    },
];

/// @ai:intent Trait for chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Generate all charts from a report
    fn generate_all(&self, report: &ComparisonReport, output_dir: &Path) -> Result<Vec<String>>;
}

/// @ai:intent Generates side-by-side bar charts from a comparison report
pub struct ChartGenerator;

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Collect (metric, A value, B value) for the charted metrics of a group
    /// @ai:effects pure
    pub fn chart_data<'a>(report: &'a ComparisonReport, group: &ChartGroup) -> Vec<(&'a str, f64, f64)> {
        report
            .in_category(group.category)
            .filter(|c| {
                MetricDirectory::get(&c.metric)
                    .map(|m| m.charted)
                    .unwrap_or(false)
            })
            .map(|c| (c.metric.as_str(), c.value_a, c.value_b))
            .collect()
    }

    /// @ai:intent X coordinate of the middle of a bar starting at slot + offset
    /// @ai:effects pure
    fn bar_center(slot: usize, offset: f64) -> f64 {
        slot as f64 + offset + BAR_WIDTH / 2.0
    }

    /// @ai:intent Draw one grouped bar chart
    /// @ai:pre data is not empty
    /// @ai:effects fs:write
    fn generate_bar_chart(
        &self,
        report: &ComparisonReport,
        group: &ChartGroup,
        data: &[(&str, f64, f64)],
        output_path: &Path,
    ) -> Result<()> {
        let root = BitMapBackend::new(output_path, (1200, 600)).into_drawing_area();
        root.fill(&WHITE)?;

        let max = data
            .iter()
            .flat_map(|(_, a, b)| [*a, *b])
            .fold(0.0f64, f64::max);
        let y_max = if max > 0.0 { max * 1.15 } else { 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .caption(group.title, ("sans-serif", 30))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(70)
            .build_cartesian_2d(0f64..data.len() as f64, 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(data.len() * 2 + 1)
            .y_desc(group.y_desc)
            .x_desc(group.x_desc)
            .x_label_formatter(&|x| {
                let offset = x - x.floor();
                if (offset - 0.5).abs() > 0.01 {
                    return String::new();
                }
                data.get(x.floor() as usize)
                    .map(|(name, _, _)| name.to_string())
                    .unwrap_or_default()
            })
            .draw()?;

        let series = [
            (&report.subjects.a.legend, SUBJECT_A_COLOR, 0.5 - BAR_WIDTH),
            (&report.subjects.b.legend, SUBJECT_B_COLOR, 0.5),
        ];

        let value_style = TextStyle::from(("sans-serif", 12).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for (index, (legend, color, offset)) in series.into_iter().enumerate() {
            let value_of = move |entry: &(&str, f64, f64)| if index == 0 { entry.1 } else { entry.2 };

            chart
                .draw_series(data.iter().enumerate().map(|(i, entry)| {
                    let left = i as f64 + offset;
                    Rectangle::new([(left, 0.0), (left + BAR_WIDTH, value_of(entry))], color.filled())
                }))?
                .label(legend.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));

            chart.draw_series(data.iter().enumerate().map(|(i, entry)| {
                let value = value_of(entry);
                Text::new(
                    format!("{:.1}", value),
                    (Self::bar_center(i, offset), value),
                    value_style.clone(),
                )
            }))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:intent Generate one chart per group that has data
    /// @ai:effects fs:write
    fn generate_all(&self, report: &ComparisonReport, output_dir: &Path) -> Result<Vec<String>> {
        std::fs::create_dir_all(output_dir)?;

        let mut generated = Vec::new();

        for group in &CHART_GROUPS {
            let data = Self::chart_data(report, group);
            if data.is_empty() {
                tracing::debug!("No {} data to chart", group.category);
                continue;
            }

            self.generate_bar_chart(report, group, &data, &output_dir.join(group.file_name))?;
            generated.push(group.file_name.to_string());
        }

        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::sample_report;
    use tempfile::TempDir;

    #[test]
    fn test_chart_data_skips_uncharted_metrics() {
        let report = sample_report();
        let latency = ChartGenerator::chart_data(&report, &CHART_GROUPS[1]);

        let names: Vec<_> = latency.iter().map(|(name, _, _)| *name).collect();
        assert_eq!(names, vec!["latency_p50"]);
        assert!(report.comparisons.iter().any(|c| c.metric == "latency_mean"));
    }

    #[test]
    fn test_value_labels_sit_over_bar_centers() {
        let a_center = ChartGenerator::bar_center(0, 0.5 - BAR_WIDTH);
        let b_center = ChartGenerator::bar_center(2, 0.5);

        assert!((a_center - (0.5 - BAR_WIDTH / 2.0)).abs() < 1e-9);
        assert!((b_center - (2.5 + BAR_WIDTH / 2.0)).abs() < 1e-9);
        // The two bars of a slot are mirrored around the slot's tick
        let slot_a = ChartGenerator::bar_center(1, 0.5 - BAR_WIDTH);
        let slot_b = ChartGenerator::bar_center(1, 0.5);
        assert!(((slot_a + slot_b) / 2.0 - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_generate_all_charts() {
        let generator = ChartGenerator::new();
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("charts");

        let files = generator.generate_all(&sample_report(), &out).unwrap();

        assert_eq!(
            files,
            vec!["throughput_comparison.png", "latency_comparison.png"]
        );
        assert!(out.join("throughput_comparison.png").exists());
        assert!(out.join("latency_comparison.png").exists());
        assert!(!out.join("resource_comparison.png").exists());
    }

    #[test]
    fn test_empty_report_produces_no_charts() {
        let mut report = sample_report();
        report.comparisons.clear();
        let temp = TempDir::new().unwrap();

        let files = ChartGenerator::new().generate_all(&report, temp.path()).unwrap();
        assert!(files.is_empty());
    }
}
