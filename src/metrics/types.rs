//! @ai:module:intent Metric, comparison and verdict types
//! @ai:module:layer domain
//! @ai:module:public_api Polarity, MetricCategory, ResultRecord, Comparison, Verdict, CategoryVerdict, ComparisonReport
//! @ai:module:stateless true

use crate::subject::{Side, SubjectPair};
use crate::verdict::WeightPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// @ai:intent Whether a larger or a smaller raw value is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// @ai:intent Taxonomy group a metric belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricCategory {
    Throughput,
    Latency,
    ResourceUsage,
    Security,
    Reliability,
}

impl MetricCategory {
    /// Report order.
    pub const ALL: [MetricCategory; 5] = [
        MetricCategory::Throughput,
        MetricCategory::Latency,
        MetricCategory::ResourceUsage,
        MetricCategory::Security,
        MetricCategory::Reliability,
    ];

    /// @ai:intent Convert category to its display title
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricCategory::Throughput => "Throughput",
            MetricCategory::Latency => "Latency",
            MetricCategory::ResourceUsage => "Resource Usage",
            MetricCategory::Security => "Security",
            MetricCategory::Reliability => "Reliability",
        }
    }
}

impl std::fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent One benchmarked subject's outcome as read from the results file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(rename = "system", alias = "subject")]
    pub subject: String,
    #[serde(default)]
    pub metrics: HashMap<String, Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl ResultRecord {
    /// @ai:intent Build a record from a subject id and metric pairs
    /// @ai:effects pure
    pub fn new<'a>(subject: impl Into<String>, metrics: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            subject: subject.into(),
            metrics: metrics
                .into_iter()
                .map(|(name, value)| (name.to_string(), Some(value)))
                .collect(),
            timestamp: None,
        }
    }

    /// @ai:intent Read a metric, treating absent and null values as zero
    /// @ai:effects pure
    pub fn value(&self, metric: &str) -> f64 {
        self.metrics.get(metric).copied().flatten().unwrap_or(0.0)
    }
}

/// @ai:intent Per-metric outcome of comparing subject A against subject B
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub metric: String,
    pub category: MetricCategory,
    pub polarity: Polarity,
    pub value_a: f64,
    pub value_b: f64,
    /// (B - A) / A * 100
    pub percent_difference: f64,
    /// Label of the winning subject
    pub winner: String,
    pub winning_side: Side,
}

/// @ai:intent Weighted tally for a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryVerdict {
    pub category: MetricCategory,
    pub score_a: u32,
    pub score_b: u32,
    pub winner: String,
}

/// @ai:intent Weighted aggregate outcome across all comparisons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub score_a: u32,
    pub score_b: u32,
    pub percentage_a: f64,
    pub percentage_b: f64,
    pub overall_winner: String,
    #[serde(default)]
    pub by_category: Vec<CategoryVerdict>,
}

impl Verdict {
    /// @ai:intent Sum of both scores
    /// @ai:effects pure
    pub fn total(&self) -> u32 {
        self.score_a + self.score_b
    }
}

/// @ai:intent Complete analysis result handed to the reporters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub generated_at: String,
    pub subjects: SubjectPair,
    pub weight_policy: WeightPolicy,
    pub comparisons: Vec<Comparison>,
    pub verdict: Verdict,
}

impl ComparisonReport {
    /// @ai:intent Comparisons belonging to one category, in engine order
    /// @ai:effects pure
    pub fn in_category(&self, category: MetricCategory) -> impl Iterator<Item = &Comparison> {
        self.comparisons.iter().filter(move |c| c.category == category)
    }
}
