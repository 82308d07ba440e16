//! @ai:module:intent Direction-aware per-metric comparison of two result records
//! @ai:module:layer domain
//! @ai:module:public_api ComparisonEngine, ComparisonEngineTrait, compare, compare_metric
//! @ai:module:stateless true

use crate::metrics::{Comparison, MetricDirectory, MetricSpec, Polarity, ResultRecord};
use crate::subject::{Side, SubjectPair};

/// @ai:intent Trait for comparison engines
pub trait ComparisonEngineTrait: Send + Sync {
    /// @ai:intent Compare the two configured subjects across all known metrics
    fn compare(&self, records: &[ResultRecord]) -> Vec<Comparison>;
}

/// @ai:intent Compares the configured subject pair using the metric directory
pub struct ComparisonEngine {
    subjects: SubjectPair,
}

impl ComparisonEngine {
    /// @ai:intent Create an engine for a subject pair
    /// @ai:effects pure
    pub fn new(subjects: SubjectPair) -> Self {
        Self { subjects }
    }
}

impl ComparisonEngineTrait for ComparisonEngine {
    /// @ai:intent Compare records in directory order
    /// @ai:effects pure
    fn compare(&self, records: &[ResultRecord]) -> Vec<Comparison> {
        compare(records, &self.subjects)
    }
}

/// @ai:intent Select both subjects and build one Comparison per eligible known metric
/// @ai:post output order follows MetricDirectory::all(), not input order
/// @ai:effects pure
pub fn compare(records: &[ResultRecord], subjects: &SubjectPair) -> Vec<Comparison> {
    let find = |id: &str| records.iter().find(|r| r.subject == id);

    let (Some(record_a), Some(record_b)) = (find(subjects.a.id.as_str()), find(subjects.b.id.as_str()))
    else {
        tracing::debug!(
            "Subject {} or {} missing from results; nothing to compare",
            subjects.a.id,
            subjects.b.id
        );
        return Vec::new();
    };

    MetricDirectory::all()
        .iter()
        .filter_map(|spec| compare_metric(spec, record_a, record_b, subjects))
        .collect()
}

/// @ai:intent Compare one metric; None when subject A's value is zero or absent
/// @ai:effects pure
pub fn compare_metric(
    spec: &MetricSpec,
    record_a: &ResultRecord,
    record_b: &ResultRecord,
    subjects: &SubjectPair,
) -> Option<Comparison> {
    let value_a = record_a.value(spec.name);
    let value_b = record_b.value(spec.name);

    if value_a == 0.0 {
        tracing::debug!("Skipping {}: zero baseline value", spec.name);
        return None;
    }

    let percent_difference = (value_b - value_a) / value_a * 100.0;
    let winner = winning_side(spec.polarity, value_a, value_b);

    Some(Comparison {
        metric: spec.name.to_string(),
        category: spec.category,
        polarity: spec.polarity,
        value_a,
        value_b,
        percent_difference,
        winner: subjects.label(winner).to_string(),
        winning_side: winner,
    })
}

/// @ai:intent Decide the better value; B wins only on a strict improvement, ties go to A
/// @ai:effects pure
pub fn winning_side(polarity: Polarity, value_a: f64, value_b: f64) -> Side {
    let b_better = match polarity {
        Polarity::HigherIsBetter => value_b > value_a,
        Polarity::LowerIsBetter => value_b < value_a,
    };

    if b_better {
        Side::B
    } else {
        Side::A
    }
}
