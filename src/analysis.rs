//! @ai:module:intent Run the engine and aggregator over a result set
//! @ai:module:layer application
//! @ai:module:public_api analyze
//! @ai:module:stateless true

use crate::engine::{ComparisonEngine, ComparisonEngineTrait};
use crate::metrics::{ComparisonReport, ResultRecord};
use crate::subject::SubjectPair;
use crate::verdict::{VerdictAggregator, VerdictAggregatorTrait, WeightPolicy};

/// @ai:intent Compare both subjects and derive the verdict in one report
/// @ai:effects pure
pub fn analyze(
    records: &[ResultRecord],
    subjects: &SubjectPair,
    policy: WeightPolicy,
) -> ComparisonReport {
    let engine = ComparisonEngine::new(subjects.clone());
    let comparisons = engine.compare(records);

    if comparisons.is_empty() {
        tracing::warn!(
            "No comparable metrics between {} and {}",
            subjects.a.id,
            subjects.b.id
        );
    } else {
        tracing::info!("Compared {} metrics", comparisons.len());
    }

    let verdict = VerdictAggregator::new(policy).aggregate(&comparisons, subjects);

    ComparisonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        subjects: subjects.clone(),
        weight_policy: policy,
        comparisons,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_default_subjects() {
        let records = vec![
            ResultRecord::new(
                "P2pComm",
                [("votes_per_second", 800.0), ("cpu_usage_percent", 30.0)],
            ),
            ResultRecord::new(
                "MtlsComm",
                [("votes_per_second", 1000.0), ("cpu_usage_percent", 35.0)],
            ),
        ];

        let report = analyze(&records, &SubjectPair::default(), WeightPolicy::ExplicitOnly);

        assert_eq!(report.comparisons.len(), 2);
        assert_eq!(report.verdict.score_a, 7);
        assert_eq!(report.verdict.score_b, 10);
        assert_eq!(report.verdict.overall_winner, "mtls-comm");
        assert_eq!(report.weight_policy, WeightPolicy::ExplicitOnly);
    }

    #[test]
    fn test_analyze_without_subjects() {
        let report = analyze(&[], &SubjectPair::default(), WeightPolicy::DefaultOne);

        assert!(report.comparisons.is_empty());
        assert_eq!(report.verdict.total(), 0);
        assert_eq!(report.verdict.overall_winner, "p2p-comm");
    }
}
