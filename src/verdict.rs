//! @ai:module:intent Fold comparisons into weighted scores and an overall winner
//! @ai:module:layer application
//! @ai:module:public_api VerdictAggregator, VerdictAggregatorTrait, WeightPolicy
//! @ai:module:stateless true

use crate::metrics::{CategoryVerdict, Comparison, MetricCategory, MetricDirectory, Verdict};
use crate::subject::{Side, SubjectPair};
use serde::{Deserialize, Serialize};

/// @ai:intent Which comparisons contribute to the score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightPolicy {
    /// Only metrics with an explicit directory weight count
    #[default]
    ExplicitOnly,
    /// Every compared metric counts, unweighted ones with DEFAULT_WEIGHT
    DefaultOne,
}

impl WeightPolicy {
    /// @ai:intent Contribution of a metric under this policy; zero means excluded
    /// @ai:effects pure
    pub fn weight(&self, metric: &str) -> u32 {
        match self {
            WeightPolicy::ExplicitOnly => MetricDirectory::explicit_weight(metric).unwrap_or(0),
            WeightPolicy::DefaultOne => MetricDirectory::weight(metric),
        }
    }

    /// @ai:intent Convert policy to its configuration string
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightPolicy::ExplicitOnly => "explicit-only",
            WeightPolicy::DefaultOne => "default-one",
        }
    }
}

impl std::fmt::Display for WeightPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent Trait for verdict aggregation
pub trait VerdictAggregatorTrait: Send + Sync {
    /// @ai:intent Aggregate comparisons into a verdict
    fn aggregate(&self, comparisons: &[Comparison], subjects: &SubjectPair) -> Verdict;
}

/// @ai:intent Weighted scorer over a comparison list
pub struct VerdictAggregator {
    policy: WeightPolicy,
}

impl VerdictAggregator {
    /// @ai:intent Create an aggregator with the given weight policy
    /// @ai:effects pure
    pub fn new(policy: WeightPolicy) -> Self {
        Self { policy }
    }

    /// @ai:intent Sum weights won by each side
    /// @ai:effects pure
    fn tally<'a, I>(&self, comparisons: I) -> (u32, u32)
    where
        I: IntoIterator<Item = &'a Comparison>,
    {
        comparisons
            .into_iter()
            .fold((0, 0), |(a, b), comp| {
                let weight = self.policy.weight(&comp.metric);
                match comp.winning_side {
                    Side::A => (a + weight, b),
                    Side::B => (a, b + weight),
                }
            })
    }
}

impl Default for VerdictAggregator {
    fn default() -> Self {
        Self::new(WeightPolicy::default())
    }
}

/// @ai:intent B wins only with a strictly greater score
/// @ai:effects pure
fn winner_label(score_a: u32, score_b: u32, subjects: &SubjectPair) -> String {
    let side = if score_b > score_a { Side::B } else { Side::A };
    subjects.label(side).to_string()
}

/// @ai:intent Share of the total, defined as zero when the total is zero
/// @ai:effects pure
fn percentage(score: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        (score as f64 / total as f64) * 100.0
    }
}

impl VerdictAggregatorTrait for VerdictAggregator {
    /// @ai:intent Aggregate overall and per-category scores
    /// @ai:effects pure
    fn aggregate(&self, comparisons: &[Comparison], subjects: &SubjectPair) -> Verdict {
        let (score_a, score_b) = self.tally(comparisons);
        let total = score_a + score_b;

        let by_category = MetricCategory::ALL
            .iter()
            .filter(|cat| comparisons.iter().any(|c| c.category == **cat))
            .map(|cat| {
                let (a, b) = self.tally(comparisons.iter().filter(|c| c.category == *cat));
                CategoryVerdict {
                    category: *cat,
                    score_a: a,
                    score_b: b,
                    winner: winner_label(a, b, subjects),
                }
            })
            .collect();

        tracing::debug!(
            "Verdict under {} policy: {} vs {}",
            self.policy,
            score_a,
            score_b
        );

        Verdict {
            score_a,
            score_b,
            percentage_a: percentage(score_a, total),
            percentage_b: percentage(score_b, total),
            overall_winner: winner_label(score_a, score_b, subjects),
            by_category,
        }
    }
}
