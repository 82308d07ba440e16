//! @ai:module:intent Static registry of known metrics with polarity and weight
//! @ai:module:layer domain
//! @ai:module:public_api MetricSpec, MetricDirectory, DEFAULT_WEIGHT
//! @ai:module:stateless true

use crate::metrics::types::{MetricCategory, Polarity};

/// Weight reported for known metrics that carry no explicit weight.
pub const DEFAULT_WEIGHT: u32 = 1;

/// @ai:intent Directory entry for one known metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub name: &'static str,
    pub category: MetricCategory,
    pub polarity: Polarity,
    pub weight: Option<u32>,
    /// Included in its category's bar chart
    pub charted: bool,
}

const fn spec(
    name: &'static str,
    category: MetricCategory,
    polarity: Polarity,
    weight: Option<u32>,
    charted: bool,
) -> MetricSpec {
    MetricSpec {
        name,
        category,
        polarity,
        weight,
        charted,
    }
}

use MetricCategory::{Latency, Reliability, ResourceUsage, Security, Throughput};
use Polarity::{HigherIsBetter, LowerIsBetter};

// Grouped by category in report order; engine output follows this order.
static METRICS: [MetricSpec; 13] = [
    spec("votes_per_second", Throughput, HigherIsBetter, Some(10), true),
    spec("messages_per_second", Throughput, HigherIsBetter, Some(5), true),
    spec("bytes_per_second", Throughput, HigherIsBetter, None, false),
    spec("latency_p50", Latency, LowerIsBetter, Some(10), true),
    spec("latency_p95", Latency, LowerIsBetter, Some(8), true),
    spec("latency_p99", Latency, LowerIsBetter, Some(6), true),
    spec("latency_mean", Latency, LowerIsBetter, None, false),
    spec("cpu_usage_percent", ResourceUsage, LowerIsBetter, Some(7), true),
    spec("memory_usage_mb", ResourceUsage, LowerIsBetter, Some(6), true),
    spec("tls_handshake_time_us", Security, LowerIsBetter, Some(4), false),
    spec("cert_validation_time_us", Security, LowerIsBetter, None, false),
    spec("encryption_overhead_percent", Security, LowerIsBetter, None, false),
    spec("delivery_success_rate", Reliability, HigherIsBetter, Some(9), false),
];

/// @ai:intent Read-only view over the process-wide metric table
pub struct MetricDirectory;

impl MetricDirectory {
    /// @ai:intent All known metrics in enumeration order
    /// @ai:effects pure
    pub fn all() -> &'static [MetricSpec] {
        &METRICS
    }

    /// @ai:intent Look up a metric by name
    /// @ai:effects pure
    pub fn get(name: &str) -> Option<&'static MetricSpec> {
        METRICS.iter().find(|m| m.name == name)
    }

    /// @ai:intent Check whether a metric name is known
    /// @ai:effects pure
    pub fn is_known(name: &str) -> bool {
        Self::get(name).is_some()
    }

    /// @ai:intent Polarity of a known metric
    /// @ai:effects pure
    pub fn polarity(name: &str) -> Option<Polarity> {
        Self::get(name).map(|m| m.polarity)
    }

    /// @ai:intent Explicit weight of a metric, if it is in the weighted subset
    /// @ai:effects pure
    pub fn explicit_weight(name: &str) -> Option<u32> {
        Self::get(name).and_then(|m| m.weight)
    }

    /// @ai:intent Weight of a metric, DEFAULT_WEIGHT when none is declared
    /// @ai:effects pure
    pub fn weight(name: &str) -> u32 {
        Self::explicit_weight(name).unwrap_or(DEFAULT_WEIGHT)
    }
}
