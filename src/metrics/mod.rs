//! @ai:module:intent Metric taxonomy and comparison result types
//! @ai:module:layer domain
//! @ai:module:public_api MetricDirectory, MetricSpec, Polarity, MetricCategory, ResultRecord, Comparison, Verdict, ComparisonReport

pub mod directory;
pub mod types;

pub use directory::{MetricDirectory, MetricSpec, DEFAULT_WEIGHT};
pub use types::{
    CategoryVerdict, Comparison, ComparisonReport, MetricCategory, Polarity, ResultRecord, Verdict,
};
