//! @ai:module:intent Benchmark comparison library for two communication stacks
//! @ai:module:layer application
//! @ai:module:public_api analysis, config, engine, error, input, metrics, report, subject, verdict

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod metrics;
pub mod report;
pub mod subject;
pub mod verdict;

pub use analysis::analyze;
pub use config::AnalyzerConfig;
pub use engine::{compare, ComparisonEngine, ComparisonEngineTrait};
pub use error::{Error, Result};
pub use input::load_results;
pub use metrics::{Comparison, ComparisonReport, MetricDirectory, ResultRecord, Verdict};
pub use report::{ReportGenerator, TableReporter};
pub use subject::{Subject, SubjectPair};
pub use verdict::{VerdictAggregator, VerdictAggregatorTrait, WeightPolicy};
