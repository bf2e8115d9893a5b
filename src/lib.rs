pub mod batch;
pub mod config;
pub mod error;
pub mod report;
pub mod scoring;
pub mod tables;
pub mod types;

pub use scoring::{assess, AttributionWeights, RiskScorer};
pub use tables::RiskTables;
pub use types::scoring::{AssessmentInput, AssessmentResult, Contributions, RiskBand};
