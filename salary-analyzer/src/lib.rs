pub mod aggregator;
pub mod api;
pub mod estimator;
pub mod extractors;
pub mod types;

pub use aggregator::aggregate;
pub use api::{Error, Result, SalaryExtractor};
pub use estimator::estimate;
pub use extractors::{HeadHunterSalary, SuperJobSalary};
pub use types::{AggregateReport, LanguageStats};
