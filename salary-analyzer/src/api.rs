use thiserror::Error;
use vacancy_scraper::Posting;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unexpected posting data: '{0}'")]
    DataShape(#[from] serde_json::Error),
}

/// Trait for extracting a ruble salary estimate from a platform's posting
pub trait SalaryExtractor: Send + Sync {
    /// `Ok(None)` when the posting carries no usable salary.
    fn extract(&self, posting: &Posting) -> Result<Option<f64>>;
}
