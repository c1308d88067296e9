use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::pagination::PaginationPolicy;
use crate::Posting;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' was not successful, status code: {status}")]
    RequestNotOk { url: String, status: StatusCode },
    #[error("API key is not a valid header value: '{0}'")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}

/// A single page of search results.
#[derive(Debug, Default)]
pub struct Page {
    pub items: Vec<Posting>,
    /// Match count reported by the platform for the whole search.
    pub total: u64,
    /// Page count declared by the platform, if it reports one.
    pub pages: Option<u32>,
}

/// Everything collected for one keyword.
///
/// `interrupted` holds the error that ended the walk early; the postings
/// gathered before it are still there.
#[derive(Debug, Default)]
pub struct Fetched {
    pub postings: Vec<Posting>,
    pub reported_total: u64,
    pub interrupted: Option<Error>,
}

/// One platform's listing endpoint, described one page at a time.
#[async_trait]
pub trait ListingApi: Send + Sync {
    fn name(&self) -> &'static str;
    fn policy(&self) -> PaginationPolicy;
    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<Page>;
}

/// Source of postings for a search keyword.
#[async_trait]
pub trait VacancySource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, keyword: &str) -> Fetched;
}
