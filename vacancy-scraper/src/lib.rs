pub mod api;
pub mod headhunter;
pub mod pagination;
pub mod superjob;

pub use api::{Error, Fetched, ListingApi, Page, Result, VacancySource};
pub use pagination::PaginationPolicy;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One job listing exactly as the platform returned it.
///
/// The shape differs per platform, extractors decode the parts they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Posting(Value);

impl Posting {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Top level field of the listing, `None` for missing keys and non-object listings.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn decode<'a, T: Deserialize<'a>>(&'a self) -> serde_json::Result<T> {
        T::deserialize(&self.0)
    }
}

impl From<Value> for Posting {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}
