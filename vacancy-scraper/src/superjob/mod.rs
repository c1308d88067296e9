mod types;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};

use crate::api::{Error, Fetched, ListingApi, Page, Result, VacancySource};
use crate::pagination::{self, PaginationPolicy};
use types::{ResponseBody, SearchParams};

pub const DEFAULT_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
pub const DEFAULT_TOWN: &str = "Москва";
pub const DEFAULT_PER_PAGE: u32 = 100;
const API_KEY_HEADER: &str = "x-api-app-id";

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    pub api_key: String,
    pub town: String,
    pub per_page: u32,
}

impl SuperJobConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            base_url: DEFAULT_URL.to_owned(),
            api_key,
            town: DEFAULT_TOWN.to_owned(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Vacancy search on superjob.ru, authenticated with an application key.
pub struct SuperJob {
    client: Client,
    config: SuperJobConfig,
}

impl SuperJob {
    pub fn new(config: SuperJobConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ListingApi for SuperJob {
    fn name(&self) -> &'static str {
        "SuperJob"
    }

    fn policy(&self) -> PaginationPolicy {
        PaginationPolicy::UntilEmpty
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<Page> {
        let params = SearchParams {
            keyword,
            town: &self.config.town,
            count: self.config.per_page,
            page,
        };
        let resp = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let url = resp.url().to_string();
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve vacancies for page: {}, search: {}, error resp body: {:?}",
                page,
                keyword,
                error_body
            );
            return Err(Error::RequestNotOk { url, status });
        }
        let body: ResponseBody = resp.json().await?;
        Ok(Page {
            items: body.objects,
            total: body.total,
            pages: None,
        })
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    fn name(&self) -> &'static str {
        ListingApi::name(self)
    }

    async fn fetch(&self, keyword: &str) -> Fetched {
        pagination::walk(self, keyword).await
    }
}
