mod types;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::{Error, Fetched, ListingApi, Page, Result, VacancySource};
use crate::pagination::{self, PaginationPolicy};
use types::{ResponseBody, SearchParams};

pub const DEFAULT_URL: &str = "https://api.hh.ru/vacancies";
/// Moscow
pub const DEFAULT_AREA: u32 = 1;
/// hh.ru serves at most 2000 results per search, that is 20 pages of 100.
pub const DEFAULT_MAX_PAGES: u32 = 20;
pub const DEFAULT_PER_PAGE: u32 = 100;
const DEFAULT_USER_AGENT: &str = concat!("salary-survey/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    pub area: u32,
    pub per_page: u32,
    pub max_pages: u32,
    pub user_agent: String,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_owned(),
            area: DEFAULT_AREA,
            per_page: DEFAULT_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Vacancy search on hh.ru.
pub struct HeadHunter {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunter {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ListingApi for HeadHunter {
    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    fn policy(&self) -> PaginationPolicy {
        PaginationPolicy::Bounded {
            max_pages: self.config.max_pages,
        }
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<Page> {
        let params = SearchParams {
            text: keyword,
            area: self.config.area,
            per_page: self.config.per_page,
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
            items: body.items,
            total: body.found,
            pages: body.pages,
        })
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn name(&self) -> &'static str {
        ListingApi::name(self)
    }

    async fn fetch(&self, keyword: &str) -> Fetched {
        pagination::walk(self, keyword).await
    }
}
