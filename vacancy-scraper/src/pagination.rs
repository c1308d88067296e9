use crate::api::{Fetched, ListingApi};

/// When to stop requesting further pages of a search.
///
/// Every policy stops on the first empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationPolicy {
    UntilEmpty,
    /// Also stops after `max_pages` pages or once the platform's declared
    /// page count is used up, whichever comes first.
    Bounded { max_pages: u32 },
}

impl PaginationPolicy {
    /// Whether page `next_page` (zero based) may be requested.
    pub fn allows(&self, next_page: u32, declared_pages: Option<u32>) -> bool {
        match self {
            PaginationPolicy::UntilEmpty => true,
            PaginationPolicy::Bounded { max_pages } => {
                next_page < *max_pages && declared_pages.map_or(true, |pages| next_page < pages)
            }
        }
    }
}

/// Walk the pages of a search one at a time until the api's policy says stop.
///
/// The first failing page ends the walk, it is logged and kept in
/// [`Fetched::interrupted`] next to whatever was collected before it.
pub async fn walk<A: ListingApi + ?Sized>(api: &A, keyword: &str) -> Fetched {
    let policy = api.policy();
    let mut fetched = Fetched::default();
    let mut declared_pages = None;
    let mut page = 0;
    while policy.allows(page, declared_pages) {
        log::debug!(
            "requesting vacancies from {}, keyword: {}, page: {}",
            api.name(),
            keyword,
            page
        );
        let result = match api.fetch_page(keyword, page).await {
            Ok(result) => result,
            Err(e) => {
                log::error!(
                    "{} request failed for keyword: {}, page: {}, stopping: {}",
                    api.name(),
                    keyword,
                    page,
                    e
                );
                fetched.interrupted = Some(e);
                break;
            }
        };
        fetched.reported_total = result.total;
        if result.items.is_empty() {
            break;
        }
        declared_pages = result.pages;
        fetched.postings.extend(result.items);
        page += 1;
    }
    log::info!(
        "collected {} vacancies from {} for {} over {} pages, platform reports {}",
        fetched.postings.len(),
        api.name(),
        keyword,
        page,
        fetched.reported_total
    );
    fetched
}
