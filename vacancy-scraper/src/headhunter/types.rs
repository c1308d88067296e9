use serde::{Deserialize, Serialize};

use crate::Posting;

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBody {
    #[serde(default)]
    pub(crate) items: Vec<Posting>,
    #[serde(default)]
    pub(crate) found: u64,
    pub(crate) pages: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchParams<'a> {
    pub(crate) text: &'a str,
    pub(crate) area: u32,
    pub(crate) per_page: u32,
    pub(crate) page: u32,
}
