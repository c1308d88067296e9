use serde::{Deserialize, Serialize};

use crate::Posting;

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBody {
    #[serde(default)]
    pub(crate) objects: Vec<Posting>,
    #[serde(default)]
    pub(crate) total: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchParams<'a> {
    pub(crate) keyword: &'a str,
    pub(crate) town: &'a str,
    pub(crate) count: u32,
    pub(crate) page: u32,
}
