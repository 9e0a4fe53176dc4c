// Offset pagination for GitLab list endpoints.
// Walks `page=1..N` using the X-Total-Pages header and concatenates the results.

use reqwest::{Method, Url, header::HeaderMap};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::{GitLabError, Result};

use super::client::GitLabClient;

pub const TOTAL_PAGES_HEADER: &str = "x-total-pages";
const PAGE_PARAM: &str = "page";

/// Set the `page` query parameter, replacing any existing one and keeping the rest.
pub(crate) fn set_page(url: &mut Url, page: u32) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != PAGE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(PAGE_PARAM, &page.to_string());
}

/// Read the declared page count. A missing or blank header means a single page.
pub(crate) fn total_pages(headers: &HeaderMap) -> Result<Option<u32>> {
    let Some(value) = headers.get(TOTAL_PAGES_HEADER) else {
        return Ok(None);
    };

    let text = value
        .to_str()
        .map_err(|_| GitLabError::PaginationHeader {
            value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
        })?
        .trim();

    if text.is_empty() {
        return Ok(None);
    }

    text.parse()
        .map(Some)
        .map_err(|_| GitLabError::PaginationHeader {
            value: text.to_string(),
        })
}

impl GitLabClient {
    /// Fetch every page of a list endpoint and return the elements in page order.
    ///
    /// Pages are requested one at a time starting at 1. The loop stops after the
    /// first response without an `X-Total-Pages` header, or once the page just
    /// fetched is the last declared one. Any failure aborts the whole fetch.
    pub async fn get_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let mut url = self.endpoint_url(endpoint)?;
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            set_page(&mut url, page);
            let response = self.send(Method::GET, url.clone(), None).await?;

            let total = total_pages(&response.headers)?;
            let batch: Vec<T> = serde_json::from_slice(&response.body)?;
            debug!(endpoint, page, ?total, items = batch.len(), "fetched page");
            items.extend(batch);

            match total {
                Some(total) if page < total => page += 1,
                _ => {
                    trace!(endpoint, page, "last page reached");
                    break;
                }
            }
        }

        Ok(items)
    }
}
