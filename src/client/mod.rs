//! Client for items-range paginated endpoints
//!
//! Sends `Range-Unit: items` / `Range` requests and follows the `next` links
//! the server returns until the collection is exhausted.
//!
//! ```rust,ignore
//! let client = ItemsClient::new();
//! let items = client
//!     .fetch_all("http://localhost:8080/items", Some(RangeRequest::new(0, 49)), 20)
//!     .await?;
//! ```

use crate::error::{Error, Result};
use crate::headers::{
    parse_link_header, ContentRange, LinkRelation, ParsedLink, CONTENT_RANGE, LINK, RANGE_UNIT,
};
use crate::range::{RangeRequest, ITEMS_UNIT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// One fetched page
#[derive(Debug, Clone)]
pub struct Page {
    /// URL the page was fetched from
    pub url: Url,
    /// Response status
    pub status: StatusCode,
    /// Parsed `Content-Range`, if the server sent one
    pub content_range: Option<ContentRange>,
    /// Parsed `Link` entries
    pub links: Vec<ParsedLink>,
    /// JSON body; `Null` when the body was empty
    pub body: Value,
}

impl Page {
    /// The link with the given relation
    pub fn link(&self, relation: LinkRelation) -> Option<&ParsedLink> {
        self.links.iter().find(|l| l.relation == Some(relation))
    }

    /// Resolve the `next` link to an absolute URL and the range to ask for
    pub fn next(&self) -> Result<Option<(Url, Option<RangeRequest>)>> {
        match self.link(LinkRelation::Next) {
            Some(link) => Ok(Some((self.url.join(&link.url)?, link.items))),
            None => Ok(None),
        }
    }

    /// Body items, when the body is a JSON array
    pub fn items(&self) -> &[Value] {
        match self.body.as_array() {
            Some(items) => items,
            None => &[],
        }
    }
}

/// HTTP client that speaks the items range protocol
#[derive(Debug, Clone)]
pub struct ItemsClient {
    client: Client,
}

impl Default for ItemsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemsClient {
    /// Create a client with a 30 second timeout
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!("items-range/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch a single page. Error statuses, 416 included, are returned as errors.
    pub async fn fetch_page(&self, url: &str, range: Option<RangeRequest>) -> Result<Page> {
        let url = Url::parse(url)?;
        self.fetch_url(url, range).await
    }

    async fn fetch_url(&self, url: Url, range: Option<RangeRequest>) -> Result<Page> {
        let mut request = self.client.get(url.clone());
        if let Some(range) = range {
            request = request
                .header(RANGE_UNIT, ITEMS_UNIT)
                .header(reqwest::header::RANGE, range.to_string());
        }

        debug!(%url, range = ?range.map(|r| r.to_string()), "Fetching items page");
        let response = request.send().await?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let content_range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .map(str::parse::<ContentRange>)
            .transpose()?;
        let links = response
            .headers()
            .get_all(LINK)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(parse_link_header)
            .collect();

        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(Page {
            url,
            status,
            content_range,
            links,
            body,
        })
    }

    /// Fetch every item from `url` onward, following `next` links.
    ///
    /// Stops when a page carries no `next` link or after `max_pages` pages.
    pub async fn fetch_all(
        &self,
        url: &str,
        range: Option<RangeRequest>,
        max_pages: usize,
    ) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        let mut next = Some((Url::parse(url)?, range));
        let mut pages = 0;

        while let Some((url, range)) = next.take() {
            if pages >= max_pages {
                debug!(pages, "Stopping at page limit");
                break;
            }
            let page = self.fetch_url(url, range).await?;
            pages += 1;
            items.extend(page.items().iter().cloned());
            next = page.next()?;
        }

        Ok(items)
    }
}
