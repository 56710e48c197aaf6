use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use tracing::debug;
use url::Url;

use anue_core::{Error, FeedPayload, Result};

pub mod snapshot;

const ENDPOINT: &str = "https://api.cnyes.com/media/api/v1/newslist/category/headline";
const SITE_ORIGIN: &str = "https://news.cnyes.com/";
const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A source of headline pages. Implemented by [`HeadlineClient`] against the
/// live API; tests substitute in-memory fakes.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch one page of the headline list.
    async fn fetch(&self, page: u32, limit: u32) -> Result<FeedPayload>;
}

pub struct HeadlineClient {
    http: reqwest::Client,
}

impl HeadlineClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    fn request_url(page: u32, limit: u32) -> Result<Url> {
        Url::parse_with_params(
            ENDPOINT,
            &[("page", page.to_string()), ("limit", limit.to_string())],
        )
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", ENDPOINT, e)))
    }
}

#[async_trait]
impl FeedSource for HeadlineClient {
    async fn fetch(&self, page: u32, limit: u32) -> Result<FeedPayload> {
        let url = Self::request_url(page, limit)?;
        debug!("GET {}", url);

        // The API serves different responses to requests that don't carry the
        // news site's Origin/Referer and a browser User-Agent.
        let response = self
            .http
            .get(url)
            .header(header::ORIGIN, SITE_ORIGIN)
            .header(header::REFERER, SITE_ORIGIN)
            .header(header::USER_AGENT, BROWSER_UA)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        parse_feed_body(body)
    }
}

/// Extracts the `items` envelope from a raw newslist response body.
pub fn parse_feed_body(body: Value) -> Result<FeedPayload> {
    let items = body
        .get("items")
        .cloned()
        .ok_or_else(|| Error::Payload("response has no `items` key".to_string()))?;
    Ok(serde_json::from_value(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_url_encodes_page_and_limit() {
        let url = HeadlineClient::request_url(2, 30).unwrap();
        assert_eq!(url.host_str(), Some("api.cnyes.com"));
        assert_eq!(url.query(), Some("page=2&limit=30"));
    }

    #[test]
    fn parse_feed_body_unwraps_items() {
        let body = json!({
            "items": {
                "data": [{
                    "newsId": 1,
                    "title": "t",
                    "summary": null,
                    "publishAt": 1714521600,
                    "keyword": [],
                    "categoryName": "台股",
                    "categoryId": 827
                }],
                "total": 1
            }
        });
        let payload = parse_feed_body(body).unwrap();
        assert_eq!(payload.data.len(), 1);
        assert_eq!(payload.data[0].news_id, 1);
    }

    #[test]
    fn parse_feed_body_rejects_missing_items() {
        let err = parse_feed_body(json!({"message": "ok"})).unwrap_err();
        assert!(matches!(err, Error::Payload(_)));
    }

    #[test]
    fn parse_feed_body_rejects_missing_data() {
        let err = parse_feed_body(json!({"items": {"total": 0}})).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
