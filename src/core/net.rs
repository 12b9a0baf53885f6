// src/core/net.rs
//
// HTTPS GET for ranking pages. `Fetch` is the seam: the pipeline only ever sees
// "markup or TransportError", so tests swap in canned pages.

use std::time::Duration;

use reqwest::blocking::Client;

use super::retry::RetryPolicy;
use crate::config::consts::USER_AGENT;
use crate::error::TransportError;
use crate::model::RawPage;
use crate::specs::categories::Category;

pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, TransportError>;
}

pub struct HttpFetcher {
    client: Client,
    retry: RetryPolicy,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Client { reason: e.to_string() })?;
        Ok(Self { client, retry })
    }

    fn get_once(&self, url: &str) -> Result<String, TransportError> {
        let resp = self.client.get(url).send().map_err(|e| map_reqwest(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(|e| map_reqwest(url, e))
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, TransportError> {
        self.retry.run(|attempt| {
            logd!("Net: GET {url} (attempt {attempt})");
            self.get_once(url)
        })
    }
}

fn map_reqwest(url: &str, e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout { url: s!(url) }
    } else if let Some(status) = e.status() {
        TransportError::Status { url: s!(url), status: status.as_u16() }
    } else {
        TransportError::Network { url: s!(url), reason: e.to_string() }
    }
}

/// Fetch one category's page, tagged with the category label.
pub fn fetch_page(
    fetcher: &dyn Fetch,
    category: &Category,
    year: u16,
) -> Result<RawPage, TransportError> {
    let url = category.url(year);
    let html = fetcher.fetch(&url)?;
    Ok(RawPage { category: s!(category.label), html })
}
