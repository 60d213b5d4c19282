//! # Sentry HTTP Client
//!
//! HTTP client implementation for Sentry API interactions, handling bearer
//! authentication, bounded retries for throttling responses, and cursor
//! pagination for Sentry REST API operations.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::consts::{MAX_RETRIES, RETRY_BASE_DELAY_MS, USER_AGENT};
use crate::models::SentryAuth;
use crate::pagination::next_page_link;

/// Represents a Sentry API client scoped to a single organization
pub struct SentryClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) org: String,
  pub(crate) auth: SentryAuth,
}

impl SentryClient {
  /// Create a new Sentry client
  pub fn new(base_url: &str, org: &str, auth: SentryAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      org: org.to_string(),
      auth,
    }
  }

  /// The organization slug this client is scoped to
  pub fn org(&self) -> &str {
    &self.org
  }

  pub(crate) fn get(&self, path: &str) -> RequestBuilder {
    self.request(Method::GET, path)
  }

  pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
    self.request(Method::DELETE, path)
  }

  fn request(&self, method: Method, path: &str) -> RequestBuilder {
    let url = format!("{}/{}", self.base_url, path);
    self
      .client
      .request(method, &url)
      .header("User-Agent", USER_AGENT)
      .bearer_auth(&self.auth.token)
  }

  /// Send a request, retrying throttled (429) and unavailable (503) responses
  /// a bounded number of times before handing the response back.
  pub(crate) async fn send_with_retry(&self, request: RequestBuilder) -> Result<Response> {
    let mut attempt = 0;
    loop {
      let req = request.try_clone().context("Request is not retryable")?;
      let response = req.send().await.context("Failed to reach the Sentry API")?;
      let status = response.status();
      if attempt < MAX_RETRIES
        && matches!(status, StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE)
      {
        let delay = retry_delay(&response, attempt);
        debug!(%status, attempt, ?delay, "retrying Sentry request");
        tokio::time::sleep(delay).await;
        attempt += 1;
        continue;
      }
      return Ok(response);
    }
  }

  /// GET a paginated collection, following the `Link` header's `rel="next"`
  /// entry while it reports `results="true"`, and collect every page.
  ///
  /// The query parameters are only attached to the first request; the cursor
  /// URLs Sentry hands back already carry them.
  pub(crate) async fn get_paginated<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<T>> {
    let mut url = format!("{}/{}", self.base_url, path);
    let mut first = true;
    let mut items = Vec::new();
    loop {
      let mut request = self
        .client
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .bearer_auth(&self.auth.token);
      if first {
        request = request.query(query);
        first = false;
      }
      let response = self.send_with_retry(request).await?;
      let status = response.status();
      if !status.is_success() {
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
          anyhow::bail!("Authentication failed. Please check your Sentry token.");
        }
        anyhow::bail!(
          "Unexpected error: HTTP {} - {}",
          status,
          response.text().await.unwrap_or_default()
        );
      }
      let next = next_page_link(response.headers());
      let page = response.json::<Vec<T>>().await.context("Failed to parse Sentry response")?;
      items.extend(page);
      match next {
        Some(link) if link.results => url = link.url,
        _ => break,
      }
    }
    Ok(items)
  }
}

/// Delay before the next retry, honoring `Retry-After` when Sentry sends one
fn retry_delay(response: &Response, attempt: u32) -> Duration {
  let retry_after = response
    .headers()
    .get(RETRY_AFTER)
    .and_then(|value| value.to_str().ok())
    .and_then(|value| value.parse::<u64>().ok());
  match retry_after {
    Some(secs) => Duration::from_secs(secs),
    None => Duration::from_millis(RETRY_BASE_DELAY_MS << attempt),
  }
}

/// Create a Sentry client from a bearer token
pub fn create_sentry_client(base_url: &str, org: &str, token: &str) -> Result<SentryClient> {
  let auth = SentryAuth {
    token: token.to_string(),
  };

  Ok(SentryClient::new(base_url, org, auth))
}
