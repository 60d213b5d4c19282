//! # Issue Search Endpoints
//!
//! Sentry API endpoint implementations for searching a project's issue
//! stream with a Sentry search query.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::SentryClient;
use crate::models::IssueSummary;

impl SentryClient {
  /// Search a project's issues, following pagination
  #[instrument(skip(self), level = "debug")]
  pub async fn issues(&self, project_slug: &str, query: &str, stats_period: &str) -> Result<Vec<IssueSummary>> {
    let path = format!("projects/{}/{}/issues/", self.org, project_slug);
    self
      .get_paginated(&path, &[("query", query), ("statsPeriod", stats_period)])
      .await
      .with_context(|| format!("Failed to search issues for project {project_slug}"))
  }

  /// Check whether a project has any issue matching the query.
  ///
  /// Only the first page is fetched; one match is enough.
  #[instrument(skip(self), level = "debug")]
  pub async fn has_issues(&self, project_slug: &str, query: &str, stats_period: &str) -> Result<bool> {
    let path = format!("projects/{}/{}/issues/", self.org, project_slug);
    let request = self
      .get(&path)
      .query(&[("query", query), ("statsPeriod", stats_period)]);

    let response = self
      .send_with_retry(request)
      .await
      .with_context(|| format!("Failed to search issues for project {project_slug}"))?;

    match response.status() {
      StatusCode::OK => {
        let page = response
          .json::<Vec<IssueSummary>>()
          .await
          .context("Failed to parse issue search response")?;
        Ok(!page.is_empty())
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Sentry token."
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
