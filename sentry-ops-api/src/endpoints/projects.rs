//! # Project Endpoints
//!
//! Sentry API endpoint implementations for listing the organization's
//! projects.

use anyhow::{Context, Result};
use tracing::instrument;

use crate::client::SentryClient;
use crate::models::Project;

impl SentryClient {
  /// List every project in the organization, following pagination
  #[instrument(skip(self), level = "debug")]
  pub async fn projects(&self) -> Result<Vec<Project>> {
    let path = format!("organizations/{}/projects/", self.org);
    self
      .get_paginated(&path, &[])
      .await
      .context("Failed to fetch organization projects")
  }
}
