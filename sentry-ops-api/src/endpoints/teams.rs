//! # Team Endpoints
//!
//! Sentry API endpoint implementations for team rosters.

use anyhow::{Context, Result};
use tracing::instrument;

use crate::client::SentryClient;
use crate::models::TeamMember;

impl SentryClient {
  /// List every member of a team, following pagination
  #[instrument(skip(self), level = "debug")]
  pub async fn team_members(&self, team_slug: &str) -> Result<Vec<TeamMember>> {
    let path = format!("teams/{}/{}/members/", self.org, team_slug);
    self
      .get_paginated(&path, &[])
      .await
      .with_context(|| format!("Failed to fetch members of team {team_slug}"))
  }
}
