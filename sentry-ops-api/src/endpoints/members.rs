//! # Organization Member Endpoints
//!
//! Sentry API endpoint implementations for organization membership,
//! including listing, fetching, and removing org members.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::SentryClient;
use crate::models::OrgMember;

impl SentryClient {
  /// List every member of the organization, following pagination
  #[instrument(skip(self), level = "debug")]
  pub async fn org_members(&self) -> Result<Vec<OrgMember>> {
    let path = format!("organizations/{}/members/", self.org);
    self
      .get_paginated(&path, &[])
      .await
      .context("Failed to fetch organization members")
  }

  /// Get a single org member by id
  #[instrument(skip(self), level = "debug")]
  pub async fn get_member(&self, member_id: &str) -> Result<OrgMember> {
    let path = format!("organizations/{}/members/{}/", self.org, member_id);

    let response = self
      .send_with_retry(self.get(&path))
      .await
      .context("Failed to fetch org member")?;

    match response.status() {
      StatusCode::OK => {
        let member = response
          .json::<OrgMember>()
          .await
          .context("Failed to parse org member")?;
        Ok(member)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Sentry token."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Member {} not found", member_id)),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Remove a member from the organization
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_member(&self, member_id: &str) -> Result<()> {
    let path = format!("organizations/{}/members/{}/", self.org, member_id);

    let response = self
      .send_with_retry(self.delete(&path))
      .await
      .context("Failed to delete org member")?;

    match response.status() {
      status if status.is_success() => Ok(()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Sentry token."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Member {} not found", member_id)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_sentry_client;

  #[tokio::test]
  async fn test_org_members_follows_pagination() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_sentry_client(&mock_server.uri(), "mozilla", "test-token")?;

    let next_url = format!(
      "{}/organizations/mozilla/members/?&cursor=100:1:0",
      mock_server.uri()
    );

    // Second page, matched by its cursor; its next link reports no results
    Mock::given(method("GET"))
      .and(path("/organizations/mozilla/members/"))
      .and(query_param("cursor", "100:1:0"))
      .respond_with(
        ResponseTemplate::new(200)
          .insert_header(
            "Link",
            format!(
              "<{next_url}>; rel=\"previous\"; results=\"true\"; cursor=\"100:0:1\", \
               <{next_url}>; rel=\"next\"; results=\"false\"; cursor=\"100:2:0\""
            )
            .as_str(),
          )
          .set_body_json(serde_json::json!([
              {"id": "3", "email": "alovelace@mozilla.com", "expired": false, "pending": false, "user": null}
          ])),
      )
      .with_priority(1)
      .mount(&mock_server)
      .await;

    // First page advertises a next page with results
    Mock::given(method("GET"))
      .and(path("/organizations/mozilla/members/"))
      .respond_with(
        ResponseTemplate::new(200)
          .insert_header(
            "Link",
            format!("<{next_url}>; rel=\"next\"; results=\"true\"; cursor=\"100:1:0\"").as_str(),
          )
          .set_body_json(serde_json::json!([
              {"id": "1", "email": "fallen@mozilla.com", "expired": false, "pending": false, "user": null},
              {"id": "2", "email": "ghopper@mozilla.com", "expired": true, "pending": true, "user": null}
          ])),
      )
      .mount(&mock_server)
      .await;

    let members = client.org_members().await?;

    assert_eq!(members.len(), 3);
    assert_eq!(members[0].id, "1");
    assert_eq!(members[2].email, "alovelace@mozilla.com");

    Ok(())
  }

  #[tokio::test]
  async fn test_org_members_single_page() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_sentry_client(&mock_server.uri(), "mozilla", "test-token")?;

    // No Link header at all also terminates pagination
    Mock::given(method("GET"))
      .and(path("/organizations/mozilla/members/"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
          {"id": "1", "email": "fallen@mozilla.com", "expired": false, "pending": false, "user": null}
      ])))
      .expect(1)
      .mount(&mock_server)
      .await;

    let members = client.org_members().await?;
    assert_eq!(members.len(), 1);

    Ok(())
  }

  #[tokio::test]
  async fn test_get_member() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_sentry_client(&mock_server.uri(), "mozilla", "test-token")?;

    Mock::given(method("GET"))
      .and(path("/organizations/mozilla/members/1250801/"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "1250801",
          "email": "fallen@mozilla.com",
          "name": "Frances Allen",
          "expired": false,
          "pending": false,
          "user": {"lastLogin": "2024-11-02T09:14:00Z", "emails": [{"email": "fallen@mozilla.com"}]}
      })))
      .mount(&mock_server)
      .await;

    let member = client.get_member("1250801").await?;
    assert_eq!(member.email, "fallen@mozilla.com");
    assert_eq!(member.name.as_deref(), Some("Frances Allen"));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_member_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_sentry_client(&mock_server.uri(), "mozilla", "test-token")?;

    Mock::given(method("GET"))
      .and(path("/organizations/mozilla/members/999/"))
      .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
          "detail": "The requested resource does not exist"
      })))
      .mount(&mock_server)
      .await;

    let result = client.get_member("999").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_member() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_sentry_client(&mock_server.uri(), "mozilla", "test-token")?;

    Mock::given(method("DELETE"))
      .and(path("/organizations/mozilla/members/1250801/"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    client.delete_member("1250801").await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_member_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_sentry_client(&mock_server.uri(), "mozilla", "bad-token")?;

    Mock::given(method("DELETE"))
      .and(path("/organizations/mozilla/members/1250801/"))
      .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
          "detail": "Invalid token"
      })))
      .mount(&mock_server)
      .await;

    let result = client.delete_member("1250801").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Authentication failed"));

    Ok(())
  }
}
