//! # Delete Users Command
//!
//! Deletes organization members listed on stdin, cross-checking any given
//! email address against the live account before anything is removed.

use std::io::Read;

use anyhow::{Context, Result};
use sentry_ops_api::SentryClient;

use crate::clients::create_runtime_and_client;
use crate::consts::ENV_SENTRY_TOKEN;
use crate::input::{MemberLine, parse_member_lines};
use crate::output::{print_error, print_success};

/// Execute the delete-users command
pub fn execute() -> Result<()> {
  let mut input = String::new();
  std::io::stdin()
    .read_to_string(&mut input)
    .context("Failed to read stdin")?;

  let (rt, client) = create_runtime_and_client(ENV_SENTRY_TOKEN)?;
  rt.block_on(run(&client, &input))
}

/// Validate the parsed input, then delete every listed member
pub(crate) async fn run(client: &SentryClient, input: &str) -> Result<()> {
  let lines = parse_member_lines(input);
  let member_ids = validate_members(client, &lines).await?;

  let deleted = member_ids.len();
  for member_id in member_ids {
    println!("Deleting member with id {member_id}...");
    client.delete_member(&member_id).await?;
  }
  print_success(&format!("Deleted {deleted} member(s)"));

  Ok(())
}

/// Cross-check every line that carries an email against the live account.
///
/// Validation runs over the whole input before the first deletion, so a
/// single mismatch aborts the run with nothing removed.
async fn validate_members(client: &SentryClient, lines: &[MemberLine]) -> Result<Vec<String>> {
  let mut member_ids = Vec::new();
  for line in lines {
    if let Some(email) = &line.email {
      let actual = client.get_member(&line.member_id).await?.email;
      if *email != actual {
        print_error(&format!("mismatched email address for member id {}:", line.member_id));
        print_error(&format!("given in input: {email}, actual: {actual}"));
        anyhow::bail!("refusing to delete member {}", line.member_id);
      }
    }
    member_ids.push(line.member_id.clone());
  }
  Ok(member_ids)
}

#[cfg(test)]
mod tests {
  use sentry_ops_api::create_sentry_client;
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn member_body(id: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": email,
        "expired": false,
        "pending": false,
        "user": null
    })
  }

  #[tokio::test]
  async fn test_ids_only_deletes_all() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_sentry_client(&mock_server.uri(), "mozilla", "test-token")?;

    for id in ["1250801", "1407292", "1894897"] {
      Mock::given(method("DELETE"))
        .and(path(format!("/organizations/mozilla/members/{id}/")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    }

    run(&client, "1250801\n1407292\n1894897\n").await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_matching_email_is_deleted() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_sentry_client(&mock_server.uri(), "mozilla", "test-token")?;

    Mock::given(method("GET"))
      .and(path("/organizations/mozilla/members/1250801/"))
      .respond_with(ResponseTemplate::new(200).set_body_json(member_body("1250801", "fallen@mozilla.com")))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("DELETE"))
      .and(path("/organizations/mozilla/members/1250801/"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    run(&client, "1250801 fallen@mozilla.com  Frances Allen\n").await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_mismatched_email_deletes_nothing() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_sentry_client(&mock_server.uri(), "mozilla", "test-token")?;

    Mock::given(method("GET"))
      .and(path("/organizations/mozilla/members/1407292/"))
      .respond_with(ResponseTemplate::new(200).set_body_json(member_body("1407292", "ghopper@mozilla.com")))
      .mount(&mock_server)
      .await;

    // A mismatch in a later line must keep every earlier line undeleted too
    Mock::given(method("DELETE"))
      .respond_with(ResponseTemplate::new(204))
      .expect(0)
      .mount(&mock_server)
      .await;

    let input = "1250801\n1407292 someone-else@mozilla.com\n";
    let result = run(&client, input).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("1407292"));

    Ok(())
  }

  #[tokio::test]
  async fn test_non_member_lines_are_ignored() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_sentry_client(&mock_server.uri(), "mozilla", "test-token")?;

    Mock::given(method("DELETE"))
      .and(path("/organizations/mozilla/members/1894897/"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let input = "User ID    Expired invites\n1894897\n";
    run(&client, input).await?;

    Ok(())
  }
}
