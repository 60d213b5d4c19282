//! # Find Legacy JS Command
//!
//! Finds projects that received events from pre-v8 versions of the Sentry
//! JavaScript SDK within the stats window, along with the admins of the
//! teams owning them.

use std::collections::BTreeSet;

use anyhow::Result;
use sentry_ops_api::{SentryClient, TeamMember};
use url::Url;

use crate::clients::create_runtime_and_client;
use crate::consts::{ENV_SENTRY_RO_TOKEN, LEGACY_JS_QUERY, LEGACY_JS_STATS_PERIOD};
use crate::output::print_warning;

/// Execute the find-legacy-js command
pub fn execute() -> Result<()> {
  let (rt, client) = create_runtime_and_client(ENV_SENTRY_RO_TOKEN)?;
  rt.block_on(run(&client))
}

/// Report affected projects, then the admins of the owning teams
pub(crate) async fn run(client: &SentryClient) -> Result<()> {
  println!("Affected projects:");
  let mut teams = Vec::new();
  for project in client.projects().await? {
    if !client
      .has_issues(&project.slug, LEGACY_JS_QUERY, LEGACY_JS_STATS_PERIOD)
      .await?
    {
      continue;
    }
    println!("    {:<30} owned by {}", project.slug, project.team.slug);
    println!("        {}", issue_search_url(client.org(), &project.id)?);
    teams.push(project.team.slug);
  }

  println!("\nTeam admins:");
  let mut admins = BTreeSet::new();
  for team_slug in &teams {
    println!("\n    {team_slug}");
    let mut found = false;
    for member in client.team_members(team_slug).await? {
      if is_team_admin(&member) {
        let formatted = format!("{} <{}>", member.name, member.email);
        println!("        {formatted}");
        admins.insert(formatted);
        found = true;
      }
    }
    if !found {
      print_warning(&format!("no admins found for team {team_slug}"));
    }
  }

  println!("\nDeduplicated list of admins:");
  println!("    {}", admins.into_iter().collect::<Vec<_>>().join(",\n    "));

  Ok(())
}

/// Anyone with an elevated org role, or an explicit role on the team
fn is_team_admin(member: &TeamMember) -> bool {
  member.org_role != "member" || member.team_role.is_some()
}

/// Deep link into the Sentry issue stream, pre-filtered to the legacy SDK
/// query
fn issue_search_url(org: &str, project_id: &str) -> Result<Url> {
  let url = Url::parse_with_params(
    &format!("https://{org}.sentry.io/issues/"),
    &[
      ("project", project_id),
      ("query", LEGACY_JS_QUERY),
      ("referrer", "issue-list"),
      ("statsPeriod", LEGACY_JS_STATS_PERIOD),
    ],
  )?;
  Ok(url)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn team_member(org_role: &str, team_role: Option<&str>) -> TeamMember {
    serde_json::from_value(serde_json::json!({
        "id": "1",
        "name": "Grace Hopper",
        "email": "ghopper@mozilla.com",
        "orgRole": org_role,
        "teamRole": team_role
    }))
    .unwrap()
  }

  #[test]
  fn test_is_team_admin() {
    assert!(is_team_admin(&team_member("manager", None)));
    assert!(is_team_admin(&team_member("member", Some("admin"))));
    assert!(is_team_admin(&team_member("owner", Some("admin"))));
    assert!(!is_team_admin(&team_member("member", None)));
  }

  #[test]
  fn test_issue_search_url_encodes_query() {
    let url = issue_search_url("mozilla", "4242").unwrap();
    assert_eq!(
      url.as_str(),
      "https://mozilla.sentry.io/issues/?project=4242&query=sdk.name%3Asentry.javascript.browser+%21sdk.version%3A8.*&referrer=issue-list&statsPeriod=14d"
    );
  }
}
