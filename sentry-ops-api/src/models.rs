use serde::Deserialize;

/// Bearer token credentials for the Sentry API
#[derive(Clone)]
pub struct SentryAuth {
  pub token: String,
}

/// Represents a member of the Sentry organization
#[derive(Debug, Deserialize)]
pub struct OrgMember {
  pub id: String,
  pub email: String,
  pub name: Option<String>,
  #[serde(default)]
  pub expired: bool,
  #[serde(default)]
  pub pending: bool,
  /// Account details; absent while the invite has not been accepted
  pub user: Option<MemberAccount>,
}

/// Represents the user account behind an accepted membership
#[derive(Debug, Deserialize)]
pub struct MemberAccount {
  #[serde(rename = "lastLogin")]
  pub last_login: Option<String>,
  /// Every address attached to the account, primary included
  #[serde(default)]
  pub emails: Vec<AccountEmail>,
}

/// Represents one of the addresses attached to a user account
#[derive(Debug, Deserialize)]
pub struct AccountEmail {
  pub email: String,
}

/// Represents a project in the organization
#[derive(Debug, Deserialize)]
pub struct Project {
  pub id: String,
  pub slug: String,
  pub team: ProjectTeam,
}

/// Represents the team owning a project
#[derive(Debug, Deserialize)]
pub struct ProjectTeam {
  pub slug: String,
}

/// Minimal view of an issue returned by the issue search
#[derive(Debug, Deserialize)]
pub struct IssueSummary {
  pub id: String,
  pub title: Option<String>,
}

/// Represents a member of a team, with org-level and team-level roles
#[derive(Debug, Deserialize)]
pub struct TeamMember {
  pub id: String,
  pub name: String,
  pub email: String,
  #[serde(rename = "orgRole")]
  pub org_role: String,
  #[serde(rename = "teamRole")]
  pub team_role: Option<String>,
}
