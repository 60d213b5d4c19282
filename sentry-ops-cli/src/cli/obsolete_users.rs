//! # Obsolete Users Command
//!
//! Lists members with expired invites, and members who no longer appear in
//! the LDAP directory, in a format `delete-users` accepts on stdin.

use std::collections::HashSet;

use anyhow::{Context, Result};
use dialoguer::Password;
use sentry_ops_api::{OrgMember, SentryClient};

use crate::clients::create_runtime_and_client;
use crate::consts::{ENV_LDAP_BIND_USER, ENV_SENTRY_RO_TOKEN};
use crate::ldap;
use crate::output::prompt_theme;

/// Execute the obsolete-users command
pub fn execute() -> Result<()> {
  let bind_user = std::env::var(ENV_LDAP_BIND_USER)
    .with_context(|| format!("{ENV_LDAP_BIND_USER} environment variable is not set"))?;
  let password = Password::with_theme(&prompt_theme())
    .with_prompt(format!("Password for {bind_user}"))
    .interact()
    .context("Failed to read LDAP password")?;

  let (rt, client) = create_runtime_and_client(ENV_SENTRY_RO_TOKEN)?;
  rt.block_on(async {
    let ldap_users = ldap::directory_emails(&bind_user, &password).await?;
    run(&client, &ldap_users).await
  })
}

/// List expired invites and members absent from the directory
pub(crate) async fn run(client: &SentryClient, ldap_users: &HashSet<String>) -> Result<()> {
  let members = client.org_members().await?;
  let (expired_invites, obsolete_users) = partition_members(members, ldap_users);

  println!("{:<10} {}", "User ID", "Expired invites");
  print_members(&expired_invites);
  println!("\n{:<10} {:<40} {}", "User ID", "Sentry users not in LDAP", "Last login");
  print_members(&obsolete_users);

  Ok(())
}

/// Split the member list into expired invites and members none of whose
/// addresses appear in LDAP, each sorted by email.
///
/// A pending invite is only known by its invite address; an accepted member
/// is checked against every address on the account.
fn partition_members(members: Vec<OrgMember>, ldap_users: &HashSet<String>) -> (Vec<OrgMember>, Vec<OrgMember>) {
  let mut expired_invites = Vec::new();
  let mut obsolete_users = Vec::new();
  for member in members {
    if member.expired {
      expired_invites.push(member);
      continue;
    }
    let emails: Vec<&str> = if member.pending {
      vec![member.email.as_str()]
    } else {
      member
        .user
        .as_ref()
        .map(|account| account.emails.iter().map(|e| e.email.as_str()).collect())
        .unwrap_or_default()
    };
    if emails.iter().all(|email| !ldap_users.contains(*email)) {
      obsolete_users.push(member);
    }
  }
  expired_invites.sort_by(|a, b| a.email.cmp(&b.email));
  obsolete_users.sort_by(|a, b| a.email.cmp(&b.email));
  (expired_invites, obsolete_users)
}

fn print_members(members: &[OrgMember]) {
  for member in members {
    match member.user.as_ref().and_then(|account| account.last_login.as_deref()) {
      Some(last_login) => println!("{:<10} {:<40} {}", member.id, member.email, last_login),
      None => println!("{:<10} {:<40}", member.id, member.email),
    }
  }
}
