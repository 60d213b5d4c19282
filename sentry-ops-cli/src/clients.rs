//! # Client Creation
//!
//! Centralized construction of authenticated Sentry clients from the
//! environment, plus the runtime-and-client pair the command handlers use.

use std::env;

use anyhow::{Context, Result};
use sentry_ops_api::{DEFAULT_SENTRY_ORG, DEFAULT_SENTRY_URL, SentryClient, create_sentry_client};
use tokio::runtime::Runtime;

use crate::consts::{ENV_SENTRY_ORG, ENV_SENTRY_URL};

/// Creates a Sentry client authenticated with the token found in the given
/// environment variable.
///
/// The organization slug and API root can be overridden through SENTRY_ORG
/// and SENTRY_URL.
pub fn create_client_from_env(token_var: &str) -> Result<SentryClient> {
  let token = env::var(token_var).with_context(|| format!("{token_var} environment variable is not set"))?;
  let base_url = env::var(ENV_SENTRY_URL).unwrap_or_else(|_| DEFAULT_SENTRY_URL.to_string());
  let org = env::var(ENV_SENTRY_ORG).unwrap_or_else(|_| DEFAULT_SENTRY_ORG.to_string());

  create_sentry_client(&base_url, &org, &token).context("Failed to create Sentry client")
}

/// Creates a tokio runtime and an authenticated Sentry client
///
/// This is a convenience function for CLI commands that need both a runtime
/// and a client.
pub fn create_runtime_and_client(token_var: &str) -> Result<(Runtime, SentryClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_client_from_env(token_var)?;
  Ok((rt, client))
}
