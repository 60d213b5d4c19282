//! # Sentry API Client
//!
//! Provides Sentry REST API integration for the sentry-ops administrative
//! commands, covering organization membership, project listings, issue
//! search, and team rosters with bearer authentication, bounded retries,
//! and cursor pagination.

mod client;
mod consts;
mod endpoints;
pub mod models;
mod pagination;

// Re-export the client
pub use client::{SentryClient, create_sentry_client};
// Re-export constants the CLI needs for defaults
pub use consts::{DEFAULT_SENTRY_ORG, DEFAULT_SENTRY_URL};
// Re-export models
pub use models::{AccountEmail, IssueSummary, MemberAccount, OrgMember, Project, ProjectTeam, SentryAuth, TeamMember};
