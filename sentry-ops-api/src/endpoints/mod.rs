//! # Sentry API Endpoints
//!
//! Organized endpoint implementations for the Sentry resource types the
//! administrative commands touch: organization members, projects, issue
//! search, and team rosters.

pub mod issues;
pub mod members;
pub mod projects;
pub mod teams;
