//! # sentry-ops CLI Library
//!
//! Library modules backing the `sentry-ops` binary: the command
//! implementations, client construction, input parsing, and the LDAP
//! directory lookup.

pub mod cli;
pub mod clients;
pub mod consts;
pub mod input;
pub mod ldap;
pub mod output;
