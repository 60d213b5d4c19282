//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the sentry-ops tool:
//! one-shot administrative commands for the Sentry organization.

mod delete_users;
mod legacy_js;
mod obsolete_users;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI command for the sentry-ops tool
#[derive(Parser)]
#[command(name = "sentry-ops")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Administrative commands for a hosted Sentry organization")]
#[command(
  long_about = "sentry-ops bundles the recurring administrative chores for a Sentry\n\
        organization: cleaning up departed and never-accepted users, and auditing\n\
        projects that still report through obsolete SDKs.\n\n\
        All commands run to completion and talk to the Sentry REST API; tokens are\n\
        read from the environment (a local .env file is honored)."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the sentry-ops tool
#[derive(Subcommand)]
pub enum Commands {
  /// Delete organization members listed on stdin
  #[command(
    long_about = "Delete a set of members from the Sentry organization.\n\n\
            Member ids are read from stdin, one per line, in the form\n\
            `<user id> [<primary email>] [ignored fields ...]`. Lines that do not\n\
            start with an integer id are ignored. When an email is given, it is\n\
            checked against the account's primary address first; a single mismatch\n\
            aborts the run before anything is deleted.\n\n\
            The output of `sentry-ops obsolete-users` can be piped straight in.\n\
            Requires the SENTRY_TOKEN environment variable."
  )]
  DeleteUsers,

  /// List expired invites and members who are no longer in LDAP
  #[command(
    long_about = "List members with expired invites, and members who have left the company.\n\n\
            Members of the Sentry org are checked against the LDAP directory; you need\n\
            to be on the corp VPN for the directory to be reachable. The output format\n\
            is accepted by `sentry-ops delete-users` on stdin.\n\n\
            Requires the LDAP_BIND_USER and SENTRY_RO_TOKEN environment variables;\n\
            the LDAP password is prompted for interactively."
  )]
  ObsoleteUsers,

  /// Find projects still reporting through pre-v8 JavaScript SDKs
  #[command(name = "find-legacy-js")]
  #[command(
    long_about = "Find projects using obsolete versions of the Sentry JavaScript SDK.\n\n\
            Lists the affected projects with a deep link into their issue stream, as\n\
            well as the team admins of the teams owning these projects.\n\n\
            Requires the SENTRY_RO_TOKEN environment variable."
  )]
  FindLegacyJs,
}

/// Handler for CLI subcommands
pub fn handle_cli(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::DeleteUsers => delete_users::execute(),
    Commands::ObsoleteUsers => obsolete_users::execute(),
    Commands::FindLegacyJs => legacy_js::execute(),
  }
}
