//! # LDAP Directory Lookup
//!
//! Queries the corporate LDAP directory for every known mail address, used
//! to tell which Sentry accounts belong to people who have left. Reaching
//! the directory requires the corp VPN.

use std::collections::HashSet;

use anyhow::{Context, Result};
use ldap3::{LdapConnAsync, LdapConnSettings, Scope, SearchEntry, drive};

/// Read-only LDAP endpoint
pub const LDAP_SERVER: &str = "ldap://ldap-ro.vips.ldap.mdc1.mozilla.com";

/// Search base covering the whole directory
const SEARCH_BASE: &str = "dc=mozilla";

/// System CA bundle; the TLS connector has to be pointed at it explicitly on
/// Linux
#[cfg(target_os = "linux")]
const CA_CERTIFICATES: &str = "/etc/ssl/certs/ca-certificates.crt";

/// Collect every mail address known to the directory.
///
/// Binds as `bind_user` over StartTLS and runs a subtree search for the
/// `mail` attribute; entries without one are skipped.
pub async fn directory_emails(bind_user: &str, password: &str) -> Result<HashSet<String>> {
  let settings = conn_settings()?;
  let (conn, mut ldap) = LdapConnAsync::with_settings(settings, LDAP_SERVER)
    .await
    .context("Failed to connect to the LDAP server")?;
  drive!(conn);

  ldap
    .simple_bind(bind_user, password)
    .await
    .context("LDAP bind failed")?
    .success()
    .context("LDAP bind was rejected")?;

  let (entries, _res) = ldap
    .search(SEARCH_BASE, Scope::Subtree, "(objectClass=*)", vec!["mail"])
    .await
    .context("LDAP search failed")?
    .success()
    .context("LDAP search returned an error")?;

  let mut emails = HashSet::new();
  for entry in entries {
    let entry = SearchEntry::construct(entry);
    if let Some(mail) = entry.attrs.get("mail").and_then(|values| values.first()) {
      emails.insert(mail.clone());
    }
  }

  ldap.unbind().await.ok();
  Ok(emails)
}

/// StartTLS settings with certificate verification
fn conn_settings() -> Result<LdapConnSettings> {
  #[allow(unused_mut)]
  let mut settings = LdapConnSettings::new().set_starttls(true);

  #[cfg(target_os = "linux")]
  {
    let ca = std::fs::read(CA_CERTIFICATES)
      .with_context(|| format!("Failed to read the system CA bundle at {CA_CERTIFICATES}"))?;
    let cert = native_tls::Certificate::from_pem(&ca).context("Failed to parse the system CA bundle")?;
    let connector = native_tls::TlsConnector::builder()
      .add_root_certificate(cert)
      .build()
      .context("Failed to build the TLS connector")?;
    settings = settings.set_connector(connector);
  }

  Ok(settings)
}
