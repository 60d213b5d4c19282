//! Constants for the sentry-ops CLI.

/// Environment variable holding the read-write Sentry API token
pub const ENV_SENTRY_TOKEN: &str = "SENTRY_TOKEN";

/// Environment variable holding the read-only Sentry API token
pub const ENV_SENTRY_RO_TOKEN: &str = "SENTRY_RO_TOKEN";

/// Environment variable overriding the organization slug
pub const ENV_SENTRY_ORG: &str = "SENTRY_ORG";

/// Environment variable overriding the API root URL
pub const ENV_SENTRY_URL: &str = "SENTRY_URL";

/// Environment variable naming the LDAP bind user
pub const ENV_LDAP_BIND_USER: &str = "LDAP_BIND_USER";

/// Issue search query matching browser events from pre-v8 JavaScript SDKs
pub const LEGACY_JS_QUERY: &str = "sdk.name:sentry.javascript.browser !sdk.version:8.*";

/// Stats period for the legacy SDK issue search
pub const LEGACY_JS_STATS_PERIOD: &str = "14d";
