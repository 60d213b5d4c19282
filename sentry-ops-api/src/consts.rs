//! Constants for the sentry-ops API client.

/// Default Sentry API root
pub const DEFAULT_SENTRY_URL: &str = "https://sentry.io/api/0";

/// Default organization slug
pub const DEFAULT_SENTRY_ORG: &str = "mozilla";

/// User-Agent header value for the Sentry API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Retries for throttled (429) and unavailable (503) responses
pub(crate) const MAX_RETRIES: u32 = 3;

/// Backoff base when Sentry does not send a Retry-After header; doubles per
/// attempt
pub(crate) const RETRY_BASE_DELAY_MS: u64 = 250;
