//! # Cursor Pagination
//!
//! Sentry paginates collections with RFC 5988 `Link` response headers that
//! carry non-standard `results` and `cursor` parameters. A further page
//! exists only while the `rel="next"` entry reports `results="true"`.

use reqwest::header::{HeaderMap, LINK};

/// The `rel="next"` entry of a `Link` header
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PageLink {
  pub(crate) url: String,
  pub(crate) results: bool,
}

/// Extract the next-page link from response headers, if any
pub(crate) fn next_page_link(headers: &HeaderMap) -> Option<PageLink> {
  let value = headers.get(LINK)?.to_str().ok()?;
  parse_link_header(value)
}

/// Parse a `Link` header value and return its `rel="next"` entry
pub(crate) fn parse_link_header(value: &str) -> Option<PageLink> {
  for entry in value.split(',') {
    let mut parts = entry.split(';').map(str::trim);
    let Some(target) = parts.next() else { continue };
    if !(target.starts_with('<') && target.ends_with('>')) {
      continue;
    }
    let url = target[1..target.len() - 1].to_string();
    let mut rel_next = false;
    let mut results = false;
    for param in parts {
      match param.split_once('=') {
        Some(("rel", v)) => rel_next = unquote(v) == "next",
        Some(("results", v)) => results = unquote(v) == "true",
        _ => {}
      }
    }
    if rel_next {
      return Some(PageLink { url, results });
    }
  }
  None
}

fn unquote(value: &str) -> &str {
  value.trim_matches('"')
}
