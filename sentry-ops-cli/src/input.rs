//! # Input Parsing
//!
//! Parsing of the stdin line format consumed by `delete-users`:
//! `<user id> [<primary email>] [ignored fields ...]`.

/// A single parsed input line
#[derive(Debug, PartialEq, Eq)]
pub struct MemberLine {
  pub member_id: String,
  pub email: Option<String>,
}

/// Parse raw input into member lines.
///
/// Lines whose first token is not an unsigned integer are skipped, which
/// makes headers and free-form notes in the input harmless. Fields after the
/// email are ignored.
pub fn parse_member_lines(input: &str) -> Vec<MemberLine> {
  let mut lines = Vec::new();
  for line in input.lines() {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else { continue };
    if first.parse::<u64>().is_err() {
      continue;
    }
    lines.push(MemberLine {
      member_id: first.to_string(),
      email: tokens.next().map(str::to_string),
    });
  }
  lines
}
