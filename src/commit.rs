use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset};

/// One entry of the git log, as emitted by the fixed pretty format:
/// full hash, abbreviated hash, ISO-strict author date, subject.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
  pub hash: String,
  pub short_hash: String,
  pub date: DateTime<FixedOffset>,
  pub subject: String,
}

impl CommitRecord {
  /// Parse one log line. The line arrives wrapped in literal double quotes
  /// (they are part of the format string); at most one is stripped from each
  /// end so a subject's own trailing quote survives. The split is bounded:
  /// the subject absorbs everything after the third space.
  pub fn parse(line: &str) -> Result<CommitRecord> {
    let line = line.trim_end_matches(['\r', '\n']);
    let line = line.strip_prefix('"').unwrap_or(line);
    let line = line.strip_suffix('"').unwrap_or(line);

    let mut fields = line.splitn(4, ' ');

    let (Some(hash), Some(short_hash), Some(date_str), Some(subject)) =
      (fields.next(), fields.next(), fields.next(), fields.next())
    else {
      bail!("expected 4 fields in log line: '{}'", line);
    };

    let date = DateTime::parse_from_rfc3339(date_str)
      .with_context(|| format!("invalid date '{}' in log line: '{}'", date_str, line))?;

    Ok(CommitRecord {
      hash: hash.to_string(),
      short_hash: short_hash.to_string(),
      date,
      subject: subject.to_string(),
    })
  }
}
