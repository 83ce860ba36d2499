use anyhow::Result;

use crate::cli::AppOptions;
use crate::commit::CommitRecord;

/// Render raw `git log` output as a markdown document: one fragment per
/// commit, joined by a blank line. Pure — same input, same document.
pub fn as_markdown(opts: &AppOptions, git_output: &str) -> Result<String> {
  let (sup_open, sup_close) = if opts.do_sup { ("<sup>", "</sup>") } else { ("", "") };
  let marker = if opts.do_mark { "- [x] " } else { "" };

  let mut fragments: Vec<String> = Vec::new();

  for line in git_output.lines() {
    // A trailing newline (or an empty log) yields blank lines, not records.
    if line.trim().is_empty() {
      continue;
    }

    let rec = CommitRecord::parse(line)?;
    let date = rec.date.format("%Y-%m-%d %H:%M:%S");

    let hash_part = match &opts.repo_url {
      Some(url) => format!("[{}]({}/commit/{})", rec.short_hash, url, rec.hash),
      None => format!("*{}*", rec.short_hash),
    };

    fragments.push(format!(
      "{}**{}**\n{}{} ({}){}\n\n---\n",
      marker, rec.subject, sup_open, hash_part, date, sup_close
    ));
  }

  Ok(fragments.join("\n"))
}
