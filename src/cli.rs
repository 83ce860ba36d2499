use anyhow::{Result, bail};
use chrono::{DateTime, Local};
use clap::Parser;
use std::path::PathBuf;

use crate::util;

#[derive(Parser, Debug)]
#[command(
    name = "git-log-md",
    version,
    about = "Create a markdown listing of commits to a Git repository at a given path",
    long_about = None
)]
pub struct Cli {
  /// Directory containing the Git repository (default: current dir)
  pub dir_name: Option<PathBuf>,

  /// Repository web URL; each commit hash links to <URL>/commit/<hash>
  #[arg(short = 'u', long = "repo-url")]
  pub repo_url: Option<String>,

  /// Name of the output file
  #[arg(short = 'o', long = "output")]
  pub file_name: Option<PathBuf>,

  /// Add a timestamp (date_time) tag to the output file name
  #[arg(short = 't', long)]
  pub timestamp: bool,

  /// Print the output (STDOUT and STDERR) from running the 'git log' command
  #[arg(long)]
  pub git_out: bool,

  /// Add a task-list-completed-item checkmark in front of the commit message
  #[arg(long)]
  pub do_mark: bool,

  /// Add superscript tags around the commit hash and date
  #[arg(long)]
  pub do_sup: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

/// Validated options for one run. Constructed once, read thereafter.
#[derive(Debug)]
pub struct AppOptions {
  pub run_dir: PathBuf,
  pub repo_url: Option<String>,
  pub output_file: PathBuf,
  pub git_out: bool,
  pub do_mark: bool,
  pub do_sup: bool,
}

pub fn normalize(cli: Cli, run_dt: DateTime<Local>) -> Result<AppOptions> {
  let run_dir = match &cli.dir_name {
    Some(d) => util::resolve_path(d),
    None => std::env::current_dir()?,
  };

  if !run_dir.is_dir() {
    bail!("Not a directory: '{}'", run_dir.display());
  }

  // An empty --repo-url means "no links".
  let repo_url = cli.repo_url.filter(|u| !u.is_empty());

  let output_file = match &cli.file_name {
    Some(f) => util::resolve_path(f),
    None => std::env::current_dir()?.join("git-log-output.md"),
  };

  if let Some(parent) = output_file.parent() {
    if !parent.exists() {
      bail!("Cannot find output directory: '{}'", parent.display());
    }
  }

  let output_file = if cli.timestamp {
    util::add_timestamp_tag(&output_file, run_dt)
  } else {
    output_file
  };

  Ok(AppOptions {
    run_dir,
    repo_url,
    output_file,
    git_out: cli.git_out,
    do_mark: cli.do_mark,
    do_sup: cli.do_sup,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn base_cli() -> Cli {
    Cli {
      dir_name: None,
      repo_url: None,
      file_name: None,
      timestamp: false,
      git_out: false,
      do_mark: false,
      do_sup: false,
      gen_man: false,
    }
  }

  fn run_dt() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).single().unwrap()
  }

  #[test]
  fn defaults_to_cwd_and_default_output_name() {
    let opts = normalize(base_cli(), run_dt()).unwrap();
    assert_eq!(opts.run_dir, std::env::current_dir().unwrap());
    assert!(opts.output_file.ends_with("git-log-output.md"));
    assert!(opts.repo_url.is_none());
  }

  #[test]
  fn missing_repo_dir_is_an_error() {
    let mut cli = base_cli();
    cli.dir_name = Some(PathBuf::from("/no/such/dir/anywhere"));
    let err = normalize(cli, run_dt()).unwrap_err();
    assert!(format!("{:#}", err).starts_with("Not a directory:"));
  }

  #[test]
  fn missing_output_parent_is_an_error() {
    let mut cli = base_cli();
    cli.file_name = Some(PathBuf::from("/no/such/dir/anywhere/out.md"));
    let err = normalize(cli, run_dt()).unwrap_err();
    assert!(format!("{:#}", err).starts_with("Cannot find output directory:"));
  }

  #[test]
  fn empty_repo_url_means_no_links() {
    let mut cli = base_cli();
    cli.repo_url = Some(String::new());
    let opts = normalize(cli, run_dt()).unwrap();
    assert!(opts.repo_url.is_none());
  }

  #[test]
  fn timestamp_tag_goes_before_the_extension() {
    let td = tempfile::TempDir::new().unwrap();
    let mut cli = base_cli();
    cli.file_name = Some(td.path().join("log.md"));
    cli.timestamp = true;
    let opts = normalize(cli, run_dt()).unwrap();
    let name = opts.output_file.file_name().unwrap().to_str().unwrap();
    assert_eq!(name, "log.20240115_103000.md");
  }
}
