use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use anyhow::{Result, bail};

use crate::cli::AppOptions;

/// Fixed `git log` arguments: topological order, oldest first, ISO-strict
/// author dates, one quoted line per commit of `<H> <h> <ad> <s>`.
const LOG_ARGS: [&str; 5] = [
  "log",
  "--topo-order",
  "--reverse",
  "--date=iso-strict",
  "--pretty=format:\"%H %h %ad %s\"",
];

/// What one git invocation produced. A nonzero exit is captured here, not
/// raised; the caller decides what a failure means.
#[derive(Debug)]
pub struct GitCapture {
  pub status: i32,
  pub stdout: String,
  pub stderr: String,
}

impl GitCapture {
  pub fn success(&self) -> bool {
    self.status == 0
  }
}

pub fn run_git(run_dir: &Path, args: &[&str]) -> Result<GitCapture> {
  let out = match Command::new("git").args(args).current_dir(run_dir).output() {
    Ok(out) => out,
    Err(err) if err.kind() == ErrorKind::NotFound => {
      bail!("Cannot find 'git' command. Make sure Git is installed.");
    }
    Err(err) => {
      return Err(anyhow::Error::new(err).context(format!("spawning git {:?}", args)));
    }
  };

  Ok(GitCapture {
    status: out.status.code().unwrap_or(-1),
    stdout: String::from_utf8_lossy(&out.stdout).to_string(),
    stderr: String::from_utf8_lossy(&out.stderr).to_string(),
  })
}

/// Run the fixed `git log` invocation in the configured repository,
/// echoing the captured streams when `--git-out` is set.
pub fn run_git_log(opts: &AppOptions) -> Result<GitCapture> {
  let capture = run_git(&opts.run_dir, &LOG_ARGS)?;

  if opts.git_out {
    println!("\nSTDOUT:\n{}\n", capture.stdout.trim());
    println!("\nSTDERR:\n{}\n", capture.stderr.trim());
  }

  Ok(capture)
}
