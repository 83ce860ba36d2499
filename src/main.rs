use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;

mod cli;
mod commit;
mod gitio;
mod render;
mod util;

use crate::cli::{Cli, normalize};

fn main() {
  let cli = Cli::parse();

  if cli.gen_man {
    match util::render_man_page::<Cli>() {
      Ok(page) => {
        print!("{}", page);
        return;
      }
      Err(err) => {
        eprintln!("ERROR - {:#}", err);
        std::process::exit(1);
      }
    }
  }

  // One timestamp per run; threaded through so a -t filename stays stable
  // even if option resolution takes measurable time.
  let run_dt = Local::now();

  if let Err(err) = run(cli, run_dt) {
    eprintln!("ERROR - {:#}", err);
    std::process::exit(1);
  }
}

fn run(cli: Cli, run_dt: DateTime<Local>) -> Result<()> {
  println!("\n{} (v.{})", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

  let opts = normalize(cli, run_dt)?;

  println!("\nRun 'git log' in '{}'", opts.run_dir.display());

  let capture = gitio::run_git_log(&opts)?;

  if capture.success() {
    let doc = render::as_markdown(&opts, &capture.stdout)?;

    println!("\nWriting '{}'\n", opts.output_file.display());

    std::fs::write(&opts.output_file, doc)
      .with_context(|| format!("writing '{}'", opts.output_file.display()))?;
  } else {
    // A failing git log is reported with its captured output but not
    // re-raised; the process still exits 0 in this branch.
    println!("ERROR ({})", capture.status);

    if !capture.stdout.is_empty() {
      println!("STDOUT:\n{}\n", capture.stdout);
    }

    if !capture.stderr.is_empty() {
      println!("STDERR:\n{}\n", capture.stderr);
    }
  }

  Ok(())
}
