use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::CommandFactory;

/// Resolve a path to an absolute one, falling back to a cwd join when it
/// does not exist yet (canonicalize requires an existing path).
pub fn resolve_path(p: &Path) -> PathBuf {
  match std::fs::canonicalize(p) {
    Ok(abs) => abs,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => p.to_path_buf(),
    },
  }
}

/// Insert a `.YYYYMMDD_HHMMSS` tag into a filename just before its
/// extension: `log.md` becomes `log.20240115_103000.md`.
pub fn add_timestamp_tag(path: &Path, run_dt: DateTime<Local>) -> PathBuf {
  let tag = run_dt.format("%Y%m%d_%H%M%S");
  let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();

  match path.extension() {
    Some(ext) => path.with_file_name(format!("{}.{}.{}", stem, tag, ext.to_string_lossy())),
    None => path.with_file_name(format!("{}.{}", stem, tag)),
  }
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
