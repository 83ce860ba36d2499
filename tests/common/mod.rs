use std::process::Command;

#[allow(dead_code)]
pub fn run(repo: &std::path::Path, args: &[&str]) {
  let status = Command::new("git").args(args).current_dir(repo).status().unwrap();
  assert!(status.success(), "git {:?} failed", args);
}

#[allow(dead_code)]
pub fn commit(repo: &std::path::Path, message: &str, date: &str) {
  let env = [("GIT_AUTHOR_DATE", date), ("GIT_COMMITTER_DATE", date)];

  let status = Command::new("git")
    .arg("commit")
    .arg("-q")
    .arg("-m")
    .arg(message)
    .current_dir(repo)
    .envs(env.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    .status()
    .unwrap();

  assert!(status.success());
}

/// A throwaway repo with two commits at pinned author dates, oldest first.
#[allow(dead_code)]
pub fn fixture_repo() -> tempfile::TempDir {
  let dir = tempfile::TempDir::new().unwrap();

  run(dir.path(), &["init", "-q", "-b", "main"]);
  run(dir.path(), &["config", "user.name", "Fixture Bot"]);
  run(dir.path(), &["config", "user.email", "fixture@example.com"]);
  run(dir.path(), &["config", "commit.gpgsign", "false"]);

  std::fs::write(dir.path().join("user.rb"), "class User; end\n").unwrap();
  run(dir.path(), &["add", "."]);
  commit(dir.path(), "feat: add user model", "2025-08-12T14:03:00+00:00");

  std::fs::write(dir.path().join("payment_service.rb"), "class PaymentService; end\n").unwrap();
  run(dir.path(), &["add", "."]);
  commit(
    dir.path(),
    "refactor: extract payment service",
    "2025-08-13T09:12:00+00:00",
  );

  dir
}
