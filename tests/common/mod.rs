use assert_cmd::Command;

pub fn todotags_cmd() -> Command {
    let mut cmd = Command::cargo_bin("todotags").unwrap();
    cmd.env_remove("TODOTAGS_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
