use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn mavenpub_cmd() -> Command {
    Command::cargo_bin("mavenpub").unwrap()
}

const MANIFEST: &str = r#"
[package]
group = "de.dasbabypixel"
name = "graph"
version = "1.0"

[toolchain]
java = 8
vendor = "adoptium"
"#;

#[test]
fn test_pom_prints_to_stdout() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Mavenpub.toml"), MANIFEST).unwrap();

    mavenpub_cmd()
        .current_dir(tmp.path())
        .args(["pom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<groupId>de.dasbabypixel</groupId>"))
        .stdout(predicate::str::contains(
            "<maven.compiler.target>1.8</maven.compiler.target>",
        ));
}

#[test]
fn test_pom_writes_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Mavenpub.toml"), MANIFEST).unwrap();

    mavenpub_cmd()
        .current_dir(tmp.path())
        .args(["pom", "--output", "pom.xml"])
        .assert()
        .success();

    let pom = fs::read_to_string(tmp.path().join("pom.xml")).unwrap();
    assert!(pom.contains("<artifactId>graph</artifactId>"));
}
