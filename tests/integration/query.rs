//! Tests for `buildpack default-version`, `versions` and `check-stack`

use super::common::*;
use predicates::prelude::*;

const MULTI: &str = "language: ruby
default_versions:
  - name: ruby
    version: 2.3.1
  - name: node
    version: 6.9.1
  - name: node
    version: 4.6.0
dependencies:
  - name: ruby
    version: 2.3.1
    uri: https://x/ruby-2.3.1.tgz
    md5: aaa
    cf_stacks: [cflinuxfs2]
  - name: ruby
    version: 2.2.5
    uri: https://x/ruby-2.2.5.tgz
    md5: bbb
    cf_stacks: [cflinuxfs2]
";

#[test]
fn test_default_version() {
    let ctx = TestContext::new();
    ctx.write_manifest(MULTI);

    ctx.buildpack()
        .args(["default-version", "ruby"])
        .assert()
        .success()
        .stdout("2.3.1\n");
}

#[test]
fn test_default_version_ambiguous_shows_operator_hint() {
    let ctx = TestContext::new();
    ctx.write_manifest(MULTI);

    ctx.buildpack()
        .args(["default-version", "node"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("found 2 default versions for node"))
        .stderr(predicate::str::contains("specifying-default-versions"));
}

#[test]
fn test_default_version_missing() {
    let ctx = TestContext::new();
    ctx.write_manifest(MULTI);

    ctx.buildpack()
        .args(["default-version", "python"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no default version for python"));
}

#[test]
fn test_versions() {
    let ctx = TestContext::new();
    ctx.write_manifest(MULTI);

    ctx.buildpack()
        .args(["versions", "ruby"])
        .assert()
        .success()
        .stdout("2.3.1\n2.2.5\n");
}

#[test]
fn test_check_stack() {
    let ctx = TestContext::new();
    ctx.write_manifest(MULTI);

    ctx.buildpack()
        .args(["check-stack", "cflinuxfs2"])
        .assert()
        .success();

    ctx.buildpack()
        .args(["check-stack", "windows2012R2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("windows2012R2"));
}

#[test]
fn test_check_stack_from_environment() {
    let ctx = TestContext::new();
    ctx.write_manifest(MULTI);

    ctx.buildpack()
        .env("CF_STACK", "cflinuxfs2")
        .arg("check-stack")
        .assert()
        .success()
        .stdout(predicate::str::contains("cflinuxfs2"));
}

#[test]
fn test_malformed_manifest() {
    let ctx = TestContext::new();
    ctx.write_manifest("dependencies: [name: {");

    ctx.buildpack()
        .args(["versions", "ruby"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest parsing error"));
}

#[test]
fn test_buildpack_version() {
    let ctx = TestContext::new();
    ctx.write_manifest(MULTI);
    std::fs::write(ctx.path("VERSION"), "1.6.28\n").unwrap();

    ctx.buildpack()
        .arg("buildpack-version")
        .assert()
        .success()
        .stdout("1.6.28\n");
}

#[test]
fn test_buildpack_version_missing_file() {
    let ctx = TestContext::new();
    ctx.write_manifest(MULTI);

    ctx.buildpack()
        .arg("buildpack-version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
