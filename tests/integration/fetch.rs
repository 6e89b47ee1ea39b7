//! Tests for `buildpack fetch`

use super::common::*;
use predicates::prelude::*;

#[test]
fn test_fetch_from_cache_with_default_version() {
    let ctx = TestContext::new();
    ctx.write_ruby_manifest(RUBY_MD5);
    ctx.cache_ruby(RUBY_BYTES);

    ctx.buildpack()
        .args(["fetch", "ruby", "--output", "out/ruby.tgz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetched ruby 2.0.0"));

    assert_eq!(ctx.read("out/ruby.tgz"), RUBY_BYTES);
}

#[test]
fn test_fetch_explicit_version_and_manifest_path() {
    let ctx = TestContext::new();
    ctx.write_ruby_manifest(RUBY_MD5);
    ctx.cache_ruby(RUBY_BYTES);

    let manifest = ctx.path("manifest.yml");
    let output = ctx.path("elsewhere/ruby.tgz");

    ctx.buildpack()
        .current_dir(std::env::temp_dir())
        .arg("--manifest")
        .arg(&manifest)
        .args(["fetch", "ruby", "2.0.0", "--output"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read(&output).unwrap(), RUBY_BYTES);
}

#[test]
fn test_fetch_checksum_mismatch_removes_output() {
    let ctx = TestContext::new();
    ctx.write_ruby_manifest(RUBY_MD5);
    ctx.cache_ruby(b"corrupted bytes");

    ctx.buildpack()
        .args(["fetch", "ruby", "2.0.0", "--output", "ruby.tgz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("md5 mismatch: expected: 105721dcb6494f53e19954ef6a1d2059"));

    assert!(!ctx.path("ruby.tgz").exists());
}

#[test]
fn test_fetch_unknown_version() {
    let ctx = TestContext::new();
    ctx.write_ruby_manifest(RUBY_MD5);
    ctx.cache_ruby(RUBY_BYTES);

    ctx.buildpack()
        .args(["fetch", "ruby", "1.9.3", "--output", "ruby.tgz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dependency ruby 1.9.3 not found"));
}

#[test]
fn test_fetch_missing_manifest() {
    let ctx = TestContext::new();

    ctx.buildpack()
        .args(["fetch", "ruby", "--output", "ruby.tgz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_fetch_with_explicit_config_cache_dir() {
    let ctx = TestContext::new();
    ctx.write_ruby_manifest(RUBY_MD5);
    std::fs::create_dir_all(ctx.path("vendor")).unwrap();
    std::fs::write(ctx.path("vendor").join(RUBY_CACHE_KEY), RUBY_BYTES).unwrap();
    std::fs::write(ctx.path("custom.yaml"), "dependencies_dir: vendor\n").unwrap();

    ctx.buildpack()
        .args(["--config", "custom.yaml", "fetch", "ruby", "--output", "ruby.tgz"])
        .assert()
        .success();

    assert_eq!(ctx.read("ruby.tgz"), RUBY_BYTES);
}
