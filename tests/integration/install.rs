//! Tests for `buildpack install`

use super::common::*;
use predicates::prelude::*;

#[test]
fn test_install_only_version_from_cache() {
    let ctx = TestContext::new();
    // Plain (non-archive) artifact is installed under its file name
    ctx.write_manifest(&format!(
        "language: ruby\ndependencies:\n  - name: jq\n    version: 1.5.0\n    uri: https://x/bin/jq-linux64\n    md5: {}\n",
        RUBY_MD5
    ));
    std::fs::create_dir_all(ctx.path("dependencies")).unwrap();
    std::fs::write(
        ctx.path("dependencies").join("https___x_bin_jq-linux64"),
        RUBY_BYTES,
    )
    .unwrap();

    ctx.buildpack()
        .args(["install", "jq", "--dir", "tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed jq"));

    assert_eq!(ctx.read("tools/jq-linux64"), RUBY_BYTES);
}

#[test]
fn test_install_ambiguous_version() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        "language: node\ndependencies:\n\
         - {name: node, version: 6.9.1, uri: 'https://x/node-6.9.1.tgz', md5: a}\n\
         - {name: node, version: 4.6.0, uri: 'https://x/node-4.6.0.tgz', md5: b}\n",
    );
    std::fs::create_dir_all(ctx.path("dependencies")).unwrap();

    ctx.buildpack()
        .args(["install", "node", "--dir", "node"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than one version of node found"));

    assert!(!ctx.path("node").exists());
}
