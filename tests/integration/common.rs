//! Common utilities for integration tests

use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use std::path::PathBuf;

pub const RUBY_URI: &str = "https://buildpacks.example.com/ruby/ruby-2.0.0.tgz?token=abc";
pub const RUBY_CACHE_KEY: &str = "https___buildpacks.example.com_ruby_ruby-2.0.0.tgz";
pub const RUBY_BYTES: &[u8] = b"ruby 2.0.0 artifact bytes";
// md5(RUBY_BYTES)
pub const RUBY_MD5: &str = "105721dcb6494f53e19954ef6a1d2059";

/// Isolated buildpack directory with its own config home
pub struct TestContext {
    pub temp: TempDir,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        temp.child("config").create_dir_all().unwrap();
        Self { temp }
    }

    /// Create a Command for running buildpack with proper environment
    pub fn buildpack(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("buildpack").unwrap();
        cmd.current_dir(&self.temp);
        cmd.env_remove("CF_STACK");
        cmd.env_remove("RUST_LOG");

        // Keep the default config file inside the temp dir
        let config_dir = self.temp.child("config").to_path_buf();
        if cfg!(target_os = "windows") {
            cmd.env("APPDATA", &config_dir);
            cmd.env("USERPROFILE", self.temp.path());
        } else if cfg!(target_os = "linux") {
            cmd.env("XDG_CONFIG_HOME", &config_dir);
            cmd.env("HOME", self.temp.path());
        } else {
            cmd.env("HOME", self.temp.path());
        }

        cmd
    }

    pub fn write_manifest(&self, content: &str) {
        self.temp.child("manifest.yml").write_str(content).unwrap();
    }

    /// Manifest with a single ruby 2.0.0 entry pinned as default
    pub fn write_ruby_manifest(&self, md5: &str) {
        self.write_manifest(&format!(
            "---\nlanguage: ruby\ndefault_versions:\n  - name: ruby\n    version: 2.0.0\n\
             dependencies:\n  - name: ruby\n    version: 2.0.0\n    uri: {}\n    md5: {}\n    cf_stacks:\n      - cflinuxfs2\n",
            RUBY_URI, md5
        ));
    }

    /// Put `bytes` into the packaged dependency cache under the ruby cache key
    pub fn cache_ruby(&self, bytes: &[u8]) {
        self.temp
            .child("dependencies")
            .child(RUBY_CACHE_KEY)
            .write_binary(bytes)
            .unwrap();
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp.child(relative).to_path_buf()
    }

    pub fn read(&self, relative: &str) -> Vec<u8> {
        std::fs::read(self.path(relative)).unwrap()
    }
}
