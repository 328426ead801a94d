#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory that keeps written files alive for a test run.
pub struct TestFiles {
    dir: TempDir,
}

impl TestFiles {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("temp dir should be created") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("file should be created");
        file.write_all(contents.as_bytes()).expect("file should be written");
        path
    }
}

/// Embedded seed data with one field rewritten through a JSON pointer.
pub fn seed_with(pointer: &str, value: serde_json::Value) -> String {
    let mut seed: serde_json::Value =
        serde_json::from_str(include_str!("../fixtures/seed.json")).expect("seed should parse");
    *seed.pointer_mut(pointer).expect("pointer should exist") = value;
    seed.to_string()
}
