#![cfg(test)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// A temporary deployment: one directory per library root, each with its own
/// component list, plus a shared type table and a configuration file.
pub struct Deployment {
    pub dir: TempDir,
}

impl Deployment {
    pub fn new() -> Self {
        Self {
            dir: tempdir().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create `lib/<name>/META-INF/components.txt` with the given lines.
    pub fn add_library(&self, name: &str, lines: &[&str]) -> PathBuf {
        let root = self.path().join("lib").join(name);
        fs::create_dir_all(root.join("META-INF")).expect("Failed to create library root");
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(root.join("META-INF").join("components.txt"), contents).expect("Failed to write component list");
        root
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path().join(relative);
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }
}

/// Type table shared by the integration scenarios (JSON).
pub const TYPES_JSON: &str = r#"{
    "types": [
        { "name": "app.Store", "kind": "interface", "role": true },
        { "name": "app.Logger", "kind": "interface", "role": true },
        { "name": "app.Lifecycle", "kind": "interface" },
        { "name": "app.Service", "kind": "interface", "role": true, "interfaces": ["app.Lifecycle"] },
        { "name": "app.ManagedStore", "kind": "interface", "interfaces": ["app.Store", "app.Lifecycle"] },
        {
            "name": "app.DiskStore",
            "kind": "implementation",
            "interfaces": ["app.ManagedStore"],
            "hint": "disk",
            "fields": [
                { "name": "log", "field_type": "app.Logger", "injectable": true },
                { "name": "path", "field_type": "std.PathBuf" }
            ]
        },
        {
            "name": "app.MemoryStore",
            "kind": "implementation",
            "interfaces": ["app.Store"],
            "hint": "memory",
            "instantiation_strategy": "per-lookup"
        },
        { "name": "app.ConsoleLogger", "kind": "implementation", "interfaces": ["app.Logger"] },
        {
            "name": "app.Indexer",
            "kind": "implementation",
            "interfaces": ["app.Service", "app.Logger"],
            "hint": "indexer",
            "fields": [
                { "name": "primary", "field_type": "app.Store", "injectable": true, "hint": "disk" },
                { "name": "scratch", "field_type": "app.Store", "injectable": true, "hint": "memory" },
                { "name": "log", "field_type": "app.Logger", "injectable": true }
            ]
        },
        { "name": "app.Utility", "kind": "implementation", "interfaces": ["app.Lifecycle"] }
    ]
}"#;
