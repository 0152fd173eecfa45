// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides scratch project roots, configuration builders, and tree listings

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use goforge::scaffold::{Configuration, ScaffoldPlanner};
use goforge::template::TemplateEngine;

pub struct TestConfigBuilder {
    config: Configuration,
}

impl TestConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            config: Configuration::new(name, "1.21"),
        }
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.config.kind = kind.to_string();
        self
    }

    pub fn database(mut self, database: &str) -> Self {
        self.config.database = Some(database.to_string());
        self
    }

    pub fn auth(mut self, auth: &str) -> Self {
        self.config.auth = Some(auth.to_string());
        self
    }

    pub fn runtime_version(mut self, version: &str) -> Self {
        self.config.runtime_version = version.to_string();
        self
    }

    pub fn build(self) -> Configuration {
        self.config
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub engine: TemplateEngine,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
            engine: TemplateEngine::bundled().expect("Bundled templates must compile"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn planner(&self) -> ScaffoldPlanner {
        ScaffoldPlanner::new(self.path())
    }

    pub fn project_root(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Every file under `root`, relative to it
    pub fn files_under(&self, root: &Path) -> BTreeSet<PathBuf> {
        list_tree(root, |entry| entry.file_type().is_file())
    }

    /// Every directory under `root` (excluding root itself), relative to it
    pub fn directories_under(&self, root: &Path) -> BTreeSet<PathBuf> {
        list_tree(root, |entry| entry.file_type().is_dir() && entry.depth() > 0)
    }

    /// Number of entries directly inside the scratch directory
    pub fn top_level_count(&self) -> usize {
        std::fs::read_dir(self.path())
            .expect("Failed to read temp directory")
            .count()
    }
}

fn list_tree<F>(root: &Path, keep: F) -> BTreeSet<PathBuf>
where
    F: Fn(&walkdir::DirEntry) -> bool,
{
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| keep(entry))
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .expect("walkdir yields paths under root")
                .to_path_buf()
        })
        .collect()
}

pub fn paths(items: &[&str]) -> BTreeSet<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = TestConfigBuilder::new("demo")
            .kind("cli")
            .database("sqlite")
            .build();

        assert_eq!(config.project_name, "demo");
        assert_eq!(config.kind, "cli");
        assert_eq!(config.database.as_deref(), Some("sqlite"));
        assert_eq!(config.runtime_version, "1.21");
    }

    #[test]
    fn test_environment_setup() {
        let env = TestEnvironment::new();
        assert!(env.path().exists());
        assert_eq!(env.top_level_count(), 0);
    }
}
