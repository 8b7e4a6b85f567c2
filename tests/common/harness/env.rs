//! Isolated test environment with temp directory.

use super::WikidenCommand;
use anyhow::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wikiden::index::SqliteIndex;

/// Owner used by commands unless a test picks another.
pub const DEFAULT_OWNER: &str = "alice";

/// Isolated test environment with a temporary database and config file.
///
/// The temp directory is removed on drop. The config file path is always
/// passed to the binary, so a developer's own config never leaks in.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the temp directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the SQLite database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join("notes.db")
    }

    /// Returns the path of the config file (which may not exist).
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Writes the config file.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Opens the environment's database directly.
    pub fn open_store(&self) -> Result<SqliteIndex> {
        Ok(SqliteIndex::open(&self.db_path())?)
    }

    /// Creates a command for the default owner.
    pub fn cmd(&self) -> WikidenCommand {
        self.cmd_as(DEFAULT_OWNER)
    }

    /// Creates a command for a specific owner.
    pub fn cmd_as(&self, owner: &str) -> WikidenCommand {
        WikidenCommand::new()
            .env("WIKIDEN_CONFIG", self.config_path().to_string_lossy())
            .db(&self.db_path())
            .owner(owner)
    }

    /// Creates a note through the CLI and returns its full ID.
    pub fn create_note(&self, title: &str, content: &str) -> String {
        self.create_note_as(DEFAULT_OWNER, title, content)
    }

    /// Creates a note for `owner` through the CLI and returns its full ID.
    pub fn create_note_as(&self, owner: &str, title: &str, content: &str) -> String {
        let json: Value = self
            .cmd_as(owner)
            .new_note(title)
            .args(["--content", content])
            .format_json()
            .output_json();
        json["data"]["id"]
            .as_str()
            .expect("new should print the note id")
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_paths_live_in_temp_dir() {
        let env = TestEnv::new();
        assert!(env.db_path().starts_with(env.root()));
        assert!(env.config_path().starts_with(env.root()));
    }

    #[test]
    fn test_env_command_targets_its_database() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], env.db_path().to_string_lossy());
        assert_eq!(args[3], DEFAULT_OWNER);
    }
}
