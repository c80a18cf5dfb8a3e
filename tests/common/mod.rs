//! Common test utilities for skill-release integration tests

use std::path::{Path, PathBuf};

use git2::{Commit, Oid, Repository, Signature};
use tempfile::TempDir;

/// A scratch skills repository for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to repository root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new empty workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Create a skill directory with a SKILL.md declaring `version`
    pub fn create_skill(&self, name: &str, version: &str) -> PathBuf {
        self.write_file(&format!("{name}/SKILL.md"), &skill_md(name, version));
        self.write_file(&format!("{name}/scripts/run.py"), "print('ok')\n");
        self.path.join(name)
    }

    /// Initialize a git repository at the workspace root
    pub fn init_git(&self) -> Repository {
        Repository::init(&self.path).expect("Failed to init git repository")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// SKILL.md content with frontmatter
#[allow(dead_code)]
pub fn skill_md(name: &str, version: &str) -> String {
    format!(
        "---\nname: {name}\ndescription: Test skill {name}\nversion: {version}\n---\n\n# {name}\n"
    )
}

/// Commit the current tree with `message` on HEAD
#[allow(dead_code)]
pub fn commit(repo: &Repository, message: &str) -> Oid {
    let sig = Signature::now("Test", "test@example.com").expect("Failed to create signature");
    let tree_id = repo
        .index()
        .expect("Failed to open index")
        .write_tree()
        .expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let parents: Vec<Commit<'_>> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().expect("Failed to peel HEAD")],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .expect("Failed to commit")
}

/// Create a lightweight tag
#[allow(dead_code)]
pub fn tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("Failed to find object");
    repo.tag_lightweight(name, &object, false)
        .expect("Failed to create tag");
}

/// Whether the external `zip` utility is available
#[allow(dead_code)]
pub fn zip_available() -> bool {
    std::process::Command::new("zip")
        .arg("-v")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// List the file names in `dir`, sorted
#[allow(dead_code)]
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| {
            e.expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .to_string()
        })
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_create_skill() {
        let workspace = TestWorkspace::new();
        workspace.create_skill("pdf", "1.0.0");
        assert!(workspace.file_exists("pdf/SKILL.md"));
        assert!(workspace.read_file("pdf/SKILL.md").contains("version: 1.0.0"));
    }
}
