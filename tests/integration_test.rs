// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_git_svn_tagger_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "git-svn-tagger", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git-svn-tagger"));
    assert!(stdout.contains("lightweight tags"));
}

#[test]
fn test_missing_path_argument_is_a_usage_error() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "git-svn-tagger"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_nonexistent_path_is_rejected() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "git-svn-tagger",
            "--",
            "/definitely/not/a/real/path",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist or is not a directory"));
}

#[cfg(test)]
mod cli_run_tests {
    use super::*;
    use git2::{Oid, Repository};
    use tempfile::TempDir;

    // Builds a repository with one svn tag mirror branch:
    //   p0 <- p1 <- mirror ("svn tag release-1.0", parents [p0, p1])
    fn setup_mirror_repo() -> (TempDir, Oid) {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        let sig = repo.signature().expect("Could not get signature");
        let tree_id = {
            let mut index = repo.index().expect("Could not get index");
            index.write_tree().expect("Could not write tree")
        };
        let tree = repo.find_tree(tree_id).expect("Could not find tree");

        let p0 = repo
            .commit(Some("HEAD"), &sig, &sig, "first trunk commit", &tree, &[])
            .expect("Could not create commit");
        let p1 = repo
            .commit(
                None,
                &sig,
                &sig,
                "second trunk commit",
                &tree,
                &[&repo.find_commit(p0).unwrap()],
            )
            .expect("Could not create commit");
        let mirror = repo
            .commit(
                None,
                &sig,
                &sig,
                "svn tag release-1.0",
                &tree,
                &[
                    &repo.find_commit(p0).unwrap(),
                    &repo.find_commit(p1).unwrap(),
                ],
            )
            .expect("Could not create commit");

        repo.reference(
            "refs/remotes/svn/tags/release-1.0",
            mirror,
            false,
            "svn mirror",
        )
        .expect("Could not create mirror ref");

        (temp_dir, p1)
    }

    fn run_on(path: &std::path::Path) -> std::process::Output {
        Command::new("cargo")
            .args(["run", "--bin", "git-svn-tagger", "--"])
            .arg(path)
            .output()
            .expect("Failed to execute command")
    }

    #[test]
    fn test_full_run_creates_and_reports_tag() {
        let (temp_dir, p1) = setup_mirror_repo();

        let output = run_on(temp_dir.path());
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Branch:         refs/remotes/svn/tags/release-1.0"));
        assert!(stdout.contains("Branch message: svn tag release-1.0"));
        assert!(stdout.contains("Tag name:       release-1.0"));
        assert!(stdout.contains(&format!("Parent id:      {}", p1)));
        assert!(stdout.contains("Parent message: second trunk commit"));
        assert!(stdout.contains("Tag created:    refs/tags/release-1.0"));
        assert!(stdout.contains("Created tags:   release-1.0"));

        // A second invocation finds the tag in place and creates nothing.
        let output = run_on(temp_dir.path());
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Tag name:       release-1.0"));
        assert!(!stdout.contains("Parent id:"));
        assert!(!stdout.contains("Tag created:"));
        assert!(stdout.contains("No tags created."));
    }

    #[test]
    fn test_run_on_repo_without_mirrors_prints_summary_only() {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        Repository::init(temp_dir.path()).expect("Could not init git repo");

        let output = run_on(temp_dir.path());
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(!stdout.contains("Branch:"));
        assert!(stdout.contains("No tags created."));
    }
}
