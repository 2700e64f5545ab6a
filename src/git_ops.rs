use std::process::Command;

/// Outcome of checking one branch against the local clone and its origin remote.
#[derive(Debug, Clone)]
pub struct BranchLocalStatus {
    pub branch: String,
    pub exists_locally: bool,
    pub exists_remotely: bool,
    pub remote_branches: Vec<String>,
}

fn run_git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// URL of the `origin` remote, if the current directory is a repository with one.
pub fn remote_url() -> Option<String> {
    run_git(&["config", "--get", "remote.origin.url"]).filter(|url| !url.is_empty())
}

pub fn branch_exists_local(branch: &str) -> bool {
    // An empty listing and a failed git call both mean "not here".
    run_git(&["branch", "--list", branch]).is_some_and(|out| !out.is_empty())
}

pub fn branch_exists_remote(branch: &str) -> bool {
    // A failed ls-remote (no remote, no network) is indistinguishable from
    // a missing branch; both report false.
    run_git(&["ls-remote", "--heads", "origin", branch]).is_some_and(|out| !out.is_empty())
}

/// All branch names on `origin`, or empty when the remote cannot be listed.
pub fn remote_branches() -> Vec<String> {
    match run_git(&["ls-remote", "--heads", "origin"]) {
        Some(output) => parse_remote_heads(&output),
        None => Vec::new(),
    }
}

fn parse_remote_heads(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parts: Vec<&str> = line.split("refs/heads/").collect();
            if parts.len() == 2 {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
        .collect()
}
