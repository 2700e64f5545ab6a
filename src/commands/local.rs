use crate::git_ops::{self, BranchLocalStatus};

const MAX_LISTED_BRANCHES: usize = 10;

/// Check a branch against the local clone and its remote, returning the exit code.
pub fn run(branch: &str) -> i32 {
    println!("Checking branch: {}", branch);
    println!("{}", "=".repeat(60));

    match git_ops::remote_url() {
        Some(url) => println!("Repository: {}", url),
        None => println!("Warning: Could not determine remote URL"),
    }
    println!();

    let exists_locally = git_ops::branch_exists_local(branch);
    if exists_locally {
        println!("✅ Branch '{}' exists locally", branch);
    } else {
        println!("❌ Branch '{}' does not exist locally", branch);
    }

    println!("\nChecking remote repository...");
    let exists_remotely = git_ops::branch_exists_remote(branch);
    let mut remote_branches = Vec::new();
    if exists_remotely {
        println!("✅ Branch '{}' exists on remote", branch);
    } else {
        println!("❌ Branch '{}' does not exist on remote", branch);

        println!("\nAvailable remote branches:");
        remote_branches = git_ops::remote_branches();
        if remote_branches.is_empty() {
            println!("  (none found)");
        } else {
            for name in remote_branches.iter().take(MAX_LISTED_BRANCHES) {
                println!("  - {}", name);
            }
            if remote_branches.len() > MAX_LISTED_BRANCHES {
                println!(
                    "  ... and {} more",
                    remote_branches.len() - MAX_LISTED_BRANCHES
                );
            }
        }
    }

    let status = BranchLocalStatus {
        branch: branch.to_string(),
        exists_locally,
        exists_remotely,
        remote_branches,
    };
    print_summary(&status);

    if status.exists_remotely { 0 } else { 1 }
}

fn print_summary(status: &BranchLocalStatus) {
    println!("\n{}", "=".repeat(60));
    println!("SUMMARY:");
    if status.exists_remotely {
        println!(
            "  Branch '{}' is accessible on the remote repository",
            status.branch
        );
        if status.exists_locally {
            println!("  Branch '{}' is also available locally", status.branch);
        } else {
            println!("  Branch '{}' is not checked out locally", status.branch);
            println!("  You can check it out with: git checkout {}", status.branch);
        }
    } else {
        println!(
            "  Branch '{}' does not exist on the remote repository",
            status.branch
        );
    }
    println!("{}", "=".repeat(60));
}
