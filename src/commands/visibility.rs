use crate::git_ops;
use crate::git_utils;
use crate::github::VisibilityClient;

/// Check repository visibility and branch existence, returning the exit code.
pub fn run(repository: Option<&str>, branch: &str, client: &VisibilityClient) -> i32 {
    let repo = match repository {
        Some(repo) => repo.to_string(),
        None => match resolve_current_repo() {
            Some(repo) => repo,
            None => {
                println!("Error: Could not determine repository from git remote.");
                println!("Please provide repository as: owner/repo");
                return 1;
            }
        },
    };

    println!("Checking repository: {}", repo);
    println!("Checking branch: {}", branch);

    if client.authenticated() {
        println!("Using GitHub token for authentication ✓");
    } else {
        println!("No GitHub token provided (unauthenticated request)");
        println!("Tip: Set GITHUB_TOKEN environment variable for private repositories");
    }

    println!("{}", "-".repeat(60));

    let info = match client.fetch_repository(&repo) {
        Ok(info) => info,
        Err(e) => {
            println!("❌ Failed to check repository: {}", e);
            if let Some(hint) = e.hint() {
                println!("💡 Hint: {}", hint);
            }
            return 1;
        }
    };

    let visibility = info.visibility().to_uppercase();
    let icon = if info.private { "🔒" } else { "🌐" };
    println!("\n{} Repository Visibility: {}", icon, visibility);
    println!("   Full Name: {}", info.full_name);
    println!("   Default Branch: {}", info.default_branch);
    if info.authenticated {
        println!("   Access: Authenticated");
    }

    println!("\nChecking if branch '{}' exists...", branch);
    match client.fetch_branch(&repo, branch) {
        Ok(Some(branch_info)) => {
            let protected_status = if branch_info.protected {
                "Protected"
            } else {
                "Not Protected"
            };
            println!("✅ Branch '{}' exists", branch);
            println!("   Protection Status: {}", protected_status);
        }
        Ok(None) => {
            println!("❌ Branch '{}' does not exist", branch);
            return 1;
        }
        Err(e) => {
            println!("❌ Failed to check branch: {}", e);
            return 1;
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("SUMMARY:");
    println!("  Repository '{}' is {}", repo, visibility);
    println!("  Branch '{}' exists and is accessible", branch);
    if info.private {
        println!("  Note: This is a private repository");
    }
    println!("{}", "=".repeat(60));

    0
}

fn resolve_current_repo() -> Option<String> {
    git_ops::remote_url().and_then(|url| git_utils::parse_github_remote(&url))
}
