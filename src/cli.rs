use clap::Parser;

#[derive(Parser)]
#[command(name = "check-branch-local")]
#[command(about = "Check branch existence using local git commands")]
pub struct LocalCheckArgs {
    /// Branch name to check
    #[arg(default_value = "development")]
    pub branch: String,
}

#[derive(Parser)]
#[command(name = "check-branch-visibility")]
#[command(about = "Check if a GitHub repository and branch are public or private")]
pub struct VisibilityCheckArgs {
    /// GitHub repository in 'owner/repo' format (default: current git repo)
    pub repository: Option<String>,

    /// Branch name to check
    #[arg(default_value = "development")]
    pub branch: String,
}
