use std::env;

use clap::Parser;

use branch_check::cli::VisibilityCheckArgs;
use branch_check::commands;
use branch_check::github::{DEFAULT_API_BASE_URL, VisibilityClient};

fn main() {
    let args = VisibilityCheckArgs::parse();

    let base_url =
        env::var("GITHUB_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    let token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

    let client = match VisibilityClient::new(base_url, token) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    std::process::exit(commands::visibility::run(
        args.repository.as_deref(),
        &args.branch,
        &client,
    ));
}
