use clap::Parser;

use branch_check::cli::LocalCheckArgs;
use branch_check::commands;

fn main() {
    let args = LocalCheckArgs::parse();
    std::process::exit(commands::local::run(&args.branch));
}
