pub mod cli;
pub mod commands;
pub mod git_ops;
pub mod git_utils;
pub mod github;
