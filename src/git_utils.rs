const HTTPS_PREFIX: &str = "https://github.com/";
const SSH_PREFIX: &str = "git@github.com:";

/// Parse a GitHub remote URL into `owner/repo` form.
///
/// Recognizes the two URL shapes git configures for GitHub remotes:
/// `https://github.com/owner/repo[.git]` and `git@github.com:owner/repo[.git]`.
/// Other hosts and malformed or extra path segments yield `None`.
pub fn parse_github_remote(url: &str) -> Option<String> {
    let path = if let Some(rest) = url.strip_prefix(HTTPS_PREFIX) {
        rest
    } else if let Some(rest) = url.strip_prefix(SSH_PREFIX) {
        rest
    } else {
        return None;
    };

    let path = path.strip_suffix(".git").unwrap_or(path);
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() != 2 || !parts.iter().all(|part| is_repo_segment(part)) {
        return None;
    }

    Some(format!("{}/{}", parts[0], parts[1]))
}

fn is_repo_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
