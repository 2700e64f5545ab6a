use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

const USER_AGENT: &str = "Branch-Visibility-Checker";
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Failures surfaced while querying the GitHub API.
///
/// The 404 and 403 repository cases carry their own wording because the
/// caller prints a recovery hint alongside them.
#[derive(Debug, Error)]
pub enum VisibilityError {
    #[error("Repository not found or is private and requires authentication")]
    NotFound,
    #[error("Access forbidden. API rate limit exceeded or requires authentication")]
    Forbidden,
    #[error("HTTP Error {code}: {reason}")]
    Http { code: u16, reason: String },
    #[error("Error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl VisibilityError {
    pub fn code(&self) -> Option<u16> {
        match self {
            VisibilityError::NotFound => Some(404),
            VisibilityError::Forbidden => Some(403),
            VisibilityError::Http { code, .. } => Some(*code),
            VisibilityError::Transport(_) => None,
        }
    }

    /// Suggested next step for errors a token would likely resolve.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            VisibilityError::NotFound => {
                Some("If this is a private repository, set GITHUB_TOKEN environment variable")
            }
            VisibilityError::Forbidden => {
                Some("Set GITHUB_TOKEN environment variable for authenticated requests")
            }
            _ => None,
        }
    }
}

/// Repository metadata relevant to the visibility check.
#[derive(Debug, Clone)]
pub struct RepoVisibility {
    pub full_name: String,
    pub private: bool,
    pub default_branch: String,
    pub authenticated: bool,
}

impl RepoVisibility {
    pub fn visibility(&self) -> &'static str {
        if self.private { "private" } else { "public" }
    }
}

#[derive(Debug, Clone)]
pub struct BranchStatus {
    pub name: String,
    pub protected: bool,
}

#[derive(Deserialize)]
struct RepoResponse {
    #[serde(default)]
    private: bool,
    full_name: Option<String>,
    default_branch: Option<String>,
}

#[derive(Deserialize)]
struct BranchResponse {
    name: Option<String>,
    #[serde(default)]
    protected: bool,
}

/// Client for the two repository endpoints the visibility check needs.
pub struct VisibilityClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl VisibilityClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, VisibilityError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            token,
        })
    }

    pub fn authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn get(&self, path: &str) -> Result<reqwest::blocking::Response, reqwest::Error> {
        let mut request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header("Accept", ACCEPT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }
        request.send()
    }

    /// Fetch `/repos/{owner}/{repo}` and report whether it is public or private.
    pub fn fetch_repository(&self, repo: &str) -> Result<RepoVisibility, VisibilityError> {
        let response = self.get(&format!("/repos/{}", repo))?;
        let status = response.status();
        if status.is_success() {
            let body: RepoResponse = response.json()?;
            return Ok(RepoVisibility {
                full_name: body.full_name.unwrap_or_else(|| repo.to_string()),
                private: body.private,
                default_branch: body.default_branch.unwrap_or_else(|| "main".to_string()),
                authenticated: self.authenticated(),
            });
        }
        Err(match status.as_u16() {
            404 => VisibilityError::NotFound,
            403 => VisibilityError::Forbidden,
            code => VisibilityError::Http {
                code,
                reason: reason_for(status),
            },
        })
    }

    /// Fetch `/repos/{owner}/{repo}/branches/{branch}`.
    ///
    /// A 404 here means the branch does not exist, which is an answer rather
    /// than a failure, so it maps to `Ok(None)`.
    pub fn fetch_branch(
        &self,
        repo: &str,
        branch: &str,
    ) -> Result<Option<BranchStatus>, VisibilityError> {
        let response = self.get(&format!("/repos/{}/branches/{}", repo, branch))?;
        let status = response.status();
        if status.is_success() {
            let body: BranchResponse = response.json()?;
            return Ok(Some(BranchStatus {
                name: body.name.unwrap_or_else(|| branch.to_string()),
                protected: body.protected,
            }));
        }
        if status.as_u16() == 404 {
            return Ok(None);
        }
        Err(VisibilityError::Http {
            code: status.as_u16(),
            reason: reason_for(status),
        })
    }
}

fn reason_for(status: reqwest::StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}
