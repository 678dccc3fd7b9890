//! Configuration for the GitHub forge connection.
use secrecy::SecretString;

/// Page size used when listing releases.
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote repository connection configuration for authenticating and
/// interacting with GitHub.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Full repository path.
    pub path: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Browser URL of the repository, used for tree and compare links.
    pub repo_link_base_url: String,
    /// Log mutating operations instead of performing them.
    pub dry_run: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "".to_string(),
            scheme: "".to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            path: "".to_string(),
            token: SecretString::from("".to_string()),
            repo_link_base_url: "".to_string(),
            dry_run: false,
        }
    }
}

impl RemoteConfig {
    /// API base URI, `https://api.github.com` for github.com and
    /// `<scheme>://<host>/api/v3` for Enterprise hosts.
    pub fn api_base_uri(&self) -> String {
        if self.host == "github.com" {
            format!("{}://api.{}", self.scheme, self.host)
        } else {
            format!("{}://{}/api/v3", self.scheme, self.host)
        }
    }
}
