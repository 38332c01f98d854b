use serde::{Deserialize, Serialize};

/// One row of a `search/repositories` response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageSummary {
    #[serde(rename = "repo_name")]
    pub name: String,
    #[serde(rename = "short_description", default)]
    pub description: Option<String>,
    #[serde(rename = "star_count", default)]
    pub stars: Option<u64>,
    #[serde(rename = "pull_count", default)]
    pub pulls: Option<u64>,
    #[serde(rename = "is_official", default)]
    pub official: bool,
    #[serde(rename = "is_automated", default)]
    pub automated: bool,
}

/// One row of a repository tag listing. `full_size` is absent for some
/// multi-arch tags, so it stays optional all the way to the reports.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TagSummary {
    pub name: String,
    #[serde(rename = "full_size", default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// One row of a `search/users` response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl UserSummary {
    pub fn is_organization(&self) -> bool {
        self.kind.as_deref() == Some("organization")
    }
}

/// Detail document for a single repository.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RepositoryDetail {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "star_count", default)]
    pub stars: u64,
    #[serde(rename = "pull_count", default)]
    pub pulls: u64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Paged envelope the Hub wraps list responses in.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}
