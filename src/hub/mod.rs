pub mod client;
pub mod types;

pub use client::{build_http_client, HubClient};
pub use types::{ImageSummary, RepositoryDetail, TagSummary, UserSummary};
