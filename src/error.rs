use thiserror::Error;

pub type Result<T> = std::result::Result<T, DockhubError>;

#[derive(Debug, Error)]
pub enum DockhubError {
    #[error("tool `{0}` not registered")]
    ToolNotRegistered(String),
    #[error("manifest does not match registered {kind} `{name}`")]
    ManifestMismatch { kind: &'static str, name: String },
    #[error("could not parse image reference from `{0}`")]
    InvalidReference(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("hub request `{endpoint}` failed with status {status}")]
    HubStatus { endpoint: String, status: u16 },
    #[error("registry error: {0}")]
    Registry(String),
    #[error("resource uri `{0}` not recognized")]
    ResourceNotRecognized(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
