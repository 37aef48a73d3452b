#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("timeout while fetching {0}")]
    Timeout(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
}

impl RemoteError {
    /// An authoritative absence, as opposed to a failure to find out.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
