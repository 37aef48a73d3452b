#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("timeout while fetching {0}")]
    Timeout(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("unparseable feed: {0}")]
    Parse(String),
    #[error("feed has no entries")]
    Empty,
}
