use crate::domain::blog::{FeedError, FeedSource};
use crate::domain::pages::{ContentRepository, RemoteError};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// reqwest client shared by the feed fetcher and the page repository.
#[derive(Clone)]
pub struct HttpRemoteClient {
    http_client: reqwest::Client,
}

impl HttpRemoteClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http_client })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.http_client.get(url).send().await
    }
}

fn remote_error(url: &str, err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Timeout(url.to_string())
    } else {
        RemoteError::Transport(format!("{}: {}", url, err))
    }
}

fn feed_error(url: &str, err: reqwest::Error) -> FeedError {
    if err.is_timeout() {
        FeedError::Timeout(url.to_string())
    } else {
        FeedError::Transport(format!("{}: {}", url, err))
    }
}

#[async_trait]
impl FeedSource for HttpRemoteClient {
    async fn fetch_feed(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        let response = self.get(url).await.map_err(|e| feed_error(url, e))?;

        if !response.status().is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| feed_error(url, e))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl ContentRepository for HttpRemoteClient {
    async fn exists(&self, url: &str) -> Result<bool, RemoteError> {
        let response = self
            .http_client
            .head(url)
            .send()
            .await
            .map_err(|e| remote_error(url, e))?;

        Ok(response.status() == StatusCode::OK)
    }

    async fn fetch(&self, url: &str) -> Result<String, RemoteError> {
        let response = self.get(url).await.map_err(|e| remote_error(url, e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(RemoteError::NotFound(url.to_string())),
            status if !status.is_success() => Err(RemoteError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }),
            _ => response.text().await.map_err(|e| remote_error(url, e)),
        }
    }
}
