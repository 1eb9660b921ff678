use futures::Stream;
use futures::TryStreamExt;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[source] reqwest::Error),

    #[error("Redirect request failed: {0}")]
    RedirectRequest(#[source] reqwest::Error),

    #[error("Redirect location missing")]
    MissingLocation,

    #[error("Invalid redirect location: {0}")]
    InvalidLocation(String),

    #[error("{code} {reason}")]
    Status { code: u16, reason: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct AssetClient {
    client: Client,
}

impl AssetClient {
    /// Redirects are handled by hand in [`AssetClient::get_following_once`],
    /// so the underlying client never follows them itself.
    pub fn new(user_agent: &str) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(Policy::none())
            .build()?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> Result<Response> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(ApiError::RequestError)
    }

    /// GET `url`, following at most one 301/302 hop, and require a 200.
    pub async fn get_following_once(&self, url: &str) -> Result<Response> {
        let response = self.get(url).await?;

        let response = match response.status() {
            StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND => {
                let location = response
                    .headers()
                    .get(LOCATION)
                    .map(|value| {
                        value
                            .to_str()
                            .map_err(|e| ApiError::InvalidLocation(e.to_string()))
                    })
                    .transpose()?
                    .filter(|location| !location.is_empty())
                    .ok_or(ApiError::MissingLocation)?;

                let target = Url::options()
                    .base_url(Some(response.url()))
                    .parse(location)
                    .map_err(|e| ApiError::InvalidLocation(format!("{}: {}", location, e)))?;

                debug!("Following redirect from {} to {}", url, target);

                // Single hop only: a redirect returned here is not chased and
                // fails the status check below.
                self.client
                    .get(target)
                    .send()
                    .await
                    .map_err(ApiError::RedirectRequest)?
            }
            _ => response,
        };

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response)
    }

    /// Returns (content_length, body stream) for a fetched asset
    pub async fn download_file_stream(
        &self,
        url: &str,
    ) -> Result<(Option<u64>, impl Stream<Item = Result<bytes::Bytes>>)> {
        let response = self.get_following_once(url).await?;

        let total_size = response.content_length();
        let stream = response.bytes_stream().map_err(ApiError::RequestError);

        Ok((total_size, stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AssetClient {
        AssetClient::new("boring-assets-test").unwrap()
    }

    #[tokio::test]
    async fn test_ok_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/file")
            .with_status(200)
            .with_body("hello")
            .create_async()
            .await;

        let response = client()
            .get_following_once(&format!("{}/file", server.url()))
            .await
            .unwrap();
        assert_eq!(response.text().await.unwrap(), "hello");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_follows_single_redirect() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/moved")
            .with_status(301)
            .with_header("location", &format!("{}/real", server.url()))
            .create_async()
            .await;
        let second = server
            .mock("GET", "/real")
            .with_status(200)
            .with_body("real body")
            .create_async()
            .await;

        let response = client()
            .get_following_once(&format!("{}/moved", server.url()))
            .await
            .unwrap();
        assert_eq!(response.text().await.unwrap(), "real body");
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_relative_location_resolves_against_request() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/css/all.min.css")
            .with_status(302)
            .with_header("location", "/mirror/all.min.css")
            .create_async()
            .await;
        let target = server
            .mock("GET", "/mirror/all.min.css")
            .with_status(200)
            .with_body("body{}")
            .create_async()
            .await;

        let response = client()
            .get_following_once(&format!("{}/css/all.min.css", server.url()))
            .await
            .unwrap();
        assert_eq!(response.text().await.unwrap(), "body{}");
        target.assert_async().await;
    }

    #[tokio::test]
    async fn test_second_redirect_is_not_followed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/a")
            .with_status(302)
            .with_header("location", "/b")
            .create_async()
            .await;
        let _mock = server
            .mock("GET", "/b")
            .with_status(302)
            .with_header("location", "/c")
            .create_async()
            .await;
        let third = server
            .mock("GET", "/c")
            .with_status(200)
            .expect(0)
            .create_async()
            .await;

        let err = client()
            .get_following_once(&format!("{}/a", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { code: 302, .. }));
        third.assert_async().await;
    }

    #[tokio::test]
    async fn test_redirect_without_location() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/a")
            .with_status(302)
            .create_async()
            .await;

        let err = client()
            .get_following_once(&format!("{}/a", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingLocation));
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let err = client()
            .get_following_once(&format!("{}/missing", server.url()))
            .await
            .unwrap_err();
        match err {
            ApiError::Status { code, reason } => {
                assert_eq!(code, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_error() {
        let err = client()
            .get_following_once("http://127.0.0.1:1/unreachable")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::RequestError(_)));
    }
}
