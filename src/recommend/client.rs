use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use super::{
    error::FetchError,
    model::{parse_playlist, Playlist},
    RecommendationSource,
};

const USER_AGENT: &str = concat!("moodsync/", env!("CARGO_PKG_VERSION"));
const MAX_ERROR_BODY: usize = 256;

/// HTTP client for `GET {base}/api/recommend/{mood}`.
pub struct RecommendationClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RecommendationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        // The session applies its own deadline; this one only bounds a stuck transport.
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(RecommendationClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn endpoint(&self, mood_id: &str) -> String {
        format!("{}/api/recommend/{}", self.base_url, urlencoding::encode(mood_id))
    }
}

#[async_trait]
impl RecommendationSource for RecommendationClient {
    async fn recommend(&self, mood_id: &str) -> Result<Playlist, FetchError> {
        let url = self.endpoint(mood_id);
        info!("Fetching playlist: GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(FetchError::Status { status: status.as_u16(), body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;
        debug!("Received {} bytes for mood {mood_id}", bytes.len());

        parse_playlist(mood_id, &bytes)
    }
}
