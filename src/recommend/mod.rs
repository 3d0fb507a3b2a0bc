use async_trait::async_trait;

pub mod client;
pub mod error;
pub mod model;

pub use self::client::RecommendationClient;
pub use self::error::{FailureKind, FetchError};
pub use self::model::{Playlist, Song};

/// Anything that can turn a mood id into a playlist.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn recommend(&self, mood_id: &str) -> Result<Playlist, FetchError>;
}
