//! Caller-side recovery policy on top of [`GalleryClient`].
//!
//! The client reports exactly what the host returned. Decisions such as
//! "show the showreel when the films folder is empty" live here.

use std::fmt;
use tracing::warn;

use crate::error::FetchFailure;
use crate::gallery::urls::CloudinaryUrls;
use crate::gallery::{Album, GalleryClient, PhotoResource, VideoItem};

/// What a screen renders for an async listing
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Empty,
    Failed(String),
    Ready(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ViewState<Vec<T>> {
    pub fn from_result<E: fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Ready(items),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Showreel shown when a video folder cannot be listed
pub fn default_fallback_videos(urls: &CloudinaryUrls) -> Vec<VideoItem> {
    [
        ("films/wedding_highlights", "Wedding Highlights"),
        ("films/prewedding_teaser", "Pre-wedding Teaser"),
        ("films/birthday_reel", "Birthday Reel"),
    ]
    .into_iter()
    .map(|(public_id, title)| VideoItem {
        public_id: public_id.to_string(),
        title: title.to_string(),
        thumbnail_url: urls.build_video_poster_url(public_id),
        video_url: urls.build_video_url(public_id, "mp4"),
    })
    .collect()
}

pub struct GalleryRepository {
    client: GalleryClient,
    featured_folder: String,
    fallback_videos: Vec<VideoItem>,
}

impl GalleryRepository {
    /// `fallback_videos` empty means the built-in showreel
    pub fn new(
        client: GalleryClient,
        featured_folder: impl Into<String>,
        fallback_videos: Vec<VideoItem>,
    ) -> Self {
        let fallback_videos = if fallback_videos.is_empty() {
            default_fallback_videos(client.urls())
        } else {
            fallback_videos
        };

        Self {
            client,
            featured_folder: featured_folder.into(),
            fallback_videos,
        }
    }

    pub fn client(&self) -> &GalleryClient {
        &self.client
    }

    pub async fn albums(&self) -> Result<Vec<Album>, FetchFailure> {
        self.client.list_albums().await
    }

    pub async fn photos(&self, folder: &str) -> Result<Vec<PhotoResource>, FetchFailure> {
        self.client.list_photos_in_folder(folder).await
    }

    pub fn cached_photos(&self) -> Option<Vec<PhotoResource>> {
        self.client.get_cached_photos()
    }

    /// Featured photos, or the main album when the featured folder is
    /// unavailable or empty.
    pub async fn featured_photos(&self) -> Result<Vec<PhotoResource>, FetchFailure> {
        match self.client.list_photos_in_folder(&self.featured_folder).await {
            Ok(photos) if !photos.is_empty() => return Ok(photos),
            Ok(_) => warn!(folder = %self.featured_folder, "Featured folder empty, using main album"),
            Err(e) => warn!(error = %e, "Featured folder unavailable, using main album"),
        }

        self.client
            .list_photos_in_folder(self.client.default_folder())
            .await
    }

    /// Videos for `folder`, or the fallback list on failure or empty result
    pub async fn videos(&self, folder: &str) -> Vec<VideoItem> {
        match self.client.list_videos_in_folder(folder).await {
            Ok(videos) if !videos.is_empty() => videos,
            Ok(_) => {
                warn!(folder = %folder, "Video folder empty, using fallback videos");
                self.fallback_videos.clone()
            }
            Err(e) => {
                warn!(error = %e, "Video listing failed, using fallback videos");
                self.fallback_videos.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{Transport, TransportResponse};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Answers by URL; unknown URLs get a 404
    struct RoutedTransport {
        routes: HashMap<String, (StatusCode, String)>,
    }

    #[async_trait]
    impl Transport for RoutedTransport {
        async fn get(&self, url: &str) -> Result<TransportResponse, FetchFailure> {
            let (status, body) = self
                .routes
                .get(url)
                .cloned()
                .unwrap_or((StatusCode::NOT_FOUND, String::new()));
            Ok(TransportResponse {
                status,
                body: body.into_bytes(),
            })
        }
    }

    fn repository(routes: &[(&str, StatusCode, &str)]) -> GalleryRepository {
        let transport = RoutedTransport {
            routes: routes
                .iter()
                .map(|(url, status, body)| (url.to_string(), (*status, body.to_string())))
                .collect(),
        };
        let client = GalleryClient::new(Arc::new(transport), CloudinaryUrls::new("demo"), "album library");
        GalleryRepository::new(client, "featured", Vec::new())
    }

    const MAIN: &str = "https://res.cloudinary.com/demo/image/list/album_library.json";
    const FEATURED: &str = "https://res.cloudinary.com/demo/image/list/featured.json";
    const FILMS: &str = "https://res.cloudinary.com/demo/video/list/films.json";

    const ONE_PHOTO: &str = r#"{"resources":[{"public_id":"album library/a","format":"jpg"}]}"#;
    const FEATURED_PHOTO: &str = r#"{"resources":[{"public_id":"featured/hero","format":"jpg"}]}"#;
    const EMPTY: &str = r#"{"resources":[]}"#;

    #[test]
    fn test_view_state_from_result() {
        let ready: ViewState<Vec<u8>> = ViewState::from_result(Ok::<_, FetchFailure>(vec![1]));
        assert_eq!(ready, ViewState::Ready(vec![1]));

        let empty: ViewState<Vec<u8>> = ViewState::from_result(Ok::<_, FetchFailure>(vec![]));
        assert_eq!(empty, ViewState::Empty);

        let failed: ViewState<Vec<u8>> = ViewState::from_result(Err(FetchFailure::new("u", "down")));
        assert_eq!(failed, ViewState::Failed("failed to fetch u: down".to_string()));

        assert_eq!(ViewState::<Vec<u8>>::default(), ViewState::Loading);
    }

    #[tokio::test]
    async fn test_featured_photos_preferred() {
        let repo = repository(&[
            (FEATURED, StatusCode::OK, FEATURED_PHOTO),
            (MAIN, StatusCode::OK, ONE_PHOTO),
        ]);
        let photos = repo.featured_photos().await.unwrap();
        assert_eq!(photos[0].public_id, "featured/hero");
    }

    #[tokio::test]
    async fn test_featured_falls_back_to_main_album() {
        let repo = repository(&[(FEATURED, StatusCode::OK, EMPTY), (MAIN, StatusCode::OK, ONE_PHOTO)]);
        let photos = repo.featured_photos().await.unwrap();
        assert_eq!(photos[0].public_id, "album library/a");

        let repo = repository(&[(MAIN, StatusCode::OK, ONE_PHOTO)]);
        let photos = repo.featured_photos().await.unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(repo.cached_photos().unwrap(), photos);
    }

    #[tokio::test]
    async fn test_featured_fails_when_main_album_fails() {
        let repo = repository(&[]);
        assert!(repo.featured_photos().await.is_err());
    }

    #[tokio::test]
    async fn test_videos_fall_back_on_failure_and_empty() {
        let failing = repository(&[]);
        let videos = failing.videos("films").await;
        assert_eq!(videos.len(), 3);
        assert_eq!(videos[0].title, "Wedding Highlights");

        let empty = repository(&[(FILMS, StatusCode::OK, EMPTY)]);
        assert_eq!(empty.videos("films").await, videos);
    }

    #[tokio::test]
    async fn test_videos_pass_through_when_present() {
        let repo = repository(&[(
            FILMS,
            StatusCode::OK,
            r#"{"resources":[{"public_id":"films/new_cut","format":"mov"}]}"#,
        )]);
        let videos = repo.videos("films").await;
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].public_id, "films/new_cut");
    }
}
