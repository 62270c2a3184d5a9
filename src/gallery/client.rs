use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::CloudinaryConfig;
use crate::error::{AppError, FetchFailure};
use crate::gallery::cache::PhotoCache;
use crate::gallery::models::{display_name, Album, PhotoResource, ResourceListing, VideoItem};
use crate::gallery::transport::{HttpTransport, Transport};
use crate::gallery::urls::CloudinaryUrls;

/// Client for the asset host's tag listing endpoints.
///
/// Reports what the host returned and nothing else: no retries, no
/// fallbacks, no request merging between concurrent callers. Recovery
/// policy belongs to [`crate::repository::GalleryRepository`].
pub struct GalleryClient {
    transport: Arc<dyn Transport>,
    urls: CloudinaryUrls,
    cache: Arc<PhotoCache>,
    default_folder: String,
}

impl GalleryClient {
    /// Creates a client with its own empty cache.
    pub fn new(
        transport: Arc<dyn Transport>,
        urls: CloudinaryUrls,
        default_folder: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            urls,
            cache: Arc::new(PhotoCache::new()),
            default_folder: default_folder.into(),
        }
    }

    /// Creates a reqwest-backed client from configuration.
    pub fn from_config(config: &CloudinaryConfig) -> Result<Self, AppError> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_seconds))?;
        Ok(Self::new(
            Arc::new(transport),
            CloudinaryUrls::with_base_url(&config.base_url, &config.cloud_name),
            &config.default_folder,
        ))
    }

    /// Shares an existing cache instead of the client's own.
    pub fn with_cache(mut self, cache: Arc<PhotoCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn urls(&self) -> &CloudinaryUrls {
        &self.urls
    }

    pub fn default_folder(&self) -> &str {
        &self.default_folder
    }

    /// The default folder wrapped as exactly one album.
    #[instrument(skip(self), fields(folder = %self.default_folder))]
    pub async fn list_albums(&self) -> Result<Vec<Album>, FetchFailure> {
        let photos = self.list_photos_in_folder(&self.default_folder).await?;

        let cover_url = photos
            .first()
            .map(|photo| self.urls.build_album_cover_url(&photo.public_id, &photo.format))
            .unwrap_or_default();

        Ok(vec![Album {
            name: self.default_folder.clone(),
            display_name: display_name(&self.default_folder),
            cover_url,
            photo_count: photos.len(),
            folder_path: self.default_folder.clone(),
        }])
    }

    /// Photos tagged with `folder`. A success replaces the cached list.
    #[instrument(skip(self))]
    pub async fn list_photos_in_folder(&self, folder: &str) -> Result<Vec<PhotoResource>, FetchFailure> {
        let url = self.urls.listing_url(folder);
        let photos = self.fetch_listing("photos", &url).await?;

        self.cache.set(photos.clone());
        info!(count = photos.len(), "Fetched photo listing");

        Ok(photos)
    }

    /// Videos tagged with `folder`, as ready-to-render items.
    #[instrument(skip(self))]
    pub async fn list_videos_in_folder(&self, folder: &str) -> Result<Vec<VideoItem>, FetchFailure> {
        let url = self.urls.video_listing_url(folder);
        let resources = self.fetch_listing("videos", &url).await?;

        let videos: Vec<VideoItem> = resources
            .iter()
            .map(|resource| VideoItem {
                public_id: resource.public_id.clone(),
                title: resource.title().to_string(),
                thumbnail_url: self.urls.build_video_poster_url(&resource.public_id),
                video_url: self.urls.build_video_url(&resource.public_id, &resource.format),
            })
            .collect();

        info!(count = videos.len(), "Fetched video listing");
        Ok(videos)
    }

    /// Last successful photo listing, without touching the network.
    pub fn get_cached_photos(&self) -> Option<Vec<PhotoResource>> {
        self.cache.get()
    }

    async fn fetch_listing(&self, kind: &'static str, url: &str) -> Result<Vec<PhotoResource>, FetchFailure> {
        debug!(url = %url, "Requesting resource listing");

        let result = self.try_fetch_listing(url).await;
        match &result {
            Ok(_) => crate::metrics::record_fetch(kind, "success"),
            Err(e) => {
                crate::metrics::record_fetch(kind, "failure");
                warn!(error = %e, "Resource listing failed");
            }
        }
        result
    }

    async fn try_fetch_listing(&self, url: &str) -> Result<Vec<PhotoResource>, FetchFailure> {
        let response = self.transport.get(url).await?;

        if !response.status.is_success() {
            return Err(FetchFailure::status(url, response.status));
        }

        let listing: ResourceListing =
            serde_json::from_slice(&response.body).map_err(|e| FetchFailure::new(url, e))?;

        Ok(listing.resources)
    }
}
