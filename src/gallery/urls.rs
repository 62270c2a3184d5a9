//! Delivery and listing URLs for the Cloudinary asset host.
//!
//! These strings must stay byte-for-byte compatible with what the host
//! serves; rendering code builds display URLs from a [`PhotoResource`]
//! without another network round trip.

use crate::gallery::models::PhotoResource;

pub const DEFAULT_BASE_URL: &str = "https://res.cloudinary.com";

/// Thumbnail used for album covers in listing screens
pub const ALBUM_COVER_TRANSFORMATION: &str = "c_fill,w_400,h_400,q_auto";
/// Thumbnail used by the resource-level helper (always adds `f_auto`)
pub const THUMBNAIL_TRANSFORMATION: &str = "c_fill,w_400,h_400,q_auto,f_auto";
pub const FULL_TRANSFORMATION: &str = "q_auto,f_auto";
pub const VIDEO_TRANSFORMATION: &str = "q_auto";
/// First frame, cropped to the grid cell
pub const VIDEO_POSTER_TRANSFORMATION: &str = "c_fill,w_400,h_400,q_auto,so_0";

/// Folder name to listing tag: lower-cased, spaces become `_`
pub fn folder_tag(folder: &str) -> String {
    folder.to_lowercase().replace(' ', "_")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinaryUrls {
    base_url: String,
    cloud_name: String,
}

impl CloudinaryUrls {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, cloud_name)
    }

    pub fn with_base_url(base_url: impl Into<String>, cloud_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cloud_name: cloud_name.into(),
        }
    }

    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }

    /// `{base}/{cloud}/image/list/{tag}.json`
    pub fn listing_url(&self, folder: &str) -> String {
        format!(
            "{}/{}/image/list/{}.json",
            self.base_url,
            self.cloud_name,
            folder_tag(folder)
        )
    }

    /// `{base}/{cloud}/video/list/{tag}.json`
    pub fn video_listing_url(&self, folder: &str) -> String {
        format!(
            "{}/{}/video/list/{}.json",
            self.base_url,
            self.cloud_name,
            folder_tag(folder)
        )
    }

    /// Image delivery URL; an empty transformation drops its path segment
    pub fn build_image_url(&self, public_id: &str, format: &str, transformation: &str) -> String {
        self.build_delivery_url("image", public_id, format, transformation)
    }

    pub fn build_thumbnail_url(&self, public_id: &str, format: &str) -> String {
        self.build_image_url(public_id, format, THUMBNAIL_TRANSFORMATION)
    }

    pub fn build_album_cover_url(&self, public_id: &str, format: &str) -> String {
        self.build_image_url(public_id, format, ALBUM_COVER_TRANSFORMATION)
    }

    pub fn build_full_url(&self, public_id: &str, format: &str) -> String {
        self.build_image_url(public_id, format, FULL_TRANSFORMATION)
    }

    pub fn build_video_url(&self, public_id: &str, format: &str) -> String {
        self.build_delivery_url("video", public_id, format, VIDEO_TRANSFORMATION)
    }

    pub fn build_video_poster_url(&self, public_id: &str) -> String {
        self.build_delivery_url("video", public_id, "jpg", VIDEO_POSTER_TRANSFORMATION)
    }

    pub fn thumbnail_for(&self, photo: &PhotoResource) -> String {
        self.build_thumbnail_url(&photo.public_id, &photo.format)
    }

    pub fn full_for(&self, photo: &PhotoResource) -> String {
        self.build_full_url(&photo.public_id, &photo.format)
    }

    fn build_delivery_url(
        &self,
        resource: &str,
        public_id: &str,
        format: &str,
        transformation: &str,
    ) -> String {
        if transformation.is_empty() {
            format!(
                "{}/{}/{}/upload/{}.{}",
                self.base_url, self.cloud_name, resource, public_id, format
            )
        } else {
            format!(
                "{}/{}/{}/upload/{}/{}.{}",
                self.base_url, self.cloud_name, resource, transformation, public_id, format
            )
        }
    }
}
