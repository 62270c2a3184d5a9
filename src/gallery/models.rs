use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Image,
    Video,
}

/// A single uploaded asset as returned by the tag listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoResource {
    pub public_id: String,
    #[serde(default)]
    pub version: u64,
    pub format: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl PhotoResource {
    /// Width over height, 1.0 when the height is unknown
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f64 / self.height as f64
        }
    }

    /// Last path segment of the public id, used as a caption
    pub fn title(&self) -> &str {
        self.public_id
            .rsplit('/')
            .next()
            .unwrap_or(&self.public_id)
    }
}

/// Body of `GET /{cloud}/{image|video}/list/{tag}.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceListing {
    pub resources: Vec<PhotoResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub display_name: String,
    pub cover_url: String,
    pub photo_count: usize,
    pub folder_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    pub public_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
}

/// "album library" -> "Album Library"
pub fn display_name(folder: &str) -> String {
    folder
        .split(|c: char| c == ' ' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
