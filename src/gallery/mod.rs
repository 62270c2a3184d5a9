pub mod cache;
pub mod client;
pub mod models;
pub mod transport;
pub mod urls;

pub use cache::PhotoCache;
pub use client::GalleryClient;
pub use models::{Album, PhotoResource, ResourceListing, ResourceType, VideoItem};
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use urls::CloudinaryUrls;
