/// Integration tests for the gallery client over real HTTP
#[allow(dead_code)]
#[path = "integration/mocks/mod.rs"]
mod mocks;

use mocks::{listing_body, setup_listing_mock, setup_status_mock};
use std::sync::Arc;
use std::time::Duration;
use studiofolio::config::CloudinaryConfig;
use studiofolio::gallery::{CloudinaryUrls, GalleryClient, HttpTransport, PhotoCache};
use studiofolio::repository::{GalleryRepository, ViewState};
use wiremock::MockServer;

const CLOUD: &str = "dujg9rmfh";
const MAIN_PATH: &str = "/dujg9rmfh/image/list/album_library.json";

fn client_for(server: &MockServer) -> GalleryClient {
    let config = CloudinaryConfig {
        base_url: server.uri(),
        ..CloudinaryConfig::default()
    };
    GalleryClient::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_list_photos_hits_normalized_listing_path() {
    let server = MockServer::start().await;
    setup_listing_mock(
        &server,
        MAIN_PATH,
        listing_body(&["album library/one", "album library/two"]),
        0,
        1,
    )
    .await;

    let client = client_for(&server);
    let photos = client.list_photos_in_folder("Album Library").await.unwrap();

    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].public_id, "album library/one");
    assert!((photos[0].aspect_ratio() - 1.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_cached_photos_need_no_second_request() {
    let server = MockServer::start().await;
    // Exactly one request; verified when the server drops
    setup_listing_mock(&server, MAIN_PATH, listing_body(&["album library/one"]), 0, 1).await;

    let client = client_for(&server);
    let fetched = client.list_photos_in_folder("album library").await.unwrap();

    for _ in 0..3 {
        assert_eq!(client.get_cached_photos().unwrap(), fetched);
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_http_500_is_failure_and_cache_stays_empty() {
    let server = MockServer::start().await;
    setup_status_mock(&server, MAIN_PATH, 500, r#"{"error":"boom"}"#).await;

    let client = client_for(&server);
    let result = client.list_photos_in_folder("album library").await;

    assert!(result.is_err());
    assert!(client.get_cached_photos().is_none());
}

#[tokio::test]
async fn test_malformed_json_is_failure() {
    let server = MockServer::start().await;
    setup_status_mock(&server, MAIN_PATH, 200, "<html>not json</html>").await;

    let client = client_for(&server);
    let err = client.list_photos_in_folder("album library").await.unwrap_err();

    assert!(err.url.ends_with("/dujg9rmfh/image/list/album_library.json"));
    assert!(client.get_cached_photos().is_none());
}

#[tokio::test]
async fn test_connection_refused_is_failure() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let transport = HttpTransport::new(Duration::from_secs(2)).unwrap();
    let client = GalleryClient::new(
        Arc::new(transport),
        CloudinaryUrls::with_base_url(uri, CLOUD),
        "album library",
    );

    assert!(client.list_albums().await.is_err());
    assert!(client.get_cached_photos().is_none());
}

#[tokio::test]
async fn test_cancelled_fetch_does_not_write_cache() {
    let server = MockServer::start().await;
    setup_listing_mock(&server, MAIN_PATH, listing_body(&["album library/slow"]), 2_000, 0..=1).await;

    let cache = Arc::new(PhotoCache::new());
    let client = client_for(&server).with_cache(cache.clone());

    let outcome = tokio::time::timeout(
        Duration::from_millis(100),
        client.list_photos_in_folder("album library"),
    )
    .await;

    assert!(outcome.is_err(), "fetch should have been cancelled");
    assert!(cache.get().is_none());
}

#[tokio::test]
async fn test_concurrent_cold_fetches_are_not_merged() {
    let server = MockServer::start().await;
    setup_listing_mock(&server, MAIN_PATH, listing_body(&["album library/one"]), 200, 2).await;

    let client = client_for(&server);
    let (first, second) = tokio::join!(
        client.list_photos_in_folder("album library"),
        client.list_photos_in_folder("album library"),
    );

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_albums_over_http() {
    let server = MockServer::start().await;
    setup_listing_mock(
        &server,
        MAIN_PATH,
        listing_body(&["album library/cover", "album library/b", "album library/c"]),
        0,
        1,
    )
    .await;

    let client = client_for(&server);
    let albums = client.list_albums().await.unwrap();

    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].photo_count, 3);
    assert_eq!(
        albums[0].cover_url,
        format!(
            "{}/dujg9rmfh/image/upload/c_fill,w_400,h_400,q_auto/album library/cover.jpg",
            server.uri()
        )
    );
    assert_eq!(client.get_cached_photos().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_albums_empty_folder() {
    let server = MockServer::start().await;
    setup_listing_mock(&server, MAIN_PATH, listing_body(&[]), 0, 1).await;

    let albums = client_for(&server).list_albums().await.unwrap();

    assert_eq!(albums[0].photo_count, 0);
    assert_eq!(albums[0].cover_url, "");
}

#[tokio::test]
async fn test_repository_videos_fallback_over_http() {
    let server = MockServer::start().await;
    setup_status_mock(&server, "/dujg9rmfh/video/list/films.json", 404, "").await;

    let repo = GalleryRepository::new(client_for(&server), "featured", Vec::new());
    let videos = repo.videos("films").await;

    assert_eq!(videos.len(), 3);
    assert!(videos.iter().all(|v| v.video_url.ends_with(".mp4")));
}

#[tokio::test]
async fn test_view_states_from_http_results() {
    let server = MockServer::start().await;
    setup_listing_mock(&server, "/dujg9rmfh/image/list/empty.json", listing_body(&[]), 0, 1).await;
    setup_status_mock(&server, "/dujg9rmfh/image/list/broken.json", 503, "").await;

    let client = client_for(&server);

    let empty = ViewState::from_result(client.list_photos_in_folder("empty").await);
    assert_eq!(empty, ViewState::Empty);

    let failed = ViewState::from_result(client.list_photos_in_folder("broken").await);
    assert!(matches!(failed, ViewState::Failed(message) if message.contains("503")));
}
