//! Catalog loading over HTTP
//!
//! Runs the HTTP catalog source against a local mock server.

use cadence_core::{CatalogSource, CoreError, MemoryStore, MediaEngine};
use cadence_playback::{
    HttpCatalogSource, Lifecycle, PlayerConfig, PlayerController, PlayerError, UnsupportedSpeech,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SONGS: &str = r#"[
    {"id": 1, "title": "Morning Light", "artist": "Aurora Lane", "filePath": "songs/1.mp3", "imagePath": "images/1.jpg"},
    {"id": 2, "title": "Night Drive", "artist": "The Static", "filePath": "songs/2.mp3", "imagePath": "images/2.jpg"}
]"#;

struct QuietEngine;

impl MediaEngine for QuietEngine {
    fn load(&mut self, _src: &str) {}
    fn play(&mut self) -> cadence_core::Result<()> {
        Ok(())
    }
    fn pause(&mut self) {}
    fn current_time(&self) -> f64 {
        0.0
    }
    fn set_current_time(&mut self, _seconds: f64) {}
    fn duration(&self) -> Option<f64> {
        None
    }
    fn volume(&self) -> f64 {
        1.0
    }
    fn set_volume(&mut self, _volume: f64) {}
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

async fn serve(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/player/data/songs.json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn page_source(server: &MockServer) -> HttpCatalogSource {
    let page = format!("{}/player/index.html", server.uri());
    HttpCatalogSource::relative_to(&page, "data/songs.json").unwrap()
}

#[tokio::test]
async fn fetches_catalog_relative_to_page() {
    init_tracing();
    let server = serve(200, SONGS).await;

    let catalog = page_source(&server).load().await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(1).map(|s| s.title.as_str()), Some("Night Drive"));
}

#[tokio::test]
async fn http_error_status_is_a_network_error() {
    init_tracing();
    let server = serve(404, "not found").await;

    let err = page_source(&server).load().await.unwrap_err();

    assert!(matches!(err, CoreError::Network(_)));
}

#[tokio::test]
async fn malformed_body_is_a_payload_error() {
    init_tracing();
    let server = serve(200, "<html>oops</html>").await;

    let err = page_source(&server).load().await.unwrap_err();

    assert!(matches!(err, CoreError::Payload(_)));
}

#[tokio::test]
async fn controller_initializes_from_server() {
    init_tracing();
    let server = serve(200, SONGS).await;
    let mut player = PlayerController::new(
        PlayerConfig::default(),
        Box::new(QuietEngine),
        Box::new(MemoryStore::new()),
        Box::new(UnsupportedSpeech),
    );

    player.initialize(&page_source(&server)).await.unwrap();

    assert_eq!(player.lifecycle(), Lifecycle::Ready);
    assert_eq!(player.playlist().len(), 2);
}

#[tokio::test]
async fn unreachable_server_fails_initialization() {
    init_tracing();
    let server = MockServer::start().await;
    let source = page_source(&server);
    drop(server);

    let mut player = PlayerController::new(
        PlayerConfig::default(),
        Box::new(QuietEngine),
        Box::new(MemoryStore::new()),
        Box::new(UnsupportedSpeech),
    );

    let err = player.initialize(&source).await.unwrap_err();

    assert!(matches!(err, PlayerError::Core(CoreError::Network(_))));
    assert_eq!(player.lifecycle(), Lifecycle::Failed);
    assert!(player.playlist().is_empty());
}
