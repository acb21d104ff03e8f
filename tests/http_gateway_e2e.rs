//! End-to-end tests for the HTTP photo gateway
//!
//! These tests run the gateway against a wiremock server standing in for the
//! Typicode photo API.

mod common;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{photo_json, photos_json, TestApi};
use photo_gallery::domain::models::photo::{AlbumId, FetchParams, PhotoId};
use photo_gallery::domain::PhotoGateway;
use photo_gallery::infrastructure::driven_adapters::HttpPhotoGateway;
use photo_gallery::shared::errors::GatewayError;

// ============================================================================
// GET /photos
// ============================================================================

#[tokio::test]
async fn test_fetch_photos_sends_limit_and_maps_payload() {
    let api = TestApi::new().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .and(query_param("_limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(photos_json(3, 1)))
        .expect(1)
        .mount(&api.server)
        .await;

    let photos = api
        .gateway
        .fetch_photos(&FetchParams::with_limit(3))
        .await
        .unwrap();

    assert_eq!(photos.len(), 3);
    assert_eq!(photos[0].id(), PhotoId::new(1));
    assert_eq!(photos[2].id(), PhotoId::new(3));
    assert_eq!(photos[0].album_id(), AlbumId::new(1));
    assert_eq!(photos[0].title(), "photo 1");
    assert_eq!(photos[0].url(), "https://via.placeholder.com/600/000001");
    assert_eq!(photos[0].thumbnail_url(), "https://via.placeholder.com/150/000001");
}

#[tokio::test]
async fn test_fetch_photos_translates_error_status() {
    let api = TestApi::new().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&api.server)
        .await;

    let err = api
        .gateway
        .fetch_photos(&FetchParams::with_limit(3))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        GatewayError::Status {
            status: 500,
            body: "upstream exploded".to_string()
        }
    );
    assert_eq!(err.to_string(), "HTTP 500: upstream exploded");
}

#[tokio::test]
async fn test_fetch_photos_reports_unreadable_error_body() {
    let gateway = HttpPhotoGateway::new(&common::truncated_error_url().await).unwrap();

    let err = gateway
        .fetch_photos(&FetchParams::with_limit(3))
        .await
        .unwrap_err();

    match err {
        GatewayError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.starts_with("<unreadable body:"), "unexpected body {body:?}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_photos_rejects_malformed_payload() {
    let api = TestApi::new().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "photos": [] })))
        .mount(&api.server)
        .await;

    let err = api
        .gateway
        .fetch_photos(&FetchParams::with_limit(3))
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Decode(_)));
}

// ============================================================================
// GET /photos/{id}
// ============================================================================

#[tokio::test]
async fn test_fetch_photo_by_id() {
    let api = TestApi::new().await;
    Mock::given(method("GET"))
        .and(path("/photos/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(photo_json(7, 1)))
        .expect(1)
        .mount(&api.server)
        .await;

    let photo = api.gateway.fetch_photo(PhotoId::new(7)).await.unwrap();

    assert_eq!(photo.id(), PhotoId::new(7));
    assert_eq!(photo.title(), "photo 7");
}

#[tokio::test]
async fn test_fetch_photo_not_found_keeps_status_and_body() {
    let api = TestApi::new().await;
    Mock::given(method("GET"))
        .and(path("/photos/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .mount(&api.server)
        .await;

    let err = api.gateway.fetch_photo(PhotoId::new(9999)).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err,
        GatewayError::Status {
            status: 404,
            body: "{}".to_string()
        }
    );
}

#[tokio::test]
async fn test_fetch_photo_does_not_send_limit() {
    let api = TestApi::new().await;
    Mock::given(method("GET"))
        .and(path("/photos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(photo_json(1, 1)))
        .mount(&api.server)
        .await;

    api.gateway.fetch_photo(PhotoId::new(1)).await.unwrap();

    let requests = api.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

// ============================================================================
// GET /albums/{albumId}/photos
// ============================================================================

#[tokio::test]
async fn test_fetch_photos_by_album_id() {
    let api = TestApi::new().await;
    Mock::given(method("GET"))
        .and(path("/albums/4/photos"))
        .and(query_param("_limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(photos_json(2, 4)))
        .expect(1)
        .mount(&api.server)
        .await;

    let photos = api
        .gateway
        .fetch_photos_by_album_id(AlbumId::new(4), &FetchParams::with_limit(2))
        .await
        .unwrap();

    assert_eq!(photos.len(), 2);
    assert!(photos.iter().all(|p| p.album_id() == AlbumId::new(4)));
}

#[tokio::test]
async fn test_fetch_photos_by_album_id_translates_error_status() {
    let api = TestApi::new().await;
    Mock::given(method("GET"))
        .and(path("/albums/4/photos"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&api.server)
        .await;

    let err = api
        .gateway
        .fetch_photos_by_album_id(AlbumId::new(4), &FetchParams::with_limit(2))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
}

// ============================================================================
// Base URL handling
// ============================================================================

#[tokio::test]
async fn test_routes_are_appended_to_base_path() {
    let api = TestApi::with_prefix("/api/").await;
    Mock::given(method("GET"))
        .and(path("/api/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(photos_json(1, 1)))
        .expect(1)
        .mount(&api.server)
        .await;

    let photos = api
        .gateway
        .fetch_photos(&FetchParams::with_limit(1))
        .await
        .unwrap();

    assert_eq!(photos.len(), 1);
}

#[tokio::test]
async fn test_unreachable_service_is_a_request_error() {
    let gateway = HttpPhotoGateway::new(&common::closed_port_url()).unwrap();

    let err = gateway
        .fetch_photos(&FetchParams::with_limit(1))
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Request(_)));
    assert_eq!(err.status(), None);
}

#[test]
fn test_invalid_base_url_fails_before_any_request() {
    let err = HttpPhotoGateway::new("")
        .err()
        .unwrap();

    assert!(err.is_configuration());
}
