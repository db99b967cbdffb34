use reqwest::StatusCode;
use sporlweb::{
    config::resolve_addr,
    error::{CatalogError, ConfigError},
    query::{ArtistDetails, SearchResult},
    spotify::classify_status,
    types::{
        ArtistProfile, ArtistRow, ArtistSummary, Image, SearchResponse, TopTracksResponse, Track,
        TrackRow,
    },
    utils::*,
    views::{ArtistView, SearchView},
};

#[test]
fn test_search_response_minimal_shape() {
    let res: SearchResponse =
        serde_json::from_str(r#"{"artists":{"href":"H","items":[{"name":"Radiohead"}]}}"#).unwrap();

    assert_eq!(res.artists.href, "H");
    assert_eq!(res.artists.items.len(), 1);
    assert_eq!(res.artists.items[0].name, "Radiohead");
    assert!(res.artists.items[0].id.is_empty());
    assert!(res.artists.items[0].images.is_empty());
}

#[test]
fn test_search_response_missing_items_is_error() {
    let res = serde_json::from_str::<SearchResponse>(r#"{"artists":{"href":"H"}}"#);
    assert!(res.is_err());

    let res = serde_json::from_str::<SearchResponse>(r#"{"tracks":{}}"#);
    assert!(res.is_err());
}

#[test]
fn test_artist_profile_absent_images_defaults_to_empty() {
    let artist: ArtistProfile = serde_json::from_str(r#"{"id":"123","name":"Nobody"}"#).unwrap();

    assert!(artist.images.is_empty());
    assert!(artist.genres.is_empty());
    assert_eq!(artist.followers, None);
}

#[test]
fn test_top_tracks_ignore_unknown_fields() {
    let res: TopTracksResponse = serde_json::from_str(
        r#"{"tracks":[{"name":"T1","explicit":false,"disc_number":1,"album":{"name":"A","album_type":"album"}}]}"#,
    )
    .unwrap();

    assert_eq!(res.tracks.len(), 1);
    assert_eq!(res.tracks[0].album.as_ref().unwrap().name, "A");
}

#[test]
fn test_select_image_url() {
    let images = vec![
        Image {
            url: "first".to_string(),
            height: None,
            width: None,
        },
        Image {
            url: "second".to_string(),
            height: None,
            width: None,
        },
    ];

    assert_eq!(select_image_url(&images, "placeholder"), "first");
    assert_eq!(select_image_url(&[], "placeholder"), "placeholder");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(238_640), "3:58");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_format_count() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_000), "1,000");
    assert_eq!(format_count(9_123_456), "9,123,456");
}

#[test]
fn test_artist_row_keeps_three_genres() {
    let artist = ArtistSummary {
        id: "id".to_string(),
        name: "Name".to_string(),
        genres: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        ..Default::default()
    };

    let row = ArtistRow::from(&artist);
    assert_eq!(row.genres, "a, b, c");
}

#[test]
fn test_track_row_without_optional_fields() {
    let row = TrackRow::from(&Track {
        name: "T1".to_string(),
        ..Default::default()
    });

    assert_eq!(row.name, "T1");
    assert!(row.album.is_empty());
    assert!(row.duration.is_empty());
    assert!(row.preview_url.is_empty());
}

#[test]
fn test_search_view_keeps_name_verbatim() {
    let view = SearchView::from(SearchResult {
        artist_name: "  the  NATIONAL ".to_string(),
        api_url: "H".to_string(),
        results: vec![],
    });

    assert_eq!(view.artist_name, "  the  NATIONAL ");
    assert_eq!(view.api_url, "H");
    assert!(view.results.is_empty());
}

#[test]
fn test_artist_view_fields() {
    let view = ArtistView::from(ArtistDetails {
        artist: ArtistProfile {
            name: "X".to_string(),
            genres: vec!["rock".into(), "pop".into()],
            ..Default::default()
        },
        image_url: "img".to_string(),
        tracks: vec![Track {
            name: "T1".to_string(),
            ..Default::default()
        }],
        related_artists: vec![],
    });

    assert_eq!(view.image_url, "img");
    assert_eq!(view.tracks.len(), 1);
    assert_eq!(view.genres, "rock, pop");
    assert!(view.followers.is_empty());
    assert!(view.related_artists.is_empty());
}

#[test]
fn test_classify_status() {
    assert!(matches!(
        classify_status(StatusCode::NOT_FOUND, None, "u", ""),
        CatalogError::NotFound(_)
    ));
    assert!(matches!(
        classify_status(StatusCode::TOO_MANY_REQUESTS, Some(5), "u", ""),
        CatalogError::RateLimited {
            retry_after: Some(5)
        }
    ));
    assert!(matches!(
        classify_status(StatusCode::FORBIDDEN, None, "u", ""),
        CatalogError::Unauthorized(403)
    ));
    assert!(matches!(
        classify_status(StatusCode::BAD_GATEWAY, None, "u", "oops"),
        CatalogError::Upstream { status: 502, .. }
    ));
}

#[tokio::test]
async fn test_resolve_addr() {
    let addr = resolve_addr("127.0.0.1:5000", None, None).await.unwrap();
    assert_eq!(addr.to_string(), "127.0.0.1:5000");

    let addr = resolve_addr("127.0.0.1:5000", Some("0.0.0.0".to_string()), Some(8080))
        .await
        .unwrap();
    assert_eq!(addr.to_string(), "0.0.0.0:8080");

    let addr = resolve_addr("127.0.0.1:5000", Some("::1".to_string()), None)
        .await
        .unwrap();
    assert_eq!(addr.to_string(), "[::1]:5000");

    // no port
    assert!(matches!(
        resolve_addr("localhost", None, None).await,
        Err(ConfigError::InvalidAddress(_))
    ));
}

#[tokio::test]
async fn test_resolve_addr_accepts_host_names() {
    let addr = resolve_addr("localhost:5000", None, None).await.unwrap();
    assert!(addr.ip().is_loopback());
    assert_eq!(addr.port(), 5000);

    let addr = resolve_addr("127.0.0.1:5000", Some("localhost".to_string()), Some(8080))
        .await
        .unwrap();
    assert!(addr.ip().is_loopback());
    assert_eq!(addr.port(), 8080);
}

#[test]
fn test_app_error_response_hides_detail() {
    use axum::response::IntoResponse;
    use sporlweb::error::AppError;

    let err = AppError::from(CatalogError::Upstream {
        status: 500,
        message: "secret stack trace".to_string(),
    });
    assert_eq!(err.public_message(), "The music catalog returned an unexpected response.");

    let res = err.into_response();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
}
