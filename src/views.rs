//! HTML views.
//!
//! Every page is an askama template compiled from `templates/`. Values are
//! HTML-escaped on render.

use askama::Template;
use axum::http::StatusCode;

use crate::{
    query::{ArtistDetails, SearchResult},
    types::{ArtistProfile, ArtistRow, TrackRow},
    utils::format_count,
};

#[derive(Template, Debug)]
#[template(path = "homepage.html")]
pub struct HomepageView {
    pub title: &'static str,
}

impl Default for HomepageView {
    fn default() -> Self {
        HomepageView { title: "sporlweb" }
    }
}

#[derive(Template, Debug)]
#[template(path = "search.html")]
pub struct SearchView {
    pub artist_name: String,
    pub results: Vec<ArtistRow>,
    pub api_url: String,
}

impl From<SearchResult> for SearchView {
    fn from(res: SearchResult) -> Self {
        SearchView {
            results: res.results.iter().map(ArtistRow::from).collect(),
            artist_name: res.artist_name,
            api_url: res.api_url,
        }
    }
}

#[derive(Template, Debug)]
#[template(path = "artist.html")]
pub struct ArtistView {
    pub artist: ArtistProfile,
    pub related_artists: Vec<ArtistRow>,
    pub image_url: String,
    pub tracks: Vec<TrackRow>,
    pub genres: String,
    pub followers: String,
}

impl From<ArtistDetails> for ArtistView {
    fn from(details: ArtistDetails) -> Self {
        let genres = details.artist.genres.join(", ");
        let followers = details
            .artist
            .followers
            .as_ref()
            .and_then(|f| f.total)
            .map(format_count)
            .unwrap_or_default();

        ArtistView {
            related_artists: details.related_artists.iter().map(ArtistRow::from).collect(),
            tracks: details.tracks.iter().map(TrackRow::from).collect(),
            image_url: details.image_url,
            artist: details.artist,
            genres,
            followers,
        }
    }
}

#[derive(Template, Debug)]
#[template(path = "error.html")]
pub struct ErrorView {
    pub status: u16,
    pub title: String,
    pub message: String,
    /// Underlying error text, empty unless debug mode is on.
    pub detail: String,
}

impl ErrorView {
    pub fn new(status: StatusCode, message: &str, detail: Option<String>) -> Self {
        ErrorView {
            status: status.as_u16(),
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            message: message.to_string(),
            detail: detail.unwrap_or_default(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "There is no page at this address.",
            None,
        )
    }
}
