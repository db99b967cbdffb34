//! # Spotify Integration Module
//!
//! This module is the integration layer between sporlweb and the Spotify Web
//! API. It covers the four read-only catalog lookups the web pages need and
//! the client-credentials authentication they rely on.
//!
//! ## Architecture
//!
//! ```text
//! Route Handlers (api)
//!          ↓
//! Query Adapter (query)
//!          ↓
//! CatalogClient trait
//!          ↓
//! SpotifyClient (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! Handlers only ever see the [`CatalogClient`] trait, so tests can swap the
//! HTTP client for an in-memory stub.
//!
//! ## API Coverage
//!
//! - `GET /search?type=artist` - Artist search by free-text name
//! - `GET /artists/{id}` - Artist profile
//! - `GET /artists/{id}/top-tracks` - Top tracks in a market
//! - `GET /artists/{id}/related-artists` - Similar artists
//! - `POST /api/token` - Client-credentials token grant
//!
//! ## Error Handling
//!
//! Every failure is a [`CatalogError`]. Status codes are translated into
//! distinct kinds (not found, rate limited, unauthorized, other upstream
//! errors), transport failures become `Network`, and bodies that do not match
//! the typed contract in [`crate::types`] become `Malformed`. Nothing is
//! retried.

use async_trait::async_trait;

use crate::{
    error::CatalogError,
    types::{ArtistProfile, RelatedArtistsResponse, SearchResponse, TopTracksResponse},
};

pub mod artists;
pub mod auth;
mod client;

pub use client::{SpotifyClient, classify_status};

/// The catalog operations the web front-end depends on.
///
/// Implemented by [`SpotifyClient`] for production and by stubs in tests.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn search_by_artist_name(&self, name: &str) -> Result<SearchResponse, CatalogError>;

    async fn get_artist(&self, id: &str) -> Result<ArtistProfile, CatalogError>;

    async fn get_artist_top_tracks(&self, id: &str) -> Result<TopTracksResponse, CatalogError>;

    async fn get_related_artists(&self, id: &str) -> Result<RelatedArtistsResponse, CatalogError>;
}

#[async_trait]
impl CatalogClient for SpotifyClient {
    async fn search_by_artist_name(&self, name: &str) -> Result<SearchResponse, CatalogError> {
        SpotifyClient::search_by_artist_name(self, name).await
    }

    async fn get_artist(&self, id: &str) -> Result<ArtistProfile, CatalogError> {
        SpotifyClient::get_artist(self, id).await
    }

    async fn get_artist_top_tracks(&self, id: &str) -> Result<TopTracksResponse, CatalogError> {
        SpotifyClient::get_artist_top_tracks(self, id).await
    }

    async fn get_related_artists(&self, id: &str) -> Result<RelatedArtistsResponse, CatalogError> {
        SpotifyClient::get_related_artists(self, id).await
    }
}
