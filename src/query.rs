//! Query adapter between the route handlers and the catalog.
//!
//! Each function issues the catalog calls one page needs and reshapes the
//! nested responses into the named values the views render. Results live for
//! a single request.

use crate::{
    error::CatalogError,
    spotify::CatalogClient,
    types::{ArtistProfile, ArtistSummary, Track},
    utils::select_image_url,
};

/// Data behind the search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The name exactly as requested, without normalization.
    pub artist_name: String,
    pub api_url: String,
    pub results: Vec<ArtistSummary>,
}

/// Data behind the artist page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetails {
    pub artist: ArtistProfile,
    pub image_url: String,
    pub tracks: Vec<Track>,
    pub related_artists: Vec<ArtistSummary>,
}

pub async fn search(catalog: &dyn CatalogClient, name: &str) -> Result<SearchResult, CatalogError> {
    let res = catalog.search_by_artist_name(name).await?;

    Ok(SearchResult {
        artist_name: name.to_string(),
        api_url: res.artists.href,
        results: res.artists.items,
    })
}

/// Loads profile, top tracks and related artists for `id`.
///
/// The three lookups are independent and run concurrently. The first failure
/// wins and nothing partial is returned. Empty track or related-artist lists
/// are valid results.
pub async fn artist(
    catalog: &dyn CatalogClient,
    id: &str,
    placeholder_image_url: &str,
) -> Result<ArtistDetails, CatalogError> {
    let (artist, top_tracks, related) = tokio::try_join!(
        catalog.get_artist(id),
        catalog.get_artist_top_tracks(id),
        catalog.get_related_artists(id),
    )?;

    let image_url = select_image_url(&artist.images, placeholder_image_url);

    Ok(ArtistDetails {
        artist,
        image_url,
        tracks: top_tracks.tracks,
        related_artists: related.artists,
    })
}
