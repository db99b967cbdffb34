use crate::{
    error::CatalogError,
    spotify::SpotifyClient,
    types::{ArtistProfile, RelatedArtistsResponse, SearchResponse, TopTracksResponse},
};

impl SpotifyClient {
    /// Searches the catalog for artists matching `name`.
    ///
    /// Calls `GET /search?q={name}&type=artist`. The name is passed through
    /// unchanged; reqwest takes care of the query encoding.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(SearchResponse)` - The `artists` page with its API `href` and items
    /// - `Err(CatalogError)` - Network, status or decoding failure
    ///
    /// # Example
    ///
    /// ```ignore
    /// let res = client.search_by_artist_name("Radiohead").await?;
    /// println!("{} artists from {}", res.artists.items.len(), res.artists.href);
    /// ```
    pub async fn search_by_artist_name(&self, name: &str) -> Result<SearchResponse, CatalogError> {
        let url = self.endpoint(&["search"])?;
        self.get_json(url, &[("q", name), ("type", "artist")])
            .await
    }

    /// Fetches an artist profile by catalog ID via `GET /artists/{id}`.
    pub async fn get_artist(&self, id: &str) -> Result<ArtistProfile, CatalogError> {
        let url = self.endpoint(&["artists", id])?;
        self.get_json(url, &[]).await
    }

    /// Fetches the artist's top tracks in the configured market.
    ///
    /// Calls `GET /artists/{id}/top-tracks?market={market}`; the endpoint
    /// rejects requests without a market.
    pub async fn get_artist_top_tracks(&self, id: &str) -> Result<TopTracksResponse, CatalogError> {
        let url = self.endpoint(&["artists", id, "top-tracks"])?;
        self.get_json(url, &[("market", self.market())]).await
    }

    pub async fn get_related_artists(
        &self,
        id: &str,
    ) -> Result<RelatedArtistsResponse, CatalogError> {
        let url = self.endpoint(&["artists", id, "related-artists"])?;
        self.get_json(url, &[]).await
    }
}
