use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::client::BeatportClient;
use super::endpoints::{self, CollectionEndpoint};
use crate::error::{ApiError, ApiResult};
use crate::types::{
    CuratedListing, Genre, GenreObject, Playlist, PlaylistEntryObject, PlaylistObject,
    PlaylistTrack, Track, TrackObject,
};

impl BeatportClient {
    /// Lists the catalog genres.
    pub async fn genres(&mut self, reset: bool) -> ApiResult<Vec<Genre>> {
        let items = self
            .collection_request(&endpoints::GENRES, &[], reset)
            .await?;
        Ok(parse_items::<GenreObject>(items)?
            .into_iter()
            .map(Genre::from)
            .collect())
    }

    /// Lists the tracks of a genre.
    pub async fn genre_tracks(&mut self, genre_id: &str, reset: bool) -> ApiResult<Vec<Track>> {
        self.tracks(&endpoints::GENRE_TRACKS, genre_id, reset).await
    }

    /// Lists the top-100 chart of a genre.
    pub async fn top_100(&mut self, genre_id: &str, reset: bool) -> ApiResult<Vec<Track>> {
        self.tracks(&endpoints::GENRE_TOP_100, genre_id, reset)
            .await
    }

    async fn tracks(
        &mut self,
        endpoint: &CollectionEndpoint,
        genre_id: &str,
        reset: bool,
    ) -> ApiResult<Vec<Track>> {
        let items = self.collection_request(endpoint, &[genre_id], reset).await?;
        Ok(parse_items::<TrackObject>(items)?
            .into_iter()
            .map(Track::from)
            .collect())
    }

    /// Searches the catalog for tracks; the query is percent-encoded.
    pub async fn search(&mut self, query: &str, reset: bool) -> ApiResult<Vec<Track>> {
        let query = urlencoding::encode(query).into_owned();
        let items = self
            .collection_request(&endpoints::SEARCH, &[&query], reset)
            .await?;
        Ok(parse_items::<TrackObject>(items)?
            .into_iter()
            .map(Track::from)
            .collect())
    }

    /// Browses the curated playlist tree.
    ///
    /// A path without a separator is a genre id and lists the curated
    /// playlists of that genre. A path containing a separator addresses a
    /// playlist by the suffix after the last `/` and lists its tracks.
    pub async fn curated_playlists(
        &mut self,
        path: &str,
        reset: bool,
    ) -> ApiResult<CuratedListing> {
        match path.rsplit_once('/') {
            None => Ok(CuratedListing::Playlists(
                self.playlists(&endpoints::CURATED_PLAYLISTS, &[path], reset)
                    .await?,
            )),
            Some((_, playlist_id)) => Ok(CuratedListing::Tracks(
                self.playlist_entries(&endpoints::CURATED_PLAYLIST_TRACKS, playlist_id, reset)
                    .await?,
            )),
        }
    }

    /// Lists the playlists of the authenticated account.
    pub async fn my_playlists(&mut self, reset: bool) -> ApiResult<Vec<Playlist>> {
        self.playlists(&endpoints::MY_PLAYLISTS, &[], reset).await
    }

    /// Lists the tracks of one account playlist, including the playlist
    /// entry ids used for removal.
    pub async fn playlist_tracks(
        &mut self,
        playlist_id: &str,
        reset: bool,
    ) -> ApiResult<Vec<PlaylistTrack>> {
        self.playlist_entries(&endpoints::PLAYLIST_TRACKS, playlist_id, reset)
            .await
    }

    async fn playlists(
        &mut self,
        endpoint: &CollectionEndpoint,
        args: &[&str],
        reset: bool,
    ) -> ApiResult<Vec<Playlist>> {
        let items = self.collection_request(endpoint, args, reset).await?;
        Ok(parse_items::<PlaylistObject>(items)?
            .into_iter()
            .map(Playlist::from)
            .collect())
    }

    async fn playlist_entries(
        &mut self,
        endpoint: &CollectionEndpoint,
        playlist_id: &str,
        reset: bool,
    ) -> ApiResult<Vec<PlaylistTrack>> {
        let items = self
            .collection_request(endpoint, &[playlist_id], reset)
            .await?;
        Ok(parse_items::<PlaylistEntryObject>(items)?
            .into_iter()
            .map(PlaylistTrack::from)
            .collect())
    }

    /// Adds tracks to an account playlist.
    pub async fn add_playlist_tracks(
        &mut self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> ApiResult<()> {
        let body = json!({ "track_ids": track_ids }).to_string();
        self.action_request(&endpoints::ADD_PLAYLIST_TRACKS, &[playlist_id], Some(body))
            .await?;
        Ok(())
    }

    /// Removes one entry from an account playlist.
    pub async fn remove_playlist_track(
        &mut self,
        playlist_id: &str,
        entry_id: &str,
    ) -> ApiResult<()> {
        self.action_request(
            &endpoints::REMOVE_PLAYLIST_TRACK,
            &[playlist_id, entry_id],
            None,
        )
        .await?;
        Ok(())
    }

    /// Resolves the full stream URL of a track.
    ///
    /// Only succeeds for accounts with an active subscription; any denial by
    /// the download-resolution endpoint surfaces as
    /// [`ApiError::NotStreamable`]. Callers without a subscription use the
    /// track's `sample_url` instead.
    pub async fn stream_url(&mut self, track_id: &str) -> ApiResult<String> {
        let response = match self
            .action_request(&endpoints::TRACK_DOWNLOAD, &[track_id], None)
            .await
        {
            Ok(response) => response,
            Err(ApiError::Http { .. }) => {
                return Err(ApiError::NotStreamable(track_id.to_string()));
            }
            Err(e) => return Err(e),
        };
        if response.status != 200 {
            return Err(ApiError::NotStreamable(track_id.to_string()));
        }

        let page: Value = serde_json::from_str(&response.body)?;
        page.get("location")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ApiError::UnexpectedResponse("download resolution carries no location".to_string())
            })
    }
}

fn parse_items<T: DeserializeOwned>(items: Vec<Value>) -> ApiResult<Vec<T>> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ApiError::from))
        .collect()
}
