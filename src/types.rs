use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

#[derive(Debug, Clone)]
pub struct Session {
    pub client_id: String,
    pub redirect_uri: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub has_subscription: bool,
}

impl Session {
    pub fn new(client_id: String, redirect_uri: String) -> Self {
        Session {
            client_id,
            redirect_uri,
            username: None,
            password: None,
            access_token: None,
            refresh_token: None,
            has_subscription: false,
        }
    }

    pub fn with_login(mut self, username: String, password: String) -> Self {
        self.username = Some(username);
        self.password = Some(password);
        self
    }

    pub fn from_stored(
        client_id: String,
        redirect_uri: String,
        stored: &StoredCredentials,
    ) -> Self {
        Session {
            client_id,
            redirect_uri,
            username: stored.username.clone(),
            password: stored.password.clone(),
            access_token: stored.access_token.clone(),
            refresh_token: stored.refresh_token.clone(),
            has_subscription: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub obtained_at: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreObject {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: u64,
    #[serde(default)]
    pub sample_url: String,
    #[serde(default)]
    pub length_ms: u64,
    pub release: ReleaseObject,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseObject {
    pub name: String,
    #[serde(default)]
    pub image: ImageObject,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageObject {
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistObject {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEntryObject {
    pub id: u64,
    pub track: TrackObject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration_ms: u64,
    pub sample_url: String,
    pub artwork_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistTrack {
    pub entry_id: String,
    pub track: Track,
}

#[derive(Debug, Clone)]
pub enum CuratedListing {
    Playlists(Vec<Playlist>),
    Tracks(Vec<PlaylistTrack>),
}

impl From<GenreObject> for Genre {
    fn from(genre: GenreObject) -> Self {
        Genre {
            id: genre.id.to_string(),
            name: genre.name,
            url: genre.url,
        }
    }
}

impl From<TrackObject> for Track {
    fn from(track: TrackObject) -> Self {
        let TrackObject {
            id,
            sample_url,
            length_ms,
            release,
            artists,
        } = track;
        Track {
            id: id.to_string(),
            title: release.name,
            artist: artists
                .into_iter()
                .next()
                .map(|artist| artist.name)
                .unwrap_or_default(),
            duration_ms: length_ms,
            sample_url,
            artwork_url: release.image.uri,
        }
    }
}

impl From<PlaylistObject> for Playlist {
    fn from(playlist: PlaylistObject) -> Self {
        Playlist {
            id: playlist.id.to_string(),
            title: playlist.name,
        }
    }
}

impl From<PlaylistEntryObject> for PlaylistTrack {
    fn from(entry: PlaylistEntryObject) -> Self {
        PlaylistTrack {
            entry_id: entry.id.to_string(),
            track: Track::from(entry.track),
        }
    }
}

#[derive(Tabled)]
pub struct MediaTableRow {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: String,
}

impl From<&Track> for MediaTableRow {
    fn from(track: &Track) -> Self {
        MediaTableRow {
            id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            duration: utils::format_duration(track.duration_ms),
        }
    }
}

impl From<&Playlist> for MediaTableRow {
    fn from(playlist: &Playlist) -> Self {
        MediaTableRow {
            id: playlist.id.clone(),
            title: playlist.title.clone(),
            artist: String::new(),
            duration: utils::format_duration(0),
        }
    }
}

impl From<&Genre> for MediaTableRow {
    fn from(genre: &Genre) -> Self {
        MediaTableRow {
            id: genre.id.clone(),
            title: genre.name.clone(),
            artist: String::new(),
            duration: utils::format_duration(0),
        }
    }
}
