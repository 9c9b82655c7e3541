//! # CLI Module
//!
//! This module provides the command-line interface layer for beatcli, a
//! Beatport catalog browser. It implements all user-facing commands and
//! coordinates between the API client, credential persistence and terminal
//! output.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Stores account credentials and performs a verification login
//! - [`subscription`] - Shows whether the account holds an active subscription
//!
//! ### Catalog Browsing
//!
//! - [`list_genres`] - Lists the catalog genres
//! - [`list_tracks`] - Lists the tracks or the top-100 chart of a genre
//! - [`list_curated`] - Browses curated playlists and their tracks
//! - [`search`] - Full-text track search
//!
//! ### Playlists
//!
//! - [`list_playlists`] - Lists the account playlists
//! - [`list_playlist_tracks`] - Lists the tracks of one playlist
//! - [`add_playlist_tracks`] / [`remove_playlist_track`] - Playlist edits
//!
//! ### Streaming
//!
//! - [`stream_url`] - Resolves the full stream URL of a track
//!
//! ## Pagination
//!
//! Collection commands accept `--pages N`: the first request resets the
//! query, every following request continues from the server-provided cursor
//! until a page comes back empty. This walks the catalog exactly the way the
//! underlying cursor cache does.
//!
//! ## Error Handling
//!
//! Commands surface failures through the crate's console macros: recoverable
//! conditions print a warning, fatal ones terminate the process with an
//! error message.

mod auth;
mod browse;
mod playlists;
mod search;
mod stream;

use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

pub use auth::auth;
pub use auth::subscription;
pub use browse::list_curated;
pub use browse::list_genres;
pub use browse::list_tracks;
pub use playlists::add_playlist_tracks;
pub use playlists::list_playlist_tracks;
pub use playlists::list_playlists;
pub use playlists::remove_playlist_track;
pub use search::search;
pub use stream::stream_url;

use crate::beatport::BeatportClient;
use crate::management::{CredentialStore, FileCredentialStore};
use crate::types::{MediaTableRow, Session, StoredCredentials};
use crate::{config, error, info};

pub(crate) async fn build_client() -> BeatportClient {
    let store = Arc::new(FileCredentialStore::new());
    let stored = store.load().await.unwrap_or_else(|_| StoredCredentials::default());
    let mut session =
        Session::from_stored(config::client_id(), config::redirect_uri(), &stored);

    // environment credentials take over when nothing is stored yet
    if session.username.is_none() {
        session.username = config::username();
    }
    if session.password.is_none() {
        session.password = config::password();
    }

    match BeatportClient::new(session) {
        Ok(client) => client.with_store(store),
        Err(e) => {
            error!("Failed to initialize HTTP client: {}", e);
        }
    }
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub(crate) fn print_table(rows: Vec<MediaTableRow>) {
    if rows.is_empty() {
        info!("Nothing to list.");
        return;
    }
    println!("{}", Table::new(rows));
}
