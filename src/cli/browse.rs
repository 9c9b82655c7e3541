use crate::error;
use crate::types::{CuratedListing, MediaTableRow};

use super::{build_client, print_table, spinner};

pub async fn list_genres(pages: u32) {
    let mut client = build_client().await;
    let pb = spinner("Fetching genres...");

    let mut rows: Vec<MediaTableRow> = Vec::new();
    let mut reset = true;
    for _ in 0..pages.max(1) {
        match client.genres(reset).await {
            Ok(genres) => {
                if genres.is_empty() && !reset {
                    break;
                }
                rows.extend(genres.iter().map(MediaTableRow::from));
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch genres: {}", e);
            }
        }
        reset = false;
    }

    pb.finish_and_clear();
    print_table(rows);
}

pub async fn list_tracks(genre_id: String, top: bool, pages: u32) {
    let mut client = build_client().await;
    let pb = spinner("Fetching tracks...");

    let mut rows: Vec<MediaTableRow> = Vec::new();
    let mut reset = true;
    for _ in 0..pages.max(1) {
        let result = if top {
            client.top_100(&genre_id, reset).await
        } else {
            client.genre_tracks(&genre_id, reset).await
        };

        match result {
            Ok(tracks) => {
                if tracks.is_empty() && !reset {
                    break;
                }
                rows.extend(tracks.iter().map(MediaTableRow::from));
                pb.set_message(format!("Fetched {} tracks...", rows.len()));
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch tracks: {}", e);
            }
        }
        reset = false;
    }

    pb.finish_and_clear();
    print_table(rows);
}

pub async fn list_curated(path: String, pages: u32) {
    let mut client = build_client().await;
    let pb = spinner("Fetching curated playlists...");

    let mut rows: Vec<MediaTableRow> = Vec::new();
    let mut reset = true;
    for _ in 0..pages.max(1) {
        match client.curated_playlists(&path, reset).await {
            Ok(CuratedListing::Playlists(playlists)) => {
                if playlists.is_empty() && !reset {
                    break;
                }
                rows.extend(playlists.iter().map(MediaTableRow::from));
            }
            Ok(CuratedListing::Tracks(entries)) => {
                if entries.is_empty() && !reset {
                    break;
                }
                rows.extend(entries.iter().map(|entry| MediaTableRow::from(&entry.track)));
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch curated playlists: {}", e);
            }
        }
        reset = false;
    }

    pb.finish_and_clear();
    print_table(rows);
}
