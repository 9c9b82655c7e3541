use crate::types::MediaTableRow;
use crate::{error, success};

use super::{build_client, print_table, spinner};

pub async fn list_playlists(pages: u32) {
    let mut client = build_client().await;
    let pb = spinner("Fetching playlists...");

    let mut rows: Vec<MediaTableRow> = Vec::new();
    let mut reset = true;
    for _ in 0..pages.max(1) {
        match client.my_playlists(reset).await {
            Ok(playlists) => {
                if playlists.is_empty() && !reset {
                    break;
                }
                rows.extend(playlists.iter().map(MediaTableRow::from));
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch playlists: {}", e);
            }
        }
        reset = false;
    }

    pb.finish_and_clear();
    print_table(rows);
}

pub async fn list_playlist_tracks(playlist_id: String, pages: u32) {
    let mut client = build_client().await;
    let pb = spinner("Fetching playlist tracks...");

    let mut rows: Vec<MediaTableRow> = Vec::new();
    let mut reset = true;
    for _ in 0..pages.max(1) {
        match client.playlist_tracks(&playlist_id, reset).await {
            Ok(entries) => {
                if entries.is_empty() && !reset {
                    break;
                }
                // the entry id addresses the track within the playlist,
                // which is what the remove command needs
                rows.extend(entries.iter().map(|entry| MediaTableRow {
                    id: entry.entry_id.clone(),
                    ..MediaTableRow::from(&entry.track)
                }));
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch playlist tracks: {}", e);
            }
        }
        reset = false;
    }

    pb.finish_and_clear();
    print_table(rows);
}

pub async fn add_playlist_tracks(playlist_id: String, track_ids: Vec<String>) {
    let mut client = build_client().await;
    match client.add_playlist_tracks(&playlist_id, &track_ids).await {
        Ok(()) => success!(
            "Added {} track(s) to playlist {}.",
            track_ids.len(),
            playlist_id
        ),
        Err(e) => error!("Failed to add tracks: {}", e),
    }
}

pub async fn remove_playlist_track(playlist_id: String, entry_id: String) {
    let mut client = build_client().await;
    match client.remove_playlist_track(&playlist_id, &entry_id).await {
        Ok(()) => success!("Removed entry {} from playlist {}.", entry_id, playlist_id),
        Err(e) => error!("Failed to remove track: {}", e),
    }
}
