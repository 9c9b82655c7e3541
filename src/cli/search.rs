use crate::error;
use crate::types::MediaTableRow;

use super::{build_client, print_table, spinner};

pub async fn search(query: String, pages: u32) {
    let mut client = build_client().await;
    let pb = spinner("Searching tracks...");

    let mut rows: Vec<MediaTableRow> = Vec::new();
    let mut reset = true;
    for _ in 0..pages.max(1) {
        match client.search(&query, reset).await {
            Ok(tracks) => {
                if tracks.is_empty() && !reset {
                    break;
                }
                rows.extend(tracks.iter().map(MediaTableRow::from));
                pb.set_message(format!("Found {} tracks...", rows.len()));
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Search failed: {}", e);
            }
        }
        reset = false;
    }

    pb.finish_and_clear();
    print_table(rows);
}
