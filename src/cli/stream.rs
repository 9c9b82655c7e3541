use crate::error::ApiError;
use crate::{error, success, warning};

use super::build_client;

pub async fn stream_url(track_id: String) {
    let mut client = build_client().await;
    match client.stream_url(&track_id).await {
        Ok(url) => {
            success!("Stream URL for track {}:", track_id);
            println!("{}", url);
        }
        Err(ApiError::NotStreamable(_)) => {
            warning!(
                "Track {} is not streamable with the current subscription.",
                track_id
            );
        }
        Err(e) => {
            error!("Failed to resolve stream URL: {}", e);
        }
    }
}
