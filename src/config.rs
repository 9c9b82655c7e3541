//! Configuration management for the Beatport catalog client.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. It provides a centralized way to
//! manage the OAuth client registration, optional fallback credentials and
//! the API base URL.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

const DEFAULT_API_URL: &str = "https://api.beatport.com/v4";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `beatcli/.env` in the platform-specific local
/// data directory. A missing `.env` file is not an error since all values can
/// also come from the process environment.
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or the
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("beatcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the OAuth client ID registered for the Beatport API.
///
/// # Panics
///
/// Panics if the `BEATPORT_CLIENT_ID` environment variable is not set.
pub fn client_id() -> String {
    env::var("BEATPORT_CLIENT_ID").expect("BEATPORT_CLIENT_ID must be set")
}

/// Returns the OAuth redirect URI registered for the client.
///
/// The authorize endpoint answers with a redirect to this URI carrying the
/// authorization code; it must match the URI registered with the API.
///
/// # Panics
///
/// Panics if the `BEATPORT_REDIRECT_URI` environment variable is not set.
pub fn redirect_uri() -> String {
    env::var("BEATPORT_REDIRECT_URI").expect("BEATPORT_REDIRECT_URI must be set")
}

/// Returns the Beatport API base URL.
///
/// Reads the `BEATPORT_API_URL` environment variable and falls back to the
/// public `https://api.beatport.com/v4` endpoint when unset.
pub fn api_base_url() -> String {
    env::var("BEATPORT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the fallback account username, if configured.
pub fn username() -> Option<String> {
    env::var("BEATPORT_USERNAME").ok()
}

/// Returns the fallback account password, if configured.
pub fn password() -> Option<String> {
    env::var("BEATPORT_PASSWORD").ok()
}
