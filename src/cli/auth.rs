use std::sync::Arc;

use crate::beatport::BeatportClient;
use crate::management::{CredentialStore, FileCredentialStore};
use crate::types::Session;
use crate::{config, error, info, success, warning};

pub async fn auth(username: Option<String>, password: Option<String>) {
    let store = Arc::new(FileCredentialStore::new());

    let (username, password) = match (
        username.or_else(config::username),
        password.or_else(config::password),
    ) {
        (Some(username), Some(password)) => (username, password),
        _ => {
            error!(
                "Username and password required. Pass --username/--password or set BEATPORT_USERNAME/BEATPORT_PASSWORD."
            );
        }
    };

    if let Err(e) = store.save_login(&username, &password).await {
        error!("Failed to save credentials: {}", e);
    }

    let session = Session::new(config::client_id(), config::redirect_uri())
        .with_login(username, password);
    let mut client = match BeatportClient::new(session) {
        Ok(client) => client.with_store(store),
        Err(e) => {
            error!("Failed to initialize HTTP client: {}", e);
        }
    };

    match client.ensure_authenticated().await {
        Ok(()) => {
            success!("Authentication successful!");
            if client.has_subscription() {
                info!("Active subscription detected.");
            } else {
                warning!("No active subscription; streaming falls back to track samples.");
            }
        }
        Err(e) => {
            error!("Authentication failed: {}", e);
        }
    }
}

pub async fn subscription() {
    let mut client = super::build_client().await;
    if let Err(e) = client.ensure_authenticated().await {
        error!("Authentication failed: {}", e);
    }

    if client.has_subscription() {
        success!("Subscription is active.");
    } else {
        info!("No active subscription.");
    }
}
