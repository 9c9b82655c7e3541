use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::ApiResult;
use crate::types::StoredCredentials;

/// Persistence collaborator for account credentials and tokens.
///
/// The client never touches storage directly; it reports every freshly
/// acquired token pair here and reads the stored state back at startup.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> ApiResult<StoredCredentials>;
    async fn save_tokens(&self, access_token: &str, refresh_token: &str) -> ApiResult<()>;
    async fn save_login(&self, username: &str, password: &str) -> ApiResult<()>;
}

pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new() -> Self {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("beatcli/cache/credentials.json");
        FileCredentialStore { path }
    }

    pub fn with_path(path: PathBuf) -> Self {
        FileCredentialStore { path }
    }

    async fn load_or_default(&self) -> StoredCredentials {
        match async_fs::read_to_string(&self.path).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => StoredCredentials::default(),
        }
    }

    async fn persist(&self, credentials: &StoredCredentials) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(credentials)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}

impl Default for FileCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> ApiResult<StoredCredentials> {
        let content = async_fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn save_tokens(&self, access_token: &str, refresh_token: &str) -> ApiResult<()> {
        let mut credentials = self.load_or_default().await;
        credentials.access_token = Some(access_token.to_string());
        credentials.refresh_token = Some(refresh_token.to_string());
        credentials.obtained_at = Some(Utc::now().timestamp() as u64);
        self.persist(&credentials).await
    }

    async fn save_login(&self, username: &str, password: &str) -> ApiResult<()> {
        let mut credentials = self.load_or_default().await;
        credentials.username = Some(username.to_string());
        credentials.password = Some(password.to_string());
        self.persist(&credentials).await
    }
}
