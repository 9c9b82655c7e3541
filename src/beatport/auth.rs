use serde_json::{Value, json};

use super::client::BeatportClient;
use super::endpoints;
use super::transport::ApiRequest;
use crate::error::{ApiError, ApiResult};
use crate::types::TokenResponse;
use crate::{utils, warning};

impl BeatportClient {
    /// Makes sure the session holds a usable access token.
    ///
    /// Runs the full token acquisition state machine:
    ///
    /// 1. If a refresh token is held, attempt a refresh-token grant. Success
    ///    terminates the flow; any failure falls through to the full login,
    ///    since an expired refresh token is a signal to re-login, not an
    ///    error.
    /// 2. Full login posts the account credentials to the login endpoint,
    ///    replays the returned session cookie against the authorize endpoint
    ///    and extracts the authorization code from the 302 `Location` header.
    /// 3. The code is exchanged for an access/refresh token pair.
    ///
    /// After any successful acquisition the subscription status is
    /// re-checked and the credential store (when attached) is notified with
    /// the new token pair, exactly once.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidCredentials`] when username or password are
    ///   missing or rejected by the login endpoint
    /// - [`ApiError::Authorization`] when the authorize endpoint does not
    ///   answer with a code-carrying redirect
    /// - [`ApiError::Authentication`] when the code exchange fails
    ///
    /// On failure the session is left untouched; tokens are only written
    /// after a fully successful acquisition.
    pub async fn ensure_authenticated(&mut self) -> ApiResult<()> {
        if self.session.refresh_token.is_some() && self.refresh_grant().await.is_ok() {
            return Ok(());
        }
        // refresh token missing, expired or invalid, continue with full login
        self.login().await
    }

    async fn refresh_grant(&mut self) -> ApiResult<()> {
        let refresh_token = self
            .session
            .refresh_token
            .clone()
            .ok_or_else(|| ApiError::Authentication("no refresh token held".to_string()))?;

        let url = endpoints::TOKEN.url(&self.base_url, &[]);
        let body = format!(
            "grant_type=refresh_token&refresh_token={}&client_id={}",
            refresh_token, self.session.client_id
        );
        let response = self
            .transport
            .execute(ApiRequest::post(&url).form_body(body))
            .await?;
        if response.status != 200 {
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }

        self.apply_token_response(&response.body).await
    }

    async fn login(&mut self) -> ApiResult<()> {
        let (username, password) = match (&self.session.username, &self.session.password) {
            (Some(username), Some(password)) => (username.clone(), password.clone()),
            _ => {
                return Err(ApiError::InvalidCredentials(
                    "username and/or password missing".to_string(),
                ));
            }
        };

        // credentials login yields the session cookie for the authorize call
        let login_url = endpoints::LOGIN.url(&self.base_url, &[]);
        let body = json!({ "username": username, "password": password }).to_string();
        let response = self
            .transport
            .execute(ApiRequest::post(&login_url).json_body(body))
            .await?;
        if response.status != 200 {
            return Err(ApiError::InvalidCredentials(
                "login rejected by the server".to_string(),
            ));
        }
        let cookie = response
            .header("set-cookie")
            .ok_or_else(|| {
                ApiError::Authorization("login response carries no session cookie".to_string())
            })?
            .to_string();

        let redirect_uri = urlencoding::encode(&self.session.redirect_uri).into_owned();
        let authorize_url = endpoints::AUTHORIZE.url(
            &self.base_url,
            &[&self.session.client_id, &redirect_uri],
        );
        let response = self
            .transport
            .execute(ApiRequest::get(&authorize_url).header("Cookie", &cookie))
            .await?;
        if response.status != 302 {
            return Err(ApiError::Authorization(format!(
                "authorize endpoint answered {} instead of a redirect",
                response.status
            )));
        }
        let location = response.header("location").ok_or_else(|| {
            ApiError::Authorization("redirect carries no Location header".to_string())
        })?;
        let code = utils::authorization_code_from_location(location)
            .ok_or_else(|| {
                ApiError::Authorization("redirect carries no authorization code".to_string())
            })?
            .to_string();

        let token_url = endpoints::TOKEN_EXCHANGE.url(
            &self.base_url,
            &[&code, &self.session.client_id, &redirect_uri],
        );
        let response = self.transport.execute(ApiRequest::post(&token_url)).await?;
        if response.status != 200 {
            return Err(ApiError::Authentication(format!(
                "code exchange failed with status {}",
                response.status
            )));
        }

        self.apply_token_response(&response.body).await
    }

    async fn apply_token_response(&mut self, body: &str) -> ApiResult<()> {
        let token: TokenResponse = serde_json::from_str(body)?;
        self.session.access_token = Some(token.access_token.clone());
        self.session.refresh_token = Some(token.refresh_token.clone());
        self.session.has_subscription = self.check_subscription().await;

        if let Some(store) = &self.store {
            if let Err(e) = store
                .save_tokens(&token.access_token, &token.refresh_token)
                .await
            {
                warning!("Failed to persist tokens: {}", e);
            }
        }
        Ok(())
    }

    // Introspection failures of any kind read as "no subscription"; the
    // catalog stays browsable without one. Hits the transport directly so a
    // 401 here can never recurse into another token acquisition.
    async fn check_subscription(&self) -> bool {
        let Some(access_token) = &self.session.access_token else {
            return false;
        };
        let url = endpoints::INTROSPECT.url(&self.base_url, &[]);
        let request =
            ApiRequest::get(&url).header("Authorization", &format!("Bearer {access_token}"));
        match self.transport.execute(request).await {
            Ok(response) if response.status == 200 => {
                serde_json::from_str::<Value>(&response.body)
                    .map(|json| json.get("subscription").is_some_and(|s| !s.is_null()))
                    .unwrap_or(false)
            }
            _ => false,
        }
    }
}
