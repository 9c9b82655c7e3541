use serde_json::Value;

use super::client::BeatportClient;
use super::endpoints::{CollectionEndpoint, Endpoint, Method};
use super::transport::{ApiRequest, ApiResponse};
use crate::error::{ApiError, ApiResult};
use crate::utils;

/// Continuation state of one paginated query, keyed by its first-page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageCursor {
    /// Absolute URL of the next page.
    Next(String),
    /// The server reported no further pages; non-reset calls short-circuit
    /// to an empty page until the caller resets.
    Exhausted,
}

impl BeatportClient {
    /// Fetches one page of a collection endpoint.
    ///
    /// The first-page URL (arguments and `per_page` substituted) doubles as
    /// the cursor key. With `reset` unset, a cached [`PageCursor::Next`]
    /// cursor is fetched instead of the first page, and an
    /// [`PageCursor::Exhausted`] marker returns an empty page without any
    /// network call. With `reset` set, the first page is fetched
    /// unconditionally and the cursor is overwritten.
    ///
    /// The returned items are the page's `results` array when present, else
    /// its `tracks` array, else empty; collection endpoints differ in their
    /// page shape.
    pub(crate) async fn collection_request(
        &mut self,
        endpoint: &CollectionEndpoint,
        args: &[&str],
        reset: bool,
    ) -> ApiResult<Vec<Value>> {
        let first_page_url = endpoint.url(&self.base_url, args);
        let request_url = if reset {
            first_page_url.clone()
        } else {
            match self.cursors.get(&first_page_url) {
                Some(PageCursor::Exhausted) => return Ok(Vec::new()),
                Some(PageCursor::Next(next)) => next.clone(),
                None => first_page_url.clone(),
            }
        };

        let response = self
            .authorized_request(Method::Get, &request_url, None)
            .await?;
        let page: Value = serde_json::from_str(&response.body)?;

        // the cursor is stored under the first-page key so that later
        // non-reset calls continue instead of restarting
        let cursor = match page.get("next").and_then(Value::as_str) {
            Some(next) => PageCursor::Next(utils::absolute_url(&self.base_url, next)),
            None => PageCursor::Exhausted,
        };
        self.cursors.insert(first_page_url, cursor);

        let items = ["results", "tracks"]
            .into_iter()
            .find_map(|key| page.get(key).and_then(Value::as_array))
            .cloned()
            .unwrap_or_default();
        Ok(items)
    }

    /// Executes a non-paginated endpoint; no cursor bookkeeping.
    pub(crate) async fn action_request(
        &mut self,
        endpoint: &Endpoint,
        args: &[&str],
        body: Option<String>,
    ) -> ApiResult<ApiResponse> {
        let url = endpoint.url(&self.base_url, args);
        self.authorized_request(endpoint.method, &url, body).await
    }

    /// Sends one bearer-authorized request.
    ///
    /// A token is acquired lazily before the first send. A 401 answer forces
    /// one re-authentication and replays the request exactly once; a second
    /// 401, like any other status >= 400, surfaces as [`ApiError::Http`].
    /// The single retry tolerates an expiry race without looping on a
    /// permanently rejected token.
    async fn authorized_request(
        &mut self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> ApiResult<ApiResponse> {
        if self.session.access_token.is_none() {
            self.ensure_authenticated().await?;
        }

        let mut reauthenticated = false;
        loop {
            let access_token = self
                .session
                .access_token
                .clone()
                .ok_or_else(|| ApiError::Authentication("no access token held".to_string()))?;
            let mut request = ApiRequest::new(method, url)
                .header("Authorization", &format!("Bearer {access_token}"));
            if let Some(body) = &body {
                request = request.json_body(body.clone());
            }

            let response = self.transport.execute(request).await?;
            if response.status == 401 && !reauthenticated {
                reauthenticated = true;
                self.ensure_authenticated().await?;
                continue; // retry with the fresh token
            }
            if response.status >= 400 {
                return Err(ApiError::Http {
                    status: response.status,
                    body: response.body,
                });
            }
            return Ok(response);
        }
    }
}
