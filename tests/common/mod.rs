#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use beatcli::beatport::BeatportClient;
use beatcli::beatport::transport::{ApiRequest, ApiResponse, Transport};
use beatcli::error::ApiResult;
use beatcli::management::CredentialStore;
use beatcli::types::{Session, StoredCredentials};

pub const BASE: &str = "https://api.beatport.com/v4";
pub const CLIENT_ID: &str = "client-id";
pub const REDIRECT_URI: &str = "https://example.com/callback";
// urlencoded form of REDIRECT_URI as it appears in authorize/exchange URLs
pub const REDIRECT_URI_ENC: &str = "https%3A%2F%2Fexample.com%2Fcallback";

/// Transport double that answers from per-URL queues of canned responses
/// and records every request it sees. URLs without a queued response get a
/// 404 with an empty JSON body.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<HashMap<String, VecDeque<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, url: &str, response: ApiResponse) {
        self.responses
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        let response = self
            .responses
            .lock()
            .unwrap()
            .get_mut(&url)
            .and_then(VecDeque::pop_front);
        Ok(response.unwrap_or_else(|| json_response(404, "{}")))
    }
}

/// Credential store double that records every token pair it is handed.
#[derive(Default)]
pub struct RecordingStore {
    pub saved_tokens: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl CredentialStore for RecordingStore {
    async fn load(&self) -> ApiResult<StoredCredentials> {
        Ok(StoredCredentials::default())
    }

    async fn save_tokens(&self, access_token: &str, refresh_token: &str) -> ApiResult<()> {
        self.saved_tokens
            .lock()
            .unwrap()
            .push((access_token.to_string(), refresh_token.to_string()));
        Ok(())
    }

    async fn save_login(&self, _username: &str, _password: &str) -> ApiResult<()> {
        Ok(())
    }
}

pub fn json_response(status: u16, body: &str) -> ApiResponse {
    ApiResponse {
        status,
        body: body.to_string(),
        headers: HashMap::new(),
    }
}

pub fn response_with_header(status: u16, name: &str, value: &str) -> ApiResponse {
    let mut headers = HashMap::new();
    headers.insert(name.to_string(), value.to_string());
    ApiResponse {
        status,
        body: String::new(),
        headers,
    }
}

pub fn session() -> Session {
    Session::new(CLIENT_ID.to_string(), REDIRECT_URI.to_string())
}

/// Session that already holds a token pair, so catalog calls skip the
/// initial authentication.
pub fn authed_session() -> Session {
    let mut session = session();
    session.access_token = Some("valid-at".to_string());
    session.refresh_token = Some("valid-rt".to_string());
    session
}

pub fn client_with(session: Session, transport: Arc<FakeTransport>) -> BeatportClient {
    BeatportClient::with_transport(session, transport)
}

pub fn header_value<'a>(request: &'a ApiRequest, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|(header, _)| header.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
