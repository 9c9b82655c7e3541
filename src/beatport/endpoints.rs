//! Endpoint descriptors for the Beatport API.
//!
//! Every route the client touches is declared here as an immutable constant.
//! Route templates use `{}` placeholders that are substituted with the
//! caller-supplied arguments when the concrete URL is built. Collection
//! endpoints additionally carry the default page size that is appended as the
//! `per_page` query parameter.

use crate::utils;

const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A non-paginated (action) endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub route: &'static str,
    pub method: Method,
}

impl Endpoint {
    pub const fn new(route: &'static str, method: Method) -> Self {
        Endpoint { route, method }
    }

    /// Builds the concrete URL by substituting `{}` placeholders in order.
    pub fn url(&self, base_url: &str, args: &[&str]) -> String {
        substitute(base_url, self.route, args)
    }
}

/// A paginated collection endpoint; always `GET`, always pages of
/// `page_size` items.
#[derive(Debug, Clone, Copy)]
pub struct CollectionEndpoint {
    pub route: &'static str,
    pub page_size: u32,
}

impl CollectionEndpoint {
    pub const fn new(route: &'static str) -> Self {
        CollectionEndpoint {
            route,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Builds the first-page URL, including the `per_page` parameter.
    pub fn url(&self, base_url: &str, args: &[&str]) -> String {
        let url = substitute(base_url, self.route, args);
        utils::append_query_param(&url, "per_page", &self.page_size.to_string())
    }
}

fn substitute(base_url: &str, route: &str, args: &[&str]) -> String {
    let mut url = format!("{base_url}{route}");
    for arg in args {
        url = url.replacen("{}", arg, 1);
    }
    url
}

pub const LOGIN: Endpoint = Endpoint::new("/auth/login/", Method::Post);
pub const AUTHORIZE: Endpoint = Endpoint::new(
    "/auth/o/authorize/?response_type=code&client_id={}&redirect_uri={}",
    Method::Get,
);
pub const TOKEN: Endpoint = Endpoint::new("/auth/o/token/", Method::Post);
pub const TOKEN_EXCHANGE: Endpoint = Endpoint::new(
    "/auth/o/token/?code={}&grant_type=authorization_code&client_id={}&redirect_uri={}",
    Method::Post,
);
pub const INTROSPECT: Endpoint = Endpoint::new("/auth/o/introspect/", Method::Get);

pub const GENRES: CollectionEndpoint = CollectionEndpoint::new("/catalog/genres/");
pub const GENRE_TRACKS: CollectionEndpoint =
    CollectionEndpoint::new("/catalog/genres/{}/tracks/?preorder=false");
pub const GENRE_TOP_100: CollectionEndpoint =
    CollectionEndpoint::new("/catalog/genres/{}/top/100/?preorder=false");
pub const CURATED_PLAYLISTS: CollectionEndpoint =
    CollectionEndpoint::new("/curation/playlists/?genre_id={}");
pub const CURATED_PLAYLIST_TRACKS: CollectionEndpoint =
    CollectionEndpoint::new("/curation/playlists/{}/tracks/");
pub const MY_PLAYLISTS: CollectionEndpoint = CollectionEndpoint::new("/my/playlists/");
pub const PLAYLIST_TRACKS: CollectionEndpoint =
    CollectionEndpoint::new("/my/playlists/{}/tracks/");
pub const SEARCH: CollectionEndpoint =
    CollectionEndpoint::new("/catalog/search/?type=tracks&q={}");

pub const ADD_PLAYLIST_TRACKS: Endpoint =
    Endpoint::new("/my/playlists/{}/tracks/bulk/", Method::Post);
pub const REMOVE_PLAYLIST_TRACK: Endpoint =
    Endpoint::new("/my/playlists/{}/tracks/{}/", Method::Delete);
pub const TRACK_DOWNLOAD: Endpoint = Endpoint::new("/catalog/tracks/{}/download/", Method::Get);
