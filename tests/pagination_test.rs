mod common;

use common::*;

fn genres_url() -> String {
    format!("{BASE}/catalog/genres/?per_page=50")
}

fn genre_tracks_url(genre_id: &str) -> String {
    format!("{BASE}/catalog/genres/{genre_id}/tracks/?preorder=false&per_page=50")
}

const GENRE_PAGE_1: &str = r#"{
    "results": [{"id": 1, "name": "Techno", "url": "https://api.beatport.com/v4/catalog/genres/1/"}],
    "next": "https://api.beatport.com/v4/catalog/genres/?per_page=50&page=2"
}"#;

const GENRE_PAGE_2: &str = r#"{
    "results": [{"id": 2, "name": "House", "url": "https://api.beatport.com/v4/catalog/genres/2/"}],
    "next": null
}"#;

const TRACK_PAGE: &str = r#"{
    "results": [{
        "id": 101,
        "sample_url": "https://cdn.example.com/sample.mp3",
        "length_ms": 215000,
        "release": {"name": "Night Drive", "image": {"uri": "https://cdn.example.com/art.jpg"}},
        "artists": [{"name": "Kollektiv"}]
    }],
    "next": "/catalog/genres/1/tracks/?page=2"
}"#;

#[tokio::test]
async fn non_reset_call_continues_from_next_cursor() {
    let transport = FakeTransport::new();
    transport.respond(&genres_url(), json_response(200, GENRE_PAGE_1));
    transport.respond(
        "https://api.beatport.com/v4/catalog/genres/?per_page=50&page=2",
        json_response(200, GENRE_PAGE_2),
    );
    let mut client = client_with(authed_session(), transport.clone());

    let first = client.genres(true).await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].name, "Techno");

    // the absolute cursor URL must be fetched verbatim
    let second = client.genres(false).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "House");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, genres_url());
    assert_eq!(
        requests[1].url,
        "https://api.beatport.com/v4/catalog/genres/?per_page=50&page=2"
    );
}

#[tokio::test]
async fn host_relative_next_cursor_is_resolved_against_the_api_origin() {
    let transport = FakeTransport::new();
    transport.respond(&genre_tracks_url("1"), json_response(200, TRACK_PAGE));
    transport.respond(
        "https://api.beatport.com/catalog/genres/1/tracks/?page=2",
        json_response(200, r#"{"results": [], "next": null}"#),
    );
    let mut client = client_with(authed_session(), transport.clone());

    let tracks = client.genre_tracks("1", true).await.unwrap();
    assert_eq!(tracks.len(), 1);

    client.genre_tracks("1", false).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[1].url,
        "https://api.beatport.com/catalog/genres/1/tracks/?page=2"
    );
}

#[tokio::test]
async fn exhausted_query_answers_empty_without_network_until_reset() {
    let transport = FakeTransport::new();
    transport.respond(&genres_url(), json_response(200, GENRE_PAGE_2));
    transport.respond(&genres_url(), json_response(200, GENRE_PAGE_2));
    let mut client = client_with(authed_session(), transport.clone());

    let first = client.genres(true).await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(transport.request_count(), 1);

    // the page carried no next cursor; subsequent non-reset calls must
    // short-circuit without touching the transport
    assert!(client.genres(false).await.unwrap().is_empty());
    assert!(client.genres(false).await.unwrap().is_empty());
    assert_eq!(transport.request_count(), 1);

    // reset starts over from the first page
    let again = client.genres(true).await.unwrap();
    assert_eq!(again.len(), 1);
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn reset_fetches_the_first_page_despite_a_cached_cursor() {
    let transport = FakeTransport::new();
    transport.respond(&genres_url(), json_response(200, GENRE_PAGE_1));
    transport.respond(&genres_url(), json_response(200, GENRE_PAGE_1));
    let mut client = client_with(authed_session(), transport.clone());

    client.genres(true).await.unwrap();
    client.genres(true).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, genres_url());
    assert_eq!(requests[1].url, genres_url());
}

#[tokio::test]
async fn cursors_are_tracked_per_query() {
    let transport = FakeTransport::new();
    transport.respond(&genre_tracks_url("1"), json_response(200, TRACK_PAGE));
    transport.respond(
        &genre_tracks_url("2"),
        json_response(200, r#"{"results": [], "next": null}"#),
    );
    transport.respond(
        "https://api.beatport.com/catalog/genres/1/tracks/?page=2",
        json_response(200, r#"{"results": [], "next": null}"#),
    );
    let mut client = client_with(authed_session(), transport.clone());

    client.genre_tracks("1", true).await.unwrap();
    client.genre_tracks("2", true).await.unwrap();

    // genre 2 is exhausted, genre 1 still has its own cursor
    assert!(client.genre_tracks("2", false).await.unwrap().is_empty());
    assert_eq!(transport.request_count(), 2);

    client.genre_tracks("1", false).await.unwrap();
    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[2].url,
        "https://api.beatport.com/catalog/genres/1/tracks/?page=2"
    );
}

#[tokio::test]
async fn pages_without_results_or_tracks_field_map_to_an_empty_list() {
    let transport = FakeTransport::new();
    transport.respond(&genres_url(), json_response(200, r#"{"next": null}"#));
    let mut client = client_with(authed_session(), transport.clone());

    assert!(client.genres(true).await.unwrap().is_empty());
}
