use beatcli::utils::*;

#[test]
fn test_authorization_code_from_location() {
    // Standard redirect with trailing state parameter
    let location = "https://example.com/callback?code=abc123&state=xyz";
    assert_eq!(authorization_code_from_location(location), Some("abc123"));

    // Code as the only query parameter
    let location = "https://example.com/callback?code=abc123";
    assert_eq!(authorization_code_from_location(location), Some("abc123"));

    // No query parameters at all
    assert_eq!(
        authorization_code_from_location("https://example.com/callback"),
        None
    );

    // Empty code value
    assert_eq!(
        authorization_code_from_location("https://example.com/callback?code=&state=xyz"),
        None
    );
}

#[test]
fn test_append_query_param() {
    // Should use '?' when the URL has no query string yet
    assert_eq!(
        append_query_param("https://api.example.com/catalog/genres/", "per_page", "50"),
        "https://api.example.com/catalog/genres/?per_page=50"
    );

    // Should use '&' when a query string is already present
    assert_eq!(
        append_query_param(
            "https://api.example.com/catalog/search/?type=tracks",
            "per_page",
            "50"
        ),
        "https://api.example.com/catalog/search/?type=tracks&per_page=50"
    );
}

#[test]
fn test_absolute_url_passes_through_absolute_urls() {
    let base = "https://api.example.com/v4";
    assert_eq!(
        absolute_url(base, "https://api.example.com/v4/catalog/genres/?page=2"),
        "https://api.example.com/v4/catalog/genres/?page=2"
    );
    assert_eq!(
        absolute_url(base, "http://other.example.com/page"),
        "http://other.example.com/page"
    );
}

#[test]
fn test_absolute_url_resolves_host_relative_paths() {
    // Path-relative cursors resolve against the API origin, not the
    // versioned base path
    assert_eq!(
        absolute_url("https://api.example.com/v4", "/catalog/genres/1/tracks/?page=2"),
        "https://api.example.com/catalog/genres/1/tracks/?page=2"
    );
}

#[test]
fn test_absolute_url_prefixes_bare_hosts_with_https() {
    assert_eq!(
        absolute_url("https://api.example.com/v4", "api.example.com/v4/catalog/genres/"),
        "https://api.example.com/v4/catalog/genres/"
    );
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(215000), "3:35");
    assert_eq!(format_duration(60000), "1:00");
    assert_eq!(format_duration(59999), "0:59");
    // over an hour stays in minutes
    assert_eq!(format_duration(3_721_000), "62:01");
}
