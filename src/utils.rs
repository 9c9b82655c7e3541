pub fn authorization_code_from_location(location: &str) -> Option<&str> {
    let (_, after) = location.split_once('=')?;
    let code = match after.split_once('&') {
        Some((code, _)) => code,
        None => after,
    };
    if code.is_empty() { None } else { Some(code) }
}

pub fn append_query_param(url: &str, key: &str, value: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{key}={value}")
}

pub fn absolute_url(base_url: &str, next: &str) -> String {
    if next.starts_with("https://") || next.starts_with("http://") {
        return next.to_string();
    }
    if next.starts_with('/') {
        return format!("{}{}", origin_of(base_url), next);
    }
    format!("https://{next}")
}

// "https://api.example.com/v4" -> "https://api.example.com"
fn origin_of(base_url: &str) -> &str {
    let host_start = match base_url.find("://") {
        Some(idx) => idx + 3,
        None => return base_url,
    };
    match base_url[host_start..].find('/') {
        Some(idx) => &base_url[..host_start + idx],
        None => base_url,
    }
}

pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
