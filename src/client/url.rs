// Request URL construction for nsqlookupd endpoints

use crate::errors::LookupError;

/// Build `http://{host}:{port}/{path}[?query]`.
///
/// One leading `/` is stripped from `path`, so `"/ping"` and `"ping"` give
/// the same URL. Parameter values are percent-encoded, keys are not, and
/// parameter order is preserved.
pub fn build_url(
    host: &str,
    port: u16,
    path: &str,
    params: &[(&str, &str)],
) -> Result<String, LookupError> {
    if host.trim().is_empty() {
        return Err(LookupError::configuration("host", "must be set"));
    }
    if port == 0 {
        return Err(LookupError::configuration("port", "must be set"));
    }
    if path.trim().is_empty() {
        return Err(LookupError::configuration("path", "cannot be empty or whitespace"));
    }

    let path = path.strip_prefix('/').unwrap_or(path);
    let mut url = format!("http://{}:{}/{}", host, port, path);

    if !params.is_empty() {
        url.push('?');
        url.push_str(&query_string(params));
    }

    Ok(url)
}

fn query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
