//! URL helpers
//!
//! Path joining for resource endpoints and query-string encoding for
//! backend requests.

use crate::backend::Query;
use url::{Position, Url};

/// Join a base URL and a path with exactly one `/` between them
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Parse `url` and append `params` to its query string.
///
/// Existing query pairs are kept. Keys are appended in sorted order so the
/// resulting URL is stable for a given parameter map.
pub fn with_query(url: &str, params: Option<&Query>) -> Result<Url, url::ParseError> {
    let mut parsed = Url::parse(url)?;

    if let Some(params) = params.filter(|p| !p.is_empty()) {
        let mut keys: Vec<&String> = params.keys().collect();
        keys.sort();

        let mut pairs = parsed.query_pairs_mut();
        for key in keys {
            pairs.append_pair(key, &params[key]);
        }
    }

    Ok(parsed)
}

/// The `/path?query` part of a URL, used to label requests in logs
pub fn path_and_query(url: &Url) -> &str {
    &url[Position::BeforePath..Position::AfterQuery]
}
