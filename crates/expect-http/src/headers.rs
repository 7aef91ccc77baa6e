//! Provides header lookup helpers

use http::header::AsHeaderName;
use http::HeaderMap;

/// Returns every value of a header joined by `", "`, or the empty string when the
/// header is absent
///
/// Values that are not visible ASCII are skipped
pub fn header_line<K>(headers: &HeaderMap, name: K) -> String
where
    K: AsHeaderName,
{
    headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join(", ")
}
