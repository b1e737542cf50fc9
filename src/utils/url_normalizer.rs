//! Scheme normalization for user-supplied destination URLs.

use url::Url;

/// Scheme prepended to URLs that do not parse as absolute.
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Ensures a URL carries an explicit scheme.
///
/// Input that already parses as an absolute URL is returned unchanged.
/// Anything else gets `http://` prepended. The result is not re-validated
/// here; a URL that is still malformed fails later at the reachability probe.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(with_scheme("google.com"), "http://google.com");
/// assert_eq!(with_scheme("https://google.com"), "https://google.com");
/// ```
pub fn with_scheme(input: &str) -> String {
    match Url::parse(input) {
        Ok(_) => input.to_string(),
        Err(_) => format!("{DEFAULT_SCHEME_PREFIX}{input}"),
    }
}
