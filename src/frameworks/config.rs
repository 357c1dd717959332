use std::{env, path::PathBuf, time::Duration};

// Runtime settings read from the environment (after `.env` is loaded).

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api/v1";
pub const DEFAULT_SESSION_FILE: &str = ".hbnb_session.toml";
const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

// Lifetime of the stored token, matching a one-day cookie.
pub const SESSION_TTL_SECONDS: u64 = 86_400;

// Navigations followed before a visit is abandoned.
pub const MAX_REDIRECTS: usize = 8;

pub fn api_url() -> String {
    env::var("HBNB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

pub fn session_file() -> PathBuf {
    env::var("HBNB_SESSION_FILE")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE))
}

pub fn http_timeout() -> Option<Duration> {
    parse_timeout(env::var("HBNB_HTTP_TIMEOUT_MS").ok().as_deref())
}

// 0 disables the timeout; unparseable values fall back to the default.
fn parse_timeout(raw: Option<&str>) -> Option<Duration> {
    let millis = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_MS);
    (millis > 0).then(|| Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_timeout_is_unset_then_default_is_used() {
        assert_eq!(parse_timeout(None), Some(Duration::from_millis(10_000)));
    }

    #[test]
    fn when_timeout_is_zero_then_requests_are_unbounded() {
        assert_eq!(parse_timeout(Some("0")), None);
    }

    #[test]
    fn when_timeout_is_garbage_then_default_is_used() {
        assert_eq!(parse_timeout(Some("soon")), Some(Duration::from_millis(10_000)));
        assert_eq!(parse_timeout(Some(" 250 ")), Some(Duration::from_millis(250)));
    }
}
