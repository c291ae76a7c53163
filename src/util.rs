use std::{sync::Arc, time::Duration};

use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest_cookie_store::CookieStoreMutex;

use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const MAX_REDIRECTS: usize = 10;

const CHROME_MAJOR_VERSIONS: [u32; 6] = [118, 119, 120, 121, 122, 123];
const OS_STRINGS: [&str; 3] = [
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
];

/// Picks a plausible desktop Chrome user-agent. Called once per client
/// construction, so every request from the same client carries the same
/// string.
pub fn random_user_agent() -> String {
    let mut rng = rand::thread_rng();
    let version = CHROME_MAJOR_VERSIONS
        .choose(&mut rng)
        .copied()
        .unwrap_or(CHROME_MAJOR_VERSIONS[0]);
    let os = OS_STRINGS.choose(&mut rng).copied().unwrap_or(OS_STRINGS[0]);

    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{}.0.0.0 Safari/537.36",
        os, version
    )
}

fn chrome_major(user_agent: &str) -> &str {
    user_agent
        .split_once("Chrome/")
        .and_then(|(_, rest)| rest.split_once('.'))
        .map(|(major, _)| major)
        .unwrap_or("120")
}

fn platform_hint(user_agent: &str) -> &str {
    if user_agent.contains("Windows") {
        "Windows"
    } else if user_agent.contains("Mac OS X") {
        "macOS"
    } else {
        "Linux"
    }
}

fn default_headers(user_agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "accept",
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert("accept-language", HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert("cache-control", HeaderValue::from_static("no-cache"));

    // Client hints match the user-agent string chosen at construction
    let major = chrome_major(user_agent);
    let sec_ch_ua = format!(
        r#""Chromium";v="{}", "Google Chrome";v="{}", "Not?A_Brand";v="8""#,
        major, major
    );
    if let Ok(value) = HeaderValue::from_str(&sec_ch_ua) {
        headers.insert("sec-ch-ua", value);
    }
    headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
    if let Ok(value) = HeaderValue::from_str(&format!("\"{}\"", platform_hint(user_agent))) {
        headers.insert("sec-ch-ua-platform", value);
    }

    headers.insert("sec-fetch-dest", HeaderValue::from_static("document"));
    headers.insert("sec-fetch-mode", HeaderValue::from_static("navigate"));
    headers.insert("sec-fetch-site", HeaderValue::from_static("none"));
    headers.insert("sec-fetch-user", HeaderValue::from_static("?1"));
    headers.insert("upgrade-insecure-requests", HeaderValue::from_static("1"));
    headers
}

/// Options fixed at client construction. Nothing here is mutated afterwards,
/// so a shared client is safe to use from multiple tasks.
pub struct HttpClientOptions {
    /// Fixed user-agent string; `None` picks a random one.
    pub user_agent: Option<String>,
    /// Skip TLS certificate verification. Off unless the target's
    /// certificate chain cannot be validated by the local trust store.
    pub accept_invalid_certs: bool,
}

impl Default for HttpClientOptions {
    fn default() -> Self {
        Self {
            user_agent: None,
            accept_invalid_certs: false,
        }
    }
}

pub struct HttpClient {
    pub client: reqwest::Client,
    pub cookies: Arc<CookieStoreMutex>,
}

impl HttpClient {
    pub fn new() -> reqwest::Result<HttpClient> {
        Self::with_options(HttpClientOptions::default())
    }

    pub fn with_options(options: HttpClientOptions) -> reqwest::Result<HttpClient> {
        let cookies = Arc::new(CookieStoreMutex::default());
        let user_agent = options.user_agent.unwrap_or_else(random_user_agent);

        let client = reqwest::Client::builder()
            .cookie_provider(cookies.clone())
            .default_headers(default_headers(&user_agent))
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .referer(false)
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()?;

        Ok(HttpClient { client, cookies })
    }

    /// GET `url` and return the response body as text. Transport failures
    /// surface as [`Error::Network`] and are never retried.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await.map_err(|e| Error::Network {
            url: url.to_string(),
            source: e,
        })?;

        resp.text().await.map_err(|e| Error::Network {
            url: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_looks_like_desktop_chrome() {
        let ua = random_user_agent();
        assert!(ua.starts_with("Mozilla/5.0 ("));
        assert!(ua.contains("Chrome/"));
        assert!(ua.ends_with("Safari/537.36"));
    }

    #[test]
    fn client_hints_follow_user_agent() {
        let ua =
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";
        let headers = default_headers(ua);

        let sec_ch_ua = headers.get("sec-ch-ua").unwrap().to_str().unwrap();
        assert!(sec_ch_ua.contains(r#""Chromium";v="121""#));
        assert_eq!(headers.get("sec-ch-ua-mobile").unwrap(), "?0");
        assert_eq!(headers.get("sec-ch-ua-platform").unwrap(), "\"Linux\"");
    }

    #[test]
    fn client_hint_platform_matches_os() {
        assert_eq!(platform_hint("Mozilla/5.0 (Windows NT 10.0; Win64; x64)"), "Windows");
        assert_eq!(
            platform_hint("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)"),
            "macOS"
        );
        // Unrecognized strings fall through to Linux
        assert_eq!(platform_hint("test-agent/1.0"), "Linux");
    }

    #[test]
    fn client_builds_with_fixed_user_agent() {
        let client = HttpClient::with_options(HttpClientOptions {
            user_agent: Some("test-agent/1.0".to_string()),
            accept_invalid_certs: false,
        });
        assert!(client.is_ok());
    }
}
