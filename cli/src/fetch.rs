#![deny(missing_docs)]

//! # Route Fetcher
//!
//! Issues the single `GET {base_url}/wp-json` request.
//!
//! HTTP-level failures (non-success status, unreadable or non-JSON body) yield
//! an empty route map and a warning. Transport failures are errors.

use crate::error::{CliError, CliResult};
use std::time::Duration;
use url::Url;

/// Well-known discovery path.
pub const DISCOVERY_PATH: &str = "wp-json";

/// Maximum accepted discovery body size.
pub const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Request settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("wp-openapi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Builds `{base_url}/wp-json`, rejecting anything that is not an http(s) URL.
///
/// # Errors
///
/// Returns `CliError::Fetch` when the URL does not parse or its scheme is not
/// `http`/`https`.
pub fn discovery_url(base_url: &str) -> CliResult<Url> {
    let raw = format!("{}/{}", base_url.trim_end_matches('/'), DISCOVERY_PATH);
    let url = Url::parse(&raw)
        .map_err(|e| CliError::Fetch(format!("invalid base URL '{}': {}", base_url, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CliError::Fetch(format!(
            "unsupported URL scheme '{}' in '{}'",
            other, base_url
        ))),
    }
}

#[cfg(feature = "client")]
pub use client::HttpSource;

#[cfg(feature = "client")]
mod client {
    use super::{discovery_url, FetchOptions, MAX_BODY_BYTES};
    use crate::error::{CliError, CliResult};
    use crate::source::RouteSource;
    use tracing::{info, warn};
    use wp_openapi_core::{parse_discovery_document, DiscoveryDocument};

    /// Fetches and parses the discovery document of a live site.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Fetch` for an invalid base URL or a transport
    /// failure. HTTP error statuses and bad bodies yield an empty document.
    pub fn fetch_wp_api_routes(
        base_url: &str,
        options: &FetchOptions,
    ) -> CliResult<DiscoveryDocument> {
        let url = discovery_url(base_url)?;
        info!("Fetching API routes from {}", url);

        let config = ureq::Agent::config_builder()
            .timeout_global(Some(options.timeout))
            .build();
        let agent = ureq::Agent::new_with_config(config);

        let mut response = match agent
            .get(url.as_str())
            .header("User-Agent", options.user_agent.as_str())
            .header("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(code)) => {
                warn!("Failed to access {}. Status code: {}", url, code);
                return Ok(DiscoveryDocument::default());
            }
            Err(e) => return Err(CliError::Fetch(e.to_string())),
        };

        let body = match response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_string()
        {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read response from {}: {}", url, e);
                return Ok(DiscoveryDocument::default());
            }
        };

        let document = parse_discovery_document(&body);
        if !document.routes.is_empty() {
            info!("Found {} routes", document.routes.len());
        }
        Ok(document)
    }

    /// Live-site source.
    pub struct HttpSource {
        /// Request settings.
        pub options: FetchOptions,
    }

    impl RouteSource for HttpSource {
        fn load(&self, base_url: &str) -> CliResult<DiscoveryDocument> {
            fetch_wp_api_routes(base_url, &self.options)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_url() {
        let url = discovery_url("https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/wp-json");

        let url = discovery_url("http://localhost:8080/blog/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/blog/wp-json");
    }

    #[test]
    fn test_discovery_url_rejects_bad_input() {
        assert!(discovery_url("example.com").is_err());
        assert!(discovery_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(options.user_agent.starts_with("wp-openapi/"));
    }

    #[cfg(feature = "client")]
    mod client {
        use super::super::client::fetch_wp_api_routes;
        use super::super::FetchOptions;
        use crate::error::CliError;
        use std::io::{Read, Write};
        use std::net::TcpListener;
        use std::thread::{self, JoinHandle};
        use std::time::Duration;

        /// Serves exactly one canned HTTP response on a random local port.
        fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let base_url = format!("http://{}", listener.local_addr().unwrap());

            let handle = thread::spawn(move || {
                let (mut stream, _) = listener.accept().unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                assert!(request.starts_with(b"GET /wp-json "));

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            });

            (base_url, handle)
        }

        fn options() -> FetchOptions {
            FetchOptions {
                timeout: Duration::from_secs(5),
                ..Default::default()
            }
        }

        #[test]
        fn test_fetch_routes_success() {
            let (base_url, server) = serve_once(
                "200 OK",
                r#"{"name": "Blog", "routes": {"/wp/v2/posts": {"endpoints": []}}}"#,
            );

            let doc = fetch_wp_api_routes(&base_url, &options()).unwrap();
            server.join().unwrap();

            assert_eq!(doc.name.as_deref(), Some("Blog"));
            assert_eq!(doc.routes.len(), 1);
            assert!(doc.diagnostics.is_empty());
        }

        #[test]
        fn test_fetch_not_found_yields_empty_routes() {
            let (base_url, server) = serve_once("404 Not Found", r#"{"code": "rest_no_route"}"#);

            let doc = fetch_wp_api_routes(&base_url, &options()).unwrap();
            server.join().unwrap();

            assert!(doc.routes.is_empty());
        }

        #[test]
        fn test_fetch_non_json_body_yields_empty_routes() {
            let (base_url, server) = serve_once("200 OK", "<html>maintenance</html>");

            let doc = fetch_wp_api_routes(&base_url, &options()).unwrap();
            server.join().unwrap();

            assert!(doc.routes.is_empty());
            assert_eq!(doc.diagnostics.len(), 1);
            assert!(doc.diagnostics[0]
                .message
                .starts_with("Error parsing JSON response"));
        }

        #[test]
        fn test_fetch_connection_refused_is_error() {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let base_url = format!("http://{}", listener.local_addr().unwrap());
            drop(listener);

            let err = fetch_wp_api_routes(&base_url, &options()).unwrap_err();
            assert!(matches!(err, CliError::Fetch(_)));
        }
    }
}
