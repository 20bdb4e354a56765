use crate::error::Result;
use crate::game::StatsDocument;
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_STATS_URL: &str = "https://tools.wmflabs.org/corhist/stats";

/// Thin blocking client for the correction game statistics endpoint.
pub struct StatsClient {
    http: Client,
}

impl StatsClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("corhist-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// GETs `url` and decodes the body. Non-success statuses are errors.
    pub fn fetch(&self, url: &str) -> Result<StatsDocument> {
        tracing::info!(url, "fetching game statistics");
        let response = self.http.get(url).send()?.error_for_status()?;
        tracing::debug!(status = %response.status(), "statistics received");
        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use crate::testing::fixtures::GAME_JSON;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one canned HTTP response on a loopback port and returns its URL.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            loop {
                line.clear();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }
            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
        });
        format!("http://{addr}/corhist/stats")
    }

    fn client() -> StatsClient {
        StatsClient::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn ok_response_decodes_document() {
        let url = serve_once("200 OK", GAME_JSON);
        let doc = client().fetch(&url).unwrap();
        assert_eq!(doc, StatsDocument::from_json(GAME_JSON).unwrap());
    }

    #[test]
    fn server_error_status_is_an_error() {
        let url = serve_once("503 Service Unavailable", "{}");
        let err = client().fetch(&url).unwrap_err();
        assert!(matches!(err, StatsError::Http(e) if e.is_status()));
    }

    #[test]
    fn non_json_body_is_an_error() {
        let url = serve_once("200 OK", "<html>maintenance</html>");
        assert!(client().fetch(&url).is_err());
    }
}
