use super::FetchError;
use reqwest::blocking::Client;
use std::time::Duration;

/// sends a textual Overpass query to a server endpoint, returning the raw
/// response body on a success status.
pub trait OverpassTransport {
    fn post_query(&self, endpoint: &str, query: &str) -> Result<String, FetchError>;
}

/// blocking HTTP transport. the query is POSTed as the urlencoded form
/// field `data`, and the whole exchange is bounded by the request timeout.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    const USER_AGENT: &'static str =
        concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    pub fn new(request_timeout: Duration) -> Result<ReqwestTransport, FetchError> {
        let client = Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(request_timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| FetchError::ClientBuildError(e.to_string()))?;
        Ok(ReqwestTransport { client })
    }
}

impl OverpassTransport for ReqwestTransport {
    fn post_query(&self, endpoint: &str, query: &str) -> Result<String, FetchError> {
        let to_fetch_error = |e: reqwest::Error| {
            if e.is_timeout() {
                FetchError::Timeout {
                    endpoint: String::from(endpoint),
                }
            } else {
                FetchError::Transport {
                    endpoint: String::from(endpoint),
                    message: e.to_string(),
                }
            }
        };
        let response = self
            .client
            .post(endpoint)
            .form(&[("data", query)])
            .send()
            .map_err(to_fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                endpoint: String::from(endpoint),
                status: status.as_u16(),
            });
        }
        response.text().map_err(to_fetch_error)
    }
}

#[cfg(test)]
mod tests {
    use super::{OverpassTransport, ReqwestTransport};
    use crate::model::overpass::FetchError;
    use std::{
        io::{Read, Write},
        net::{TcpListener, TcpStream},
        sync::mpsc,
        thread,
        time::Duration,
    };

    /// serves one connection on a local port: captures the raw request, waits
    /// `delay`, then writes `response`. returns the endpoint URL and a channel
    /// yielding the captured request.
    fn serve_once(response: String, delay: Duration) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/api/interpreter", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let _ = tx.send(request);
            thread::sleep(delay);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        });
        (endpoint, rx)
    }

    /// reads request headers plus a `content-length` body.
    fn read_request(stream: &mut TcpStream) -> String {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buffer).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buffer.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buffer).to_string()
    }

    #[test]
    fn test_posts_query_as_urlencoded_form() {
        let body = r#"{"elements":[]}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (endpoint, requests) = serve_once(response, Duration::ZERO);
        let transport = ReqwestTransport::new(Duration::from_secs(10)).unwrap();

        let result = transport.post_query(&endpoint, "way(1,2,3,4);out geom;").unwrap();
        assert_eq!(result, body);

        let request = requests.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(request.starts_with("POST /api/interpreter "), "{request}");
        assert!(
            request
                .to_ascii_lowercase()
                .contains("content-type: application/x-www-form-urlencoded"),
            "{request}"
        );
        assert!(
            request.ends_with("\r\n\r\ndata=way%281%2C2%2C3%2C4%29%3Bout+geom%3B"),
            "{request}"
        );
    }

    #[test]
    fn test_error_status_is_reported() {
        let (endpoint, _requests) = serve_once(
            String::from("HTTP/1.1 504 Gateway Timeout\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"),
            Duration::ZERO,
        );
        let transport = ReqwestTransport::new(Duration::from_secs(10)).unwrap();
        match transport.post_query(&endpoint, "[out:json];") {
            Err(FetchError::HttpStatus { endpoint: e, status }) => {
                assert_eq!(status, 504);
                assert_eq!(e, endpoint);
            }
            other => panic!("expected HttpStatus, found {other:?}"),
        }
    }

    #[test]
    fn test_slow_server_times_out() {
        let (endpoint, _requests) = serve_once(
            String::from("HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}"),
            Duration::from_secs(3),
        );
        let transport = ReqwestTransport::new(Duration::from_millis(300)).unwrap();
        match transport.post_query(&endpoint, "[out:json];") {
            Err(FetchError::Timeout { endpoint: e }) => assert_eq!(e, endpoint),
            other => panic!("expected Timeout, found {other:?}"),
        }
    }
}
