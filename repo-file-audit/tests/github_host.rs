use repo_file_audit::{AuditRequest, GitHubHost, HostError, RepositoryHost};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const ERROR_BODY: &str =
    r#"{"message":"boom","documentation_url":"https://docs.github.com/rest"}"#;

const RATE_LIMIT_BODY: &str = r#"{
  "resources": {
    "core": {"limit": 5000, "used": 1, "remaining": 4999, "reset": 1700000000},
    "search": {"limit": 30, "used": 29, "remaining": 1, "reset": 1700000060},
    "graphql": {"limit": 5000, "used": 0, "remaining": 5000, "reset": 1700000000}
  },
  "rate": {"limit": 5000, "used": 1, "remaining": 4999, "reset": 1700000000}
}"#;

/// Local HTTP server answering every request with the same response.
struct StubApi {
    url: String,
    hits: Arc<AtomicUsize>,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    async fn start(status: u16, body: &'static str) -> Self {
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let request_lines = Arc::new(Mutex::new(Vec::new()));

        let server_hits = Arc::clone(&hits);
        let server_lines = Arc::clone(&request_lines);
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                server_hits.fetch_add(1, Ordering::SeqCst);

                let mut head = Vec::new();
                let mut chunk = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&head);
                if let Some(line) = head.lines().next() {
                    server_lines.lock().unwrap().push(line.to_string());
                }

                let response = format!(
                    "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            url,
            hits,
            request_lines,
        }
    }

    fn host(&self) -> GitHubHost {
        let request = AuditRequest::new("acme", "NOTICE.md", "secret")
            .unwrap()
            .with_api_url(self.url.clone());
        GitHubHost::new(&request).unwrap()
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let api = StubApi::start(404, ERROR_BODY).await;

    let result = api.host().get_file("acme", "a", "NOTICE.md", "master").await;

    assert!(matches!(result, Err(HostError::NotFound { ref message }) if message == "boom"));
    assert_eq!(api.hits(), 1);

    let line = &api.request_lines()[0];
    assert!(line.starts_with("GET /repos/acme/a/contents/NOTICE.md"));
    assert!(line.contains("ref=master"));
}

#[tokio::test]
async fn auth_failures_are_rejected() {
    for status in [401, 403] {
        let api = StubApi::start(status, ERROR_BODY).await;

        let result = api.host().get_file("acme", "a", "NOTICE.md", "master").await;

        assert!(
            matches!(result, Err(HostError::Rejected { status: s, .. }) if s == status),
            "status {status} gave {result:?}"
        );
        assert_eq!(api.hits(), 1);
    }
}

#[tokio::test]
async fn server_error_is_sent_once() {
    let api = StubApi::start(500, ERROR_BODY).await;

    let result = api.host().get_file("acme", "a", "NOTICE.md", "master").await;

    assert!(matches!(result, Err(HostError::Rejected { status: 500, .. })));
    assert_eq!(api.hits(), 1);
}

#[tokio::test]
async fn listing_requests_first_public_page_once() {
    let api = StubApi::start(500, ERROR_BODY).await;

    let result = api.host().list_public_repositories("acme").await;

    assert!(matches!(result, Err(HostError::Rejected { status: 500, .. })));
    assert_eq!(api.hits(), 1);

    let line = &api.request_lines()[0];
    assert!(line.starts_with("GET /orgs/acme/repos"));
    let params: Vec<&str> = line.split(['?', '&', ' ']).collect();
    assert!(params.contains(&"type=public"));
    assert!(params.contains(&"per_page=100"));
    assert!(params.contains(&"page=1"));
}

#[tokio::test]
async fn reads_search_quota() {
    let api = StubApi::start(200, RATE_LIMIT_BODY).await;

    let info = api.host().search_rate_limit().await.unwrap();

    assert_eq!(info.remaining, 1);
    assert_eq!(info.reset, 1700000060);
    assert_eq!(info.limit, 30);
    assert!(api.request_lines()[0].starts_with("GET /rate_limit"));
}
