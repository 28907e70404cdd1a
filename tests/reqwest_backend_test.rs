use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cloudhub_portal::session::{SessionSnapshot, SessionUser};
use cloudhub_portal::transport::{ApiClient, ApiError, ApiRequest, ReqwestBackend};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Requests seen by the stub server, lowercased, one entry per connection.
type Seen = Arc<Mutex<Vec<String>>>;

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.expect("read req");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(end) = text.find("\r\n\r\n") {
            let content_length = text[..end]
                .lines()
                .find_map(|l| {
                    l.to_ascii_lowercase()
                        .strip_prefix("content-length:")
                        .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

async fn start_server() -> (String, Seen) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("addr");
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));

    let seen_bg = Arc::clone(&seen);
    tokio::spawn(async move {
        loop {
            let (mut stream, _) = match listener.accept().await {
                Ok(v) => v,
                Err(_) => break,
            };
            let req_text = read_request(&mut stream).await;
            let path = req_text
                .lines()
                .next()
                .and_then(|first| first.split_whitespace().nth(1))
                .unwrap_or_default()
                .to_string();
            seen_bg.lock().unwrap().push(req_text.to_ascii_lowercase());

            let (status, content_type, body) = if path.starts_with("/api/v1/echo") {
                (
                    "200 OK",
                    "application/json",
                    json!({"errorCode": "00000", "status": 200, "data": {"echo": true}})
                        .to_string(),
                )
            } else if path.starts_with("/api/v1/expired") {
                (
                    "401 Unauthorized",
                    "application/json",
                    json!({"errorCode": "A1001"}).to_string(),
                )
            } else if path.starts_with("/api/v1/broken") {
                ("502 Bad Gateway", "text/plain", "Bad Gateway".to_string())
            } else {
                ("404 Not Found", "text/plain", String::new())
            };
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    (format!("http://{addr}"), seen)
}

fn client(calls: &Arc<AtomicUsize>) -> ApiClient<ReqwestBackend> {
    let session = SessionSnapshot::signed_in(
        "tok-x",
        SessionUser {
            user_id: 7,
            username: "grace".to_string(),
            role: Some("ADMIN".to_string()),
            email: None,
        },
    );
    let backend = ReqwestBackend::new(Duration::from_secs(5)).expect("backend");
    let calls = Arc::clone(calls);
    ApiClient::new(backend, Arc::new(session)).on_login_expired(move || {
        calls.fetch_add(1, Ordering::SeqCst);
    })
}

#[tokio::test]
async fn test_headers_query_and_body_reach_the_server() {
    let (base, seen) = start_server().await;
    let calls = Arc::new(AtomicUsize::new(0));
    let client = client(&calls);

    let request = ApiRequest::post(format!("{base}/api/v1/echo"))
        .query("page", 1)
        .json(&json!({"name": "Reports"}))
        .unwrap();
    let payload = client.execute(request).await.unwrap();
    assert_eq!(payload["data"]["echo"], true);

    let seen = seen.lock().unwrap();
    let request = &seen[0];
    assert!(
        request.starts_with("post /api/v1/echo?page=1 http/1.1"),
        "{request}"
    );
    assert!(
        request.contains("\r\nauthorization: tok-x\r\n"),
        "{request}"
    );
    assert!(
        request.contains("\r\ncontent-type: application/json\r\n"),
        "{request}"
    );
    assert!(request.ends_with(r#"{"name":"reports"}"#), "{request}");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_expired_reply_fires_hook_once() {
    let (base, seen) = start_server().await;
    let calls = Arc::new(AtomicUsize::new(0));
    let client = client(&calls);

    let err = client
        .execute(ApiRequest::get(format!("{base}/api/v1/expired")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired(_)), "{err:?}");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.error_code(), Some("A1001"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // No body, so no content type.
    let seen = seen.lock().unwrap();
    assert!(!seen[0].contains("content-type:"), "{}", seen[0]);
}

#[tokio::test]
async fn test_plain_text_failure_becomes_application_error() {
    let (base, _seen) = start_server().await;
    let calls = Arc::new(AtomicUsize::new(0));
    let client = client(&calls);

    let err = client
        .execute(ApiRequest::get(format!("{base}/api/v1/broken")))
        .await
        .unwrap_err();
    let body = err.body().unwrap();
    assert!(matches!(err, ApiError::Application(_)), "{err:?}");
    assert_eq!(body.status, 502);
    assert_eq!(body.message, "Bad Gateway");
    assert_eq!(body.error_code, "");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
