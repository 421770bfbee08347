//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use approval_console::config::ApiConfig;

/// Config pointed at a mock backend, with short deadlines so failure tests
/// run in test time rather than the production 60s.
pub fn test_config(addr: SocketAddr) -> ApiConfig {
    ApiConfig {
        base_url: format!("http://{}", addr),
        request_timeout_secs: 2,
        slow_warning_secs: 1,
    }
}

/// Start a programmable mock API backend on an ephemeral port.
///
/// The handler receives (method, path, body) and returns a status code and
/// JSON body. Good enough HTTP for reqwest: one request per connection.
pub async fn start_mock_api<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String, String, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let Some((method, path, body)) = read_request(&mut socket).await else {
                            return;
                        };
                        let (status, response_body) = f(method, path, body).await;
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line(status),
                            response_body.len(),
                            response_body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a backend that accepts connections but never answers, for timeout
/// classification tests.
#[allow(dead_code)]
pub async fn start_stalled_api() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        while let Ok(n) = socket.read(&mut buf).await {
                            if n == 0 {
                                break;
                            }
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Reserve a port with nothing listening on it.
#[allow(dead_code)]
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<(String, String, String)> {
    let mut buf = vec![0u8; 16_384];
    let mut read = 0;

    let head_end = loop {
        if let Some(pos) = find_subslice(&buf[..read], b"\r\n\r\n") {
            break pos + 4;
        }
        if read == buf.len() {
            return None;
        }
        match socket.read(&mut buf[read..]).await {
            Ok(0) | Err(_) => return None,
            Ok(n) => read += n,
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let content_length = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[head_end..read].to_vec();
    while body.len() < content_length {
        let mut chunk = vec![0u8; content_length - body.len()];
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => body.extend_from_slice(&chunk[..n]),
        }
    }

    Some((method, path, String::from_utf8_lossy(&body).to_string()))
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        201 => "201 Created",
        204 => "204 No Content",
        400 => "400 Bad Request",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    }
}

/// JSON for one workflow record in the backend's wire format.
#[allow(dead_code)]
pub fn workflow_json(id: &str, name: &str, status: &str, created_at: &str) -> String {
    format!(
        r#"{{"_id":"{}","name":"{}","description":"test workflow","type":"deployment","riskLevel":"medium","status":"{}","createdAt":"{}"}}"#,
        id, name, status, created_at
    )
}

/// JSON for one approval record.
#[allow(dead_code)]
pub fn approval_json(id: &str, workflow_id: &str, status: &str) -> String {
    format!(
        r#"{{"_id":"{}","workflowId":"{}","status":"{}","createdAt":"2026-08-01T10:00:00Z"}}"#,
        id, workflow_id, status
    )
}
