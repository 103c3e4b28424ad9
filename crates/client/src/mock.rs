//! Minimal HTTP/1.1 server for exercising the client against canned responses.

use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// One request as the server received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Request target: path plus query string.
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

pub struct MockServer {
    listener: TcpListener,
    pub base_url: String,
}

impl MockServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let port = listener.local_addr().unwrap().port();
        let base_url = format!("http://127.0.0.1:{port}");
        Self { listener, base_url }
    }

    /// Answer one connection per response, in order, and hand back what was
    /// received.
    pub fn serve(self, responses: Vec<(u16, String)>) -> JoinHandle<Vec<RecordedRequest>> {
        let count = responses.len();
        let responses = std::sync::Mutex::new(responses.into_iter());
        self.serve_with(count, move |_| {
            responses
                .lock()
                .unwrap()
                .next()
                .expect("more requests than canned responses")
        })
    }

    /// Answer `count` connections, choosing each response from the request.
    pub fn serve_with<F>(self, count: usize, respond: F) -> JoinHandle<Vec<RecordedRequest>>
    where
        F: Fn(&RecordedRequest) -> (u16, String) + Send + 'static,
    {
        tokio::spawn(async move {
            let mut recorded = Vec::with_capacity(count);
            for _ in 0..count {
                let (mut stream, _) = self.listener.accept().await.unwrap();
                let request = read_request(&mut stream).await;
                let (status, body) = respond(&request);
                recorded.push(request);

                let response = format!(
                    "HTTP/1.1 {status} OK\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\
                     \r\n\
                     {body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
            recorded
        })
    }
}

async fn read_request(stream: &mut TcpStream) -> RecordedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before request headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split(' ');
    let method = request_line.next().unwrap_or_default().to_owned();
    let target = request_line.next().unwrap_or_default().to_owned();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_owned()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .map_or(0, |(_, v)| v.parse::<usize>().unwrap());

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before request body");
        buf.extend_from_slice(&chunk[..n]);
    }

    let body =
        String::from_utf8_lossy(&buf[header_end..header_end + content_length]).into_owned();

    RecordedRequest {
        method,
        target,
        headers,
        body,
    }
}
