//! Local stand-ins for the Notifier server, used by the unit tests.

use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use serde_json::Value;
use tiny_http::{Response, Server};

/// What the mock saw for one request.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: String,
    pub content_type: Option<String>,
    pub body: String,
}

type Handler = Box<dyn Fn(&str) -> (u16, String) + Send>;

/// A tiny HTTP server on `127.0.0.1:0` that records every request and
/// answers with whatever its handler returns.
pub struct MockNotifier {
    addr: SocketAddr,
    server: Arc<Server>,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl MockNotifier {
    /// Validates like the real Notifier: `title` and `body` must be
    /// non-empty strings, anything else in the object is ignored.
    pub fn conformant() -> Self {
        Self::start(Box::new(validate_notification))
    }

    pub fn always(status: u16, body: &'static str) -> Self {
        Self::start(Box::new(move |_| (status, body.to_string())))
    }

    fn start(handler: Handler) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let received = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let received = Arc::clone(&received);
            thread::spawn(move || {
                while let Ok(mut request) = server.recv() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let content_type = request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("Content-Type"))
                        .map(|h| h.value.as_str().to_string());

                    received.lock().unwrap().push(ReceivedRequest {
                        method: request.method().as_str().to_string(),
                        content_type,
                        body: body.clone(),
                    });

                    let (status, text) = handler(&body);
                    let _ = request.respond(Response::from_string(text).with_status_code(status));
                }
            })
        };

        Self {
            addr,
            server,
            received,
            handle: Some(handle),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for MockNotifier {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn validate_notification(body: &str) -> (u16, String) {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (400, "Invalid JSON".to_string());
    };

    for field in ["title", "body"] {
        match value.get(field).and_then(Value::as_str) {
            Some(text) if !text.is_empty() => {}
            Some(_) => return (400, format!("Field '{field}' must not be empty")),
            None => return (400, format!("Missing required field '{field}'")),
        }
    }

    (200, r#"{"status":"ok"}"#.to_string())
}

/// A URL on a local port that nothing is listening on.
pub fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
