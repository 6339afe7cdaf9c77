use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// How much of a response is sent before the connection goes silent
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Complete,
    /// Accept the request and never answer
    HangBeforeHeaders,
    /// Send headers announcing this many bytes plus the body, then stall
    HangAfterBody(u64),
}

/// Canned response for one path
#[derive(Clone)]
pub struct Route {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub delivery: Delivery,
}

impl Route {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.into().into_bytes(),
            delivery: Delivery::Complete,
        }
    }

    pub fn zip(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: "application/zip",
            body,
            delivery: Delivery::Complete,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: b"nope".to_vec(),
            delivery: Delivery::Complete,
        }
    }

    pub fn hang() -> Self {
        Self {
            delivery: Delivery::HangBeforeHeaders,
            ..Self::status(200)
        }
    }

    /// Announce `declared` bytes, send `prefix`, then stall
    pub fn stalled_zip(prefix: Vec<u8>, declared: u64) -> Self {
        Self {
            delivery: Delivery::HangAfterBody(declared),
            ..Self::zip(prefix)
        }
    }
}

/// Loopback HTTP/1.1 server; one thread per connection, serving until the
/// test process exits.
pub struct ReleaseServer {
    base: String,
    routes: Arc<Mutex<HashMap<String, Route>>>,
    hits: Arc<Mutex<Vec<String>>>,
}

impl ReleaseServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let routes: Arc<Mutex<HashMap<String, Route>>> = Arc::default();
        let hits: Arc<Mutex<Vec<String>>> = Arc::default();

        let thread_routes = routes.clone();
        let thread_hits = hits.clone();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = thread_routes.clone();
                let hits = thread_hits.clone();
                thread::spawn(move || serve(stream, &routes, &hits));
            }
        });

        Self { base, routes, hits }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn route(&self, path: &str, route: Route) {
        self.routes.lock().unwrap().insert(path.to_string(), route);
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

fn serve(
    stream: TcpStream,
    routes: &Mutex<HashMap<String, Route>>,
    hits: &Mutex<Vec<String>>,
) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) => break,
            Ok(_) if header == "\r\n" => break,
            Ok(_) => {}
            Err(_) => return,
        }
    }

    let path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    hits.lock().unwrap().push(path.clone());

    let route = routes
        .lock()
        .unwrap()
        .get(&path)
        .cloned()
        .unwrap_or_else(|| Route::status(404));

    let mut stream = reader.into_inner();
    if route.delivery == Delivery::HangBeforeHeaders {
        hold(stream);
    }

    let length = match route.delivery {
        Delivery::HangAfterBody(declared) => declared,
        _ => route.body.len() as u64,
    };
    let head = format!(
        "HTTP/1.1 {} X\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status, route.content_type, length
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();

    if let Delivery::HangAfterBody(_) = route.delivery {
        hold(stream);
    }
}

/// Keep the connection open without sending anything
fn hold(_stream: TcpStream) -> ! {
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
