//! A tiny mock HTTP server that records outgoing requests and returns canned
//! responses.
//!
//! Only HTTP/1.x is implemented, which is all the logout client needs to be
//! observed speaking.

use crate::{pool::pool, request::Request, responder::Responder, response::Response};
use std::{
    io::{Cursor, Read, Write},
    net::{SocketAddr, TcpStream},
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc, Mutex,
    },
    thread,
    time::{Duration, Instant},
};
use tiny_http::Server;

/// A mock HTTP server.
#[derive(Clone)]
pub struct Mock(Arc<Inner>);

struct Inner {
    server: Server,

    requests: Mutex<Vec<Request>>,

    /// Number of requests received since the mock was created.
    request_counter: AtomicU32,

    /// Tried in order until one returns a response. Requests nobody answers
    /// get a 404.
    responders: Vec<Box<dyn Responder>>,
}

impl Mock {
    /// Create a new mock server with a single responder.
    pub fn new<R: Responder>(responder: R) -> Self {
        Self::builder().responder(responder).build()
    }

    /// Create a builder for a mock with several responders.
    pub fn builder() -> Builder {
        Builder {
            responders: Vec::new(),
        }
    }

    /// Get the socket address of this mock server.
    pub fn addr(&self) -> SocketAddr {
        self.0.server.server_addr().to_ip().unwrap()
    }

    /// Get the HTTP URL of this mock server.
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr())
    }

    /// Get the number of requests received so far by this mock.
    pub fn requests_received(&self) -> u32 {
        self.0.request_counter.load(Ordering::SeqCst)
    }

    /// Get the first request received by this mock.
    pub fn request(&self) -> Request {
        let request = self.0.requests.lock().unwrap().first().cloned();

        request.expect("no request received")
    }

    /// Get all requests received by this mock, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.0.requests.lock().unwrap().clone()
    }

    /// Block until at least `count` requests have been received, or the
    /// timeout elapses. Returns whether the count was reached.
    pub fn wait_for_requests(&self, count: u32, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;

        while self.requests_received() < count {
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(10));
        }

        true
    }

    #[rustfmt::skip]
    fn is_ready(&self) -> bool {
        TcpStream::connect(self.addr())
            .and_then(|mut stream| {
                stream.write_all(b"\
                    GET /health HTTP/1.1\r\n\
                    host: api.mock.local\r\n\
                    connection: close\r\n\
                    \r\n\
                ")?;

                let mut response = Vec::new();
                stream.read_to_end(&mut response)?;

                Ok(response.ends_with(b"\r\nOK"))
            })
            .unwrap_or(false)
    }

    fn wait_until_ready(&self) {
        for _ in 0..9 {
            if self.is_ready() {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }

        panic!("mock server did not become ready after 9 tries");
    }

    fn handle_request(&self, mut request: tiny_http::Request) {
        if request
            .headers()
            .iter()
            .any(|h| h.field.equiv("host") && h.value.as_str() == "api.mock.local")
        {
            if request.url() == "/health" {
                let _ = request.respond(tiny_http::Response::new(
                    200.into(),
                    vec![],
                    Cursor::new(b"OK".to_vec()),
                    Some(2),
                    None,
                ));
            }
            return;
        }

        let mut body = Vec::new();

        if let Some(len) = request.body_length() {
            body.reserve(len);
        }

        request.as_reader().read_to_end(&mut body).unwrap();

        let mock_request = Request {
            number: self.0.request_counter.load(Ordering::SeqCst),
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers: request
                .headers()
                .iter()
                .map(|header| (header.field.to_string(), header.value.to_string()))
                .collect(),
            body,
        };

        let response = self
            .0
            .responders
            .iter()
            .find_map(|responder| responder.respond(&mock_request))
            .unwrap_or_else(|| Response::new(404));

        // Record before counting so that anyone waiting on the counter sees
        // the request in the log.
        self.0.requests.lock().unwrap().push(mock_request);
        self.0.request_counter.fetch_add(1, Ordering::SeqCst);

        let _ = request.respond(response.into_http_response());
    }
}

/// A builder for creating mock servers.
pub struct Builder {
    responders: Vec<Box<dyn Responder>>,
}

impl Builder {
    /// Add a responder to the mock. Responders are tried in the order that they
    /// are added to the builder.
    pub fn responder<R: Responder>(mut self, responder: R) -> Self {
        self.responders.push(Box::new(responder));
        self
    }

    /// Start a new mock server.
    pub fn build(self) -> Mock {
        let mock = Mock(Arc::new(Inner {
            server: Server::http("127.0.0.1:0").unwrap(),
            requests: Default::default(),
            request_counter: AtomicU32::new(0),
            responders: self.responders,
        }));

        pool().execute({
            let mock = mock.clone();

            move || {
                for request in mock.0.server.incoming_requests() {
                    mock.handle_request(request);
                }
            }
        });

        mock.wait_until_ready();

        mock
    }
}
