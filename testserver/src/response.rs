use std::io::Cursor;

/// A canned response to send back from a mock.
#[derive(Clone, Debug)]
pub struct Response {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}

impl Response {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl ToString, value: impl ToString) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub(crate) fn into_http_response(self) -> tiny_http::Response<Cursor<Vec<u8>>> {
        let len = self.body.len();

        tiny_http::Response::new(
            self.status_code.into(),
            self.headers
                .into_iter()
                .filter_map(|(name, value)| {
                    tiny_http::Header::from_bytes(name.into_bytes(), value.into_bytes()).ok()
                })
                .collect(),
            Cursor::new(self.body),
            Some(len),
            None,
        )
    }
}
