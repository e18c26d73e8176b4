/// A request as recorded by a mock.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    /// Position of this request in the order the mock received them.
    pub number: u32,
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Request {
    pub fn get_header(&self, name: impl AsRef<str>) -> impl Iterator<Item = &str> + '_ {
        let name_lower = name.as_ref().to_lowercase();

        self.headers
            .iter()
            .filter(move |(name, _)| name.to_lowercase() == name_lower)
            .map(|(_, value)| value.as_str())
    }

    pub fn expect_header(&self, name: impl AsRef<str>, value: impl AsRef<str>) {
        let name = name.as_ref();

        self.get_header(name)
            .find(|v| *v == value.as_ref())
            .unwrap_or_else(|| panic!("no header named `{}` with value expected found", name));
    }

    pub fn expect_no_header(&self, name: impl AsRef<str>) {
        let name = name.as_ref();

        if let Some(value) = self.get_header(name).next() {
            panic!("expected no header named `{}`, found `{}`", name, value);
        }
    }

    pub fn expect_empty_body(&self) {
        assert!(
            self.body.is_empty(),
            "expected an empty body, got {} bytes",
            self.body.len()
        );
    }
}
