//! Per-call request context used to resolve relative URLs.

use url::Url;

use crate::error::{Result, SanitizerError};

/// Context describing where the document under sanitization came from.
///
/// Link-bearing attributes are rewritten against this context: `host` is
/// appended to site-root-relative links (`/1.png`), `path` additionally to
/// document-relative ones (`next.html`), and `protocol` to protocol-relative
/// ones (`//cdn.com/x.png`).
///
/// The [`Default`] value is all-empty strings and is used verbatim when a
/// caller supplies no options; caller-supplied options are normalized first
/// (see [`normalized`](Options::normalized)).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Hostname of the document source, e.g. `nowhere.com`.
    pub host: String,
    /// Directory path of the source document, e.g. `/page/`.
    pub path: String,
    /// Scheme including the trailing colon, e.g. `http:`.
    pub protocol: String,
}

impl Options {
    /// Create options from host, path and protocol strings.
    pub fn new(
        host: impl Into<String>,
        path: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
            protocol: protocol.into(),
        }
    }

    /// Derive options from the document's source URL.
    ///
    /// The path component is cut back to the containing directory, so links
    /// relative to the document resolve the way a browser would resolve
    /// them.
    ///
    /// # Example
    ///
    /// ```
    /// use html_sanitizer::Options;
    ///
    /// let options = Options::from_url("http://nowhere.com/page/index.html")?;
    /// assert_eq!(options, Options::new("nowhere.com", "/page/", "http:"));
    /// # Ok::<(), html_sanitizer::SanitizerError>(())
    /// ```
    pub fn from_url(source: &str) -> Result<Self> {
        let parsed = Url::parse(source)?;
        let host = parsed
            .host_str()
            .ok_or_else(|| SanitizerError::MissingHost(source.to_string()))?
            .to_string();

        let path = parsed.path();
        let path = match path.rfind('/') {
            Some(end) => path[..=end].to_string(),
            None => String::from("/"),
        };

        Ok(Self {
            host,
            path,
            protocol: format!("{}:", parsed.scheme()),
        })
    }

    /// Apply the normalization rules assumed by the URL rewriter:
    ///
    /// - `path` is forced to start and end with `/`;
    /// - a trailing `/` is stripped from `host`;
    /// - a trailing `//` is stripped from `protocol`.
    pub fn normalized(&self) -> Options {
        let mut path = self.path.clone();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        if !path.ends_with('/') {
            path.push('/');
        }

        Options {
            host: self
                .host
                .strip_suffix('/')
                .unwrap_or(&self.host)
                .to_string(),
            path,
            protocol: self
                .protocol
                .strip_suffix("//")
                .unwrap_or(&self.protocol)
                .to_string(),
        }
    }
}
