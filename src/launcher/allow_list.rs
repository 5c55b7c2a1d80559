//! URL allow-list for the launcher.
//!
//! An entry matches a URL when the origins (scheme + host + port) are equal
//! and the URL path equals the entry path or lies below it segment by
//! segment. An entry without a path admits every path on its origin.

use super::types::LaunchError;

/// Origin and path of an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UrlParts {
    origin: String,
    path: String,
}

impl UrlParts {
    fn parse(url: &str) -> Option<Self> {
        let (scheme, rest) = url.split_once("://")?;
        if scheme != "http" && scheme != "https" {
            return None;
        }
        let (host, path) = match rest.find('/') {
            Some(pos) => (&rest[..pos], &rest[pos..]),
            None => (rest, "/"),
        };
        if host.is_empty() {
            return None;
        }
        let path = path.split(['?', '#']).next().unwrap_or("/");
        Some(Self {
            origin: format!("{}://{}", scheme, host),
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
        })
    }

    /// Path prefixes match on whole segments only.
    fn admits(&self, url: &UrlParts) -> bool {
        if self.origin != url.origin {
            return false;
        }
        match url.path.strip_prefix(self.path.as_str()) {
            Some(rest) => rest.is_empty() || self.path.ends_with('/') || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Validated set of URL prefixes the launcher may open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: Vec<UrlParts>,
}

impl AllowList {
    /// Build an allow-list, rejecting entries that are not http(s) URLs with
    /// a host or that carry a query string or fragment.
    pub fn new<S: AsRef<str>>(entries: &[S]) -> Result<Self, LaunchError> {
        let mut parsed = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.as_ref();
            if entry.contains(['?', '#']) {
                return Err(LaunchError::InvalidAllowList(format!(
                    "query strings and fragments are not allowed: \"{}\"",
                    entry
                )));
            }
            let parts = UrlParts::parse(entry).ok_or_else(|| {
                LaunchError::InvalidAllowList(format!(
                    "\"{}\" must be an http or https URL with a host",
                    entry
                ))
            })?;
            parsed.push(parts);
        }
        Ok(Self { entries: parsed })
    }

    /// An allow-list that admits nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn permits(&self, url: &str) -> bool {
        match UrlParts::parse(url) {
            Some(parts) => self.entries.iter().any(|entry| entry.admits(&parts)),
            None => false,
        }
    }
}
