//! Session snapshots: the exportable record built from a page's cookies.

use crate::base::snaperror::SnapError;
use crate::cookies::cookie_entry::CookieEntry;
use crate::cookies::jar::CookiePairs;
use crate::dom::Document;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

/// What the host page exposes to a capture: its cookie string, hostname and transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub cookie: String,
    pub hostname: String,
    pub secure: bool,
}

impl PageContext {
    pub fn new(cookie: impl Into<String>, hostname: impl Into<String>, secure: bool) -> Self {
        Self {
            cookie: cookie.into(),
            hostname: hostname.into(),
            secure,
        }
    }

    /// Derive hostname and transport from the page URL.
    ///
    /// Only `https` counts as secure. URLs without a host (`about:blank`,
    /// `data:`) produce an empty hostname.
    pub fn from_url(url: &Url, cookie: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            hostname: url.host_str().unwrap_or("").to_string(),
            secure: url.scheme() == "https",
        }
    }

    /// Read the current cookie string and location from a host document.
    pub fn capture(document: &dyn Document) -> Self {
        Self::from_url(&document.location(), document.cookie())
    }
}

/// Reserved per-origin storage record. Never populated by a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginState {
    pub origin: String,
    #[serde(default)]
    pub local_storage: Vec<StorageItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageItem {
    pub name: String,
    pub value: String,
}

/// A captured cookie jar in storage-state form.
///
/// Built fresh per capture and never mutated afterwards; only accessors are exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    cookies: Vec<CookieEntry>,
    #[serde(default)]
    origins: Vec<OriginState>,
}

impl SessionSnapshot {
    /// Build a snapshot from a raw document cookie string.
    ///
    /// Total over all inputs: malformed fragments are dropped, an empty string
    /// gives an empty snapshot.
    pub fn build(raw_cookie: &str, hostname: &str, secure: bool) -> Self {
        let pairs = CookiePairs::parse(raw_cookie);
        let skipped = pairs.skipped();

        let cookies: Vec<CookieEntry> = pairs
            .into_iter()
            .map(|(name, value)| CookieEntry::captured(name, value, hostname, secure))
            .collect();

        tracing::debug!(
            hostname = %hostname,
            count = cookies.len(),
            skipped,
            secure,
            "built session snapshot"
        );

        Self {
            cookies,
            origins: Vec::new(),
        }
    }

    pub fn from_page(page: &PageContext) -> Self {
        Self::build(&page.cookie, &page.hostname, page.secure)
    }

    /// Parse a previously exported snapshot.
    ///
    /// Rejects snapshots that repeat a cookie name.
    pub fn from_json(json: &str) -> Result<Self, SnapError> {
        let snapshot: SessionSnapshot = serde_json::from_str(json)
            .map_err(|e| SnapError::invalid_snapshot(e.to_string()))?;

        let mut seen = HashSet::new();
        for entry in &snapshot.cookies {
            if !seen.insert(entry.name.as_str()) {
                return Err(SnapError::invalid_snapshot(format!(
                    "duplicate cookie name: {}",
                    entry.name
                )));
            }
        }

        Ok(snapshot)
    }

    /// Human-readable export with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, SnapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String, SnapError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn cookies(&self) -> &[CookieEntry] {
        &self.cookies
    }

    pub fn origins(&self) -> &[OriginState] {
        &self.origins
    }

    pub fn get(&self, name: &str) -> Option<&CookieEntry> {
        self.cookies.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Render the cookies as a `Cookie` request header value (`a=1; b=2`).
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
