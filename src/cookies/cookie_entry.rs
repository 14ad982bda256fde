use cookie::{Cookie, Expiration, SameSite};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;

/// `expires` value for session cookies and cookies whose expiry is unknown.
pub const SESSION_EXPIRES: i64 = -1;

/// Path recorded for every captured cookie.
pub const DEFAULT_PATH: &str = "/";

/// SameSite recorded for every captured cookie.
pub const DEFAULT_SAME_SITE: SameSite = SameSite::Lax;

/// One cookie in a session snapshot.
///
/// Field order is the export order; the key names match the storage-state
/// format browser automation tools import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieEntry {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub expires: i64,
    pub http_only: bool,
    pub secure: bool,
    #[serde(serialize_with = "serialize_same_site", deserialize_with = "deserialize_same_site")]
    pub same_site: SameSite,
}

impl CookieEntry {
    /// Reconstruct an entry from a `name=value` pair seen in a document cookie string.
    ///
    /// Only name and value are observable there. Domain comes from the capturing
    /// page, `secure` from its scheme, everything else is a fixed default.
    pub fn captured(
        name: impl Into<String>,
        value: impl Into<String>,
        hostname: &str,
        secure: bool,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: hostname.to_string(),
            path: DEFAULT_PATH.to_string(),
            expires: SESSION_EXPIRES,
            http_only: false,
            secure,
            same_site: DEFAULT_SAME_SITE,
        }
    }

    pub fn is_session(&self) -> bool {
        self.expires == SESSION_EXPIRES
    }

    /// Expiry as understood by the `cookie` crate.
    ///
    /// The sentinel and timestamps outside the representable range both map to
    /// [`Expiration::Session`].
    pub fn expiration(&self) -> Expiration {
        if self.is_session() {
            return Expiration::Session;
        }
        match OffsetDateTime::from_unix_timestamp(self.expires) {
            Ok(datetime) => Expiration::DateTime(datetime),
            Err(_) => Expiration::Session,
        }
    }

    /// Convert into a `cookie::Cookie` for replay into another cookie store.
    pub fn to_cookie(&self) -> Cookie<'static> {
        Cookie::build((self.name.clone(), self.value.clone()))
            .domain(self.domain.clone())
            .path(self.path.clone())
            .secure(self.secure)
            .http_only(self.http_only)
            .same_site(self.same_site)
            .expires(self.expiration())
            .build()
    }
}

fn serialize_same_site<S: Serializer>(same_site: &SameSite, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(same_site)
}

fn deserialize_same_site<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SameSite, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "strict" => Ok(SameSite::Strict),
        "lax" => Ok(SameSite::Lax),
        "none" | "no_restriction" => Ok(SameSite::None),
        other => Err(serde::de::Error::custom(format!("unknown sameSite value: {other}"))),
    }
}
