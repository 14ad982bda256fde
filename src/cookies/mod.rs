//! Cookie capture and session snapshots.
//!
//! This module turns the cookie string a page exposes into a
//! [`SessionSnapshot`](snapshot::SessionSnapshot) in storage-state form:
//!
//! - **Parsing**: [`CookiePairs`](jar::CookiePairs) splits the raw string, drops
//!   malformed fragments and resolves duplicate names
//! - **Reconstruction**: [`CookieEntry`](cookie_entry::CookieEntry) fills in the
//!   attributes the document API cannot report
//! - **Export/Import**: JSON with the `cookies`/`origins` layout
//!
//! # Reconstructed attributes
//!
//! | Field | Source |
//! |-------|--------|
//! | `name`, `value` | cookie string |
//! | `domain` | page hostname |
//! | `path` | always `/` |
//! | `expires` | always `-1` (session / unknown) |
//! | `httpOnly` | always `false` (HttpOnly cookies are never visible here) |
//! | `secure` | page loaded over `https` |
//! | `sameSite` | always `Lax` |
//!
//! # Example
//!
//! ```rust
//! use cookiesnap::cookies::snapshot::SessionSnapshot;
//!
//! let snapshot = SessionSnapshot::build("a=1; b=2; a=3", "example.com", true);
//! assert_eq!(snapshot.get("a").map(|c| c.value.as_str()), Some("3"));
//! println!("{}", snapshot.to_json_pretty()?);
//! # Ok::<(), cookiesnap::base::snaperror::SnapError>(())
//! ```

pub mod cookie_entry;
pub mod jar;
pub mod snapshot;
