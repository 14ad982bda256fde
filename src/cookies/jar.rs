//! Parsing of the document-level cookie string (`document.cookie`).
//!
//! The string is a `; `-separated list of `name=value` pairs with no attributes.

use std::collections::HashMap;

/// Ordered `name=value` pairs decoded from a raw cookie string.
///
/// Duplicate names resolve as last-write-wins on the value while the name keeps
/// the position of its first occurrence: `"a=1; b=2; a=3"` yields `[a=3, b=2]`.
/// The tie-break is kept explicit here instead of relying on a map's iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookiePairs {
    pairs: Vec<(String, String)>,
    skipped: usize,
}

impl CookiePairs {
    /// Parse a raw cookie string. Never fails.
    ///
    /// Segments are trimmed as a whole; the name and value are then taken verbatim
    /// around the first `=`, so `"a=b=c"` has value `"b=c"`. Segments without `=`
    /// or with an empty name are dropped and counted in [`skipped`](Self::skipped).
    pub fn parse(raw: &str) -> Self {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut skipped = 0;

        for (position, segment) in raw.split(';').map(str::trim).enumerate() {
            if segment.is_empty() {
                continue;
            }

            let Some((name, value)) = segment.split_once('=') else {
                tracing::trace!(position, len = segment.len(), "dropping cookie fragment without '='");
                skipped += 1;
                continue;
            };

            if name.is_empty() {
                tracing::trace!(position, len = segment.len(), "dropping cookie fragment with empty name");
                skipped += 1;
                continue;
            }

            match positions.get(name) {
                Some(&idx) => pairs[idx].1 = value.to_string(),
                None => {
                    positions.insert(name, pairs.len());
                    pairs.push((name.to_string(), value.to_string()));
                }
            }
        }

        Self { pairs, skipped }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of malformed fragments dropped during parsing. Empty segments are not counted.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl IntoIterator for CookiePairs {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
