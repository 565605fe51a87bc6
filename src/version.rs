// SPDX-License-Identifier: MPL-2.0

//! Package versions and their canonical, comparable form.

use std::fmt;

use crate::error::SolveError;

/// The minimum number of dot-separated components a canonical version has.
/// Shorter raw versions are right-padded with `.0` components until they
/// reach this length.
const CANONICAL_MIN_PARTS: usize = 5;

/// A raw, as-given version string together with its canonical form.
///
/// Two versions are compared by their canonical form: the raw string
/// right-padded with `.0` components until it has at least
/// [`CANONICAL_MIN_PARTS`] components, then compared lexicographically as
/// strings (not component-by-component as integers). This is a known
/// limitation carried over unchanged from the source specification: `"9"`
/// sorts after `"10"` once padded (`"10.0.0.0.0"` is lexicographically less
/// than `"9.0.0.0.0"`), so catalogs that rely on numeric ordering across
/// double-digit components will see surprising comparisons. It is
/// deliberately not "fixed" here; see DESIGN.md.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    raw: String,
    canonical: String,
}

impl Version {
    /// Build a `Version` from its raw string form, computing the canonical
    /// form used for comparisons.
    pub fn parse(raw: impl Into<String>) -> Result<Self, SolveError> {
        let raw = raw.into();
        if raw.is_empty() || raw.split('.').any(|part| part.is_empty()) {
            return Err(SolveError::ParseError { input: raw });
        }
        let canonical = Self::canonicalize(&raw);
        Ok(Self { raw, canonical })
    }

    /// The version exactly as given by the catalog.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The canonical form used for ordering: right-padded with `.0`
    /// components to at least [`CANONICAL_MIN_PARTS`] components.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    fn canonicalize(raw: &str) -> String {
        let mut owned: Vec<String> = raw.split('.').map(str::to_string).collect();
        if owned.len() < CANONICAL_MIN_PARTS {
            owned.resize(CANONICAL_MIN_PARTS, "0".to_string());
        }
        owned.join(".")
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
