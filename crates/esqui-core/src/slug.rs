//! Resort identifiers.
//!
//! A slug is an opaque token that doubles as a URL path segment on the source
//! site and as the seed of the human-readable resort name. Nothing checks that
//! the resort exists; an unknown slug surfaces later as a failed fetch or an
//! empty extraction.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResortSlug(String);

impl ResortSlug {
    /// Validates that `raw` can be used verbatim as a single URL path segment.
    ///
    /// Only RFC 3986 unreserved characters are accepted, and the dot segments
    /// `.` / `..` are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSlug`] when the slug is empty or contains
    /// a character that would need escaping.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidSlug {
            slug: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(invalid("must be non-empty"));
        }
        if raw == "." || raw == ".." {
            return Err(invalid("dot segments are not allowed"));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
        {
            return Err(invalid("only ASCII letters, digits, '-', '_', '.' and '~' are allowed"));
        }

        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable name derived from the slug alone: hyphens become spaces
    /// and every word is title-cased (`"jaca-astun"` becomes `"Jaca Astun"`).
    #[must_use]
    pub fn display_name(&self) -> String {
        title_case(&self.0.replace('-', " "))
    }
}

/// Uppercases each letter that follows a non-letter and lowercases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

impl std::fmt::Display for ResortSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ResortSlug {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResortSlug {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ResortSlug> for String {
    fn from(slug: ResortSlug) -> Self {
        slug.0
    }
}

impl AsRef<str> for ResortSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
