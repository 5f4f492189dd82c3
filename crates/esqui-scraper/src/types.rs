//! Status record types published by the API.
//!
//! Field names on the wire are the Spanish keys existing clients read
//! (`nombre`, `remontes`, `kilometros`, `nieve`, `estado`), so the Rust names
//! are mapped with `#[serde(rename)]`.

use chrono::{DateTime, Local};
use esqui_core::ResortSlug;
use serde::{Serialize, Serializer};

/// How the two raw strings of a measurement are joined for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Joint {
    /// `"12/20"`: an open count over its total.
    Ratio,
    /// `"85 cm"`: a quantity followed by its unit.
    Quantity,
}

/// One extracted indicator, kept as the two raw strings found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    value: String,
    unit: String,
    joint: Joint,
}

impl Measurement {
    /// Open/total pair. Every `/` in `total` is dropped, since the page renders
    /// the denominator as `"/20"`.
    #[must_use]
    pub fn ratio(value: impl Into<String>, total: &str) -> Self {
        Self {
            value: value.into(),
            unit: total.replace('/', ""),
            joint: Joint::Ratio,
        }
    }

    #[must_use]
    pub fn quantity(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
            joint: Joint::Quantity,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Denominator for ratios, unit for quantities.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.joint {
            Joint::Ratio => write!(f, "{}/{}", self.value, self.unit),
            Joint::Quantity => write!(f, "{} {}", self.value, self.unit),
        }
    }
}

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The three indicators of a resort page. Each is found independently; a
/// missing one is `None`, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Measurements {
    #[serde(rename = "remontes")]
    pub lifts: Option<Measurement>,
    #[serde(rename = "kilometros")]
    pub track_km: Option<Measurement>,
    #[serde(rename = "nieve")]
    pub snow_depth: Option<Measurement>,
}

impl Measurements {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lifts.is_none() && self.track_km.is_none() && self.snow_depth.is_none()
    }
}

/// Terminal state of one extraction attempt, serialized under `estado`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "estado", rename_all = "lowercase")]
pub enum Outcome {
    Success(Measurements),
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    pub slug: ResortSlug,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// When the attempt completed, in local time.
    pub timestamp: DateTime<Local>,
}

impl StatusRecord {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    #[must_use]
    pub fn measurements(&self) -> Option<&Measurements> {
        match &self.outcome {
            Outcome::Success(m) => Some(m),
            Outcome::Error { .. } => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Error { error } => Some(error),
        }
    }
}
