use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ResortSlug};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResortConfig {
    pub slug: ResortSlug,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResortsFile {
    pub resorts: Vec<ResortConfig>,
}

/// The fixed list of resorts served by the catalog-wide endpoints, in file order.
#[derive(Debug, Clone, Default)]
pub struct ResortCatalog {
    resorts: Vec<ResortConfig>,
}

impl ResortCatalog {
    /// Builds a catalog from an already-parsed resorts file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the list is empty or a slug
    /// appears twice.
    pub fn from_file(file: ResortsFile) -> Result<Self, ConfigError> {
        validate_resorts(&file)?;
        Ok(Self {
            resorts: file.resorts,
        })
    }

    /// Parses and validates catalog YAML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the YAML is malformed, a slug is not URL-safe,
    /// or validation fails.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let file: ResortsFile = serde_yaml::from_str(content)?;
        Self::from_file(file)
    }

    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.resorts.iter().any(|r| r.slug.as_str() == slug)
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ResortConfig> {
        self.resorts.iter().find(|r| r.slug.as_str() == slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &ResortSlug> {
        self.resorts.iter().map(|r| &r.slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResortConfig> {
        self.resorts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resorts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resorts.is_empty()
    }
}

/// Load and validate the resort catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_resorts(path: &Path) -> Result<ResortCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ResortsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    ResortCatalog::from_yaml(&content)
}

fn validate_resorts(file: &ResortsFile) -> Result<(), ConfigError> {
    if file.resorts.is_empty() {
        return Err(ConfigError::Validation(
            "resort catalog must list at least one resort".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for resort in &file.resorts {
        if !seen.insert(resort.slug.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate resort slug: '{}'",
                resort.slug
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "resorts_test.rs"]
mod tests;
