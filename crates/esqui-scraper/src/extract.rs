//! The fetch-and-parse boundary.
//!
//! Every failure is folded into an `error` status record here; callers always
//! receive a well-formed [`StatusRecord`].

use chrono::Local;
use esqui_core::ResortSlug;

use crate::client::ResortClient;
use crate::error::ScraperError;
use crate::parse::parse_measurements;
use crate::types::{Measurements, Outcome, StatusRecord};

impl ResortClient {
    /// Fetches and parses one resort page into a status record.
    ///
    /// The display name comes from the slug alone and the timestamp is taken
    /// once the attempt has finished.
    pub async fn extract(&self, slug: &ResortSlug) -> StatusRecord {
        let outcome = match self.scrape(slug).await {
            Ok(measurements) => {
                if measurements.is_empty() {
                    tracing::info!(%slug, "page fetched but no measurements found");
                }
                Outcome::Success(measurements)
            }
            Err(e) => {
                tracing::warn!(%slug, error = %e, transport = e.is_transport(), "resort extraction failed");
                Outcome::Error {
                    error: e.record_message(),
                }
            }
        };

        StatusRecord {
            slug: slug.clone(),
            name: slug.display_name(),
            outcome,
            timestamp: Local::now(),
        }
    }

    /// Extracts each slug in turn, awaiting one fetch before starting the next.
    /// Records come back in input order.
    pub async fn extract_all<'a, I>(&self, slugs: I) -> Vec<StatusRecord>
    where
        I: IntoIterator<Item = &'a ResortSlug>,
    {
        let mut records = Vec::new();
        for slug in slugs {
            records.push(self.extract(slug).await);
        }
        records
    }

    async fn scrape(&self, slug: &ResortSlug) -> Result<Measurements, ScraperError> {
        let html = self.fetch_page(slug).await?;
        parse_measurements(&html)
    }
}
