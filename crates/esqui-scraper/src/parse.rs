//! Extraction of the three resort indicators from a status page.
//!
//! The page renders each indicator as a `<span>` whose text carries a Spanish
//! label, with the figure in `<strong class="fuentemega">` and its unit or
//! denominator in an `<em>`:
//!
//! ```html
//! <span>Remontes abiertos <strong class="fuentemega">12</strong><em>/20</em></span>
//! ```
//!
//! Label matching is a case-sensitive substring test. A span is assigned to
//! the first category whose label it contains, checked in the order lifts,
//! track, snow. The first span that yields both sub-elements fills its
//! category; later spans for an already-filled category are ignored.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::types::{Measurement, Measurements};

const SPAN: &str = "span";
const VALUE: &str = "strong.fuentemega";
const UNIT: &str = "em";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Lifts,
    Track,
    Snow,
}

impl Category {
    const ALL: [Category; 3] = [Category::Lifts, Category::Track, Category::Snow];

    fn marker(self) -> &'static str {
        match self {
            Category::Lifts => "Remontes",
            Category::Track => "Kilómetros",
            Category::Snow => "Nieve",
        }
    }

    fn classify(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| text.contains(c.marker()))
    }

    fn assemble(self, value: String, unit: &str) -> Measurement {
        match self {
            Category::Lifts | Category::Track => Measurement::ratio(value, unit),
            Category::Snow => Measurement::quantity(value, unit),
        }
    }

    fn slot(self, measurements: &mut Measurements) -> &mut Option<Measurement> {
        match self {
            Category::Lifts => &mut measurements.lifts,
            Category::Track => &mut measurements.track_km,
            Category::Snow => &mut measurements.snow_depth,
        }
    }
}

fn selector(css: &'static str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Selector {
        selector: css,
        reason: format!("{e:?}"),
    })
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Scans every `<span>` of `html` and extracts lifts, track length and snow depth.
///
/// A category whose span is missing, or lacks either sub-element, is left as
/// `None`; that is not an error.
///
/// # Errors
///
/// Returns [`ScraperError::Selector`] if one of the built-in selectors fails to
/// compile.
pub fn parse_measurements(html: &str) -> Result<Measurements, ScraperError> {
    let span_sel = selector(SPAN)?;
    let value_sel = selector(VALUE)?;
    let unit_sel = selector(UNIT)?;

    let document = Html::parse_document(html);
    let mut measurements = Measurements::default();

    for span in document.select(&span_sel) {
        let text = span.text().collect::<String>();
        let Some(category) = Category::classify(&text) else {
            continue;
        };

        let slot = category.slot(&mut measurements);
        if slot.is_some() {
            continue;
        }

        let value = span.select(&value_sel).next().map(trimmed_text);
        let unit = span.select(&unit_sel).next().map(trimmed_text);

        match (value, unit) {
            (Some(value), Some(unit)) => *slot = Some(category.assemble(value, &unit)),
            (value, unit) => tracing::debug!(
                marker = category.marker(),
                has_value = value.is_some(),
                has_unit = unit.is_some(),
                "marker span lacks value or unit element"
            ),
        }
    }

    Ok(measurements)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
