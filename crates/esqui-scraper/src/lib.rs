pub mod client;
pub mod error;
pub mod extract;
pub mod parse;
pub mod types;

pub use client::ResortClient;
pub use error::ScraperError;
pub use parse::parse_measurements;
pub use types::{Measurement, Measurements, Outcome, StatusRecord};
