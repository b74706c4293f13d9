//! Application configuration.
//!
//! Centralized configuration for the Gainz Charts frontend.
//! Everything here is hardcoded; there is no runtime configuration
//! surface in the deployed bundle.

/// Charting backend endpoint.
///
/// Receives the workout export as multipart form data and answers
/// with an array of base64-encoded PNG plots.
pub const BACKEND_URL: &str = "http://127.0.0.1:5000/get_gainz";

/// The only content type accepted for either file slot.
///
/// Checked against the browser-declared MIME type; the file itself
/// is never opened client-side.
pub const CSV_MIME: &str = "text/csv";

/// Maximum file size for upload (in bytes).
///
/// Mirrors the backend's 10 MB request limit so oversized exports
/// are rejected before the upload starts.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Path of the downloadable example exercise-bank CSV, served
/// alongside the bundle.
pub const EXAMPLE_BANK_PATH: &str = "/assets/exercise_bank_example.csv";

/// Path of the illustrative chart image shown in the hero section.
/// The image itself is deployed with the other static assets, not
/// generated by this code.
pub const EXAMPLE_CHART_PATH: &str = "/assets/example_chart.png";

/// Application name shown in the header.
pub const APP_NAME: &str = "Gainz Charts";
