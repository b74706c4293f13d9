//! UI Components for the Gainz Charts application.
//!
//! # Layout Components
//! - [`Header`] - Brand bar
//! - [`Hero`] - Title, instructions and example assets
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - The two CSV file slots and the submit button
//! - [`LoadingNotice`] - Spinner while the request is in flight
//! - [`Gallery`] - Returned plot images with captions
//! - [`ErrorOverlay`] - Full-screen failure notice (reload to dismiss)

mod error_overlay;
mod footer;
mod gallery;
mod header;
mod hero;
mod loading;
mod upload;

pub use error_overlay::*;
pub use footer::*;
pub use gallery::*;
pub use header::*;
pub use hero::*;
pub use loading::*;
pub use upload::*;
