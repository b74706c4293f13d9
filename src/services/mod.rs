//! Backend communication.
//!
//! # Services
//!
//! - [`upload`] - workout export upload to the charting backend

pub mod upload;

pub use upload::*;
