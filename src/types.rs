//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Phase** - the single top-level UI state machine
//! - **Slots** - the two file inputs of the upload form
//! - **Errors** - upload failure classification

use std::fmt;

// =============================================================================
// Phase
// =============================================================================

/// Top-level UI phase.
///
/// Transitions are strictly forward: `Collecting` → `Loading` →
/// `Success`/`Error`. The only way back to `Collecting` is a full page
/// reload, which discards every signal. At most one request is ever in
/// flight because the upload form is only mounted while `Collecting`.
#[derive(Clone, Debug, PartialEq)]
pub enum UiPhase {
    /// Waiting for the user to fill both file slots.
    Collecting,
    /// The request has been sent; awaiting the response.
    Loading,
    /// The backend answered with an ordered list of base64 PNG plots.
    Success(Vec<String>),
    /// The request failed; carries the message shown in the overlay.
    Error(String),
}

impl UiPhase {
    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, UiPhase::Loading)
    }
}

// =============================================================================
// Slots
// =============================================================================

/// Identifies one of the two file inputs of the upload form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    /// The workout-tracker CSV export. The only file actually uploaded.
    WorkoutExport,
    /// The exercise-bank CSV mapping exercises to muscle groups.
    ExerciseBank,
}

impl SlotKind {
    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::WorkoutExport => "Workout export",
            SlotKind::ExerciseBank => "Exercise bank",
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Upload failure classification.
///
/// Every variant ends up as the message of the error overlay; the
/// distinction only controls how the message is worded.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadError {
    /// The request never completed (network failure, CORS, bad URL).
    Request(String),
    /// The backend answered with an error; carries its message verbatim.
    Server(String),
    /// The backend answered 2xx but the body was not a usable plot list.
    Payload(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Request(msg) => write!(f, "Could not reach the charting service: {}", msg),
            UploadError::Server(msg) => write!(f, "{}", msg),
            UploadError::Payload(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for UploadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_surfaced_verbatim() {
        let err = UploadError::Server("bad csv".to_string());
        assert_eq!(err.to_string(), "bad csv");
    }

    #[test]
    fn only_loading_phase_reports_in_flight() {
        assert!(UiPhase::Loading.is_loading());
        assert!(!UiPhase::Collecting.is_loading());
        assert!(!UiPhase::Success(vec![]).is_loading());
        assert!(!UiPhase::Error("x".to_string()).is_loading());
    }
}
