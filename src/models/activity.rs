use serde::{Deserialize, Serialize};

/// An extracurricular offering students can sign up for.
///
/// Activities are identified by their name, which is the key of the
/// directory map rather than a field here. `max_participants` is
/// descriptive capacity information surfaced in listings; signup does not
/// enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    /// Human-readable meeting times, e.g. "Fridays, 3:30 PM - 5:00 PM".
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order. An email appears at most once.
    pub participants: Vec<String>,
}

/// Query parameters for signup and unregister requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

/// Confirmation body returned by the mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
