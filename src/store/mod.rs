mod seed;

use std::sync::{Arc, Mutex};

use indexmap::IndexMap;

use crate::models::Activity;

/// Errors a directory operation can produce.
///
/// Each variant corresponds to exactly one guard check; the HTTP layer maps
/// them onto status codes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Already signed up for this activity")]
    AlreadySignedUp,
    #[error("Participant is not registered for this activity")]
    NotRegistered,
}

/// The in-memory activity directory.
///
/// Owns the process-wide map from activity name to [`Activity`] behind a
/// mutex. Handlers get a clone of this handle via router state, so every
/// check-then-mutate sequence (duplicate check + append, lookup + remove)
/// runs under a single lock acquisition and concurrent requests cannot
/// interleave inside it.
///
/// The map is insertion-ordered: listings return activities in seed order
/// and rosters in signup order.
#[derive(Clone)]
pub struct Directory {
    activities: Arc<Mutex<IndexMap<String, Activity>>>,
}

impl Directory {
    /// Create a directory holding the given activities.
    pub fn with_activities(activities: IndexMap<String, Activity>) -> Self {
        Self {
            activities: Arc::new(Mutex::new(activities)),
        }
    }

    /// Create a directory populated with the startup fixture.
    pub fn seeded() -> Self {
        Self::with_activities(seed::initial_activities())
    }

    /// Snapshot of every activity, in insertion order.
    pub fn list_activities(&self) -> IndexMap<String, Activity> {
        let activities = self.activities.lock().expect("directory lock poisoned");
        activities.clone()
    }

    /// Append `email` to the roster of `activity`.
    ///
    /// Fails if the activity does not exist or the email is already on the
    /// roster. The uniqueness check is a linear scan; rosters are small and
    /// the scan keeps insertion-order semantics untouched.
    pub fn signup(&self, activity: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.activities.lock().expect("directory lock poisoned");
        let entry = activities
            .get_mut(activity)
            .ok_or(SignupError::ActivityNotFound)?;

        if entry.participants.iter().any(|p| p == email) {
            return Err(SignupError::AlreadySignedUp);
        }

        entry.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster of `activity`.
    ///
    /// Fails if the activity does not exist or the email is not on the
    /// roster. Remaining participants keep their relative order.
    pub fn unregister(&self, activity: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.activities.lock().expect("directory lock poisoned");
        let entry = activities
            .get_mut(activity)
            .ok_or(SignupError::ActivityNotFound)?;

        let Some(pos) = entry.participants.iter().position(|p| p == email) else {
            return Err(SignupError::NotRegistered);
        };
        entry.participants.remove(pos);
        Ok(())
    }
}
