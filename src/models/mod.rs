//! Domain models for the activity signup server.
//!
//! There is exactly one entity: [`Activity`], an extracurricular offering
//! with descriptive metadata and an ordered roster of participant emails.
//! Participants have no identity of their own; an email exists only as a
//! member of some activity's roster. The remaining types are the request
//! and response shapes the HTTP surface speaks.

mod activity;

pub use activity::*;
