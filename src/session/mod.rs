//! Detection-to-text aggregation sessions.
//!
//! One session per stream, owning its own state: [`LiveSession`] debounces
//! an unbounded frame stream into a transcript, [`VoteTally`] majority-votes
//! a finite clip, and [`CaptureSession`] drives a frame source and detector
//! through the live aggregation on a worker thread.

pub mod runner;
pub mod transcript;
pub mod vote;

pub use runner::{CaptureSession, SessionConfig, SessionHandle};
pub use transcript::LiveSession;
pub use vote::{VoteTally, majority_vote};
