//! signsh - Sign language typing for the terminal
//!
//! Turns per-frame ASL letter detections into readable text. The detector
//! and the camera are injected collaborators; this crate owns the
//! aggregation policy and the session plumbing around it.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod alphabet;
pub mod app;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod detect;
pub mod error;
pub mod explain;
pub mod labels;
pub mod output;
pub mod session;
pub mod sink;

// Core traits (source → detect → aggregate → sink)
pub use detect::detector::{Detection, Detector, reduce_detections};
pub use detect::frame::{FrameSource, VideoFrame};
pub use sink::{CollectorSink, StdoutSink, TextSink};

// Aggregation
pub use alphabet::{FrameLabel, Letter};
pub use session::runner::{CaptureSession, SessionConfig, SessionHandle};
pub use session::transcript::LiveSession;
pub use session::vote::{VoteTally, majority_vote};

// Error handling
pub use error::{Result, SignshError};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.2.0+abc1234"` when git hash is available, `"0.2.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
