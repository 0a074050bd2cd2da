//! Streaming debouncer for live detection sessions.
//!
//! A sign held in front of the camera produces the same letter on many
//! consecutive frames. The session collapses those runs into a single
//! appended letter by comparing each detection against the last transcript
//! character only. The comparison is strictly adjacent: a no-detection gap
//! between two identical letters resets it, so `A, none, A` spells `"AA"`.

use crate::alphabet::FrameLabel;

/// One live detection-to-text session.
///
/// Owns the transcript for its lifetime; created empty when the stream
/// starts and consumed by [`LiveSession::finish`] when it ends. One frame
/// label in, one synchronous state step, current transcript out.
///
/// Invariant: no two adjacent transcript characters are ever equal.
#[derive(Debug, Default)]
pub struct LiveSession {
    transcript: String,
    frames: u64,
    detections: u64,
}

impl LiveSession {
    /// Creates a new session with an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one frame label and returns the current transcript.
    ///
    /// A detected letter is appended unless it equals the last transcript
    /// character; a no-detection frame leaves the transcript untouched.
    pub fn process(&mut self, label: FrameLabel) -> &str {
        self.frames += 1;

        if let FrameLabel::Letter(letter) = label {
            self.detections += 1;
            let c = letter.as_char();
            if self.transcript.chars().last() != Some(c) {
                self.transcript.push(c);
            }
        }

        &self.transcript
    }

    /// Returns the current transcript snapshot.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Returns the number of frames processed so far.
    pub fn frames_processed(&self) -> u64 {
        self.frames
    }

    /// Returns the number of frames that carried a detection.
    pub fn detections(&self) -> u64 {
        self.detections
    }

    /// Ends the session and returns the final transcript.
    pub fn finish(self) -> String {
        self.transcript
    }
}
