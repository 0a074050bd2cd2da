//! Shared terminal rendering for aggregation results.
//!
//! Live progress and warnings go to stderr so stdout stays clean for the
//! final transcript or winning letter (pipe-friendly).

use crate::alphabet::{FrameLabel, Letter};
use std::io::{self, Write};

const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Clear the current terminal line (replaces the live transcript line)
pub fn clear_line() {
    eprint!("\r\x1b[2K");
}

/// Redraw the live transcript line in place on stderr.
pub fn render_live_transcript(transcript: &str) {
    eprint!("\r\x1b[2K{DIM}live{RESET} {transcript}");
    let _ = io::stderr().flush();
}

/// Per-frame diagnostic line for -vv runs.
pub fn render_frame_label(frame: u64, label: FrameLabel) {
    eprintln!("{DIM}frame {frame}: {}{RESET}", label_symbol(label));
}

/// Render the clip verdict with its vote share.
pub fn render_winner(letter: Letter, votes: u32, total: u64) {
    println!("{GREEN}✓{RESET} Detected letter: {letter} ({votes} of {total} letter frames)");
}

/// Render a single-frame detection.
pub fn render_detected(letter: Letter) {
    println!("{GREEN}✓{RESET} Detected letter: {letter}");
}

/// Render the handshape description for a letter.
pub fn render_handshape(letter: Letter, description: &str) {
    println!("  {DIM}{letter}:{RESET} {description}");
}

/// Render the no-detection outcome. A warning, not an error.
pub fn render_no_signal() {
    eprintln!("{YELLOW}!{RESET} No hand sign detected.");
}

/// Display symbol for a frame label.
fn label_symbol(label: FrameLabel) -> char {
    match label {
        FrameLabel::Letter(letter) => letter.as_char(),
        FrameLabel::NoDetection => '-',
    }
}
