//! Parsing of textual detector label streams.
//!
//! Pipe mode feeds signsh from any external detector process: one line per
//! frame, whitespace-separated tokens in detector output order, each token
//! `LABEL` or `LABEL:CONFIDENCE`. The no-detection token (`-`) or an empty
//! line marks a frame without a detection; lines starting with `#` are
//! comments. Content never fails to parse; unusable tokens degrade to
//! no-detection downstream.

use crate::defaults;
use crate::detect::detector::Detection;

/// Returns true for comment lines that carry no frame.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Parses one frame line into detections, preserving detector order.
///
/// A missing or unparseable confidence defaults to 1.0 so label-only
/// streams from detectors that do not report scores still work.
pub fn parse_line(line: &str) -> Vec<Detection> {
    line.split_whitespace()
        .filter(|token| *token != defaults::NO_DETECTION_TOKEN)
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Detection {
    match token.split_once(':') {
        Some((label, confidence)) => {
            let confidence = confidence.parse::<f32>().unwrap_or(1.0);
            Detection::new(label, confidence)
        }
        None => Detection::new(token, 1.0),
    }
}
