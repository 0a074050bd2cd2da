//! Default configuration constants for signsh.
//!
//! This module provides shared constants used across configuration and CLI
//! defaults to ensure consistency and eliminate duplication.

/// Default confidence floor for accepting a detection.
///
/// 0.0 keeps every detection the model emits, so the per-frame label is
/// exactly the first box the detector returns. Raise it to drop low-quality
/// boxes before they reach the aggregator.
pub const MIN_CONFIDENCE: f32 = 0.0;

/// Default detection model name.
///
/// Informational for this crate; the model itself is loaded by the
/// embedding application behind the `Detector` trait.
pub const DEFAULT_MODEL: &str = "asl-letters";

/// Token marking a frame with no detection in a label stream.
pub const NO_DETECTION_TOKEN: &str = "-";

/// Placeholder returned when a symbol has no handshape description.
pub const NO_DESCRIPTION: &str = "No description available for this sign.";

/// Number of letters in the fingerspelling alphabet.
pub const ALPHABET_LEN: usize = 26;
